//! String codecs between bound values and query parameter text.

use std::fmt::Display;
use std::str::FromStr;

/// Converts a bound value to and from its query parameter text.
///
/// `deserialize` returns `None` for text it cannot read; the binding then falls
/// back to its default.
pub trait ParamCodec<T> {
    fn serialize(&self, value: &T) -> String;

    fn deserialize(&self, raw: &str) -> Option<T>;
}

/// `Display` out, `FromStr` in.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayCodec;

impl<T> ParamCodec<T> for DisplayCodec
where
    T: Display + FromStr,
{
    fn serialize(&self, value: &T) -> String {
        value.to_string()
    }

    fn deserialize(&self, raw: &str) -> Option<T> {
        raw.parse().ok()
    }
}

/// Comma-joined list of strings. Empty items are dropped when reading.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayCodec;

/// Codec for `Vec<String>` parameters such as `?tags=rust,wasm`.
pub fn array_serializer() -> ArrayCodec {
    ArrayCodec
}

impl ParamCodec<Vec<String>> for ArrayCodec {
    fn serialize(&self, value: &Vec<String>) -> String {
        value.join(",")
    }

    fn deserialize(&self, raw: &str) -> Option<Vec<String>> {
        Some(
            raw.split(',')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }
}

/// Codec built from a pair of closures.
pub struct FnCodec<S, D> {
    serialize: S,
    deserialize: D,
}

pub fn codec_fn<T, S, D>(serialize: S, deserialize: D) -> FnCodec<S, D>
where
    S: Fn(&T) -> String,
    D: Fn(&str) -> Option<T>,
{
    FnCodec {
        serialize,
        deserialize,
    }
}

impl<T, S, D> ParamCodec<T> for FnCodec<S, D>
where
    S: Fn(&T) -> String,
    D: Fn(&str) -> Option<T>,
{
    fn serialize(&self, value: &T) -> String {
        (self.serialize)(value)
    }

    fn deserialize(&self, raw: &str) -> Option<T> {
        (self.deserialize)(raw)
    }
}
