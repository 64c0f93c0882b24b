//! A value mirrored into one query parameter of a [`Location`].

use std::fmt;

use crate::url_model::{get_query_param, set_query_param, ParamValue};

use super::codec::{DisplayCodec, ParamCodec};
use super::location::Location;
use super::value::BoundValue;

type Validator<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Keeps a typed value and the query parameter `key` consistent.
///
/// The value is read from the location when the binding is created. Each
/// [`set`](Self::set) stores the new value and rewrites only `key` in the
/// current href through a non-navigating replace. A value that serializes to
/// the same text as the default, or that is empty (see [`BoundValue`]),
/// removes the parameter instead.
pub struct UrlSync<T, L, C = DisplayCodec> {
    location: L,
    key: String,
    default: T,
    codec: C,
    validator: Option<Validator<T>>,
    value: T,
}

impl<T, L> UrlSync<T, L, DisplayCodec>
where
    T: Clone + BoundValue,
    L: Location,
    DisplayCodec: ParamCodec<T>,
{
    pub fn new(location: L, key: impl Into<String>, default: T) -> Self {
        Self::with_codec(location, key, default, DisplayCodec)
    }
}

impl<T, L, C> UrlSync<T, L, C>
where
    T: Clone + BoundValue,
    L: Location,
    C: ParamCodec<T>,
{
    pub fn with_codec(location: L, key: impl Into<String>, default: T, codec: C) -> Self {
        let mut binding = Self {
            location,
            key: key.into(),
            value: default.clone(),
            default,
            codec,
            validator: None,
        };
        binding.value = binding.read_from_location();
        binding
    }

    /// Reject deserialized values for which `validator` returns false.
    ///
    /// The current value is re-derived from the location with the validator
    /// in place.
    pub fn validate(mut self, validator: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        self.validator = Some(Box::new(validator));
        self.value = self.read_from_location();
        self
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn default_value(&self) -> &T {
        &self.default
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn set(&mut self, value: T) {
        self.value = value;
        self.write_to_location();
    }

    /// Set the value computed from the previous one.
    pub fn update(&mut self, f: impl FnOnce(&T) -> T) {
        let next = f(&self.value);
        self.set(next);
    }

    /// Re-derive the value from the location, as a page reload would.
    pub fn reload(&mut self) {
        self.value = self.read_from_location();
    }

    fn read_from_location(&self) -> T {
        let href = self.location.href();
        let Some(raw) = get_query_param(&href, &self.key) else {
            return self.default.clone();
        };
        match self.codec.deserialize(&raw) {
            Some(value) if self.accepts(&value) => value,
            Some(_) => {
                tracing::debug!(key = %self.key, raw = %raw, "query value rejected by validator, using default");
                self.default.clone()
            }
            None => {
                tracing::debug!(key = %self.key, raw = %raw, "query value does not deserialize, using default");
                self.default.clone()
            }
        }
    }

    fn accepts(&self, value: &T) -> bool {
        self.validator.as_ref().map_or(true, |validate| validate(value))
    }

    fn write_to_location(&self) {
        let serialized = self.codec.serialize(&self.value);
        let remove =
            self.value.is_empty_value() || serialized == self.codec.serialize(&self.default);
        let param = if remove {
            ParamValue::Null
        } else {
            ParamValue::Str(serialized)
        };
        let key = self.key.as_str();
        self.location
            .update(&mut |href: &str| set_query_param(href, key, param.clone()));
        tracing::trace!(key, removed = remove, "query parameter written");
    }
}

impl<T, L, C> fmt::Debug for UrlSync<T, L, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrlSync")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("default", &self.default)
            .field("validated", &self.validator.is_some())
            .finish()
    }
}
