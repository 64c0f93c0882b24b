//! Emptiness of bound values.

use std::collections::{BTreeSet, HashSet, VecDeque};

/// Types a [`UrlSync`](super::UrlSync) binding can hold.
///
/// An empty value removes its query parameter whatever the default is, so
/// `?ids=` never appears for an empty list, independent of the codec in use.
/// Scalars are never empty; an empty string is still written when it differs
/// from the default.
pub trait BoundValue {
    fn is_empty_value(&self) -> bool {
        false
    }
}

macro_rules! scalar_bound_value {
    ($($t:ty),* $(,)?) => {
        $(impl BoundValue for $t {})*
    };
}

scalar_bound_value!(
    bool, char, String, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32,
    f64,
);

impl<T> BoundValue for Vec<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> BoundValue for VecDeque<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> BoundValue for BTreeSet<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T, S> BoundValue for HashSet<T, S> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}
