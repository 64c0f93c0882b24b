//! Query-parameter state binding.
//!
//! A [`UrlSync`] mirrors one typed value into one query parameter of a
//! [`Location`]. It reads the parameter once when created and rewrites it on
//! every change with a non-navigating replace. Bindings with distinct keys can
//! share a location; each one only ever touches its own key.
//!
//! There is no back/forward listener and no persistence: re-deriving state
//! after a reload is just [`UrlSync::reload`] (or a fresh binding) against the
//! same href.

mod binding;
mod codec;
mod location;
mod value;

pub use binding::UrlSync;
pub use codec::{array_serializer, codec_fn, ArrayCodec, DisplayCodec, FnCodec, ParamCodec};
pub use location::{Location, MemoryHistory};
pub use value::BoundValue;
