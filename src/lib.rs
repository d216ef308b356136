//! Etag: HTTP entity tags from streaming hash digests
//!
//! Wraps a borrowed hash accumulator and renders its current digest as an
//! ETag header value:
//!
//! - Strong form: `"<hex>"`
//! - Weak form: `W/"<hex>"`
//! - Configurable number of lowercase hex digits, clamped to the digest size

pub mod hash;
pub mod etag;
pub mod error;

pub use crate::etag::{effective_length, Etag, DEFAULT_LENGTH};
pub use crate::hash::Accumulator;
pub use crate::error::Error;

pub type Result<T> = std::result::Result<T, Error>;
