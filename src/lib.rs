//! Support library for generating API loader code from API registries.
//!
//! Two components carry the interesting logic:
//! - `api`: parse compact API selectors (`gl:core=4.6,gles2=3.2`) into
//!   resolved (specification, version, profile) triples.
//! - `order`: round-based dependency ordering of features/extensions.
//!
//! The rest (`tree`, `memo`, `fs`) are small helpers used by the emitters.

pub mod api;
pub mod error;
pub mod fs;
pub mod logging;
pub mod memo;
pub mod order;
pub mod tree;

pub use error::Error;

pub type Result<T> = std::result::Result<T, Error>;
