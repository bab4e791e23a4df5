//! Domain error types and the crate-wide `Result` alias.
//!
//! All fallible library operations outside the masking hot path return
//! [`Result<T>`], whose error is [`DocmaskError`]. Masker input problems are
//! described by the narrower [`MaskError`], which converts into
//! [`DocmaskError::Mask`] with `?`.
//!
//! ```rust
//! use docmask::domain::{DocmaskError, Result};
//!
//! fn example() -> Result<()> {
//!     Err(DocmaskError::Validation("empty input".to_string()))
//! }
//! ```

pub mod errors;
pub mod result;

pub use errors::{DocmaskError, MaskError};
pub use result::Result;
