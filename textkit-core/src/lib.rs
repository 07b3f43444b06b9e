//! Textkit Core - Fundamental types
//!
//! This crate provides the types shared by every textkit crate:
//! - `TextError`: Structured validation and lookup errors
//! - `ErrorKind`: The error taxonomy
//! - `PatternError`: Registry-level failures, convertible into `TextError`

mod error;

pub use error::{codes, ErrorContext, ErrorKind, PatternError, TextError};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{ErrorKind, PatternError, TextError};
    pub use crate::error::codes;
}
