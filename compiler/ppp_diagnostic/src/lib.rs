//! Diagnostic system for PPP error reporting.
//!
//! Every phase reports failures as a [`Diagnostic`]:
//! - an [`ErrorCode`] for `--explain` lookups
//! - a message saying what went wrong
//! - labels pointing at the offending token (line, column, width)
//! - notes with extra context
//!
//! Rendering is done by an emitter given an explicit, read-only
//! [`SourceLines`] context; no phase keeps a global copy of the source.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;
mod source;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
pub use source::SourceLines;
