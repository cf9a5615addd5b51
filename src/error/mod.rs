//! Error types for validation failures.
//!
//! This module provides the filter-level signals ([`ProcessError`]) raised
//! while processing a single input, and the user-facing types
//! ([`ValidationError`], [`ValidationErrors`]) the driver produces from them.

mod process_error;
mod validation_error;

pub use process_error::{ErrorKind, ProcessError};
pub use validation_error::{ValidationError, ValidationErrors};
