//! Value types shared by every tagpress crate.
//!
//! A [`Code`] is the short identifier printed on each artifact: exactly
//! [`CODE_LENGTH`] decimal digits with no digit repeated. Codes are drawn by
//! [`CodeGenerator`] from an injectable random source, optionally checked
//! against the run-scoped [`IssuedCodes`] history.

mod code;
mod error;
mod generator;
mod timestamp;

pub use code::{CODE_LENGTH, CODE_SPACE, Code};
pub use error::{CodeError, GenerationError, TimestampFormatError};
pub use generator::{CodeGenerator, IssuedCodes};
pub use timestamp::{DEFAULT_TIMESTAMP_FORMAT, Timestamp, validate_timestamp_format};
