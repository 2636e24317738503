//! # Registrar Common
//!
//! Types shared by every registrar crate: the record models and their list
//! container, the roll-number counter, the error type, runtime configuration,
//! and the storage traits implemented by the core's adapters.

pub mod config;
pub mod error;
pub mod records;
pub mod roll;
pub mod store;

pub use error::{CorruptReason, RecordError, RecordKind, Result};
