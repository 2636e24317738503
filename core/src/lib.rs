//! # Registrar Core
//!
//! * [`codec`]: the pipe-delimited line format for students and courses.
//! * [`flat_file`]: the text-file adapter for the storage traits.
//! * [`registry`]: the service owning the records and their use cases.

pub mod codec;
pub mod flat_file;
pub mod registry;

pub use flat_file::{FlatFileStore, Loaded, SkippedLine};
pub use registry::Registry;
