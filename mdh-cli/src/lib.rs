//! File boundary for the markdown2html binary.
//!
//! The pipeline crate never touches the filesystem; this crate checks the
//! input path, reads it, runs the pipeline and writes the result.

pub mod convert;
pub mod error;

pub use convert::{convert_file, ensure_input_exists, ConvertSummary};
pub use error::CliError;
