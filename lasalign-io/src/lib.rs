//! lasalign-io: File I/O for lasalign.
//!
//! This crate reads binary simulated-hit files through memory maps
//! (memmap2) and writes hits, generated primaries and analysis results.
//!

mod error;
pub mod format;
mod json;
mod reader;
mod writer;

pub use error::{Error, Result};
pub use json::{read_analyzer_config, write_analysis_json};
pub use reader::{MappedFileReader, SimHitFileReader};
pub use writer::DataFileWriter;
