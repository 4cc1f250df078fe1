//! The [`VcfFrameError`] `enum` definition and error messages.
//!
use std::path::PathBuf;
use thiserror::Error;

/// The [`VcfFrameError`] defines the standard set of errors that should
/// be passed to the user.
#[derive(Debug, Error)]
pub enum VcfFrameError {
    // IO related errors
    #[error("File reading error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Cannot read '{}': {}", .path.display(), .reason)]
    UnreadableFile { path: PathBuf, reason: String },

    // Header errors
    #[error("No '#CHROM' header line found before the first data line")]
    MissingHeader,
    #[error("Malformed '#CHROM' header line: {0}")]
    MalformedHeader(String),

    // Sample selection errors
    #[error("Sample '{0}' not found in this VCF")]
    UnknownSample(String),

    // Per-record errors. These carry the 1-based physical line number and
    // the offending line so the user can find it.
    #[error("Malformed record at line {line}: {reason}\nLine: {contents}")]
    MalformedRecord {
        line: u64,
        reason: String,
        contents: String,
    },

    // Table container errors
    #[error("DataFrame error: {0}")]
    PolarsError(#[from] polars::error::PolarsError),

    // Command line tool related errors
    #[error("Command line argument error: {0}")]
    ArgumentError(#[from] clap::error::Error),
}
