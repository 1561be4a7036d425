use std::path::PathBuf;

use thiserror::Error;

/// Errors from the alignment-file utilities.
#[derive(Debug, Error)]
pub enum BamError {
    /// An index statistics line did not hold the expected four fields.
    #[error("malformed index stats line: {line:?}")]
    Format { line: String },

    /// Index generation ran but the expected index file never appeared.
    #[error("failed to generate index {}", .path.display())]
    IndexGeneration { path: PathBuf },

    #[error("samtools not found. Please install samtools (http://www.htslib.org/) and ensure it's in your PATH")]
    SamtoolsMissing,

    #[error("samtools {command} failed: {stderr}")]
    Samtools { command: String, stderr: String },

    #[error(transparent)]
    Hts(#[from] rust_htslib::errors::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
