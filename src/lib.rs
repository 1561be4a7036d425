pub mod bam;
pub mod cli;
pub mod commands;
mod error;

// Re-export the core API
pub use bam::backend::{AlignmentReader, HtslibBackend, ReadRecord};
pub use bam::{
    ensure_index, idxstats, is_newer_or_equal, is_sorted, median_read_length, total_mapped_reads,
    IdxStat,
};
pub use error::BamError;
