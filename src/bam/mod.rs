//! Conveniences around BAM alignment files and their indices.
//!
//! Everything that parses the binary BAM/BAI formats sits behind the
//! [`AlignmentReader`](backend::AlignmentReader) capability; the functions
//! here only add the control flow around it.

pub mod backend;
pub mod index;
pub mod read_length;
pub mod sort;
pub mod stats;

pub use backend::{check_samtools, AlignmentReader, HtslibBackend, ReadRecord};
pub use index::{ensure_index, is_newer_or_equal};
pub use read_length::{median_read_length, DEFAULT_SPAN};
pub use sort::{is_sorted, DEFAULT_SAMPLE_SIZE};
pub use stats::{idxstats, total_mapped_reads, IdxStat};
