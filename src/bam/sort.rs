//! Heuristic sort-order probe.

use std::path::Path;

use super::backend::{AlignmentReader, ReadRecord};
use crate::error::BamError;

/// Number of records inspected by default.
pub const DEFAULT_SAMPLE_SIZE: usize = 50;

/// Test if the reads in a BAM file are sorted as expected.
///
/// `by_name == true`: reads are expected to be sorted by query name.
/// Consecutive read names are in alphabetical order, and read pairs appear
/// together. `by_name == false`: reads are sorted by position, with
/// non-decreasing positions within each reference sequence.
///
/// Only the first `sample_size` records are inspected, so this is a
/// heuristic: a file ordered in the sampled prefix but out of order later
/// is still reported sorted.
// TODO: re-sample at 50% and ~99% through the BAM to catch late disorder.
pub fn is_sorted(
    reader: &dyn AlignmentReader,
    path: &Path,
    by_name: bool,
    sample_size: usize,
) -> Result<bool, BamError> {
    let records = reader.open_records(path)?;
    let mut prev: Option<ReadRecord> = None;
    for record in records.take(sample_size) {
        let record = record?;
        if let Some(prev) = &prev {
            let in_order = if by_name {
                prev.qname <= record.qname
            } else {
                record.tid != prev.tid || prev.pos <= record.pos
            };
            if !in_order {
                return Ok(false);
            }
        }
        prev = Some(record);
    }
    Ok(true)
}
