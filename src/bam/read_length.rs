//! Read-length estimation from a prefix sample.

use std::path::Path;

use super::backend::AlignmentReader;
use crate::error::BamError;

/// Number of records sampled by default.
pub const DEFAULT_SPAN: usize = 1000;

/// Median read length over the first `span` records that carry sequence
/// data, rounded to the nearest base.
///
/// Returns `None` when none of the sampled records have sequence data.
pub fn median_read_length(
    reader: &dyn AlignmentReader,
    path: &Path,
    span: usize,
) -> Result<Option<u32>, BamError> {
    let mut lengths = Vec::new();
    for record in reader.open_records(path)?.take(span) {
        let record = record?;
        if record.seq_len > 0 {
            lengths.push(record.seq_len);
        }
    }
    if lengths.is_empty() {
        return Ok(None);
    }
    lengths.sort_unstable();
    let mid = lengths.len() / 2;
    let median = if lengths.len() % 2 == 0 {
        (lengths[mid - 1] + lengths[mid]).div_ceil(2)
    } else {
        lengths[mid]
    };
    Ok(Some(median as u32))
}
