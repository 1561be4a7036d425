//! Mapped-read counts from the BAM index.

use std::path::Path;

use serde::Serialize;

use super::backend::AlignmentReader;
use crate::error::BamError;

/// Per-reference alignment counts, one `samtools idxstats` line.
#[derive(Debug, Clone, Serialize)]
pub struct IdxStat {
    /// Reference sequence name (`*` for unplaced reads).
    pub name: String,
    /// Reference sequence length.
    pub length: u64,
    /// Number of mapped reads on this reference.
    pub mapped: u64,
    /// Number of unmapped reads placed on this reference.
    pub unmapped: u64,
}

fn parse_stats_line(line: &str) -> Result<IdxStat, BamError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 4 {
        return Err(BamError::Format {
            line: line.to_string(),
        });
    }
    let number = |field: &str| {
        field.parse::<u64>().map_err(|_| BamError::Format {
            line: line.to_string(),
        })
    };
    Ok(IdxStat {
        name: fields[0].to_string(),
        length: number(fields[1])?,
        mapped: number(fields[2])?,
        unmapped: number(fields[3])?,
    })
}

/// Per-reference index statistics for `path`, in file order.
///
/// With `drop_unmapped`, references without any mapped reads (including the
/// `*` row for unplaced reads) are removed.
pub fn idxstats(
    reader: &dyn AlignmentReader,
    path: &Path,
    drop_unmapped: bool,
) -> Result<Vec<IdxStat>, BamError> {
    let mut stats = Vec::new();
    for line in reader.index_stats(path)? {
        stats.push(parse_stats_line(&line)?);
    }
    if drop_unmapped {
        stats.retain(|stat| stat.mapped != 0);
    }
    Ok(stats)
}

/// Count the total number of mapped reads in a BAM file.
///
/// Uses the BAM index to do this quickly; the file must already be indexed
/// (see [`ensure_index`](super::index::ensure_index)).
pub fn total_mapped_reads(reader: &dyn AlignmentReader, path: &Path) -> Result<u64, BamError> {
    let mut total = 0;
    for line in reader.index_stats(path)? {
        total += parse_stats_line(&line)?.mapped;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::bam::backend::mock::MockBackend;

    #[test]
    fn totals_the_mapped_column() {
        let backend = MockBackend::with_stats(&[
            "chr1\t248956422\t1000\t5",
            "chr2 242193529 250 0",
            "*\t0\t0\t17",
        ]);
        let total = total_mapped_reads(&backend, Path::new("sample.bam")).unwrap();
        assert_eq!(total, 1250);
    }

    #[test]
    fn no_references_sums_to_zero() {
        let backend = MockBackend::with_stats(&[]);
        let total = total_mapped_reads(&backend, Path::new("sample.bam")).unwrap();
        assert_eq!(total, 0);
    }

    #[test]
    fn rejects_line_with_too_few_fields() {
        let backend = MockBackend::with_stats(&["chr1\t100\t5"]);
        let err = total_mapped_reads(&backend, Path::new("sample.bam")).unwrap_err();
        assert!(matches!(err, BamError::Format { .. }));
    }

    #[test]
    fn rejects_line_with_too_many_fields() {
        let backend = MockBackend::with_stats(&["chr1 100 5 0 9"]);
        let err = total_mapped_reads(&backend, Path::new("sample.bam")).unwrap_err();
        assert!(matches!(err, BamError::Format { .. }));
    }

    #[test]
    fn rejects_non_numeric_count() {
        let backend = MockBackend::with_stats(&["chr1 100 many 0"]);
        let err = total_mapped_reads(&backend, Path::new("sample.bam")).unwrap_err();
        assert!(matches!(err, BamError::Format { .. }));
    }

    #[test]
    fn idxstats_preserves_file_order() {
        let backend =
            MockBackend::with_stats(&["chr2\t2000\t1\t0", "chr1\t1000\t2\t0", "*\t0\t0\t3"]);
        let stats = idxstats(&backend, Path::new("sample.bam"), false).unwrap();
        let names: Vec<&str> = stats.iter().map(|stat| stat.name.as_str()).collect();
        assert_eq!(names, ["chr2", "chr1", "*"]);
        assert_eq!(stats[0].unmapped, 0);
        assert_eq!(stats[2].unmapped, 3);
    }

    #[test]
    fn idxstats_drop_unmapped_removes_zero_mapped_rows() {
        let backend = MockBackend::with_stats(&[
            "chr1\t1000\t2\t0",
            "chrM\t16569\t0\t0",
            "*\t0\t0\t3",
        ]);
        let stats = idxstats(&backend, Path::new("sample.bam"), true).unwrap();
        let names: Vec<&str> = stats.iter().map(|stat| stat.name.as_str()).collect();
        assert_eq!(names, ["chr1"]);
    }
}
