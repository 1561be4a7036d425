//! Access to alignment files through htslib and the samtools binary.

use std::path::Path;
use std::process::Command;

use rust_htslib::bam::{self, Read};

use crate::error::BamError;

/// A single alignment record, reduced to the fields the probes need.
#[derive(Debug, Clone)]
pub struct ReadRecord {
    /// Reference sequence id; -1 for unplaced reads.
    pub tid: i32,
    /// 0-based leftmost mapping position; -1 for unplaced reads.
    pub pos: i64,
    /// Query (read) name.
    pub qname: String,
    /// Length of the stored sequence; 0 when the record carries none.
    pub seq_len: usize,
    /// Whether the read was assigned a position on a reference.
    pub is_mapped: bool,
}

impl From<&bam::Record> for ReadRecord {
    fn from(record: &bam::Record) -> Self {
        ReadRecord {
            tid: record.tid(),
            pos: record.pos(),
            qname: String::from_utf8_lossy(record.qname()).into_owned(),
            seq_len: record.seq_len(),
            is_mapped: !record.is_unmapped(),
        }
    }
}

/// Capability for reading alignment files and their indices.
///
/// Everything that touches the binary BAM/BAI formats goes through this
/// trait.
pub trait AlignmentReader {
    /// Per-reference index statistics, one line per reference sequence with
    /// four whitespace-separated fields: name, length, mapped, unmapped.
    fn index_stats(&self, path: &Path) -> Result<Vec<String>, BamError>;

    /// Build a BAI index for `path`, written to `<path>.bai`.
    fn build_index(&self, path: &Path) -> Result<(), BamError>;

    /// Open `path` for sequential record iteration.
    fn open_records(
        &self,
        path: &Path,
    ) -> Result<Box<dyn Iterator<Item = Result<ReadRecord, BamError>>>, BamError>;
}

/// Verify the samtools binary is reachable before shelling out to it.
pub fn check_samtools() -> Result<(), BamError> {
    Command::new("samtools")
        .arg("--version")
        .output()
        .map(|_| ())
        .map_err(|_| BamError::SamtoolsMissing)
}

/// Production backend: htslib for record access, the samtools binary for
/// index statistics and index building.
pub struct HtslibBackend;

impl AlignmentReader for HtslibBackend {
    fn index_stats(&self, path: &Path) -> Result<Vec<String>, BamError> {
        let output = Command::new("samtools")
            .arg("idxstats")
            .arg(path)
            .output()?;
        if !output.status.success() {
            return Err(BamError::Samtools {
                command: "idxstats".to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn build_index(&self, path: &Path) -> Result<(), BamError> {
        let mut bai = path.as_os_str().to_os_string();
        bai.push(".bai");
        let output = Command::new("samtools")
            .arg("index")
            .arg(path)
            .arg(&bai)
            .output()?;
        if !output.status.success() {
            return Err(BamError::Samtools {
                command: "index".to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        Ok(())
    }

    fn open_records(
        &self,
        path: &Path,
    ) -> Result<Box<dyn Iterator<Item = Result<ReadRecord, BamError>>>, BamError> {
        let reader = bam::Reader::from_path(path)?;
        Ok(Box::new(RecordIter {
            reader,
            record: bam::Record::new(),
        }))
    }
}

struct RecordIter {
    reader: bam::Reader,
    record: bam::Record,
}

impl Iterator for RecordIter {
    type Item = Result<ReadRecord, BamError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read(&mut self.record) {
            Some(Ok(())) => Some(Ok(ReadRecord::from(&self.record))),
            Some(Err(e)) => Some(Err(e.into())),
            None => None,
        }
    }
}
