//! BAM index freshness and regeneration.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

use super::backend::AlignmentReader;
use crate::error::BamError;

/// Ensure `bam_path` has a current BAI index, to enable fast traversal
/// and lookup.
///
/// For MySample.bam, samtools will look for an index in these files, in
/// order:
///
/// - `MySample.bam.bai`
/// - `MySample.bai`
///
/// Both spellings are accepted here; a rebuilt index always lands at the
/// first one. An existing index counts as current when its modification
/// time is not older than the BAM file's. Returns the path to the valid
/// index.
pub fn ensure_index(reader: &dyn AlignmentReader, bam_path: &Path) -> Result<PathBuf, BamError> {
    let mut bai_path = appended_index_path(bam_path);
    if !bai_path.is_file() {
        bai_path = companion_index_path(bam_path);
    }
    if !is_newer_or_equal(&bai_path, bam_path)? {
        info!("indexing BAM file {}", bam_path.display());
        reader.build_index(bam_path)?;
        bai_path = appended_index_path(bam_path);
    }
    if !bai_path.is_file() {
        return Err(BamError::IndexGeneration { path: bai_path });
    }
    Ok(bai_path)
}

/// `MySample.bam` -> `MySample.bam.bai`
fn appended_index_path(bam_path: &Path) -> PathBuf {
    let mut name = bam_path.as_os_str().to_os_string();
    name.push(".bai");
    PathBuf::from(name)
}

/// `MySample.bam` -> `MySample.bai`
fn companion_index_path(bam_path: &Path) -> PathBuf {
    let mut name = bam_path.to_string_lossy().into_owned();
    name.pop();
    name.push('i');
    PathBuf::from(name)
}

/// Whether `target` exists and its modification time is at least
/// `reference`'s. Looks only at filesystem metadata.
pub fn is_newer_or_equal(target: &Path, reference: &Path) -> io::Result<bool> {
    if !target.is_file() {
        return Ok(false);
    }
    let target_mtime = fs::metadata(target)?.modified()?;
    let reference_mtime = fs::metadata(reference)?.modified()?;
    Ok(target_mtime >= reference_mtime)
}

#[cfg(test)]
mod tests {
    use std::fs::{self, OpenOptions};
    use std::path::Path;
    use std::time::{Duration, SystemTime};

    use super::*;
    use crate::bam::backend::mock::MockBackend;

    fn touch(path: &Path) {
        fs::write(path, b"x").unwrap();
    }

    fn mtime(path: &Path) -> SystemTime {
        fs::metadata(path).unwrap().modified().unwrap()
    }

    fn set_mtime(path: &Path, to: SystemTime) {
        let file = OpenOptions::new().write(true).open(path).unwrap();
        file.set_modified(to).unwrap();
    }

    #[test]
    fn reuses_current_appended_index() {
        let dir = tempfile::tempdir().unwrap();
        let bam = dir.path().join("sample.bam");
        let bai = dir.path().join("sample.bam.bai");
        touch(&bam);
        touch(&bai);
        set_mtime(&bai, mtime(&bam));

        let backend = MockBackend::default();
        let result = ensure_index(&backend, &bam).unwrap();
        assert_eq!(result, bai);
        assert_eq!(backend.builds.get(), 0);
    }

    #[test]
    fn falls_back_to_companion_index_name() {
        let dir = tempfile::tempdir().unwrap();
        let bam = dir.path().join("sample.bam");
        let bai = dir.path().join("sample.bai");
        touch(&bam);
        touch(&bai);
        set_mtime(&bai, mtime(&bam));

        let backend = MockBackend::default();
        let result = ensure_index(&backend, &bam).unwrap();
        assert_eq!(result, bai);
        assert_eq!(backend.builds.get(), 0);
    }

    #[test]
    fn rebuilds_stale_index() {
        let dir = tempfile::tempdir().unwrap();
        let bam = dir.path().join("sample.bam");
        let bai = dir.path().join("sample.bam.bai");
        touch(&bam);
        touch(&bai);
        set_mtime(&bai, mtime(&bam) - Duration::from_secs(10));

        let backend = MockBackend::default();
        let result = ensure_index(&backend, &bam).unwrap();
        assert_eq!(result, bai);
        assert_eq!(backend.builds.get(), 1);
    }

    #[test]
    fn builds_missing_index_once() {
        let dir = tempfile::tempdir().unwrap();
        let bam = dir.path().join("sample.bam");
        touch(&bam);

        let backend = MockBackend::default();
        let first = ensure_index(&backend, &bam).unwrap();
        assert_eq!(first, dir.path().join("sample.bam.bai"));
        assert_eq!(backend.builds.get(), 1);

        // The freshly built index is current, so the second call skips
        // regeneration.
        let second = ensure_index(&backend, &bam).unwrap();
        assert_eq!(second, first);
        assert_eq!(backend.builds.get(), 1);
    }

    #[test]
    fn fails_when_build_produces_no_index() {
        let dir = tempfile::tempdir().unwrap();
        let bam = dir.path().join("sample.bam");
        touch(&bam);

        let backend = MockBackend {
            create_index_on_build: false,
            ..Default::default()
        };
        let err = ensure_index(&backend, &bam).unwrap_err();
        assert!(matches!(err, BamError::IndexGeneration { .. }));
        assert_eq!(backend.builds.get(), 1);
    }

    #[test]
    fn missing_target_is_not_newer() {
        let dir = tempfile::tempdir().unwrap();
        let bam = dir.path().join("sample.bam");
        touch(&bam);
        assert!(!is_newer_or_equal(&dir.path().join("absent.bai"), &bam).unwrap());
    }

    #[test]
    fn equal_mtime_counts_as_current() {
        let dir = tempfile::tempdir().unwrap();
        let bam = dir.path().join("sample.bam");
        let bai = dir.path().join("sample.bam.bai");
        touch(&bam);
        touch(&bai);
        set_mtime(&bai, mtime(&bam));
        assert!(is_newer_or_equal(&bai, &bam).unwrap());
    }
}
