use std::path::Path;

use anyhow::Result;

use crate::bam::backend::{check_samtools, HtslibBackend};
use crate::bam::{ensure_index, total_mapped_reads};

pub fn run(bam_file: String) -> Result<()> {
    check_samtools()?;

    let backend = HtslibBackend;
    let bam_path = Path::new(&bam_file);
    ensure_index(&backend, bam_path)?;

    let total = total_mapped_reads(&backend, bam_path)?;
    println!("{}", total);
    Ok(())
}
