use std::path::Path;

use anyhow::Result;

use crate::bam::backend::{check_samtools, HtslibBackend};
use crate::bam::ensure_index;

pub fn run(bam_file: String) -> Result<()> {
    check_samtools()?;

    let backend = HtslibBackend;
    let bai = ensure_index(&backend, Path::new(&bam_file))?;
    println!("{}", bai.display());
    Ok(())
}
