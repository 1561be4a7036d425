use std::path::Path;

use anyhow::Result;

use crate::bam::backend::HtslibBackend;
use crate::bam::is_sorted;

pub fn run(bam_file: String, by_name: bool, sample_size: usize) -> Result<()> {
    let backend = HtslibBackend;
    let order = if by_name { "query name" } else { "position" };

    if is_sorted(&backend, Path::new(&bam_file), by_name, sample_size)? {
        println!(
            "{}: sorted by {} (first {} records)",
            bam_file, order, sample_size
        );
        Ok(())
    } else {
        println!("{}: not sorted by {}", bam_file, order);
        std::process::exit(1);
    }
}
