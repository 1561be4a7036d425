use std::path::Path;

use anyhow::{bail, Result};

use crate::bam::backend::HtslibBackend;
use crate::bam::median_read_length;

pub fn run(bam_file: String, span: usize) -> Result<()> {
    let backend = HtslibBackend;
    match median_read_length(&backend, Path::new(&bam_file), span)? {
        Some(length) => println!("{}", length),
        None => bail!(
            "no reads with sequence data in the first {} records of {}",
            span,
            bam_file
        ),
    }
    Ok(())
}
