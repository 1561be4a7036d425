use std::path::Path;

use anyhow::Result;

use crate::bam::backend::{check_samtools, HtslibBackend};
use crate::bam::idxstats;

pub fn run(bam_file: String, json: bool, drop_unmapped: bool) -> Result<()> {
    check_samtools()?;

    let backend = HtslibBackend;
    let stats = idxstats(&backend, Path::new(&bam_file), drop_unmapped)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        for stat in &stats {
            println!(
                "{}\t{}\t{}\t{}",
                stat.name, stat.length, stat.mapped, stat.unmapped
            );
        }
    }
    Ok(())
}
