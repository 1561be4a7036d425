use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count the total mapped reads in a BAM file using its index
    Count {
        /// Path to the BAM file
        bam_file: String,
    },

    /// Ensure a BAM file has a current index, building one if needed
    Index {
        /// Path to the BAM file
        bam_file: String,
    },

    /// Print per-reference mapped/unmapped read counts
    Idxstats {
        /// Path to the BAM file
        bam_file: String,

        /// Emit JSON instead of the tab-separated table
        #[arg(long)]
        json: bool,

        /// Skip references without mapped reads
        #[arg(long)]
        drop_unmapped: bool,
    },

    /// Check whether the first records of a BAM file are sorted
    CheckSort {
        /// Path to the BAM file
        bam_file: String,

        /// Expect query-name order instead of position order
        #[arg(long)]
        by_name: bool,

        /// Number of records to inspect (default: 50)
        #[arg(long, default_value = "50")]
        sample_size: usize,
    },

    /// Estimate the median read length from the first records
    ReadLength {
        /// Path to the BAM file
        bam_file: String,

        /// Number of records to sample (default: 1000)
        #[arg(long, default_value = "1000")]
        span: usize,
    },
}
