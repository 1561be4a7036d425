use clap::Parser;
use tracing_subscriber::EnvFilter;

use bamkit::cli::{self, Args};
use bamkit::commands;

fn main() {
    let args = Args::parse();

    // Initialize logging based on verbosity flag
    let filter = if args.verbose {
        EnvFilter::new("bamkit=debug,info")
    } else {
        EnvFilter::new("bamkit=info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    let result = match args.command {
        cli::Commands::Count { bam_file } => commands::count::run(bam_file),
        cli::Commands::Index { bam_file } => commands::index::run(bam_file),
        cli::Commands::Idxstats {
            bam_file,
            json,
            drop_unmapped,
        } => commands::idxstats::run(bam_file, json, drop_unmapped),
        cli::Commands::CheckSort {
            bam_file,
            by_name,
            sample_size,
        } => commands::check_sort::run(bam_file, by_name, sample_size),
        cli::Commands::ReadLength { bam_file, span } => commands::read_length::run(bam_file, span),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
