use anyhow::Result;
use clap::Parser;
use log::{debug, info};

use std::{path::PathBuf, process::ExitCode, time::Instant};

use sales_total::{compute, read_json_file, REPORT_FILE_NAME};

/// Compute total sales from a price catalogue JSON and a sales record JSON.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Path to the price catalogue JSON
    price_catalogue: PathBuf,
    /// Path to the sales record JSON
    sales_record: PathBuf,
    /// Where to write the report
    #[arg(short, long, default_value = REPORT_FILE_NAME)]
    output: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        debug!("{e:?}");
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<()> {
    let start = Instant::now();
    let catalog_data = read_json_file(&args.price_catalogue)?;
    let sales_data = read_json_file(&args.sales_record)?;
    info!(
        "computing sales for {} against {}",
        args.sales_record.display(),
        args.price_catalogue.display()
    );
    let report = compute(&catalog_data, &sales_data).with_elapsed(start.elapsed());
    println!("{report}");
    report.write_to(&args.output)?;
    Ok(())
}
