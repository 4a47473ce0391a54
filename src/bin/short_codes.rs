use clap::Parser;
use std::fs::File;
use std::io;
use std::path::PathBuf;

use dayi::{
    derive_all,
    io_utils::{dayi_cli_error, io_cli_error, simple_cli_error},
    load_dir, normalize, MappingTable,
};

/// Dump the dayi4/dayi3/dayi2 codes of every character as CSV.
#[derive(Parser)]
struct Args {
    /// Directory holding the numbered .cin source tables
    #[arg(short = 's', long = "source-dir", default_value = ".")]
    source_dir: PathBuf,
    /// Optional CSV output path, stdout when absent
    #[arg(short = 'o', long = "out")]
    out: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut table = MappingTable::new();
    let report = load_dir(&args.source_dir, &mut table)
        .map_err(|e| dayi_cli_error("loading source tables", e))?;
    if report.files.is_empty() {
        return Err(simple_cli_error(&format!(
            "no numbered .cin tables in '{}'",
            args.source_dir.display()
        ))
        .into());
    }
    normalize(&mut table);

    let writer: Box<dyn io::Write> = match &args.out {
        Some(p) => Box::new(File::create(p).map_err(|e| io_cli_error("creating csv", p, e))?),
        None => Box::new(io::stdout()),
    };
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["character", "dayi4", "dayi3", "dayi2"])?;
    let derived = derive_all(&table);
    for d in &derived {
        wtr.write_record([
            d.character.to_string(),
            d.dayi4.clone(),
            d.dayi3.clone(),
            d.dayi2.clone(),
        ])?;
    }
    wtr.flush()?;

    eprintln!("{} characters, {} source files", derived.len(), report.files.len());
    Ok(())
}
