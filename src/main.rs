use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use dayi::{
    config::{Config, DEFAULT_FREQ_COLUMN},
    io_utils::dayi_cli_error,
    run, CodeSet, OutputFormat,
};

/// Dayi input table creator.
///
/// Reads every `[0-9]*.cin` table in the source directory and writes a
/// frequency-ordered table for gcin, or for Mac OS X with `--osx`.
#[derive(Parser)]
#[command(name = "dayi")]
struct Args {
    /// Staging store to use
    #[arg(short = 'd', long = "db", default_value = "scratch.db")]
    db: PathBuf,
    /// Frequency table
    #[arg(short = 'f', long = "freq", default_value = "word_freq.txt")]
    freq: PathBuf,
    /// Output file
    #[arg(short = 'o', long = "out", default_value = "output.cin")]
    out: PathBuf,
    /// Generate in a format for Mac OS X. Default is gcin format.
    #[arg(long)]
    osx: bool,
    /// Directory holding the numbered .cin source tables
    #[arg(short = 's', long = "source-dir", default_value = ".")]
    source_dir: PathBuf,
    /// Code table to write: full, dayi4, dayi3 or dayi2
    #[arg(long, default_value_t = CodeSet::Full)]
    codes: CodeSet,
    /// 1-based corpus column holding the frequency count
    #[arg(long, default_value_t = DEFAULT_FREQ_COLUMN)]
    freq_column: usize,
    /// Ignore an existing staging store
    #[arg(long)]
    fresh: bool,
    /// Print the run summary as JSON on stdout
    #[arg(long)]
    json: bool,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            source_dir: self.source_dir.clone(),
            store: self.db.clone(),
            fresh: self.fresh,
            freq: self.freq.clone(),
            freq_column: self.freq_column,
            out: self.out.clone(),
            format: if self.osx {
                OutputFormat::MacOsx
            } else {
                OutputFormat::Gcin
            },
            codes: self.codes,
        }
    }
}

fn main() {
    env_logger::init();
    if let Err(e) = run_cli() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = args.config();

    // with --json, stdout carries only the summary
    let result = if args.json {
        run(&config, &mut io::stderr())
    } else {
        run(&config, &mut io::stdout())
    };
    let summary = result.map_err(|e| dayi_cli_error("building input table", e))?;

    if args.json {
        let mut stdout = io::stdout();
        serde_json::to_writer_pretty(&mut stdout, &summary)?;
        stdout.write_all(b"\n")?;
    }
    Ok(())
}
