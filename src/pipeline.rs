//! The full load → normalize → rank → write run.

use std::io::Write;
use std::path::PathBuf;

use log::debug;
use serde::Serialize;

use crate::config::Config;
use crate::derive::{entries_for, CodeSet};
use crate::error::DayiError;
use crate::format::{render, OutputFormat};
use crate::freq::load_corpus;
use crate::loader::{load_dir, LoadReport};
use crate::normalize::{normalize, NormalizeReport};
use crate::rank::{assign_symbol_weights, fill_symbol_sentinels, rank, Ranked, SYMBOL_ORDER};
use crate::store::{write_atomic, Staging};

/// What a run did, suitable for `--json` output.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub load: LoadReport,
    pub normalize: NormalizeReport,
    /// Corpus lines that produced a weight.
    pub corpus_lines: usize,
    /// Symbols that received the negative sentinel weight.
    pub sentinels: usize,
    pub codes: CodeSet,
    pub format: OutputFormat,
    pub output: PathBuf,
    /// `(code, character)` pairs written.
    pub pairs: usize,
    pub bytes: usize,
}

/// Build the result table from the staging tables in `staging`.
///
/// The frequency table is completed in place with sentinel and symbol weights.
pub fn build_result(staging: &mut Staging, codes: CodeSet) -> (Vec<Ranked>, usize) {
    let sentinels = fill_symbol_sentinels(&staging.mapping, &mut staging.freq);
    assign_symbol_weights(SYMBOL_ORDER, &mut staging.freq);
    let entries = entries_for(&staging.mapping, codes);
    (rank(&entries, &staging.freq), sentinels)
}

/// Print the loader's operator report.
pub fn report_load(report: &LoadReport, out: &mut dyn Write) -> std::io::Result<()> {
    if !report.rejected.is_empty() {
        writeln!(out, "Codes ignored:")?;
        for r in &report.rejected {
            writeln!(out, "{} = {:?} (len {})", r.code, r.field, r.field_len())?;
        }
    }
    if report.accepted > 0 {
        writeln!(
            out,
            "Did {} insert from {} files, current table size: {}",
            report.accepted,
            report.files.len(),
            report.table_size
        )?;
    }
    Ok(())
}

/// Run the whole pipeline for `config`, writing operator messages to `out`.
pub fn run(config: &Config, out: &mut dyn Write) -> Result<RunSummary, DayiError> {
    config.validate()?;

    let mut staging = if config.fresh {
        Staging::default()
    } else {
        Staging::open(&config.store)?
    };
    debug!(
        "staging store {}: {} pairs, {} weights",
        config.store.display(),
        staging.mapping.len(),
        staging.freq.len()
    );

    let load = load_dir(&config.source_dir, &mut staging.mapping)?;
    report_load(&load, out)?;

    let normalized = normalize(&mut staging.mapping);
    debug!("normalize: {normalized:?}");

    let corpus_lines = load_corpus(&config.freq, config.freq_column, &mut staging.freq)?;
    debug!("corpus {}: {corpus_lines} lines used", config.freq.display());

    let (rows, sentinels) = build_result(&mut staging, config.codes);
    staging.save(&config.store)?;

    let rendered = render(&rows, config.format);
    write_atomic(&config.out, &rendered.bytes)?;
    writeln!(
        out,
        "Wrote {} code points to {} {}",
        rendered.pairs,
        config.format.label(),
        config.out.display()
    )?;

    Ok(RunSummary {
        load,
        normalize: normalized,
        corpus_lines,
        sentinels,
        codes: config.codes,
        format: config.format,
        output: config.out.clone(),
        pairs: rendered.pairs,
        bytes: rendered.bytes.len(),
    })
}
