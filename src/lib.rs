//! Builds Dayi input method tables for gcin and Mac OS X.
//!
//! Numbered `.cin` source tables are merged into one [`MappingTable`], the
//! built-in symbol overrides are applied, every pair is weighted from a
//! character frequency corpus, and the sorted result is written in one of the
//! two [`OutputFormat`]s. [`pipeline::run`] drives the whole thing.

pub mod config;
pub mod derive;
pub mod error;
pub mod format;
pub mod freq;
pub mod io_utils;
pub mod loader;
pub mod mapping;
pub mod normalize;
pub mod pipeline;
pub mod rank;
pub mod store;

pub use config::Config;
pub use derive::{
    derive_all, entries_for, primary_codes, shorten_to_three, shorten_to_two, CodeSet,
    DerivedCodes,
};
pub use error::DayiError;
pub use format::{render, OutputFormat, Rendered};
pub use freq::FrequencyTable;
pub use loader::{load_dir, parse_line, LoadReport};
pub use mapping::{Entry, MappingTable};
pub use normalize::{normalize, NormalizeReport, SYMBOL_OVERRIDES};
pub use pipeline::{run, RunSummary};
pub use rank::{rank, symbol_weight, Ranked, SYMBOL_ORDER};
pub use store::Staging;
