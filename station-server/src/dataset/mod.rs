//! Reference dataset loading.
//!
//! Airport, runway and frequency data come from static delimited files
//! (OurAirports-style CSV with a header row). Each file is parsed once
//! into a [`Table`] keyed by its join column and re-parsed only when the
//! file changes on disk.

mod column;
mod config;
mod error;
mod source;
mod table;

pub use column::{Column, ColumnIndex, parse_number};
pub use config::{
    DEFAULT_AIRPORTS_FILE, DEFAULT_FREQUENCIES_FILE, DEFAULT_RUNWAYS_FILE, DatasetConfig,
};
pub use error::DatasetError;
pub use source::TableSource;
pub use table::Table;
