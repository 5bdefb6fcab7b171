//! Locations of the reference dataset files.

use std::path::PathBuf;

/// Default airport table file name.
pub const DEFAULT_AIRPORTS_FILE: &str = "airports.csv";

/// Default runway table file name.
pub const DEFAULT_RUNWAYS_FILE: &str = "runways.csv";

/// Default frequency table file name.
pub const DEFAULT_FREQUENCIES_FILE: &str = "frequencies.csv";

/// Where to find the three reference tables.
///
/// File names are resolved relative to `data_dir`.
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    pub data_dir: PathBuf,
    pub airports_file: String,
    pub runways_file: String,
    pub frequencies_file: String,
}

impl DatasetConfig {
    /// Create a config for `data_dir` using the default file names.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            airports_file: DEFAULT_AIRPORTS_FILE.to_string(),
            runways_file: DEFAULT_RUNWAYS_FILE.to_string(),
            frequencies_file: DEFAULT_FREQUENCIES_FILE.to_string(),
        }
    }

    /// Set a custom airport file name.
    pub fn with_airports_file(mut self, name: impl Into<String>) -> Self {
        self.airports_file = name.into();
        self
    }

    /// Set a custom runway file name.
    pub fn with_runways_file(mut self, name: impl Into<String>) -> Self {
        self.runways_file = name.into();
        self
    }

    /// Set a custom frequency file name.
    pub fn with_frequencies_file(mut self, name: impl Into<String>) -> Self {
        self.frequencies_file = name.into();
        self
    }

    pub fn airports_path(&self) -> PathBuf {
        self.data_dir.join(&self.airports_file)
    }

    pub fn runways_path(&self) -> PathBuf {
        self.data_dir.join(&self.runways_file)
    }

    pub fn frequencies_path(&self) -> PathBuf {
        self.data_dir.join(&self.frequencies_file)
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        // Files live next to the server binary's working directory
        Self::new(".")
    }
}
