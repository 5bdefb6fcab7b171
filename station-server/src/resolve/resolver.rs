//! Station assembly across the three reference tables.

use tracing::{debug, warn};

use crate::dataset::{DatasetConfig, DatasetError, TableSource};
use crate::domain::{Airport, Frequency, Ident};

use super::airport::{self, find_airport};
use super::error::ResolveError;
use super::frequency::{self, find_frequencies};
use super::runway::{self, find_runways};

/// Resolves an airport identifier into a fully assembled station.
///
/// Holds one cached [`TableSource`] per dataset. Requests share the
/// parsed tables read-only and never see each other's results.
pub struct StationResolver {
    airports: TableSource,
    runways: TableSource,
    frequencies: TableSource,
}

impl StationResolver {
    /// Create a resolver over the files named in `config`.
    ///
    /// Nothing is read until the first request or [`preload`](Self::preload).
    pub fn new(config: &DatasetConfig) -> Self {
        Self {
            airports: TableSource::new(config.airports_path(), airport::KEY_COLUMN),
            runways: TableSource::new(config.runways_path(), runway::KEY_COLUMN),
            frequencies: TableSource::new(config.frequencies_path(), frequency::KEY_COLUMN),
        }
    }

    /// Parse the airport and runway tables up front.
    ///
    /// The frequency table is optional and is loaded on first use.
    pub async fn preload(&self) -> Result<(), DatasetError> {
        tokio::try_join!(self.airports.table(), self.runways.table())?;
        Ok(())
    }

    /// Resolve `raw_ident` into an airport with its runways and frequencies.
    ///
    /// Fails with `ParamMissing` on a blank identifier, `DatasetUnavailable`
    /// if the airport or runway file cannot be read, and `NotFound` if no
    /// airport row matches. Runway and frequency rows for unknown airports
    /// are never consulted.
    pub async fn resolve(&self, raw_ident: &str) -> Result<Airport, ResolveError> {
        let ident = Ident::parse(raw_ident).map_err(|_| ResolveError::ParamMissing)?;

        let (airport_table, runway_table) =
            tokio::try_join!(self.airports.table(), self.runways.table())?;

        let Some(mut airport) = find_airport(&ident, &airport_table) else {
            debug!(ident = %ident, "No matching airport");
            return Err(ResolveError::NotFound);
        };

        let (runways, freqs) = tokio::join!(
            async { find_runways(&ident, &runway_table) },
            self.frequencies_for(&ident),
        );

        debug!(
            ident = %ident,
            runways = runways.len(),
            freqs = freqs.len(),
            "Resolved station"
        );

        airport.runways = runways;
        airport.freqs = freqs;
        Ok(airport)
    }

    /// Frequencies for `ident`; empty when the frequency file can't be read.
    async fn frequencies_for(&self, ident: &Ident) -> Vec<Frequency> {
        match self.frequencies.table().await {
            Ok(table) => find_frequencies(ident, &table),
            Err(e) if e.is_missing() => {
                debug!(path = %self.frequencies.path().display(), "No frequency dataset");
                Vec::new()
            }
            Err(e) => {
                warn!(error = %e, "Frequency dataset unreadable, returning no frequencies");
                Vec::new()
            }
        }
    }
}
