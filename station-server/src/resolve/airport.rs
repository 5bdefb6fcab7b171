//! Airport lookup.

use csv::StringRecord;
use tracing::warn;

use crate::dataset::{Column, ColumnIndex, Table};
use crate::domain::{Airport, Ident};

use super::MalformedRow;
use super::fields::{optional_integer, required_number};

/// Join column of the airport table.
pub const KEY_COLUMN: &str = "ident";

/// Resolved positions of the airport columns we read.
struct AirportColumns {
    id: Column,
    ident: Column,
    name: Column,
    lat: Column,
    lon: Column,
    elevation: Column,
}

impl AirportColumns {
    fn new(columns: &ColumnIndex) -> Self {
        Self {
            id: columns.column("id"),
            ident: columns.column(KEY_COLUMN),
            name: columns.column("name"),
            lat: columns.column("latitude_deg"),
            lon: columns.column("longitude_deg"),
            elevation: columns.column("elevation_ft"),
        }
    }
}

/// Find the airport with identifier `ident`.
///
/// When the dataset lists the same identifier more than once, the first
/// well-formed row wins. Malformed rows are skipped.
pub fn find_airport(ident: &Ident, table: &Table) -> Option<Airport> {
    let cols = AirportColumns::new(table.columns());

    table
        .rows_for(ident.as_str())
        .iter()
        .find_map(|record| match airport_from_row(&cols, record) {
            Ok(airport) => Some(airport),
            Err(e) => {
                warn!(ident = %ident, error = %e, "Skipping airport row");
                None
            }
        })
}

fn airport_from_row(cols: &AirportColumns, record: &StringRecord) -> Result<Airport, MalformedRow> {
    Ok(Airport {
        id: cols.id.value(record).map(str::to_string),
        icao: cols.ident.text(record).unwrap_or_default().to_string(),
        name: cols.name.text(record).unwrap_or_default().to_string(),
        lat: required_number(cols.lat, "latitude_deg", record)?,
        lon: required_number(cols.lon, "longitude_deg", record)?,
        elevation_ft: optional_integer(cols.elevation, "elevation_ft", record)?.unwrap_or(0),
        runways: Vec::new(),
        freqs: Vec::new(),
    })
}
