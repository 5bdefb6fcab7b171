//! Runway lookup and heading/geometry derivation.

use csv::StringRecord;
use tracing::warn;

use crate::dataset::{Column, ColumnIndex, Table};
use crate::domain::{DEFAULT_WIDTH_FT, Ident, Runway, RunwayGeometry, end_heading};

use super::MalformedRow;
use super::fields::optional_integer;

/// Join column of the runway table.
pub const KEY_COLUMN: &str = "airport_ident";

/// Resolved positions of the runway columns we read.
struct RunwayColumns {
    length: Column,
    width: Column,
    le_ident: Column,
    he_ident: Column,
    le_heading: Column,
    he_heading: Column,
    le_lat: Column,
    le_lon: Column,
    he_lat: Column,
    he_lon: Column,
}

impl RunwayColumns {
    fn new(columns: &ColumnIndex) -> Self {
        Self {
            length: columns.column("length_ft"),
            width: columns.column("width_ft"),
            le_ident: columns.column("le_ident"),
            he_ident: columns.column("he_ident"),
            le_heading: columns.column("le_heading_degT"),
            he_heading: columns.column("he_heading_degT"),
            le_lat: columns.column("le_latitude_deg"),
            le_lon: columns.column("le_longitude_deg"),
            he_lat: columns.column("he_latitude_deg"),
            he_lon: columns.column("he_longitude_deg"),
        }
    }
}

/// Find every runway at the airport `ident`, in dataset order.
///
/// An airport with no runway rows yields an empty list. Rows with a
/// non-numeric length or width are skipped.
pub fn find_runways(ident: &Ident, table: &Table) -> Vec<Runway> {
    let cols = RunwayColumns::new(table.columns());

    table
        .rows_for(ident.as_str())
        .iter()
        .filter_map(|record| match runway_from_row(&cols, record) {
            Ok(runway) => Some(runway),
            Err(e) => {
                warn!(ident = %ident, error = %e, "Skipping runway row");
                None
            }
        })
        .collect()
}

fn runway_from_row(cols: &RunwayColumns, record: &StringRecord) -> Result<Runway, MalformedRow> {
    let ident1 = cols.le_ident.text(record).unwrap_or_default().to_string();
    let ident2 = cols.he_ident.text(record).unwrap_or_default().to_string();

    let heading1 = end_heading(cols.le_heading.number(record), &ident1);
    let heading2 = end_heading(cols.he_heading.number(record), &ident2);

    // The low-end latitude alone decides whether a runway is plottable
    let geometry = cols.le_lat.number(record).map(|le_lat| RunwayGeometry {
        le_lat,
        le_lon: cols.le_lon.number(record).unwrap_or(0.0),
        he_lat: cols.he_lat.number(record).unwrap_or(0.0),
        he_lon: cols.he_lon.number(record).unwrap_or(0.0),
    });

    Ok(Runway {
        length_ft: optional_integer(cols.length, "length_ft", record)?.unwrap_or(0),
        width_ft: match cols.width.text(record) {
            None => DEFAULT_WIDTH_FT,
            Some(_) => optional_integer(cols.width, "width_ft", record)?.unwrap_or(0),
        },
        ident1,
        ident2,
        heading1,
        heading2,
        geometry,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn single_row_table(le_lat: &str, le_heading: &str, le_ident: &str) -> Table {
        let data = format!(
            "airport_ident,le_ident,he_ident,le_heading_degT,le_latitude_deg\nKJFK,{le_ident},22R,{le_heading},{le_lat}\n"
        );
        Table::from_reader(data.as_bytes(), KEY_COLUMN).unwrap()
    }

    proptest! {
        /// Geometry exists exactly when the low-end latitude is numeric
        #[test]
        fn geometry_iff_numeric_latitude(lat in "-?[0-9]{1,2}\\.[0-9]{1,4}|[a-zA-Z]{0,5}") {
            let table = single_row_table(&lat, "", "04L");
            let runways = find_runways(&Ident::parse("KJFK").unwrap(), &table);
            let numeric = lat.parse::<f64>().is_ok_and(f64::is_finite);
            prop_assert_eq!(runways[0].geometry.is_some(), numeric);
        }

        /// A missing heading always falls back to ten times the ident digits
        #[test]
        fn heading_fallback(n in 1u32..=36, side in "[LCR]?", heading in "[a-zA-Z]{0,4}") {
            // Letter-only strings that Rust reads as numbers are excluded
            prop_assume!(heading.parse::<f64>().is_err());
            let ident = format!("{n:02}{side}");
            let table = single_row_table("", &heading, &ident);
            let runways = find_runways(&Ident::parse("KJFK").unwrap(), &table);
            prop_assert_eq!(runways[0].heading1, f64::from(n * 10));
        }
    }
}
