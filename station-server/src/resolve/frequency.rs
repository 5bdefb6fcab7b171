//! Radio frequency lookup.

use crate::dataset::Table;
use crate::domain::{Frequency, Ident};

/// Join column of the frequency table.
pub const KEY_COLUMN: &str = "airport_ident";

/// Find every frequency published for the airport `ident`, in dataset order.
///
/// Missing columns read as empty text; the MHz value is passed through
/// as written.
pub fn find_frequencies(ident: &Ident, table: &Table) -> Vec<Frequency> {
    let kind = table.column("type");
    let description = table.column("description");
    let mhz = table.column("frequency_mhz");

    table
        .rows_for(ident.as_str())
        .iter()
        .map(|record| Frequency {
            kind: kind.text(record).unwrap_or_default().to_string(),
            description: description.text(record).unwrap_or_default().to_string(),
            mhz: mhz.text(record).unwrap_or_default().to_string(),
        })
        .collect()
}
