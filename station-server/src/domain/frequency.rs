//! Radio frequency records.

/// A radio frequency published for an airport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frequency {
    /// Type tag (e.g. `TWR`, `ATIS`, `GND`).
    pub kind: String,

    pub description: String,

    /// Frequency in MHz, exactly as written in the dataset.
    pub mhz: String,
}
