//! Runway records and heading derivation.

/// Width assumed when the dataset has no width for a runway.
pub const DEFAULT_WIDTH_FT: i64 = 100;

/// Coordinates of both runway thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunwayGeometry {
    pub le_lat: f64,
    pub le_lon: f64,
    pub he_lat: f64,
    pub he_lon: f64,
}

/// A runway at an airport, described from both ends.
///
/// `ident1`/`heading1` refer to the low end, `ident2`/`heading2` to the
/// high end. Both headings are always populated; see [`end_heading`].
#[derive(Debug, Clone, PartialEq)]
pub struct Runway {
    pub ident1: String,
    pub ident2: String,
    pub length_ft: i64,
    pub width_ft: i64,
    /// Low end heading, degrees true.
    pub heading1: f64,
    /// High end heading, degrees true.
    pub heading2: f64,
    pub geometry: Option<RunwayGeometry>,
}

/// Heading implied by a runway end designator.
///
/// Takes every digit in the ident, reads them as one integer and
/// multiplies by ten. `"09L"` gives 90, `"H1"` gives 10 and an ident
/// without digits gives 0.
pub fn heading_from_ident(ident: &str) -> f64 {
    let designator = ident
        .bytes()
        .filter(u8::is_ascii_digit)
        .fold(0u64, |acc, b| {
            acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
        });

    designator.saturating_mul(10) as f64
}

/// Heading for one runway end.
///
/// Uses the recorded heading when it is numeric, otherwise falls back to
/// [`heading_from_ident`].
pub fn end_heading(recorded: Option<f64>, ident: &str) -> f64 {
    recorded.unwrap_or_else(|| heading_from_ident(ident))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Standard designators (01-36 plus optional L/C/R) map to ten times the number
        #[test]
        fn standard_designators(n in 1u64..=36, side in "[LCR]?") {
            let ident = format!("{n:02}{side}");
            prop_assert_eq!(heading_from_ident(&ident), (n * 10) as f64);
        }

        /// Letters are ignored wherever they appear
        #[test]
        fn letters_ignored(prefix in "[A-Z]{0,2}", n in 0u64..1000, suffix in "[A-Z]{0,2}") {
            let ident = format!("{prefix}{n}{suffix}");
            prop_assert_eq!(heading_from_ident(&ident), (n * 10) as f64);
        }

        /// Idents without digits always derive 0
        #[test]
        fn no_digits_is_zero(ident in "[A-Za-z -]{0,6}") {
            prop_assert_eq!(heading_from_ident(&ident), 0.0);
        }
    }
}
