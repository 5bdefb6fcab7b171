//! Airport identifier type.

use std::fmt;

/// Error returned when an airport identifier is blank.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airport identifier: {reason}")]
pub struct InvalidIdent {
    reason: &'static str,
}

/// A normalized airport identifier (e.g. `KJFK`, `SAWH`, `US-0042`).
///
/// Identifiers are the join key across the airport, runway and frequency
/// datasets. Any non-blank text is accepted; whether it names an airport
/// is up to the datasets. They are stored upper-cased, so equality between
/// two `Ident` values is case-insensitive equality of the inputs they were
/// parsed from.
///
/// # Examples
///
/// ```
/// use station_server::domain::Ident;
///
/// let jfk = Ident::parse(" kjfk ").unwrap();
/// assert_eq!(jfk.as_str(), "KJFK");
///
/// assert!(Ident::parse("  ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Ident(String);

impl Ident {
    /// Parse an identifier, trimming surrounding whitespace and upper-casing it.
    ///
    /// Only blank input is rejected.
    pub fn parse(s: &str) -> Result<Self, InvalidIdent> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidIdent {
                reason: "must not be empty",
            });
        }

        Ok(Ident(trimmed.to_ascii_uppercase()))
    }

    /// Returns the normalized identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ident({})", self.0)
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
