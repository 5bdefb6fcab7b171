//! Domain types for station resolution.
//!
//! Airports, runways and frequencies as projected from the reference
//! datasets. Derived values (metric elevation, fallback headings) are
//! computed here so every consumer sees the same rules.

mod airport;
mod frequency;
mod ident;
mod runway;

pub use airport::{Airport, METERS_PER_FOOT, feet_to_meters};
pub use frequency::Frequency;
pub use ident::{Ident, InvalidIdent};
pub use runway::{DEFAULT_WIDTH_FT, Runway, RunwayGeometry, end_heading, heading_from_ident};
