//! Station resolution.
//!
//! Joins the airport, runway and frequency tables on the airport
//! identifier. The airport lookup gates the request; runway and frequency
//! lookups then run concurrently and are attached to the airport record.

mod airport;
mod error;
mod fields;
mod frequency;
mod resolver;
mod runway;

pub use airport::find_airport;
pub use error::{MalformedRow, ResolveError};
pub use frequency::find_frequencies;
pub use resolver::StationResolver;
pub use runway::find_runways;
