//! Web layer for the station service.
//!
//! Provides the station lookup endpoint and the two outbound relays.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
