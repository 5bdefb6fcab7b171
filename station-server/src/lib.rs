//! Airport station resolution server.
//!
//! Joins the OurAirports airport, runway and frequency tables by
//! identifier and serves the assembled station over HTTP, alongside
//! relays for weather feeds the browser can't fetch directly.

pub mod config;
pub mod dataset;
pub mod domain;
pub mod relay;
pub mod resolve;
pub mod web;

#[cfg(test)]
mod fixtures;
