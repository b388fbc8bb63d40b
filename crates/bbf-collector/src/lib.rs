//! Local-business discovery through a maps search API.
//!
//! [`Collector`] is the entry point: it pages through live results when a
//! credential is configured and falls back to canned demo data otherwise.

pub mod client;
pub mod collector;
pub mod demo;
pub mod error;
pub mod parse;
pub mod types;

pub use client::MapsClient;
pub use collector::{Collector, CollectorConfig};
pub use error::CollectorError;
pub use parse::{parse_local_result, parse_location, parse_review, synthetic_place_id};
