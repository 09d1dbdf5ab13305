//! # igview Common Library
//!
//! Shared code for the export viewer:
//! - Dataset catalogue and export layout
//! - Dataset reader (JSON files of a personal data export)
//! - Export normalizer producing canonical view records
//! - Geolocation resolver seam for login history
//! - Configuration loading
//! - Timestamp and text utilities

pub mod config;
pub mod dataset;
pub mod error;
pub mod fields;
pub mod geo;
pub mod normalize;
pub mod reader;
pub mod text;
pub mod time;

pub use dataset::Dataset;
pub use error::{Error, Result};
pub use time::{Timespan, Timestamp};
