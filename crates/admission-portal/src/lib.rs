//! Core services for the university admission portal: the tuition-waiver
//! eligibility engine, the FAQ-backed admission assistant, and the flat-file
//! datasets both draw on.

pub mod assistant;
pub mod config;
pub mod datasets;
pub mod error;
pub mod telemetry;
pub mod waivers;
