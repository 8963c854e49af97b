//! Job application use cases

pub mod ports;
pub mod service;

pub use service::{ApplicationStatistics, ApplicationsService};
