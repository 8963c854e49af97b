//! Profile, resume and recommendation use cases

pub mod ports;
pub mod service;

pub use service::ProfileService;
