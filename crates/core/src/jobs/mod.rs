//! Job listing use cases

pub mod feed;
pub mod filter;
pub mod ports;
pub mod service;

pub use feed::JobFeed;
pub use filter::JobFilter;
pub use service::JobsService;
