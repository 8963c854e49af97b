//! # JobMatch Domain
//!
//! Business domain types and models for the JobMatch client.
//!
//! This crate contains:
//! - API data types (users, jobs, applications, feedback) and the response
//!   envelope shared by every endpoint
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants (storage keys, endpoint paths, timeouts)
//!
//! ## Architecture
//! - No dependencies on other JobMatch crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
