//! # JobMatch terminal front end
//!
//! Wires the API client, credential storage and use-case services together
//! and exposes them as subcommands of the `jobmatch` binary.
//!
//! This crate contains:
//! - Command-line definitions (`cli`)
//! - Command handlers returning printable reports (`commands`)
//! - Application context (dependency injection)
//! - Logging setup and output rendering (`utils`)

pub mod cli;
pub mod commands;
pub mod context;
pub mod utils;

pub use cli::{Cli, Command};
pub use commands::dispatch;
pub use context::AppContext;
pub use utils::output::{OutputFormat, Report};
