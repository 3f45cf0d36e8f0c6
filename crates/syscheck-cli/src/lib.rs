//! CLI for syscheck.
//!
//! Command definitions and handlers. `main.rs` is the composition root that
//! wires parsing, bootstrap, and dispatch together; handlers delegate to the
//! shared check orchestrator.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Dependencies used by the main.rs binary only
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use parser::Cli;
