//! Main commands enum and primary subcommands.
//!
//! This module defines the available commands for the CLI tool.

use clap::Subcommand;

/// Available commands for the system-check tool.
#[derive(Subcommand)]
pub enum Commands {
    /// Run the quick validation test
    Quick {
        /// Name to greet in the verdict
        #[arg(default_value = "User")]
        name: String,
    },

    /// Run the comprehensive system test
    Test {
        /// Name the verdict is issued for
        #[arg(default_value = "User")]
        name: String,
        /// Deliver the verdict through a completion callback instead of blocking
        #[arg(short, long)]
        detach: bool,
    },

    /// Show a snapshot of the probed environment
    Status,

    /// Start the embedded web server
    Web {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
        /// Restrict CORS to these origins (repeatable; default allows all)
        #[arg(long = "allow-origin")]
        allow_origin: Vec<String>,
    },
}
