//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface definition for the system-check tool.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "syscheck")]
#[command(about = "Run environment checks from the terminal")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        // Verify the CLI parser can be constructed
        Cli::command().debug_assert();
    }

    #[test]
    fn test_quick_defaults_name() {
        let cli = Cli::parse_from(["syscheck", "quick"]);
        match cli.command {
            Some(Commands::Quick { name }) => assert_eq!(name, "User"),
            _ => panic!("expected quick command"),
        }
    }

    #[test]
    fn test_detach_flag() {
        let cli = Cli::parse_from(["syscheck", "-v", "test", "Bob", "--detach"]);
        assert!(cli.verbose);
        match cli.command {
            Some(Commands::Test { name, detach }) => {
                assert_eq!(name, "Bob");
                assert!(detach);
            }
            _ => panic!("expected test command"),
        }
    }
}
