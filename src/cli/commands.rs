//! CLI subcommand definitions

use clap::Subcommand;

/// Main CLI commands
#[derive(Debug, Clone, Subcommand, PartialEq, Eq)]
pub(crate) enum Commands {
    /// List sessions, most recently updated first (default)
    List,
    /// Print the identifier of the most recently updated session
    Latest,
    /// List sessions whose identifier starts with PREFIX
    Find {
        /// Identifier prefix to search for
        prefix: String,
    },
    /// Print the sessions directory that would be scanned
    Path,
}

impl Commands {
    /// Resolve the optional subcommand, defaulting to `list`
    pub(crate) fn or_default(cmd: Option<Commands>) -> Commands {
        cmd.unwrap_or(Commands::List)
    }
}
