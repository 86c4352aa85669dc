//! Codex session discovery
//!
//! Resolves the sessions directory, walks it for rollout files and returns
//! one [`SessionInfo`] per file, most recently modified first.

mod enumerator;
mod pattern;
mod resolver;

use chrono::{DateTime, Utc};
use serde::Serialize;

pub use enumerator::{list_codex_sessions, list_sessions};
pub use pattern::parse_rollout_filename;
pub use resolver::{default_sessions_dir, sessions_dir_in};

/// A single Codex session discovered on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    /// Session identifier taken from the rollout file name
    pub identifier: String,
    /// Base name of the rollout file
    pub filename: String,
    /// Last modification time of the rollout file
    pub last_updated: DateTime<Utc>,
}

/// Sessions whose identifier starts with `prefix`, in their original order.
///
/// Identifiers are not deduplicated: two rollouts carrying the same id are
/// both returned.
pub fn find_by_prefix<'a>(sessions: &'a [SessionInfo], prefix: &str) -> Vec<&'a SessionInfo> {
    sessions
        .iter()
        .filter(|session| session.identifier.starts_with(prefix))
        .collect()
}
