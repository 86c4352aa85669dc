use std::path::PathBuf;

use thiserror::Error;

/// Fatal failure while enumerating sessions.
///
/// Per-entry problems (unreadable subdirectories, files that vanish before
/// they can be stat'ed) never surface here; those entries are omitted.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to read sessions directory {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("{0}")]
    Session(#[from] SessionError),

    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}
