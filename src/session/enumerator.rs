//! Session enumeration
//!
//! Walks a sessions directory at any depth, keeps files whose names are
//! rollout names and orders them by modification time, newest first.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::debug;
use walkdir::WalkDir;

use crate::error::SessionError;

use super::SessionInfo;
use super::pattern::parse_rollout_filename;
use super::resolver::default_sessions_dir;

/// List sessions under the current user's `~/.codex/sessions`.
pub fn list_codex_sessions() -> Result<Vec<SessionInfo>, SessionError> {
    list_sessions(&default_sessions_dir())
}

/// List every rollout found under `root`, most recently modified first.
///
/// A missing root yields an empty list. Unreadable subdirectories, files that
/// do not match the rollout name and files whose metadata cannot be read are
/// skipped. The only error is a root that exists but cannot be read.
pub fn list_sessions(root: &Path) -> Result<Vec<SessionInfo>, SessionError> {
    let candidates = find_candidate_files(root)?;

    let mut sessions = Vec::with_capacity(candidates.len());
    for path in &candidates {
        if let Some(session) = read_session(path) {
            sessions.push(session);
        }
    }

    sessions.sort_by(|a, b| b.last_updated.cmp(&a.last_updated));

    debug!(
        root = %root.display(),
        candidates = candidates.len(),
        sessions = sessions.len(),
        "enumerated sessions"
    );
    Ok(sessions)
}

// ============================================================================
// File discovery
// ============================================================================

fn io_error(path: &Path, source: std::io::Error) -> SessionError {
    SessionError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Collect every non-directory path under `root`.
///
/// Directory symlinks below the root are not followed, so link cycles
/// cannot repeat or stall the walk.
fn find_candidate_files(root: &Path) -> Result<Vec<PathBuf>, SessionError> {
    let meta = match fs::metadata(root) {
        Ok(meta) => meta,
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
            debug!(root = %root.display(), "sessions directory does not exist");
            return Ok(Vec::new());
        }
        Err(e) => return Err(io_error(root, e)),
    };

    if !meta.is_dir() {
        return Ok(vec![root.to_path_buf()]);
    }

    // The walk reports an unreadable root as a per-entry error; probe it
    // first so that case stays fatal.
    fs::read_dir(root).map_err(|e| io_error(root, e))?;

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        match entry {
            Ok(entry) if entry.file_type().is_dir() => {}
            Ok(entry) => files.push(entry.into_path()),
            Err(e) => debug!(error = %e, "skipping unreadable entry"),
        }
    }
    Ok(files)
}

/// Build a session from a candidate path, or `None` if it should be skipped.
fn read_session(path: &Path) -> Option<SessionInfo> {
    let filename = path.file_name()?.to_str()?;
    let identifier = parse_rollout_filename(filename)?;

    let meta = match fs::metadata(path) {
        Ok(meta) => meta,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "skipping session without metadata");
            return None;
        }
    };
    if meta.is_dir() {
        return None;
    }
    let modified = match meta.modified() {
        Ok(modified) => modified,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "skipping session without mtime");
            return None;
        }
    };

    Some(SessionInfo {
        identifier: identifier.to_string(),
        filename: filename.to_string(),
        last_updated: DateTime::<Utc>::from(modified),
    })
}
