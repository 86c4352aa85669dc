use std::path::{Path, PathBuf};

use crate::consts::{DEFAULT_CODEX_DIR, SESSION_SUBDIR};

/// Sessions directory for the given home directory: `<home>/.codex/sessions`.
///
/// The path is not checked for existence; a missing directory simply yields
/// no sessions when walked.
pub fn sessions_dir_in(home: &Path) -> PathBuf {
    home.join(DEFAULT_CODEX_DIR).join(SESSION_SUBDIR)
}

/// Sessions directory under the current user's home.
///
/// An undeterminable home directory falls back to the empty path, which
/// leaves a relative `.codex/sessions`.
pub fn default_sessions_dir() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_default();
    sessions_dir_in(&home)
}
