/// Directory under the home directory where Codex keeps its state
pub const DEFAULT_CODEX_DIR: &str = ".codex";

/// Subdirectory of the Codex directory holding session rollouts
pub const SESSION_SUBDIR: &str = "sessions";

/// Display name used in user-facing messages
pub const SOURCE_DISPLAY_NAME: &str = "Codex";
