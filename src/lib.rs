//! Discovery of OpenAI Codex session rollouts
//!
//! Codex writes one `rollout-YYYY-MM-DDTHH-MM-SS-<id>.jsonl` file per session
//! under `~/.codex/sessions/YYYY/MM/DD/`. This crate walks that tree, pulls the
//! session identifier out of each file name and orders the sessions by the
//! file's modification time, newest first.

pub mod consts;
pub mod error;
pub mod session;
pub mod utils;

pub use error::{AppError, SessionError};
pub use session::{
    SessionInfo, default_sessions_dir, find_by_prefix, list_codex_sessions, list_sessions,
    parse_rollout_filename, sessions_dir_in,
};
