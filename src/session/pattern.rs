//! Rollout file name matching
//!
//! Codex names session files `rollout-YYYY-MM-DDTHH-MM-SS-<id>.jsonl` where
//! `<id>` is a lowercase UUID such as `019b914d-17d3-7110-b151-6158833bf32e`.

use std::sync::LazyLock;

use regex::Regex;

static ROLLOUT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rollout-[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}-[0-9]{2}-[0-9]{2}-([0-9a-f\-]+)\.jsonl$",
    )
    .expect("rollout pattern compiles")
});

/// Extract the session identifier from a rollout file name.
///
/// Returns `None` for anything that is not exactly a rollout name: other
/// extensions, trailing suffixes, malformed timestamps, or identifiers with
/// characters outside `[0-9a-f-]`.
pub fn parse_rollout_filename(name: &str) -> Option<&str> {
    ROLLOUT_PATTERN
        .captures(name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_uuid_identifier() {
        assert_eq!(
            parse_rollout_filename(
                "rollout-2025-09-10T14-03-21-019b914d-17d3-7110-b151-6158833bf32e.jsonl"
            ),
            Some("019b914d-17d3-7110-b151-6158833bf32e")
        );
    }

    #[test]
    fn extracts_short_identifiers() {
        assert_eq!(
            parse_rollout_filename("rollout-2024-01-15T10-30-00-abc123-def456.jsonl"),
            Some("abc123-def456")
        );
        assert_eq!(
            parse_rollout_filename("rollout-2024-01-16T09-00-00-111222-333.jsonl"),
            Some("111222-333")
        );
        assert_eq!(
            parse_rollout_filename("rollout-2024-01-16T09-00-00--.jsonl"),
            Some("-")
        );
    }

    #[test]
    fn rejects_uppercase_identifier() {
        assert_eq!(
            parse_rollout_filename("rollout-2024-01-15T10-30-00-ABC.jsonl"),
            None
        );
        assert_eq!(
            parse_rollout_filename("rollout-2024-01-15T10-30-00-abcDEF.jsonl"),
            None
        );
    }

    #[test]
    fn rejects_non_hex_identifier() {
        assert_eq!(
            parse_rollout_filename("rollout-2024-01-15T10-30-00-xyz.jsonl"),
            None
        );
        assert_eq!(
            parse_rollout_filename("rollout-2024-01-15T10-30-00-ab_cd.jsonl"),
            None
        );
    }

    #[test]
    fn rejects_empty_identifier() {
        assert_eq!(
            parse_rollout_filename("rollout-2024-01-15T10-30-00-.jsonl"),
            None
        );
    }

    #[test]
    fn rejects_wrong_extension_and_suffix() {
        assert_eq!(
            parse_rollout_filename("rollout-2024-01-15T10-30-00-abc.json"),
            None
        );
        assert_eq!(
            parse_rollout_filename("rollout-2024-01-15T10-30-00-abc.jsonl.bak"),
            None
        );
        assert_eq!(
            parse_rollout_filename("old-rollout-2024-01-15T10-30-00-abc.jsonl"),
            None
        );
    }

    #[test]
    fn rejects_malformed_timestamp() {
        for name in [
            "rollout-24-01-15T10-30-00-abc.jsonl",
            "rollout-2024-1-15T10-30-00-abc.jsonl",
            "rollout-2024-01-15 10-30-00-abc.jsonl",
            "rollout-2024-01-15T10:30:00-abc.jsonl",
            "rollout-2024-01-15T10-30-abc.jsonl",
            "rollout-abcd-01-15T10-30-00-abc.jsonl",
        ] {
            assert_eq!(parse_rollout_filename(name), None, "{name}");
        }
    }

    #[test]
    fn rejects_non_ascii_digits() {
        // Arabic-Indic digits must not count as timestamp digits
        assert_eq!(
            parse_rollout_filename("rollout-٢٠٢٤-01-15T10-30-00-abc.jsonl"),
            None
        );
    }

    #[test]
    fn rejects_unrelated_names() {
        assert_eq!(parse_rollout_filename("notes.txt"), None);
        assert_eq!(parse_rollout_filename("session.jsonl"), None);
        assert_eq!(parse_rollout_filename(""), None);
    }
}
