use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "codex-sessions";
const CONFIG_FILE: &str = "config.toml";
const HOME_CONFIG_FILE: &str = ".codex-sessions.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    /// Home directory to resolve `.codex/sessions` from
    #[serde(default)]
    pub(crate) home: Option<PathBuf>,
    #[serde(default)]
    pub(crate) json: bool,
    #[serde(default)]
    pub(crate) compact: bool,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) quiet: bool,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

impl Config {
    pub(crate) fn load(quiet: bool) -> Self {
        Self::load_from(&Self::get_config_paths(), quiet)
    }

    /// Load the first config file that exists and parses
    fn load_from(paths: &[PathBuf], quiet: bool) -> Self {
        for path in paths {
            if !path.exists() {
                continue;
            }
            match Self::parse_file(path) {
                Ok(config) => {
                    if config.debug && !quiet {
                        eprintln!("Loaded config from {}", path.display());
                    }
                    return config;
                }
                Err(e) => {
                    if !quiet {
                        eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }

        Self::default()
    }

    fn parse_file(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
        toml::from_str::<Config>(&content).map_err(|e| e.to_string())
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG-style: ~/.config/codex-sessions/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join(APP_DIR).join(CONFIG_FILE));
        }

        // 2. Platform config dir (Application Support on macOS)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join(APP_DIR).join(CONFIG_FILE);
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. ~/.codex-sessions.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(HOME_CONFIG_FILE));
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn config_paths_not_empty() {
        assert!(!Config::get_config_paths().is_empty());
    }

    #[test]
    fn parses_all_keys() {
        let config: Config = toml::from_str(
            r#"
home = "/srv/alice"
json = true
compact = true
no_color = true
debug = true
quiet = true
color = "always"
timezone = "UTC"
limit = 5
"#,
        )
        .unwrap();
        assert_eq!(config.home, Some(PathBuf::from("/srv/alice")));
        assert!(config.json && config.compact && config.no_color);
        assert!(config.debug && config.quiet);
        assert_eq!(config.color, Some(ConfigColorMode::Always));
        assert_eq!(config.timezone.as_deref(), Some("UTC"));
        assert_eq!(config.limit, Some(5));
    }

    #[test]
    fn missing_keys_use_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.home.is_none());
        assert!(!config.json);
        assert!(config.limit.is_none());
    }

    #[test]
    fn first_valid_file_wins() {
        let tmp = TempDir::new().unwrap();
        let broken = tmp.path().join("broken.toml");
        let good = tmp.path().join("good.toml");
        let later = tmp.path().join("later.toml");
        fs::write(&broken, "limit = \"many\"").unwrap();
        fs::write(&good, "limit = 3").unwrap();
        fs::write(&later, "limit = 9").unwrap();

        let paths = vec![tmp.path().join("absent.toml"), broken, good, later];
        let config = Config::load_from(&paths, true);
        assert_eq!(config.limit, Some(3));
    }

    #[test]
    fn no_files_gives_default() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load_from(&[tmp.path().join("nope.toml")], true);
        assert!(config.home.is_none());
        assert!(!config.json);
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(toml::from_str::<Config>("offline = true").is_err());
    }
}
