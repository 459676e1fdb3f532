//! Runtime configuration read from the process environment.
use std::env;
use std::path::PathBuf;

const APP_NAME: &str = "astral-nexus";

/// Where and how a session stores its data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Directory holding saves, the profile and persisted logs.
    pub data_dir: PathBuf,
    /// Persist to `data_dir`. When off everything lives in memory.
    pub persist: bool,
    /// Overrides `[log] persist_logs` from the game config.
    pub persist_logs: Option<bool>,
    /// Overrides `[log] max_logs` from the game config.
    pub max_logs: Option<usize>,
    /// Extra RON scene files layered over the built-in scenes.
    pub content_dir: Option<PathBuf>,
    /// TOML game config replacing the built-in one.
    pub config_path: Option<PathBuf>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            persist: true,
            persist_logs: None,
            max_logs: None,
            content_dir: None,
            config_path: None,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `NEXUS_DATA_DIR` - Save data directory (default: platform-specific)
    /// - `NEXUS_PERSIST` - Write saves to disk (default: true)
    /// - `NEXUS_PERSIST_LOGS` - Keep the event log across runs
    /// - `NEXUS_MAX_LOGS` - Event log capacity
    /// - `NEXUS_CONTENT_DIR` - Directory of additional `.ron` scenes
    /// - `NEXUS_CONFIG` - Path to a `game.toml`
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Same as [`RuntimeConfig::from_env`] with a custom variable source.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = var("NEXUS_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(persist) = parse_var::<bool>(&var, "NEXUS_PERSIST") {
            config.persist = persist;
        }
        config.persist_logs = parse_var(&var, "NEXUS_PERSIST_LOGS");
        config.max_logs = parse_var(&var, "NEXUS_MAX_LOGS");
        config.content_dir = var("NEXUS_CONTENT_DIR").map(PathBuf::from);
        config.config_path = var("NEXUS_CONFIG").map(PathBuf::from);

        config
    }
}

/// Platform data directory for the game.
///
/// - Linux: `~/.local/share/astral-nexus` (or `$XDG_DATA_HOME/astral-nexus`)
/// - macOS: `~/Library/Application Support/astral-nexus`
/// - Windows: `%APPDATA%\astral-nexus`
/// - Fallback: `./save_data`
pub fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

fn parse_var<T>(var: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    var(key)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_variables() {
        let config = RuntimeConfig::from_vars(vars(&[]));
        assert!(config.persist);
        assert_eq!(config.max_logs, None);
        assert_eq!(config.data_dir, default_data_dir());
    }

    #[test]
    fn variables_override_defaults() {
        let config = RuntimeConfig::from_vars(vars(&[
            ("NEXUS_DATA_DIR", "/tmp/nexus"),
            ("NEXUS_PERSIST", "false"),
            ("NEXUS_PERSIST_LOGS", "true"),
            ("NEXUS_MAX_LOGS", " 25 "),
            ("NEXUS_CONTENT_DIR", "mods"),
        ]));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/nexus"));
        assert!(!config.persist);
        assert_eq!(config.persist_logs, Some(true));
        assert_eq!(config.max_logs, Some(25));
        assert_eq!(config.content_dir, Some(PathBuf::from("mods")));
        assert_eq!(config.config_path, None);
    }

    #[test]
    fn unparsable_values_are_ignored() {
        let config = RuntimeConfig::from_vars(vars(&[
            ("NEXUS_PERSIST", "maybe"),
            ("NEXUS_MAX_LOGS", "lots"),
        ]));
        assert!(config.persist);
        assert_eq!(config.max_logs, None);
    }
}
