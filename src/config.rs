//! Application configuration loaded from environment variables.
//!
//! Every variable is optional:
//! - `BITEBLITZ_SEARCH_DELAY_MS`: simulated search latency (default 800)
//! - `BITEBLITZ_LOAD_DELAY_MS`: simulated restaurant load (default 1500)
//! - `BITEBLITZ_PREFS_PATH`: preference file location
//! - `BITEBLITZ_LOG_PATH`: log file location (default `biteblitz.log`)

use std::path::PathBuf;
use std::time::Duration;

/// Default simulated search latency in milliseconds.
const DEFAULT_SEARCH_DELAY_MS: u64 = 800;

/// Default simulated restaurant load latency in milliseconds.
const DEFAULT_LOAD_DELAY_MS: u64 = 1500;

/// Default log file, relative to the working directory.
const DEFAULT_LOG_PATH: &str = "biteblitz.log";

/// File name of the preference store inside the config directory.
const PREFERENCES_FILE: &str = "preferences.json";

/// Top-level application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// How long a search takes before results become visible.
    pub search_delay: Duration,
    /// How long the restaurant list takes to appear at startup.
    pub load_delay: Duration,
    /// Where the theme preference is persisted.
    pub preferences_path: PathBuf,
    /// Where tracing output is written.
    pub log_path: PathBuf,
}

/// Loads the application configuration from environment variables.
///
/// # Errors
///
/// Returns [`BiteBlitzError::Config`](crate::BiteBlitzError::Config) if a
/// delay variable is set to something other than a whole number of
/// milliseconds.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let search_delay = delay_var("BITEBLITZ_SEARCH_DELAY_MS", DEFAULT_SEARCH_DELAY_MS)?;
    let load_delay = delay_var("BITEBLITZ_LOAD_DELAY_MS", DEFAULT_LOAD_DELAY_MS)?;

    let preferences_path = non_empty_var("BITEBLITZ_PREFS_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(default_preferences_path);

    let log_path = non_empty_var("BITEBLITZ_LOG_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_PATH));

    Ok(AppConfig {
        search_delay,
        load_delay,
        preferences_path,
        log_path,
    })
}

/// Resolves the preference file under the user's config directory.
fn default_preferences_path() -> PathBuf {
    if let Some(dir) = non_empty_var("XDG_CONFIG_HOME") {
        return PathBuf::from(dir).join("biteblitz").join(PREFERENCES_FILE);
    }
    if let Some(home) = non_empty_var("HOME") {
        return PathBuf::from(home)
            .join(".config")
            .join("biteblitz")
            .join(PREFERENCES_FILE);
    }
    PathBuf::from("biteblitz-preferences.json")
}

/// Parses a millisecond delay variable, falling back to `default` when unset.
fn delay_var(name: &str, default: u64) -> crate::Result<Duration> {
    match non_empty_var(name) {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|e| crate::BiteBlitzError::Config(format!("{name}={raw:?}: {e}"))),
        None => Ok(Duration::from_millis(default)),
    }
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Serializes tests that mutate the process environment.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Helper that temporarily sets env vars, runs `f`, then restores originals.
    fn with_env<F: FnOnce()>(vars: &[(&str, Option<&str>)], f: F) {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let originals: Vec<(&str, Option<String>)> = vars
            .iter()
            .map(|(k, _)| (*k, std::env::var(k).ok()))
            .collect();

        for (k, v) in vars {
            // SAFETY: every env-mutating test holds ENV_LOCK.
            unsafe {
                match v {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }

        f();

        for (k, original) in originals {
            // SAFETY: restoring original values under the same lock.
            unsafe {
                match original {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }
    }

    #[test]
    fn defaults_without_env_vars() {
        with_env(
            &[
                ("BITEBLITZ_SEARCH_DELAY_MS", None),
                ("BITEBLITZ_LOAD_DELAY_MS", None),
                ("BITEBLITZ_LOG_PATH", None),
            ],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.search_delay, Duration::from_millis(800));
                assert_eq!(config.load_delay, Duration::from_millis(1500));
                assert_eq!(config.log_path, PathBuf::from("biteblitz.log"));
            },
        );
    }

    #[test]
    fn custom_delays() {
        with_env(
            &[
                ("BITEBLITZ_SEARCH_DELAY_MS", Some("25")),
                ("BITEBLITZ_LOAD_DELAY_MS", Some(" 0 ")),
            ],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.search_delay, Duration::from_millis(25));
                assert_eq!(config.load_delay, Duration::ZERO);
            },
        );
    }

    #[test]
    fn rejects_non_numeric_delay() {
        with_env(&[("BITEBLITZ_SEARCH_DELAY_MS", Some("fast"))], || {
            let err = fetch_config().unwrap_err();
            assert!(err.to_string().contains("BITEBLITZ_SEARCH_DELAY_MS"));
        });
    }

    #[test]
    fn explicit_preferences_path_wins() {
        with_env(
            &[
                ("BITEBLITZ_PREFS_PATH", Some("/tmp/prefs.json")),
                ("XDG_CONFIG_HOME", Some("/xdg")),
            ],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.preferences_path, PathBuf::from("/tmp/prefs.json"));
            },
        );
    }

    #[test]
    fn preferences_under_xdg_config_home() {
        with_env(
            &[
                ("BITEBLITZ_PREFS_PATH", None),
                ("XDG_CONFIG_HOME", Some("/xdg")),
            ],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(
                    config.preferences_path,
                    PathBuf::from("/xdg/biteblitz/preferences.json")
                );
            },
        );
    }

    #[test]
    fn empty_values_treated_as_absent() {
        with_env(
            &[
                ("BITEBLITZ_SEARCH_DELAY_MS", Some("")),
                ("BITEBLITZ_LOG_PATH", Some("")),
                ("BITEBLITZ_PREFS_PATH", Some("")),
                ("XDG_CONFIG_HOME", Some("")),
                ("HOME", Some("/home/diner")),
            ],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.search_delay, Duration::from_millis(800));
                assert_eq!(config.log_path, PathBuf::from("biteblitz.log"));
                assert_eq!(
                    config.preferences_path,
                    PathBuf::from("/home/diner/.config/biteblitz/preferences.json")
                );
            },
        );
    }
}
