use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::app_dirs::AppDirs;
use crate::language::Language;
use crate::options::{
    Options, DEFAULT_LANGUAGE, DEFAULT_SNIPPET_COUNT, DEFAULT_TIME_LIMIT, SNIPPET_COUNTS,
    TIME_LIMITS,
};

/// Startup defaults, overridden by command line flags
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub language: Language,
    pub time_limit_secs: u64,
    pub snippet_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE,
            time_limit_secs: DEFAULT_TIME_LIMIT,
            snippet_count: DEFAULT_SNIPPET_COUNT,
        }
    }
}

impl From<&Options> for Config {
    fn from(options: &Options) -> Self {
        Self {
            language: options.language,
            time_limit_secs: options.time_limit,
            snippet_count: options.snippet_count,
        }
    }
}

impl Config {
    /// Options from this config; values outside the offered choices fall back to defaults.
    pub fn to_options(&self) -> Options {
        let time_limit = if TIME_LIMITS.contains(&self.time_limit_secs) {
            self.time_limit_secs
        } else {
            warn!(value = self.time_limit_secs, "ignoring unsupported time limit in config");
            DEFAULT_TIME_LIMIT
        };

        let snippet_count = if SNIPPET_COUNTS.contains(&self.snippet_count) {
            self.snippet_count
        } else {
            warn!(value = self.snippet_count, "ignoring unsupported snippet count in config");
            DEFAULT_SNIPPET_COUNT
        };

        Options {
            language: self.language,
            time_limit,
            snippet_count,
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new() -> Self {
        let path = AppDirs::config_path().unwrap_or_else(|| PathBuf::from("codetype_config.json"));
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Config::default(),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "could not read config");
                return Config::default();
            }
        };

        serde_json::from_slice::<Config>(&bytes).unwrap_or_else(|err| {
            warn!(path = %self.path.display(), error = %err, "config is malformed, using defaults");
            Config::default()
        })
    }

    fn save(&self, cfg: &Config) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn roundtrip_default_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let store = FileConfigStore::with_path(&path);
        let cfg = Config::default();
        store.save(&cfg).unwrap();
        let loaded = store.load();
        assert_eq!(cfg, loaded);
    }

    #[test]
    fn save_and_load_custom_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let store = FileConfigStore::with_path(&path);
        let cfg = Config {
            language: Language::Csharp,
            time_limit_secs: 15,
            snippet_count: 20,
        };
        store.save(&cfg).unwrap();
        let loaded = store.load();
        assert_eq!(cfg, loaded);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let store = FileConfigStore::with_path(dir.path().join("absent.json"));
        assert_eq!(store.load(), Config::default());
    }

    #[test]
    fn malformed_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(FileConfigStore::with_path(&path).load(), Config::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "language": "go" }"#).unwrap();

        let cfg = FileConfigStore::with_path(&path).load();
        assert_eq!(cfg.language, Language::Go);
        assert_eq!(cfg.time_limit_secs, 60);
        assert_eq!(cfg.snippet_count, 5);
    }

    #[test]
    fn unsupported_values_fall_back_to_defaults() {
        let cfg = Config {
            language: Language::Kotlin,
            time_limit_secs: 45,
            snippet_count: 7,
        };

        let options = cfg.to_options();
        assert_eq!(options.language, Language::Kotlin);
        assert_eq!(options.time_limit, 60);
        assert_eq!(options.snippet_count, 5);
    }

    #[test]
    fn config_from_options() {
        let options = Options {
            language: Language::Swift,
            time_limit: 120,
            snippet_count: 1,
        };
        let cfg = Config::from(&options);
        assert_eq!(cfg.to_options(), options);
    }
}
