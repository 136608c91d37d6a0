use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "codetype").map(|dirs| dirs.config_dir().join("config.json"))
    }

    pub fn log_path() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            let state_dir = PathBuf::from(home)
                .join(".local")
                .join("state")
                .join("codetype");
            Some(state_dir.join("codetype.log"))
        } else {
            ProjectDirs::from("", "", "codetype")
                .map(|dirs| dirs.data_local_dir().join("codetype.log"))
        }
    }
}
