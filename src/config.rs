use camino::Utf8PathBuf;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const APP_NAME: &str = "csf_mods";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AppSettings {
    pub version: u8,
    /// Game install folder; the tool historically ran from inside it.
    pub home: Utf8PathBuf,
    /// Relative paths are resolved against `home`.
    pub state_file: Option<Utf8PathBuf>,
}

impl Default for AppSettings {
    fn default() -> Self {
        let home = std::env::current_dir()
            .ok()
            .and_then(|dir| Utf8PathBuf::from_path_buf(dir).ok())
            .unwrap_or_else(|| Utf8PathBuf::from("."));

        Self {
            version: 0,
            home,
            state_file: None,
        }
    }
}

impl AppSettings {
    pub fn load() -> Result<AppSettings, confy::ConfyError> {
        confy::load(APP_NAME, None)
    }

    pub fn save(&self) -> Result<(), confy::ConfyError> {
        confy::store(APP_NAME, None, self)
    }

    pub fn location() -> Result<PathBuf, confy::ConfyError> {
        confy::get_configuration_file_path(APP_NAME, None)
    }
}

/// Where rolling log files go, if the platform has a data directory.
pub fn log_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "martes", APP_NAME).map(|dirs| dirs.data_local_dir().join("logs"))
}
