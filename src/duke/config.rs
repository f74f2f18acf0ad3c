use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "tasks.txt";

/// Environment variable that overrides the data directory.
pub const HOME_ENV: &str = "DUKE_HOME";

/// Configuration for duke, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DukeConfig {
    /// Task file; relative paths are taken from the data directory
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

impl Default for DukeConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

impl DukeConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: DukeConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// The task file path, anchored at `data_dir` when relative.
    pub fn data_path<P: AsRef<Path>>(&self, data_dir: P) -> PathBuf {
        if self.data_file.is_absolute() {
            self.data_file.clone()
        } else {
            data_dir.as_ref().join(&self.data_file)
        }
    }
}
