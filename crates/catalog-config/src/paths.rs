use anyhow::Result;
use std::path::{Path, PathBuf};

/// Config base path override from the environment, for containers and tests
pub fn config_base_path() -> Option<PathBuf> {
    std::env::var("REGIONCAST_CONFIG_DIR").ok().map(PathBuf::from)
}

pub struct PathManager {
    config_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        if let Some(base) = config_base_path() {
            return Ok(Self { config_dir: base });
        }
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("regioncast");
        Ok(Self { config_dir })
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn preferences_file(&self) -> PathBuf {
        self.config_dir.join("preferences.toml")
    }
}
