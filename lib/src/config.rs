use crate::error::{ArcmarksError, Result};
use crate::export::DEFAULT_FOLDER_TITLE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Arc sidebar export to read (auto-detected when unset)
    #[serde(default)]
    pub input: Option<PathBuf>,

    /// Bookmarks file to write
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Name of the folder holding every exported bookmark
    #[serde(default = "default_folder_title")]
    pub folder_title: String,

    /// Escape `& < > "` in titles and URLs
    #[serde(default)]
    pub escape_html: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: None,
            output: default_output(),
            folder_title: default_folder_title(),
            escape_html: false,
        }
    }
}

fn default_output() -> PathBuf {
    PathBuf::from("bookmarks.html")
}

fn default_folder_title() -> String {
    DEFAULT_FOLDER_TITLE.to_string()
}

impl Config {
    /// Load configuration from a file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            ArcmarksError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        // An empty or comment-only file deserializes to unit, not a mapping
        if contents.lines().all(|l| l.trim().is_empty() || l.trim_start().starts_with('#')) {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from default location (~/.config/arcmarks/config.yml)
    /// Falls back to default config if file doesn't exist
    pub fn load() -> Self {
        let config_path = crate::utils::get_config_dir().join("config.yml");

        if config_path.exists() {
            match Self::load_from_path(&config_path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to load config from {:?}: {}",
                        config_path, e
                    );
                    eprintln!("Using default configuration");
                    Self::default()
                }
            }
        } else {
            Self::default()
        }
    }

    /// Save configuration to a file path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }
}
