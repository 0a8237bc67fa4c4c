use crate::category::Category;
use crate::output::OutputFormat;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Category used when none is given: "IES", "PDF", "GOS", "PNG" or "all"
    #[serde(default = "default_category")]
    pub category: String,

    /// Default output format: "summary" or "json"
    #[serde(default = "default_output_format")]
    pub output_format: String,

    /// Whether to use color output by default (None = auto-detect)
    #[serde(default)]
    pub use_color: Option<bool>,

    /// Directory the template command writes into
    #[serde(default = "default_template_dir")]
    pub template_dir: PathBuf,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            category: default_category(),
            output_format: default_output_format(),
            use_color: None,
            template_dir: default_template_dir(),
        }
    }
}

fn default_category() -> String {
    "PDF".to_string()
}

fn default_output_format() -> String {
    "summary".to_string()
}

fn default_template_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Config {
    /// Load config from .renamesheet/config.toml if it exists
    pub fn load() -> Result<Self> {
        if let Ok(cwd) = std::env::current_dir() {
            let config_path = cwd.join(".renamesheet").join("config.toml");
            if config_path.exists() {
                return Self::load_from_path(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to a specific path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Configured default category; an unrecognised value falls back to PDF.
    pub fn default_category(&self) -> Category {
        self.defaults.category.parse().unwrap_or_else(|_| {
            log::warn!(
                "Ignoring unknown default category '{}' in config",
                self.defaults.category
            );
            Category::default()
        })
    }

    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from_str(&self.defaults.output_format).unwrap_or_default()
    }
}
