use anyhow::{bail, Context, Result};
use homedir::my_home;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::semantic::{self, embeddings::parse_model_name};

const CONFIG_FILE: &str = "config.yaml";
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Configuration for the embedding model.
///
/// The logistic weights are not configurable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmbedderConfig {
    /// Model name for embeddings (e.g., "all-mpnet-base-v2")
    #[serde(default = "default_model")]
    pub model: String,

    /// Show fastembed's progress bar while a model downloads
    #[serde(default = "default_show_download_progress")]
    pub show_download_progress: bool,
}

impl Default for EmbedderConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            show_download_progress: default_show_download_progress(),
        }
    }
}

fn default_model() -> String {
    semantic::DEFAULT_MODEL.to_string()
}

fn default_show_download_progress() -> bool {
    true
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub embedder: EmbedderConfig,

    /// Filter used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(skip_serializing, skip_deserializing)]
    base_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            embedder: EmbedderConfig::default(),
            log_level: default_log_level(),
            base_path: PathBuf::new(),
        }
    }
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Config {
    fn validate(&self) -> Result<()> {
        parse_model_name(&self.embedder.model)
            .with_context(|| format!("embedder.model is invalid in {CONFIG_FILE}"))?;

        if self.log_level.trim().is_empty() {
            bail!("log_level must not be empty");
        }
        tracing_subscriber::EnvFilter::try_new(&self.log_level)
            .with_context(|| format!("log_level '{}' is not a valid filter", self.log_level))?;

        Ok(())
    }

    /// Load `config.yaml` from `base_path`, writing the defaults first if it
    /// does not exist.
    pub fn load_with(base_path: &Path) -> Result<Self> {
        std::fs::create_dir_all(base_path).with_context(|| {
            format!("Failed to create base directory {}", base_path.display())
        })?;

        let path = base_path.join(CONFIG_FILE);

        // create new if does not exist
        if !path.exists() {
            log::info!("Creating default config at {}", path.display());
            let config_str = serde_yml::to_string(&Self::default())?;
            std::fs::write(&path, config_str)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }

        let config_str = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let mut config: Self = serde_yml::from_str(&config_str)
            .with_context(|| format!("{} is malformed", path.display()))?;

        config.base_path = base_path.to_path_buf();
        config.validate()?;

        Ok(config)
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// `$CTC_BASE_PATH`, else `~/.local/share/course-transfer`.
    pub fn default_base_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var("CTC_BASE_PATH") {
            return Ok(PathBuf::from(path));
        }

        let home = my_home()
            .context("Could not determine home directory")?
            .context("Home directory path is empty")?;

        Ok(home.join(".local/share/course-transfer"))
    }
}
