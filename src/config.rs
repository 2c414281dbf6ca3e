use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Matching
    /// Path to the roster JSON file
    pub roster_path: String,
    /// Matches below this confidence are flagged for human review
    pub review_threshold: f64,
    /// How many ranked candidates the CLI prints
    pub top_n: usize,

    // Meta
    pub log_level: String,

    // Data
    /// Extra names scanned verbatim by the heuristic extractor,
    /// in addition to the roster display names
    #[serde(default)]
    pub extra_known_names: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster_path: crate::roster::roster_path().to_string_lossy().to_string(),
            review_threshold: 0.85,
            top_n: 5,
            log_level: "INFO".to_string(),
            extra_known_names: Vec::new(),
        }
    }
}

impl Config {
    /// Load config from file or create default
    pub fn load() -> Result<Self> {
        let config_path = config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            match serde_json::from_str(&content) {
                Ok(config) => Ok(config),
                Err(e) => {
                    // Graceful degradation: log warning and use defaults
                    tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                    // Backup corrupt file for debugging
                    let backup_path = config_path.with_extension("json.corrupt");
                    let _ = std::fs::rename(&config_path, &backup_path);
                    Ok(Self::default())
                }
            }
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let config_path = config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("claimmatch")
        .join("config.json")
}
