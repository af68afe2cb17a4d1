//! Configuration du serveur web

use gcscan_core::{DEFAULT_WINDOW_SIZE, MIN_WINDOW_SIZE};
use serde::Deserialize;
use std::path::PathBuf;

/// Configuration du serveur
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    /// Taille maximale d'un fichier téléversé (octets)
    pub upload_limit: usize,
    /// Répertoire servi sous /static s'il existe
    pub static_files: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            workers: 4,
            upload_limit: 10 * 1024 * 1024, // 10MB
            static_files: None,
        }
    }
}

/// Valeurs proposées dans le formulaire d'analyse
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    pub default_window_size: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            default_window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

/// Configuration du logging
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "compact".to_string(),
        }
    }
}

/// Configuration complète de l'application
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub analysis: AnalysisSettings,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Charge la configuration depuis un fichier, surchargée par GCSCAN__SECTION__CLE
    pub fn load_from_file(path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("GCSCAN").separator("__"))
            .build()?;

        let mut cfg = settings.try_deserialize::<AppConfig>()?;

        if cfg.analysis.default_window_size < MIN_WINDOW_SIZE {
            tracing::warn!(
                "default_window_size {} < {}, valeur ramenée au minimum",
                cfg.analysis.default_window_size,
                MIN_WINDOW_SIZE
            );
            cfg.analysis.default_window_size = MIN_WINDOW_SIZE;
        }

        Ok(cfg)
    }
}
