//! Modèles de données pour l'API web

use gcscan_core::{chart_title, summary_line, AnalysisConfig, AnalysisReport, InputFormat, ValidationMode};
use serde::{Deserialize, Serialize};

/// État partagé, immuable entre les requêtes
#[derive(Debug, Clone)]
pub struct AppState {
    pub tera: tera::Tera,
    pub config: crate::config::AppConfig,
}

/// Fichier et paramètres extraits du formulaire multipart
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: Option<String>,
    pub data: Vec<u8>,
    pub window_size: usize,
    pub strict: bool,
    pub fasta: bool,
}

impl Upload {
    pub fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig {
            window_size: self.window_size,
            validation: if self.strict {
                ValidationMode::Strict
            } else {
                ValidationMode::Permissive
            },
            format: if self.fasta {
                InputFormat::Fasta
            } else {
                InputFormat::Raw
            },
            strip_carriage_returns: false,
        }
    }
}

/// Réponse de l'API d'analyse
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    pub chart_title: String,
    pub summary_line: String,
    pub report: AnalysisReport,
}

impl AnalyzeResponse {
    pub fn new(file_name: Option<String>, report: AnalysisReport) -> Self {
        Self {
            file_name,
            chart_title: chart_title(report.window_size),
            summary_line: summary_line(&report.summary),
            report,
        }
    }
}

/// Réponse d'erreur standard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: Option<String>,
    pub code: u16,
}

impl ErrorResponse {
    pub fn new(error: String, code: u16) -> Self {
        Self {
            error,
            details: None,
            code,
        }
    }

    pub fn with_details(error: String, details: String, code: u16) -> Self {
        Self {
            error,
            details: Some(details),
            code,
        }
    }
}
