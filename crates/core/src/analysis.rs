//! Pipeline complet: chargement, fenêtres GC, composition

use crate::composition::{summarize_composition, CompositionSummary};
use crate::error::{GcError, Result};
use crate::sequence::{InputFormat, LoadOptions, Sequence, ValidationMode};
use crate::window::{windowed_gc, GcSeries, DEFAULT_WINDOW_SIZE};
use serde::{Deserialize, Serialize};

/// Configuration explicite d'une analyse
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub window_size: usize,
    pub validation: ValidationMode,
    pub format: InputFormat,
    pub strip_carriage_returns: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            validation: ValidationMode::Permissive,
            format: InputFormat::Raw,
            strip_carriage_returns: false,
        }
    }
}

impl AnalysisConfig {
    pub fn with_window_size(window_size: usize) -> Self {
        Self {
            window_size,
            ..Default::default()
        }
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            validation: self.validation,
            format: self.format,
            strip_carriage_returns: self.strip_carriage_returns,
        }
    }
}

/// Résultat d'une analyse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub window_size: usize,
    pub series: GcSeries,
    pub summary: CompositionSummary,
}

/// Analyse le contenu brut d'un fichier téléversé
pub fn analyze(bytes: &[u8], config: &AnalysisConfig) -> Result<AnalysisReport> {
    crate::log_operation!("analyse GC", {
        let sequence = Sequence::from_bytes(bytes, &config.load_options())?;
        analyze_sequence(&sequence, config.window_size)
    })
}

/// Analyse une séquence déjà chargée
pub fn analyze_sequence(sequence: &Sequence, window_size: usize) -> Result<AnalysisReport> {
    if sequence.is_empty() {
        return Err(GcError::EmptyInput);
    }

    let series = windowed_gc(sequence, window_size)?;
    let summary = summarize_composition(sequence)?;

    tracing::info!(
        "{} fenêtres de {} bp sur {} bp",
        series.len(),
        window_size,
        summary.total_length
    );

    Ok(AnalysisReport {
        window_size,
        series,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_pipeline() {
        let report = analyze(b"ATGCATGC\nATGC\n", &AnalysisConfig::with_window_size(4)).unwrap();
        assert_eq!(report.window_size, 4);
        assert_eq!(report.series.len(), 3);
        assert_eq!(report.summary.total_length, 12);
    }

    #[test]
    fn test_crlf_upload_keeps_carriage_returns() {
        let report = analyze(b"AT\r\nGC\r\n", &AnalysisConfig::with_window_size(2)).unwrap();
        assert_eq!(report.summary.total_length, 6);
        assert_eq!(report.series.positions(), vec![0, 2, 4]);
        assert_eq!(report.series.percentages(), vec![0.0, 50.0, 50.0]);

        let config = AnalysisConfig {
            window_size: 2,
            strip_carriage_returns: true,
            ..Default::default()
        };
        let report = analyze(b"AT\r\nGC\r\n", &config).unwrap();
        assert_eq!(report.summary.total_length, 4);
        assert_eq!(report.series.percentages(), vec![0.0, 100.0]);
    }

    #[test]
    fn test_empty_upload() {
        let result = analyze(b"", &AnalysisConfig::default());
        assert!(matches!(result, Err(GcError::EmptyInput)));
    }

    #[test]
    fn test_short_sequence_is_not_an_error() {
        let report = analyze(b"ATGC", &AnalysisConfig::default()).unwrap();
        assert!(report.series.is_empty());
        assert_eq!(report.summary.total_length, 4);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = analyze(b"GGCC", &AnalysisConfig::with_window_size(2)).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["window_size"], 2);
        assert_eq!(json["series"]["windows"][1]["position"], 2);
        assert_eq!(json["summary"]["bases"][2]["base"], "G");
    }
}
