//! Commande d'analyse GC

use crate::display::{stats, visualizer};
use crate::{create_spinner, InputOptions, OutputFormat};
use anyhow::{Context, Result};
use gcscan_core::{analyze, render_html, AnalysisConfig, AnalysisReport, GcChart};
use std::path::PathBuf;

pub fn run(
    input: PathBuf,
    window_size: usize,
    format: OutputFormat,
    output: Option<PathBuf>,
    input_opts: InputOptions,
) -> Result<()> {
    eprintln!("🧬 Analyse de: {}", input.display());

    // 1. Lire le fichier
    let spinner = create_spinner("Lecture du fichier...");
    let data = std::fs::read(&input)
        .with_context(|| format!("lecture impossible: {}", input.display()))?;
    spinner.finish_with_message(format!("Fichier lu ({} octets)", data.len()));

    // 2. Analyser
    let options = input_opts.load_options();
    let config = AnalysisConfig {
        window_size,
        validation: options.validation,
        format: options.format,
        strip_carriage_returns: options.strip_carriage_returns,
    };
    let report = analyze(&data, &config)
        .map_err(|e| gcscan_core::log_error!(e))
        .with_context(|| format!("analyse impossible: {}", input.display()))?;

    // 3. Présenter selon le format
    match format {
        OutputFormat::Table => {
            visualizer::display_series(&report.series);
            stats::display_summary(&report.summary);
            if output.is_some() {
                tracing::warn!("--output ignoré pour le format table");
            }
        }
        OutputFormat::Json => write_or_print(to_json(&report)?, output)?,
        OutputFormat::Html => write_or_print(render_html(&report), output)?,
        OutputFormat::Svg => write_or_print(GcChart::new(&report.series).render_svg(), output)?,
    }

    Ok(())
}

fn to_json(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Écrit dans le fichier demandé, sinon sur la sortie standard
fn write_or_print(content: String, output: Option<PathBuf>) -> Result<()> {
    if let Some(output) = output {
        std::fs::write(&output, content)?;
        eprintln!("Résultat écrit dans: {}", output.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}
