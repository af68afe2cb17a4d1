//! Commande de composition nucléotidique

use crate::display::stats;
use crate::{create_spinner, InputOptions};
use anyhow::{Context, Result};
use gcscan_core::{summarize_composition, Sequence};
use std::path::PathBuf;

pub fn run(input: PathBuf, json: bool, input_opts: InputOptions) -> Result<()> {
    let spinner = create_spinner("Lecture du fichier...");
    let data = std::fs::read(&input)
        .with_context(|| format!("lecture impossible: {}", input.display()))?;
    spinner.finish_and_clear();

    let sequence = Sequence::from_bytes(&data, &input_opts.load_options())
        .map_err(|e| gcscan_core::log_error!(e))
        .with_context(|| format!("lecture impossible: {}", input.display()))?;
    let summary = summarize_composition(&sequence)
        .with_context(|| format!("composition impossible: {}", input.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        stats::display_composition_table(&summary);
        stats::display_summary(&summary);
    }

    Ok(())
}
