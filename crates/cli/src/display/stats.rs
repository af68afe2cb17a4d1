//! Affichage de la composition

use console::style;
use gcscan_core::{summary_line, CompositionSummary};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct BaseRow {
    #[tabled(rename = "Base")]
    base: char,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "%")]
    percent: String,
}

/// Affiche la ligne de résumé
pub fn display_summary(summary: &CompositionSummary) {
    println!();
    println!("{}", style(summary_line(summary)).bold());

    if summary.uncounted() > 0 {
        println!(
            "{}",
            style(format!(
                "{} caractère(s) hors A/T/G/C comptés dans la longueur",
                summary.uncounted()
            ))
            .yellow()
        );
    }
}

/// Affiche le tableau des quatre bases
pub fn display_composition_table(summary: &CompositionSummary) {
    let rows: Vec<BaseRow> = summary
        .bases
        .iter()
        .map(|entry| BaseRow {
            base: entry.base.as_char(),
            count: entry.count,
            percent: format!("{:.1}%", entry.percentage),
        })
        .collect();

    println!();
    println!("{}", Table::new(rows));
}
