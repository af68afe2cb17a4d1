//! Visualisation de la série GC

use gcscan_core::{chart_title, GcSeries};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct WindowRow {
    #[tabled(rename = "Position")]
    position: usize,
    #[tabled(rename = "GC%")]
    gc_percent: String,
}

/// Affiche une ligne par fenêtre complète
pub fn display_series(series: &GcSeries) {
    println!();
    println!("{}", chart_title(series.window_size()));

    if series.is_empty() {
        println!("Aucune fenêtre complète");
        return;
    }

    let rows: Vec<WindowRow> = series
        .windows()
        .iter()
        .map(|w| WindowRow {
            position: w.position,
            gc_percent: format!("{:.1}%", w.gc_percentage),
        })
        .collect();

    println!("{}", Table::new(rows));

    if let (Some(mean), Some(min), Some(max)) = (series.mean(), series.min(), series.max()) {
        println!(
            "{} fenêtres | GC moyen {:.1}% | min {:.1}% | max {:.1}%",
            series.len(),
            mean,
            min,
            max
        );
    }
}
