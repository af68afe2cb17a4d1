//! Rendu du graphique GC (SVG) et de la page de résultat

use crate::analysis::AnalysisReport;
use crate::composition::CompositionSummary;
use crate::window::GcSeries;

pub const X_AXIS_LABEL: &str = "Position in Gene";
pub const Y_AXIS_LABEL: &str = "GC Content (%)";

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 450.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 60.0;
const MARGIN_BOTTOM: f64 = 60.0;
const LINE_COLOR: &str = "blue";
const LINE_WIDTH: f64 = 2.0;
const MARKER_SIZE: f64 = 6.0;
const X_TICKS: usize = 5;

/// Titre du graphique pour une taille de fenêtre
pub fn chart_title(window_size: usize) -> String {
    format!("GC Content Across Gene (Window size: {} bp)", window_size)
}

/// Ligne de résumé affichée sous le graphique
pub fn summary_line(summary: &CompositionSummary) -> String {
    summary.to_string()
}

/// Graphique ligne + marqueurs d'une série GC
pub struct GcChart<'a> {
    series: &'a GcSeries,
}

impl<'a> GcChart<'a> {
    pub fn new(series: &'a GcSeries) -> Self {
        Self { series }
    }

    pub fn title(&self) -> String {
        chart_title(self.series.window_size())
    }

    /// Domaine de l'axe des x, élargi quand il n'y a qu'un point
    fn x_domain(&self) -> (f64, f64) {
        let positions = self.series.positions();
        match (positions.first(), positions.last()) {
            (Some(&first), Some(&last)) if last > first => (first as f64, last as f64),
            (Some(&only), _) => (only as f64 - 1.0, only as f64 + 1.0),
            _ => (0.0, self.series.window_size() as f64),
        }
    }

    fn project(&self, position: f64, gc: f64) -> (f64, f64) {
        let (x_min, x_max) = self.x_domain();
        let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        let x = MARGIN_LEFT + (position - x_min) / (x_max - x_min) * plot_w;
        let y = MARGIN_TOP + (1.0 - gc / 100.0) * plot_h;
        (x, y)
    }

    /// Rend le graphique en SVG autonome
    ///
    /// Une série vide produit les axes et le titre, sans point.
    pub fn render_svg(&self) -> String {
        let mut svg = String::new();
        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="Arial, sans-serif">"#,
            w = WIDTH,
            h = HEIGHT
        ));
        svg.push('\n');
        svg.push_str(&format!(
            r#"<rect width="{}" height="{}" fill="white"/>"#,
            WIDTH, HEIGHT
        ));
        svg.push('\n');
        svg.push_str(&format!(
            r#"<text class="title" x="{}" y="30" text-anchor="middle" font-size="18">{}</text>"#,
            WIDTH / 2.0,
            self.title()
        ));
        svg.push('\n');

        svg.push_str(&self.render_axes());
        svg.push_str(&self.render_trace());

        svg.push_str("</svg>\n");
        svg
    }

    fn render_axes(&self) -> String {
        let mut out = String::new();
        let left = MARGIN_LEFT;
        let right = WIDTH - MARGIN_RIGHT;
        let top = MARGIN_TOP;
        let bottom = HEIGHT - MARGIN_BOTTOM;

        // Grille horizontale et graduations y: 0, 20, ..., 100
        for gc in (0..=100).step_by(20) {
            let (_, y) = self.project(0.0, gc as f64);
            out.push_str(&format!(
                r##"<line x1="{left}" y1="{y:.2}" x2="{right}" y2="{y:.2}" stroke="#e5e5e5"/>"##
            ));
            out.push_str(&format!(
                r#"<text x="{:.2}" y="{:.2}" text-anchor="end" font-size="12">{}</text>"#,
                left - 8.0,
                y + 4.0,
                gc
            ));
            out.push('\n');
        }

        // Graduations x
        let ticks: Vec<f64> = match self.series.len() {
            0 => Vec::new(),
            1 => vec![self.series.windows()[0].position as f64],
            _ => {
                let (x_min, x_max) = self.x_domain();
                (0..X_TICKS)
                    .map(|i| x_min + (x_max - x_min) * i as f64 / (X_TICKS - 1) as f64)
                    .collect()
            }
        };
        for value in ticks {
            let (x, _) = self.project(value, 0.0);
            out.push_str(&format!(
                r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" font-size="12">{}</text>"#,
                x,
                bottom + 18.0,
                value.round()
            ));
            out.push('\n');
        }

        out.push_str(&format!(
            r#"<line x1="{left}" y1="{bottom}" x2="{right}" y2="{bottom}" stroke="black"/>"#
        ));
        out.push_str(&format!(
            r#"<line x1="{left}" y1="{top}" x2="{left}" y2="{bottom}" stroke="black"/>"#
        ));
        out.push('\n');
        out.push_str(&format!(
            r#"<text class="x-label" x="{:.2}" y="{:.2}" text-anchor="middle" font-size="14">{}</text>"#,
            (left + right) / 2.0,
            HEIGHT - 15.0,
            X_AXIS_LABEL
        ));
        out.push('\n');
        out.push_str(&format!(
            r#"<text class="y-label" x="20" y="{y:.2}" text-anchor="middle" font-size="14" transform="rotate(-90 20 {y:.2})">{}</text>"#,
            Y_AXIS_LABEL,
            y = (top + bottom) / 2.0
        ));
        out.push('\n');
        out
    }

    fn render_trace(&self) -> String {
        if self.series.is_empty() {
            return String::new();
        }

        let points: Vec<(f64, f64)> = self
            .series
            .windows()
            .iter()
            .map(|w| self.project(w.position as f64, w.gc_percentage))
            .collect();

        let mut out = String::new();
        let path = points
            .iter()
            .map(|(x, y)| format!("{:.2},{:.2}", x, y))
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&format!(
            r#"<polyline class="gc-line" points="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            path, LINE_COLOR, LINE_WIDTH
        ));
        out.push('\n');

        for (window, (x, y)) in self.series.windows().iter().zip(&points) {
            out.push_str(&format!(
                r#"<circle class="gc-marker" cx="{:.2}" cy="{:.2}" r="{}" fill="{}"><title>{}: {:.1}%</title></circle>"#,
                x,
                y,
                MARKER_SIZE / 2.0,
                LINE_COLOR,
                window.position,
                window.gc_percentage
            ));
            out.push('\n');
        }
        out
    }
}

/// Page HTML autonome: graphique puis ligne de résumé
pub fn render_html(report: &AnalysisReport) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>GC Content Calculator</title>
    <style>
        body {{ font-family: Arial, sans-serif; margin: 20px; }}
        .summary {{ margin: 20px 0; font-size: 15px; }}
    </style>
</head>
<body>
    <h1>GC Content Calculator</h1>
    {}
    <p class="summary">{}</p>
</body>
</html>
"#,
        GcChart::new(&report.series).render_svg(),
        summary_line(&report.summary)
    )
}
