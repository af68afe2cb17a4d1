//! gcscan Core Library
//!
//! Contenu GC par fenêtres et composition nucléotidique d'une séquence.

pub mod analysis;
pub mod composition;
pub mod error;
pub mod logging;
pub mod report;
pub mod sequence;
pub mod window;

// Réexportations principales
pub use analysis::{analyze, analyze_sequence, AnalysisConfig, AnalysisReport};
pub use composition::{summarize_composition, BaseCount, CompositionSummary};
pub use error::{GcError, Result};
pub use logging::init_logging;
// Les macros log_operation et log_error sont automatiquement exportées à la racine du crate
pub use report::{chart_title, render_html, summary_line, GcChart};
pub use sequence::{InputFormat, LoadOptions, Nucleotide, Sequence, ValidationMode};
pub use window::{windowed_gc, GcSeries, GcWindow, DEFAULT_WINDOW_SIZE, MIN_WINDOW_SIZE, WINDOW_SIZE_STEP};
