//! Système de logging pour gcscan

use tracing_subscriber::{fmt, EnvFilter};

/// Initialise le système de logging
///
/// `RUST_LOG` a priorité; sinon le niveau dérive de la verbosité
/// (0 = warn, 1 = info, 2 = debug, 3+ = trace).
pub fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    // try_init: un second appel (tests, binaires embarqués) ne doit pas paniquer
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

/// Macro pour le logging des opérations d'analyse
#[macro_export]
macro_rules! log_operation {
    ($name:expr, $block:block) => {{
        let span = tracing::span!(tracing::Level::INFO, $name);
        let _enter = span.enter();
        tracing::debug!("Début de l'opération: {}", $name);
        let result = $block;
        tracing::debug!("Fin de l'opération: {}", $name);
        result
    }};
}

/// Macro pour le logging des erreurs
#[macro_export]
macro_rules! log_error {
    ($error:expr) => {{
        let error = $error;
        tracing::error!("Erreur: {}", error);
        error
    }};
}
