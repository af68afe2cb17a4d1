//! gcscan Web Server
//!
//! Serveur web: téléversement d'une séquence, graphique GC et résumé de composition

use actix_files::Files;
use actix_web::{web, App, HttpServer};
use actix_cors::Cors;
use tracing_actix_web::TracingLogger;

mod config;
mod models;
mod routes;
mod templates;

use config::AppConfig;
use models::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Charger la configuration
    let config = match AppConfig::load_from_file("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Erreur de chargement de la configuration: {}. Utilisation des valeurs par défaut.", e);
            AppConfig::default()
        }
    };

    // Initialiser le logging
    init_logging(&config.logging);

    // Initialiser Tera
    let tera = match templates::load() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Erreur d'initialisation de Tera: {}", e);
            std::process::exit(1);
        }
    };

    // Créer l'état de l'application
    let app_state = web::Data::new(AppState {
        tera,
        config: config.clone(),
    });

    let static_dir = config.server.static_files.clone().filter(|dir| {
        let exists = dir.is_dir();
        if !exists {
            tracing::warn!("Répertoire statique absent: {}", dir.display());
        }
        exists
    });

    tracing::info!("🧬 Démarrage du serveur gcscan sur http://{}:{}",
        config.server.host, config.server.port);

    HttpServer::new(move || {
        // Configurer CORS pour l'API JSON
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allow_any_header()
            .max_age(3600);

        let mut app = App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(app_state.clone())
            .configure(routes::configure);

        if let Some(dir) = &static_dir {
            app = app.service(Files::new("/static", dir));
        }
        app
    })
    .workers(config.server.workers)
    .bind((config.server.host.clone(), config.server.port))?
    .run()
    .await
}

/// Initialise le système de logging
fn init_logging(config: &crate::config::LoggingConfig) {
    let filter = match config.level.to_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "warn" => "warn",
        "error" => "error",
        _ => "info",
    };

    match config.format.to_lowercase().as_str() {
        "json" => {
            let _ = tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .try_init();
        }
        _ => {
            let _ = tracing_subscriber::fmt()
                .compact()
                .with_env_filter(filter)
                .try_init();
        }
    }
}
