//! Routes de l'API web

use actix_multipart::Multipart;
use actix_web::{get, http::StatusCode, post, web, HttpResponse, Responder};
use gcscan_core::{GcChart, GcError, MIN_WINDOW_SIZE, WINDOW_SIZE_STEP};
use tracing::{error, info, instrument, warn};

use crate::models::{AnalyzeResponse, AppState, ErrorResponse, Upload};

mod upload;

use upload::UploadError;

/// Enregistre toutes les routes de l'application
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(analyze_page)
        .service(api_analyze)
        .service(health_check);
}

/// Erreur d'une requête d'analyse, avant ou pendant le calcul
#[derive(Debug)]
enum RequestError {
    Upload(UploadError),
    Analysis(GcError),
}

impl RequestError {
    fn status(&self) -> StatusCode {
        match self {
            RequestError::Upload(e) => e.status(),
            RequestError::Analysis(GcError::EmptyInput) => StatusCode::UNPROCESSABLE_ENTITY,
            RequestError::Analysis(e) if e.is_input_error() => StatusCode::BAD_REQUEST,
            RequestError::Analysis(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn to_response(&self) -> ErrorResponse {
        let status = self.status();
        let (error, details) = match self {
            RequestError::Upload(e) => ("Téléversement rejeté", e.to_string()),
            RequestError::Analysis(e) => ("Analyse impossible", e.to_string()),
        };
        ErrorResponse::with_details(error.to_string(), details, status.as_u16())
    }
}

/// Lit le formulaire puis lance le pipeline complet
async fn run_analysis(
    data: &web::Data<AppState>,
    payload: &mut Multipart,
) -> Result<(Upload, gcscan_core::AnalysisReport), RequestError> {
    let upload = upload::read_upload(
        payload,
        data.config.server.upload_limit,
        data.config.analysis.default_window_size,
    )
    .await
    .map_err(RequestError::Upload)?;

    let report = gcscan_core::analyze(&upload.data, &upload.analysis_config())
        .map_err(RequestError::Analysis)?;

    info!(
        "Analyse terminée: {:?}, {} fenêtres de {} bp",
        upload.file_name,
        report.series.len(),
        report.window_size
    );
    Ok((upload, report))
}

fn render_error_page(data: &AppState, err: &RequestError) -> HttpResponse {
    let status = err.status();
    if status.is_server_error() {
        error!("Erreur d'analyse: {:?}", err);
    } else {
        warn!("Requête rejetée: {:?}", err);
    }

    let body = err.to_response();
    let mut ctx = tera::Context::new();
    ctx.insert("title", "Erreur");
    ctx.insert("error", &body.error);
    ctx.insert("details", &body.details);
    ctx.insert("code", &body.code);

    match data.tera.render("error.html", &ctx) {
        Ok(rendered) => HttpResponse::build(status).content_type("text/html").body(rendered),
        Err(e) => {
            error!("Erreur de rendu du template error: {}", e);
            HttpResponse::build(status).json(body)
        }
    }
}

/// Route pour la page d'accueil: formulaire de téléversement
#[get("/")]
#[instrument(skip_all)]
pub async fn index(data: web::Data<AppState>) -> impl Responder {
    let mut ctx = tera::Context::new();
    ctx.insert("title", "GC Content Calculator");
    ctx.insert("version", env!("CARGO_PKG_VERSION"));
    ctx.insert("default_window_size", &data.config.analysis.default_window_size);
    ctx.insert("min_window_size", &MIN_WINDOW_SIZE);
    ctx.insert("window_size_step", &WINDOW_SIZE_STEP);

    match data.tera.render("index.html", &ctx) {
        Ok(rendered) => HttpResponse::Ok().content_type("text/html").body(rendered),
        Err(e) => {
            error!("Erreur de rendu du template: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "Erreur de rendu".to_string(),
                500
            ))
        }
    }
}

/// Route pour la page de résultat: graphique et résumé
#[post("/analyze")]
#[instrument(skip_all)]
pub async fn analyze_page(data: web::Data<AppState>, mut payload: Multipart) -> impl Responder {
    info!("Nouvelle requête d'analyse (page)");

    let (upload, report) = match run_analysis(&data, &mut payload).await {
        Ok(result) => result,
        Err(e) => return render_error_page(&data, &e),
    };

    let response = AnalyzeResponse::new(upload.file_name, report);
    let mut ctx = tera::Context::new();
    ctx.insert("title", "GC Content Calculator");
    ctx.insert("file_name", &response.file_name);
    ctx.insert("chart_svg", &GcChart::new(&response.report.series).render_svg());
    ctx.insert("summary_line", &response.summary_line);
    ctx.insert("window_count", &response.report.series.len());
    ctx.insert("window_size", &response.report.window_size);

    match data.tera.render("result.html", &ctx) {
        Ok(rendered) => HttpResponse::Ok().content_type("text/html").body(rendered),
        Err(e) => {
            error!("Erreur de rendu du template result: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "Erreur de rendu".to_string(),
                500
            ))
        }
    }
}

/// Route pour l'API d'analyse (JSON)
#[post("/api/analyze")]
#[instrument(skip_all)]
pub async fn api_analyze(data: web::Data<AppState>, mut payload: Multipart) -> impl Responder {
    info!("Nouvelle requête d'analyse (API)");

    match run_analysis(&data, &mut payload).await {
        Ok((upload, report)) => HttpResponse::Ok().json(AnalyzeResponse::new(upload.file_name, report)),
        Err(e) => {
            warn!("Requête API rejetée: {:?}", e);
            HttpResponse::build(e.status()).json(e.to_response())
        }
    }
}

/// Route pour la santé de l'API
#[get("/health")]
#[instrument]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use actix_web::{http::header, test, App};

    const BOUNDARY: &str = "gcscan-test-boundary";

    fn state() -> web::Data<AppState> {
        state_with(AppConfig::default())
    }

    fn state_with(config: AppConfig) -> web::Data<AppState> {
        web::Data::new(AppState {
            tera: crate::templates::load().unwrap(),
            config,
        })
    }

    /// Construit un corps multipart: (nom, nom de fichier, contenu)
    fn multipart(fields: &[(&str, Option<&str>, &[u8])]) -> Vec<u8> {
        let mut body = Vec::new();
        for (name, file_name, content) in fields {
            body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
            match file_name {
                Some(f) => body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: text/plain\r\n\r\n",
                        name, f
                    )
                    .as_bytes(),
                ),
                None => body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
                ),
            }
            body.extend_from_slice(content);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
        body
    }

    fn post(uri: &str, body: Vec<u8>) -> test::TestRequest {
        test::TestRequest::post()
            .uri(uri)
            .insert_header((
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            ))
            .set_payload(body)
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().app_data(state()).configure(configure)).await;
        let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_index_form() {
        let app = test::init_service(App::new().app_data(state()).configure(configure)).await;
        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert!(resp.status().is_success());

        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains("min=\"10\""));
        assert!(body.contains("value=\"100\""));
        assert!(body.contains("step=\"10\""));
    }

    #[actix_web::test]
    async fn test_api_analyze() {
        let app = test::init_service(App::new().app_data(state()).configure(configure)).await;
        let body = multipart(&[
            ("window_size", None, &b"10"[..]),
            ("file", Some("gene.txt"), &b"ATGCATGCAG\nGGGGGCCCCC\nAT\n"[..]),
        ]);
        let resp = test::call_service(&app, post("/api/analyze", body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["file_name"], "gene.txt");
        assert_eq!(json["chart_title"], "GC Content Across Gene (Window size: 10 bp)");
        assert_eq!(json["report"]["series"]["windows"][0]["gc_percentage"], 50.0);
        assert_eq!(json["report"]["series"]["windows"][1]["position"], 10);
        assert_eq!(json["report"]["series"]["windows"][1]["gc_percentage"], 100.0);
        assert_eq!(
            json["summary_line"],
            "Summary: Full Length(22 bp) | A(18.2% 4) | T(13.6% 3) | G(36.4% 8) | C(31.8% 7)"
        );
    }

    #[actix_web::test]
    async fn test_empty_upload_is_unprocessable() {
        let app = test::init_service(App::new().app_data(state()).configure(configure)).await;
        let body = multipart(&[("file", Some("empty.txt"), &b""[..])]);
        let resp = test::call_service(&app, post("/api/analyze", body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["code"], 422);
    }

    #[actix_web::test]
    async fn test_binary_upload_is_rejected() {
        let app = test::init_service(App::new().app_data(state()).configure(configure)).await;
        let body = multipart(&[("file", Some("gene.bin"), &[0xffu8, 0xfe, 0x41][..])]);
        let resp = test::call_service(&app, post("/analyze", body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let html = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(html.contains("UTF-8"));
    }

    #[actix_web::test]
    async fn test_upload_over_limit() {
        let mut config = AppConfig::default();
        config.server.upload_limit = 8;
        let app = test::init_service(App::new().app_data(state_with(config)).configure(configure)).await;

        let body = multipart(&[("file", Some("gene.txt"), &b"ATGCATGCATGC"[..])]);
        let resp = test::call_service(&app, post("/api/analyze", body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["code"], 413);
    }

    #[actix_web::test]
    async fn test_missing_file() {
        let app = test::init_service(App::new().app_data(state()).configure(configure)).await;
        let body = multipart(&[("window_size", None, &b"100"[..])]);
        let resp = test::call_service(&app, post("/api/analyze", body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_result_page() {
        let app = test::init_service(App::new().app_data(state()).configure(configure)).await;
        let body = multipart(&[("file", Some("short.fasta"), &b"ATGC"[..])]);
        let resp = test::call_service(&app, post("/analyze", body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let html = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(html.contains("<svg"));
        assert!(html.contains("Window size: 100 bp"));
        assert!(html.contains("Summary: Full Length(4 bp)"));
    }
}
