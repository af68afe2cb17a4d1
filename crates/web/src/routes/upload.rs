//! Lecture du formulaire multipart de téléversement

use actix_multipart::{Field, Multipart};
use actix_web::http::StatusCode;
use futures::TryStreamExt;
use gcscan_core::MIN_WINDOW_SIZE;
use thiserror::Error;
use tracing::debug;

use crate::models::Upload;

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Fichier trop volumineux: limite de {limit} octets")]
    TooLarge { limit: usize },

    #[error("Requête multipart invalide: {0}")]
    Multipart(String),

    #[error("Aucun fichier fourni")]
    MissingFile,

    #[error("Champ '{field}' invalide: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl UploadError {
    pub fn status(&self) -> StatusCode {
        match self {
            UploadError::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

/// Extrait le fichier et les paramètres d'analyse
///
/// Champs reconnus: `file`, `window_size`, `strict`, `fasta`.
pub async fn read_upload(
    payload: &mut Multipart,
    limit: usize,
    default_window_size: usize,
) -> Result<Upload, UploadError> {
    let mut file = None;
    let mut window_size = default_window_size;
    let mut strict = false;
    let mut fasta = false;

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| UploadError::Multipart(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);
        let bytes = read_field(&mut field, limit).await?;

        match name.as_str() {
            "file" => {
                debug!("Fichier reçu: {:?} ({} octets)", file_name, bytes.len());
                file = Some((file_name, bytes));
            }
            "window_size" => window_size = parse_window_size(&bytes)?,
            "strict" => strict = parse_flag(&bytes),
            "fasta" => fasta = parse_flag(&bytes),
            other => debug!("Champ ignoré: {}", other),
        }
    }

    let (file_name, data) = file.ok_or(UploadError::MissingFile)?;

    Ok(Upload {
        file_name,
        data,
        window_size,
        strict,
        fasta,
    })
}

async fn read_field(field: &mut Field, limit: usize) -> Result<Vec<u8>, UploadError> {
    let mut data = Vec::new();
    while let Some(chunk) = field
        .try_next()
        .await
        .map_err(|e| UploadError::Multipart(e.to_string()))?
    {
        if data.len() + chunk.len() > limit {
            return Err(UploadError::TooLarge { limit });
        }
        data.extend_from_slice(&chunk);
    }
    Ok(data)
}

fn parse_window_size(raw: &[u8]) -> Result<usize, UploadError> {
    let text = String::from_utf8_lossy(raw);
    let value: usize = text.trim().parse().map_err(|_| UploadError::InvalidField {
        field: "window_size",
        reason: format!("'{}' n'est pas un entier positif", text.trim()),
    })?;

    if value < MIN_WINDOW_SIZE {
        return Err(UploadError::InvalidField {
            field: "window_size",
            reason: format!("minimum {}", MIN_WINDOW_SIZE),
        });
    }
    Ok(value)
}

/// Une case cochée envoie "on"; l'API accepte aussi true/1
fn parse_flag(raw: &[u8]) -> bool {
    matches!(
        String::from_utf8_lossy(raw).trim().to_ascii_lowercase().as_str(),
        "on" | "true" | "1" | "yes"
    )
}
