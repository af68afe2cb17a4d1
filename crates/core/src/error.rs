//! Types d'erreurs pour l'analyse GC

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GcError {
    #[error("Séquence vide: impossible de calculer les pourcentages")]
    EmptyInput,

    #[error("Fichier non décodable en UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),

    #[error("Taille de fenêtre invalide: {0} (minimum 1)")]
    InvalidWindowSize(usize),

    #[error("Base invalide '{base}' à la position {position}")]
    InvalidBase { base: char, position: usize },

    #[error("Format FASTA invalide: {0}")]
    Fasta(String),

    #[error("Erreur IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erreur de sérialisation: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GcError {
    /// Vrai si l'erreur provient du contenu fourni par l'utilisateur
    pub fn is_input_error(&self) -> bool {
        !matches!(self, GcError::Io(_) | GcError::Serialization(_))
    }
}

pub type Result<T> = std::result::Result<T, GcError>;
