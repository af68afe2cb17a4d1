//! Chargement des séquences nucléotidiques

use crate::error::{GcError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Les quatre bases canoniques comptabilisées
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nucleotide {
    A,  // Adénine
    T,  // Thymine
    G,  // Guanine
    C,  // Cytosine
}

impl Nucleotide {
    /// Ordre d'affichage du résumé
    pub const ALL: [Nucleotide; 4] = [Nucleotide::A, Nucleotide::T, Nucleotide::G, Nucleotide::C];

    /// Correspondance exacte, sensible à la casse
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Nucleotide::A),
            'T' => Some(Nucleotide::T),
            'G' => Some(Nucleotide::G),
            'C' => Some(Nucleotide::C),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Nucleotide::A => 'A',
            Nucleotide::T => 'T',
            Nucleotide::G => 'G',
            Nucleotide::C => 'C',
        }
    }

    /// Retourne true si c'est une base GC
    pub fn is_gc(self) -> bool {
        matches!(self, Nucleotide::G | Nucleotide::C)
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Politique appliquée aux caractères hors {A, T, G, C}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Les caractères inconnus restent dans la séquence sans être comptés
    #[default]
    Permissive,
    /// Le premier caractère inconnu rejette la séquence
    Strict,
}

/// Interprétation du contenu téléversé
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// Texte brut: une ligne d'en-tête '>' éventuelle fait partie de la séquence
    #[default]
    Raw,
    /// FASTA: les en-têtes sont retirés et les enregistrements concaténés
    Fasta,
}

/// Options de chargement d'une séquence
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LoadOptions {
    pub validation: ValidationMode,
    pub format: InputFormat,
    /// Retire aussi les '\r' des fins de ligne CRLF; sinon ils comptent dans la longueur
    pub strip_carriage_returns: bool,
}

/// Séquence immuable, lue une fois par analyse
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sequence {
    residues: Vec<char>,
}

impl Sequence {
    /// Crée une séquence depuis du texte, en mode permissif
    pub fn new(text: &str) -> Self {
        Self {
            residues: strip_newlines(text, false).collect(),
        }
    }

    /// Décode les octets d'un fichier et construit la séquence
    pub fn from_bytes(bytes: &[u8], options: &LoadOptions) -> Result<Self> {
        let text = std::str::from_utf8(bytes)?;

        let residues: Vec<char> = match options.format {
            InputFormat::Raw => strip_newlines(text, options.strip_carriage_returns).collect(),
            InputFormat::Fasta => read_fasta_residues(text)?,
        };

        let sequence = Self { residues };
        if options.validation == ValidationMode::Strict {
            sequence.check_canonical()?;
        }

        tracing::debug!(
            "Séquence chargée: {} caractères ({} octets)",
            sequence.len(),
            bytes.len()
        );
        Ok(sequence)
    }

    /// Vérifie que chaque caractère est une base canonique
    pub fn check_canonical(&self) -> Result<()> {
        match self
            .residues
            .iter()
            .position(|&c| Nucleotide::from_char(c).is_none())
        {
            Some(position) => Err(GcError::InvalidBase {
                base: self.residues[position],
                position,
            }),
            None => Ok(()),
        }
    }

    pub fn residues(&self) -> &[char] {
        &self.residues
    }

    /// Nombre de caractères (et non d'octets)
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
}

impl From<&str> for Sequence {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.residues {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

fn strip_newlines(text: &str, strip_cr: bool) -> impl Iterator<Item = char> + '_ {
    text.chars().filter(move |&c| c != '\n' && !(strip_cr && c == '\r'))
}

/// Concatène les séquences de tous les enregistrements FASTA
fn read_fasta_residues(text: &str) -> Result<Vec<char>> {
    let reader = bio::io::fasta::Reader::new(text.as_bytes());
    let mut residues = Vec::new();

    for record in reader.records() {
        let record = record.map_err(|e| GcError::Fasta(e.to_string()))?;
        tracing::debug!("Enregistrement FASTA '{}' ({} bases)", record.id(), record.seq().len());
        residues.extend(std::str::from_utf8(record.seq())?.chars());
    }

    Ok(residues)
}
