//! Contenu GC par fenêtres fixes, sans chevauchement
//!
//! La séquence est découpée en fenêtres de `window_size` caractères
//! commençant aux positions 0, w, 2w, ... La dernière fenêtre incomplète
//! est ignorée: le nombre de fenêtres vaut `floor(len / w)`.

use crate::error::{GcError, Result};
use crate::sequence::{Nucleotide, Sequence};
use serde::{Deserialize, Serialize};

/// Taille minimale proposée à l'utilisateur
pub const MIN_WINDOW_SIZE: usize = 10;
/// Taille par défaut
pub const DEFAULT_WINDOW_SIZE: usize = 100;
/// Pas de l'incrément dans le formulaire
pub const WINDOW_SIZE_STEP: usize = 10;

/// Une fenêtre complète et son pourcentage GC
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GcWindow {
    /// Position de départ (base 0)
    pub position: usize,
    /// Pourcentage GC dans [0, 100]
    pub gc_percentage: f64,
}

/// Série ordonnée des fenêtres, positions croissantes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GcSeries {
    window_size: usize,
    windows: Vec<GcWindow>,
}

impl GcSeries {
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn windows(&self) -> &[GcWindow] {
        &self.windows
    }

    pub fn positions(&self) -> Vec<usize> {
        self.windows.iter().map(|w| w.position).collect()
    }

    pub fn percentages(&self) -> Vec<f64> {
        self.windows.iter().map(|w| w.gc_percentage).collect()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Moyenne des pourcentages, None si aucune fenêtre complète
    pub fn mean(&self) -> Option<f64> {
        if self.windows.is_empty() {
            return None;
        }
        Some(self.windows.iter().map(|w| w.gc_percentage).sum::<f64>() / self.windows.len() as f64)
    }

    pub fn min(&self) -> Option<f64> {
        self.windows.iter().map(|w| w.gc_percentage).reduce(f64::min)
    }

    pub fn max(&self) -> Option<f64> {
        self.windows.iter().map(|w| w.gc_percentage).reduce(f64::max)
    }
}

/// Calcule le pourcentage GC de chaque fenêtre complète
///
/// Seuls 'G' et 'C' majuscules sont comptés. Une séquence plus courte que
/// la fenêtre donne une série vide, ce n'est pas une erreur.
pub fn windowed_gc(sequence: &Sequence, window_size: usize) -> Result<GcSeries> {
    if window_size == 0 {
        return Err(GcError::InvalidWindowSize(window_size));
    }

    let windows: Vec<GcWindow> = sequence
        .residues()
        .chunks_exact(window_size)
        .enumerate()
        .map(|(i, window)| GcWindow {
            position: i * window_size,
            gc_percentage: (gc_count(window) as f64 / window_size as f64) * 100.0,
        })
        .collect();

    if windows.is_empty() {
        tracing::info!(
            "Aucune fenêtre complète: longueur {} < fenêtre {}",
            sequence.len(),
            window_size
        );
    }

    Ok(GcSeries { window_size, windows })
}

fn gc_count(window: &[char]) -> usize {
    window
        .iter()
        .filter(|&&c| Nucleotide::from_char(c).is_some_and(Nucleotide::is_gc))
        .count()
}
