//! Composition nucléotidique de la séquence entière

use crate::error::{GcError, Result};
use crate::sequence::{Nucleotide, Sequence};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Effectif et pourcentage d'une base
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseCount {
    pub base: Nucleotide,
    pub count: usize,
    /// Rapporté à la longueur totale, pas à la somme des quatre bases
    pub percentage: f64,
}

/// Longueur totale et composition en A, T, G, C
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositionSummary {
    pub total_length: usize,
    /// Toujours dans l'ordre A, T, G, C
    pub bases: [BaseCount; 4],
}

impl CompositionSummary {
    fn entry(&self, base: Nucleotide) -> &BaseCount {
        // `bases` suit l'ordre de déclaration de Nucleotide
        &self.bases[base as usize]
    }

    pub fn count(&self, base: Nucleotide) -> usize {
        self.entry(base).count
    }

    pub fn percentage(&self, base: Nucleotide) -> f64 {
        self.entry(base).percentage
    }

    /// Somme des quatre effectifs
    pub fn counted(&self) -> usize {
        self.bases.iter().map(|b| b.count).sum()
    }

    /// Caractères comptés dans la longueur mais dans aucune base
    pub fn uncounted(&self) -> usize {
        self.total_length - self.counted()
    }
}

impl fmt::Display for CompositionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Summary: Full Length({} bp)", self.total_length)?;
        for entry in &self.bases {
            write!(f, " | {}({:.1}% {})", entry.base, entry.percentage, entry.count)?;
        }
        Ok(())
    }
}

/// Compte chaque base canonique et calcule sa part de la longueur totale
pub fn summarize_composition(sequence: &Sequence) -> Result<CompositionSummary> {
    let total_length = sequence.len();
    if total_length == 0 {
        return Err(GcError::EmptyInput);
    }

    let mut counts = [0usize; 4]; // A, T, G, C
    for &c in sequence.residues() {
        match Nucleotide::from_char(c) {
            Some(Nucleotide::A) => counts[0] += 1,
            Some(Nucleotide::T) => counts[1] += 1,
            Some(Nucleotide::G) => counts[2] += 1,
            Some(Nucleotide::C) => counts[3] += 1,
            None => {}
        }
    }

    let bases = Nucleotide::ALL.map(|base| {
        let count = counts[base as usize];
        BaseCount {
            base,
            count,
            percentage: (count as f64 / total_length as f64) * 100.0,
        }
    });

    Ok(CompositionSummary { total_length, bases })
}
