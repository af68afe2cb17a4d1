//! Affichage terminal

pub mod stats;
pub mod visualizer;
