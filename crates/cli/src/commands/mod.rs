//! Commandes CLI

pub mod analyze;
pub mod composition;
