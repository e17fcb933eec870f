//! Contrôleur d’édition
//!
//! Organisation interne :
//! - commande.rs     : commandes + étiquettes du pavé
//! - historique.rs   : journal {équation, réponse} en ajout seul
//! - calculatrice.rs : état d’édition + transitions + aperçu

pub mod calculatrice;
pub mod commande;
pub mod historique;

#[cfg(test)]
mod tests_scenarios;

pub use calculatrice::{vers_affichage, Calculatrice};
