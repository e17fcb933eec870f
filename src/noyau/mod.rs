//! Noyau d’expressions (sans état)
//!
//! Organisation interne :
//! - jetons.rs   : tokenisation (décimaux, + - * / × ÷, parenthèses)
//! - rpn.rs      : shunting-yard + évaluation de la RPN
//! - format.rs   : nombre -> texte (et lecture de préfixe numérique)
//! - erreur.rs   : erreurs internes (jamais exposées hors du moteur)
//! - moteur.rs   : API publique (validation, "/0", évaluation)

pub mod erreur;
pub mod format;
pub mod jetons;
pub mod moteur;
pub mod rpn;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use moteur::{contient_operateur, evaluer};
