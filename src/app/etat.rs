//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder la calculatrice (expression, aperçu, historique) et l’écran courant
//! (pavé ou historique). Les règles d’édition vivent dans `controleur`.
//!
//! Contrats :
//! - Aucune évaluation ici (tout passe par `Calculatrice::appliquer`).
//! - Basculer d’écran n’a aucun effet sur l’état de calcul.

use tracing::debug;

use crate::controleur::Calculatrice;

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub calc: Calculatrice,

    // --- écran courant ---
    pub vue_historique: bool,
}

impl AppCalc {
    /// Touche du pavé (étiquette affichée : "7", "X", "()", "√", "=", ...).
    pub fn appuyer(&mut self, etiquette: &str) {
        self.calc.appuyer(etiquette);
    }

    /// C : effacer l’expression (raccourci Échap).
    pub fn clear_entree(&mut self) {
        self.calc.appuyer("C");
    }

    /// Pavé <-> historique (le “retour” de l’historique passe aussi par ici).
    pub fn basculer_historique(&mut self) {
        self.vue_historique = !self.vue_historique;
        debug!(vue_historique = self.vue_historique, "changement d’écran");
    }

    pub fn vider_historique(&mut self) {
        self.calc.vider_historique();
    }
}
