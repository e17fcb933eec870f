// src/controleur/historique.rs
//
// Historique des calculs : journal en ajout seul.
// - une entrée par "=" (jamais modifiée ni retirée une à une)
// - effacement global en une opération
// - rien n’est persisté (durée de vie = celle de l’application)

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntreeHistorique {
    pub equation: String,
    pub reponse: String,
}

#[derive(Clone, Debug, Default)]
pub struct Historique {
    entrees: Vec<EntreeHistorique>,
}

impl Historique {
    pub fn ajouter(&mut self, equation: impl Into<String>, reponse: impl Into<String>) {
        self.entrees.push(EntreeHistorique {
            equation: equation.into(),
            reponse: reponse.into(),
        });
    }

    /// Tronque à vide.
    pub fn vider(&mut self) {
        self.entrees.clear();
    }

    /// Entrées dans l’ordre d’ajout (la plus ancienne d’abord).
    pub fn entrees(&self) -> &[EntreeHistorique] {
        &self.entrees
    }
}
