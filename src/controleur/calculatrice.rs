//! Contrôleur d’édition (état + transitions).
//!
//! Source de vérité : l’expression INTERNE ('*' et '/').
//! L’affichage ('×' et '÷') en est toujours dérivé à la lecture.
//!
//! Contrats :
//! - Deux opérateurs ne se suivent jamais (refus à l’insertion).
//! - Aucune erreur ne sort : l’échec se lit dans le texte affiché
//!   ("", "undefined", "Invalid Input").
//! - Après CHAQUE commande, l’aperçu est recalculé à partir de l’expression seule.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::noyau::format::{format_nombre, lire_prefixe_nombre};
use crate::noyau::{contient_operateur, evaluer};

use super::commande::{est_operateur, Commande};
use super::historique::Historique;

/// Remplace toute l’expression après √ d’un nombre négatif.
pub const ENTREE_INVALIDE: &str = "Invalid Input";

lazy_static! {
    /// Nombre final : signe optionnel, chiffres, partie décimale optionnelle.
    static ref NOMBRE_FINAL: Regex = Regex::new(r"-?\d+(\.\d+)?$").unwrap();
}

/// Sélection du champ texte, en positions de caractères de l’affichage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub debut: usize,
    pub fin: usize,
}

/// Forme d’affichage : '*' -> '×', '/' -> '÷' (caractère pour caractère).
pub fn vers_affichage(interne: &str) -> String {
    interne
        .chars()
        .map(|c| match c {
            '*' => '×',
            '/' => '÷',
            c => c,
        })
        .collect()
}

/// Position de caractère -> position d’octet (bornée à la fin).
fn octet_de(s: &str, position: usize) -> usize {
    s.char_indices()
        .nth(position)
        .map(|(o, _)| o)
        .unwrap_or(s.len())
}

#[derive(Clone, Debug, Default)]
pub struct Calculatrice {
    expression: String,
    apercu: String,

    // vrai juste après un "=" réussi
    reponse_affichee: bool,
    dernier_resultat: String,

    // point d’insertion signalé par le champ texte
    selection: Selection,
    selection_active: bool,

    historique: Historique,
}

impl Calculatrice {
    /* ------------------------ Lecture ------------------------ */

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn affichage(&self) -> String {
        vers_affichage(&self.expression)
    }

    pub fn apercu(&self) -> &str {
        &self.apercu
    }

    pub fn reponse_affichee(&self) -> bool {
        self.reponse_affichee
    }

    pub fn historique(&self) -> &Historique {
        &self.historique
    }

    /* ------------------------ Frontières ------------------------ */

    /// Champ texte : l’utilisateur a touché / glissé dans l’affichage.
    /// Cette sélection devient le point d’insertion jusqu’au prochain ajout en fin.
    pub fn signaler_selection(&mut self, debut: usize, fin: usize) {
        self.selection = Selection {
            debut: debut.min(fin),
            fin: debut.max(fin),
        };
        self.selection_active = true;
    }

    /// Pavé : étiquette de touche -> commande. Faux si l’étiquette est inconnue.
    pub fn appuyer(&mut self, etiquette: &str) -> bool {
        match Commande::depuis_etiquette(etiquette) {
            Some(cmd) => {
                self.appliquer(cmd);
                true
            }
            None => {
                trace!(etiquette, "touche inconnue");
                false
            }
        }
    }

    /// Historique : effacement global.
    pub fn vider_historique(&mut self) {
        self.historique.vider();
        debug!("historique vidé");
    }

    /// Applique une commande puis recalcule l’aperçu (toujours, dans cet ordre).
    pub fn appliquer(&mut self, cmd: Commande) {
        match cmd {
            Commande::Saisie(c) => self.saisir(c),
            Commande::Parentheses => self.basculer_parenthese(),
            Commande::Pourcent => self.pourcent(),
            Commande::Racine => self.racine(),
            Commande::Retour => {
                self.expression.pop();
            }
            Commande::Effacer => self.expression.clear(),
            Commande::Egal => self.egal(),
        }

        self.recalculer_apercu();

        debug!(
            ?cmd,
            expression = %self.expression,
            apercu = %self.apercu,
            reponse = self.reponse_affichee,
            "commande appliquée"
        );
    }

    /* ------------------------ Transitions ------------------------ */

    fn saisir(&mut self, c: char) {
        // une réponse affichée : on repart d’une expression neuve
        if self.reponse_affichee {
            self.expression.clear();
            self.reponse_affichee = false;
        }

        let c = if c == 'X' { '*' } else { c };

        if let Some(dernier) = self.expression.chars().last() {
            if est_operateur(dernier) && est_operateur(c) {
                trace!(%dernier, %c, "opérateur consécutif ignoré");
                return;
            }
        }

        let n = self.expression.chars().count();
        let fin = self.selection.fin;

        if self.selection_active && fin < n {
            let octet = octet_de(&self.expression, fin);
            self.expression.insert(octet, c);
            self.selection = Selection {
                debut: self.selection.debut + 1,
                fin: fin + 1,
            };
        } else {
            self.expression.push(c);
            self.selection = Selection {
                debut: n + 1,
                fin: n + 1,
            };
            self.selection_active = false;
        }
    }

    fn basculer_parenthese(&mut self) {
        let ouvertes = self.expression.matches('(').count();
        let fermees = self.expression.matches(')').count();

        if ouvertes > fermees {
            self.saisir(')');
        } else {
            self.saisir('(');
        }
    }

    /// √ du nombre final. Nombre négatif => toute l’expression devient "Invalid Input".
    fn racine(&mut self) {
        // √ et % travaillent sur la réponse affichée
        let sur_reponse = std::mem::take(&mut self.reponse_affichee);

        let nombre = NOMBRE_FINAL
            .find(&self.expression)
            .and_then(|m| m.as_str().parse::<f64>().ok().map(|v| (m.start(), v)));
        let Some((debut, v)) = nombre else {
            trace!(expression = %self.expression, "√ sans nombre final");
            self.abandonner_reponse(sur_reponse);
            return;
        };

        // -0 passe (racine de -0 => 0)
        if v >= 0.0 {
            let r = format_nombre(v.sqrt());
            self.expression.truncate(debut);
            self.expression.push_str(&r);
        } else {
            self.expression = ENTREE_INVALIDE.to_string();
        }
    }

    /// % : l’opérande final (après le dernier opérateur) est divisé par 100.
    fn pourcent(&mut self) {
        let sur_reponse = std::mem::take(&mut self.reponse_affichee);

        if self.expression.is_empty() {
            return;
        }

        let operande = self
            .expression
            .rsplit(['+', '-', '*', '/'])
            .next()
            .unwrap_or("");
        let debut = self.expression.len() - operande.len();
        let valeur = lire_prefixe_nombre(operande);

        let Some(v) = valeur else {
            trace!(expression = %self.expression, "% sans opérande numérique");
            self.abandonner_reponse(sur_reponse);
            return;
        };
        let pct = format_nombre(v / 100.0);

        self.expression.truncate(debut);
        self.expression.push_str(&pct);
    }

    /// Réponse non numérique ("undefined", "Infinity", ...) sous √ ou % :
    /// on repart d’une expression vide, comme pour une saisie.
    fn abandonner_reponse(&mut self, sur_reponse: bool) {
        if sur_reponse {
            self.expression.clear();
        }
    }

    fn egal(&mut self) {
        if self.expression.is_empty() {
            return;
        }
        // "=" répété sans saisie : rien ne change
        if self.reponse_affichee && self.expression == self.dernier_resultat {
            trace!("réponse déjà affichée");
            return;
        }

        let resultat = evaluer(&self.expression);
        let equation = std::mem::replace(&mut self.expression, resultat.clone());

        debug!(%equation, %resultat, "calcul mémorisé");

        self.apercu.clear();
        self.historique.ajouter(equation, resultat.clone());
        self.dernier_resultat = resultat;
        self.reponse_affichee = true;
    }

    /// Aperçu = f(expression) : vide sans opérateur, sinon l’évaluation.
    fn recalculer_apercu(&mut self) {
        self.apercu = if contient_operateur(&self.expression) {
            evaluer(&self.expression)
        } else {
            String::new()
        };
        trace!(apercu = %self.apercu, "aperçu recalculé");
    }
}
