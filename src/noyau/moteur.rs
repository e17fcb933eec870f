//! Noyau — moteur d’expressions (sans état)
//!
//! Quatre opérations pures, utilisées par le contrôleur d’édition :
//! - `contient_operateur` : un aperçu a-t-il un sens ?
//! - `expression_valide`  : liste blanche de caractères (première ligne de défense)
//! - `division_par_zero`  : heuristique SYNTAXIQUE "/0" (ne voit pas "1/(2-2)")
//! - `evaluer`            : "" si invalide, "undefined" si "/0", sinon le résultat en texte
//!
//! Contrat : rien ne sort en erreur. Toute panne devient "" (journalisée en trace).

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use super::format::format_nombre;
use super::jetons::tokenize;
use super::rpn::{eval_rpn, to_rpn};

/// Texte renvoyé pour une division par zéro détectée.
pub const INDEFINI: &str = "undefined";

lazy_static! {
    /// ".5" en tête => "0.5"
    static ref DECIMAL_NU_EN_TETE: Regex = Regex::new(r"^(\.\d+)").unwrap();

    /// Caractères admis (opérateurs internes ET glyphes d’affichage).
    static ref CARACTERES_ADMIS: Regex = Regex::new(r"^[0-9+\-*/×÷(). ]+$").unwrap();

    /// "/" suivi (espaces optionnels) d’un 0.
    static ref DIVISION_PAR_ZERO: Regex = Regex::new(r"/\s*0").unwrap();
}

/// Vrai si l’expression contient un des opérateurs + - * /.
pub fn contient_operateur(expr: &str) -> bool {
    expr.contains(['+', '-', '*', '/'])
}

/// Vrai si chaque caractère est dans {0-9 + - * / × ÷ ( ) . espace}.
/// Chaîne vide : invalide.
pub fn expression_valide(expr: &str) -> bool {
    let normalisee = DECIMAL_NU_EN_TETE.replace(expr, "0$1");
    CARACTERES_ADMIS.is_match(&normalisee)
}

/// Heuristique syntaxique : un "/" littéralement suivi d’un 0.
/// NOTE: "5/0.5" est donc aussi signalé, et "1/(2-2)" ne l’est pas.
pub fn division_par_zero(expr: &str) -> bool {
    DIVISION_PAR_ZERO.is_match(expr)
}

/// Évalue une expression et rend le résultat en texte.
///
/// - "" si l’expression est invalide (caractères) ou mal formée (syntaxe)
/// - "undefined" si `division_par_zero`
/// - sinon le nombre (voir `format_nombre`)
pub fn evaluer(expr: &str) -> String {
    if !expression_valide(expr) {
        return String::new();
    }

    if division_par_zero(expr) {
        return INDEFINI.to_string();
    }

    let canonique = expr.replace('×', "*").replace('÷', "/");

    let valeur = tokenize(&canonique).and_then(|jetons| {
        let rpn = to_rpn(&jetons)?;
        eval_rpn(&rpn)
    });

    match valeur {
        Ok(v) => format_nombre(v),
        Err(e) => {
            trace!(expression = %expr, erreur = %e, "évaluation impossible");
            String::new()
        }
    }
}
