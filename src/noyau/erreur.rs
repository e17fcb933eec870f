// src/noyau/erreur.rs
//
// Erreurs internes du noyau (jetons + RPN).
// Elles ne sortent JAMAIS du noyau : `moteur::evaluer` les convertit en "".

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error("entrée vide")]
    EntreeVide,

    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    #[error("nombre invalide: {0:?}")]
    NombreInvalide(String),

    #[error("parenthèses non fermées")]
    ParenthesesNonFermees,

    #[error("parenthèse fermante inattendue")]
    ParentheseInattendue,

    #[error("opérande manquant")]
    OperandeManquant,

    #[error("expression invalide")]
    ExpressionInvalide,
}
