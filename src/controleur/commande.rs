// src/controleur/commande.rs
//
// Commandes d’édition + correspondance étiquette de touche -> commande.
// Chaque touche du pavé déclenche exactement UNE commande.

/// Commande d’édition consommée par `Calculatrice::appliquer`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commande {
    /// Chiffre, point, opérateur ou parenthèse (forme interne : '*' et '/').
    Saisie(char),
    /// "()" : ouvre ou ferme selon le compte courant.
    Parentheses,
    /// "%" : divise l’opérande final par 100.
    Pourcent,
    /// "√" : racine carrée du nombre final.
    Racine,
    /// Retire le dernier caractère.
    Retour,
    /// "C" : vide l’expression.
    Effacer,
    /// "=" : évalue, mémorise dans l’historique.
    Egal,
}

impl Commande {
    /// Étiquette de touche -> commande. `None` pour une étiquette inconnue.
    ///
    /// "X" veut toujours dire multiplier, "/" toujours diviser,
    /// quel que soit le glyphe affiché.
    pub fn depuis_etiquette(etiquette: &str) -> Option<Commande> {
        let cmd = match etiquette {
            "X" | "x" | "*" | "×" => Commande::Saisie('*'),
            "/" | "÷" => Commande::Saisie('/'),
            "+" => Commande::Saisie('+'),
            "-" => Commande::Saisie('-'),
            "." => Commande::Saisie('.'),
            "(" => Commande::Saisie('('),
            ")" => Commande::Saisie(')'),
            "()" => Commande::Parentheses,
            "%" => Commande::Pourcent,
            "√" => Commande::Racine,
            "C" => Commande::Effacer,
            "DEL" | "⌫" => Commande::Retour,
            "=" => Commande::Egal,
            _ => {
                let mut it = etiquette.chars();
                match (it.next(), it.next()) {
                    (Some(c), None) if c.is_ascii_digit() => Commande::Saisie(c),
                    _ => return None,
                }
            }
        };
        Some(cmd)
    }
}

/// Opérateurs qui ne peuvent pas se suivre (formes interne ET affichage).
pub const OPERATEURS: [char; 6] = ['+', '-', '*', '/', '×', '÷'];

pub fn est_operateur(c: char) -> bool {
    OPERATEURS.contains(&c)
}
