// src/noyau/jetons.rs

use super::erreur::ErreurCalcul;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,

    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - décimaux (ex: 12, 1.5, .5, 5.)
/// - opérateurs + - * /
/// - glyphes d’affichage × et ÷ (équivalent * et /)
/// - parenthèses ( )
/// - espaces ignorés
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalcul> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' | '×' => Some(Tok::Star),
            '/' | '÷' => Some(Tok::Slash),
            _ => None,
        };
        if let Some(t) = simple {
            out.push(t);
            i += 1;
            continue;
        }

        // Nombre décimal : chiffres + au plus un point
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            let mut points = 0usize;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                if chars[i] == '.' {
                    points += 1;
                }
                i += 1;
            }
            let txt: String = chars[start..i].iter().collect();

            // "." seul ou "1.2.3" : refusé
            if points > 1 || txt == "." {
                return Err(ErreurCalcul::NombreInvalide(txt));
            }
            let v = txt
                .parse::<f64>()
                .map_err(|_| ErreurCalcul::NombreInvalide(txt.clone()))?;

            out.push(Tok::Num(v));
            continue;
        }

        return Err(ErreurCalcul::CaractereInattendu(c));
    }

    Ok(out)
}
