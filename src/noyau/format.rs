// src/noyau/format.rs
//
// Nombre <-> texte, façon “calculatrice de poche” :
// - plus courte écriture décimale qui relit la même valeur (0.1+0.2 => 0.30000000000000004)
// - entiers sans ".0" (10, pas 10.0)
// - notation exponentielle seulement aux extrêmes (1e+21, 1.5e-7)
// - valeurs spéciales : NaN, Infinity, -Infinity

/// Au-delà : notation exponentielle.
const SEUIL_EXP_HAUT: f64 = 1e21;

/// En deçà (hors zéro) : notation exponentielle.
const SEUIL_EXP_BAS: f64 = 1e-6;

/// Rendu texte d’un résultat.
pub fn format_nombre(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    // -0 s’affiche 0
    if v == 0.0 {
        return "0".to_string();
    }

    let a = v.abs();
    if a >= SEUIL_EXP_HAUT || a < SEUIL_EXP_BAS {
        // Rust: "1e21" / "1.5e-7" ; on veut "1e+21" / "1.5e-7"
        let s = format!("{v:e}");
        return match s.split_once('e') {
            Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
            _ => s,
        };
    }

    format!("{v}")
}

/// Lecture “tolérante” d’un préfixe numérique (façon parseFloat) :
/// espaces de tête ignorés, signe optionnel, chiffres, partie décimale optionnelle.
/// Tout ce qui suit le préfixe est ignoré ("5)" => 5). Aucun chiffre => None.
pub fn lire_prefixe_nombre(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let octets = s.as_bytes();
    let mut i = 0usize;

    if i < octets.len() && (octets[i] == b'-' || octets[i] == b'+') {
        i += 1;
    }

    let mut chiffres = 0usize;
    while i < octets.len() && octets[i].is_ascii_digit() {
        i += 1;
        chiffres += 1;
    }
    if i < octets.len() && octets[i] == b'.' {
        let avant_point = i;
        i += 1;
        let mut decimales = 0usize;
        while i < octets.len() && octets[i].is_ascii_digit() {
            i += 1;
            decimales += 1;
        }
        // "5." : le point seul ne compte pas
        if decimales == 0 {
            i = avant_point;
        }
        chiffres += decimales;
    }

    if chiffres == 0 {
        return None;
    }
    s[..i].parse::<f64>().ok()
}
