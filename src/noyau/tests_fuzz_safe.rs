//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le moteur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur bornée
//! - budget temps global
//! - invariant clé : `evaluer` rend toujours "", "undefined" ou un nombre lisible

use std::time::{Duration, Instant};

use super::moteur::{evaluer, expression_valide, INDEFINI};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération ------------------------ */

const ALPHABET_INTERNE: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.', '+', '-', '*', '/', '(', ')',
];

const HORS_ALPHABET: &[char] = &['a', 'x', '^', '%', '√', '=', ';', '_', 'é', '\n', ','];

fn gen_chaine(rng: &mut Rng, alphabet: &[char], max_len: u32) -> String {
    let n = 1 + rng.pick(max_len);
    (0..n)
        .map(|_| alphabet[rng.pick(alphabet.len() as u32) as usize])
        .collect()
}

/// Sortie admise pour `evaluer` : "", "undefined", ou un nombre (y compris NaN / ±Infinity).
fn sortie_admise(s: &str) -> bool {
    s.is_empty()
        || s == INDEFINI
        || s == "NaN"
        || s == "Infinity"
        || s == "-Infinity"
        || s.parse::<f64>().is_ok()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_alphabet_interne_toujours_valide() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);
    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..400 {
        budget(t0, max);
        let e = gen_chaine(&mut rng, ALPHABET_INTERNE, 24);
        assert!(expression_valide(&e), "devrait être valide: {e:?}");
    }
}

#[test]
fn fuzz_caractere_etranger_toujours_invalide() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);
    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..400 {
        budget(t0, max);
        let mut e = gen_chaine(&mut rng, ALPHABET_INTERNE, 16);
        let intrus = HORS_ALPHABET[rng.pick(HORS_ALPHABET.len() as u32) as usize];

        // insertion à une position de caractère quelconque
        let pos = rng.pick(e.chars().count() as u32 + 1) as usize;
        let octet = e.char_indices().nth(pos).map(|(o, _)| o).unwrap_or(e.len());
        e.insert(octet, intrus);

        assert!(!expression_valide(&e), "devrait être invalide: {e:?}");
        assert_eq!(evaluer(&e), "", "invalide => vide: {e:?}");
    }
}

#[test]
fn fuzz_evaluer_ne_panique_jamais() {
    let t0 = Instant::now();
    let max = Duration::from_millis(400);
    let mut rng = Rng::new(0x5EED_u64);

    let mut vus_nombre = 0usize;
    let mut vus_vide = 0usize;

    for _ in 0..600 {
        budget(t0, max);
        let e = gen_chaine(&mut rng, ALPHABET_INTERNE, 12);
        let r = evaluer(&e);
        assert!(sortie_admise(&r), "sortie inattendue: expr={e:?} => {r:?}");

        if r.is_empty() {
            vus_vide += 1;
        } else if r != INDEFINI {
            vus_nombre += 1;
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(vus_nombre > 10, "trop peu de nombres: {vus_nombre}");
    assert!(vus_vide > 10, "trop peu d’échecs: {vus_vide}");
}

#[test]
fn profondeur_parentheses_bornee() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let n = 2_000;
    let expr = format!("{}1{}", "(".repeat(n), ")".repeat(n));
    assert_eq!(evaluer(&expr), "1");

    let somme = vec!["1"; 800].join("+");
    assert_eq!(evaluer(&somme), "800");

    budget(t0, max);
}
