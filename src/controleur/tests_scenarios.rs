//! Scénarios de bout en bout : suites de touches du pavé -> état observable.
//!
//! Chaque test rejoue une séance réelle (pavé seulement, pas d’UI)
//! et vérifie expression / affichage / aperçu / drapeau / historique.

use super::calculatrice::{Calculatrice, ENTREE_INVALIDE};
use super::historique::EntreeHistorique;

fn taper(calc: &mut Calculatrice, touches: &[&str]) {
    for t in touches {
        assert!(calc.appuyer(t), "touche inconnue: {t:?}");
    }
}

fn entree(equation: &str, reponse: &str) -> EntreeHistorique {
    EntreeHistorique {
        equation: equation.to_string(),
        reponse: reponse.to_string(),
    }
}

#[test]
fn scenario_sept_plus_trois() {
    let mut c = Calculatrice::default();

    taper(&mut c, &["7", "+", "3"]);
    assert_eq!(c.affichage(), "7+3");
    assert_eq!(c.apercu(), "10");
    assert!(!c.reponse_affichee());

    taper(&mut c, &["="]);
    assert_eq!(c.expression(), "10");
    assert_eq!(c.affichage(), "10");
    assert_eq!(c.apercu(), "");
    assert!(c.reponse_affichee());
    assert_eq!(c.historique().entrees(), &[entree("7+3", "10")]);

    taper(&mut c, &["2"]);
    assert_eq!(c.expression(), "2");
    assert!(!c.reponse_affichee());
    assert_eq!(c.historique().entrees().len(), 1);
}

#[test]
fn scenario_egal_deux_fois() {
    let mut c = Calculatrice::default();
    taper(&mut c, &["6", "X", "7", "="]);
    assert_eq!(c.expression(), "42");

    taper(&mut c, &["="]);
    assert_eq!(c.expression(), "42");
    assert_eq!(c.historique().entrees(), &[entree("6*7", "42")]);
    assert!(c.reponse_affichee());
}

#[test]
fn scenario_garde_operateurs() {
    let mut c = Calculatrice::default();
    taper(&mut c, &["3", "+"]);
    taper(&mut c, &["-"]);
    assert_eq!(c.expression(), "3+");
    taper(&mut c, &["5"]);
    assert_eq!(c.expression(), "3+5");
    assert_eq!(c.apercu(), "8");
}

#[test]
fn scenario_division_par_zero() {
    let mut c = Calculatrice::default();
    taper(&mut c, &["5", "/", "0"]);
    assert_eq!(c.affichage(), "5÷0");
    assert_eq!(c.apercu(), "undefined");

    taper(&mut c, &["="]);
    assert_eq!(c.expression(), "undefined");
    assert_eq!(c.historique().entrees(), &[entree("5/0", "undefined")]);

    // la saisie suivante repart à neuf
    taper(&mut c, &["1"]);
    assert_eq!(c.expression(), "1");
}

#[test]
fn scenario_zero_calcule_non_detecte() {
    let mut c = Calculatrice::default();
    taper(&mut c, &["5", "/", "()", "2", "-", "2", "()"]);
    assert_eq!(c.expression(), "5/(2-2)");
    // heuristique syntaxique : pas "undefined", mais une valeur quand même
    assert_eq!(c.apercu(), "Infinity");
}

#[test]
fn scenario_racine_puis_calcul() {
    let mut c = Calculatrice::default();
    taper(&mut c, &["1", "6", "√", "+", "1", "="]);
    assert_eq!(c.expression(), "5");
    assert_eq!(c.historique().entrees(), &[entree("4+1", "5")]);
}

#[test]
fn scenario_racine_negative_puis_saisie() {
    let mut c = Calculatrice::default();
    taper(&mut c, &["-", "4", "√"]);
    assert_eq!(c.affichage(), ENTREE_INVALIDE);

    // le texte reste dans l’expression ; "=" le rejette (caractères invalides)
    taper(&mut c, &["="]);
    assert_eq!(c.expression(), "");
    assert_eq!(c.historique().entrees(), &[entree(ENTREE_INVALIDE, "")]);
}

#[test]
fn scenario_pourcent_dans_une_somme() {
    let mut c = Calculatrice::default();
    taper(&mut c, &["8", "0", "+", "5", "0", "%"]);
    assert_eq!(c.expression(), "80+0.5");
    assert_eq!(c.apercu(), "80.5");
}

#[test]
fn scenario_decimales() {
    let mut c = Calculatrice::default();
    taper(&mut c, &[".", "1", "+", ".", "2", "="]);
    assert_eq!(c.expression(), "0.30000000000000004");
}

#[test]
fn scenario_moins_en_tete() {
    let mut c = Calculatrice::default();
    taper(&mut c, &["-", "5"]);
    // "-5" contient un opérateur : aperçu calculé
    assert_eq!(c.apercu(), "-5");

    taper(&mut c, &["X", "3", "="]);
    assert_eq!(c.expression(), "-15");
    // l’aperçu suit l’expression, même après "="
    assert_eq!(c.apercu(), "-15");
}

#[test]
fn scenario_historique_vide_apres_n_calculs() {
    for n in [1usize, 3, 10] {
        let mut c = Calculatrice::default();
        for i in 0..n {
            let chiffre = char::from(b'1' + (i % 9) as u8).to_string();
            taper(&mut c, &[chiffre.as_str(), "+", "1", "="]);
        }
        assert_eq!(c.historique().entrees().len(), n);

        c.vider_historique();
        assert!(c.historique().entrees().is_empty(), "n={n}");
    }
}

#[test]
fn scenario_apercu_suit_chaque_commande() {
    let mut c = Calculatrice::default();

    taper(&mut c, &["9"]);
    assert_eq!(c.apercu(), "");
    taper(&mut c, &["X"]);
    assert_eq!(c.apercu(), "");
    taper(&mut c, &["9"]);
    assert_eq!(c.apercu(), "81");
    taper(&mut c, &["√"]);
    assert_eq!(c.expression(), "9*3");
    assert_eq!(c.apercu(), "27");
    taper(&mut c, &["DEL"]);
    assert_eq!(c.apercu(), "");
    taper(&mut c, &["C"]);
    assert_eq!(c.apercu(), "");
}
