// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Affichage en lecture seule : toute saisie passe par le pavé
// - Toucher / glisser dans l’affichage => point d’insertion pour la calculatrice
// - Écran historique : retour + effacement global
//
// Note :
// - Les couleurs des touches dépendent de leur type (chiffre, opérateur, égal)

use eframe::egui;
use egui::{Color32, RichText};

use super::etat::AppCalc;
use crate::controleur::vers_affichage;

/// Hauteur d’une touche du pavé.
const HAUTEUR_TOUCHE: f32 = 64.0;

/// Espace entre touches.
const ESPACE: f32 = 8.0;

const ORANGE: Color32 = Color32::from_rgb(0xFF, 0xA5, 0x00);
const GRIS: Color32 = Color32::from_rgb(0x50, 0x50, 0x50);
const GRIS_CLAIR: Color32 = Color32::from_rgb(0xBB, 0xBB, 0xBB);

#[derive(Clone, Copy, Debug)]
enum TypeTouche {
    Chiffre,
    OperateurPrimaire,
    OperateurSecondaire,
    Egal,
}

impl TypeTouche {
    /// (fond, texte)
    fn couleurs(self) -> (Color32, Color32) {
        match self {
            TypeTouche::Egal => (
                Color32::from_rgb(0xF0, 0xAE, 0x8A),
                Color32::from_rgb(0x1C, 0x1C, 0x1C),
            ),
            TypeTouche::Chiffre => (Color32::from_rgb(0x66, 0x4F, 0x43), Color32::WHITE),
            TypeTouche::OperateurPrimaire => (Color32::from_rgb(0xE5, 0x8F, 0x61), Color32::WHITE),
            TypeTouche::OperateurSecondaire => (
                Color32::from_rgb(0xE5, 0x8F, 0x61),
                Color32::from_rgb(0x1C, 0x1C, 0x1C),
            ),
        }
    }
}

/// Pavé : (étiquette envoyée à la calculatrice, texte affiché, type).
const PAVE: [[(&str, &str, TypeTouche); 4]; 5] = [
    [
        ("C", "C", TypeTouche::OperateurSecondaire),
        ("()", "( )", TypeTouche::OperateurSecondaire),
        ("%", "%", TypeTouche::OperateurSecondaire),
        ("/", "÷", TypeTouche::OperateurPrimaire),
    ],
    [
        ("7", "7", TypeTouche::Chiffre),
        ("8", "8", TypeTouche::Chiffre),
        ("9", "9", TypeTouche::Chiffre),
        ("X", "×", TypeTouche::OperateurPrimaire),
    ],
    [
        ("4", "4", TypeTouche::Chiffre),
        ("5", "5", TypeTouche::Chiffre),
        ("6", "6", TypeTouche::Chiffre),
        ("-", "-", TypeTouche::OperateurPrimaire),
    ],
    [
        ("1", "1", TypeTouche::Chiffre),
        ("2", "2", TypeTouche::Chiffre),
        ("3", "3", TypeTouche::Chiffre),
        ("+", "+", TypeTouche::OperateurPrimaire),
    ],
    [
        ("√", "√", TypeTouche::Chiffre),
        ("0", "0", TypeTouche::Chiffre),
        (".", ".", TypeTouche::Chiffre),
        ("=", "=", TypeTouche::Egal),
    ],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(ESPACE, ESPACE);

        if self.vue_historique {
            self.ui_historique(ui);
        } else {
            self.ui_calculatrice(ui);
        }
    }

    fn ui_calculatrice(&mut self, ui: &mut egui::Ui) {
        ui.add_space(24.0);
        self.ui_affichage(ui);
        self.ui_apercu(ui);

        ui.add_space(6.0);

        // Historique (gauche) + DEL (droite)
        ui.horizontal(|ui| {
            if ui.button(RichText::new("Historique").color(GRIS_CLAIR)).clicked() {
                self.basculer_historique();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let vide = self.calc.expression().is_empty();
                let couleur = if vide { GRIS } else { ORANGE };
                let del = egui::Button::new(RichText::new("DEL").size(20.0).color(couleur));
                if ui.add_enabled(!vide, del).clicked() {
                    self.appuyer("DEL");
                }
            });
        });

        ui.separator();
        ui.add_space(6.0);

        self.ui_pave(ui);
    }

    /// Affichage : lecture seule, orange quand une réponse est affichée.
    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        let affichage = self.calc.affichage();
        let mut texte: &str = affichage.as_str();

        let couleur = if self.calc.reponse_affichee() {
            ORANGE
        } else {
            Color32::WHITE
        };

        let largeur = ui.available_width();
        let sortie = egui::TextEdit::singleline(&mut texte)
            .id_salt("affichage_calc")
            .font(egui::TextStyle::Heading)
            .text_color(couleur)
            .horizontal_align(egui::Align::RIGHT)
            .desired_width(largeur)
            .frame(false)
            .show(ui);

        // Seul un geste de l’utilisateur déplace le point d’insertion
        let touche = sortie.response.clicked() || sortie.response.dragged();
        if touche {
            if let Some(plage) = sortie.cursor_range {
                self.calc
                    .signaler_selection(plage.primary.index, plage.secondary.index);
            }
        }
    }

    fn ui_apercu(&self, ui: &mut egui::Ui) {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(self.calc.apercu()).size(18.0).color(GRIS_CLAIR));
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let largeur = ((ui.available_width() - 3.0 * ESPACE) / 4.0).max(40.0);

        egui::Grid::new("pave_calc")
            .num_columns(4)
            .spacing([ESPACE, ESPACE])
            .show(ui, |ui| {
                for rangee in PAVE.iter() {
                    for &(etiquette, texte, genre) in rangee.iter() {
                        let (fond, encre) = genre.couleurs();
                        let bouton =
                            egui::Button::new(RichText::new(texte).size(24.0).color(encre))
                                .fill(fond);

                        if ui.add_sized([largeur, HAUTEUR_TOUCHE], bouton).clicked() {
                            self.appuyer(etiquette);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        let largeur = ui.available_width();

        if ui
            .add_sized([largeur, 40.0], egui::Button::new("Retour à la calculatrice"))
            .clicked()
        {
            self.basculer_historique();
        }

        ui.separator();

        let hauteur = (ui.available_height() - 56.0).max(80.0);
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .max_height(hauteur)
            .show(ui, |ui| {
                let entrees = self.calc.historique().entrees();
                if entrees.is_empty() {
                    ui.weak("Aucun calcul");
                }
                for e in entrees {
                    let ligne = format!("{} = {}", vers_affichage(&e.equation), e.reponse);
                    ui.label(RichText::new(ligne).size(22.0));
                }
            });

        ui.separator();

        if ui
            .add_sized([largeur, 40.0], egui::Button::new("Effacer l’historique"))
            .clicked()
        {
            self.vider_historique();
        }
    }
}
