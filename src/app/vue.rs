// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Disposition du pavé :
//   écran (aligné à droite)
//   A/C  +/-  %   /
//   7    8    9   x
//   4    5    6   -
//   1    2    3   +
//   0 (double)  . =
//
// La vue ne calcule rien : clic -> AppCalc::appuyer, puis relecture écran + couleurs.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{Teinte, Touche};

const ESPACE: f32 = 5.0;
const HAUTEUR_ECRAN: f32 = 100.0;
const TAILLE_ECRAN: f32 = 40.0;
const TAILLE_GLYPHE: f32 = 28.0;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(ESPACE, ESPACE);

        self.ui_ecran(ui);
        self.ui_pave(ui);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let couleur = if self.ecran_invalide() {
            ui.visuals().error_fg_color
        } else {
            egui::Color32::WHITE
        };

        egui::Frame::group(ui.style())
            .fill(couleur_teinte(Teinte::GrisClair))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.set_min_height(HAUTEUR_ECRAN);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.ecran())
                            .size(TAILLE_ECRAN)
                            .color(couleur),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let largeur = ((ui.available_width() - 3.0 * ESPACE) / 4.0).max(40.0);
        let hauteur = ((ui.available_height() - 4.0 * ESPACE) / 5.0).clamp(40.0, 120.0);

        // 4 lignes de 4, puis la ligne du bas (0 . =)
        let toutes = Touche::TOUTES;
        let (grille, bas) = toutes.split_at(16);

        for ligne in grille.chunks(4) {
            ui.horizontal(|ui| {
                for &t in ligne {
                    self.bouton(ui, t, [largeur, hauteur]);
                }
            });
        }

        ui.horizontal(|ui| {
            for &t in bas {
                let l = if t == Touche::Zero {
                    2.0 * largeur + ESPACE
                } else {
                    largeur
                };
                self.bouton(ui, t, [l, hauteur]);
            }
        });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: Touche, taille: [f32; 2]) {
        // None = blanc (couleurs inversées de l’opérateur actif)
        let texte = self
            .couleur_texte(touche)
            .map_or(egui::Color32::WHITE, couleur_teinte);
        let fond = self
            .couleur_fond(touche)
            .map_or(egui::Color32::WHITE, couleur_teinte);

        let b = egui::Button::new(
            egui::RichText::new(touche.glyphe())
                .size(TAILLE_GLYPHE)
                .color(texte),
        )
        .fill(fond);

        if ui.add_sized(taille, b).clicked() {
            self.appuyer(touche);
        }
    }
}

fn couleur_teinte(t: Teinte) -> egui::Color32 {
    match t {
        Teinte::Gris => egui::Color32::GRAY,
        Teinte::GrisClair => egui::Color32::from_rgba_unmultiplied(160, 160, 160, 128),
        Teinte::Orange => egui::Color32::from_rgb(255, 149, 0),
    }
}
