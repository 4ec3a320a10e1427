// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Écran : historique (petit, discret) au-dessus du résultat (grand)
// - Pavé  : chaque bouton envoie UN événement au noyau, comme la touche clavier équivalente
//
// Note :
// - Libellés ASCII seulement (polices egui par défaut, pas de "⌫" / "÷")

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::Evenement;

/// Pavé : (libellé, nom de touche). Libellé vide = case vide.
const PAVE: [[(&str, &str); 4]; 5] = [
    [("C", "Escape"), ("DEL", "Backspace"), ("%", "%"), ("/", "/")],
    [("7", "7"), ("8", "8"), ("9", "9"), ("*", "*")],
    [("4", "4"), ("5", "5"), ("6", "6"), ("-", "-")],
    [("1", "1"), ("2", "2"), ("3", "3"), ("+", "+")],
    [("0", "0"), (".", "."), ("", ""), ("=", "=")],
];

const TAILLE_BOUTON: [f32; 2] = [64.0, 48.0];
const TAILLE_RESULTAT: f32 = 36.0;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let ecran = self.ecran();

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // Historique : hauteur stable même vide
                    let historique = if ecran.historique.is_empty() {
                        " "
                    } else {
                        ecran.historique.as_str()
                    };
                    ui.label(egui::RichText::new(historique).monospace().weak());

                    ui.label(
                        egui::RichText::new(&ecran.resultat)
                            .monospace()
                            .size(TAILLE_RESULTAT)
                            .strong(),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in PAVE {
                    for (libelle, touche) in rangee {
                        self.bouton(ui, libelle, touche);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, libelle: &str, touche: &str) {
        if libelle.is_empty() {
            ui.label("");
            return;
        }

        let resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(libelle));
        if resp.clicked() {
            if let Some(ev) = Evenement::depuis_touche(touche) {
                self.envoyer(ev);
            }
        }
    }
}
