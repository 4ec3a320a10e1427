// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Clavier global : chaque touche reconnue devient un Evenement du noyau

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::Evenement;

/// Touches nommées (pas de Event::Text pour elles).
fn nom_touche(key: egui::Key) -> Option<&'static str> {
    match key {
        egui::Key::Backspace => Some("Backspace"),
        egui::Key::Escape => Some("Escape"),
        egui::Key::Enter => Some("Enter"),
        _ => None,
    }
}

/// Événements clavier de la frame -> événements du noyau (dans l’ordre de frappe).
///
/// Les caractères passent par Event::Text (suit la disposition clavier réelle :
/// '%', '*', '+' sans deviner les modificateurs).
fn evenements_clavier(events: &[egui::Event]) -> Vec<Evenement> {
    let mut out = Vec::new();
    for e in events {
        match e {
            egui::Event::Text(t) => {
                let mut buf = [0u8; 4];
                out.extend(
                    t.chars()
                        .filter_map(|c| Evenement::depuis_touche(c.encode_utf8(&mut buf))),
                );
            }
            egui::Event::Key {
                key, pressed: true, ..
            } => {
                if let Some(ev) = nom_touche(*key).and_then(Evenement::depuis_touche) {
                    out.push(ev);
                }
            }
            _ => {}
        }
    }
    out
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let evenements = ctx.input(|i| evenements_clavier(&i.events));
        for ev in evenements {
            self.envoyer(ev);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
