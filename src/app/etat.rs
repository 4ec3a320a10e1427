//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : héberger la calculatrice du noyau et l’écran qu’elle met à jour.
//!
//! Contrats :
//! - Aucune évaluation ici : tout passe par `Calculatrice::traiter`.
//! - L’écran (`Ecran`) n’est écrit QUE par le noyau, via le trait Rendu.

use crate::noyau::{Calculatrice, Evenement, Rendu};

/// Les deux lignes affichées : historique (petit) + résultat (grand).
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Ecran {
    pub resultat: String,
    pub historique: String,
}

impl Rendu for Ecran {
    fn afficher(&mut self, courant: &str, expression: &str) {
        self.resultat.clear();
        self.resultat.push_str(courant);
        self.historique.clear();
        self.historique.push_str(expression);
    }
}

#[derive(Debug)]
pub struct AppCalc {
    calc: Calculatrice<Ecran>,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            calc: Calculatrice::new(Ecran::default()),
        }
    }
}

impl AppCalc {
    /// Point d’entrée unique des boutons et du clavier.
    pub fn envoyer(&mut self, ev: Evenement) {
        self.calc.traiter(ev);
    }

    pub fn ecran(&self) -> &Ecran {
        self.calc.rendu()
    }
}
