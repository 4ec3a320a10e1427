//! Machine à états de la calculatrice.
//!
//! État explicite (EtatAffichage) + opérations en méthodes.
//! L’expression est une suite de jetons typés (nombres / opérateurs), jamais du texte découpé.
//!
//! États (implicites) :
//! - Saisie     : un nombre est en cours de frappe
//! - Composition: l’expression se termine par un opérateur, on attend l’opérande
//! - Évalué     : un résultat est affiché (`just_evaluated`), la prochaine frappe repart de zéro
//!
//! Erreurs (voir erreur.rs) :
//! - rejet préalable (caractère, suite d’opérateurs) : "Error" affiché, état intact
//! - résultat non fini : courant = "Error", état Évalué
//! - panne de l’évaluateur : remise à zéro + "Error" affiché

use super::erreur::ErreurEval;
use super::eval::calculer;
use super::evenements::{Chiffre, Evenement, Operateur, Rendu};
use super::format::format_nombre;

/// Texte affiché à la place d’une valeur en cas d’erreur.
pub const ERREUR: &str = "Error";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Jeton {
    /// Littéral tel que saisi (ou calculé) : "12", "0.", "-3"…
    Nombre(String),
    Operateur(Operateur),
}

/// Rendu texte d’une suite de jetons : "12 + 5", "3 * ".
fn texte_jetons(jetons: &[Jeton]) -> String {
    let mut s = String::new();
    for j in jetons {
        match j {
            Jeton::Nombre(n) => s.push_str(n),
            Jeton::Operateur(op) => {
                s.push(' ');
                s.push(op.symbole());
                s.push(' ');
            }
        }
    }
    s
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EtatAffichage {
    courant: String,
    expression: Vec<Jeton>,
    just_evaluated: bool,

    // Un opérateur vient d’être poussé et aucun chiffre n’a été tapé depuis
    // (courant montre alors le "0" de remplacement).
    attente_operande: bool,

    // Dernière évaluation rejetée avant calcul : l’écran montre "Error".
    // Effacé par l’opération suivante.
    erreur_affichee: bool,
}

impl Default for EtatAffichage {
    fn default() -> Self {
        Self {
            courant: "0".to_string(),
            expression: Vec::new(),
            just_evaluated: false,
            attente_operande: false,
            erreur_affichee: false,
        }
    }
}

impl EtatAffichage {
    /* ------------------------ Lecture ------------------------ */

    /// Valeur en cours (sans tenir compte d’une erreur affichée).
    #[cfg(test)]
    pub fn courant(&self) -> &str {
        &self.courant
    }

    /// Valeur telle qu’elle doit apparaître à l’écran.
    pub fn courant_affiche(&self) -> &str {
        if self.erreur_affichee {
            ERREUR
        } else {
            &self.courant
        }
    }

    #[cfg(test)]
    pub fn jetons(&self) -> &[Jeton] {
        &self.expression
    }

    /// Ligne d’historique : "12 + ", "12 + 5 =", ou "".
    pub fn expression(&self) -> String {
        let mut s = texte_jetons(&self.expression);
        if self.just_evaluated {
            s.push_str(" =");
        }
        s
    }

    #[cfg(test)]
    pub fn just_evaluated(&self) -> bool {
        self.just_evaluated
    }

    fn operateur_en_attente(&self) -> bool {
        self.attente_operande && matches!(self.expression.last(), Some(Jeton::Operateur(_)))
    }

    /// Sortie de l’état Évalué sans garder l’expression terminée.
    fn quitter_evalue(&mut self) {
        self.just_evaluated = false;
        self.attente_operande = false;
        self.expression.clear();
    }

    /* ------------------------ Opérations ------------------------ */

    pub fn saisir_chiffre(&mut self, d: Chiffre) {
        self.erreur_affichee = false;

        if self.just_evaluated {
            // Nouvelle saisie après un résultat
            self.quitter_evalue();
            self.courant = if d.est_point() {
                "0.".to_string()
            } else {
                d.as_char().to_string()
            };
            return;
        }

        self.attente_operande = false;

        if d.est_point() {
            if !self.courant.contains('.') {
                self.courant.push('.');
            }
        } else if self.courant == "0" {
            self.courant = d.as_char().to_string();
        } else {
            self.courant.push(d.as_char());
        }
    }

    pub fn appliquer_operateur(&mut self, op: Operateur) {
        self.erreur_affichee = false;

        if self.just_evaluated {
            // Le résultat devient le premier opérande (sauf "Error" : on repart de 0).
            self.quitter_evalue();
            if self.courant == ERREUR {
                self.courant = "0".to_string();
            }
        }

        if self.operateur_en_attente() {
            // Le dernier opérateur gagne
            if let Some(dernier) = self.expression.last_mut() {
                *dernier = Jeton::Operateur(op);
            }
            return;
        }

        let nombre = std::mem::replace(&mut self.courant, "0".to_string());
        self.expression.push(Jeton::Nombre(nombre));
        self.expression.push(Jeton::Operateur(op));
        self.attente_operande = true;
    }

    pub fn effacer_tout(&mut self) {
        *self = Self::default();
    }

    pub fn retour_arriere(&mut self) {
        self.erreur_affichee = false;

        if self.just_evaluated {
            self.quitter_evalue();
            self.courant = "0".to_string();
            return;
        }

        if self.courant.chars().count() <= 1 {
            self.courant = "0".to_string();
        } else {
            self.courant.pop();
            if self.courant == "-" {
                self.courant = "0".to_string();
            }
        }

        // Opérande entièrement effacé : l’opérateur redevient remplaçable.
        if self.courant == "0" && matches!(self.expression.last(), Some(Jeton::Operateur(_))) {
            self.attente_operande = true;
        }
    }

    pub fn pourcentage(&mut self) {
        self.erreur_affichee = false;

        // "Error" (ou tout texte non numérique) : rien à faire
        let Ok(v) = self.courant.parse::<f64>() else {
            return;
        };
        if !v.is_finite() {
            return;
        }
        self.courant = format_nombre(v / 100.0);
    }

    pub fn evaluer(&mut self) {
        self.erreur_affichee = false;

        // Idempotent : le résultat est déjà affiché
        if self.just_evaluated {
            return;
        }

        let mut jetons = self.expression.clone();
        if self.operateur_en_attente() {
            // opérateur pendant : ignoré
            jetons.pop();
        } else {
            jetons.push(Jeton::Nombre(self.courant.clone()));
        }

        let texte = texte_jetons(&jetons);
        if texte.trim().is_empty() {
            return;
        }

        match calculer(&texte) {
            Ok(resultat) => {
                tracing::debug!(expression = %texte, %resultat, "résultat");
                self.terminer(jetons, resultat);
            }
            Err(ErreurEval::ResultatNonFini) => {
                tracing::warn!(expression = %texte, "résultat non fini");
                self.terminer(jetons, ERREUR.to_string());
            }
            Err(e) if e.est_rejet_prealable() => {
                tracing::warn!(expression = %texte, erreur = %e, "expression refusée");
                self.erreur_affichee = true;
            }
            Err(e) => {
                tracing::warn!(expression = %texte, erreur = %e, "échec de l’évaluation");
                self.effacer_tout();
                self.erreur_affichee = true;
            }
        }
    }

    fn terminer(&mut self, jetons: Vec<Jeton>, courant: String) {
        self.expression = jetons;
        self.courant = courant;
        self.just_evaluated = true;
        self.attente_operande = false;
    }

    /// Aiguillage : un événement => une opération.
    pub fn appliquer(&mut self, ev: Evenement) {
        match ev {
            Evenement::Chiffre(d) => self.saisir_chiffre(d),
            Evenement::Operateur(op) => self.appliquer_operateur(op),
            Evenement::Effacer => self.effacer_tout(),
            Evenement::Retour => self.retour_arriere(),
            Evenement::Pourcent => self.pourcentage(),
            Evenement::Evaluer => self.evaluer(),
        }
    }
}

/// Calculatrice complète : état + collaborateur d’affichage.
///
/// Chaque événement est traité jusqu’au bout, puis l’écran est synchronisé.
#[derive(Debug)]
pub struct Calculatrice<R> {
    etat: EtatAffichage,
    rendu: R,
}

impl<R: Rendu> Calculatrice<R> {
    /// Crée la calculatrice et affiche l’état initial.
    pub fn new(rendu: R) -> Self {
        let mut calc = Self {
            etat: EtatAffichage::default(),
            rendu,
        };
        calc.synchroniser();
        calc
    }

    pub fn traiter(&mut self, ev: Evenement) {
        tracing::trace!(?ev, "événement");
        self.etat.appliquer(ev);
        self.synchroniser();
    }

    #[cfg(test)]
    pub fn etat(&self) -> &EtatAffichage {
        &self.etat
    }

    pub fn rendu(&self) -> &R {
        &self.rendu
    }

    fn synchroniser(&mut self) {
        let expression = self.etat.expression();
        self.rendu
            .afficher(self.etat.courant_affiche(), &expression);
    }
}
