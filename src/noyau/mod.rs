//! Noyau de la calculatrice (sans UI)
//!
//! Organisation interne :
//! - evenements.rs  : événements d’entrée, touches clavier, trait Rendu
//! - calculatrice.rs: machine à états (courant / expression / just_evaluated)
//! - eval.rs        : pipeline d’évaluation + garde-fous
//! - jetons.rs      : tokenisation
//! - rpn.rs         : shunting-yard + évaluation RPN
//! - format.rs      : affichage des nombres
//! - erreur.rs      : erreurs typées

pub mod calculatrice;
pub mod erreur;
pub mod eval;
pub mod evenements;
pub mod format;
pub mod jetons;
pub mod rpn;

#[cfg(test)]
mod tests_scenarios;


// API publique minimale
pub use calculatrice::Calculatrice;
pub use evenements::{Evenement, Rendu};
