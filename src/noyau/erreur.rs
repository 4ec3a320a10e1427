// src/noyau/erreur.rs

use thiserror::Error;

/// Erreurs du pipeline d’évaluation.
///
/// Aucune n’est fatale : la machine à états les convertit en affichage "Error".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurEval {
    /// Caractère hors de `[0-9+\-*/.]` et espaces.
    #[error("caractère inattendu: '{0}'")]
    CaractereInvalide(char),

    /// Suite d’opérateurs refusée avant tout calcul (`**`, `//`, `+-+`…).
    #[error("suite d’opérateurs invalide: {0:?}")]
    SuiteOperateurs(String),

    /// Division par zéro ou dépassement.
    #[error("résultat non fini")]
    ResultatNonFini,

    /// Toute autre panne de l’évaluateur (opérande manquant, nombre mal formé…).
    #[error("expression invalide: {0}")]
    Syntaxe(String),
}

impl ErreurEval {
    pub(crate) fn syntaxe(msg: impl Into<String>) -> Self {
        Self::Syntaxe(msg.into())
    }

    /// (a) et (b) : rejet avant calcul, l’état reste intact.
    pub fn est_rejet_prealable(&self) -> bool {
        matches!(self, Self::CaractereInvalide(_) | Self::SuiteOperateurs(_))
    }
}
