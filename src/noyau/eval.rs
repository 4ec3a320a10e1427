//! Noyau — évaluation (pipeline réel)
//!
//! garde-fous (caractères, suites d’opérateurs) -> tokenize -> RPN -> f64 -> affichage
//!
//! Aucune exécution dynamique : l’expression n’est jamais confiée à un interpréteur,
//! seulement à jetons.rs + rpn.rs.

use std::sync::OnceLock;

use regex::Regex;

use super::erreur::ErreurEval;
use super::format::format_resultat;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{eval_rpn, to_rpn};

/// Jeu de caractères autorisé (chiffres, opérateurs, point, espaces).
fn re_caracteres() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9+\-*/.\s]+$").expect("regex caractères"))
}

/// Suites d’opérateurs refusées (sur la forme condensée, sans espaces).
/// Heuristique : `**`, `//`, `*/`… ou trois signes `+`/`-` d’affilée.
fn re_suite_operateurs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[*/]{2,}|[+\-]{3,}").expect("regex suites"))
}

/// Retire tous les espaces.
pub fn condenser(expr: &str) -> String {
    expr.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Vérifications faites avant tout calcul (erreurs (a) et (b)).
pub fn valider(expr: &str) -> Result<String, ErreurEval> {
    if expr.trim().is_empty() {
        return Err(ErreurEval::syntaxe("expression vide"));
    }
    if !re_caracteres().is_match(expr) {
        let c = expr
            .chars()
            .find(|c| !(c.is_ascii_digit() || "+-*/.".contains(*c) || c.is_whitespace()))
            .unwrap_or('?');
        return Err(ErreurEval::CaractereInvalide(c));
    }

    let condense = condenser(expr);
    if let Some(m) = re_suite_operateurs().find(&condense) {
        return Err(ErreurEval::SuiteOperateurs(m.as_str().to_string()));
    }

    Ok(condense)
}

/// API publique : évalue une expression arithmétique.
///
/// Le résultat peut être non fini (division par zéro) : c’est une valeur, pas une erreur.
pub fn evaluer(expr: &str) -> Result<f64, ErreurEval> {
    let condense = valider(expr)?;

    let jetons = tokenize(&condense)?;
    let rpn = to_rpn(&jetons)?;
    let valeur = eval_rpn(&rpn)?;

    tracing::debug!(
        jetons = %format_tokens(&jetons),
        rpn = %format_tokens(&rpn),
        valeur,
        "évaluation"
    );

    Ok(valeur)
}

/// Évalue puis formate pour l’écran. Non fini => ErreurEval::ResultatNonFini.
pub fn calculer(expr: &str) -> Result<String, ErreurEval> {
    let valeur = evaluer(expr)?;
    format_resultat(valeur).ok_or(ErreurEval::ResultatNonFini)
}
