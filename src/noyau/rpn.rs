// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis évaluer la RPN en f64
//
// Règles:
// - Précédence : * / avant + -, associativité gauche.
// - Signe unaire:
//    - si '+' ou '-' arrive quand on attend une valeur, c’est un signe
//    - '-' devient Tok::Neg (préfixe, précédence max), '+' est ignoré
//    - '*' ou '/' à cet endroit : opérande manquant
//
// NOTE:
// - Pas de parenthèses : la pile d’opérateurs ne contient que des opérateurs.
// - Division par zéro : pas d’erreur ici, f64 donne inf/NaN (tranché par eval.rs).

use super::erreur::ErreurEval;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg => 3,
        Tok::Num(_) => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Plus, Num(3), Star, Minus, Num(4)]
///   rpn:    [Num(2), Num(3), Num(4), Neg, Star, Plus]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurEval> {
    if tokens.is_empty() {
        return Err(ErreurEval::syntaxe("expression vide"));
    }

    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un nombre (éventuellement signé).
    // Sert à détecter le signe unaire.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                out.push(tok);
                prev_was_value = true;
            }

            Tok::Plus | Tok::Minus if !prev_was_value => {
                if tok == Tok::Minus {
                    ops.push(Tok::Neg);
                }
            }

            Tok::Star | Tok::Slash if !prev_was_value => {
                return Err(ErreurEval::syntaxe("opérande manquant avant '*' ou '/'"));
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let p_tok = precedence(&tok);
                while let Some(top) = ops.last() {
                    if precedence(top) >= p_tok {
                        if let Some(top) = ops.pop() {
                            out.push(top);
                        }
                    } else {
                        break;
                    }
                }

                ops.push(tok);
                prev_was_value = false;
            }

            Tok::Neg => return Err(ErreurEval::syntaxe("jeton unaire inattendu")),
        }
    }

    if !prev_was_value {
        return Err(ErreurEval::syntaxe("opérateur final sans opérande"));
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN. Le résultat peut être non fini (division par zéro).
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, ErreurEval> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Tok::Num(v) => st.push(*v),

            Tok::Neg => {
                let a = st.pop().ok_or_else(|| ErreurEval::syntaxe("signe sans opérande"))?;
                st.push(-a);
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = st.pop().ok_or_else(|| ErreurEval::syntaxe("expression invalide"))?;
                let a = st.pop().ok_or_else(|| ErreurEval::syntaxe("expression invalide"))?;

                st.push(match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    _ => a / b,
                });
            }
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(ErreurEval::syntaxe("expression invalide")),
    }
}
