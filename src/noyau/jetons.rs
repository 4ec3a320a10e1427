// src/noyau/jetons.rs

use super::erreur::ErreurEval;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,

    // Moins unaire : produit seulement par to_rpn (jamais par tokenize).
    Neg,
}

impl Tok {
    fn est_signe(&self) -> bool {
        matches!(self, Tok::Plus | Tok::Minus)
    }
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 0.5, 5., .5)
/// - opérateurs + - * /
/// - espaces (ignorés)
///
/// Refuse:
/// - tout autre caractère
/// - un nombre à deux points (1.2.3) ou un point seul
/// - deux signes identiques collés (`++`, `--`) : pas d’incrément/décrément
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    let mut out: Vec<Tok> = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Opérateurs
        let op = match c {
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            _ => None,
        };
        if let Some(op) = op {
            if op.est_signe() && out.last() == Some(&op) {
                return Err(ErreurEval::syntaxe(format!("signe doublé '{c}{c}'")));
            }
            out.push(op);
            i += 1;
            continue;
        }

        // Nombre décimal : [0-9]*.?[0-9]*
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let lit: String = chars[start..i].iter().collect();
            out.push(Tok::Num(lire_nombre(&lit)?));
            continue;
        }

        return Err(ErreurEval::CaractereInvalide(c));
    }

    Ok(out)
}

/// Lit un littéral décimal. Tolère "5." et ".5" (comme une saisie au pavé).
fn lire_nombre(lit: &str) -> Result<f64, ErreurEval> {
    if lit.matches('.').count() > 1 {
        return Err(ErreurEval::syntaxe(format!("nombre mal formé: {lit}")));
    }
    if !lit.chars().any(|c| c.is_ascii_digit()) {
        return Err(ErreurEval::syntaxe("point décimal seul"));
    }

    let mut norm = String::with_capacity(lit.len() + 1);
    if lit.starts_with('.') {
        norm.push('0');
    }
    norm.push_str(lit.strip_suffix('.').unwrap_or(lit));

    norm.parse::<f64>()
        .map_err(|_| ErreurEval::syntaxe(format!("nombre invalide: {lit}")))
}

/// Format utilitaire (journalisation) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Neg => "neg".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
