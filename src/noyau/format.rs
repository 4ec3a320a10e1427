// src/noyau/format.rs

/// Nombre de décimales conservées à l’affichage d’un résultat.
pub const DECIMALES_RESULTAT: usize = 10;

/// Écriture décimale la plus courte qui relit la même valeur.
///
/// `Display` de f64 n’utilise jamais la notation exponentielle :
/// le texte reste un littéral saisissable (chiffres, un point, signe).
/// -0 s’affiche "0".
pub fn format_nombre(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}

/// Affichage d’un résultat fini :
/// - entier => sans point décimal
/// - sinon  => arrondi à 10 décimales, puis forme la plus courte
///
/// None si le résultat n’est pas fini.
pub fn format_resultat(v: f64) -> Option<String> {
    if !v.is_finite() {
        return None;
    }
    if v.fract() == 0.0 {
        return Some(format_nombre(v));
    }

    // Arrondi décimal (pas de v * 1e10 : débordement possible sur les grands nombres)
    let arrondi = format!("{v:.prec$}", prec = DECIMALES_RESULTAT)
        .parse::<f64>()
        .unwrap_or(v);
    Some(format_nombre(arrondi))
}
