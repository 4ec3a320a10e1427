//! Scénarios complets : événements -> calculatrice -> écran.
//!
//! Le rendu est un journal : chaque appel à afficher() est enregistré,
//! ce qui vérifie aussi qu’on synchronise l’écran après CHAQUE opération.

use pretty_assertions::assert_eq;

use super::calculatrice::{Calculatrice, ERREUR};
use super::evenements::{Chiffre, Evenement, Operateur, Rendu};

#[derive(Default, Debug)]
struct Journal {
    ecrans: Vec<(String, String)>,
}

impl Rendu for Journal {
    fn afficher(&mut self, courant: &str, expression: &str) {
        self.ecrans.push((courant.to_string(), expression.to_string()));
    }
}

impl Journal {
    fn dernier(&self) -> (&str, &str) {
        let (c, e) = self.ecrans.last().expect("au moins un affichage");
        (c.as_str(), e.as_str())
    }
}

/// Frappe façon clavier : une touche par caractère, sauf noms longs séparés par des espaces.
fn frapper(calc: &mut Calculatrice<Journal>, touches: &str) {
    for mot in touches.split_whitespace() {
        if let Some(ev) = Evenement::depuis_touche(mot) {
            calc.traiter(ev);
            continue;
        }
        for c in mot.chars() {
            let ev = Evenement::depuis_touche(&c.to_string())
                .unwrap_or_else(|| panic!("touche inconnue: {c:?}"));
            calc.traiter(ev);
        }
    }
}

fn calculatrice() -> Calculatrice<Journal> {
    Calculatrice::new(Journal::default())
}

#[test]
fn affichage_initial() {
    let calc = calculatrice();
    assert_eq!(calc.rendu().ecrans.len(), 1);
    assert_eq!(calc.rendu().dernier(), ("0", ""));
}

#[test]
fn un_affichage_par_evenement() {
    let mut calc = calculatrice();
    frapper(&mut calc, "12+5=");
    // initial + 5 événements
    assert_eq!(calc.rendu().ecrans.len(), 6);
    assert_eq!(calc.rendu().ecrans[3], ("0".to_string(), "12 + ".to_string()));
}

#[test]
fn douze_plus_cinq() {
    let mut calc = calculatrice();
    frapper(&mut calc, "12+5=");
    assert_eq!(calc.rendu().dernier(), ("17", "12 + 5 ="));
    assert!(calc.etat().just_evaluated());
}

#[test]
fn division_par_zero() {
    let mut calc = calculatrice();
    frapper(&mut calc, "5/0 Enter");
    assert_eq!(calc.rendu().dernier(), (ERREUR, "5 / 0 ="));
}

#[test]
fn sept_pourcent() {
    let mut calc = calculatrice();
    frapper(&mut calc, "7%");
    assert_eq!(calc.rendu().dernier().0, "0.07");
}

#[test]
fn dernier_operateur_gagne() {
    let mut calc = calculatrice();
    frapper(&mut calc, "3+*");
    assert_eq!(calc.rendu().dernier(), ("0", "3 * "));
    frapper(&mut calc, "4=");
    assert_eq!(calc.rendu().dernier(), ("12", "3 * 4 ="));
}

#[test]
fn evaluer_sans_rien() {
    let mut calc = calculatrice();
    frapper(&mut calc, "=");
    assert_eq!(calc.rendu().dernier(), ("0", "0 ="));
}

#[test]
fn precedence_usuelle() {
    let mut calc = calculatrice();
    frapper(&mut calc, "2+3*4-6/2=");
    assert_eq!(calc.rendu().dernier(), ("11", "2 + 3 * 4 - 6 / 2 ="));
}

#[test]
fn decimaux_arrondis() {
    let mut calc = calculatrice();
    frapper(&mut calc, ".1+.2=");
    assert_eq!(calc.rendu().dernier(), ("0.3", "0.1 + 0.2 ="));

    frapper(&mut calc, "Escape 10/3=");
    assert_eq!(calc.rendu().dernier().0, "3.3333333333");
}

#[test]
fn chainage_apres_resultat() {
    let mut calc = calculatrice();
    frapper(&mut calc, "6*7=");
    frapper(&mut calc, "-2=");
    assert_eq!(calc.rendu().dernier(), ("40", "42 - 2 ="));
}

#[test]
fn echap_remet_a_zero() {
    let mut calc = calculatrice();
    frapper(&mut calc, "9/0= Escape");
    assert_eq!(calc.rendu().dernier(), ("0", ""));
    assert!(!calc.etat().just_evaluated());
}

#[test]
fn retour_arriere_clavier() {
    let mut calc = calculatrice();
    frapper(&mut calc, "456 Backspace");
    assert_eq!(calc.rendu().dernier().0, "45");
}

#[test]
fn evaluer_deux_fois() {
    let mut calc = calculatrice();
    frapper(&mut calc, "8-3==");
    assert_eq!(calc.rendu().dernier(), ("5", "8 - 3 ="));
}

#[test]
fn evenements_directs() {
    let mut calc = calculatrice();
    calc.traiter(Evenement::Chiffre(Chiffre::new('9').unwrap()));
    calc.traiter(Evenement::Operateur(Operateur::Moins));
    calc.traiter(Evenement::Chiffre(Chiffre::new('9').unwrap()));
    calc.traiter(Evenement::Evaluer);
    assert_eq!(calc.rendu().dernier(), ("0", "9 - 9 ="));
}

#[test]
fn operande_efface_puis_operateur() {
    let mut calc = calculatrice();
    frapper(&mut calc, "5+3 Backspace *");
    assert_eq!(calc.rendu().dernier(), ("0", "5 * "));
    frapper(&mut calc, "4=");
    assert_eq!(calc.rendu().dernier(), ("20", "5 * 4 ="));
}

#[test]
fn operande_efface_puis_evaluer() {
    let mut calc = calculatrice();
    frapper(&mut calc, "5+3 Backspace =");
    assert_eq!(calc.rendu().dernier(), ("5", "5 ="));
}

#[test]
fn depassement_non_fini() {
    let enorme = "9".repeat(400);
    let mut calc = calculatrice();
    frapper(&mut calc, &format!("{enorme}*9="));
    assert_eq!(calc.rendu().dernier(), (ERREUR, format!("{enorme} * 9 =").as_str()));
}

#[test]
fn pourcent_sur_nombre_enorme_sans_effet() {
    let enorme = "9".repeat(400);
    let mut calc = calculatrice();
    frapper(&mut calc, &format!("{enorme}%"));
    assert_eq!(calc.rendu().dernier(), (enorme.as_str(), ""));
}

#[test]
fn pourcent_apres_resultat_garde_l_historique() {
    let mut calc = calculatrice();
    frapper(&mut calc, "12+5=%");
    assert_eq!(calc.rendu().dernier(), ("0.17", "12 + 5 ="));
    // toujours dans l’état Évalué : "=" ne recalcule pas
    frapper(&mut calc, "=");
    assert_eq!(calc.rendu().dernier(), ("0.17", "12 + 5 ="));
    // un opérateur reprend la valeur modifiée
    frapper(&mut calc, "*2=");
    assert_eq!(calc.rendu().dernier(), ("0.34", "0.17 * 2 ="));
}
