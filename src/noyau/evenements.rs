//! Surface d’événements du noyau.
//!
//! - Evenement : ce que la vue (boutons, clavier) envoie à la calculatrice
//! - Rendu     : ce que la calculatrice renvoie à la vue après chaque opération

use std::fmt;

/// Opérateurs binaires du pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    pub fn depuis_symbole(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Moins),
            '*' => Some(Self::Fois),
            '/' => Some(Self::Divise),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Moins => '-',
            Self::Fois => '*',
            Self::Divise => '/',
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

/// Touche de saisie : un chiffre 0–9 ou le point décimal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chiffre(char);

impl Chiffre {
    #[cfg(test)]
    pub const POINT: Chiffre = Chiffre('.');

    pub fn new(c: char) -> Option<Self> {
        (c.is_ascii_digit() || c == '.').then_some(Self(c))
    }

    pub fn as_char(self) -> char {
        self.0
    }

    pub fn est_point(self) -> bool {
        self.0 == '.'
    }
}

/// Événements d’entrée (1 événement = 1 opération de la machine à états).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Evenement {
    Chiffre(Chiffre),
    Operateur(Operateur),
    Effacer,
    Retour,
    Pourcent,
    Evaluer,
}

impl Evenement {
    /// Clavier : nom de touche (façon navigateur) -> événement.
    ///
    /// "0".."9" "." | "Backspace" | "Escape" | "%" | "Enter" "=" | "+" "-" "*" "/"
    /// Toute autre touche est ignorée.
    pub fn depuis_touche(touche: &str) -> Option<Self> {
        match touche {
            "Backspace" => return Some(Self::Retour),
            "Escape" => return Some(Self::Effacer),
            "Enter" => return Some(Self::Evaluer),
            _ => {}
        }

        let mut it = touche.chars();
        let (Some(c), None) = (it.next(), it.next()) else {
            return None;
        };

        match c {
            '%' => Some(Self::Pourcent),
            '=' => Some(Self::Evaluer),
            _ => Chiffre::new(c)
                .map(Self::Chiffre)
                .or_else(|| Operateur::depuis_symbole(c).map(Self::Operateur)),
        }
    }
}

/// Collaborateur d’affichage : reçoit (courant, expression) après chaque opération.
pub trait Rendu {
    fn afficher(&mut self, courant: &str, expression: &str);
}
