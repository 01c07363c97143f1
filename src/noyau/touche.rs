// src/noyau/touche.rs
//
// Table des 19 touches : glyphe, catégorie, teinte.
// Le glyphe est l’identité stable d’une touche (pavé à l’écran, harnais de test…).

use super::operateur::Operateur;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Touche {
    Effacer,
    Signe,
    Pourcentage,
    Addition,
    Soustraction,
    Multiplication,
    Division,
    Zero,
    Un,
    Deux,
    Trois,
    Quatre,
    Cinq,
    Six,
    Sept,
    Huit,
    Neuf,
    Point,
    Egal,
}

/// Ce que fait une touche, vu par le moteur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Categorie {
    Chiffre,
    Operateur(Operateur),
    Egal,
    Effacer,
    Signe,
    Pourcentage,
    Point,
}

/// Teinte d’une touche (neutre vis-à-vis d’egui, la vue fait la conversion).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Teinte {
    Gris,
    GrisClair,
    Orange,
}

impl Touche {
    /// Les 19 touches, dans l’ordre du pavé (lignes de haut en bas).
    pub const TOUTES: [Touche; 19] = [
        Touche::Effacer,
        Touche::Signe,
        Touche::Pourcentage,
        Touche::Division,
        Touche::Sept,
        Touche::Huit,
        Touche::Neuf,
        Touche::Multiplication,
        Touche::Quatre,
        Touche::Cinq,
        Touche::Six,
        Touche::Soustraction,
        Touche::Un,
        Touche::Deux,
        Touche::Trois,
        Touche::Addition,
        Touche::Zero,
        Touche::Point,
        Touche::Egal,
    ];

    pub fn glyphe(self) -> &'static str {
        match self {
            Touche::Effacer => "A/C",
            Touche::Signe => "+/-",
            Touche::Pourcentage => "%",
            Touche::Addition => "+",
            Touche::Soustraction => "-",
            Touche::Multiplication => "x",
            Touche::Division => "/",
            Touche::Zero => "0",
            Touche::Un => "1",
            Touche::Deux => "2",
            Touche::Trois => "3",
            Touche::Quatre => "4",
            Touche::Cinq => "5",
            Touche::Six => "6",
            Touche::Sept => "7",
            Touche::Huit => "8",
            Touche::Neuf => "9",
            Touche::Point => ".",
            Touche::Egal => "=",
        }
    }

    /// Inverse de `glyphe` (None si le texte n’est pas une touche).
    #[cfg(test)]
    pub fn depuis_glyphe(s: &str) -> Option<Touche> {
        Self::TOUTES.into_iter().find(|t| t.glyphe() == s)
    }

    pub fn categorie(self) -> Categorie {
        match self {
            Touche::Zero
            | Touche::Un
            | Touche::Deux
            | Touche::Trois
            | Touche::Quatre
            | Touche::Cinq
            | Touche::Six
            | Touche::Sept
            | Touche::Huit
            | Touche::Neuf => Categorie::Chiffre,

            Touche::Addition => Categorie::Operateur(Operateur::Addition),
            Touche::Soustraction => Categorie::Operateur(Operateur::Soustraction),
            Touche::Multiplication => Categorie::Operateur(Operateur::Multiplication),
            Touche::Division => Categorie::Operateur(Operateur::Division),

            Touche::Egal => Categorie::Egal,
            Touche::Effacer => Categorie::Effacer,
            Touche::Signe => Categorie::Signe,
            Touche::Pourcentage => Categorie::Pourcentage,
            Touche::Point => Categorie::Point,
        }
    }

    pub fn teinte(self) -> Teinte {
        match self.categorie() {
            Categorie::Chiffre | Categorie::Point => Teinte::Gris,
            Categorie::Operateur(_) | Categorie::Egal => Teinte::Orange,
            Categorie::Effacer | Categorie::Signe | Categorie::Pourcentage => Teinte::GrisClair,
        }
    }

    /// Opérateur porté par la touche (None hors + - x /).
    pub fn operateur(self) -> Option<Operateur> {
        match self.categorie() {
            Categorie::Operateur(op) => Some(op),
            _ => None,
        }
    }
}
