// src/noyau/operateur.rs

/// Les quatre opérateurs binaires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Addition,
    Soustraction,
    Multiplication,
    Division,
}

impl Operateur {
    /// Applique l’opérateur à (gauche, droite).
    /// La division par zéro donne ±inf ou NaN : c’est le formatage qui la refuse.
    pub fn apply(self, gauche: f64, droite: f64) -> f64 {
        match self {
            Operateur::Addition => gauche + droite,
            Operateur::Soustraction => gauche - droite,
            Operateur::Multiplication => gauche * droite,
            Operateur::Division => gauche / droite,
        }
    }
}
