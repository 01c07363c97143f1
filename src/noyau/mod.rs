//! Noyau de la calculatrice de bureau
//!
//! Organisation interne :
//! - touche.rs    : table fermée des 19 touches (glyphe, catégorie, teinte)
//! - operateur.rs : + - x / et leur application
//! - format.rs    : affichage à 2 décimales (arrondi exact) + lecture de l’écran
//! - moteur.rs    : machine à états `perform(touche)` + requêtes de présentation
//! - erreur.rs    : erreurs internes (jamais fatales)

pub mod erreur;
pub mod format;
pub mod moteur;
pub mod operateur;
pub mod touche;

#[cfg(test)]
mod tests_sequences;


// API publique minimale
pub use moteur::{Affichage, MoteurCalc};
pub use touche::{Teinte, Touche};
