// src/noyau/erreur.rs

use thiserror::Error;

/// Erreurs internes du noyau.
///
/// Aucune n’est fatale : `MoteurCalc::perform` les journalise et laisse
/// l’état dans une forme que `A/C` sait toujours réparer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ErreurNoyau {
    /// L’affichage ne se lit pas comme un nombre (ex: état invalide).
    #[error("affichage illisible : {0:?}")]
    AffichageIllisible(String),

    /// Résultat infini ou NaN (ex: division par zéro).
    #[error("résultat non fini : {0}")]
    ResultatNonFini(f64),
}
