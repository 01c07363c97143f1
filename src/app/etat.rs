//! src/app/etat.rs
//!
//! État UI (sans vue) : enveloppe du moteur côté présentation.
//!
//! Rôle : transmettre chaque clic au moteur et répondre aux questions de la vue
//! (texte de l’écran, couleurs d’une touche). Aucune logique de calcul ici.

use crate::noyau::{Affichage, MoteurCalc, Teinte, Touche};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    moteur: MoteurCalc,
}

impl AppCalc {
    /// Clic sur une touche du pavé.
    pub fn appuyer(&mut self, touche: Touche) {
        self.moteur.perform(touche);
    }

    pub fn ecran(&self) -> &str {
        self.moteur.current_display()
    }

    /// Vrai si l’écran montre un échec de calcul (la vue le colore autrement).
    pub fn ecran_invalide(&self) -> bool {
        matches!(self.moteur.affichage(), Affichage::Invalide)
    }

    /// Couleur du texte : teinte de la touche si active (couleurs inversées), sinon blanc.
    pub fn couleur_texte(&self, touche: Touche) -> Option<Teinte> {
        if self.moteur.is_active(touche) {
            Some(touche.teinte())
        } else {
            None
        }
    }

    /// Couleur du fond : blanc (None) si active, sinon teinte de la touche.
    pub fn couleur_fond(&self, touche: Touche) -> Option<Teinte> {
        if self.moteur.is_active(touche) {
            None
        } else {
            Some(touche.teinte())
        }
    }
}
