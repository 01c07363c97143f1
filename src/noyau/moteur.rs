//! Moteur de la calculatrice : machine à états pilotée touche par touche.
//!
//! Deux états logiques :
//! - Repos     : aucun opérateur en attente
//! - Chaînage  : un opérateur attend son opérande droite
//!
//! Un opérateur fait entrer en chaînage (et applique le précédent s’il y en a un),
//! `=` et `A/C` ramènent au repos. Pas de priorité : `2 + 3 x 4 =` donne 20.
//!
//! Contrats :
//! - L’affichage n’est jamais vide : "0" au départ et après `A/C`.
//! - Opérateur ou `=` laissent toujours `nouvelle_saisie` à vrai.
//! - Affichage illisible ou invalide => toute touche sauf `A/C` est sans effet.

use super::erreur::ErreurNoyau;
use super::format::{format_valeur, lire_nombre};
use super::operateur::Operateur;
use super::touche::{Categorie, Touche};

/// Texte montré quand le dernier calcul n’a pas de valeur affichable.
pub const TEXTE_INVALIDE: &str = "Erreur";

/// Contenu de l’écran.
#[derive(Clone, Debug, PartialEq)]
pub enum Affichage {
    /// Nombre (éventuellement en cours de saisie, ex: "3.").
    Texte(String),
    /// Le dernier calcul a échoué (inf, NaN). Seul `A/C` en sort.
    Invalide,
}

#[derive(Clone, Debug)]
pub struct MoteurCalc {
    affichage: Affichage,
    accumulateur: f64,
    operateur_en_attente: Option<Operateur>,
    nouvelle_saisie: bool,
}

impl Default for MoteurCalc {
    fn default() -> Self {
        Self {
            affichage: Affichage::Texte("0".to_string()),
            accumulateur: 0.0,
            operateur_en_attente: None,
            nouvelle_saisie: true,
        }
    }
}

impl MoteurCalc {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Transition (seul mutateur) ------------------------ */

    /// Traite une touche. Ne panique jamais : une touche refusée est journalisée
    /// et laisse l’état tel quel (ou en `Invalide` si le calcul a échoué).
    pub fn perform(&mut self, touche: Touche) {
        match self.traiter(touche) {
            Ok(()) => tracing::debug!(
                touche = touche.glyphe(),
                affichage = self.current_display(),
                accumulateur = self.accumulateur(),
                en_attente = ?self.operateur_actif(),
                nouvelle_saisie = self.attend_nouvelle_saisie(),
                "touche traitée"
            ),
            Err(e) => tracing::warn!(touche = touche.glyphe(), erreur = %e, "touche sans résultat affichable"),
        }
    }

    fn traiter(&mut self, touche: Touche) -> Result<(), ErreurNoyau> {
        match touche.categorie() {
            // A/C passe avant la lecture de l’affichage : c’est la sortie de l’état invalide.
            Categorie::Effacer => {
                self.effacer();
                Ok(())
            }
            Categorie::Chiffre => {
                self.valeur_affichee()?;
                self.saisir_chiffre(touche.glyphe())
            }
            Categorie::Point => {
                self.valeur_affichee()?;
                self.saisir_point();
                Ok(())
            }
            Categorie::Operateur(op) => {
                let valeur = self.valeur_affichee()?;
                self.appuyer_operateur(op, valeur)
            }
            Categorie::Egal => {
                let valeur = self.valeur_affichee()?;
                self.appuyer_egal(valeur)
            }
            Categorie::Signe => {
                let valeur = self.valeur_affichee()?;
                self.ecrire_resultat(valeur * -1.0)
            }
            Categorie::Pourcentage => {
                let valeur = self.valeur_affichee()?;
                self.ecrire_resultat(valeur * 0.01)
            }
        }
    }

    /* ------------------------ Requêtes (lecture seule) ------------------------ */

    /// Texte à afficher (`TEXTE_INVALIDE` si le dernier calcul a échoué).
    pub fn current_display(&self) -> &str {
        match &self.affichage {
            Affichage::Texte(t) => t,
            Affichage::Invalide => TEXTE_INVALIDE,
        }
    }

    /// Forme étiquetée de l’écran (distingue un texte valide d’un échec).
    pub fn affichage(&self) -> &Affichage {
        &self.affichage
    }

    /// Vrai ssi `touche` est l’opérateur en attente (bouton en couleurs inversées).
    pub fn is_active(&self, touche: Touche) -> bool {
        match (touche.operateur(), self.operateur_en_attente) {
            (Some(op), Some(en_attente)) => op == en_attente,
            _ => false,
        }
    }

    pub fn operateur_actif(&self) -> Option<Operateur> {
        self.operateur_en_attente
    }

    pub fn accumulateur(&self) -> f64 {
        self.accumulateur
    }

    pub fn attend_nouvelle_saisie(&self) -> bool {
        self.nouvelle_saisie
    }

    /* ------------------------ Étapes internes ------------------------ */

    fn valeur_affichee(&self) -> Result<f64, ErreurNoyau> {
        match &self.affichage {
            Affichage::Texte(t) => lire_nombre(t),
            Affichage::Invalide => Err(ErreurNoyau::AffichageIllisible(TEXTE_INVALIDE.to_string())),
        }
    }

    fn saisir_chiffre(&mut self, glyphe: &str) -> Result<(), ErreurNoyau> {
        if self.nouvelle_saisie {
            self.affichage = Affichage::Texte(glyphe.to_string());
            self.nouvelle_saisie = false;
        } else if let Affichage::Texte(t) = &mut self.affichage {
            // Le chiffre n’est pris que si l’écran reste lisible (pas de dépassement vers inf).
            let candidat = format!("{t}{glyphe}");
            lire_nombre(&candidat)?;
            *t = candidat;
        }
        Ok(())
    }

    fn saisir_point(&mut self) {
        if self.nouvelle_saisie {
            self.affichage = Affichage::Texte("0.".to_string());
            self.nouvelle_saisie = false;
        } else if let Affichage::Texte(t) = &mut self.affichage {
            // Un seul séparateur décimal par nombre.
            if !t.contains('.') {
                t.push('.');
            }
        }
    }

    fn appuyer_operateur(&mut self, op: Operateur, valeur: f64) -> Result<(), ErreurNoyau> {
        let resultat = match self.operateur_en_attente {
            Some(precedent) => {
                // accumulateur non arrondi, seul l’écran l’est
                let r = precedent.apply(self.accumulateur, valeur);
                self.accumulateur = r;
                self.ecrire_resultat(r)
            }
            None => {
                self.accumulateur = valeur;
                Ok(())
            }
        };

        self.operateur_en_attente = Some(op);
        self.nouvelle_saisie = true;
        resultat
    }

    fn appuyer_egal(&mut self, valeur: f64) -> Result<(), ErreurNoyau> {
        // Sans opérateur en attente, `=` normalise simplement l’écran ("3." -> "3").
        let r = match self.operateur_en_attente.take() {
            Some(op) => op.apply(self.accumulateur, valeur),
            None => valeur,
        };

        let resultat = self.ecrire_resultat(r);
        self.nouvelle_saisie = true;
        self.accumulateur = 0.0;
        resultat
    }

    fn effacer(&mut self) {
        self.affichage = Affichage::Texte("0".to_string());
        self.nouvelle_saisie = true;
        self.operateur_en_attente = None;
        self.accumulateur = 0.0;
    }

    fn ecrire_resultat(&mut self, v: f64) -> Result<(), ErreurNoyau> {
        match format_valeur(v) {
            Ok(texte) => {
                self.affichage = Affichage::Texte(texte);
                Ok(())
            }
            Err(e) => {
                self.affichage = Affichage::Invalide;
                Err(e)
            }
        }
    }
}
