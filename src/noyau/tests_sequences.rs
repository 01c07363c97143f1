//! Tests de séquences : la calculatrice pilotée comme au doigt.
//!
//! Une séquence s’écrit en glyphes séparés par des espaces, ex: "2 + 3 x 4 =".
//! Un glyphe inconnu fait échouer le test (la table des touches est fermée).

use super::moteur::{Affichage, MoteurCalc, TEXTE_INVALIDE};
use super::operateur::Operateur;
use super::touche::Touche;

fn taper_sur(m: &mut MoteurCalc, sequence: &str) {
    for g in sequence.split_whitespace() {
        let t = Touche::depuis_glyphe(g).unwrap_or_else(|| panic!("glyphe inconnu: {g:?}"));
        m.perform(t);
    }
}

fn taper(sequence: &str) -> MoteurCalc {
    let mut m = MoteurCalc::new();
    taper_sur(&mut m, sequence);
    m
}

fn assert_ecran(sequence: &str, attendu: &str) {
    let m = taper(sequence);
    assert_eq!(m.current_display(), attendu, "sequence={sequence:?}");
}

/* ------------------------ Saisie ------------------------ */

#[test]
fn seq_chiffres_concatenes() {
    assert_ecran("1 2 3", "123");
    assert_ecran("9 0 0 1", "9001");
    assert_ecran("3 . 1 4", "3.14");
}

#[test]
fn seq_zero_initial_conserve_tel_quel() {
    // Le premier chiffre remplace "0", les suivants s’ajoutent.
    assert_ecran("0 5", "05");
    assert_ecran("0 5 + 1 =", "6");
}

/* ------------------------ Chaînage ------------------------ */

#[test]
fn seq_identite_quatre_operateurs() {
    let cas = [
        (Operateur::Addition, "+"),
        (Operateur::Soustraction, "-"),
        (Operateur::Multiplication, "x"),
        (Operateur::Division, "/"),
    ];
    let operandes = [(7.0, 2.0, "7", "2"), (12.0, 4.0, "1 2", "4"), (1.5, 0.25, "1 . 5", ". 2 5")];

    for (op, glyphe) in cas {
        for (a, b, sa, sb) in operandes {
            let m = taper(&format!("{sa} {glyphe} {sb} ="));
            let attendu = super::format::format_valeur(op.apply(a, b))
                .unwrap_or_else(|e| panic!("op={op:?} err={e}"));
            assert_eq!(m.current_display(), attendu, "{a} {glyphe} {b}");
        }
    }
}

#[test]
fn seq_gauche_a_droite_sans_priorite() {
    assert_ecran("2 + 3 x 4 =", "20");
    assert_ecran("3 + 4 + 5 =", "12");
    assert_ecran("1 0 - 2 / 4 =", "2");
}

#[test]
fn seq_resultat_intermediaire_affiche() {
    assert_ecran("3 + 4 +", "7");
    assert_ecran("3 + 4 + 5", "5");
}

#[test]
fn seq_accumulateur_non_arrondi() {
    // 1/3 s’affiche 0.33 mais la chaîne continue sur la valeur exacte.
    assert_ecran("1 / 3 x 3 =", "1");
}

#[test]
fn seq_nouvelle_saisie_apres_egal() {
    assert_ecran("2 + 2 = 7", "7");
    assert_ecran("2 + 2 = . 5", "0.5");
}

#[test]
fn seq_egal_sans_operateur() {
    assert_ecran("=", "0");
    assert_ecran("4 2 =", "42");
    assert_ecran("4 2 = =", "42");
}

/* ------------------------ Transformations d’écran ------------------------ */

#[test]
fn seq_signe_et_pourcentage() {
    assert_ecran("5 +/-", "-5");
    assert_ecran("5 +/- +/-", "5");
    assert_ecran("5 0 %", "0.5");
    assert_ecran("0 +/-", "0");
    assert_ecran("1 %", "0.01");
    assert_ecran("1 %  %", "0");
}

/* ------------------------ Effacement ------------------------ */

#[test]
fn seq_effacer_depuis_tout_etat() {
    for seq in ["", "1 2", "3 +", "3 + 4", "3 + 4 =", "5 +/-", "9 / 0 =", "1 ."] {
        let mut m = taper(seq);
        taper_sur(&mut m, "A/C");
        assert_eq!(m.current_display(), "0", "sequence={seq:?}");
        assert_eq!(m.operateur_actif(), None, "sequence={seq:?}");
        assert!(m.attend_nouvelle_saisie(), "sequence={seq:?}");
        assert!(Touche::TOUTES.iter().all(|t| !m.is_active(*t)));
    }
}

/* ------------------------ Échecs de calcul ------------------------ */

#[test]
fn seq_division_par_zero() {
    let mut m = taper("9 / 0 =");
    assert_eq!(m.affichage(), &Affichage::Invalide);
    assert_eq!(m.current_display(), TEXTE_INVALIDE);

    taper_sur(&mut m, "A/C");
    assert_eq!(m.current_display(), "0");

    taper_sur(&mut m, "6 / 3 =");
    assert_eq!(m.current_display(), "2");
}

#[test]
fn seq_zero_sur_zero() {
    let m = taper("0 / 0 =");
    assert_eq!(m.affichage(), &Affichage::Invalide);
}
