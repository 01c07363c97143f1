// src/noyau/format.rs
//
// Affichage d’un résultat : au plus 2 décimales, arrondi “demi loin de zéro”,
// sans signe forcé, sans séparateur de milliers.
//
// L’arrondi se décide sur un rationnel exact construit depuis l’écriture
// décimale la plus courte du f64 (donc 1.005 -> 1.01, et pas 1.00).

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use super::erreur::ErreurNoyau;

/// Nombre de décimales affichées.
pub const DECIMALES: usize = 2;

/* ------------------------ Décimal <-> rationnel ------------------------ */

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// "-12.345" -> -12345/1000. Pas d’exposant (Display de f64 n’en produit pas).
fn decimal_vers_rationnel(s: &str) -> Option<BigRational> {
    let (neg, corps) = match s.strip_prefix('-') {
        Some(reste) => (true, reste),
        None => (false, s),
    };

    let (ent, frac) = corps.split_once('.').unwrap_or((corps, ""));
    if ent.is_empty() && frac.is_empty() {
        return None;
    }
    if !ent.chars().chain(frac.chars()).all(|c| c.is_ascii_digit()) {
        return None;
    }

    let chiffres = format!("{ent}{frac}");
    let n = BigInt::parse_bytes(chiffres.as_bytes(), 10)?;
    let r = BigRational::new(n, pow10(frac.len()));

    Some(if neg { -r } else { r })
}

/// r -> entier “scalé” = round(r * 10^digits), demi loin de zéro.
fn rational_scaled_arrondi(r: &BigRational, digits: usize) -> BigInt {
    // Ratio garde un dénominateur positif : le signe est porté par le numérateur.
    let num = r.numer().abs() * pow10(digits);
    let den = r.denom();

    let mut q = &num / den;
    let reste = &num % den;
    if reste * 2u32 >= *den {
        q += 1u32;
    }

    if r.is_negative() {
        -q
    } else {
        q
    }
}

/// Entier scalé (×10^digits) -> texte, zéros de fin retirés ("1.50" -> "1.5", "2.00" -> "2").
fn scaled_to_decimal(scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    let abs = scaled.abs();

    let scale = pow10(digits);
    let int_part = &abs / &scale;
    let frac_part = &abs % &scale;

    let signe = if neg { "-" } else { "" };

    if digits == 0 || frac_part.is_zero() {
        return format!("{signe}{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }
    let frac = frac.trim_end_matches('0');

    format!("{signe}{int_part}.{frac}")
}

/* ------------------------ API ------------------------ */

/// Formate une valeur calculée pour l’affichage.
/// Refuse inf/NaN : l’appelant bascule alors l’affichage en état invalide.
pub fn format_valeur(v: f64) -> Result<String, ErreurNoyau> {
    if !v.is_finite() {
        return Err(ErreurNoyau::ResultatNonFini(v));
    }

    let r = decimal_vers_rationnel(&format!("{v}")).ok_or(ErreurNoyau::ResultatNonFini(v))?;
    let scaled = rational_scaled_arrondi(&r, DECIMALES);

    Ok(scaled_to_decimal(scaled, DECIMALES))
}

/// Lit le texte affiché comme un nombre fini ("3." est accepté).
pub fn lire_nombre(s: &str) -> Result<f64, ErreurNoyau> {
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ErreurNoyau::AffichageIllisible(s.to_string())),
    }
}
