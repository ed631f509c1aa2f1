// ============================================================================
// Module : format
// ============================================================================
// Formatage monétaire uk-UA / UAH et conversion texte -> nombre
//
// Le montant affiché suit les conventions de la locale uk-UA :
//   3650     -> "3 650,00 ₴"   (espaces insécables U+00A0)
//   -36.5    -> "-36,50 ₴"
//   NaN      -> "NaN ₴"
//   Infinity -> "∞ ₴"
//
// CONCEPTS RUST :
// 1. rust_decimal : arrondi monétaire en base 10, sans erreur binaire
// 2. Le montant part de l'écriture décimale la plus courte du f64 (Display) :
//    1.005 s'affiche "1.005" et s'arrondit donc à "1,01"
// 3. Slices d'octets (&[u8]) pour scanner un littéral numérique
// ============================================================================

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Espace insécable utilisé par la locale uk-UA (groupes et symbole)
pub const NBSP: char = '\u{a0}';

/// Symbole de la hryvnia
pub const UAH_SYMBOL: char = '₴';

/// Nombre de décimales d'un montant en hryvnia
const UAH_FRACTION_DIGITS: u32 = 2;

// ============================================================================
// Formatage monétaire
// ============================================================================

/// Formate un montant en hryvnia selon les conventions uk-UA
///
/// Les valeurs non finies ne sont pas traitées à part : elles sont rendues
/// comme le ferait le formateur de locale ("NaN ₴", "∞ ₴").
///
/// # Exemple
/// ```
/// use currency_transducer::format::format_uah;
/// assert_eq!(format_uah(3650.0), "3\u{a0}650,00\u{a0}₴");
/// ```
pub fn format_uah(value: f64) -> String {
    let number = if value.is_nan() {
        "NaN".to_string()
    } else {
        let sign = if value.is_sign_negative() { "-" } else { "" };

        if value.is_infinite() {
            format!("{sign}∞")
        } else {
            let rounded = round_uah(value.abs());
            let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
            format!("{sign}{},{frac_part}", group_thousands(int_part))
        }
    };

    format!("{number}{NBSP}{UAH_SYMBOL}")
}

/// Arrondit un montant positif fini aux centimes, demi vers le haut
///
/// L'arrondi porte sur l'écriture la plus courte du f64 ("0.365", pas
/// 0.36499999...). Au-delà de la plage de Decimal (~7.9e28) la valeur est
/// forcément entière : seuls les centimes "00" sont ajoutés.
fn round_uah(abs: f64) -> String {
    let shortest = abs.to_string();

    match Decimal::from_str(&shortest) {
        Ok(decimal) => round_to_string(decimal, UAH_FRACTION_DIGITS),
        Err(_) => format!("{shortest}.00"),
    }
}

/// Écrit `value` avec exactement `digits` décimales, arrondi demi vers le haut
///
/// - L'arrondi porte sur la valeur binaire exacte : 1.005 -> "1.00"
/// - NaN -> "NaN", ±Infinity -> "Infinity" / "-Infinity"
/// - -0 s'écrit sans signe
pub fn to_fixed(value: f64, digits: u32) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-Infinity" } else { "Infinity" }.to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();

    // from_f64_retain garde les chiffres binaires (jusqu'à 28 décimales)
    let fixed = match Decimal::from_f64_retain(abs) {
        Some(decimal) => round_to_string(decimal, digits),
        None => format!("{:.*}", digits as usize, abs),
    };

    format!("{sign}{fixed}")
}

/// Arrondi MidpointAwayFromZero puis écriture avec `digits` décimales
fn round_to_string(value: Decimal, digits: u32) -> String {
    let rounded = value.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", digits as usize, rounded)
}

/// Insère un espace insécable toutes les trois positions en partant de la droite
fn group_thousands(int_part: &str) -> String {
    let len = int_part.chars().count();
    let mut grouped = String::with_capacity(len + len / 3 * NBSP.len_utf8());

    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(NBSP);
        }
        grouped.push(c);
    }

    grouped
}

// ============================================================================
// Conversion texte -> nombre
// ============================================================================
// La saisie n'est jamais validée : conversion permissive, sans erreur.
// Chaîne vide -> 0, texte invalide -> NaN.
// ============================================================================

/// Convertit le texte saisi en nombre, sans jamais échouer
///
/// | texte       | résultat |
/// |-------------|----------|
/// | `""`, `"  "`| `0`      |
/// | `"100"`     | `100`    |
/// | `"1,5"`     | `NaN`    |
/// | `"0x1F"`    | `31`     |
/// | `"Infinity"`| `∞`      |
pub fn to_number(text: &str) -> f64 {
    let trimmed = text.trim_matches(is_blank);

    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(value) = parse_radix_literal(trimmed) {
        return value;
    }

    // f64::from_str accepte aussi "inf" ou "nan" : on valide la forme avant
    if is_decimal_literal(trimmed) {
        trimmed.parse::<f64>().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

fn is_blank(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Littéraux entiers préfixés 0x / 0o / 0b (sans signe)
fn parse_radix_literal(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }

    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    let body = &s[2..];
    if body.is_empty() {
        return Some(f64::NAN);
    }

    let mut value = 0.0_f64;
    for c in body.chars() {
        match c.to_digit(radix) {
            Some(digit) => value = value * f64::from(radix) + f64::from(digit),
            None => return Some(f64::NAN),
        }
    }

    Some(value)
}

/// Vérifie la forme `[+-]? (chiffres [. chiffres?] | . chiffres) ([eE] [+-]? chiffres)?`
fn is_decimal_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - int_start;

    let mut frac_digits = 0;
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        frac_digits = i - frac_start;
    }

    if int_digits + frac_digits == 0 {
        return false;
    }

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == bytes.len()
}

// ============================================================================
// Tests unitaires
// ============================================================================
