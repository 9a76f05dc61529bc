//! Brazilian currency utilities: parsing "R$ 1.234,56" cells and
//! formatting numeric values back to the same locale pattern.

use regex::Regex;
use std::sync::LazyLock;

/// Tutto ciò che non è cifra, vírgula, ponto ou sinal.
static NON_NUMERIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9.,\-]").unwrap());

/// Parse a BRL currency cell into a float.
///
/// Strips the "R$" symbol (and any other stray text), drops the thousands
/// separator dots and converts the decimal comma to a decimal point.
/// Non-numeric results coerce to 0.0, matching the silent-zero policy of
/// the duration parser.
pub fn parse_currency(raw: &str) -> f64 {
    let cleaned = NON_NUMERIC.replace_all(raw, "");
    let normalized = cleaned.replace('.', "").replace(',', ".");

    normalized.trim().parse::<f64>().unwrap_or(0.0)
}

/// Format a value in the Brazilian pattern: "R$ 1.234,56".
pub fn format_brl(valor: f64) -> String {
    let negative = valor < 0.0;
    let cents = (valor.abs() * 100.0).round() as u64;
    let integer = cents / 100;
    let frac = cents % 100;

    // agrupamento de milhares com ponto
    let digits = integer.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("R$ {}{},{:02}", sign, grouped, frac)
}
