//! Unit tests for the duration/currency parsers and the header/key
//! canonicalization.

use overhours::core::schema::{canonical_header, canonical_nome};
use overhours::utils::currency::{format_brl, parse_currency};
use overhours::utils::date::parse_flex_date;
use overhours::utils::time::{format_hours, parse_duration};

#[test]
fn parse_duration_is_linear() {
    assert_eq!(parse_duration("2:30:00"), 2.5);
    assert_eq!(parse_duration("01:30:00"), 1.5);
    assert_eq!(parse_duration("1:15"), 1.25);
    assert_eq!(parse_duration("0:00:36"), 0.01);
}

#[test]
fn parse_duration_placeholders_map_to_zero() {
    assert_eq!(parse_duration("00:00:00"), 0.0);
    assert_eq!(parse_duration(""), 0.0);
    assert_eq!(parse_duration("   "), 0.0);
}

#[test]
fn parse_duration_malformed_maps_to_zero() {
    assert_eq!(parse_duration("abc"), 0.0);
    assert_eq!(parse_duration("1:xx:00"), 0.0);
    assert_eq!(parse_duration("1"), 0.0);
    assert_eq!(parse_duration("1:2:3:4"), 0.0);
}

#[test]
fn parse_currency_brl_pattern() {
    assert_eq!(parse_currency("R$ 1.234,56"), 1234.56);
    assert_eq!(parse_currency("R$ 100,00"), 100.0);
    assert_eq!(parse_currency("R$ 0,00"), 0.0);
    assert_eq!(parse_currency("1.234.567,89"), 1234567.89);
}

#[test]
fn parse_currency_empty_and_garbage() {
    assert_eq!(parse_currency(""), 0.0);
    assert_eq!(parse_currency("n/a"), 0.0);
    assert_eq!(parse_currency("R$ "), 0.0);
}

#[test]
fn format_brl_display() {
    assert_eq!(format_brl(1234.56), "R$ 1.234,56");
    assert_eq!(format_brl(0.0), "R$ 0,00");
    assert_eq!(format_brl(100.0), "R$ 100,00");
    assert_eq!(format_brl(1234567.89), "R$ 1.234.567,89");
}

#[test]
fn format_hours_display() {
    assert_eq!(format_hours(2.5), "2:30h");
    assert_eq!(format_hours(0.0), "0:00h");
    assert_eq!(format_hours(1.25), "1:15h");
}

#[test]
fn canonical_header_renames_source_labels() {
    assert_eq!(canonical_header("Colaborador"), "nome");
    assert_eq!(canonical_header("  QTD HE 50% "), "qtd_he_50");
    assert_eq!(canonical_header("Valor Total"), "valor_total");
    assert_eq!(canonical_header("Função"), "funcao");
    // colunas desconhecidas passam em minúsculas
    assert_eq!(canonical_header("Observação"), "observação");
}

#[test]
fn canonical_nome_trims_and_uppercases() {
    assert_eq!(canonical_nome("  João Silva "), "JOÃO SILVA");
    assert_eq!(canonical_nome("JOÃO SILVA"), "JOÃO SILVA");
}

#[test]
fn parse_flex_date_formats() {
    use chrono::NaiveDate;
    let expected = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();

    assert_eq!(parse_flex_date("15/03/2024"), Some(expected));
    assert_eq!(parse_flex_date("2024-03-15"), Some(expected));
    // seriale Excel de 2024-03-15
    assert_eq!(parse_flex_date("45366"), Some(expected));
    assert_eq!(parse_flex_date("not a date"), None);
    assert_eq!(parse_flex_date(""), None);
}
