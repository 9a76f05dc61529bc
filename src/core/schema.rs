//! Schema normalization: canonical column names, canonical join keys and
//! typed rows.
//!
//! The branch tabs are maintained by hand, so header spelling drifts
//! ("Colaborador", "COLABORADOR ", "colaborador"). Headers are lower-cased
//! and trimmed before the fixed rename table below is applied; columns the
//! table does not know are ignored.

use crate::core::ingest::RawTable;
use crate::models::roster::RosterEntry;
use crate::utils::currency::parse_currency;
use crate::utils::date::parse_flex_date;
use crate::utils::time::parse_duration;
use chrono::NaiveDate;

/// Source-label → canonical-name rename table.
pub const MAPEAMENTO_NOMES: &[(&str, &str)] = &[
    ("colaborador", "nome"),
    ("função", "funcao"),
    ("funcao", "funcao"),
    ("cargo", "cargo"),
    ("salario base", "salario_base"),
    ("qtd he 50%", "qtd_he_50"),
    ("qtd he 100%", "qtd_he_100"),
    ("valor he 50%", "valor_he_50"),
    ("valor he 100%", "valor_he_100"),
    ("valor total", "valor_total"),
    ("data", "data"),
    ("filial", "filial"),
    ("status", "status"),
];

/// Lower-case + trim + rename. Unmapped headers keep their lowered form.
pub fn canonical_header(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    for (from, to) in MAPEAMENTO_NOMES {
        if lowered == *from {
            return (*to).to_string();
        }
    }
    lowered
}

/// Canonical join key: trimmed + upper-cased, so "  João Silva " and
/// "JOÃO SILVA" land on the same annotation row.
pub fn canonical_nome(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// One typed overtime row, still branch-local (pre-reconciliation).
#[derive(Debug, Clone)]
pub struct HorasRow {
    pub nome: String,
    pub filial: String,
    pub data: NaiveDate,
    pub qtd_he_50: f64,
    pub qtd_he_100: f64,
    pub valor_he_50: f64,
    pub valor_he_100: f64,
    pub valor_total: f64,
    pub salario_base: f64,
}

/// Index of a canonical column in a raw table, if present.
fn col(table: &RawTable, canonical: &str) -> Option<usize> {
    table
        .headers
        .iter()
        .position(|h| canonical_header(h) == canonical)
}

fn cell<'a>(table: &'a RawTable, row: usize, idx: Option<usize>) -> &'a str {
    match idx {
        Some(i) => table.cell(row, i),
        None => "",
    }
}

/// Parse one branch tab into typed rows.
///
/// Numeric/duration cells that fail to parse become 0.0 with no row-level
/// error — the source reports were built on this coercion and the output
/// must agree with them. Rows without a valid date or employee name are
/// dropped.
pub fn parse_horas(table: &RawTable, filial: &str) -> Vec<HorasRow> {
    let c_nome = col(table, "nome");
    let c_data = col(table, "data");
    let c_q50 = col(table, "qtd_he_50");
    let c_q100 = col(table, "qtd_he_100");
    let c_v50 = col(table, "valor_he_50");
    let c_v100 = col(table, "valor_he_100");
    let c_total = col(table, "valor_total");
    let c_salario = col(table, "salario_base");

    let mut out = Vec::new();
    for i in 0..table.rows.len() {
        let nome = canonical_nome(cell(table, i, c_nome));
        let data = parse_flex_date(cell(table, i, c_data));

        let (nome, data) = match (nome.is_empty(), data) {
            (false, Some(d)) => (nome, d),
            _ => continue, // sem nome ou sem data válida → linha descartada
        };

        out.push(HorasRow {
            nome,
            filial: filial.to_string(),
            data,
            qtd_he_50: parse_duration(cell(table, i, c_q50)),
            qtd_he_100: parse_duration(cell(table, i, c_q100)),
            valor_he_50: parse_currency(cell(table, i, c_v50)),
            valor_he_100: parse_currency(cell(table, i, c_v100)),
            valor_total: parse_currency(cell(table, i, c_total)),
            salario_base: parse_currency(cell(table, i, c_salario)),
        });
    }
    out
}

/// OPERACAO tab → (nome, cargo) pairs, keys canonicalized.
pub fn parse_operacao(table: &RawTable) -> Vec<(String, String)> {
    let c_nome = col(table, "nome");
    // a aba usa ora "cargo", ora "função"
    let c_cargo = col(table, "cargo").or_else(|| col(table, "funcao"));

    let mut out = Vec::new();
    for i in 0..table.rows.len() {
        let nome = canonical_nome(cell(table, i, c_nome));
        let cargo = cell(table, i, c_cargo).trim().to_string();
        if nome.is_empty() {
            continue;
        }
        out.push((nome, cargo));
    }
    out
}

/// QUADRO tab → roster entries (headcount only).
pub fn parse_quadro(table: &RawTable) -> Vec<RosterEntry> {
    let c_nome = col(table, "nome");
    let c_cargo = col(table, "cargo").or_else(|| col(table, "funcao"));
    let c_filial = col(table, "filial");
    let c_status = col(table, "status");

    let mut out = Vec::new();
    for i in 0..table.rows.len() {
        let nome = canonical_nome(cell(table, i, c_nome));
        if nome.is_empty() {
            continue;
        }
        out.push(RosterEntry {
            nome,
            cargo: cell(table, i, c_cargo).trim().to_string(),
            filial: cell(table, i, c_filial).trim().to_uppercase(),
            status: cell(table, i, c_status).trim().to_string(),
        });
    }
    out
}
