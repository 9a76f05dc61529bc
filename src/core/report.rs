//! Filters, KPIs and group-bys over the reconciled records.

use crate::models::record::{CARGO_NAO_CLASSIFICADO, OvertimeRecord};
use crate::models::roster::RosterEntry;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Commercial-period filter. `mes = None` means the whole year ("todos");
/// `filial = None` means every branch ("todas").
#[derive(Debug, Clone)]
pub struct Filtro {
    pub ano: i32,
    pub mes: Option<u32>,
    pub filial: Option<String>,
}

/// Display names for the branch tab codes.
pub fn filial_display(code: &str) -> &str {
    match code {
        "GRU" => "Guarulhos",
        "VAL" => "Valinhos",
        "RIB" => "Ribeirão Preto",
        "MAR" => "Marília",
        "JAC" => "Jacareí",
        other => other,
    }
}

pub fn aplicar_filtro<'a>(
    registros: &'a [OvertimeRecord],
    filtro: &Filtro,
) -> Vec<&'a OvertimeRecord> {
    registros
        .iter()
        .filter(|r| match filtro.mes {
            Some(m) => r.ano_comercial == filtro.ano && r.mes_comercial == m,
            None => r.ano_comercial == filtro.ano,
        })
        .filter(|r| match &filtro.filial {
            Some(f) => r.filial.eq_ignore_ascii_case(f),
            None => true,
        })
        .collect()
}

/// The KPI panel numbers.
#[derive(Debug, Default, PartialEq)]
pub struct Kpis {
    pub custo_total: f64,
    pub custo_he_50: f64,
    pub custo_he_100: f64,
    pub horas_he_50: f64,
    pub horas_he_100: f64,
    /// Distinct employees with valor_total > 0.
    pub colaboradores: usize,
}

/// One line of the unclassified-employees diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct NaoClassificado {
    pub nome: String,
    pub filial: String,
    pub custo_total: f64,
    pub ocorrencias: usize,
}

pub struct ReportLogic;

impl ReportLogic {
    pub fn kpis(rows: &[&OvertimeRecord]) -> Kpis {
        let mut kpis = Kpis::default();
        let mut nomes = std::collections::BTreeSet::new();

        for r in rows {
            kpis.custo_total += r.valor_total;
            kpis.custo_he_50 += r.valor_he_50;
            kpis.custo_he_100 += r.valor_he_100;
            kpis.horas_he_50 += r.qtd_he_50;
            kpis.horas_he_100 += r.qtd_he_100;
            if r.valor_total > 0.0 {
                nomes.insert(r.nome.as_str());
            }
        }
        kpis.colaboradores = nomes.len();
        kpis
    }

    /// Total cost grouped by role, descending.
    pub fn custo_por_cargo(rows: &[&OvertimeRecord]) -> Vec<(String, f64)> {
        let mut por_cargo: BTreeMap<&str, f64> = BTreeMap::new();
        for r in rows {
            *por_cargo.entry(r.cargo.as_str()).or_insert(0.0) += r.valor_total;
        }

        let mut out: Vec<(String, f64)> = por_cargo
            .into_iter()
            .map(|(cargo, total)| (cargo.to_string(), total))
            .collect();
        out.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        out
    }

    /// Daily cost pivoted by branch: (branch codes, ordered date rows).
    /// Dates with no rows for a branch get 0.0, so every row has one cell
    /// per branch.
    pub fn evolucao_diaria(
        rows: &[&OvertimeRecord],
    ) -> (Vec<String>, Vec<(NaiveDate, Vec<f64>)>) {
        let mut filiais: Vec<String> = rows.iter().map(|r| r.filial.clone()).collect();
        filiais.sort();
        filiais.dedup();

        let mut por_dia: BTreeMap<NaiveDate, BTreeMap<&str, f64>> = BTreeMap::new();
        for r in rows {
            *por_dia
                .entry(r.data)
                .or_default()
                .entry(r.filial.as_str())
                .or_insert(0.0) += r.valor_total;
        }

        let linhas = por_dia
            .into_iter()
            .map(|(dia, por_filial)| {
                let valores = filiais
                    .iter()
                    .map(|f| por_filial.get(f.as_str()).copied().unwrap_or(0.0))
                    .collect();
                (dia, valores)
            })
            .collect();

        (filiais, linhas)
    }

    /// Diagnostic: employees missing from the OPERACAO tab, grouped by
    /// (employee, branch) with summed cost and occurrence count, highest
    /// cost first.
    pub fn nao_classificados(rows: &[&OvertimeRecord]) -> Vec<NaoClassificado> {
        let mut grupos: BTreeMap<(&str, &str), (f64, usize)> = BTreeMap::new();
        for r in rows {
            if r.cargo != CARGO_NAO_CLASSIFICADO {
                continue;
            }
            let entry = grupos.entry((r.nome.as_str(), r.filial.as_str())).or_insert((0.0, 0));
            entry.0 += r.valor_total;
            entry.1 += 1;
        }

        let mut out: Vec<NaoClassificado> = grupos
            .into_iter()
            .map(|((nome, filial), (custo, n))| NaoClassificado {
                nome: nome.to_string(),
                filial: filial.to_string(),
                custo_total: custo,
                ocorrencias: n,
            })
            .collect();
        out.sort_by(|a, b| {
            b.custo_total
                .partial_cmp(&a.custo_total)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        out
    }

    /// Active headcount per branch, from the roster tab.
    pub fn headcount_ativo(quadro: &[RosterEntry]) -> Vec<(String, usize)> {
        let mut por_filial: BTreeMap<&str, usize> = BTreeMap::new();
        for e in quadro {
            if e.ativo() {
                *por_filial.entry(e.filial.as_str()).or_insert(0) += 1;
            }
        }
        por_filial
            .into_iter()
            .map(|(f, n)| (f.to_string(), n))
            .collect()
    }
}
