//! Reconciliation: joins the normalized overtime rows to the role lookup
//! and the annotation store, and buckets each row into its commercial
//! period.

use crate::core::schema::HorasRow;
use crate::models::annotation::Anotacao;
use crate::models::record::{CARGO_NAO_CLASSIFICADO, OvertimeRecord};
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

/// Commercial period of a date: the payroll month runs the 21st through
/// the 20th, so any day after the 20th already belongs to the next month
/// (December rolls into January of the next year).
pub fn periodo_comercial(data: NaiveDate) -> (i32, u32) {
    let (ano, mes) = (data.year(), data.month());
    if data.day() > 20 {
        if mes == 12 { (ano + 1, 1) } else { (ano, mes + 1) }
    } else {
        (ano, mes)
    }
}

pub struct ReconcileLogic;

impl ReconcileLogic {
    /// Role lookup map. One row per employee is expected; when the tab
    /// carries duplicates the FIRST occurrence wins and a warning names
    /// the employee (a fan-out join here would multiply every KPI sum).
    pub fn build_cargo_map(
        pares: &[(String, String)],
        warnings: &mut Vec<String>,
    ) -> HashMap<String, String> {
        let mut map = HashMap::new();
        for (nome, cargo) in pares {
            if map.contains_key(nome) {
                warnings.push(format!(
                    "Colaborador duplicado na aba de operação: '{}' (mantida a primeira linha).",
                    nome
                ));
                continue;
            }
            map.insert(nome.clone(), cargo.clone());
        }
        map
    }

    /// Assemble the reconciled records.
    ///
    /// Left-join semantics on both sides: a missing role becomes the
    /// "Não Classificado" sentinel, a missing annotation becomes empty
    /// fields. Building typed records field-by-field also makes the old
    /// duplicated-column cleanup unnecessary — each output column exists
    /// exactly once by construction.
    pub fn reconcile(
        horas: Vec<HorasRow>,
        cargos: &HashMap<String, String>,
        anotacoes: &HashMap<String, Anotacao>,
    ) -> Vec<OvertimeRecord> {
        let mut out = Vec::with_capacity(horas.len());

        for row in horas {
            let cargo = cargos
                .get(&row.nome)
                .filter(|c| !c.trim().is_empty())
                .cloned()
                .unwrap_or_else(|| CARGO_NAO_CLASSIFICADO.to_string());

            let id_registro = OvertimeRecord::build_id(&row.nome, row.data);
            let (ano_comercial, mes_comercial) = periodo_comercial(row.data);

            let (categoria, justificativa, anotado_por) = match anotacoes.get(&id_registro) {
                Some(a) => (
                    a.categoria.clone(),
                    a.justificativa.clone(),
                    a.nome_usuario.clone(),
                ),
                None => (String::new(), String::new(), String::new()),
            };

            out.push(OvertimeRecord {
                nome: row.nome,
                filial: row.filial,
                data: row.data,
                cargo,
                qtd_he_50: row.qtd_he_50,
                qtd_he_100: row.qtd_he_100,
                valor_he_50: row.valor_he_50,
                valor_he_100: row.valor_he_100,
                valor_total: row.valor_total,
                salario_base: row.salario_base,
                id_registro,
                ano_comercial,
                mes_comercial,
                categoria,
                justificativa,
                anotado_por,
            });
        }

        out
    }
}
