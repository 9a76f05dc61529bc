// src/export/model.rs

use crate::core::report::NaoClassificado;
use crate::models::record::OvertimeRecord;
use crate::utils::currency::format_brl;
use crate::utils::date::format_br;
use serde::Serialize;

/// Flat row for the filtered-records report, with the display formatting
/// the HR team expects (day-first dates, BRL currency).
#[derive(Serialize, Clone, Debug)]
pub struct RegistroExport {
    pub data: String,
    pub colaborador: String,
    pub cargo: String,
    pub filial: String,
    pub valor_total: String,
    pub categoria: String,
    pub justificativa: String,
    pub usuario_responsavel: String,
}

impl From<&OvertimeRecord> for RegistroExport {
    fn from(r: &OvertimeRecord) -> Self {
        Self {
            data: format_br(r.data),
            colaborador: r.nome.clone(),
            cargo: r.cargo.clone(),
            filial: r.filial.clone(),
            valor_total: format_brl(r.valor_total),
            categoria: r.categoria.clone(),
            justificativa: r.justificativa.clone(),
            usuario_responsavel: r.anotado_por.clone(),
        }
    }
}

/// Header fixo do relatório (rótulos em português, na ordem do arquivo).
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "Data",
        "Colaborador",
        "Cargo",
        "Filial",
        "Valor Total (R$)",
        "Categoria",
        "Justificativa",
        "Usuario Responsavel",
    ]
}

pub(crate) fn registro_to_row(r: &RegistroExport) -> Vec<String> {
    vec![
        r.data.clone(),
        r.colaborador.clone(),
        r.cargo.clone(),
        r.filial.clone(),
        r.valor_total.clone(),
        r.categoria.clone(),
        r.justificativa.clone(),
        r.usuario_responsavel.clone(),
    ]
}

pub(crate) fn registros_to_table(registros: &[RegistroExport]) -> Vec<Vec<String>> {
    registros.iter().map(registro_to_row).collect()
}

/// Header do relatório de não classificados.
pub(crate) fn nao_classificados_headers() -> Vec<&'static str> {
    vec![
        "Colaborador",
        "Filial",
        "Custo Total Não Classificado",
        "Nº de Lançamentos",
    ]
}

pub(crate) fn nao_classificado_to_row(n: &NaoClassificado) -> Vec<String> {
    vec![
        n.nome.clone(),
        n.filial.clone(),
        format_brl(n.custo_total),
        n.ocorrencias.to_string(),
    ]
}
