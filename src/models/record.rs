use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Sentinel role for employees missing from the OPERACAO lookup tab.
pub const CARGO_NAO_CLASSIFICADO: &str = "Não Classificado";

/// One reconciled overtime row.
///
/// Built fresh on every sync from the workbook plus the annotation store;
/// never persisted except as part of the dataset cache snapshot. The
/// annotation fields are the only ones that can differ between two syncs
/// over the same workbook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OvertimeRecord {
    pub nome: String,
    pub filial: String,
    pub data: NaiveDate,
    pub cargo: String,

    pub qtd_he_50: f64,
    pub qtd_he_100: f64,
    pub valor_he_50: f64,
    pub valor_he_100: f64,
    pub valor_total: f64,
    pub salario_base: f64,

    /// Join key to the annotation store: "NOME_YYYY-MM-DD".
    pub id_registro: String,

    pub ano_comercial: i32,
    pub mes_comercial: u32,

    pub categoria: String,
    pub justificativa: String,
    pub anotado_por: String,
}

impl OvertimeRecord {
    /// Chave sintética: nome canônico + data ISO.
    pub fn build_id(nome: &str, data: NaiveDate) -> String {
        format!("{}_{}", nome, data.format("%Y-%m-%d"))
    }

    pub fn data_str(&self) -> String {
        self.data.format("%Y-%m-%d").to_string()
    }

    pub fn ano_calendario(&self) -> i32 {
        self.data.year()
    }

    pub fn tem_anotacao(&self) -> bool {
        !self.categoria.trim().is_empty() || !self.justificativa.trim().is_empty()
    }
}
