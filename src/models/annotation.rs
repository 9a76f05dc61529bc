use serde::{Deserialize, Serialize};

/// One row of the `anotacoes` table.
/// At most one per id_registro — the store upserts on conflict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Anotacao {
    pub id_registro: String,
    pub nome_usuario: String,
    pub categoria: String,
    pub justificativa: String,
    pub data_modificacao: String, // ISO8601
}
