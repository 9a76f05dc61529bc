use serde::{Deserialize, Serialize};

/// Latest pending-hires snapshot for one branch.
/// Derived from the `contratacoes` history table: rank rows per branch by
/// recorded time (then surrogate id) descending, keep rank 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingHires {
    pub filial: String,
    pub qtd_pendente: i64,
}
