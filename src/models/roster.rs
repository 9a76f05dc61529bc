use serde::{Deserialize, Serialize};

/// One row of the QUADRO tab. Only used for headcount KPIs; independent of
/// the overtime records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterEntry {
    pub nome: String,
    pub cargo: String,
    pub filial: String,
    pub status: String,
}

impl RosterEntry {
    pub fn ativo(&self) -> bool {
        self.status.trim().eq_ignore_ascii_case("ativo")
    }
}
