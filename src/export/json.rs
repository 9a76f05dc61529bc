// src/export/json.rs

use crate::errors::AppResult;
use crate::export::RegistroExport;
use std::path::Path;

/// Relatório em JSON formatado.
pub(crate) fn write_json(path: &Path, registros: &[RegistroExport]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(registros)?;
    std::fs::write(path, json)?;
    Ok(())
}
