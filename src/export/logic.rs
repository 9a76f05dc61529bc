// src/export/logic.rs

use crate::core::report::NaoClassificado;
use crate::errors::AppResult;
use crate::export::model::{
    get_headers, nao_classificado_to_row, nao_classificados_headers, registros_to_table,
};
use crate::export::{ExportFormat, RegistroExport, fs_utils, notify_export_success};
use crate::models::record::OvertimeRecord;
use crate::ui::messages::warning;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the filtered records report.
    ///
    /// - `format`: csv | json | xlsx
    /// - `file`: output path (parent must exist; `--force` skips the
    ///   overwrite prompt)
    pub fn export(
        registros: &[&OvertimeRecord],
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        fs_utils::ensure_writable(path, force)?;

        if registros.is_empty() {
            warning("Nenhum registro para os filtros selecionados. Nothing to export.");
            return Ok(());
        }

        let flat: Vec<RegistroExport> = registros.iter().map(|r| RegistroExport::from(*r)).collect();

        match format {
            ExportFormat::Csv => {
                let rows = registros_to_table(&flat);
                crate::export::csv::write_csv(path, &get_headers(), &rows)?;
                notify_export_success("CSV", path);
            }
            ExportFormat::Json => {
                crate::export::json::write_json(path, &flat)?;
                notify_export_success("JSON", path);
            }
            ExportFormat::Xlsx => {
                crate::export::xlsx::export_xlsx(&flat, path)?;
            }
        }

        Ok(())
    }

    /// Export the unclassified-employees diagnostic (CSV only, like the
    /// original download button).
    pub fn export_nao_classificados(
        resumo: &[NaoClassificado],
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        fs_utils::ensure_writable(path, force)?;

        if resumo.is_empty() {
            warning("Nenhum colaborador não classificado. Nothing to export.");
            return Ok(());
        }

        let rows: Vec<Vec<String>> = resumo.iter().map(nao_classificado_to_row).collect();
        crate::export::csv::write_csv(path, &nao_classificados_headers(), &rows)?;
        notify_export_success("CSV", path);
        Ok(())
    }
}
