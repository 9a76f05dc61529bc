use crate::cli::commands::resolve_filtro;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{ReportLogic, aplicar_filtro};
use crate::core::sync::SyncLogic;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::ui::messages::warning;
use crate::utils::date::parse_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        ano,
        mes,
        filial,
        data,
        nao_classificados,
        force,
    } = cmd
    {
        let dataset = SyncLogic::load_or_build(cfg, false)?;
        if dataset.is_empty() {
            warning("Não há dados válidos para exibir.");
            return Ok(());
        }

        let filtro = resolve_filtro(cfg, ano, mes, filial)?;
        let mut rows = aplicar_filtro(&dataset.registros, &filtro);

        if let Some(s) = data {
            let dia = parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?;
            rows.retain(|r| r.data == dia);
        }

        if *nao_classificados {
            let resumo = ReportLogic::nao_classificados(&rows);
            ExportLogic::export_nao_classificados(&resumo, file, *force)?;
        } else {
            ExportLogic::export(&rows, format, file, *force)?;
        }
    }
    Ok(())
}
