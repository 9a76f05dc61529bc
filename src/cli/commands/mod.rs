pub mod annotate;
pub mod config;
pub mod db;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod report;
pub mod sync;
pub mod user;

use crate::config::Config;
use crate::core::reconcile::periodo_comercial;
use crate::core::report::Filtro;
use crate::errors::{AppError, AppResult};
use crate::utils::date::{resolve_mes, today};

/// Build the commercial-period filter shared by report/list/export/annotate.
///
/// Defaults mirror the dashboard: current commercial year and month, all
/// branches. "todos"/"todas" widen month and branch respectively.
pub(crate) fn resolve_filtro(
    cfg: &Config,
    ano: &Option<i32>,
    mes: &Option<String>,
    filial: &Option<String>,
) -> AppResult<Filtro> {
    let (ano_atual, mes_atual) = periodo_comercial(today());

    let ano = ano.unwrap_or(ano_atual);

    let mes = match mes {
        Some(arg) => resolve_mes(arg).ok_or_else(|| AppError::InvalidMonth(arg.clone()))?,
        None => Some(mes_atual),
    };

    let filial = match filial {
        Some(f) if f.eq_ignore_ascii_case("todas") => None,
        Some(f) => {
            let code = f.trim().to_uppercase();
            if !cfg.abas_filiais.iter().any(|aba| aba.eq_ignore_ascii_case(&code)) {
                return Err(AppError::InvalidBranch(f.clone()));
            }
            Some(code)
        }
        None => None,
    };

    Ok(Filtro { ano, mes, filial })
}
