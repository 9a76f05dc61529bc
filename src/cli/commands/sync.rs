use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::Session;
use crate::core::sync::SyncLogic;
use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::date::format_br;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sync { force } = cmd {
        if *force {
            // force = recomeça do zero: snapshot E sessão são descartados
            Session::clear()?;
            info("Session cleared.");
        }

        let dataset = SyncLogic::load_or_build(cfg, *force)?;

        if dataset.is_empty() {
            warning("Não há dados válidos para exibir.");
            return Ok(());
        }

        let filiais: std::collections::BTreeSet<&str> = dataset
            .registros
            .iter()
            .map(|r| r.filial.as_str())
            .collect();

        success(format!(
            "{} registros reconciliados de {} filial(is).",
            dataset.registros.len(),
            filiais.len()
        ));
        if let Some(ultima) = dataset.ultima_atualizacao() {
            info(format!("🗓️ Atualizado até {}", format_br(ultima)));
        }

        // log interno (não bloqueante, o sync já aconteceu)
        if let Ok(pool) = DbPool::new(&cfg.database) {
            let _ = oplog(
                &pool.conn,
                "sync",
                if *force { "force" } else { "" },
                &format!("{} records reconciled", dataset.registros.len()),
            );
        }
    }
    Ok(())
}
