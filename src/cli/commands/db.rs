use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::oplog;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::{db_utils, stats};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if *migrate {
            run_pending_migrations(&pool.conn)?;
            oplog(&pool.conn, "migrate", "", "Pending migrations applied")?;
            success("Migrations are up to date.");
        }

        if *check {
            db_utils::check_integrity(&mut pool)?;
            success("Integrity check passed.");
        }

        if *vacuum {
            info("Running VACUUM...");
            db_utils::vacuum(&mut pool)?;
            success("Database optimized.");
        }

        if *show_info {
            stats::print_db_info(&mut pool, &cfg.database)?;
        }
    }
    Ok(())
}
