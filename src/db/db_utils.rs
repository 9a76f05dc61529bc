use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};

/// PRAGMA integrity_check — returns Ok(()) only when SQLite reports "ok".
pub fn check_integrity(pool: &mut DbPool) -> AppResult<()> {
    let result: String = pool
        .conn
        .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;

    if result == "ok" {
        Ok(())
    } else {
        Err(AppError::Migration(format!(
            "integrity_check failed: {}",
            result
        )))
    }
}

/// VACUUM the store (reclaims space after bulk annotation deletes).
pub fn vacuum(pool: &mut DbPool) -> AppResult<()> {
    pool.conn.execute_batch("VACUUM;")?;
    Ok(())
}
