use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

/// `db --info`: high-level statistics about the annotation store.
pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ANOTAÇÕES
    //
    let anotacoes: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM anotacoes", [], |row| row.get(0))?;
    println!(
        "{}• Annotations:{} {}{}{}",
        CYAN, RESET, GREEN, anotacoes, RESET
    );

    let last_mod: Option<String> = pool
        .conn
        .query_row(
            "SELECT data_modificacao FROM anotacoes ORDER BY data_modificacao DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;
    println!(
        "{}• Last annotation change:{} {}",
        CYAN,
        RESET,
        last_mod.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    //
    // 3) USUÁRIOS
    //
    let usuarios: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM usuarios", [], |row| row.get(0))?;
    println!("{}• Users:{} {}", CYAN, RESET, usuarios);

    //
    // 4) CONTRATAÇÕES PENDENTES (snapshot mais recente por filial)
    //
    let snapshots: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM contratacoes", [], |row| row.get(0))?;
    println!(
        "{}• Pending-hire history rows:{} {}",
        CYAN, RESET, snapshots
    );

    let mut stmt = pool.conn.prepare(
        "SELECT filial, qtd_pendente FROM (
             SELECT filial, qtd_pendente,
                    ROW_NUMBER() OVER (PARTITION BY filial ORDER BY registrado_em DESC, id DESC) AS rn
             FROM contratacoes
         ) WHERE rn = 1 ORDER BY filial ASC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
    })?;

    for r in rows {
        let (filial, qtd) = r?;
        println!("    {} → {} pendente(s)", filial, qtd);
    }

    println!();
    Ok(())
}
