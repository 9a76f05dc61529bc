use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn column_exists(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `anotacoes` table with the modern schema (categoria +
/// justificativa split).
fn create_anotacoes_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS anotacoes (
            id_registro      TEXT PRIMARY KEY,
            nome_usuario     TEXT NOT NULL DEFAULT '',
            categoria        TEXT NOT NULL DEFAULT '',
            justificativa    TEXT NOT NULL DEFAULT '',
            data_modificacao TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_anotacoes_usuario ON anotacoes(nome_usuario);
        "#,
    )?;
    Ok(())
}

/// Upgrade a legacy `anotacoes` table (single `texto_anotacao` free-text
/// column) to the modern schema. The old text lands in `justificativa`.
fn migrate_legacy_anotacoes(conn: &Connection) -> Result<()> {
    if !table_exists(conn, "anotacoes")? {
        return Ok(()); // sem tabela → nada a migrar
    }

    if !column_exists(conn, "anotacoes", "texto_anotacao")? {
        return Ok(()); // já no formato moderno
    }

    warning("Upgrading legacy 'anotacoes' table (texto_anotacao → justificativa)...");

    conn.execute_batch(
        r#"
        PRAGMA foreign_keys=OFF;
        BEGIN;

        ALTER TABLE anotacoes RENAME TO anotacoes_old;

        CREATE TABLE anotacoes (
            id_registro      TEXT PRIMARY KEY,
            nome_usuario     TEXT NOT NULL DEFAULT '',
            categoria        TEXT NOT NULL DEFAULT '',
            justificativa    TEXT NOT NULL DEFAULT '',
            data_modificacao TEXT NOT NULL
        );

        INSERT INTO anotacoes (id_registro, nome_usuario, justificativa, data_modificacao)
        SELECT id_registro,
               IFNULL(nome_usuario, ''),
               IFNULL(texto_anotacao, ''),
               IFNULL(data_modificacao, datetime('now'))
        FROM anotacoes_old;

        DROP TABLE anotacoes_old;

        CREATE INDEX IF NOT EXISTS idx_anotacoes_usuario ON anotacoes(nome_usuario);

        COMMIT;
        PRAGMA foreign_keys=ON;
        "#,
    )?;

    success("'anotacoes' table upgraded.");
    Ok(())
}

/// Add the `categoria` column to an `anotacoes` table created before the
/// enumerated categories existed.
fn migrate_add_categoria(conn: &Connection) -> Result<()> {
    if !table_exists(conn, "anotacoes")? {
        return Ok(());
    }

    if column_exists(conn, "anotacoes", "categoria")? {
        return Ok(()); // já presente → OK
    }

    warning("Adding 'categoria' column to anotacoes table...");
    conn.execute_batch(
        "ALTER TABLE anotacoes ADD COLUMN categoria TEXT NOT NULL DEFAULT '';",
    )?;
    success("'categoria' column added.");
    Ok(())
}

/// History of pending hires per branch. Only the newest row per branch is
/// ever read (rank-1 window query in queries.rs); older rows stay as audit
/// trail.
fn create_contratacoes_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS contratacoes (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            filial        TEXT NOT NULL,
            qtd_pendente  INTEGER NOT NULL DEFAULT 0,
            registrado_em TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_contratacoes_filial ON contratacoes(filial, registrado_em);
        "#,
    )?;
    Ok(())
}

fn create_usuarios_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS usuarios (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            nome         TEXT NOT NULL,
            email        TEXT NOT NULL UNIQUE,
            sal          TEXT NOT NULL,
            senha_hash   TEXT NOT NULL,
            departamento TEXT DEFAULT ''
        );
        "#,
    )?;
    Ok(())
}

/// Run every pending migration, in order. Safe to call on every startup:
/// each step probes the current schema before touching it.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    migrate_legacy_anotacoes(conn)?;
    create_anotacoes_table(conn)?;
    migrate_add_categoria(conn)?;

    create_contratacoes_table(conn)?;
    create_usuarios_table(conn)?;

    Ok(())
}
