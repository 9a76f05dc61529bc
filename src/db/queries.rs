use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::annotation::Anotacao;
use crate::models::pending::PendingHires;
use crate::models::user::Usuario;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

// ---------------------------------------------------------------------------
// Anotações
// ---------------------------------------------------------------------------

pub fn map_anotacao(row: &Row) -> Result<Anotacao> {
    Ok(Anotacao {
        id_registro: row.get("id_registro")?,
        nome_usuario: row.get("nome_usuario")?,
        categoria: row.get("categoria")?,
        justificativa: row.get("justificativa")?,
        data_modificacao: row.get("data_modificacao")?,
    })
}

pub fn fetch_anotacoes(pool: &mut DbPool) -> AppResult<Vec<Anotacao>> {
    let mut stmt = pool.conn.prepare(
        "SELECT id_registro, nome_usuario, categoria, justificativa, data_modificacao
         FROM anotacoes
         ORDER BY id_registro ASC",
    )?;

    let rows = stmt.query_map([], map_anotacao)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn fetch_anotacao(conn: &Connection, id_registro: &str) -> AppResult<Option<Anotacao>> {
    let mut stmt = conn.prepare(
        "SELECT id_registro, nome_usuario, categoria, justificativa, data_modificacao
         FROM anotacoes
         WHERE id_registro = ?1",
    )?;

    Ok(stmt.query_row([id_registro], map_anotacao).optional()?)
}

/// Insert-or-update keyed by id_registro. Bumps data_modificacao, matching
/// the store-side conflict resolution the dashboard always relied on.
pub fn upsert_anotacao(
    conn: &Connection,
    id_registro: &str,
    nome_usuario: &str,
    categoria: &str,
    justificativa: &str,
) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    conn.execute(
        "INSERT INTO anotacoes (id_registro, nome_usuario, categoria, justificativa, data_modificacao)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(id_registro) DO UPDATE SET
             nome_usuario     = excluded.nome_usuario,
             categoria        = excluded.categoria,
             justificativa    = excluded.justificativa,
             data_modificacao = excluded.data_modificacao",
        params![id_registro, nome_usuario, categoria, justificativa, now],
    )?;
    Ok(())
}

/// Used when the user clears both category and justification for a row.
pub fn delete_anotacao(conn: &Connection, id_registro: &str) -> AppResult<()> {
    conn.execute("DELETE FROM anotacoes WHERE id_registro = ?1", [id_registro])?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Contratações pendentes
// ---------------------------------------------------------------------------

/// Latest snapshot per branch from the history table: rank rows per branch
/// by recorded time (then surrogate id) descending and keep rank 1.
pub fn fetch_pending_hires(pool: &mut DbPool) -> AppResult<Vec<PendingHires>> {
    let mut stmt = pool.conn.prepare(
        "SELECT filial, qtd_pendente FROM (
             SELECT filial, qtd_pendente,
                    ROW_NUMBER() OVER (
                        PARTITION BY filial
                        ORDER BY registrado_em DESC, id DESC
                    ) AS rn
             FROM contratacoes
         )
         WHERE rn = 1
         ORDER BY filial ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(PendingHires {
            filial: row.get(0)?,
            qtd_pendente: row.get(1)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Append a new snapshot to the history (never updates in place).
pub fn insert_pending_snapshot(conn: &Connection, filial: &str, qtd: i64) -> AppResult<()> {
    let now = Local::now().to_rfc3339();
    conn.execute(
        "INSERT INTO contratacoes (filial, qtd_pendente, registrado_em) VALUES (?1, ?2, ?3)",
        params![filial, qtd, now],
    )?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Usuários
// ---------------------------------------------------------------------------

pub fn map_usuario(row: &Row) -> Result<Usuario> {
    Ok(Usuario {
        id: row.get("id")?,
        nome: row.get("nome")?,
        email: row.get("email")?,
        sal: row.get("sal")?,
        senha_hash: row.get("senha_hash")?,
        departamento: row.get::<_, Option<String>>("departamento")?.unwrap_or_default(),
    })
}

pub fn find_usuario_by_email(conn: &Connection, email: &str) -> AppResult<Option<Usuario>> {
    let mut stmt = conn.prepare(
        "SELECT id, nome, email, sal, senha_hash, departamento
         FROM usuarios
         WHERE email = ?1",
    )?;

    Ok(stmt.query_row([email], map_usuario).optional()?)
}

pub fn insert_usuario(
    conn: &Connection,
    nome: &str,
    email: &str,
    sal: &str,
    senha_hash: &str,
    departamento: &str,
) -> AppResult<()> {
    conn.execute(
        "INSERT INTO usuarios (nome, email, sal, senha_hash, departamento)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![nome, email, sal, senha_hash, departamento],
    )?;
    Ok(())
}
