//! Credential checking for the `user` command.
//!
//! Passwords are stored as hex(sha256(sal ‖ senha)) with a per-user random
//! salt; authentication re-hashes the presented password and compares.

use crate::db::pool::DbPool;
use crate::db::queries::{find_usuario_by_email, insert_usuario};
use crate::errors::{AppError, AppResult};
use crate::models::user::UserInfo;
use rand::RngCore;
use sha2::{Digest, Sha256};

pub fn hash_senha(sal: &str, senha: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(sal.as_bytes());
    hasher.update(senha.as_bytes());
    hex::encode(hasher.finalize())
}

pub fn gerar_sal() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

pub fn verify_senha(sal: &str, senha: &str, senha_hash: &str) -> bool {
    hash_senha(sal, senha) == senha_hash
}

pub struct AuthLogic;

impl AuthLogic {
    /// Check email + password against the `usuarios` table.
    /// Returns None (not an error) when the user is unknown or the
    /// password does not match — the caller decides how loud to be.
    pub fn authenticate(pool: &mut DbPool, email: &str, senha: &str) -> AppResult<Option<UserInfo>> {
        if email.trim().is_empty() || senha.is_empty() {
            return Ok(None);
        }

        match find_usuario_by_email(&pool.conn, email.trim())? {
            Some(usuario) if verify_senha(&usuario.sal, senha, &usuario.senha_hash) => {
                Ok(Some(UserInfo::from(&usuario)))
            }
            _ => Ok(None),
        }
    }

    /// Create a new user with a fresh salt.
    pub fn register(
        pool: &mut DbPool,
        nome: &str,
        email: &str,
        senha: &str,
        departamento: &str,
    ) -> AppResult<()> {
        if senha.len() < 6 {
            return Err(AppError::Auth(
                "A senha deve ter pelo menos 6 caracteres.".to_string(),
            ));
        }
        if find_usuario_by_email(&pool.conn, email.trim())?.is_some() {
            return Err(AppError::Auth(format!("Email já cadastrado: {}", email)));
        }

        let sal = gerar_sal();
        let senha_hash = hash_senha(&sal, senha);
        insert_usuario(&pool.conn, nome.trim(), email.trim(), &sal, &senha_hash, departamento)?;
        Ok(())
    }
}
