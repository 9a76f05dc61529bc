use serde::{Deserialize, Serialize};

/// Row of the `usuarios` table. `senha_hash` is hex(sha256(sal + senha)).
#[derive(Debug, Clone)]
pub struct Usuario {
    pub id: i64,
    pub nome: String,
    pub email: String,
    pub sal: String,
    pub senha_hash: String,
    pub departamento: String,
}

/// What survives authentication — everything except the credentials.
/// This is what gets stored in the session file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub nome: String,
    pub email: String,
    pub departamento: String,
}

impl From<&Usuario> for UserInfo {
    fn from(u: &Usuario) -> Self {
        Self {
            nome: u.nome.clone(),
            email: u.email.clone(),
            departamento: u.departamento.clone(),
        }
    }
}
