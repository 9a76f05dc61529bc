//! Explicit session state, persisted next to the config file.
//!
//! Lifecycle: populated by `user --login`, cleared by `user --logout` and
//! by `sync --force`. The logged-in user's name is what gets recorded as
//! the annotation author on save.

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::user::UserInfo;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const AUTOR_PADRAO: &str = "Usuário do Sistema";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Session {
    pub user: Option<UserInfo>,
    pub logged_in_at: Option<String>, // ISO8601
}

impl Session {
    pub fn path() -> PathBuf {
        Config::config_dir().join("session.yaml")
    }

    /// Missing or unreadable file → empty session, never an error.
    pub fn load() -> Self {
        let path = Self::path();
        match fs::read_to_string(&path) {
            Ok(raw) => serde_yaml::from_str(&raw).unwrap_or_default(),
            Err(_) => Session::default(),
        }
    }

    pub fn login(user: UserInfo) -> AppResult<Self> {
        let session = Session {
            user: Some(user),
            logged_in_at: Some(Local::now().to_rfc3339()),
        };
        session.save()?;
        Ok(session)
    }

    fn save(&self) -> AppResult<()> {
        let path = Self::path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    pub fn clear() -> AppResult<()> {
        let path = Self::path();
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }

    /// Author name for annotation write-back.
    pub fn autor(&self) -> String {
        self.user
            .as_ref()
            .map(|u| u.nome.clone())
            .unwrap_or_else(|| AUTOR_PADRAO.to_string())
    }
}
