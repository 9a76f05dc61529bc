use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::AuthLogic;
use crate::core::session::Session;
use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::User {
        add,
        verify,
        login,
        logout,
        nome,
        email,
        senha,
        departamento,
    } = cmd
    {
        if *logout {
            Session::clear()?;
            success("Session cleared.");
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.database)?;

        if *add {
            let nome = require(nome, "--nome")?;
            let email = require(email, "--email")?;
            let senha = require(senha, "--senha")?;
            let departamento = departamento.clone().unwrap_or_default();

            AuthLogic::register(&mut pool, nome, email, senha, &departamento)?;
            oplog(&pool.conn, "user", email, "User created")?;
            success(format!("User '{}' created.", email));
            return Ok(());
        }

        if *verify || *login {
            let email = require(email, "--email")?;
            let senha = require(senha, "--senha")?;

            match AuthLogic::authenticate(&mut pool, email, senha)? {
                Some(user) => {
                    if *login {
                        let session = Session::login(user)?;
                        oplog(&pool.conn, "user", email, "Login")?;
                        success(format!(
                            "Logged in as {} ({}).",
                            session.autor(),
                            email
                        ));
                    } else {
                        success(format!("Credentials OK for {}.", email));
                    }
                }
                None => {
                    return Err(AppError::Auth("Email ou senha inválidos.".to_string()));
                }
            }
            return Ok(());
        }

        // nenhuma flag → mostra a sessão atual
        let session = Session::load();
        match &session.user {
            Some(u) => info(format!("Logged in as {} ({}).", u.nome, u.email)),
            None => info("No active session."),
        }
    }
    Ok(())
}

fn require<'a>(value: &'a Option<String>, flag: &str) -> AppResult<&'a str> {
    value
        .as_deref()
        .ok_or_else(|| AppError::Auth(format!("missing required argument {}", flag)))
}
