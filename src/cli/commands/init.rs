use crate::config::Config;
use crate::db::log;
use crate::errors::AppResult;

use crate::cli::parser::Cli;
use crate::db::initialize::init_db;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite annotation store (prod or test mode)
///  - all pending DB migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    //
    // 1️⃣ CONFIGURAÇÃO
    //
    // Config::init_all cria:
    //   ~/.overhours/
    //   ~/.overhours/overhours.conf
    // e devolve a config com o path do DB resolvido.
    //
    let cfg = if let Some(custom) = &cli.db {
        Config::init_all(Some(custom.clone()), cli.test)?
    } else {
        Config::init_all(None, cli.test)?
    };

    let path = Config::config_file();
    let db_path = cfg.database.clone();

    println!("⚙️  Initializing overhours…");
    println!("📄 Config file : {}", path.display());
    println!("🗄️  Database   : {}", &db_path);
    println!("📊 Workbook    : {}", &cfg.workbook);

    //
    // 2️⃣ ABERTURA DB
    //
    let conn = Connection::open(&db_path)?;

    //
    // 3️⃣ INICIALIZAÇÃO DB (tabelas + migrações)
    //
    init_db(&conn)?;

    println!("✅ Database initialized at {}", &db_path);

    //
    // 4️⃣ LOG INTERNO (não bloqueante)
    //
    if let Err(e) = log::oplog(
        &conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 overhours initialization completed!");
    Ok(())
}
