use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;

/// Cor por operação no log interno.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "sync" => Colour::Green,
        "annotate" => Colour::Yellow,
        "user" => Colour::Blue,
        "migrate" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51), // laranja
        _ => Colour::White,
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        if !*print {
            println!("Use 'overhours log --print' to show the internal log table.");
            return Ok(());
        }

        let pool = DbPool::new(&cfg.database)?;
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let id: i32 = row.get(0)?;
            let raw_date: String = row.get(1)?;
            let operation: String = row.get(2)?;
            let target: String = row.get(3)?;
            let message: String = row.get(4)?;

            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            // operação + alvo numa coluna só
            let op_target = if target.is_empty() {
                operation.clone()
            } else {
                format!("{operation} ({target})")
            };

            Ok((id, date, operation, op_target, message))
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }

        if entries.is_empty() {
            println!("Log table is empty.");
            return Ok(());
        }

        for (id, date, operation, op_target, message) in entries {
            let colour = color_for_operation(&operation);
            println!(
                "{:>4}  {}  {}  {}",
                id,
                date,
                colour.paint(format!("{:<18}", op_target)),
                message
            );
        }
    }
    Ok(())
}
