use crate::cli::parser::Commands;
use crate::config::{Config, migrate};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::process::Command as ProcessCommand;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate: do_migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            println!("📄 {}\n", path.display());
            println!("{}", content);
            return Ok(());
        }

        if *check {
            let missing = migrate::missing_keys()?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                warning(format!("Missing keys: {}", missing.join(", ")));
                info("Run 'overhours config --migrate' to add them with defaults.");
            }
            return Ok(());
        }

        if *do_migrate {
            migrate::migrate_config_file()?;
            return Ok(());
        }

        if *edit_config {
            let editor_cmd = resolve_editor(editor);
            info(format!("Opening {} with {}", path.display(), editor_cmd));

            let status = ProcessCommand::new(&editor_cmd)
                .arg(&path)
                .status()
                .map_err(|e| AppError::Config(format!("failed to launch '{}': {}", editor_cmd, e)))?;

            if !status.success() {
                return Err(AppError::Config(format!(
                    "editor '{}' exited with {}",
                    editor_cmd, status
                )));
            }
            return Ok(());
        }

        // sem flag → comporta-se como --print
        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        println!("{}", content);
    }
    Ok(())
}

fn resolve_editor(arg: &Option<String>) -> String {
    if let Some(e) = arg {
        return e.clone();
    }
    if let Ok(e) = std::env::var("EDITOR") {
        return e;
    }
    if let Ok(e) = std::env::var("VISUAL") {
        return e;
    }
    if cfg!(target_os = "windows") {
        "notepad".to_string()
    } else {
        "nano".to_string()
    }
}
