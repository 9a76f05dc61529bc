use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// SQLite annotation store.
    pub database: String,
    /// Overtime workbook (.xlsx).
    pub workbook: String,
    #[serde(default = "default_abas_filiais")]
    pub abas_filiais: Vec<String>,
    #[serde(default = "default_aba_operacao")]
    pub aba_operacao: String,
    #[serde(default = "default_aba_quadro")]
    pub aba_quadro: String,
    /// Dataset snapshot time-to-live, in seconds.
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
}

fn default_abas_filiais() -> Vec<String> {
    ["VAL", "RIB", "MAR", "JAC", "GRU"]
        .into_iter()
        .map(String::from)
        .collect()
}
fn default_aba_operacao() -> String {
    "OPERACAO".to_string()
}
fn default_aba_quadro() -> String {
    "QUADRO".to_string()
}
fn default_cache_ttl() -> u64 {
    300
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            workbook: Self::config_dir()
                .join("banco_de_horas.xlsx")
                .to_string_lossy()
                .to_string(),
            abas_filiais: default_abas_filiais(),
            aba_operacao: default_aba_operacao(),
            aba_quadro: default_aba_quadro(),
            cache_ttl_secs: default_cache_ttl(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("overhours")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".overhours")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("overhours.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("overhours.sqlite")
    }

    /// Dataset snapshot path, co-located with the annotation store so a
    /// `--db` override never reuses another store's snapshot.
    pub fn cache_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.cache.json", self.database))
    }

    /// Workbook path with ~ expanded.
    pub fn workbook_path(&self) -> PathBuf {
        crate::utils::path::expand_tilde(&self.workbook)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Initialize configuration (and the files it points at).
    /// `custom_db` overrides the annotation-store path; in test mode the
    /// config file itself is not written.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> io::Result<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(format!("serialize config: {e}")))?;
            fs::write(Self::config_file(), yaml)?;
        }

        Ok(config)
    }
}
