//! Config-file migrations: fill in keys added after the file was first
//! written, without touching the values the user already set.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::Value;
use std::fs;

/// Keys a current config file must carry.
const REQUIRED_KEYS: &[&str] = &[
    "database",
    "workbook",
    "abas_filiais",
    "aba_operacao",
    "aba_quadro",
    "cache_ttl_secs",
];

/// Report which keys are missing from the on-disk file (empty = up to date).
pub fn missing_keys() -> AppResult<Vec<String>> {
    let path = Config::config_file();
    let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
    let yaml: Value = serde_yaml::from_str(&content)?;

    let map = match yaml.as_mapping() {
        Some(m) => m,
        None => return Err(AppError::Config("config file is not a mapping".into())),
    };

    Ok(REQUIRED_KEYS
        .iter()
        .filter(|k| !map.contains_key(&Value::String((**k).to_string())))
        .map(|k| (*k).to_string())
        .collect())
}

/// Merge defaults for any missing key into the on-disk file.
/// Returns true when the file was rewritten.
pub fn migrate_config_file() -> AppResult<bool> {
    let missing = missing_keys()?;
    if missing.is_empty() {
        info("Configuration file is up to date.");
        return Ok(false);
    }

    let path = Config::config_file();
    let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
    let mut yaml: Value = serde_yaml::from_str(&content)?;
    let defaults: Value = serde_yaml::to_value(Config::default())?;

    if let (Some(map), Some(def_map)) = (yaml.as_mapping_mut(), defaults.as_mapping()) {
        for key in &missing {
            let k = Value::String(key.clone());
            if let Some(v) = def_map.get(&k) {
                map.insert(k, v.clone());
            }
        }
    }

    fs::write(&path, serde_yaml::to_string(&yaml)?).map_err(|_| AppError::ConfigSave)?;
    success(format!(
        "Configuration migrated: added {}.",
        missing.join(", ")
    ));
    Ok(true)
}
