use crate::error::{PredictorError, Result};
use crate::types::config::PredictorConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "predictor.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/match-predictor/config.toml";

pub const ENV_DATA_URL: &str = "SPORTS_DATA_URL";
pub const ENV_MODEL_NAME: &str = "MODEL_NAME";
pub const ENV_API_BASE: &str = "API_BASE_URL";

/// Loads configuration from the global file, `predictor.toml` in `root`, an
/// optional explicit file, then the process environment.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<PredictorConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    let mut cfg = load_config_with_global(root, global.as_deref(), explicit)?;
    apply_env_overrides(&mut cfg, |key| std::env::var(key).ok());
    Ok(cfg)
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
    explicit: Option<&Path>,
) -> Result<PredictorConfig> {
    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_CONFIG_FILE))?;
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(PredictorError::ConfigNotFound(path.display().to_string()));
        }
        merge_file_if_exists(&mut merged, path)?;
    }

    let cfg: PredictorConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| PredictorError::ConfigParse(e.to_string()))?;
    if cfg.llm.max_turns == 0 {
        return Err(PredictorError::ConfigParse(
            "llm.max_turns must be at least 1".to_string(),
        ));
    }
    Ok(cfg)
}

pub(crate) fn apply_env_overrides<F>(cfg: &mut PredictorConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(url) = lookup(ENV_DATA_URL) {
        cfg.data.base_url = url;
    }
    if let Some(model) = lookup(ENV_MODEL_NAME) {
        cfg.llm.model = Some(model);
    }
    if let Some(api_base) = lookup(ENV_API_BASE) {
        cfg.llm.api_base = api_base;
    }
    cfg.llm.api_key = lookup(&cfg.llm.api_key_env);
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    tracing::debug!(path = %path.display(), "merging config file");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| PredictorError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
