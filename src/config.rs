use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// On-disk configuration (`qbank.toml`).
///
/// Both fields are optional: an absent `database` falls back to the default
/// path, an absent `companies` list falls back to the built-in master list.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct QbankConfig {
    pub database: Option<String>,
    pub companies: Option<Vec<String>>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("qbank.toml")
}

pub fn default_database_path_in(base: &Path) -> PathBuf {
    base.join(".qbank").join("questions.db")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<QbankConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: QbankConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &QbankConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
