use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Tuning knobs loaded from `~/.config/arcgrep/config.toml`. Job parameters
/// (inputs, output, pattern) are CLI-only; the config never supplies them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArcgrepConfig {
    /// Buffer size in bytes for reading containers (and decoding gzip).
    #[serde(default = "default_read_buffer_bytes")]
    pub read_buffer_bytes: usize,
    /// Buffer size in bytes for the output writer.
    #[serde(default = "default_write_buffer_bytes")]
    pub write_buffer_bytes: usize,
}

fn default_read_buffer_bytes() -> usize {
    64 * 1024
}

fn default_write_buffer_bytes() -> usize {
    64 * 1024
}

impl Default for ArcgrepConfig {
    fn default() -> Self {
        Self {
            read_buffer_bytes: default_read_buffer_bytes(),
            write_buffer_bytes: default_write_buffer_bytes(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("arcgrep")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ArcgrepConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ArcgrepConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ArcgrepConfig = toml::from_str(&data)?;
    Ok(cfg)
}
