// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Moneydash", "moneydash"));

const DEFAULT_API_URL: &str = "http://localhost:8080/api/transactions";
const ENV_API_URL: &str = "MONEYDASH_API_URL";

#[derive(Debug, Default, Serialize, Deserialize)]
struct Config {
    #[serde(default)]
    api_url: Option<String>,
}

pub fn config_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    let config_dir = proj.config_dir();
    fs::create_dir_all(config_dir).context("Failed to create config dir")?;
    Ok(config_dir.join("config.json"))
}

fn load() -> Result<Config> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(Config::default());
    }
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("Read config at {}", path.display()))?;
    let cfg = serde_json::from_str(&raw)
        .with_context(|| format!("Parse config at {}", path.display()))?;
    Ok(cfg)
}

/// Store endpoint, in precedence order: MONEYDASH_API_URL, the config
/// file, then the localhost default.
pub fn api_base_url() -> Result<String> {
    if let Ok(url) = std::env::var(ENV_API_URL) {
        let url = url.trim().to_string();
        if !url.is_empty() {
            return Ok(url);
        }
    }
    let cfg = load()?;
    Ok(cfg.api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()))
}

pub fn set_api_base_url(url: &str) -> Result<()> {
    let mut cfg = load()?;
    cfg.api_url = Some(url.trim().trim_end_matches('/').to_string());
    let path = config_path()?;
    fs::write(&path, serde_json::to_string_pretty(&cfg)?)
        .with_context(|| format!("Write config at {}", path.display()))?;
    Ok(())
}
