//! User configuration: built-in defaults + optional TOML file.
//!
//! - `QuijyConfig::default()` → built-in defaults
//! - `QuijyConfig::from_toml_file(path)` → load a user file
//! - `QuijyConfig::load(cli_path)` → `--config` if given, else ~/.quijy/config.toml if present

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::core::ops::CHOP_TOL;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct QuijyConfig {
    /// Relative tolerance used by `--chop`.
    pub chop_tol: f64,
    /// Build operands and conversions sparse unless a command says otherwise.
    pub sparse: bool,
    /// Digits after the decimal point when printing matrices.
    pub precision: usize,
}

impl Default for QuijyConfig {
    fn default() -> Self {
        Self { chop_tol: CHOP_TOL, sparse: false, precision: 4 }
    }
}

impl QuijyConfig {
    pub fn from_toml_str(txt: &str) -> Result<Self> {
        let cfg: QuijyConfig = toml::from_str(txt).context("parsing quijy config")?;
        if cfg.chop_tol.is_nan() || cfg.chop_tol <= 0.0 {
            bail!("chop_tol must be positive, got {}", cfg.chop_tol);
        }
        Ok(cfg)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&txt).with_context(|| format!("loading {}", path.display()))
    }

    /// Use ~/.quijy/config.toml if present; otherwise built-in.
    pub fn from_user_default_or_builtin() -> Self {
        if let Some(p) = default_config_path() {
            if p.exists() {
                match Self::from_toml_file(&p) {
                    Ok(cfg) => return cfg,
                    Err(e) => eprintln!("(warn) {e:#}; using built-in defaults"),
                }
            }
        }
        Self::default()
    }

    /// An explicit path must load; the user default may silently fall back.
    pub fn load(cli_path: Option<&Path>) -> Result<Self> {
        match cli_path {
            Some(p) => Self::from_toml_file(p),
            None => Ok(Self::from_user_default_or_builtin()),
        }
    }
}

/// ~/.quijy/config.toml
pub fn default_config_path() -> Option<PathBuf> {
    dirs_next::home_dir().map(|h| h.join(".quijy").join("config.toml"))
}
