//! Hook configuration stored in `phasecheck.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use tracing::debug;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "phasecheck.toml";

/// Where feature directories live and how their files are named.
///
/// Missing fields default to the layout the executor and checker agents
/// write: `docs/ai/features/<id>/status-update.md` and
/// `docs/ai/features/<id>/verification-phase-<N>.md`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PhasecheckConfig {
    /// Directory holding one subdirectory per feature id.
    pub features_root: PathBuf,

    /// Status document file name inside a feature directory.
    pub status_file: String,

    /// Verification report file name is `<prefix><N><suffix>`.
    pub report_file_prefix: String,
    pub report_file_suffix: String,
}

impl Default for PhasecheckConfig {
    fn default() -> Self {
        Self {
            features_root: PathBuf::from("docs/ai/features"),
            status_file: "status-update.md".to_string(),
            report_file_prefix: "verification-phase-".to_string(),
            report_file_suffix: ".md".to_string(),
        }
    }
}

impl PhasecheckConfig {
    pub fn validate(&self) -> Result<()> {
        if self.features_root.as_os_str().is_empty() {
            return Err(anyhow!("features_root must not be empty"));
        }
        if self.status_file.trim().is_empty() {
            return Err(anyhow!("status_file must not be empty"));
        }
        if self.report_file_prefix.trim().is_empty() {
            return Err(anyhow!("report_file_prefix must not be empty"));
        }
        for (key, value) in [
            ("status_file", &self.status_file),
            ("report_file_prefix", &self.report_file_prefix),
            ("report_file_suffix", &self.report_file_suffix),
        ] {
            if value.contains('/') || value.contains('\\') {
                return Err(anyhow!("{key} must be a file name, not a path (got '{value}')"));
            }
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `PhasecheckConfig::default()`.
pub fn load_config(path: &Path) -> Result<PhasecheckConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        let cfg = PhasecheckConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: PhasecheckConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    debug!(path = %path.display(), "loaded config");
    Ok(cfg)
}

/// Resolve the config for one invocation.
///
/// An explicitly named file must exist; the default file is optional.
pub fn resolve_config(explicit: Option<&Path>) -> Result<PhasecheckConfig> {
    match explicit {
        Some(path) => {
            if !path.is_file() {
                bail!("config file not found: {}", path.display());
            }
            load_config(path)
        }
        None => load_config(Path::new(DEFAULT_CONFIG_FILE)),
    }
}
