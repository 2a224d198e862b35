//! Test-only helpers for building feature directories on disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::io::config::PhasecheckConfig;
use crate::io::paths::FeaturePaths;

/// Scratch working directory holding `docs/ai/features/<id>/`.
///
/// Paths are absolute so library tests never depend on the process cwd.
/// CLI tests run the binary with [`TestFeature::root`] as its cwd.
pub struct TestFeature {
    temp: TempDir,
    config: PhasecheckConfig,
    paths: FeaturePaths,
}

impl TestFeature {
    /// Create the feature directory (empty, no status document).
    pub fn new(feature_id: &str) -> Result<Self> {
        let temp = tempfile::tempdir().context("create tempdir")?;
        let defaults = PhasecheckConfig::default();
        let config = PhasecheckConfig {
            features_root: temp.path().join(&defaults.features_root),
            ..defaults
        };
        let paths = FeaturePaths::new(&config, feature_id);
        fs::create_dir_all(&paths.feature_dir)
            .with_context(|| format!("create {}", paths.feature_dir.display()))?;
        Ok(Self {
            temp,
            config,
            paths,
        })
    }

    /// Working directory that contains `docs/ai/features`.
    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    pub fn config(&self) -> &PhasecheckConfig {
        &self.config
    }

    pub fn paths(&self) -> &FeaturePaths {
        &self.paths
    }

    pub fn write_status(&self, contents: &str) -> Result<()> {
        fs::write(&self.paths.status_path, contents)
            .with_context(|| format!("write {}", self.paths.status_path.display()))
    }

    pub fn write_report(&self, phase: u32, contents: &str) -> Result<()> {
        let path = self.paths.report_path(phase);
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))
    }
}

/// Render a `### Phase N: Title` section with the given step counts.
pub fn phase_section(number: u32, title: &str, checked: usize, unchecked: usize) -> String {
    let mut section = format!("### Phase {number}: {title}\n\n");
    for i in 0..checked {
        section.push_str(&format!("- [x] done step {}\n", i + 1));
    }
    for i in 0..unchecked {
        section.push_str(&format!("- [ ] pending step {}\n", i + 1));
    }
    section.push('\n');
    section
}

/// Render a verification report body.
pub fn report_body(status: &str, reason: Option<&str>) -> String {
    let mut body = format!("# Verification\n\n**Status**: {status}\n");
    if let Some(reason) = reason {
        body.push_str(&format!("**Reason**: {reason}\n"));
    }
    body
}
