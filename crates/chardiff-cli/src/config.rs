use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How `chardiff diff` renders runs as text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Color removed runs red and added runs green.
    pub color: bool,
    /// Wrap runs in `[-...-]` / `{+...+}` markers. Always on without color.
    pub markers: bool,
    /// Append a one-line summary after the rendered diff.
    pub show_stats: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            color: true,
            markers: false,
            show_stats: false,
        }
    }
}

impl RenderConfig {
    /// Read a TOML config file, or fall back to defaults when no path is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("parsing config {}", path.display()))?;
        debug!(path = %path.display(), ?config, "loaded render config");
        Ok(config)
    }

    /// Whether runs carry word-diff markers.
    pub fn use_markers(&self) -> bool {
        self.markers || !self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config() {
        let c = RenderConfig::default();
        assert!(c.color);
        assert!(!c.markers);
        assert!(!c.show_stats);
        assert!(!c.use_markers());
    }

    #[test]
    fn no_path_gives_defaults() {
        assert_eq!(RenderConfig::load(None).unwrap(), RenderConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "show_stats = true").unwrap();
        let c = RenderConfig::load(Some(file.path())).unwrap();
        assert!(c.show_stats);
        assert!(c.color);
    }

    #[test]
    fn colorless_config_forces_markers() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "color = false").unwrap();
        let c = RenderConfig::load(Some(file.path())).unwrap();
        assert!(!c.color);
        assert!(c.use_markers());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = RenderConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(err.to_string().contains("reading config"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "color = \"sometimes\"").unwrap();
        let err = RenderConfig::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("parsing config"));
    }
}
