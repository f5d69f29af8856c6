//! View configuration.
//!
//! Page size, the number of numbered page controls, and the suggested export
//! filename. Every field has a default, so a YAML file only needs to name what
//! it changes:
//!
//! ```yaml
//! page_size: 25
//! export_filename: matches.csv
//! ```

use crate::common::{Error, Result};
use crate::view::pagination::{DEFAULT_MAX_BUTTONS, DEFAULT_PAGE_SIZE};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Suggested filename handed to the sink on export.
pub const DEFAULT_EXPORT_FILENAME: &str = "filtered_data.csv";

/// Settings for a browsing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewConfig {
    /// Rows per page
    pub page_size: usize,
    /// Upper bound on numbered page controls
    pub max_buttons: usize,
    /// Suggested filename for exports
    pub export_filename: String,
    /// Prefix exports with a UTF-8 BOM
    pub write_bom: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_buttons: DEFAULT_MAX_BUTTONS,
            export_filename: DEFAULT_EXPORT_FILENAME.to_string(),
            write_bom: false,
        }
    }
}

impl ViewConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set rows per page
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the suggested export filename
    pub fn with_export_filename(mut self, filename: impl Into<String>) -> Self {
        self.export_filename = filename.into();
        self
    }

    /// Parse and validate a YAML document.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] on malformed YAML, unknown keys, or invalid values.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: ViewConfig = serde_saphyr::from_str(yaml)
            .map_err(|e| Error::Config(format!("Failed to parse view config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML file.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] when the file cannot be read, otherwise as
    /// [`ViewConfig::from_yaml_str`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let yaml = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "loading view config");
        Self::from_yaml_str(&yaml)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::Config("page_size must be at least 1".to_string()));
        }
        if self.export_filename.trim().is_empty() {
            return Err(Error::Config("export_filename must not be empty".to_string()));
        }
        if self.export_filename.contains(['/', '\\']) {
            return Err(Error::Config(format!(
                "export_filename must be a bare file name, got {:?}",
                self.export_filename
            )));
        }
        Ok(())
    }
}
