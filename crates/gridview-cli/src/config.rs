//! TOML configuration for the `gridview` binary.
//!
//! ```toml
//! confirm_deletes = true
//!
//! [view]
//! page_sizes = [10, 25, 50]
//! default_page_size = 25
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use gridview_core::ViewOptions;
use serde::{Deserialize, Serialize};

/// Settings loaded from `--config`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Page-size selector options.
    pub view: ViewOptions,

    /// Require `delete --yes` before removing records.
    pub confirm_deletes: bool,
}

impl CliConfig {
    /// Apply a `--page-size` override on top of the file values.
    ///
    /// A size the file does not list is added to the allowed set so that the
    /// flag always wins.
    pub fn with_page_size_override(mut self, page_size: Option<usize>) -> Self {
        if let Some(size) = page_size {
            if !self.view.allows(size) {
                self.view.page_sizes.push(size);
                self.view.page_sizes.sort_unstable();
            }
            self.view.default_page_size = size;
        }
        self
    }
}

/// Parse and validate a configuration document.
pub fn parse_config(content: &str) -> Result<CliConfig> {
    let config: CliConfig = toml::from_str(content).context("parse configuration")?;
    config.view.validate().context("invalid [view] options")?;
    Ok(config)
}

/// Load configuration from `path`, or defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<CliConfig> {
    let Some(path) = path else {
        tracing::debug!("no configuration file given, using defaults");
        return Ok(CliConfig::default());
    };
    let content = fs::read_to_string(path)
        .with_context(|| format!("read configuration {}", path.display()))?;
    let config =
        parse_config(&content).with_context(|| format!("load configuration {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded configuration");
    Ok(config)
}
