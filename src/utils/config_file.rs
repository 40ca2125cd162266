use std::path::Path;
use anyhow::{Result, Context};
use log::debug;

use crate::member::types::ReorderOptions;
use super::file_utils;

/// Parse reorder options from TOML text; missing keys keep their defaults
pub fn parse_options(content: &str) -> Result<ReorderOptions> {
    let options: ReorderOptions = toml::from_str(content)
        .context("Failed to parse reorder configuration")?;
    options.validate()?;
    Ok(options)
}

/// Load reorder options from a TOML file
pub fn load_options(path: impl AsRef<Path>) -> Result<ReorderOptions> {
    let path = path.as_ref();
    debug!("Loading configuration from {}", path.display());

    let content = file_utils::read_file_to_string(path)?;
    parse_options(&content)
        .with_context(|| format!("Invalid configuration file {}", path.display()))
}
