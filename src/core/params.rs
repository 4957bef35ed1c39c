use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::processing::colorkey::DEFAULT_TOLERANCE;
use crate::error::Result;

/// Conversion parameters suitable for preset files, the CLI and the GUI session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionParams {
    /// If true, near-white pixels become fully transparent before padding
    pub remove_white: bool,
    /// Per-channel distance from 255 still treated as white
    pub tolerance: u8,
}

impl Default for ConversionParams {
    fn default() -> Self {
        Self {
            remove_white: false,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl ConversionParams {
    pub fn with_remove_white(mut self, remove_white: bool) -> Self {
        self.remove_white = remove_white;
        self
    }

    /// Load a JSON preset. Missing fields fall back to their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let params: ConversionParams = serde_json::from_str(&content)?;
        debug!("Loaded preset {:?}: {:?}", path, params);
        Ok(params)
    }

    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
