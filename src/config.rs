//! Configuration for an autoscan run.
//!
//! Holds the probed layouts, the scan parameters and the I/O limits in one
//! explicit structure so independent scans never share global state.

use crate::error::{OobError, Result};
use crate::io::IOLimits;
use crate::oob::{Layout, ScanParams, DEFAULT_LAYOUTS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Master configuration for an autoscan run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Candidate geometries, probed in order.
    pub layouts: Vec<Layout>,
    /// Sampling and probing parameters shared by every layout.
    pub scan: ScanParams,
    /// I/O limits applied when opening a dump.
    pub limits: IOLimits,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            layouts: DEFAULT_LAYOUTS.to_vec(),
            scan: ScanParams::default(),
            limits: IOLimits::default(),
        }
    }
}

impl ScanConfig {
    /// Loads a JSON configuration file. Missing fields take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config: ScanConfig = serde_json::from_str(&text)?;
        debug!(path = %path.display(), layouts = config.layouts.len(), "Loaded scan config");
        Ok(config)
    }

    /// Rejects configurations the driver cannot run meaningfully.
    pub fn validate(&self) -> Result<()> {
        if self.layouts.is_empty() {
            return Err(OobError::InvalidConfig("no layouts configured".to_string()));
        }
        if let Some(layout) = self
            .layouts
            .iter()
            .find(|l| l.page_size == 0 || l.oob_size == 0)
        {
            return Err(OobError::InvalidConfig(format!(
                "layout {} has a zero size",
                layout
            )));
        }
        if self.scan.scan_step == 0 {
            return Err(OobError::InvalidConfig(
                "scan_step must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
