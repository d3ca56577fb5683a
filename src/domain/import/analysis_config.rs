// ============================================================
// ANALYSIS CONFIGURATION
// ============================================================
// Tunables for the import reconciliation pipeline

use serde::{Deserialize, Serialize};

/// Configuration for one import analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Maximum number of rows included in the preview (default: 20)
    pub preview_cap: usize,

    /// Probe the sample for `,` `;` tab `|` before decoding (default: true).
    /// When off, comma is assumed.
    pub detect_delimiter: bool,

    /// Number of lines sampled for delimiter detection (default: 10)
    pub delimiter_sample_lines: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            preview_cap: 20,
            detect_delimiter: true,
            delimiter_sample_lines: 10,
        }
    }
}

impl AnalysisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.preview_cap == 0 {
            return Err("preview_cap must be > 0".to_string());
        }
        if self.delimiter_sample_lines == 0 {
            return Err("delimiter_sample_lines must be > 0".to_string());
        }
        Ok(())
    }
}
