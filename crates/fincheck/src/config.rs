//! Configuration for fincheck
//!
//! Controls which identifier kinds are extracted, how text is scanned and
//! how results are printed. Loaded from TOML (or JSON); every field has a
//! default so partial files are fine.
//!
//! ```toml
//! include = ["CUSIP", "ISIN"]
//! include_aba = true
//! scan = "windowed"
//! output = "lines"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FincheckError, Result};
use crate::kind::IdentifierKind;

/// How candidates are located in text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    /// Whole tokens only, bounded by non-word characters
    #[default]
    Bounded,
    /// Every fixed-length window, including ones glued to other text
    Windowed,
}

/// How results are printed by the command-line tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One JSON object keyed by kind
    #[default]
    Json,
    /// One `KIND<TAB>value` line per match
    Lines,
}

/// Extraction configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FincheckConfig {
    /// Security kinds to extract (ABA entries are ignored here)
    pub include: Vec<IdentifierKind>,
    /// Also extract ABA routing numbers
    pub include_aba: bool,
    pub scan: ScanMode,
    pub output: OutputFormat,
}

impl Default for FincheckConfig {
    fn default() -> Self {
        Self {
            include: IdentifierKind::securities().to_vec(),
            include_aba: false,
            scan: ScanMode::default(),
            output: OutputFormat::default(),
        }
    }
}

impl FincheckConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| FincheckError::ConfigParse(e.to_string()))
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| FincheckError::ConfigParse(e.to_string()))
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self> {
        serde_json::from_str(json_str).map_err(|e| FincheckError::ConfigParse(e.to_string()))
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| FincheckError::ConfigParse(e.to_string()))
    }

    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        config.validate()?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Default config file location: `<config dir>/fincheck/config.toml`
    pub fn standard_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("fincheck").join("config.toml"))
    }

    /// Load from [`standard_path`](Self::standard_path) when the file
    /// exists, otherwise use defaults
    pub fn load_standard() -> Result<Self> {
        match Self::standard_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Security kinds to extract, deduplicated, in configured order
    pub fn security_kinds(&self) -> Vec<IdentifierKind> {
        let mut kinds = Vec::new();
        for &kind in &self.include {
            if kind.is_security() && !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
        kinds
    }

    /// Every kind to extract, ABA last when enabled
    pub fn kinds(&self) -> Vec<IdentifierKind> {
        let mut kinds = self.security_kinds();
        if self.include_aba {
            kinds.push(IdentifierKind::Aba);
        }
        kinds
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.kinds().is_empty() {
            return Err(FincheckError::InvalidConfig(
                "include must name at least one of CUSIP, ISIN or SEDOL, or include_aba must be set"
                    .to_string(),
            ));
        }

        Ok(())
    }
}
