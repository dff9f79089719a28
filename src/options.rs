//! Polyfill configuration.

#[cfg(feature = "cli")]
use std::path::Path;

/// Selectors that force left-to-right rendering out of the box.
pub const DEFAULT_LTR_SELECTORS: &[&str] = &["[dir=\"ltr\"]", "html:not([dir=\"rtl\"])"];

/// Selectors that force right-to-left rendering out of the box.
pub const DEFAULT_RTL_SELECTORS: &[&str] = &["[dir=\"rtl\"]"];

/// Knobs for a polyfill run. The defaults need no configuration at all.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "cli",
    derive(serde::Deserialize),
    serde(default, deny_unknown_fields, rename_all = "camelCase")
)]
pub struct Options {
    /// Stem of the synthetic custom properties (`--<prefix>-<n>-ltr`).
    pub variable_prefix: String,
    /// Extra LTR selectors, appended after the defaults.
    pub ltr_selectors: Vec<String>,
    /// Extra RTL selectors, appended after the defaults.
    pub rtl_selectors: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            variable_prefix: "logical-polyfill".to_string(),
            ltr_selectors: Vec::new(),
            rtl_selectors: Vec::new(),
        }
    }
}

impl Options {
    /// Builder: set the synthetic variable prefix.
    pub fn with_variable_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.variable_prefix = prefix.into();
        self
    }

    /// Builder: add a selector that forces LTR.
    pub fn with_ltr_selector(mut self, selector: impl Into<String>) -> Self {
        self.ltr_selectors.push(selector.into());
        self
    }

    /// Builder: add a selector that forces RTL.
    pub fn with_rtl_selector(mut self, selector: impl Into<String>) -> Self {
        self.rtl_selectors.push(selector.into());
        self
    }

    /// Load options from a JSON file.
    #[cfg(feature = "cli")]
    pub fn from_json_file(path: impl AsRef<Path>) -> crate::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parse options from JSON text. Missing fields take their defaults.
    #[cfg(feature = "cli")]
    pub fn from_json(text: &str) -> crate::Result<Self> {
        let options: Options = serde_json::from_str(text)?;
        if options.variable_prefix.is_empty() {
            return Err(crate::Error::InvalidConfig(
                "variablePrefix must not be empty".to_string(),
            ));
        }
        Ok(options)
    }
}
