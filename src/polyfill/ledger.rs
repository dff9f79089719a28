//! Synthetic custom properties collected across one stylesheet.

/// One direction-dependent value, emitted as `<name>-ltr` / `<name>-rtl`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackEntry {
    /// Synthetic custom property name, including the leading `--`.
    pub name: String,
    pub value: String,
}

/// Canonical custom property mirroring a logical property: `--x-<property>`.
pub fn canonical_name(property: &str) -> String {
    format!("--x-{property}")
}

/// Accumulates fallback entries and reset properties for the prelude.
#[derive(Debug, Clone)]
pub struct FallbackLedger {
    prefix: String,
    counter: u32,
    entries: Vec<FallbackEntry>,
    resets: Vec<String>,
}

impl FallbackLedger {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: 0,
            entries: Vec::new(),
            resets: Vec::new(),
        }
    }

    /// Store `value` under a fresh synthetic name and return that name.
    pub fn register_fallback(&mut self, value: &str) -> String {
        let name = format!("--{}-{}", self.prefix, self.counter);
        self.counter += 1;
        self.entries.push(FallbackEntry {
            name: name.clone(),
            value: value.to_string(),
        });
        name
    }

    /// Schedule `--x-<property>` for the stylesheet-wide `initial` reset.
    pub fn register_reset(&mut self, property: &str) {
        self.resets.push(canonical_name(property));
    }

    pub fn entries(&self) -> &[FallbackEntry] {
        &self.entries
    }

    /// Reset properties in registration order, duplicates included.
    pub fn resets(&self) -> &[String] {
        &self.resets
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.resets.is_empty()
    }
}
