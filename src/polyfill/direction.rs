//! Selectors known to force a writing direction.

use crate::options::{DEFAULT_LTR_SELECTORS, DEFAULT_RTL_SELECTORS};

/// Inline base direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// Parse a `direction` keyword. Anything but `ltr`/`rtl` is `None`.
    pub fn from_keyword(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("ltr") {
            Some(Direction::Ltr)
        } else if value.eq_ignore_ascii_case("rtl") {
            Some(Direction::Rtl)
        } else {
            None
        }
    }

    /// Suffix used on synthetic custom properties.
    pub fn suffix(self) -> &'static str {
        match self {
            Direction::Ltr => "-ltr",
            Direction::Rtl => "-rtl",
        }
    }
}

/// Ordered LTR and RTL selector lists.
///
/// Selectors are only ever appended. Their order is the order of the
/// emitted selector lists in the prelude.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionRegistry {
    ltr: Vec<String>,
    rtl: Vec<String>,
}

impl DirectionRegistry {
    /// Registry seeded with the default UA-direction selectors.
    pub fn new() -> Self {
        Self {
            ltr: DEFAULT_LTR_SELECTORS.iter().map(|s| s.to_string()).collect(),
            rtl: DEFAULT_RTL_SELECTORS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Append `selector` to the set matching `value`. Other values are ignored.
    pub fn record(&mut self, selector: &str, value: &str) {
        match Direction::from_keyword(value) {
            Some(direction) => self.push(direction, selector),
            None => log::debug!("ignoring `direction: {value}` on {selector}"),
        }
    }

    /// Append `selector` to the given set.
    pub fn push(&mut self, direction: Direction, selector: impl Into<String>) {
        match direction {
            Direction::Ltr => self.ltr.push(selector.into()),
            Direction::Rtl => self.rtl.push(selector.into()),
        }
    }

    pub fn ltr_selectors(&self) -> &[String] {
        &self.ltr
    }

    pub fn rtl_selectors(&self) -> &[String] {
        &self.rtl
    }
}

impl Default for DirectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
