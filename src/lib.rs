//! # logical-polyfill
//!
//! Rewrites logical CSS properties (`margin-inline`, `border-block-start`,
//! `inset-inline-end`, `border-start-end-radius`, ...) into physical,
//! direction-aware fallbacks for engines without native support, RTL
//! layouts included.
//!
//! ## Quick Start
//!
//! ```
//! let css = logical_polyfill::polyfill(".foo { margin-block: 10px; }");
//!
//! assert!(css.contains("margin-top: 10px;"));
//! assert!(css.contains("margin-bottom: 10px;"));
//! assert!(css.contains("margin-block: 10px;"));
//! ```
//!
//! ## How it works
//!
//! Properties with a fixed physical counterpart are expanded in place, with
//! the logical declaration kept last so engines that understand it use it.
//! Properties whose physical side depends on the writing direction
//! (`inset-inline-start`, the logical border-radius corners) get an
//! `@supports not (...)` guarded copy of their rule that reads synthetic
//! custom properties. A prelude at the top of the stylesheet defines those
//! properties per direction:
//!
//! ```
//! let css = logical_polyfill::polyfill(".foo { inset-inline-start: 4px; }");
//!
//! assert!(css.contains("@supports not (inset-inline-start: 0)"));
//! assert!(css.contains("--logical-polyfill-0-ltr: 4px;"));
//! assert!(css.contains("--logical-polyfill-0-rtl: 4px;"));
//! ```
//!
//! Lower-level pieces are public too: [`Stylesheet`] is the parsed tree,
//! [`walk::process`] drives any [`walk::Plugin`] over it, and
//! [`polyfill::Polyfill`] is the plugin doing the work here.

pub mod error;
pub mod options;
pub mod polyfill;
pub mod sheet;
pub(crate) mod util;
pub mod walk;

#[cfg(feature = "wasm")]
pub mod wasm;

use std::path::Path;

pub use error::{Error, Result};
pub use options::Options;
pub use sheet::{Declaration, NodeId, Stylesheet, ToCss};

/// Polyfill a stylesheet with the default options.
pub fn polyfill(css: &str) -> String {
    polyfill_with(css, &Options::default())
}

/// Polyfill a stylesheet.
pub fn polyfill_with(css: &str, options: &Options) -> String {
    let mut sheet = Stylesheet::parse(css);
    polyfill_stylesheet(&mut sheet, options);
    sheet.to_css_string()
}

/// Polyfill an already parsed stylesheet in place.
pub fn polyfill_stylesheet(sheet: &mut Stylesheet, options: &Options) {
    let mut plugin = polyfill::Polyfill::new(options.clone());
    walk::process(sheet, &mut plugin);
}

/// Polyfill raw stylesheet bytes, detecting their encoding.
///
/// `encoding` overrides `@charset` detection but not a byte order mark.
pub fn polyfill_bytes(bytes: &[u8], encoding: Option<&str>, options: &Options) -> Result<String> {
    let css = util::decode_stylesheet(bytes, encoding)?;
    Ok(polyfill_with(&css, options))
}

/// Read and polyfill a stylesheet file.
pub fn polyfill_file(path: impl AsRef<Path>, options: &Options) -> Result<String> {
    let bytes = std::fs::read(path)?;
    polyfill_bytes(&bytes, None, options)
}
