//! WASM bindings for polyfilling stylesheets in the browser or a bundler.
//!
//! This module exposes the polyfill to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::options::Options;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Polyfill a stylesheet with the default options.
#[wasm_bindgen(js_name = polyfillCss)]
pub fn polyfill_css(css: &str) -> String {
    crate::polyfill(css)
}

/// Polyfill a stylesheet with a custom synthetic variable prefix.
#[wasm_bindgen(js_name = polyfillCssWithPrefix)]
pub fn polyfill_css_with_prefix(css: &str, prefix: &str) -> Result<String, JsValue> {
    if prefix.is_empty() {
        return Err(JsValue::from_str("variable prefix must not be empty"));
    }
    let options = Options::default().with_variable_prefix(prefix);
    Ok(crate::polyfill_with(css, &options))
}
