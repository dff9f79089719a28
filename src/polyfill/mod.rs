//! The logical-property polyfill.
//!
//! ## Pipeline
//!
//! 1. **Rules** - every recognized declaration is rewritten in place as the
//!    walk reaches it ([`rules`]). Static properties get physical siblings;
//!    direction-dependent ones get an `@supports` guarded copy of their rule
//!    and a ledger entry.
//! 2. **Prelude** - once the walk is done, the reset, LTR and RTL rules are
//!    written to the top of the stylesheet from everything collected
//!    ([`prelude`]).
//!
//! All state collected during a run lives in a [`PolyfillContext`], which is
//! created fresh for every stylesheet.

pub mod direction;
pub mod ledger;
pub mod prelude;
pub mod rules;


use crate::options::Options;
use crate::sheet::{NodeId, Stylesheet};
use crate::walk::Plugin;

pub use direction::{Direction, DirectionRegistry};
pub use ledger::{FallbackEntry, FallbackLedger};
pub use rules::Rewrite;

/// Everything a run accumulates before the prelude can be written.
#[derive(Debug, Clone)]
pub struct PolyfillContext {
    pub directions: DirectionRegistry,
    pub ledger: FallbackLedger,
}

impl PolyfillContext {
    pub fn new(options: &Options) -> Self {
        let mut directions = DirectionRegistry::new();
        for selector in &options.ltr_selectors {
            directions.push(Direction::Ltr, selector.as_str());
        }
        for selector in &options.rtl_selectors {
            directions.push(Direction::Rtl, selector.as_str());
        }

        Self {
            directions,
            ledger: FallbackLedger::new(options.variable_prefix.as_str()),
        }
    }
}

/// The polyfill as a [`Plugin`].
///
/// One instance handles one stylesheet at a time. After
/// [`Plugin::once_exit`] the collected state is discarded, so an instance
/// can be reused without selectors or counters leaking between sheets.
#[derive(Debug, Clone)]
pub struct Polyfill {
    options: Options,
    context: PolyfillContext,
}

impl Polyfill {
    pub fn new(options: Options) -> Self {
        let context = PolyfillContext::new(&options);
        Self { options, context }
    }

    /// State collected so far in the current run.
    pub fn context(&self) -> &PolyfillContext {
        &self.context
    }
}

impl Default for Polyfill {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl Plugin for Polyfill {
    fn name(&self) -> &'static str {
        "logical-polyfill"
    }

    fn wants(&self, property: &str) -> bool {
        Rewrite::for_property(property).is_some()
    }

    fn declaration(&mut self, sheet: &mut Stylesheet, decl: NodeId) {
        let Some(property) = sheet.declaration(decl).map(|d| d.property.as_str()) else {
            return;
        };
        if let Some(rewrite) = Rewrite::for_property(property) {
            rewrite.apply(sheet, decl, &mut self.context);
        }
    }

    fn once_exit(&mut self, sheet: &mut Stylesheet) {
        let context = std::mem::replace(&mut self.context, PolyfillContext::new(&self.options));
        prelude::emit(sheet, &context);
    }
}
