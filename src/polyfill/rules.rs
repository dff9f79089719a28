//! Per-property rewrite rules.
//!
//! Every recognized logical property maps to exactly one [`Rewrite`]. The
//! table is closed: anything not listed in [`Rewrite::for_property`] passes
//! through untouched.

use crate::sheet::{Declaration, NodeId, Stylesheet};

use super::PolyfillContext;
use super::direction::Direction;
use super::ledger::canonical_name;

/// A direction-dependent property with no static physical equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fallback {
    /// Logical property on the other side (or corner) of the same axis.
    pub opposite: &'static str,
    /// Physical properties in emission order, each paired with the direction
    /// in which it receives this property's value.
    pub sides: [(&'static str, Direction); 2],
}

/// How one logical property is rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rewrite {
    /// Insert these properties, with the same value, before the original.
    Expand(&'static [&'static str]),
    /// Guard a copy of the rule setting both physical sides to the value.
    Mirror([&'static str; 2]),
    /// Guard a copy of the rule that picks a side through synthetic variables.
    Fallback(Fallback),
    /// Record the enclosing selector in the direction registry.
    Direction,
}

const fn fallback(
    opposite: &'static str,
    first: Direction,
    first_side: &'static str,
    second_side: &'static str,
) -> Rewrite {
    let second = match first {
        Direction::Ltr => Direction::Rtl,
        Direction::Rtl => Direction::Ltr,
    };
    Rewrite::Fallback(Fallback {
        opposite,
        sides: [(first_side, first), (second_side, second)],
    })
}

impl Rewrite {
    /// Look up the rule for an exact property name.
    pub fn for_property(property: &str) -> Option<Self> {
        use Direction::{Ltr, Rtl};
        use Rewrite::{Expand, Mirror};

        let rewrite = match property {
            "margin-inline" => Expand(&["margin-inline-start", "margin-inline-end"]),
            "margin-block" => Expand(&["margin-top", "margin-bottom"]),
            "margin-inline-start" => Expand(&["-webkit-margin-start"]),
            "margin-inline-end" => Expand(&["-webkit-margin-end"]),
            "margin-block-start" => Expand(&["margin-top"]),
            "margin-block-end" => Expand(&["margin-bottom"]),

            "padding-inline" => Expand(&["padding-inline-start", "padding-inline-end"]),
            "padding-block" => Expand(&["padding-top", "padding-bottom"]),
            "padding-inline-start" => Expand(&["-webkit-padding-start"]),
            "padding-inline-end" => Expand(&["-webkit-padding-end"]),
            "padding-block-start" => Expand(&["padding-top"]),
            "padding-block-end" => Expand(&["padding-bottom"]),

            "border-inline" => Expand(&["border-inline-start", "border-inline-end"]),
            "border-block" => Expand(&["border-top", "border-bottom"]),
            "border-inline-start" => Expand(&["-webkit-border-start"]),
            "border-inline-end" => Expand(&["-webkit-border-end"]),
            "border-block-start" => Expand(&["border-top"]),
            "border-block-end" => Expand(&["border-bottom"]),

            "border-inline-width" => {
                Expand(&["border-inline-start-width", "border-inline-end-width"])
            }
            "border-inline-style" => {
                Expand(&["border-inline-start-style", "border-inline-end-style"])
            }
            "border-inline-color" => {
                Expand(&["border-inline-start-color", "border-inline-end-color"])
            }
            "border-inline-start-width" => Expand(&["-webkit-border-start-width"]),
            "border-inline-start-style" => Expand(&["-webkit-border-start-style"]),
            "border-inline-start-color" => Expand(&["-webkit-border-start-color"]),
            "border-inline-end-width" => Expand(&["-webkit-border-end-width"]),
            "border-inline-end-style" => Expand(&["-webkit-border-end-style"]),
            "border-inline-end-color" => Expand(&["-webkit-border-end-color"]),

            "border-block-width" => Expand(&["border-top-width", "border-bottom-width"]),
            "border-block-style" => Expand(&["border-top-style", "border-bottom-style"]),
            "border-block-color" => Expand(&["border-top-color", "border-bottom-color"]),
            "border-block-start-width" => Expand(&["border-top-width"]),
            "border-block-start-style" => Expand(&["border-top-style"]),
            "border-block-start-color" => Expand(&["border-top-color"]),
            "border-block-end-width" => Expand(&["border-bottom-width"]),
            "border-block-end-style" => Expand(&["border-bottom-style"]),
            "border-block-end-color" => Expand(&["border-bottom-color"]),

            "inset-inline" => Mirror(["left", "right"]),
            "inset-block" => Mirror(["top", "bottom"]),

            "inset-inline-start" => fallback("inset-inline-end", Ltr, "left", "right"),
            "inset-inline-end" => fallback("inset-inline-start", Rtl, "left", "right"),
            "border-start-start-radius" => fallback(
                "border-start-end-radius",
                Ltr,
                "border-top-left-radius",
                "border-top-right-radius",
            ),
            "border-start-end-radius" => fallback(
                "border-start-start-radius",
                Rtl,
                "border-top-left-radius",
                "border-top-right-radius",
            ),
            "border-end-start-radius" => fallback(
                "border-end-end-radius",
                Ltr,
                "border-bottom-left-radius",
                "border-bottom-right-radius",
            ),
            "border-end-end-radius" => fallback(
                "border-end-start-radius",
                Rtl,
                "border-bottom-left-radius",
                "border-bottom-right-radius",
            ),

            "direction" => Rewrite::Direction,
            _ => return None,
        };
        Some(rewrite)
    }

    /// Apply this rule to the declaration at `decl`.
    pub fn apply(self, sheet: &mut Stylesheet, decl: NodeId, ctx: &mut PolyfillContext) {
        let Some(original) = sheet.declaration(decl).cloned() else {
            debug_assert!(false, "rewrite applied to a non-declaration node");
            return;
        };

        if let Rewrite::Expand(targets) = self {
            expand(sheet, decl, &original, targets);
            return;
        }

        // Everything else needs the selector of the enclosing style rule.
        let Some(rule) = sheet.enclosing_rule(decl) else {
            log::debug!(
                "skipping `{}`: not directly inside a style rule",
                original.property
            );
            return;
        };

        match self {
            Rewrite::Expand(_) => {}
            Rewrite::Mirror(sides) => {
                let decls = sides.map(|side| physical(side, original.value.clone(), &original));
                guard(sheet, rule, &original.property, decls);
            }
            Rewrite::Fallback(fallback) => {
                let decls = fallback_declarations(&original, fallback, ctx);
                guard(sheet, rule, &original.property, decls);
            }
            Rewrite::Direction => {
                if let Some(selector) = sheet.selector(rule) {
                    ctx.directions.record(selector, &original.value);
                }
            }
        }
    }
}

fn physical(property: &str, value: String, original: &Declaration) -> Declaration {
    Declaration::new(property, value).with_important(original.important)
}

/// Insert `targets` before the original declaration, which stays last.
fn expand(sheet: &mut Stylesheet, decl: NodeId, original: &Declaration, targets: &[&str]) {
    log::debug!("expanding `{}` into {targets:?}", original.property);

    let mut nodes: Vec<NodeId> = targets
        .iter()
        .map(|target| {
            let new = physical(target, original.value.clone(), original);
            sheet.create_declaration(new)
        })
        .collect();
    nodes.push(decl);
    sheet.replace_with(decl, &nodes);
}

/// Build the guarded declarations for a direction-dependent property and
/// record its value in the ledger.
fn fallback_declarations(
    original: &Declaration,
    fallback: Fallback,
    ctx: &mut PolyfillContext,
) -> [Declaration; 3] {
    let name = ctx.ledger.register_fallback(&original.value);
    ctx.ledger.register_reset(&original.property);
    log::debug!("`{}` falls back through {name}", original.property);

    let opposite = canonical_name(fallback.opposite);
    let side = |(property, direction): (&str, Direction)| {
        let value = format!("var({name}{}, var({opposite}))", direction.suffix());
        physical(property, value, original)
    };

    [
        physical(
            &canonical_name(&original.property),
            original.value.clone(),
            original,
        ),
        side(fallback.sides[0]),
        side(fallback.sides[1]),
    ]
}

/// Put `@supports not (<property>: 0) { <selector> { decls } }` in front of
/// `rule`. The rule itself is left where it was.
fn guard<const N: usize>(
    sheet: &mut Stylesheet,
    rule: NodeId,
    property: &str,
    decls: [Declaration; N],
) {
    let Some(selector) = sheet.selector(rule).map(str::to_string) else {
        return;
    };

    let supports = sheet.create_at_rule("supports", format!("not ({property}: 0)"));
    let copy = sheet.create_rule_with(selector, decls);
    sheet.append(supports, copy);
    sheet.replace_with(rule, &[supports, rule]);
}
