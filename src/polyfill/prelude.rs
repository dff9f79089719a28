//! The three global rules every polyfilled stylesheet starts with.

use crate::sheet::{Declaration, NodeId, Stylesheet};

use super::PolyfillContext;
use super::direction::Direction;

/// Statement at-rules that must stay ahead of every style rule.
const LEADING_STATEMENTS: &[&str] = &["charset", "import", "layer"];

/// Insert the reset, LTR and RTL rules at the top of `sheet`.
///
/// The rules go after any leading `@charset`, `@import` or `@layer`
/// statements, since those are invalid once a style rule precedes them.
pub fn emit(sheet: &mut Stylesheet, ctx: &PolyfillContext) {
    let reset = sheet.create_rule_with("*", reset_declarations(ctx));
    let ltr = sheet.create_rule_with(
        ctx.directions.ltr_selectors().join(", "),
        direction_declarations(ctx, Direction::Ltr),
    );
    let rtl = sheet.create_rule_with(
        ctx.directions.rtl_selectors().join(", "),
        direction_declarations(ctx, Direction::Rtl),
    );

    log::debug!(
        "prelude: {} resets, {} fallback variables",
        ctx.ledger.resets().len(),
        ctx.ledger.entries().len()
    );

    let anchor = first_style_node(sheet);
    for rule in [reset, ltr, rtl] {
        if anchor.is_some() {
            sheet.insert_before(anchor, rule);
        } else {
            let root = sheet.root();
            sheet.append(root, rule);
        }
    }
}

/// First top-level node that is not a leading statement at-rule.
fn first_style_node(sheet: &Stylesheet) -> NodeId {
    sheet
        .children(sheet.root())
        .find(|&id| !sheet.is_statement(id, LEADING_STATEMENTS))
        .unwrap_or(NodeId::NONE)
}

fn reset_declarations(ctx: &PolyfillContext) -> Vec<Declaration> {
    let mut seen: Vec<&str> = Vec::new();
    let mut decls = Vec::new();
    for property in ctx.ledger.resets() {
        if seen.contains(&property.as_str()) {
            continue;
        }
        seen.push(property);
        decls.push(Declaration::new(property.as_str(), "initial"));
    }
    decls
}

fn direction_declarations(ctx: &PolyfillContext, direction: Direction) -> Vec<Declaration> {
    let (is_ltr, is_rtl, start, end, unit) = match direction {
        Direction::Ltr => ("1", "0", "left", "right", "1"),
        Direction::Rtl => ("0", "1", "right", "left", "-1"),
    };
    let mut decls = vec![
        Declaration::new("--is-ltr", is_ltr),
        Declaration::new("--is-rtl", is_rtl),
        Declaration::new("--start", start),
        Declaration::new("--end", end),
        Declaration::new("--inline-unit", unit),
    ];

    let entries = ctx.ledger.entries();
    // Every variable of the other direction is nulled, so only the side that
    // matches the element's direction resolves.
    for suffix_direction in [Direction::Ltr, Direction::Rtl] {
        for entry in entries {
            let name = format!("{}{}", entry.name, suffix_direction.suffix());
            let value = if suffix_direction == direction {
                entry.value.as_str()
            } else {
                "initial"
            };
            decls.push(Declaration::new(name, value));
        }
    }
    decls
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;
    use crate::sheet::ToCss;

    fn properties(sheet: &Stylesheet, rule: NodeId) -> Vec<String> {
        sheet
            .children(rule)
            .filter_map(|id| sheet.declaration(id))
            .map(|d| format!("{}: {}", d.property, d.value))
            .collect()
    }

    #[test]
    fn test_empty_context() {
        let mut sheet = Stylesheet::new();
        emit(&mut sheet, &PolyfillContext::new(&Options::default()));

        assert_eq!(
            sheet.to_css_string(),
            "* {}\n\
             [dir=\"ltr\"], html:not([dir=\"rtl\"]) {\n  --is-ltr: 1;\n  --is-rtl: 0;\n  --start: left;\n  --end: right;\n  --inline-unit: 1;\n}\n\
             [dir=\"rtl\"] {\n  --is-ltr: 0;\n  --is-rtl: 1;\n  --start: right;\n  --end: left;\n  --inline-unit: -1;\n}\n"
        );
    }

    #[test]
    fn test_entries_split_by_direction() {
        let mut ctx = PolyfillContext::new(&Options::default().with_variable_prefix("v"));
        ctx.ledger.register_fallback("1px");
        ctx.ledger.register_fallback("2px");
        ctx.ledger.register_reset("inset-inline-start");
        ctx.ledger.register_reset("inset-inline-start");

        let mut sheet = Stylesheet::new();
        emit(&mut sheet, &ctx);
        let rules: Vec<_> = sheet.children(sheet.root()).collect();

        assert_eq!(properties(&sheet, rules[0]), vec!["--x-inset-inline-start: initial"]);
        assert_eq!(
            properties(&sheet, rules[1])[5..],
            ["--v-0-ltr: 1px", "--v-1-ltr: 2px", "--v-0-rtl: initial", "--v-1-rtl: initial"]
        );
        assert_eq!(
            properties(&sheet, rules[2])[5..],
            ["--v-0-ltr: initial", "--v-1-ltr: initial", "--v-0-rtl: 1px", "--v-1-rtl: 2px"]
        );
    }

    #[test]
    fn test_prelude_precedes_author_rules() {
        let mut sheet = Stylesheet::parse("@import url(a.css); @layer base; .a { color: red }");
        emit(&mut sheet, &PolyfillContext::new(&Options::default()));

        let top: Vec<_> = sheet.children(sheet.root()).collect();
        assert_eq!(top.len(), 6);
        assert!(sheet.is_statement(top[0], &["import"]));
        assert!(sheet.is_statement(top[1], &["layer"]));
        assert_eq!(sheet.selector(top[2]), Some("*"));
        assert_eq!(sheet.selector(top[4]), Some("[dir=\"rtl\"]"));
        assert_eq!(sheet.selector(top[5]), Some(".a"));
    }

    #[test]
    fn test_configured_selectors() {
        let options = Options::default()
            .with_ltr_selector(".force-ltr")
            .with_rtl_selector(":lang(ar)");
        let mut sheet = Stylesheet::new();
        emit(&mut sheet, &PolyfillContext::new(&options));

        let top: Vec<_> = sheet.children(sheet.root()).collect();
        assert_eq!(
            sheet.selector(top[1]),
            Some("[dir=\"ltr\"], html:not([dir=\"rtl\"]), .force-ltr")
        );
        assert_eq!(sheet.selector(top[2]), Some("[dir=\"rtl\"], :lang(ar)"));
    }
}
