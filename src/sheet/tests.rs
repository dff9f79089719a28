//! Stylesheet tree, parser and serializer tests.

use super::{Declaration, NodeData, NodeId, Stylesheet, ToCss};

fn rule_children(sheet: &Stylesheet, rule: NodeId) -> Vec<String> {
    sheet
        .children(rule)
        .filter_map(|id| sheet.declaration(id))
        .map(|d| d.property.clone())
        .collect()
}

#[test]
fn test_parse_simple_rule() {
    let sheet = Stylesheet::parse(".foo { margin-inline: 10px; color: red }");

    let rules: Vec<_> = sheet.children(sheet.root()).collect();
    assert_eq!(rules.len(), 1);
    assert_eq!(sheet.selector(rules[0]), Some(".foo"));
    assert_eq!(rule_children(&sheet, rules[0]), vec!["margin-inline", "color"]);

    let first = sheet.children(rules[0]).next().unwrap();
    assert_eq!(
        sheet.declaration(first),
        Some(&Declaration::new("margin-inline", "10px"))
    );
}

#[test]
fn test_values_are_verbatim() {
    let sheet = Stylesheet::parse(
        ".a { border-inline: 10px   solid rgb(1, 2, 3); --Custom:  a  b  ; grid-area: 1 / 2 }",
    );
    let values: Vec<_> = sheet
        .declarations()
        .iter()
        .map(|d| (d.property.as_str(), d.value.as_str()))
        .collect();

    assert_eq!(
        values,
        vec![
            ("border-inline", "10px   solid rgb(1, 2, 3)"),
            ("--Custom", "a  b"),
            ("grid-area", "1 / 2"),
        ]
    );
}

#[test]
fn test_important_flag() {
    let sheet = Stylesheet::parse(".a { margin-inline: 4px !important; }");
    let decls = sheet.declarations();

    assert_eq!(decls[0].value, "4px");
    assert!(decls[0].important);
    assert_eq!(
        sheet.to_css_string(),
        ".a {\n  margin-inline: 4px !important;\n}\n"
    );
}

#[test]
fn test_selector_list_kept_as_written() {
    let sheet = Stylesheet::parse("h1,\n  h2 > .x { color: red }");
    let rule = sheet.children(sheet.root()).next().unwrap();

    assert_eq!(sheet.selector(rule), Some("h1,\n  h2 > .x"));
}

#[test]
fn test_parse_at_rules() {
    // cssparser drops a leading @charset; output is always UTF-8
    let css = r#"
        @charset "utf-8";
        @import url("base.css");
        @media (min-width: 10px) {
            .a { padding-block: 1px; }
        }
        @font-face { font-family: X; src: url(x.woff); }
    "#;
    let sheet = Stylesheet::parse(css);
    let top: Vec<_> = sheet.children(sheet.root()).collect();

    assert_eq!(top.len(), 3);
    assert!(sheet.is_statement(top[0], &["import"]));
    assert!(matches!(
        &sheet.get(top[1]).unwrap().data,
        NodeData::AtRule { name, params, has_block: true } if name == "media" && params == "(min-width: 10px)"
    ));

    let nested = sheet.children(top[1]).next().unwrap();
    assert_eq!(sheet.selector(nested), Some(".a"));
    assert_eq!(sheet.enclosing_rule(sheet.children(nested).next().unwrap()), Some(nested));

    let font_decl = sheet.children(top[2]).next().unwrap();
    assert_eq!(sheet.enclosing_rule(font_decl), None);
}

#[test]
fn test_nested_rule_in_body() {
    let sheet = Stylesheet::parse(".a { color: red; a:hover { color: blue; } }");
    let outer = sheet.children(sheet.root()).next().unwrap();
    let kids: Vec<_> = sheet.children(outer).collect();

    assert_eq!(kids.len(), 2);
    assert!(sheet.declaration(kids[0]).is_some());
    assert_eq!(sheet.selector(kids[1]), Some("a:hover"));
}

#[test]
fn test_invalid_rules_skipped() {
    let sheet = Stylesheet::parse("{ color: red } .ok { color: blue }");
    let top: Vec<_> = sheet.children(sheet.root()).collect();

    assert_eq!(top.len(), 1);
    assert_eq!(sheet.selector(top[0]), Some(".ok"));
}

#[test]
fn test_insert_before_and_prepend() {
    let mut sheet = Stylesheet::new();
    let root = sheet.root();
    let b = sheet.create_rule(".b");
    sheet.append(root, b);
    let a = sheet.create_rule(".a");
    sheet.insert_before(b, a);
    let first = sheet.create_rule(".first");
    sheet.prepend(root, first);

    let selectors: Vec<_> = sheet
        .children(root)
        .filter_map(|id| sheet.selector(id))
        .collect();
    assert_eq!(selectors, vec![".first", ".a", ".b"]);
}

#[test]
fn test_replace_with_keeps_target() {
    let mut sheet = Stylesheet::parse(".a { x: 1 } .b { y: 2 } .c { z: 3 }");
    let root = sheet.root();
    let b = sheet.children(root).nth(1).unwrap();

    let guard = sheet.create_at_rule("supports", "not (y: 0)");
    let after = sheet.create_rule(".after");
    sheet.replace_with(b, &[guard, b, after]);

    let kinds: Vec<String> = sheet
        .children(root)
        .map(|id| match &sheet.get(id).unwrap().data {
            NodeData::Rule { selector } => selector.clone(),
            NodeData::AtRule { name, .. } => format!("@{name}"),
            _ => String::new(),
        })
        .collect();
    assert_eq!(kinds, vec![".a", "@supports", ".b", ".after", ".c"]);

    // the replaced rule keeps its children
    assert_eq!(rule_children(&sheet, b), vec!["y"]);
}

#[test]
fn test_replace_with_drops_target() {
    let mut sheet = Stylesheet::parse(".a { x: 1 } .b { y: 2 }");
    let root = sheet.root();
    let a = sheet.children(root).next().unwrap();
    let z = sheet.create_rule(".z");
    sheet.replace_with(a, &[z]);

    let selectors: Vec<_> = sheet
        .children(root)
        .filter_map(|id| sheet.selector(id))
        .collect();
    assert_eq!(selectors, vec![".z", ".b"]);
    assert!(sheet.parent(a).is_none());
}

#[test]
fn test_detach_last_child() {
    let mut sheet = Stylesheet::parse(".a { x: 1; y: 2 }");
    let rule = sheet.children(sheet.root()).next().unwrap();
    let y = sheet.children(rule).nth(1).unwrap();
    sheet.detach(y);

    assert_eq!(rule_children(&sheet, rule), vec!["x"]);
    assert_eq!(sheet.get(rule).unwrap().last_child, sheet.get(rule).unwrap().first_child);
}

#[test]
fn test_serialize_layout() {
    let css = "@import url(a.css);\n@supports not (inset-inline: 0) { .foo { left: 1px } }\n* {}\n";
    let sheet = Stylesheet::parse(css);

    assert_eq!(
        sheet.to_css_string(),
        "@import url(a.css);\n\
         @supports not (inset-inline: 0) {\n  .foo {\n    left: 1px;\n  }\n}\n\
         * {}\n"
    );
}

#[test]
fn test_empty_stylesheet() {
    let sheet = Stylesheet::parse("  /* nothing */ ");
    assert_eq!(sheet.children(sheet.root()).count(), 0);
    assert_eq!(sheet.node_count(), 1);
    assert_eq!(sheet.to_css_string(), "");
}

#[test]
fn test_value_whitespace_trimmed() {
    let sheet = Stylesheet::parse(".a { color:red; margin-block :  1px  ; --gap:\t2px }");
    let values: Vec<_> = sheet.declarations().iter().map(|d| d.value.clone()).collect();

    assert_eq!(values, vec!["red", "1px", "2px"]);
    assert_eq!(
        sheet.to_css_string(),
        ".a {\n  color: red;\n  margin-block: 1px;\n  --gap: 2px;\n}\n"
    );
}

#[test]
fn test_comments_dropped_from_values() {
    let sheet = Stylesheet::parse(
        ".a /* card */ { margin-inline: 1px /* c */; padding: /* x */ 1px/**/2px; \
         content: \"/* kept */\"; inset-inline-start: 3px /* y */ !important }",
    );
    let rule = sheet.children(sheet.root()).next().unwrap();
    assert_eq!(sheet.selector(rule), Some(".a"));

    let decls = sheet.declarations();
    assert_eq!(decls[0].value, "1px");
    assert_eq!(decls[1].value, "1px 2px");
    assert_eq!(decls[2].value, "\"/* kept */\"");
    assert_eq!(decls[3].value, "3px");
    assert!(decls[3].important);
}
