//! Lenient stylesheet parsing into the arena tree.
//!
//! Selectors, at-rule preludes and declaration values are stored as the
//! verbatim (trimmed) source text minus comments. Nothing is validated;
//! constructs that cssparser cannot make sense of are skipped.

use std::borrow::Cow;

use cssparser::{
    AtRuleParser, CowRcStr, DeclarationParser, ParseError, Parser, ParserInput, ParserState,
    QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser, StyleSheetParser, Token,
};

use super::{Declaration, NodeId, Stylesheet};

impl Stylesheet {
    /// Parse a CSS stylesheet from a string.
    pub fn parse(css: &str) -> Self {
        let mut sheet = Stylesheet::new();
        let root = sheet.root();

        let mut input = ParserInput::new(css);
        let mut parser = Parser::new(&mut input);
        let mut rule_parser = TreeBuilder {
            sheet: &mut sheet,
            parent: root,
        };

        for result in StyleSheetParser::new(&mut parser, &mut rule_parser) {
            if let Err((err, slice)) = result {
                log::debug!("skipping invalid rule {slice:?}: {:?}", err.kind);
            }
        }

        sheet
    }
}

/// Appends everything it parses under `parent`.
///
/// The same builder handles the top level, at-rule blocks and rule bodies,
/// so nesting works to any depth.
struct TreeBuilder<'a> {
    sheet: &'a mut Stylesheet,
    parent: NodeId,
}

impl TreeBuilder<'_> {
    fn parse_body<'i>(&mut self, parent: NodeId, input: &mut Parser<'i, '_>) {
        let mut nested = TreeBuilder {
            sheet: &mut *self.sheet,
            parent,
        };
        for result in RuleBodyParser::new(input, &mut nested) {
            if let Err((err, slice)) = result {
                log::debug!("skipping invalid block item {slice:?}: {:?}", err.kind);
            }
        }
    }
}

/// Consume the rest of `input` and return it as trimmed source text.
fn rest_of_input<'i>(input: &mut Parser<'i, '_>) -> String {
    let start = input.position();
    while input.next_including_whitespace_and_comments().is_ok() {}
    strip_comments(input.slice_from(start)).trim().to_string()
}

/// Remove `/* ... */` comments outside of strings.
///
/// A comment between two tokens separates them, so it becomes a single space
/// when it is not already next to whitespace.
fn strip_comments(raw: &str) -> Cow<'_, str> {
    if !raw.contains("/*") {
        return Cow::Borrowed(raw);
    }

    let bytes = raw.as_bytes();
    let mut out = String::with_capacity(raw.len());
    let mut quote: Option<u8> = None;
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        match quote {
            Some(_) if b == b'\\' => i += 1,
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None if b == b'"' || b == b'\'' => quote = Some(b),
            None if b == b'/' && bytes.get(i + 1) == Some(&b'*') => {
                out.push_str(&raw[copied..i]);
                let end = raw[i + 2..]
                    .find("*/")
                    .map_or(raw.len(), |n| i + 2 + n + 2);

                let before = out.chars().last().is_some_and(|c| !c.is_whitespace());
                let after = raw[end..].chars().next().is_some_and(|c| !c.is_whitespace());
                if before && after {
                    out.push(' ');
                }
                copied = end;
                i = end;
                continue;
            }
            None => {}
        }
        i += 1;
    }

    out.push_str(&raw[copied..]);
    Cow::Owned(out)
}

/// Split a trailing `!important` off a raw declaration value. Both results
/// are trimmed.
fn split_important(raw: &str) -> (&str, bool) {
    let trimmed = raw.trim();
    let lower = trimmed.to_ascii_lowercase();
    if let Some(head) = lower.strip_suffix("important") {
        let head = head.trim_end();
        if let Some(value) = head.strip_suffix('!') {
            return (trimmed[..value.len()].trim(), true);
        }
    }
    (trimmed, false)
}

impl<'i> QualifiedRuleParser<'i> for TreeBuilder<'_> {
    type Prelude = String;
    type QualifiedRule = ();
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        let selector = rest_of_input(input);
        if selector.is_empty() {
            return Err(input.new_custom_error(()));
        }
        Ok(selector)
    }

    fn parse_block<'t>(
        &mut self,
        prelude: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::QualifiedRule, ParseError<'i, Self::Error>> {
        let rule = self.sheet.create_rule(prelude);
        self.sheet.append(self.parent, rule);
        self.parse_body(rule, input);
        Ok(())
    }
}

/// Prelude for an at-rule: lowercased name and verbatim params.
struct AtPrelude {
    name: String,
    params: String,
}

impl<'i> AtRuleParser<'i> for TreeBuilder<'_> {
    type Prelude = AtPrelude;
    type AtRule = ();
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        Ok(AtPrelude {
            name: name.to_ascii_lowercase(),
            params: rest_of_input(input),
        })
    }

    fn rule_without_block(
        &mut self,
        prelude: Self::Prelude,
        _start: &ParserState,
    ) -> Result<Self::AtRule, ()> {
        let node = self.sheet.create_statement(prelude.name, prelude.params);
        self.sheet.append(self.parent, node);
        Ok(())
    }

    fn parse_block<'t>(
        &mut self,
        prelude: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::AtRule, ParseError<'i, Self::Error>> {
        let node = self.sheet.create_at_rule(prelude.name, prelude.params);
        self.sheet.append(self.parent, node);
        self.parse_body(node, input);
        Ok(())
    }
}

impl<'i> DeclarationParser<'i> for TreeBuilder<'_> {
    type Declaration = ();
    type Error = ();

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
        _start: &ParserState,
    ) -> Result<Self::Declaration, ParseError<'i, Self::Error>> {
        let custom = name.starts_with("--");
        let start = input.position();
        while let Ok(token) = input.next_including_whitespace_and_comments() {
            // `a:hover { ... }` inside a rule body is a nested rule, not a
            // declaration named `a`. Bail so the body parser retries it as one.
            if matches!(token, Token::CurlyBracketBlock) && !custom {
                return Err(input.new_custom_error(()));
            }
        }
        let raw = strip_comments(input.slice_from(start));
        let (value, important) = split_important(&raw);

        let property = if custom {
            name.to_string()
        } else {
            name.to_ascii_lowercase()
        };
        let decl = Declaration::new(property, value).with_important(important);
        let node = self.sheet.create_declaration(decl);
        self.sheet.append(self.parent, node);
        Ok(())
    }
}

impl<'i> RuleBodyItemParser<'i, (), ()> for TreeBuilder<'_> {
    fn parse_declarations(&self) -> bool {
        true
    }
    fn parse_qualified(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{split_important, strip_comments};

    #[test]
    fn test_split_important() {
        assert_eq!(split_important("10px"), ("10px", false));
        assert_eq!(split_important("10px !important"), ("10px", true));
        assert_eq!(split_important("10px!IMPORTANT  "), ("10px", true));
        assert_eq!(split_important("10px ! important"), ("10px", true));
        assert_eq!(split_important("\"!important\""), ("\"!important\"", false));
        assert_eq!(split_important("not-important"), ("not-important", false));
        assert_eq!(split_important(" 10px"), ("10px", false));
        assert_eq!(split_important("\t10px !important"), ("10px", true));
    }

    #[test]
    fn test_strip_comments() {
        assert_eq!(strip_comments("1px"), "1px");
        assert_eq!(strip_comments("1px /* c */"), "1px ");
        assert_eq!(strip_comments("1px/**/2px"), "1px 2px");
        assert_eq!(strip_comments("/* a */ 1px"), " 1px");
        assert_eq!(strip_comments("'/* s */' /* c */"), "'/* s */' ");
        assert_eq!(strip_comments("\"a\\\"/*\" x"), "\"a\\\"/*\" x");
        assert_eq!(strip_comments("1px /* open"), "1px ");
    }
}
