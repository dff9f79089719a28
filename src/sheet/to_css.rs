//! ToCss implementation for the stylesheet tree.
//!
//! Output is one construct per line with two-space indentation per nesting
//! level, in the same layout a hand-formatted stylesheet would use.

use super::{Declaration, NodeData, NodeId, Stylesheet, ToCss};

const INDENT: &str = "  ";

impl ToCss for Declaration {
    fn to_css(&self, buf: &mut String) {
        buf.push_str(&self.property);
        buf.push(':');
        if !self.value.is_empty() {
            buf.push(' ');
            buf.push_str(&self.value);
        }
        if self.important {
            buf.push_str(" !important");
        }
        buf.push(';');
    }
}

impl ToCss for Stylesheet {
    fn to_css(&self, buf: &mut String) {
        for child in self.children(self.root()) {
            write_node(self, child, 0, buf);
        }
    }
}

fn write_node(sheet: &Stylesheet, id: NodeId, depth: usize, buf: &mut String) {
    let Some(node) = sheet.get(id) else {
        return;
    };
    for _ in 0..depth {
        buf.push_str(INDENT);
    }

    match &node.data {
        NodeData::Root => {}
        NodeData::Declaration(decl) => {
            decl.to_css(buf);
            buf.push('\n');
        }
        NodeData::Rule { selector } => {
            buf.push_str(selector);
            write_block(sheet, id, depth, buf);
        }
        NodeData::AtRule {
            name,
            params,
            has_block,
        } => {
            buf.push('@');
            buf.push_str(name);
            if !params.is_empty() {
                buf.push(' ');
                buf.push_str(params);
            }
            if *has_block {
                write_block(sheet, id, depth, buf);
            } else {
                buf.push_str(";\n");
            }
        }
    }
}

fn write_block(sheet: &Stylesheet, id: NodeId, depth: usize, buf: &mut String) {
    let mut children = sheet.children(id).peekable();
    if children.peek().is_none() {
        buf.push_str(" {}\n");
        return;
    }

    buf.push_str(" {\n");
    for child in children {
        write_node(sheet, child, depth + 1, buf);
    }
    for _ in 0..depth {
        buf.push_str(INDENT);
    }
    buf.push_str("}\n");
}
