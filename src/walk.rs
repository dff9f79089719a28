//! Tree traversal for stylesheet plugins.
//!
//! A [`Plugin`] listens for declarations by property name and gets one
//! final callback after the whole tree has been processed. Declarations a
//! plugin inserts while the walk is running are visited too, so rewrites
//! chain: a rule emitting `margin-inline-start` triggers the
//! `margin-inline-start` rule in turn.

use crate::sheet::{NodeId, Stylesheet};

/// A stylesheet transformation driven by [`process`].
pub trait Plugin {
    /// Name used in log output.
    fn name(&self) -> &'static str;

    /// Returns true if the plugin wants declarations of `property`.
    fn wants(&self, property: &str) -> bool;

    /// Called once per wanted declaration, in document order.
    fn declaration(&mut self, sheet: &mut Stylesheet, decl: NodeId);

    /// Called exactly once, after every declaration has been visited.
    fn once_exit(&mut self, sheet: &mut Stylesheet);
}

/// Run `plugin` over `sheet`.
///
/// The tree is walked depth-first in document order, repeatedly, until a
/// pass finds no declaration it has not offered yet. Each declaration node
/// is offered at most once.
pub fn process<P: Plugin + ?Sized>(sheet: &mut Stylesheet, plugin: &mut P) {
    let mut visited = Vec::new();
    let mut passes = 0usize;

    loop {
        passes += 1;
        let mut fresh = 0usize;
        let root = sheet.root();
        walk_children(sheet, root, plugin, &mut visited, &mut fresh);
        if fresh == 0 {
            break;
        }
    }

    log::debug!("{}: walked stylesheet in {passes} passes", plugin.name());
    plugin.once_exit(sheet);
}

fn walk_children<P: Plugin + ?Sized>(
    sheet: &mut Stylesheet,
    parent: NodeId,
    plugin: &mut P,
    visited: &mut Vec<bool>,
    fresh: &mut usize,
) {
    let mut child = sheet.get(parent).map(|n| n.first_child).unwrap_or(NodeId::NONE);

    while child.is_some() {
        let next_before = sheet.get(child).map(|n| n.next_sibling).unwrap_or(NodeId::NONE);

        if sheet.declaration(child).is_some() {
            if mark_visited(visited, child, sheet.node_count()) {
                *fresh += 1;
                let wanted = sheet
                    .declaration(child)
                    .is_some_and(|d| plugin.wants(&d.property));
                if wanted {
                    plugin.declaration(sheet, child);
                }
            }
        } else {
            walk_children(sheet, child, plugin, visited, fresh);
        }

        // Nodes inserted before `child` are picked up by the next pass.
        child = match sheet.get(child) {
            Some(node) if node.parent.is_some() => node.next_sibling,
            _ => next_before,
        };
    }
}

/// Mark `id` visited; returns false if it already was.
fn mark_visited(visited: &mut Vec<bool>, id: NodeId, len: usize) -> bool {
    let index = id.0 as usize;
    if visited.len() < len {
        visited.resize(len, false);
    }
    !std::mem::replace(&mut visited[index], true)
}
