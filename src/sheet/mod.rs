//! Arena-based stylesheet tree.
//!
//! A stylesheet is stored as a flat vector of nodes linked by indices
//! (parent, first/last child, previous/next sibling). Rewrites mutate the
//! tree in place through explicit edit operations; detached nodes simply
//! stay in the arena unreferenced, so a [`NodeId`] never dangles.

mod parse;
mod to_css;

#[cfg(test)]
mod tests;

/// Serialization back to CSS text.
pub trait ToCss {
    /// Write this value as CSS to the buffer.
    fn to_css(&self, buf: &mut String);

    /// Convert to a CSS string (convenience method).
    fn to_css_string(&self) -> String {
        let mut buf = String::new();
        self.to_css(&mut buf);
        buf
    }
}

/// Unique identifier for a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value for no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check if this is a valid node ID.
    pub fn is_some(&self) -> bool {
        self.0 != u32::MAX
    }

    /// Check if this is the sentinel value.
    pub fn is_none(&self) -> bool {
        self.0 == u32::MAX
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    /// Verbatim source text of the value, without `!important`.
    pub value: String,
    pub important: bool,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            important: false,
        }
    }

    /// Builder: mark the declaration `!important`.
    pub fn with_important(mut self, important: bool) -> Self {
        self.important = important;
        self
    }
}

/// Node type in the stylesheet tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    /// Stylesheet root.
    Root,
    /// Style rule. The selector list is kept as written.
    Rule { selector: String },
    /// At-rule such as `@media` or `@import`.
    AtRule {
        name: String,
        params: String,
        /// `false` for statement at-rules terminated by `;`.
        has_block: bool,
    },
    Declaration(Declaration),
}

/// A node in the stylesheet tree.
#[derive(Debug, Clone)]
pub struct Node {
    pub data: NodeData,
    pub parent: NodeId,
    pub first_child: NodeId,
    pub last_child: NodeId,
    pub prev_sibling: NodeId,
    pub next_sibling: NodeId,
}

impl Node {
    fn new(data: NodeData) -> Self {
        Self {
            data,
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
        }
    }
}

/// A mutable stylesheet tree.
#[derive(Debug, Clone)]
pub struct Stylesheet {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Stylesheet {
    /// Create an empty stylesheet containing only the root node.
    pub fn new() -> Self {
        let mut sheet = Self {
            nodes: Vec::new(),
            root: NodeId::NONE,
        };
        sheet.root = sheet.alloc(Node::new(NodeData::Root));
        sheet
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Get the root ID.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        if id.is_none() {
            return None;
        }
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        if id.is_none() {
            return None;
        }
        self.nodes.get_mut(id.index())
    }

    /// Number of allocated nodes, detached ones included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Create a detached style rule.
    pub fn create_rule(&mut self, selector: impl Into<String>) -> NodeId {
        self.alloc(Node::new(NodeData::Rule {
            selector: selector.into(),
        }))
    }

    /// Create a detached at-rule with a block.
    pub fn create_at_rule(&mut self, name: impl Into<String>, params: impl Into<String>) -> NodeId {
        self.alloc(Node::new(NodeData::AtRule {
            name: name.into(),
            params: params.into(),
            has_block: true,
        }))
    }

    /// Create a detached statement at-rule (`@import ...;`).
    pub fn create_statement(&mut self, name: impl Into<String>, params: impl Into<String>) -> NodeId {
        self.alloc(Node::new(NodeData::AtRule {
            name: name.into(),
            params: params.into(),
            has_block: false,
        }))
    }

    /// Create a detached declaration.
    pub fn create_declaration(&mut self, decl: Declaration) -> NodeId {
        self.alloc(Node::new(NodeData::Declaration(decl)))
    }

    /// Create a style rule holding `decls` in order. The rule is detached.
    pub fn create_rule_with(
        &mut self,
        selector: impl Into<String>,
        decls: impl IntoIterator<Item = Declaration>,
    ) -> NodeId {
        let rule = self.create_rule(selector);
        for decl in decls {
            let id = self.create_declaration(decl);
            self.append(rule, id);
        }
        rule
    }

    /// Append a child to a parent node. The child must be detached.
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        debug_assert!(self.get(child).is_some_and(|n| n.parent.is_none()));
        let last_child = self
            .get(parent)
            .map(|n| n.last_child)
            .unwrap_or(NodeId::NONE);

        if let Some(child_node) = self.get_mut(child) {
            child_node.parent = parent;
            child_node.prev_sibling = last_child;
            child_node.next_sibling = NodeId::NONE;
        }

        if let Some(last_node) = self.get_mut(last_child) {
            last_node.next_sibling = child;
        }

        if let Some(parent_node) = self.get_mut(parent) {
            if parent_node.first_child.is_none() {
                parent_node.first_child = child;
            }
            parent_node.last_child = child;
        }
    }

    /// Insert a detached node as the first child of `parent`.
    pub fn prepend(&mut self, parent: NodeId, child: NodeId) {
        match self.get(parent).map(|n| n.first_child) {
            Some(first) if first.is_some() => self.insert_before(first, child),
            _ => self.append(parent, child),
        }
    }

    /// Insert a detached node before a sibling.
    pub fn insert_before(&mut self, sibling: NodeId, new_node: NodeId) {
        debug_assert!(self.get(new_node).is_some_and(|n| n.parent.is_none()));
        let parent = self.parent(sibling);
        let prev = self
            .get(sibling)
            .map(|n| n.prev_sibling)
            .unwrap_or(NodeId::NONE);

        if let Some(new) = self.get_mut(new_node) {
            new.parent = parent;
            new.prev_sibling = prev;
            new.next_sibling = sibling;
        }

        if let Some(sib) = self.get_mut(sibling) {
            sib.prev_sibling = new_node;
        }

        if prev.is_some() {
            if let Some(p) = self.get_mut(prev) {
                p.next_sibling = new_node;
            }
        } else if let Some(par) = self.get_mut(parent) {
            par.first_child = new_node;
        }
    }

    /// Unlink a node from its parent. Its own subtree stays intact.
    pub fn detach(&mut self, id: NodeId) {
        let Some(node) = self.get(id) else {
            return;
        };
        let (parent, prev, next) = (node.parent, node.prev_sibling, node.next_sibling);
        if parent.is_none() {
            return;
        }

        match self.get_mut(prev) {
            Some(p) => p.next_sibling = next,
            None => {
                if let Some(par) = self.get_mut(parent) {
                    par.first_child = next;
                }
            }
        }
        match self.get_mut(next) {
            Some(n) => n.prev_sibling = prev,
            None => {
                if let Some(par) = self.get_mut(parent) {
                    par.last_child = prev;
                }
            }
        }

        if let Some(node) = self.get_mut(id) {
            node.parent = NodeId::NONE;
            node.prev_sibling = NodeId::NONE;
            node.next_sibling = NodeId::NONE;
        }
    }

    /// Replace `target` with `nodes`, in order.
    ///
    /// `target` itself may appear in `nodes`; that is how a rewrite keeps the
    /// original node while splicing new ones around it.
    pub fn replace_with(&mut self, target: NodeId, nodes: &[NodeId]) {
        let parent = self.parent(target);
        debug_assert!(parent.is_some(), "replace_with on a detached node");
        let next = self
            .get(target)
            .map(|n| n.next_sibling)
            .unwrap_or(NodeId::NONE);

        self.detach(target);
        for &node in nodes {
            if next.is_some() {
                self.insert_before(next, node);
            } else {
                self.append(parent, node);
            }
        }
    }

    /// Parent of a node, or [`NodeId::NONE`].
    pub fn parent(&self, id: NodeId) -> NodeId {
        self.get(id).map(|n| n.parent).unwrap_or(NodeId::NONE)
    }

    /// Iterate over children of a node.
    pub fn children(&self, parent: NodeId) -> ChildrenIter<'_> {
        let first = self
            .get(parent)
            .map(|n| n.first_child)
            .unwrap_or(NodeId::NONE);
        ChildrenIter {
            sheet: self,
            current: first,
        }
    }

    /// Get the declaration stored at `id`.
    pub fn declaration(&self, id: NodeId) -> Option<&Declaration> {
        self.get(id).and_then(|n| match &n.data {
            NodeData::Declaration(decl) => Some(decl),
            _ => None,
        })
    }

    /// Get the selector of a style rule.
    pub fn selector(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.data {
            NodeData::Rule { selector } => Some(selector.as_str()),
            _ => None,
        })
    }

    /// The style rule directly containing `id`, if its parent is one.
    pub fn enclosing_rule(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id);
        self.selector(parent).map(|_| parent)
    }

    /// Check if node is a statement at-rule with one of the given names.
    pub fn is_statement(&self, id: NodeId, names: &[&str]) -> bool {
        self.get(id).is_some_and(|n| match &n.data {
            NodeData::AtRule {
                name,
                has_block: false,
                ..
            } => names.iter().any(|want| name.eq_ignore_ascii_case(want)),
            _ => false,
        })
    }

    /// All attached declarations in document order.
    #[cfg(test)]
    pub(crate) fn declarations(&self) -> Vec<&Declaration> {
        let mut out = Vec::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            if let Some(decl) = self.declaration(id) {
                out.push(decl);
            }
            let mut children: Vec<_> = self.children(id).collect();
            children.reverse();
            stack.extend(children);
        }
        out
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over children of a node.
pub struct ChildrenIter<'a> {
    sheet: &'a Stylesheet,
    current: NodeId,
}

impl Iterator for ChildrenIter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_none() {
            return None;
        }
        let id = self.current;
        self.current = self
            .sheet
            .get(id)
            .map(|n| n.next_sibling)
            .unwrap_or(NodeId::NONE);
        Some(id)
    }
}
