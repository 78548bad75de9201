//! Arena-based DOM for the notebook export.
//!
//! html5ever parses the export into a flat arena of nodes linked by
//! indices. The export format is a linear sequence of class-marked
//! sibling `<div>`s, so the arena only keeps what the extractor needs:
//! element names, class lists, and text. Attributes other than `class`
//! are dropped at parse time.

mod sink;

use html5ever::driver::ParseOpts;
use html5ever::tendril::TendrilSink;
use html5ever::{LocalName, QualName, parse_document};

pub use sink::{DomSink, NodeHandle};

/// Unique identifier for a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value for no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    pub fn is_some(&self) -> bool {
        self.0 != u32::MAX
    }

    pub fn is_none(&self) -> bool {
        self.0 == u32::MAX
    }
}

/// Node type in the arena DOM.
#[derive(Debug, Clone)]
pub enum NodeData {
    /// Document root.
    Document,
    /// Element with name and pre-split class list.
    Element { name: QualName, classes: Vec<String> },
    /// Text content.
    Text(String),
    /// Comment (ignored but needed for TreeSink).
    Comment,
}

/// A node in the arena DOM.
#[derive(Debug)]
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

/// Arena DOM tree: all nodes in one vector, links are indices.
pub struct Dom {
    nodes: Vec<Node>,
    document: NodeId,
}

impl Dom {
    /// Create a new empty DOM with a document root.
    pub fn new() -> Self {
        let mut dom = Self {
            nodes: Vec::new(),
            document: NodeId::NONE,
        };
        dom.document = dom.alloc(Node::new(NodeData::Document));
        dom
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Get the document root ID.
    pub fn document(&self) -> NodeId {
        self.document
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        if id.is_none() {
            return None;
        }
        self.nodes.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        if id.is_none() {
            return None;
        }
        self.nodes.get_mut(id.0 as usize)
    }

    /// Create a new element node with a pre-split class list.
    pub fn create_element(&mut self, name: QualName, classes: Vec<String>) -> NodeId {
        self.alloc(Node::new(NodeData::Element { name, classes }))
    }

    /// Create a new text node.
    pub fn create_text(&mut self, text: String) -> NodeId {
        self.alloc(Node::new(NodeData::Text(text)))
    }

    /// Create a new comment node.
    pub fn create_comment(&mut self) -> NodeId {
        self.alloc(Node::new(NodeData::Comment))
    }

    /// Append a child to a parent node.
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        let last_child = self
            .get(parent)
            .map(|n| n.last_child)
            .unwrap_or(NodeId::NONE);

        if let Some(child_node) = self.get_mut(child) {
            child_node.parent = parent;
            child_node.prev_sibling = last_child;
        }

        if last_child.is_some()
            && let Some(last_node) = self.get_mut(last_child)
        {
            last_node.next_sibling = child;
        }

        if let Some(parent_node) = self.get_mut(parent) {
            if parent_node.first_child.is_none() {
                parent_node.first_child = child;
            }
            parent_node.last_child = child;
        }
    }

    /// Insert a node before a sibling.
    pub fn insert_before(&mut self, sibling: NodeId, new_node: NodeId) {
        let (parent, prev) = match self.get(sibling) {
            Some(n) => (n.parent, n.prev_sibling),
            None => return,
        };

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

    /// Append text to a parent, merging into an existing trailing text node.
    pub fn append_text(&mut self, parent: NodeId, text: &str) {
        let last_child = self
            .get(parent)
            .map(|n| n.last_child)
            .unwrap_or(NodeId::NONE);

        if let Some(last) = self.get_mut(last_child)
            && let NodeData::Text(ref mut existing) = last.data
        {
            existing.push_str(text);
            return;
        }

        let text_node = self.create_text(text.to_string());
        self.append(parent, text_node);
    }

    /// Number of nodes in the arena (including the document root).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Iterate over children of a node.
    pub fn children(&self, parent: NodeId) -> ChildrenIter<'_> {
        let first = self
            .get(parent)
            .map(|n| n.first_child)
            .unwrap_or(NodeId::NONE);
        ChildrenIter {
            dom: self,
            current: first,
        }
    }

    /// Iterate over all nodes in document order (preorder DFS).
    pub fn descendants(&self) -> DescendantsIter<'_> {
        DescendantsIter {
            dom: self,
            stack: vec![self.document],
        }
    }

    /// Get element's local name (tag).
    pub fn element_name(&self, id: NodeId) -> Option<&LocalName> {
        self.get(id).and_then(|n| match &n.data {
            NodeData::Element { name, .. } => Some(&name.local),
            _ => None,
        })
    }

    /// Get element's classes.
    pub fn element_classes(&self, id: NodeId) -> &[String] {
        static EMPTY: &[String] = &[];
        self.get(id)
            .and_then(|n| match &n.data {
                NodeData::Element { classes, .. } => Some(classes.as_slice()),
                _ => None,
            })
            .unwrap_or(EMPTY)
    }

    /// Check whether an element carries a given class.
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.element_classes(id).iter().any(|c| c == class)
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        self.get(id)
            .is_some_and(|n| matches!(n.data, NodeData::Element { .. }))
    }

    /// First element (document order) carrying the given class.
    pub fn find_by_class(&self, class: &str) -> Option<NodeId> {
        self.descendants().find(|&id| self.has_class(id, class))
    }

    /// Count direct element children with the given tag name.
    pub fn count_child_elements(&self, id: NodeId, tag: &str) -> usize {
        self.children(id)
            .filter(|&c| self.element_name(c).is_some_and(|n| n.as_ref() == tag))
            .count()
    }

    /// Concatenated text of all descendant text nodes, in document order.
    ///
    /// Matches the DOM `textContent` notion: no whitespace normalization.
    pub fn collect_text(&self, id: NodeId) -> String {
        let mut out = String::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.get(current) {
                if let NodeData::Text(s) = &node.data {
                    out.push_str(s);
                }
                let mut children: Vec<_> = self.children(current).collect();
                children.reverse();
                stack.extend(children);
            }
        }
        out
    }
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over children of a node.
pub struct ChildrenIter<'a> {
    dom: &'a Dom,
    current: NodeId,
}

impl<'a> Iterator for ChildrenIter<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_none() {
            return None;
        }
        let id = self.current;
        self.current = self
            .dom
            .get(id)
            .map(|n| n.next_sibling)
            .unwrap_or(NodeId::NONE);
        Some(id)
    }
}

/// Preorder DFS over the whole tree.
pub struct DescendantsIter<'a> {
    dom: &'a Dom,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for DescendantsIter<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        let mut children: Vec<_> = self.dom.children(id).collect();
        children.reverse();
        self.stack.extend(children);
        Some(id)
    }
}

/// Parse an HTML string into a [`Dom`].
///
/// Parse errors are ignored; html5ever recovers like a browser would.
pub fn parse_html(html: &str) -> Dom {
    let sink = DomSink::new();
    parse_document(sink, ParseOpts::default())
        .from_utf8()
        .one(html.as_bytes())
        .into_dom()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_parse() {
        let dom = parse_html("<html><body><p>Hello</p></body></html>");

        // Document + html + head + body + p + text
        assert!(dom.len() > 3);

        let p = dom
            .descendants()
            .find(|&id| dom.element_name(id).is_some_and(|n| n.as_ref() == "p"))
            .expect("should find p");
        assert_eq!(dom.collect_text(p), "Hello");
    }

    #[test]
    fn test_classes() {
        let dom = parse_html(r#"<div class="noteHeading highlight">x</div>"#);

        let div = dom.find_by_class("noteHeading").expect("should find div");
        assert!(dom.has_class(div, "highlight"));
        assert!(!dom.has_class(div, "noteText"));
    }

    #[test]
    fn test_find_by_class_document_order() {
        let dom = parse_html(
            r#"<div class="m">first</div><p><span class="m">second</span></p>"#,
        );

        let first = dom.find_by_class("m").expect("should find marker");
        assert_eq!(dom.collect_text(first), "first");
    }

    #[test]
    fn test_count_child_elements() {
        let dom = parse_html(
            r#"<div class="h"><span>a</span> tail <span>b</span><b>c</b></div>"#,
        );

        let div = dom.find_by_class("h").unwrap();
        assert_eq!(dom.count_child_elements(div, "span"), 2);
        assert_eq!(dom.count_child_elements(div, "b"), 1);
        assert_eq!(dom.count_child_elements(div, "i"), 0);
    }

    #[test]
    fn test_collect_text_nested() {
        let dom = parse_html("<div class='h'>Highlight (<span>yellow</span>) - Page 4</div>");

        let div = dom.find_by_class("h").unwrap();
        assert_eq!(dom.collect_text(div), "Highlight (yellow) - Page 4");
    }

    #[test]
    fn test_text_merging() {
        let mut dom = Dom::new();
        let name = QualName::new(None, html5ever::ns!(html), LocalName::from("p"));
        let p = dom.create_element(name, vec![]);
        dom.append(dom.document(), p);

        dom.append_text(p, "Hello, ");
        dom.append_text(p, "World!");

        let children: Vec<_> = dom.children(p).collect();
        assert_eq!(children.len(), 1);
        assert_eq!(dom.collect_text(p), "Hello, World!");
    }
}
