//! html5ever TreeSink implementation for [`Dom`].

use std::cell::RefCell;

use html5ever::tendril::StrTendril;
use html5ever::tree_builder::{ElementFlags, NodeOrText, QuirksMode, TreeSink};
use html5ever::{Attribute, QualName};

use super::{Dom, NodeData, NodeId};

/// Handle used by TreeSink to reference nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeHandle(pub NodeId);

impl Default for NodeHandle {
    fn default() -> Self {
        NodeHandle(NodeId::NONE)
    }
}

/// TreeSink that builds a [`Dom`].
///
/// Interior mutability (RefCell) because html5ever's TreeSink trait takes
/// `&self` but tree construction mutates the arena.
pub struct DomSink {
    dom: RefCell<Dom>,
    quirks_mode: RefCell<QuirksMode>,
}

impl Default for DomSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DomSink {
    pub fn new() -> Self {
        Self {
            dom: RefCell::new(Dom::new()),
            quirks_mode: RefCell::new(QuirksMode::NoQuirks),
        }
    }

    /// Consume the sink and return the DOM.
    pub fn into_dom(self) -> Dom {
        self.dom.into_inner()
    }
}

/// Split a `class` attribute value into individual class names.
fn split_classes(attrs: &[Attribute]) -> Vec<String> {
    attrs
        .iter()
        .find(|a| a.name.local.as_ref() == "class")
        .map(|a| {
            a.value
                .split_whitespace()
                .map(|s| s.to_string())
                .collect()
        })
        .unwrap_or_default()
}

impl TreeSink for DomSink {
    type Handle = NodeHandle;
    type Output = Self;
    type ElemName<'a>
        = &'a QualName
    where
        Self: 'a;

    fn finish(self) -> Self::Output {
        self
    }

    fn parse_error(&self, _msg: std::borrow::Cow<'static, str>) {
        // Ignore parse errors - be lenient like browsers
    }

    fn get_document(&self) -> Self::Handle {
        NodeHandle(self.dom.borrow().document())
    }

    fn elem_name<'a>(&'a self, target: &'a Self::Handle) -> Self::ElemName<'a> {
        static EMPTY: QualName = QualName {
            prefix: None,
            ns: html5ever::ns!(),
            local: html5ever::local_name!(""),
        };

        let dom = self.dom.borrow();
        match dom.get(target.0) {
            Some(node) => match &node.data {
                NodeData::Element { name, .. } => {
                    // SAFETY: the QualName lives in the arena, which lives as
                    // long as self. The borrow checker can't see that through
                    // the RefCell, so the lifetime is extended manually. The
                    // arena never removes or reallocates individual nodes.
                    unsafe { std::mem::transmute::<&QualName, &'a QualName>(name) }
                }
                _ => &EMPTY,
            },
            None => &EMPTY,
        }
    }

    fn create_element(
        &self,
        name: QualName,
        attrs: Vec<Attribute>,
        _flags: ElementFlags,
    ) -> Self::Handle {
        let classes = split_classes(&attrs);
        let id = self.dom.borrow_mut().create_element(name, classes);
        NodeHandle(id)
    }

    fn create_comment(&self, _text: StrTendril) -> Self::Handle {
        NodeHandle(self.dom.borrow_mut().create_comment())
    }

    fn create_pi(&self, _target: StrTendril, _data: StrTendril) -> Self::Handle {
        // Processing instructions are irrelevant here; store as a comment
        NodeHandle(self.dom.borrow_mut().create_comment())
    }

    fn append(&self, parent: &Self::Handle, child: NodeOrText<Self::Handle>) {
        let mut dom = self.dom.borrow_mut();
        match child {
            NodeOrText::AppendNode(node) => {
                dom.append(parent.0, node.0);
            }
            NodeOrText::AppendText(text) => {
                dom.append_text(parent.0, &text);
            }
        }
    }

    fn append_based_on_parent_node(
        &self,
        element: &Self::Handle,
        prev_element: &Self::Handle,
        child: NodeOrText<Self::Handle>,
    ) {
        let parent = self.dom.borrow().get(element.0).map(|n| n.parent);
        if let Some(parent) = parent
            && parent.is_some()
        {
            let mut dom = self.dom.borrow_mut();
            match child {
                NodeOrText::AppendNode(node) => {
                    dom.append(parent, node.0);
                }
                NodeOrText::AppendText(text) => {
                    dom.append_text(parent, &text);
                }
            }
            return;
        }
        self.append(prev_element, child);
    }

    fn append_doctype_to_document(
        &self,
        _name: StrTendril,
        _public_id: StrTendril,
        _system_id: StrTendril,
    ) {
        // Doctype carries nothing the extractor needs
    }

    fn get_template_contents(&self, target: &Self::Handle) -> Self::Handle {
        // Exports never use <template>; treat contents as the element itself
        *target
    }

    fn same_node(&self, x: &Self::Handle, y: &Self::Handle) -> bool {
        x.0 == y.0
    }

    fn set_quirks_mode(&self, mode: QuirksMode) {
        *self.quirks_mode.borrow_mut() = mode;
    }

    fn append_before_sibling(&self, sibling: &Self::Handle, new_node: NodeOrText<Self::Handle>) {
        let mut dom = self.dom.borrow_mut();
        match new_node {
            NodeOrText::AppendNode(node) => {
                dom.insert_before(sibling.0, node.0);
            }
            NodeOrText::AppendText(text) => {
                let text_node = dom.create_text(text.to_string());
                dom.insert_before(sibling.0, text_node);
            }
        }
    }

    fn add_attrs_if_missing(&self, target: &Self::Handle, attrs: Vec<Attribute>) {
        // Only classes are kept; merge a late class attribute if the
        // element was created without one.
        let new_classes = split_classes(&attrs);
        if new_classes.is_empty() {
            return;
        }
        let mut dom = self.dom.borrow_mut();
        if let Some(node) = dom.get_mut(target.0)
            && let NodeData::Element { classes, .. } = &mut node.data
            && classes.is_empty()
        {
            *classes = new_classes;
        }
    }

    fn remove_from_parent(&self, target: &Self::Handle) {
        let mut dom = self.dom.borrow_mut();

        let (parent, prev, next) = {
            let node = match dom.get(target.0) {
                Some(n) => n,
                None => return,
            };
            (node.parent, node.prev_sibling, node.next_sibling)
        };

        if prev.is_some() {
            if let Some(p) = dom.get_mut(prev) {
                p.next_sibling = next;
            }
        } else if parent.is_some()
            && let Some(p) = dom.get_mut(parent)
        {
            p.first_child = next;
        }

        if next.is_some() {
            if let Some(n) = dom.get_mut(next) {
                n.prev_sibling = prev;
            }
        } else if parent.is_some()
            && let Some(p) = dom.get_mut(parent)
        {
            p.last_child = prev;
        }

        if let Some(target_node) = dom.get_mut(target.0) {
            target_node.parent = NodeId::NONE;
            target_node.prev_sibling = NodeId::NONE;
            target_node.next_sibling = NodeId::NONE;
        }
    }

    fn reparent_children(&self, node: &Self::Handle, new_parent: &Self::Handle) {
        let children: Vec<_> = self.dom.borrow().children(node.0).collect();

        {
            let mut dom = self.dom.borrow_mut();
            for child in &children {
                if let Some(c) = dom.get_mut(*child) {
                    c.parent = NodeId::NONE;
                    c.prev_sibling = NodeId::NONE;
                    c.next_sibling = NodeId::NONE;
                }
            }

            if let Some(n) = dom.get_mut(node.0) {
                n.first_child = NodeId::NONE;
                n.last_child = NodeId::NONE;
            }
        }

        let mut dom = self.dom.borrow_mut();
        for child in children {
            dom.append(new_parent.0, child);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::dom::parse_html;

    #[test]
    fn test_class_splitting() {
        let dom = parse_html(r#"<div class="  noteHeading   foo ">x</div>"#);
        let div = dom.find_by_class("noteHeading").expect("should find div");
        assert_eq!(dom.element_classes(div), ["noteHeading", "foo"]);
    }

    #[test]
    fn test_malformed_markup_recovers() {
        // Unclosed tags and stray close tags must still yield a tree
        let dom = parse_html("<div class='a'><span>x</div></p><b>");
        assert!(dom.find_by_class("a").is_some());
    }
}
