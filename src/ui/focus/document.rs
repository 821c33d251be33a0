// SPDX-License-Identifier: MPL-2.0
//! In-memory focus host with browser-like tabbing rules.
//!
//! Used by the demo shell to model which dialog control holds focus, and by
//! tests to exercise the trap without a renderer.

use super::{ElementId, FocusHost};

/// What kind of element a node is. Mirrors the interactive selectors a
/// browser treats as tabbable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Non-interactive grouping element (dialog root, section).
    Container,
    Button,
    Input,
    TextArea,
    Select,
    /// Link with a target.
    Link,
    /// Static text.
    Text,
}

impl ElementKind {
    fn is_interactive(self) -> bool {
        matches!(
            self,
            ElementKind::Button
                | ElementKind::Input
                | ElementKind::TextArea
                | ElementKind::Select
                | ElementKind::Link
        )
    }

    fn can_be_disabled(self) -> bool {
        matches!(
            self,
            ElementKind::Button | ElementKind::Input | ElementKind::TextArea | ElementKind::Select
        )
    }
}

/// Element description used when appending to a [`VirtualDocument`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub kind: ElementKind,
    pub label: String,
    /// Explicit tab index. `-1` means focusable by script only.
    pub tab_index: Option<i32>,
    pub disabled: bool,
    /// Computed `visibility: hidden`.
    pub hidden: bool,
    /// Computed `display: none`.
    pub display_none: bool,
}

impl Element {
    fn new(kind: ElementKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            tab_index: None,
            disabled: false,
            hidden: false,
            display_none: false,
        }
    }

    pub fn container() -> Self {
        Self::new(ElementKind::Container, "")
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self::new(ElementKind::Button, label)
    }

    pub fn input(label: impl Into<String>) -> Self {
        Self::new(ElementKind::Input, label)
    }

    pub fn link(label: impl Into<String>) -> Self {
        Self::new(ElementKind::Link, label)
    }

    pub fn text(label: impl Into<String>) -> Self {
        Self::new(ElementKind::Text, label)
    }

    #[must_use]
    pub fn with_tab_index(mut self, tab_index: i32) -> Self {
        self.tab_index = Some(tab_index);
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

#[derive(Debug, Clone)]
struct Node {
    element: Element,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    attached: bool,
}

/// A tree of elements with a single active (focused) element.
#[derive(Debug, Clone)]
pub struct VirtualDocument {
    nodes: Vec<Node>,
    active: Option<ElementId>,
}

impl Default for VirtualDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualDocument {
    /// Creates a document containing only its body.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                element: Element::container(),
                parent: None,
                children: Vec::new(),
                attached: true,
            }],
            active: None,
        }
    }

    /// The document body (always attached).
    #[must_use]
    pub fn body(&self) -> ElementId {
        ElementId::new(0)
    }

    /// Appends `element` as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not created by this document.
    pub fn append(&mut self, parent: ElementId, element: Element) -> ElementId {
        let id = ElementId::new(self.nodes.len() as u32);
        let attached = self.node(parent).attached;
        self.nodes.push(Node {
            element,
            parent: Some(parent),
            children: Vec::new(),
            attached,
        });
        self.node_mut(parent).children.push(id);
        id
    }

    /// Detaches `id` and its subtree. Focus inside the subtree is lost.
    pub fn detach(&mut self, id: ElementId) {
        if let Some(parent) = self.node(id).parent {
            self.node_mut(parent).children.retain(|&child| child != id);
        }
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let node = self.node_mut(current);
            node.attached = false;
            stack.extend(node.children.iter().copied());
            if self.active == Some(current) {
                self.active = None;
            }
        }
    }

    pub fn set_disabled(&mut self, id: ElementId, disabled: bool) {
        self.node_mut(id).element.disabled = disabled;
        self.drop_focus_if_invalid();
    }

    pub fn set_hidden(&mut self, id: ElementId, hidden: bool) {
        self.node_mut(id).element.hidden = hidden;
        self.drop_focus_if_invalid();
    }

    pub fn set_display_none(&mut self, id: ElementId, display_none: bool) {
        self.node_mut(id).element.display_none = display_none;
        self.drop_focus_if_invalid();
    }

    /// Clears focus entirely.
    pub fn blur(&mut self) {
        self.active = None;
    }

    /// Looks up an element description.
    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.nodes.get(id.raw() as usize).map(|node| &node.element)
    }

    /// Whether `id` lies inside `ancestor` (or is it).
    #[must_use]
    pub fn contains(&self, ancestor: ElementId, id: ElementId) -> bool {
        let mut current = Some(id);
        while let Some(node_id) = current {
            if node_id == ancestor {
                return true;
            }
            current = self.nodes.get(node_id.raw() as usize).and_then(|n| n.parent);
        }
        false
    }

    fn node(&self, id: ElementId) -> &Node {
        &self.nodes[id.raw() as usize]
    }

    fn node_mut(&mut self, id: ElementId) -> &mut Node {
        &mut self.nodes[id.raw() as usize]
    }

    /// Computed visibility: `visibility` and `display` both propagate to
    /// descendants.
    fn is_rendered(&self, id: ElementId) -> bool {
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.node(node_id);
            if node.element.hidden || node.element.display_none {
                return false;
            }
            current = node.parent;
        }
        true
    }

    fn is_tabbable(&self, id: ElementId) -> bool {
        let element = &self.node(id).element;
        let in_tab_order = match element.tab_index {
            Some(index) => index >= 0,
            None => element.kind.is_interactive(),
        };
        in_tab_order && !self.is_disabled(id) && self.is_rendered(id)
    }

    fn is_disabled(&self, id: ElementId) -> bool {
        let element = &self.node(id).element;
        element.kind.can_be_disabled() && element.disabled
    }

    fn drop_focus_if_invalid(&mut self) {
        if let Some(active) = self.active {
            if !self.can_focus(active) {
                self.active = None;
            }
        }
    }
}

impl FocusHost for VirtualDocument {
    fn active_element(&self) -> Option<ElementId> {
        self.active
    }

    fn focus(&mut self, id: ElementId) -> bool {
        if self.can_focus(id) {
            self.active = Some(id);
            true
        } else {
            false
        }
    }

    fn can_focus(&self, id: ElementId) -> bool {
        let Some(node) = self.nodes.get(id.raw() as usize) else {
            return false;
        };
        let focusable = node.element.kind.is_interactive() || node.element.tab_index.is_some();
        node.attached && focusable && !self.is_disabled(id) && self.is_rendered(id)
    }

    fn focusable_within(&self, root: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let Some(node) = self.nodes.get(root.raw() as usize) else {
            return out;
        };
        if !node.attached {
            return out;
        }

        // Pre-order walk, document order.
        let mut stack: Vec<ElementId> = node.children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            if self.is_tabbable(id) {
                out.push(id);
            }
            stack.extend(self.node(id).children.iter().rev().copied());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_tabbable_descendants_in_document_order() {
        let mut doc = VirtualDocument::new();
        let root = doc.append(doc.body(), Element::container());
        let a = doc.append(root, Element::button("a"));
        let group = doc.append(root, Element::container());
        let b = doc.append(group, Element::input("b"));
        let _text = doc.append(group, Element::text("label"));
        let c = doc.append(root, Element::link("c"));

        assert_eq!(doc.focusable_within(root), vec![a, b, c]);
    }

    #[test]
    fn excludes_disabled_hidden_and_display_none() {
        let mut doc = VirtualDocument::new();
        let root = doc.append(doc.body(), Element::container());
        let keep = doc.append(root, Element::button("keep"));
        let disabled = doc.append(root, Element::button("disabled").disabled(true));
        let hidden = doc.append(root, Element::input("hidden"));
        let section = doc.append(root, Element::container());
        let inside_none = doc.append(section, Element::button("inside"));
        doc.set_hidden(hidden, true);
        doc.set_display_none(section, true);

        let set = doc.focusable_within(root);
        assert_eq!(set, vec![keep]);
        assert!(!set.contains(&disabled));
        assert!(!set.contains(&inside_none));
    }

    #[test]
    fn negative_tab_index_is_script_focusable_only() {
        let mut doc = VirtualDocument::new();
        let root = doc.append(doc.body(), Element::container().with_tab_index(-1));
        let custom = doc.append(root, Element::text("custom").with_tab_index(0));

        assert_eq!(doc.focusable_within(root), vec![custom]);
        assert!(doc.focus(root));
        assert_eq!(doc.active_element(), Some(root));
    }

    #[test]
    fn plain_containers_cannot_take_focus() {
        let mut doc = VirtualDocument::new();
        let root = doc.append(doc.body(), Element::container());
        assert!(!doc.focus(root));
        assert_eq!(doc.active_element(), None);
    }

    #[test]
    fn disabling_active_element_drops_focus() {
        let mut doc = VirtualDocument::new();
        let button = doc.append(doc.body(), Element::button("go"));
        doc.focus(button);
        doc.set_disabled(button, true);
        assert_eq!(doc.active_element(), None);
    }

    #[test]
    fn detach_removes_subtree_from_focus() {
        let mut doc = VirtualDocument::new();
        let root = doc.append(doc.body(), Element::container());
        let button = doc.append(root, Element::button("go"));
        doc.focus(button);

        doc.detach(root);
        assert_eq!(doc.active_element(), None);
        assert!(!doc.can_focus(button));
        assert!(doc.focusable_within(doc.body()).is_empty());
    }

    #[test]
    fn contains_walks_ancestors() {
        let mut doc = VirtualDocument::new();
        let root = doc.append(doc.body(), Element::container());
        let button = doc.append(root, Element::button("go"));
        let outside = doc.append(doc.body(), Element::button("out"));

        assert!(doc.contains(root, button));
        assert!(!doc.contains(root, outside));
    }
}
