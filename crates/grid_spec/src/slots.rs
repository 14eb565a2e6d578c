//! Slot assignment.
//!
//! Caller content tagged with slot name `N` is placed into `<slot name="N">`;
//! a slot nobody targets shows its fallback children instead. Content whose
//! tag matches no slot is not rendered anywhere.

use crate::markup::{Element, Node};
use log::debug;
use std::collections::HashSet;

/// A piece of caller content, optionally tagged with a slot name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlottedContent {
    slot: Option<String>,
    content: Node,
}

impl SlottedContent {
    /// Content aimed at the slot named `slot`.
    pub fn new(slot: impl Into<String>, content: impl Into<Node>) -> Self {
        Self {
            slot: Some(slot.into()),
            content: content.into(),
        }
    }

    /// Content without a slot tag; only an unnamed slot would take it.
    pub fn untagged(content: impl Into<Node>) -> Self {
        Self {
            slot: None,
            content: content.into(),
        }
    }

    #[inline]
    pub fn slot(&self) -> Option<&str> {
        self.slot.as_deref()
    }

    #[inline]
    pub fn content(&self) -> &Node {
        &self.content
    }
}

/// Flatten `shadow` with `children` assigned to their slots.
///
/// Slot elements are replaced by their assigned content, or by their fallback
/// children when nothing is assigned. Only the first slot with a given name
/// receives content, the way a shadow root assigns it.
pub fn compose(shadow: &[Node], children: &[SlottedContent]) -> Vec<Node> {
    let mut composer = Composer {
        children,
        filled: HashSet::new(),
    };
    let composed = composer.compose_list(shadow);
    let unplaced = unplaced(shadow, children).len();
    if unplaced > 0 {
        debug!("{unplaced} slotted children matched no insertion point");
    }
    composed
}

/// Children whose slot tag matches no slot in `shadow`.
pub fn unplaced<'content>(
    shadow: &[Node],
    children: &'content [SlottedContent],
) -> Vec<&'content SlottedContent> {
    let mut names: HashSet<Option<&str>> = HashSet::new();
    collect_slot_names(shadow, &mut names);
    children
        .iter()
        .filter(|child| !names.contains(&child.slot()))
        .collect()
}

fn collect_slot_names<'tree>(nodes: &'tree [Node], names: &mut HashSet<Option<&'tree str>>) {
    for element in nodes.iter().filter_map(Node::as_element) {
        if element.tag() == "slot" {
            names.insert(element.attr("name"));
        }
        collect_slot_names(element.children(), names);
    }
}

struct Composer<'content> {
    children: &'content [SlottedContent],
    filled: HashSet<Option<String>>,
}

impl Composer<'_> {
    fn compose_list(&mut self, nodes: &[Node]) -> Vec<Node> {
        let mut out = Vec::with_capacity(nodes.len());
        for node in nodes {
            self.compose_node(node, &mut out);
        }
        out
    }

    fn compose_node(&mut self, node: &Node, out: &mut Vec<Node>) {
        let Node::Element(element) = node else {
            out.push(node.clone());
            return;
        };
        if element.tag() == "slot" {
            self.compose_slot(element, out);
            return;
        }
        let children = self.compose_list(element.children());
        out.push(element.clone_with_children(children).into());
    }

    fn compose_slot(&mut self, slot: &Element, out: &mut Vec<Node>) {
        let name = slot.attr("name").map(str::to_owned);
        let assigned: Vec<Node> = if self.filled.contains(&name) {
            Vec::new()
        } else {
            self.children
                .iter()
                .filter(|child| child.slot() == name.as_deref())
                .map(|child| child.content.clone())
                .collect()
        };
        if assigned.is_empty() {
            let fallback = self.compose_list(slot.children());
            out.extend(fallback);
        } else {
            self.filled.insert(name);
            out.extend(assigned);
        }
    }
}
