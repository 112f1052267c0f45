// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A CSS selector parser and matcher (§3.4, §4.3, §6.4).
//!
//! [`parse`] compiles a selector string into a [`SelectorList`];
//! [`match_all`] and [`match_first`] run a compiled-on-the-fly selector
//! against a tree implementing [`dom::Node`].

pub mod ast;
pub mod dom;
mod lexer;
mod matcher;
mod nth;
mod parser;

pub use ast::{
    AttrOp, Combinator, CompoundSelector, ComplexPart, ComplexSelector, PseudoClass,
    SelectorList, SimpleSelector,
};
pub use dom::{ns, Node, NodeKind};
pub use nth::NthExpr;

use thiserror::Error;

/// A selector that failed to parse (§6.5).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message} at position {position} in `{selector}`")]
pub struct SelectorError {
    pub selector: String,
    pub position: usize,
    pub message: String,
}

/// Parse a selector string into a [`SelectorList`] (§6.4).
pub fn parse(selector: &str) -> Result<SelectorList, SelectorError> {
    parser::parse(selector)
}

/// Parse `selector` and return every element under `root` (inclusive,
/// pre-order) that it matches (§4.3.3, §6.4).
pub fn match_all<N: Node>(root: &N, selector: &str) -> Result<Vec<N>, SelectorError> {
    let list = parse(selector)?;
    let mut out = Vec::new();
    walk(root, &mut |node| {
        if matches_list(&list, node) {
            out.push(node.clone());
        }
    });
    Ok(out)
}

/// Parse `selector` and return the first element under `root` (in
/// pre-order) that it matches, if any (§6.4).
pub fn match_first<N: Node>(root: &N, selector: &str) -> Result<Option<N>, SelectorError> {
    let list = parse(selector)?;
    Ok(find(root, &list))
}

/// Test whether `node` itself matches an already-compiled `list`,
/// without a parse step. Useful for callers matching many candidates
/// against the same selector.
pub fn matches_list<N: Node>(list: &SelectorList, node: &N) -> bool {
    matcher::selector_list_matches(list, node)
}

fn walk<N: Node>(node: &N, visit: &mut impl FnMut(&N)) {
    visit(node);
    for child in node.children() {
        walk(&child, visit);
    }
}

fn find<N: Node>(node: &N, list: &SelectorList) -> Option<N> {
    if matches_list(list, node) {
        return Some(node.clone());
    }
    for child in node.children() {
        if let Some(found) = find(&child, list) {
            return Some(found);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::{Rc, Weak};

    struct Data {
        kind: NodeKind,
        tag: Option<String>,
        attrs: HashMap<String, String>,
        children: RefCell<Vec<Tree>>,
        parent: RefCell<Weak<Data>>,
    }

    #[derive(Clone)]
    struct Tree(Rc<Data>);

    impl PartialEq for Tree {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.0, &other.0)
        }
    }

    impl Tree {
        fn elem(tag: &str, attrs: &[(&str, &str)]) -> Tree {
            Tree(Rc::new(Data {
                kind: NodeKind::Element,
                tag: Some(tag.to_string()),
                attrs: attrs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
                children: RefCell::new(Vec::new()),
                parent: RefCell::new(Weak::new()),
            }))
        }

        fn append(&self, child: Tree) -> &Self {
            *child.0.parent.borrow_mut() = Rc::downgrade(&self.0);
            self.0.children.borrow_mut().push(child);
            self
        }
    }

    impl Node for Tree {
        fn kind(&self) -> NodeKind {
            self.0.kind
        }

        fn parent(&self) -> Option<Self> {
            self.0.parent.borrow().upgrade().map(Tree)
        }

        fn children(&self) -> Vec<Self> {
            self.0.children.borrow().clone()
        }

        fn tag_name(&self) -> Option<&str> {
            self.0.tag.as_deref()
        }

        fn namespace(&self) -> Option<&str> {
            Some(ns::HTML)
        }

        fn attribute_value(&self, name: &str) -> Option<&str> {
            self.0.attrs.get(name).map(|s| s.as_str())
        }
    }

    fn list_tree() -> Tree {
        let ul = Tree::elem("ul", &[("id", "list")]);
        let one = Tree::elem("li", &[("class", "item")]);
        let two = Tree::elem("li", &[("class", "item active")]);
        let three = Tree::elem("li", &[("class", "item")]);
        ul.append(one).append(two).append(three);
        ul
    }

    #[test]
    fn match_all_collects_every_matching_descendant() {
        let root = list_tree();
        let items = match_all(&root, "li.item").unwrap();
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn match_first_returns_the_first_match_in_pre_order() {
        let root = list_tree();
        let first = match_first(&root, "li.active").unwrap().unwrap();
        assert_eq!(first.tag_name(), Some("li"));
        assert!(first.has_class("active"));
    }

    #[test]
    fn match_first_returns_none_when_nothing_matches() {
        let root = list_tree();
        assert!(match_first(&root, "span").unwrap().is_none());
    }

    #[test]
    fn invalid_selector_reports_position_and_message() {
        let err = parse("div[").unwrap_err();
        assert!(err.message.contains("attribute name"));
    }

    #[test]
    fn unsupported_pseudo_class_matches_nothing_without_erroring() {
        let root = list_tree();
        let hovered = match_all(&root, "li:hover").unwrap();
        assert!(hovered.is_empty());
    }

    #[test]
    fn nth_child_across_a_real_tree() {
        let root = list_tree();
        let odd = match_all(&root, "li:nth-child(odd)").unwrap();
        assert_eq!(odd.len(), 2);
    }

    #[test]
    fn not_excludes_matching_siblings() {
        let root = list_tree();
        let plain = match_all(&root, "li:not(.active)").unwrap();
        assert_eq!(plain.len(), 2);
        assert!(plain.iter().all(|n| !n.has_class("active")));
    }
}
