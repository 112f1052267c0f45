// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Selector matching (§4.3.3, §4.3.4, §4.3.6).
//!
//! Complex selectors match right-to-left: the rightmost compound is
//! checked against the candidate element first, then the matcher walks
//! backward through the remaining combinators checking ancestors or
//! siblings as appropriate. This lets non-matches fail fast without
//! ever constructing the candidate's full ancestor chain.

use crate::selector::ast::{
    AttrOp, Combinator, CompoundSelector, ComplexSelector, PseudoClass, SelectorList,
    SimpleSelector,
};
use crate::selector::dom::Node;

pub fn selector_list_matches<N: Node>(list: &SelectorList, node: &N) -> bool {
    list.selectors.iter().any(|complex| complex_matches(complex, node))
}

fn complex_matches<N: Node>(complex: &ComplexSelector, node: &N) -> bool {
    if !node.is_element() {
        return false;
    }
    let last = complex.parts.len() - 1;
    if !compound_matches(&complex.parts[last].compound, node) {
        return false;
    }
    matches_combinators(complex, last, node)
}

/// Having matched `parts[index]` against `node`, walk backward through
/// `parts[..index]`, checking each against the appropriate relative of
/// `node` per its combinator.
fn matches_combinators<N: Node>(complex: &ComplexSelector, index: usize, node: &N) -> bool {
    if index == 0 {
        return true;
    }
    let part = &complex.parts[index];
    let prev_compound = &complex.parts[index - 1].compound;

    match part.combinator {
        Combinator::None => unreachable!("only parts[0] carries Combinator::None"),
        Combinator::Child => match node.parent() {
            Some(parent) if parent.is_element() && compound_matches(prev_compound, &parent) => {
                matches_combinators(complex, index - 1, &parent)
            },
            _ => false,
        },
        Combinator::Descendant => {
            let mut ancestor = node.parent();
            while let Some(candidate) = ancestor {
                if candidate.is_element()
                    && compound_matches(prev_compound, &candidate)
                    && matches_combinators(complex, index - 1, &candidate)
                {
                    return true;
                }
                ancestor = candidate.parent();
            }
            false
        },
        Combinator::AdjacentSibling => match previous_element_sibling(node) {
            Some(sibling) if compound_matches(prev_compound, &sibling) => {
                matches_combinators(complex, index - 1, &sibling)
            },
            _ => false,
        },
        Combinator::GeneralSibling => {
            let mut sibling = previous_element_sibling(node);
            while let Some(candidate) = sibling {
                if compound_matches(prev_compound, &candidate)
                    && matches_combinators(complex, index - 1, &candidate)
                {
                    return true;
                }
                sibling = previous_element_sibling(&candidate);
            }
            false
        },
    }
}

fn compound_matches<N: Node>(compound: &CompoundSelector, node: &N) -> bool {
    compound.simple_selectors.iter().all(|s| simple_matches(s, node))
}

fn simple_matches<N: Node>(simple: &SimpleSelector, node: &N) -> bool {
    match simple {
        SimpleSelector::Universal => true,
        SimpleSelector::Tag(name) => match node.tag_name() {
            Some(tag) if node.is_html() => tag.eq_ignore_ascii_case(name),
            Some(tag) => tag == name,
            None => false,
        },
        SimpleSelector::Id(id) => node.id() == Some(id.as_str()),
        SimpleSelector::Class(class) => node.has_class(class),
        SimpleSelector::Attr { name, op } => attr_matches(node, name, op),
        SimpleSelector::Pseudo(pseudo) => pseudo_matches(pseudo, node),
    }
}

fn attr_matches<N: Node>(node: &N, name: &str, op: &AttrOp) -> bool {
    let value = match node.attribute_value(name) {
        Some(v) => v,
        None => return false,
    };
    match op {
        AttrOp::Exists => true,
        AttrOp::Equals(operand) => value == operand,
        AttrOp::Includes(operand) => !operand.is_empty() && value.split_ascii_whitespace().any(|w| w == operand),
        AttrOp::DashPrefix(operand) => {
            value == operand || value.strip_prefix(operand.as_str()).map(|rest| rest.starts_with('-')).unwrap_or(false)
        },
        AttrOp::PrefixMatch(operand) => !operand.is_empty() && value.starts_with(operand.as_str()),
        AttrOp::SuffixMatch(operand) => !operand.is_empty() && value.ends_with(operand.as_str()),
        AttrOp::Substring(operand) => !operand.is_empty() && value.contains(operand.as_str()),
    }
}

fn pseudo_matches<N: Node>(pseudo: &PseudoClass, node: &N) -> bool {
    match pseudo {
        PseudoClass::FirstChild => sibling_index(node, false) == Some(1),
        PseudoClass::LastChild => sibling_index(node, true) == Some(1),
        PseudoClass::OnlyChild => sibling_index(node, false) == Some(1) && sibling_index(node, true) == Some(1),
        PseudoClass::NthChild(nth) => sibling_index(node, false).map(|i| nth.matches(i)).unwrap_or(false),
        PseudoClass::NthLastChild(nth) => sibling_index(node, true).map(|i| nth.matches(i)).unwrap_or(false),
        PseudoClass::FirstOfType => typed_sibling_index(node, false) == Some(1),
        PseudoClass::LastOfType => typed_sibling_index(node, true) == Some(1),
        PseudoClass::OnlyOfType => {
            typed_sibling_index(node, false) == Some(1) && typed_sibling_index(node, true) == Some(1)
        },
        PseudoClass::NthOfType(nth) => typed_sibling_index(node, false).map(|i| nth.matches(i)).unwrap_or(false),
        PseudoClass::NthLastOfType(nth) => typed_sibling_index(node, true).map(|i| nth.matches(i)).unwrap_or(false),
        PseudoClass::Empty => is_empty(node),
        PseudoClass::Root => is_root(node),
        PseudoClass::Not(inner) => match inner {
            None => false,
            Some(list) => !selector_list_matches(list, node),
        },
        PseudoClass::Unknown(_) => false,
    }
}

/// 1-based position of `node` among its element siblings, counting from
/// the end if `from_end`. `None` if `node` has no parent.
fn sibling_index<N: Node>(node: &N, from_end: bool) -> Option<i64> {
    let parent = node.parent()?;
    let mut siblings = parent.element_children();
    if from_end {
        siblings.reverse();
    }
    siblings.iter().position(|s| s == node).map(|i| i as i64 + 1)
}

/// Like [`sibling_index`], but counting only siblings that share
/// `node`'s tag name and namespace (§4.3.4 "of-type").
fn typed_sibling_index<N: Node>(node: &N, from_end: bool) -> Option<i64> {
    let parent = node.parent()?;
    let mut siblings: Vec<N> = parent
        .element_children()
        .into_iter()
        .filter(|s| s.tag_name() == node.tag_name() && s.namespace() == node.namespace())
        .collect();
    if from_end {
        siblings.reverse();
    }
    siblings.iter().position(|s| s == node).map(|i| i as i64 + 1)
}

fn previous_element_sibling<N: Node>(node: &N) -> Option<N> {
    let parent = node.parent()?;
    let children = parent.children();
    let index = children.iter().position(|c| c == node)?;
    children[..index].iter().rev().find(|c| c.is_element()).cloned()
}

fn is_empty<N: Node>(node: &N) -> bool {
    use crate::selector::dom::NodeKind;
    node.children().iter().all(|child| match child.kind() {
        NodeKind::Element => false,
        NodeKind::Text => child.text().map(|t| t.trim().is_empty()).unwrap_or(true),
        _ => true,
    })
}

fn is_root<N: Node>(node: &N) -> bool {
    match node.parent() {
        None => true,
        Some(parent) => !parent.is_element(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::dom::{ns, NodeKind};
    use crate::selector::parser::parse;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::{Rc, Weak};

    struct Data {
        kind: NodeKind,
        tag: Option<String>,
        attrs: HashMap<String, String>,
        text: Option<String>,
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
                text: None,
                children: RefCell::new(Vec::new()),
                parent: RefCell::new(Weak::new()),
            }))
        }

        fn text(content: &str) -> Tree {
            Tree(Rc::new(Data {
                kind: NodeKind::Text,
                tag: None,
                attrs: HashMap::new(),
                text: Some(content.to_string()),
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

        fn text(&self) -> Option<&str> {
            self.0.text.as_deref()
        }
    }

    fn matches(selector: &str, node: &Tree) -> bool {
        let list = parse(selector).unwrap();
        selector_list_matches(&list, node)
    }

    #[test]
    fn tag_and_class_and_id() {
        let div = Tree::elem("div", &[("id", "main"), ("class", "a b")]);
        assert!(matches("div", &div));
        assert!(matches("#main", &div));
        assert!(matches(".a", &div));
        assert!(matches(".b", &div));
        assert!(!matches(".c", &div));
        assert!(matches("div#main.a.b", &div));
    }

    #[test]
    fn descendant_and_child_combinators() {
        let root = Tree::elem("ul", &[]);
        let li = Tree::elem("li", &[]);
        let a = Tree::elem("a", &[]);
        li.append(a.clone());
        root.append(li.clone());

        assert!(matches("ul li", &li));
        assert!(matches("ul a", &a));
        assert!(matches("ul > li", &li));
        assert!(!matches("ul > a", &a));
    }

    #[test]
    fn adjacent_and_general_sibling() {
        let parent = Tree::elem("div", &[]);
        let first = Tree::elem("span", &[]);
        let second = Tree::elem("p", &[]);
        let third = Tree::elem("em", &[]);
        parent.append(first.clone());
        parent.append(second.clone());
        parent.append(third.clone());

        assert!(matches("span + p", &second));
        assert!(!matches("span + em", &third));
        assert!(matches("span ~ em", &third));
    }

    #[test]
    fn nth_child_and_structural_pseudo_classes() {
        let parent = Tree::elem("ul", &[]);
        let items: Vec<Tree> = (0..4).map(|_| Tree::elem("li", &[])).collect();
        for item in &items {
            parent.append(item.clone());
        }

        assert!(matches(":first-child", &items[0]));
        assert!(!matches(":first-child", &items[1]));
        assert!(matches(":last-child", &items[3]));
        assert!(matches(":nth-child(2n+1)", &items[0]));
        assert!(matches(":nth-child(2n+1)", &items[2]));
        assert!(!matches(":nth-child(2n+1)", &items[1]));
    }

    #[test]
    fn empty_and_root_pseudo_classes() {
        let root = Tree::elem("html", &[]);
        let empty = Tree::elem("div", &[]);
        let whitespace_only = Tree::elem("div", &[]);
        whitespace_only.append(Tree::text("   "));
        let non_empty = Tree::elem("div", &[]);
        non_empty.append(Tree::text("hi"));
        root.append(empty.clone());
        root.append(whitespace_only.clone());
        root.append(non_empty.clone());

        assert!(matches(":root", &root));
        assert!(!matches(":root", &empty));
        assert!(matches(":empty", &empty));
        assert!(matches(":empty", &whitespace_only));
        assert!(!matches(":empty", &non_empty));
    }

    #[test]
    fn not_pseudo_class() {
        let parent = Tree::elem("ul", &[]);
        let active = Tree::elem("li", &[("class", "active")]);
        let inactive = Tree::elem("li", &[]);
        parent.append(active.clone());
        parent.append(inactive.clone());

        assert!(matches("li:not(.active)", &inactive));
        assert!(!matches("li:not(.active)", &active));
    }

    #[test]
    fn attribute_operators() {
        let link = Tree::elem("a", &[("href", "https://example.com/page")]);
        assert!(matches("a[href]", &link));
        assert!(matches("a[href^=\"https\"]", &link));
        assert!(matches("a[href$=\"page\"]", &link));
        assert!(matches("a[href*=\"example\"]", &link));
        assert!(!matches("a[href*=\"nope\"]", &link));
    }
}
