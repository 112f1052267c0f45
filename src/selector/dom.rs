// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The abstract DOM the matcher runs against (§6.3).
//!
//! The selector engine doesn't own a tree type; callers implement
//! [`Node`] over whatever document representation they have.

/// Well-known namespace URIs, used by [`Node::namespace`].
pub mod ns {
    pub const HTML: &str = "http://www.w3.org/1999/xhtml";
    pub const SVG: &str = "http://www.w3.org/2000/svg";
    pub const MATHML: &str = "http://www.w3.org/1998/Math/MathML";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Element,
    Text,
    Comment,
    Document,
    DocumentFragment,
    DocumentType,
}

/// A node in the tree the matcher walks. Implementors typically wrap a
/// handle (index, `Rc`, arena id) rather than owning data directly, so
/// `Node` is required to be cheap to clone.
pub trait Node: Clone + PartialEq {
    fn kind(&self) -> NodeKind;

    fn parent(&self) -> Option<Self>;

    /// Children in document order, including non-element nodes.
    fn children(&self) -> Vec<Self>;

    /// Case-sensitivity follows the element's namespace: HTML tag names
    /// compare ASCII case-insensitively, everything else exactly
    /// (§4.3.4). Always lower-case for an HTML element.
    fn tag_name(&self) -> Option<&str>;

    fn namespace(&self) -> Option<&str>;

    fn attribute_value(&self, name: &str) -> Option<&str>;

    fn has_attribute(&self, name: &str) -> bool {
        self.attribute_value(name).is_some()
    }

    fn id(&self) -> Option<&str> {
        self.attribute_value("id")
    }

    fn has_class(&self, name: &str) -> bool {
        match self.attribute_value("class") {
            Some(classes) => classes.split_ascii_whitespace().any(|c| c == name),
            None => false,
        }
    }

    /// Text content, for nodes of kind [`NodeKind::Text`].
    fn text(&self) -> Option<&str> {
        None
    }

    fn is_element(&self) -> bool {
        self.kind() == NodeKind::Element
    }

    fn is_html(&self) -> bool {
        self.namespace().map(|ns| ns == ns::HTML).unwrap_or(false)
    }

    /// Element children, in document order.
    fn element_children(&self) -> Vec<Self> {
        self.children().into_iter().filter(|c| c.is_element()).collect()
    }
}
