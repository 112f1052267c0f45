// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The selector AST (§3.4).

use crate::selector::nth::NthExpr;

/// One condition on an element (§4.3.4).
#[derive(Debug, Clone, PartialEq)]
pub enum SimpleSelector {
    Tag(String),
    Universal,
    Id(String),
    Class(String),
    Attr { name: String, op: AttrOp },
    Pseudo(PseudoClass),
}

/// Attribute-selector comparison operators (§4.3.4).
#[derive(Debug, Clone, PartialEq)]
pub enum AttrOp {
    Exists,
    Equals(String),
    Includes(String),
    DashPrefix(String),
    PrefixMatch(String),
    SuffixMatch(String),
    Substring(String),
}

/// Structural and functional pseudo-classes (§4.3.4, §4.3.6).
#[derive(Debug, Clone, PartialEq)]
pub enum PseudoClass {
    FirstChild,
    LastChild,
    OnlyChild,
    NthChild(NthExpr),
    NthLastChild(NthExpr),
    FirstOfType,
    LastOfType,
    OnlyOfType,
    NthOfType(NthExpr),
    NthLastOfType(NthExpr),
    Empty,
    Root,
    /// `arg == ""` matches everything; a `Not` that failed to parse its
    /// argument carries `None` and matches nothing (§4.3.6).
    Not(Option<Box<SelectorList>>),
    /// A well-formed but unsupported pseudo-class name (e.g. `:hover`).
    /// Matches nothing rather than failing the whole selector (§4.3.4).
    Unknown(String),
}

/// A sequence of simple selectors with no combinator between them; all
/// must match the same element (§3.4).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompoundSelector {
    pub simple_selectors: Vec<SimpleSelector>,
}

/// The relationship a compound selector has to the one before it in a
/// complex selector (§3.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// Only the first part of a complex selector carries this.
    None,
    Descendant,
    Child,
    AdjacentSibling,
    GeneralSibling,
}

/// One step of a complex selector: how it relates to the previous step,
/// plus the compound it must match.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexPart {
    pub combinator: Combinator,
    pub compound: CompoundSelector,
}

/// A chain of compound selectors joined by combinators, in source
/// (left-to-right) order. The rightmost part is the selector's subject.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComplexSelector {
    pub parts: Vec<ComplexPart>,
}

impl ComplexSelector {
    pub fn subject(&self) -> &CompoundSelector {
        &self.parts.last().expect("complex selector has at least one part").compound
    }
}

/// A comma-separated list of complex selectors; matches if any member
/// does (§3.4).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectorList {
    pub selectors: Vec<ComplexSelector>,
}
