// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The selector parser (§4.3.2).
//!
//! ```text
//! selector-list = complex ("," complex)*
//! complex       = compound (combinator compound)*
//! compound      = simple+
//! simple        = tag | universal | id | class | attribute | pseudo
//! attribute     = "[" ident (op string)? "]"
//! pseudo        = ":" ident ( "(" <raw args> ")" )?
//! ```

use crate::selector::ast::{
    AttrOp, Combinator, CompoundSelector, ComplexPart, ComplexSelector, PseudoClass,
    SelectorList, SimpleSelector,
};
use crate::selector::lexer::{AttrOp0, Lexer, Token};
use crate::selector::nth::NthExpr;
use crate::selector::SelectorError;

pub fn parse(input: &str) -> Result<SelectorList, SelectorError> {
    let mut parser = Parser { lexer: Lexer::new(input), selector: input.to_string(), tok: Token::Eof };
    parser.bump();
    let list = parser.parse_selector_list()?;
    parser.expect_eof()?;
    Ok(list)
}

struct Parser {
    lexer: Lexer,
    selector: String,
    tok: Token,
}

impl Parser {
    fn bump(&mut self) -> Token {
        let prev = self.tok.clone();
        self.tok = self.lexer.next_token();
        prev
    }

    fn err(&self, message: impl Into<String>) -> SelectorError {
        SelectorError { selector: self.selector.clone(), position: self.lexer.pos(), message: message.into() }
    }

    fn expect_eof(&self) -> Result<(), SelectorError> {
        if self.tok == Token::Eof {
            Ok(())
        } else {
            Err(self.err(format!("unexpected token {:?}", self.tok)))
        }
    }

    fn parse_selector_list(&mut self) -> Result<SelectorList, SelectorError> {
        let mut selectors = vec![self.parse_complex()?];
        while self.tok == Token::Comma {
            self.bump();
            selectors.push(self.parse_complex()?);
        }
        Ok(SelectorList { selectors })
    }

    fn parse_complex(&mut self) -> Result<ComplexSelector, SelectorError> {
        let first = self.parse_compound()?;
        let mut parts = vec![ComplexPart { combinator: Combinator::None, compound: first }];

        loop {
            let combinator = match self.tok {
                Token::Combinator(c) => {
                    self.bump();
                    c
                },
                Token::Tag(_)
                | Token::Id(_)
                | Token::Class(_)
                | Token::Universal
                | Token::Colon
                | Token::LBracket => Combinator::Descendant,
                _ => break,
            };
            let compound = self.parse_compound()?;
            parts.push(ComplexPart { combinator, compound });
        }

        Ok(ComplexSelector { parts })
    }

    fn parse_compound(&mut self) -> Result<CompoundSelector, SelectorError> {
        let mut simple_selectors = Vec::new();
        loop {
            match self.tok.clone() {
                Token::Tag(name) => {
                    self.bump();
                    simple_selectors.push(SimpleSelector::Tag(name));
                },
                Token::Universal => {
                    self.bump();
                    simple_selectors.push(SimpleSelector::Universal);
                },
                Token::Id(name) => {
                    self.bump();
                    simple_selectors.push(SimpleSelector::Id(name));
                },
                Token::Class(name) => {
                    self.bump();
                    simple_selectors.push(SimpleSelector::Class(name));
                },
                Token::LBracket => {
                    simple_selectors.push(self.parse_attribute()?);
                },
                Token::Colon => {
                    simple_selectors.push(self.parse_pseudo()?);
                },
                _ => break,
            }
        }
        if simple_selectors.is_empty() {
            return Err(self.err("expected a selector"));
        }
        Ok(CompoundSelector { simple_selectors })
    }

    fn parse_attribute(&mut self) -> Result<SimpleSelector, SelectorError> {
        self.bump(); // consume '['
        let name = match self.bump() {
            Token::Tag(name) => name,
            other => return Err(self.err(format!("expected attribute name, found {:?}", other))),
        };

        let op = match self.tok.clone() {
            Token::RBracket => AttrOp::Exists,
            Token::AttrOp(op0) => {
                self.bump();
                let value = match self.bump() {
                    Token::Str(s) => s,
                    Token::Tag(s) => s,
                    other => return Err(self.err(format!("expected attribute value, found {:?}", other))),
                };
                match op0 {
                    AttrOp0::Equals => AttrOp::Equals(value),
                    AttrOp0::Includes => AttrOp::Includes(value),
                    AttrOp0::DashMatch => AttrOp::DashPrefix(value),
                    AttrOp0::PrefixMatch => AttrOp::PrefixMatch(value),
                    AttrOp0::SuffixMatch => AttrOp::SuffixMatch(value),
                    AttrOp0::Substring => AttrOp::Substring(value),
                }
            },
            other => return Err(self.err(format!("expected ']' or operator, found {:?}", other))),
        };

        if self.tok != Token::RBracket {
            return Err(self.err(format!("expected ']', found {:?}", self.tok)));
        }
        self.bump();

        Ok(SimpleSelector::Attr { name, op })
    }

    fn parse_pseudo(&mut self) -> Result<SimpleSelector, SelectorError> {
        self.bump(); // consume ':'
        let name = match self.bump() {
            Token::Tag(name) => name,
            other => return Err(self.err(format!("expected pseudo-class name, found {:?}", other))),
        };

        if self.tok == Token::LParen {
            self.bump();
            let args = self.lexer.capture_paren_args().ok_or_else(|| self.err("unterminated '('"))?;
            self.tok = self.lexer.next_token();
            self.parse_functional_pseudo(&name, args.trim())
        } else {
            self.parse_structural_pseudo(&name)
        }
    }

    fn parse_structural_pseudo(&self, name: &str) -> Result<SimpleSelector, SelectorError> {
        let pseudo = match name {
            "first-child" => PseudoClass::FirstChild,
            "last-child" => PseudoClass::LastChild,
            "only-child" => PseudoClass::OnlyChild,
            "first-of-type" => PseudoClass::FirstOfType,
            "last-of-type" => PseudoClass::LastOfType,
            "only-of-type" => PseudoClass::OnlyOfType,
            "empty" => PseudoClass::Empty,
            "root" => PseudoClass::Root,
            _ => PseudoClass::Unknown(name.to_string()),
        };
        Ok(SimpleSelector::Pseudo(pseudo))
    }

    fn parse_functional_pseudo(&self, name: &str, args: &str) -> Result<SimpleSelector, SelectorError> {
        let pseudo = match name {
            "nth-child" => PseudoClass::NthChild(self.parse_nth(args)?),
            "nth-last-child" => PseudoClass::NthLastChild(self.parse_nth(args)?),
            "nth-of-type" => PseudoClass::NthOfType(self.parse_nth(args)?),
            "nth-last-of-type" => PseudoClass::NthLastOfType(self.parse_nth(args)?),
            "not" => {
                if args.is_empty() {
                    PseudoClass::Not(None)
                } else {
                    match parse(args) {
                        Ok(list) => PseudoClass::Not(Some(Box::new(list))),
                        Err(_) => PseudoClass::Not(None),
                    }
                }
            },
            _ => PseudoClass::Unknown(name.to_string()),
        };
        Ok(SimpleSelector::Pseudo(pseudo))
    }

    fn parse_nth(&self, args: &str) -> Result<NthExpr, SelectorError> {
        NthExpr::parse(args).ok_or_else(|| self.err(format!("malformed An+B expression '{}'", args)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_ok(input: &str) -> SelectorList {
        parse(input).unwrap_or_else(|e| panic!("failed to parse {:?}: {}", input, e))
    }

    #[test]
    fn single_tag() {
        let list = parse_ok("div");
        assert_eq!(list.selectors.len(), 1);
        assert_eq!(list.selectors[0].parts.len(), 1);
        assert_eq!(
            list.selectors[0].parts[0].compound.simple_selectors,
            vec![SimpleSelector::Tag("div".into())]
        );
    }

    #[test]
    fn compound_with_id_and_class() {
        let list = parse_ok("div#main.active");
        let compound = &list.selectors[0].parts[0].compound;
        assert_eq!(
            compound.simple_selectors,
            vec![
                SimpleSelector::Tag("div".into()),
                SimpleSelector::Id("main".into()),
                SimpleSelector::Class("active".into()),
            ]
        );
    }

    #[test]
    fn descendant_and_child_combinators() {
        let list = parse_ok("ul > li a");
        let parts = &list.selectors[0].parts;
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].combinator, Combinator::None);
        assert_eq!(parts[1].combinator, Combinator::Child);
        assert_eq!(parts[2].combinator, Combinator::Descendant);
    }

    #[test]
    fn selector_list_splits_on_comma() {
        let list = parse_ok("h1, h2");
        assert_eq!(list.selectors.len(), 2);
    }

    #[test]
    fn attribute_selector_with_operator() {
        let list = parse_ok("a[href^=\"https\"]");
        let compound = &list.selectors[0].parts[0].compound;
        assert_eq!(
            compound.simple_selectors[1],
            SimpleSelector::Attr { name: "href".into(), op: AttrOp::PrefixMatch("https".into()) }
        );
    }

    #[test]
    fn attribute_selector_exists_only() {
        let list = parse_ok("input[disabled]");
        let compound = &list.selectors[0].parts[0].compound;
        assert_eq!(compound.simple_selectors[1], SimpleSelector::Attr { name: "disabled".into(), op: AttrOp::Exists });
    }

    #[test]
    fn nth_child_pseudo_class() {
        let list = parse_ok("li:nth-child(2n+1)");
        let compound = &list.selectors[0].parts[0].compound;
        assert_eq!(
            compound.simple_selectors[1],
            SimpleSelector::Pseudo(PseudoClass::NthChild(NthExpr { a: 2, b: 1 }))
        );
    }

    #[test]
    fn not_with_nested_selector() {
        let list = parse_ok("li:not(.active)");
        match &list.selectors[0].parts[0].compound.simple_selectors[1] {
            SimpleSelector::Pseudo(PseudoClass::Not(Some(inner))) => {
                assert_eq!(inner.selectors.len(), 1);
                assert_eq!(
                    inner.selectors[0].parts[0].compound.simple_selectors,
                    vec![SimpleSelector::Class("active".into())]
                );
            },
            other => panic!("expected Not(Some(..)), got {:?}", other),
        }
    }

    #[test]
    fn not_with_malformed_argument_matches_nothing() {
        let list = parse_ok("li:not(!!!)");
        match &list.selectors[0].parts[0].compound.simple_selectors[1] {
            SimpleSelector::Pseudo(PseudoClass::Not(None)) => {},
            other => panic!("expected Not(None), got {:?}", other),
        }
    }

    #[test]
    fn empty_compound_is_an_error() {
        assert!(parse(":").is_err());
        assert!(parse("").is_err());
    }

    #[test]
    fn unknown_pseudo_class_parses_and_matches_nothing() {
        let list = parse_ok(":bogus");
        assert_eq!(
            list.selectors[0].parts[0].compound.simple_selectors,
            vec![SimpleSelector::Pseudo(PseudoClass::Unknown("bogus".into()))]
        );
    }

    #[test]
    fn unknown_functional_pseudo_class_parses_and_matches_nothing() {
        let list = parse_ok(":hover(foo)");
        assert_eq!(
            list.selectors[0].parts[0].compound.simple_selectors,
            vec![SimpleSelector::Pseudo(PseudoClass::Unknown("hover".into()))]
        );
    }
}
