// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The token and parse-error types the tokenizer emits.

/// A `DOCTYPE` token.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct Doctype {
    pub name: Option<String>,
    pub public_id: Option<String>,
    pub system_id: Option<String>,
    pub force_quirks: bool,
}

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum TagKind {
    StartTag,
    EndTag,
}

/// A single attribute, in source order.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// A tag token. Attributes are retained on both start and end tags
/// (§4.2.6); a consumer that finds attributes on an end tag should
/// treat it as a parse condition of its own (`end-tag-with-attributes`
/// is recorded by the tokenizer already).
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Tag {
    pub kind: TagKind,
    pub name: String,
    pub self_closing: bool,
    pub attrs: Vec<Attribute>,
}

impl Tag {
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }
}

#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Token {
    Doctype(Doctype),
    StartTag(Tag),
    EndTag(Tag),
    Character(String),
    Comment { data: String, eof_terminated: bool },
    Eof,
}

/// A parse error, collected out-of-band (§3.3). The catalog below is
/// closed and taken from the WHATWG tokenization error list.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[non_exhaustive]
pub enum ErrorCode {
    UnexpectedNullCharacter,
    UnexpectedQuestionMarkInsteadOfTagName,
    EofBeforeTagName,
    InvalidFirstCharacterOfTagName,
    MissingEndTagName,
    EofInTag,
    UnexpectedEqualsSignBeforeAttributeName,
    UnexpectedCharacterInAttributeName,
    MissingAttributeValue,
    UnexpectedCharacterInUnquotedAttributeValue,
    MissingWhitespaceBetweenAttributes,
    UnexpectedSolidusInTag,
    DuplicateAttribute,
    EndTagWithAttributes,
    EndTagWithTrailingSolidus,
    CdataInHtmlContent,
    IncorrectlyOpenedComment,
    AbruptClosingOfEmptyComment,
    EofInComment,
    NestedComment,
    IncorrectlyClosedComment,
    EofInDoctype,
    MissingWhitespaceBeforeDoctypeName,
    MissingDoctypeName,
    InvalidCharacterSequenceAfterDoctypeName,
    MissingWhitespaceAfterDoctypePublicKeyword,
    MissingDoctypePublicIdentifier,
    MissingQuoteBeforeDoctypePublicIdentifier,
    AbruptDoctypePublicIdentifier,
    MissingWhitespaceBetweenDoctypePublicAndSystemIdentifiers,
    MissingWhitespaceAfterDoctypeSystemKeyword,
    MissingDoctypeSystemIdentifier,
    MissingQuoteBeforeDoctypeSystemIdentifier,
    AbruptDoctypeSystemIdentifier,
    UnexpectedCharacterAfterDoctypeSystemIdentifier,
    EofInCdata,
    AbsenceOfDigitsInNumericCharacterReference,
    NullCharacterReference,
    CharacterReferenceOutsideUnicodeRange,
    SurrogateCharacterReference,
    NoncharacterCharacterReference,
    ControlCharacterReference,
    MissingSemicolonAfterCharacterReference,
    UnknownNamedCharacterReference,
    EofInScriptHtmlCommentLikeText,
    ControlCharacterInInputStream,
    NoncharacterInInputStream,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        use ErrorCode::*;
        match self {
            UnexpectedNullCharacter => "unexpected-null-character",
            UnexpectedQuestionMarkInsteadOfTagName => "unexpected-question-mark-instead-of-tag-name",
            EofBeforeTagName => "eof-before-tag-name",
            InvalidFirstCharacterOfTagName => "invalid-first-character-of-tag-name",
            MissingEndTagName => "missing-end-tag-name",
            EofInTag => "eof-in-tag",
            UnexpectedEqualsSignBeforeAttributeName => "unexpected-equals-sign-before-attribute-name",
            UnexpectedCharacterInAttributeName => "unexpected-character-in-attribute-name",
            MissingAttributeValue => "missing-attribute-value",
            UnexpectedCharacterInUnquotedAttributeValue => {
                "unexpected-character-in-unquoted-attribute-value"
            },
            MissingWhitespaceBetweenAttributes => "missing-whitespace-between-attributes",
            UnexpectedSolidusInTag => "unexpected-solidus-in-tag",
            DuplicateAttribute => "duplicate-attribute",
            EndTagWithAttributes => "end-tag-with-attributes",
            EndTagWithTrailingSolidus => "end-tag-with-trailing-solidus",
            CdataInHtmlContent => "cdata-in-html-content",
            IncorrectlyOpenedComment => "incorrectly-opened-comment",
            AbruptClosingOfEmptyComment => "abrupt-closing-of-empty-comment",
            EofInComment => "eof-in-comment",
            NestedComment => "nested-comment",
            IncorrectlyClosedComment => "incorrectly-closed-comment",
            EofInDoctype => "eof-in-doctype",
            MissingWhitespaceBeforeDoctypeName => "missing-whitespace-before-doctype-name",
            MissingDoctypeName => "missing-doctype-name",
            InvalidCharacterSequenceAfterDoctypeName => {
                "invalid-character-sequence-after-doctype-name"
            },
            MissingWhitespaceAfterDoctypePublicKeyword => {
                "missing-whitespace-after-doctype-public-keyword"
            },
            MissingDoctypePublicIdentifier => "missing-doctype-public-identifier",
            MissingQuoteBeforeDoctypePublicIdentifier => {
                "missing-quote-before-doctype-public-identifier"
            },
            AbruptDoctypePublicIdentifier => "abrupt-doctype-public-identifier",
            MissingWhitespaceBetweenDoctypePublicAndSystemIdentifiers => {
                "missing-whitespace-between-doctype-public-and-system-identifiers"
            },
            MissingWhitespaceAfterDoctypeSystemKeyword => {
                "missing-whitespace-after-doctype-system-keyword"
            },
            MissingDoctypeSystemIdentifier => "missing-doctype-system-identifier",
            MissingQuoteBeforeDoctypeSystemIdentifier => {
                "missing-quote-before-doctype-system-identifier"
            },
            AbruptDoctypeSystemIdentifier => "abrupt-doctype-system-identifier",
            UnexpectedCharacterAfterDoctypeSystemIdentifier => {
                "unexpected-character-after-doctype-system-identifier"
            },
            EofInCdata => "eof-in-cdata",
            AbsenceOfDigitsInNumericCharacterReference => {
                "absence-of-digits-in-numeric-character-reference"
            },
            NullCharacterReference => "null-character-reference",
            CharacterReferenceOutsideUnicodeRange => "character-reference-outside-unicode-range",
            SurrogateCharacterReference => "surrogate-character-reference",
            NoncharacterCharacterReference => "noncharacter-character-reference",
            ControlCharacterReference => "control-character-reference",
            MissingSemicolonAfterCharacterReference => "missing-semicolon-after-character-reference",
            UnknownNamedCharacterReference => "unknown-named-character-reference",
            EofInScriptHtmlCommentLikeText => "eof-in-script-html-comment-like-text",
            ControlCharacterInInputStream => "control-character-in-input-stream",
            NoncharacterInInputStream => "noncharacter-in-input-stream",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct ParseError {
    pub code: ErrorCode,
    pub line: u64,
    pub column: u64,
}
