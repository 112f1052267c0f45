// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The HTML5 tokenizer (§4.2).
//!
//! [`Tokenizer`] is pull-based: construct it over the whole document
//! text, then call [`Tokenizer::next`] until it returns [`Token::Eof`]
//! (after which it keeps returning `Eof`). Parse errors accumulate
//! out-of-band and are retrieved with [`Tokenizer::errors`].

mod char_ref;
pub mod states;
pub mod token;

use std::collections::HashSet;

use log::trace;

use self::states::{AttrValueKind, DoctypeIdKind, RawKind, ScriptEscapeKind, State};
use crate::util::str::{is_ascii_whitespace, lower_ascii};

pub use self::token::{Attribute, Doctype, ErrorCode, ParseError, Tag, TagKind, Token};

/// Options controlling tokenizer behavior that the document itself
/// doesn't determine (§4.2.7, §4.2.10).
#[derive(Debug, Clone, Copy)]
pub struct TokenizerOpts {
    /// Discard a single leading U+FEFF, as if the byte-level BOM that
    /// produced it had never been decoded into the text (§4.2.1).
    pub discard_bom: bool,
    /// Coerce a small set of HTML-only attribute spellings to their
    /// XML-legal form as they're emitted (§4.2.7).
    pub xml_coercion: bool,
}

impl Default for TokenizerOpts {
    fn default() -> Self {
        TokenizerOpts { discard_bom: true, xml_coercion: false }
    }
}

/// Attribute names the standard maps to a namespaced spelling when
/// producing XML-legal output, applied only when `xml_coercion` is set.
fn xml_coerce_attr_name(name: &str) -> Option<&'static str> {
    match name {
        "xlink:href" => Some("xlink:href"),
        "xml:lang" => Some("xml:lang"),
        "xmlns:xlink" => Some("xmlns:xlink"),
        _ => None,
    }
}

pub struct Tokenizer {
    input: Vec<char>,
    pos: usize,
    reconsume: bool,
    current_char: char,

    line: u64,
    column: u64,
    ignore_lf: bool,

    state: State,
    opts: TokenizerOpts,
    allow_cdata: bool,
    last_start_tag_name: Option<String>,

    tag_kind: TagKind,
    tag_name: String,
    tag_self_closing: bool,
    tag_attrs: Vec<Attribute>,
    seen_attr_names: HashSet<String>,
    attr_name: String,
    attr_value: String,
    attr_value_has_amp: bool,

    comment_buf: String,

    doctype: Doctype,

    /// Used by the raw-text end-tag-matching states and the
    /// script-data double-escape states (§4.2.9).
    temp_buf: Vec<char>,

    text_buf: String,
    text_buf_has_amp: bool,
    text_buf_line: u64,
    text_buf_column: u64,

    pending: Vec<Token>,
    errors: Vec<ParseError>,
    eof_emitted: bool,
}

impl Tokenizer {
    pub fn new(input: String) -> Tokenizer {
        Tokenizer::new_with_options(input, TokenizerOpts::default())
    }

    pub fn new_with_options(input: String, opts: TokenizerOpts) -> Tokenizer {
        let mut chars: Vec<char> = input.chars().collect();
        if opts.discard_bom && chars.first() == Some(&'\u{feff}') {
            chars.remove(0);
        }
        Tokenizer {
            input: chars,
            pos: 0,
            reconsume: false,
            current_char: '\0',
            line: 1,
            column: 0,
            ignore_lf: false,
            state: State::Data,
            opts,
            allow_cdata: false,
            last_start_tag_name: None,
            tag_kind: TagKind::StartTag,
            tag_name: String::new(),
            tag_self_closing: false,
            tag_attrs: Vec::new(),
            seen_attr_names: HashSet::new(),
            attr_name: String::new(),
            attr_value: String::new(),
            attr_value_has_amp: false,
            comment_buf: String::new(),
            doctype: Doctype::default(),
            temp_buf: Vec::new(),
            text_buf: String::new(),
            text_buf_has_amp: false,
            text_buf_line: 1,
            text_buf_column: 0,
            pending: Vec::new(),
            errors: Vec::new(),
            eof_emitted: false,
        }
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn set_state(&mut self, state: State) {
        self.state = state;
    }

    /// Sets the "appropriate end tag" context used to decide whether a
    /// RAWTEXT/RCDATA/script-data end tag closes the element (§4.2.9).
    pub fn set_last_start_tag(&mut self, name: Option<&str>) {
        self.last_start_tag_name = name.map(|n| n.to_string());
    }

    pub fn set_allow_cdata(&mut self, allow: bool) {
        self.allow_cdata = allow;
    }

    pub fn set_discard_bom(&mut self, discard: bool) {
        self.opts.discard_bom = discard;
    }

    pub fn set_xml_coercion(&mut self, coerce: bool) {
        self.opts.xml_coercion = coerce;
    }

    /// Pull the next token. Keeps returning [`Token::Eof`] forever
    /// once the input is exhausted (§3.6 invariant).
    pub fn next(&mut self) -> Token {
        if self.eof_emitted {
            return Token::Eof;
        }
        loop {
            if !self.pending.is_empty() {
                let tok = self.pending.remove(0);
                if tok == Token::Eof {
                    self.eof_emitted = true;
                }
                return tok;
            }
            self.step();
        }
    }

    // ---- character consumption (§4.2.2) ----

    fn consume(&mut self) -> Option<char> {
        if self.reconsume {
            self.reconsume = false;
            return Some(self.current_char);
        }
        loop {
            if self.pos >= self.input.len() {
                return None;
            }
            let raw = self.input[self.pos];
            self.pos += 1;

            let c = if raw == '\r' {
                self.ignore_lf = true;
                '\n'
            } else if raw == '\n' && self.ignore_lf {
                self.ignore_lf = false;
                continue;
            } else {
                self.ignore_lf = false;
                raw
            };

            if c == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
            self.check_input_stream_char(c);
            self.current_char = c;
            return Some(c);
        }
    }

    fn reconsume_current(&mut self) {
        self.reconsume = true;
    }

    fn check_input_stream_char(&mut self, c: char) {
        let n = c as u32;
        let is_control = matches!(n, 0x01..=0x08 | 0x0B | 0x0E..=0x1F | 0x7F..=0x9F)
            && !is_ascii_whitespace(c);
        if is_control {
            self.error(ErrorCode::ControlCharacterInInputStream);
        } else if (0xFDD0..=0xFDEF).contains(&n) || (n & 0xFFFE) == 0xFFFE {
            self.error(ErrorCode::NoncharacterInInputStream);
        }
    }

    fn error(&mut self, code: ErrorCode) {
        self.errors.push(ParseError { code, line: self.line, column: self.column });
    }

    fn error_at(&mut self, code: ErrorCode, line: u64, column: u64) {
        self.errors.push(ParseError { code, line, column });
    }

    // ---- text buffer (character references recognized only in Data
    // and RCDATA text; §4.2.4, §4.2.5) ----

    fn push_text(&mut self, c: char) {
        if self.text_buf.is_empty() {
            self.text_buf_line = self.line;
            self.text_buf_column = self.column;
        }
        if c == '&' {
            self.text_buf_has_amp = true;
        }
        self.text_buf.push(c);
    }

    fn flush_text(&mut self, refs_enabled: bool) {
        if self.text_buf.is_empty() {
            return;
        }
        let buf = std::mem::take(&mut self.text_buf);
        if refs_enabled && self.text_buf_has_amp {
            let (decoded, errs) =
                char_ref::decode_entities(&buf, false, self.text_buf_line, self.text_buf_column);
            for (code, line, column) in errs {
                self.error_at(code, line, column);
            }
            self.pending.push(Token::Character(decoded));
        } else {
            self.pending.push(Token::Character(buf));
        }
        self.text_buf_has_amp = false;
    }

    // ---- tag/attribute assembly (§4.2.6) ----

    fn start_tag(&mut self, kind: TagKind) {
        self.tag_kind = kind;
        self.tag_name.clear();
        self.tag_self_closing = false;
        self.tag_attrs.clear();
        self.seen_attr_names.clear();
    }

    fn start_attribute(&mut self) {
        self.finish_attribute();
        self.attr_name.clear();
        self.attr_value.clear();
        self.attr_value_has_amp = false;
    }

    fn finish_attribute(&mut self) {
        if self.attr_name.is_empty() {
            return;
        }
        let value = if self.attr_value_has_amp {
            let (decoded, errs) =
                char_ref::decode_entities(&self.attr_value, true, self.line, self.column);
            for (code, line, column) in errs {
                self.error_at(code, line, column);
            }
            decoded
        } else {
            std::mem::take(&mut self.attr_value)
        };
        let name = std::mem::take(&mut self.attr_name);
        if !self.seen_attr_names.insert(name.clone()) {
            self.error(ErrorCode::DuplicateAttribute);
            return;
        }
        let name = if self.opts.xml_coercion {
            xml_coerce_attr_name(&name).map(|n| n.to_string()).unwrap_or(name)
        } else {
            name
        };
        self.tag_attrs.push(Attribute { name, value });
    }

    fn emit_tag(&mut self) {
        self.finish_attribute();
        if self.tag_kind == TagKind::EndTag {
            if !self.tag_attrs.is_empty() {
                self.error(ErrorCode::EndTagWithAttributes);
            }
            if self.tag_self_closing {
                self.error(ErrorCode::EndTagWithTrailingSolidus);
            }
        } else {
            self.last_start_tag_name = Some(self.tag_name.clone());
        }
        let tag = Tag {
            kind: self.tag_kind,
            name: std::mem::take(&mut self.tag_name),
            self_closing: self.tag_self_closing,
            attrs: std::mem::take(&mut self.tag_attrs),
        };
        self.pending.push(match tag.kind {
            TagKind::StartTag => Token::StartTag(tag),
            TagKind::EndTag => Token::EndTag(tag),
        });
    }

    fn is_appropriate_end_tag(&self) -> bool {
        match &self.last_start_tag_name {
            Some(name) => *name == self.tag_name,
            None => false,
        }
    }

    // ---- comment/doctype helpers ----

    fn emit_comment(&mut self, eof_terminated: bool) {
        self.pending.push(Token::Comment {
            data: std::mem::take(&mut self.comment_buf),
            eof_terminated,
        });
    }

    fn new_doctype(&mut self) {
        self.doctype = Doctype::default();
    }

    fn emit_doctype(&mut self) {
        self.pending
            .push(Token::Doctype(std::mem::replace(&mut self.doctype, Doctype::default())));
    }

    // ---- the state machine (§4.2.3, §4.2.8) ----

    fn step(&mut self) {
        use State::*;
        trace!("tokenizer: state {:?}", self.state);
        match self.state {
            Data => self.step_data(),
            Plaintext => self.step_rawdata_generic(RawKind::Rawtext, true),
            RawData(kind) => self.step_rawdata(kind),
            RawLessThanSign(kind) => self.step_raw_less_than_sign(kind),
            RawEndTagOpen(kind) => self.step_raw_end_tag_open(kind),
            RawEndTagName(kind) => self.step_raw_end_tag_name(kind),
            ScriptDataEscapeStart(kind) => self.step_script_data_escape_start(kind),
            ScriptDataEscapeStartDash => self.step_script_data_escape_start_dash(),
            ScriptDataEscapedDash(kind) => self.step_script_data_escaped_dash(kind),
            ScriptDataEscapedDashDash(kind) => self.step_script_data_escaped_dash_dash(kind),
            ScriptDataDoubleEscapeEnd => self.step_script_data_double_escape_end(),
            TagOpen => self.step_tag_open(),
            EndTagOpen => self.step_end_tag_open(),
            TagName => self.step_tag_name(),
            BeforeAttributeName => self.step_before_attribute_name(),
            AttributeName => self.step_attribute_name(),
            AfterAttributeName => self.step_after_attribute_name(),
            BeforeAttributeValue => self.step_before_attribute_value(),
            AttributeValue(kind) => self.step_attribute_value(kind),
            AfterAttributeValueQuoted => self.step_after_attribute_value_quoted(),
            SelfClosingStartTag => self.step_self_closing_start_tag(),
            BogusComment => self.step_bogus_comment(),
            MarkupDeclarationOpen => self.step_markup_declaration_open(),
            CommentStart => self.step_comment_start(),
            CommentStartDash => self.step_comment_start_dash(),
            Comment => self.step_comment(),
            CommentLessThanSign => self.step_comment_less_than_sign(),
            CommentLessThanSignBang => self.step_comment_less_than_sign_bang(),
            CommentLessThanSignBangDash => self.step_comment_less_than_sign_bang_dash(),
            CommentLessThanSignBangDashDash => self.step_comment_less_than_sign_bang_dash_dash(),
            CommentEndDash => self.step_comment_end_dash(),
            CommentEnd => self.step_comment_end(),
            CommentEndBang => self.step_comment_end_bang(),
            Doctype => self.step_doctype(),
            BeforeDoctypeName => self.step_before_doctype_name(),
            DoctypeName => self.step_doctype_name(),
            AfterDoctypeName => self.step_after_doctype_name(),
            AfterDoctypeKeyword(kind) => self.step_after_doctype_keyword(kind),
            BeforeDoctypeIdentifier(kind) => self.step_before_doctype_identifier(kind),
            DoctypeIdentifierDoubleQuoted(kind) => self.step_doctype_identifier_quoted(kind, '"'),
            DoctypeIdentifierSingleQuoted(kind) => self.step_doctype_identifier_quoted(kind, '\''),
            AfterDoctypeIdentifier(kind) => self.step_after_doctype_identifier(kind),
            BetweenDoctypePublicAndSystemIdentifiers => {
                self.step_between_doctype_public_and_system_identifiers()
            },
            BogusDoctype => self.step_bogus_doctype(),
            CdataSection => self.step_cdata_section(),
            CdataSectionBracket => self.step_cdata_section_bracket(),
            CdataSectionEnd => self.step_cdata_section_end(),
        }
    }

    fn step_data(&mut self) {
        match self.consume() {
            Some('&') => self.push_text('&'),
            Some('<') => {
                self.flush_text(true);
                self.state = State::TagOpen;
            },
            Some('\0') => {
                self.error(ErrorCode::UnexpectedNullCharacter);
                self.push_text('\0');
            },
            Some(c) => self.push_text(c),
            None => {
                self.flush_text(true);
                self.pending.push(Token::Eof);
            },
        }
    }

    fn step_rawdata(&mut self, kind: RawKind) {
        self.step_rawdata_generic(kind, false)
    }

    /// Shared by PLAINTEXT, RCDATA, RAWTEXT and script-data-(escaped):
    /// only whether `<` starts a less-than-sign state differs.
    /// Character references are recognized only in RCDATA.
    fn step_rawdata_generic(&mut self, kind: RawKind, literal_lt: bool) {
        let refs_enabled = matches!(kind, RawKind::Rcdata);
        match self.consume() {
            Some('<') if !literal_lt => {
                self.flush_text(refs_enabled);
                self.state = State::RawLessThanSign(kind);
            },
            Some('\0') => {
                self.error(ErrorCode::UnexpectedNullCharacter);
                self.push_text('\u{fffd}');
            },
            Some(c) => self.push_text(c),
            None => {
                self.flush_text(refs_enabled);
                self.pending.push(Token::Eof);
            },
        }
    }

    fn step_raw_less_than_sign(&mut self, kind: RawKind) {
        match self.consume() {
            Some('/') => {
                self.temp_buf.clear();
                self.state = State::RawEndTagOpen(kind);
            },
            Some('!') if matches!(kind, RawKind::ScriptData) => {
                self.push_text('<');
                self.push_text('!');
                self.state = State::ScriptDataEscapeStart(ScriptEscapeKind::Escaped);
            },
            _ => {
                self.push_text('<');
                self.reconsume_current();
                self.state = State::RawData(kind);
            },
        }
    }

    fn step_raw_end_tag_open(&mut self, kind: RawKind) {
        match self.consume() {
            Some(c) if c.is_ascii_alphabetic() => {
                self.start_tag(TagKind::EndTag);
                self.temp_buf.push(c);
                self.reconsume_current();
                self.state = State::RawEndTagName(kind);
            },
            _ => {
                self.push_text('<');
                self.push_text('/');
                self.reconsume_current();
                self.state = State::RawData(kind);
            },
        }
    }

    fn step_raw_end_tag_name(&mut self, kind: RawKind) {
        match self.consume() {
            Some(c) if is_ascii_whitespace(c) && self.is_appropriate_end_tag() => {
                self.state = State::BeforeAttributeName;
            },
            Some('/') if self.is_appropriate_end_tag() => {
                self.state = State::SelfClosingStartTag;
            },
            Some('>') if self.is_appropriate_end_tag() => {
                self.emit_tag();
                self.state = State::Data;
            },
            Some(c) if c.is_ascii_alphabetic() => {
                self.tag_name.push(lower_ascii(c));
                self.temp_buf.push(c);
            },
            _ => {
                self.push_text('<');
                self.push_text('/');
                let buffered: Vec<char> = self.temp_buf.clone();
                for c in buffered {
                    self.push_text(c);
                }
                self.reconsume_current();
                self.state = State::RawData(kind);
            },
        }
    }

    fn step_script_data_escape_start(&mut self, _kind: ScriptEscapeKind) {
        match self.consume() {
            Some('-') => {
                self.push_text('-');
                self.state = State::ScriptDataEscapeStartDash;
            },
            _ => {
                self.reconsume_current();
                self.state = State::RawData(RawKind::ScriptData);
            },
        }
    }

    fn step_script_data_escape_start_dash(&mut self) {
        match self.consume() {
            Some('-') => {
                self.push_text('-');
                self.state = State::ScriptDataEscapedDashDash(ScriptEscapeKind::Escaped);
            },
            _ => {
                self.reconsume_current();
                self.state = State::RawData(RawKind::ScriptData);
            },
        }
    }

    fn step_script_data_escaped_dash(&mut self, kind: ScriptEscapeKind) {
        match self.consume() {
            Some('-') => {
                self.push_text('-');
                self.state = State::ScriptDataEscapedDashDash(kind);
            },
            Some('<') => {
                self.temp_buf.clear();
                self.state = State::RawLessThanSign(RawKind::ScriptDataEscaped(kind));
            },
            Some('\0') => {
                self.error(ErrorCode::UnexpectedNullCharacter);
                self.push_text('\u{fffd}');
                self.state = State::RawData(RawKind::ScriptDataEscaped(kind));
            },
            Some(c) => {
                self.push_text(c);
                self.state = State::RawData(RawKind::ScriptDataEscaped(kind));
            },
            None => {
                self.error(ErrorCode::EofInScriptHtmlCommentLikeText);
                self.flush_text(false);
                self.pending.push(Token::Eof);
            },
        }
    }

    fn step_script_data_escaped_dash_dash(&mut self, kind: ScriptEscapeKind) {
        match self.consume() {
            Some('-') => self.push_text('-'),
            Some('<') => {
                self.temp_buf.clear();
                self.state = State::RawLessThanSign(RawKind::ScriptDataEscaped(kind));
            },
            Some('>') => {
                self.push_text('>');
                self.state = State::RawData(RawKind::ScriptData);
            },
            Some('\0') => {
                self.error(ErrorCode::UnexpectedNullCharacter);
                self.push_text('\u{fffd}');
                self.state = State::RawData(RawKind::ScriptDataEscaped(kind));
            },
            Some(c) => {
                self.push_text(c);
                self.state = State::RawData(RawKind::ScriptDataEscaped(kind));
            },
            None => {
                self.error(ErrorCode::EofInScriptHtmlCommentLikeText);
                self.flush_text(false);
                self.pending.push(Token::Eof);
            },
        }
    }

    fn step_script_data_double_escape_end(&mut self) {
        match self.consume() {
            Some(c) if is_ascii_whitespace(c) || matches!(c, '/' | '>') => {
                self.push_text(c);
                let matches_script = self.temp_buf.iter().collect::<String>() == "script";
                self.state = State::RawData(RawKind::ScriptDataEscaped(if matches_script {
                    ScriptEscapeKind::Escaped
                } else {
                    ScriptEscapeKind::DoubleEscaped
                }));
            },
            Some(c) if c.is_ascii_alphabetic() => {
                self.temp_buf.push(lower_ascii(c));
                self.push_text(c);
            },
            _ => {
                self.reconsume_current();
                self.state =
                    State::RawData(RawKind::ScriptDataEscaped(ScriptEscapeKind::DoubleEscaped));
            },
        }
    }

    fn step_tag_open(&mut self) {
        match self.consume() {
            Some('!') => self.state = State::MarkupDeclarationOpen,
            Some('/') => self.state = State::EndTagOpen,
            Some(c) if c.is_ascii_alphabetic() => {
                self.start_tag(TagKind::StartTag);
                self.reconsume_current();
                self.state = State::TagName;
            },
            Some('?') => {
                self.error(ErrorCode::UnexpectedQuestionMarkInsteadOfTagName);
                self.comment_buf.clear();
                self.reconsume_current();
                self.state = State::BogusComment;
            },
            Some(_) => {
                self.error(ErrorCode::InvalidFirstCharacterOfTagName);
                self.push_text('<');
                self.reconsume_current();
                self.state = State::Data;
            },
            None => {
                self.error(ErrorCode::EofBeforeTagName);
                self.push_text('<');
                self.flush_text(true);
                self.pending.push(Token::Eof);
            },
        }
    }

    fn step_end_tag_open(&mut self) {
        match self.consume() {
            Some(c) if c.is_ascii_alphabetic() => {
                self.start_tag(TagKind::EndTag);
                self.reconsume_current();
                self.state = State::TagName;
            },
            Some('>') => {
                self.error(ErrorCode::MissingEndTagName);
                self.state = State::Data;
            },
            Some(_) => {
                self.error(ErrorCode::InvalidFirstCharacterOfTagName);
                self.comment_buf.clear();
                self.reconsume_current();
                self.state = State::BogusComment;
            },
            None => {
                self.error(ErrorCode::EofBeforeTagName);
                self.push_text('<');
                self.push_text('/');
                self.flush_text(true);
                self.pending.push(Token::Eof);
            },
        }
    }

    fn step_tag_name(&mut self) {
        match self.consume() {
            Some(c) if is_ascii_whitespace(c) => self.state = State::BeforeAttributeName,
            Some('/') => self.state = State::SelfClosingStartTag,
            Some('>') => {
                self.emit_tag();
                self.state = State::Data;
                self.dispatch_tag_content_state();
            },
            Some('\0') => {
                self.error(ErrorCode::UnexpectedNullCharacter);
                self.tag_name.push('\u{fffd}');
            },
            Some(c) => self.tag_name.push(lower_ascii(c)),
            None => {
                self.error(ErrorCode::EofInTag);
                self.pending.push(Token::Eof);
            },
        }
    }

    fn dispatch_tag_content_state(&mut self) {
        if self.tag_kind != TagKind::StartTag {
            return;
        }
        self.state = match self.tag_name.as_str() {
            "title" | "textarea" => State::RawData(RawKind::Rcdata),
            "script" => State::RawData(RawKind::ScriptData),
            "style" | "xmp" | "iframe" | "noembed" | "noframes" => {
                State::RawData(RawKind::Rawtext)
            },
            "plaintext" => State::Plaintext,
            _ => State::Data,
        };
    }

    fn step_before_attribute_name(&mut self) {
        match self.consume() {
            Some(c) if is_ascii_whitespace(c) => {},
            Some('/') | Some('>') | None => {
                self.reconsume_current();
                self.state = State::AfterAttributeName;
            },
            Some('=') => {
                self.error(ErrorCode::UnexpectedEqualsSignBeforeAttributeName);
                self.start_attribute();
                self.attr_name.push('=');
                self.state = State::AttributeName;
            },
            Some(_) => {
                self.start_attribute();
                self.reconsume_current();
                self.state = State::AttributeName;
            },
        }
    }

    fn step_attribute_name(&mut self) {
        match self.consume() {
            Some(c) if is_ascii_whitespace(c) || matches!(c, '/' | '>') => {
                self.reconsume_current();
                self.state = State::AfterAttributeName;
            },
            Some('=') => self.state = State::BeforeAttributeValue,
            Some('\0') => {
                self.error(ErrorCode::UnexpectedNullCharacter);
                self.attr_name.push('\u{fffd}');
            },
            Some(c) if matches!(c, '"' | '\'' | '<') => {
                self.error(ErrorCode::UnexpectedCharacterInAttributeName);
                self.attr_name.push(lower_ascii(c));
            },
            Some(c) => self.attr_name.push(lower_ascii(c)),
            None => {
                self.reconsume_current();
                self.state = State::AfterAttributeName;
            },
        }
    }

    fn step_after_attribute_name(&mut self) {
        match self.consume() {
            Some(c) if is_ascii_whitespace(c) => {},
            Some('/') => {
                self.state = State::SelfClosingStartTag;
            },
            Some('=') => self.state = State::BeforeAttributeValue,
            Some('>') => {
                self.emit_tag();
                self.state = State::Data;
                self.dispatch_tag_content_state();
            },
            Some(_) => {
                self.start_attribute();
                self.reconsume_current();
                self.state = State::AttributeName;
            },
            None => {
                self.error(ErrorCode::EofInTag);
                self.pending.push(Token::Eof);
            },
        }
    }

    fn step_before_attribute_value(&mut self) {
        match self.consume() {
            Some(c) if is_ascii_whitespace(c) => {},
            Some('"') => self.state = State::AttributeValue(AttrValueKind::DoubleQuoted),
            Some('\'') => self.state = State::AttributeValue(AttrValueKind::SingleQuoted),
            Some('>') => {
                self.error(ErrorCode::MissingAttributeValue);
                self.emit_tag();
                self.state = State::Data;
                self.dispatch_tag_content_state();
            },
            Some(_) => {
                self.reconsume_current();
                self.state = State::AttributeValue(AttrValueKind::Unquoted);
            },
            None => {
                self.error(ErrorCode::EofInTag);
                self.pending.push(Token::Eof);
            },
        }
    }

    fn step_attribute_value(&mut self, kind: AttrValueKind) {
        let closing_quote = match kind {
            AttrValueKind::DoubleQuoted => Some('"'),
            AttrValueKind::SingleQuoted => Some('\''),
            AttrValueKind::Unquoted => None,
        };
        match self.consume() {
            Some(c) if closing_quote == Some(c) => self.state = State::AfterAttributeValueQuoted,
            Some(c) if closing_quote.is_none() && is_ascii_whitespace(c) => {
                self.state = State::BeforeAttributeName;
            },
            Some('>') if closing_quote.is_none() => {
                self.emit_tag();
                self.state = State::Data;
                self.dispatch_tag_content_state();
            },
            Some('&') => {
                self.attr_value_has_amp = true;
                self.attr_value.push('&');
            },
            Some('\0') => {
                self.error(ErrorCode::UnexpectedNullCharacter);
                self.attr_value.push('\u{fffd}');
            },
            Some(c) if closing_quote.is_none() && matches!(c, '"' | '\'' | '<' | '=' | '`') => {
                self.error(ErrorCode::UnexpectedCharacterInUnquotedAttributeValue);
                self.attr_value.push(c);
            },
            Some(c) => self.attr_value.push(c),
            None => {
                self.error(ErrorCode::EofInTag);
                self.pending.push(Token::Eof);
            },
        }
    }

    fn step_after_attribute_value_quoted(&mut self) {
        match self.consume() {
            Some(c) if is_ascii_whitespace(c) => self.state = State::BeforeAttributeName,
            Some('/') => self.state = State::SelfClosingStartTag,
            Some('>') => {
                self.emit_tag();
                self.state = State::Data;
                self.dispatch_tag_content_state();
            },
            Some(_) => {
                self.error(ErrorCode::MissingWhitespaceBetweenAttributes);
                self.reconsume_current();
                self.state = State::BeforeAttributeName;
            },
            None => {
                self.error(ErrorCode::EofInTag);
                self.pending.push(Token::Eof);
            },
        }
    }

    fn step_self_closing_start_tag(&mut self) {
        match self.consume() {
            Some('>') => {
                self.tag_self_closing = true;
                self.emit_tag();
                self.state = State::Data;
                self.dispatch_tag_content_state();
            },
            Some(_) => {
                self.error(ErrorCode::UnexpectedSolidusInTag);
                self.reconsume_current();
                self.state = State::BeforeAttributeName;
            },
            None => {
                self.error(ErrorCode::EofInTag);
                self.pending.push(Token::Eof);
            },
        }
    }

    fn step_bogus_comment(&mut self) {
        match self.consume() {
            Some('>') => {
                self.emit_comment(false);
                self.state = State::Data;
            },
            Some('\0') => {
                self.error(ErrorCode::UnexpectedNullCharacter);
                self.comment_buf.push('\u{fffd}');
            },
            Some(c) => self.comment_buf.push(c),
            None => {
                self.emit_comment(true);
                self.pending.push(Token::Eof);
            },
        }
    }

    fn step_markup_declaration_open(&mut self) {
        if self.peek_matches("--") {
            self.advance_by(2);
            self.comment_buf.clear();
            self.state = State::CommentStart;
        } else if self.peek_matches_ignore_ascii_case("doctype") {
            self.advance_by(7);
            self.state = State::Doctype;
        } else if self.allow_cdata && self.peek_matches("[CDATA[") {
            self.advance_by(7);
            self.state = State::CdataSection;
        } else {
            if self.peek_matches("[CDATA[") {
                self.error(ErrorCode::CdataInHtmlContent);
            } else {
                self.error(ErrorCode::IncorrectlyOpenedComment);
            }
            self.comment_buf.clear();
            self.state = State::BogusComment;
        }
    }

    fn peek_matches(&self, s: &str) -> bool {
        s.chars().enumerate().all(|(i, c)| self.input.get(self.pos + i) == Some(&c))
    }

    fn peek_matches_ignore_ascii_case(&self, s: &str) -> bool {
        s.chars().enumerate().all(|(i, c)| {
            self.input.get(self.pos + i).is_some_and(|&x| lower_ascii(x) == lower_ascii(c))
        })
    }

    fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            self.consume();
        }
    }

    fn step_comment_start(&mut self) {
        match self.consume() {
            Some('-') => self.state = State::CommentStartDash,
            Some('>') => {
                self.error(ErrorCode::AbruptClosingOfEmptyComment);
                self.emit_comment(false);
                self.state = State::Data;
            },
            _ => {
                self.reconsume_current();
                self.state = State::Comment;
            },
        }
    }

    fn step_comment_start_dash(&mut self) {
        match self.consume() {
            Some('-') => self.state = State::CommentEnd,
            Some('>') => {
                self.error(ErrorCode::AbruptClosingOfEmptyComment);
                self.emit_comment(false);
                self.state = State::Data;
            },
            None => {
                self.error(ErrorCode::EofInComment);
                self.emit_comment(true);
                self.pending.push(Token::Eof);
            },
            _ => {
                self.comment_buf.push('-');
                self.reconsume_current();
                self.state = State::Comment;
            },
        }
    }

    fn step_comment(&mut self) {
        match self.consume() {
            Some('<') => {
                self.comment_buf.push('<');
                self.state = State::CommentLessThanSign;
            },
            Some('-') => self.state = State::CommentEndDash,
            Some('\0') => {
                self.error(ErrorCode::UnexpectedNullCharacter);
                self.comment_buf.push('\u{fffd}');
            },
            Some(c) => self.comment_buf.push(c),
            None => {
                self.error(ErrorCode::EofInComment);
                self.emit_comment(true);
                self.pending.push(Token::Eof);
            },
        }
    }

    fn step_comment_less_than_sign(&mut self) {
        match self.consume() {
            Some('!') => {
                self.comment_buf.push('!');
                self.state = State::CommentLessThanSignBang;
            },
            Some('<') => self.comment_buf.push('<'),
            _ => {
                self.reconsume_current();
                self.state = State::Comment;
            },
        }
    }

    fn step_comment_less_than_sign_bang(&mut self) {
        match self.consume() {
            Some('-') => self.state = State::CommentLessThanSignBangDash,
            _ => {
                self.reconsume_current();
                self.state = State::Comment;
            },
        }
    }

    fn step_comment_less_than_sign_bang_dash(&mut self) {
        match self.consume() {
            Some('-') => self.state = State::CommentLessThanSignBangDashDash,
            _ => {
                self.reconsume_current();
                self.state = State::CommentEndDash;
            },
        }
    }

    fn step_comment_less_than_sign_bang_dash_dash(&mut self) {
        match self.consume() {
            Some('>') | None => {
                self.reconsume_current();
                self.state = State::CommentEnd;
            },
            _ => {
                self.error(ErrorCode::NestedComment);
                self.reconsume_current();
                self.state = State::CommentEnd;
            },
        }
    }

    fn step_comment_end_dash(&mut self) {
        match self.consume() {
            Some('-') => self.state = State::CommentEnd,
            None => {
                self.error(ErrorCode::EofInComment);
                self.emit_comment(true);
                self.pending.push(Token::Eof);
            },
            _ => {
                self.comment_buf.push('-');
                self.reconsume_current();
                self.state = State::Comment;
            },
        }
    }

    fn step_comment_end(&mut self) {
        match self.consume() {
            Some('>') => {
                self.emit_comment(false);
                self.state = State::Data;
            },
            Some('!') => self.state = State::CommentEndBang,
            Some('-') => self.comment_buf.push('-'),
            None => {
                self.error(ErrorCode::EofInComment);
                self.emit_comment(true);
                self.pending.push(Token::Eof);
            },
            _ => {
                self.comment_buf.push('-');
                self.comment_buf.push('-');
                self.reconsume_current();
                self.state = State::Comment;
            },
        }
    }

    fn step_comment_end_bang(&mut self) {
        match self.consume() {
            Some('-') => {
                self.comment_buf.push('-');
                self.comment_buf.push('-');
                self.comment_buf.push('!');
                self.state = State::CommentEndDash;
            },
            Some('>') => {
                self.error(ErrorCode::IncorrectlyClosedComment);
                self.emit_comment(false);
                self.state = State::Data;
            },
            None => {
                self.error(ErrorCode::EofInComment);
                self.emit_comment(true);
                self.pending.push(Token::Eof);
            },
            _ => {
                self.comment_buf.push('-');
                self.comment_buf.push('-');
                self.comment_buf.push('!');
                self.reconsume_current();
                self.state = State::Comment;
            },
        }
    }

    fn step_doctype(&mut self) {
        match self.consume() {
            Some(c) if is_ascii_whitespace(c) => self.state = State::BeforeDoctypeName,
            None => {
                self.error(ErrorCode::EofInDoctype);
                self.new_doctype();
                self.doctype.force_quirks = true;
                self.emit_doctype();
                self.pending.push(Token::Eof);
            },
            _ => {
                self.error(ErrorCode::MissingWhitespaceBeforeDoctypeName);
                self.reconsume_current();
                self.state = State::BeforeDoctypeName;
            },
        }
    }

    fn step_before_doctype_name(&mut self) {
        match self.consume() {
            Some(c) if is_ascii_whitespace(c) => {},
            Some('\0') => {
                self.error(ErrorCode::UnexpectedNullCharacter);
                self.new_doctype();
                self.doctype.name = Some("\u{fffd}".to_string());
                self.state = State::DoctypeName;
            },
            Some('>') => {
                self.error(ErrorCode::MissingDoctypeName);
                self.new_doctype();
                self.doctype.force_quirks = true;
                self.emit_doctype();
                self.state = State::Data;
            },
            Some(c) => {
                self.new_doctype();
                self.doctype.name = Some(lower_ascii(c).to_string());
                self.state = State::DoctypeName;
            },
            None => {
                self.error(ErrorCode::EofInDoctype);
                self.new_doctype();
                self.doctype.force_quirks = true;
                self.emit_doctype();
                self.pending.push(Token::Eof);
            },
        }
    }

    fn step_doctype_name(&mut self) {
        match self.consume() {
            Some(c) if is_ascii_whitespace(c) => self.state = State::AfterDoctypeName,
            Some('>') => {
                self.emit_doctype();
                self.state = State::Data;
            },
            Some('\0') => {
                self.error(ErrorCode::UnexpectedNullCharacter);
                self.doctype.name.get_or_insert_with(String::new).push('\u{fffd}');
            },
            Some(c) => self.doctype.name.get_or_insert_with(String::new).push(lower_ascii(c)),
            None => {
                self.error(ErrorCode::EofInDoctype);
                self.doctype.force_quirks = true;
                self.emit_doctype();
                self.pending.push(Token::Eof);
            },
        }
    }

    fn step_after_doctype_name(&mut self) {
        match self.consume() {
            Some(c) if is_ascii_whitespace(c) => {},
            Some('>') => {
                self.emit_doctype();
                self.state = State::Data;
            },
            None => {
                self.error(ErrorCode::EofInDoctype);
                self.doctype.force_quirks = true;
                self.emit_doctype();
                self.pending.push(Token::Eof);
            },
            _ if self.peek_back_matches_ignore_ascii_case("public") => {
                self.advance_by(5);
                self.state = State::AfterDoctypeKeyword(DoctypeIdKind::Public);
            },
            _ if self.peek_back_matches_ignore_ascii_case("system") => {
                self.advance_by(5);
                self.state = State::AfterDoctypeKeyword(DoctypeIdKind::System);
            },
            _ => {
                self.error(ErrorCode::InvalidCharacterSequenceAfterDoctypeName);
                self.comment_buf.clear();
                self.reconsume_current();
                self.state = State::BogusDoctype;
            },
        }
    }

    /// The current character has already been consumed; checks
    /// whether it plus the next `keyword.len() - 1` characters spell
    /// `keyword` case-insensitively.
    fn peek_back_matches_ignore_ascii_case(&self, keyword: &str) -> bool {
        let mut chars = keyword.chars();
        let first = match chars.next() {
            Some(c) => c,
            None => return false,
        };
        if lower_ascii(self.current_char) != lower_ascii(first) {
            return false;
        }
        chars.enumerate().all(|(i, c)| {
            self.input.get(self.pos + i).is_some_and(|&x| lower_ascii(x) == lower_ascii(c))
        })
    }

    fn step_after_doctype_keyword(&mut self, kind: DoctypeIdKind) {
        let (missing_ws_err, missing_id_err, missing_quote_err) = match kind {
            DoctypeIdKind::Public => (
                ErrorCode::MissingWhitespaceAfterDoctypePublicKeyword,
                ErrorCode::MissingDoctypePublicIdentifier,
                ErrorCode::MissingQuoteBeforeDoctypePublicIdentifier,
            ),
            DoctypeIdKind::System => (
                ErrorCode::MissingWhitespaceAfterDoctypeSystemKeyword,
                ErrorCode::MissingDoctypeSystemIdentifier,
                ErrorCode::MissingQuoteBeforeDoctypeSystemIdentifier,
            ),
        };
        match self.consume() {
            Some(c) if is_ascii_whitespace(c) => {
                self.state = State::BeforeDoctypeIdentifier(kind);
            },
            Some('"') => {
                self.error(missing_ws_err);
                self.set_doctype_id(kind, String::new());
                self.state = State::DoctypeIdentifierDoubleQuoted(kind);
            },
            Some('\'') => {
                self.error(missing_ws_err);
                self.set_doctype_id(kind, String::new());
                self.state = State::DoctypeIdentifierSingleQuoted(kind);
            },
            Some('>') => {
                self.error(missing_id_err);
                self.doctype.force_quirks = true;
                self.emit_doctype();
                self.state = State::Data;
            },
            None => {
                self.error(ErrorCode::EofInDoctype);
                self.doctype.force_quirks = true;
                self.emit_doctype();
                self.pending.push(Token::Eof);
            },
            _ => {
                self.error(missing_quote_err);
                self.doctype.force_quirks = true;
                self.reconsume_current();
                self.state = State::BogusDoctype;
            },
        }
    }

    fn set_doctype_id(&mut self, kind: DoctypeIdKind, value: String) {
        match kind {
            DoctypeIdKind::Public => self.doctype.public_id = Some(value),
            DoctypeIdKind::System => self.doctype.system_id = Some(value),
        }
    }

    fn doctype_id_mut(&mut self, kind: DoctypeIdKind) -> &mut String {
        let slot = match kind {
            DoctypeIdKind::Public => &mut self.doctype.public_id,
            DoctypeIdKind::System => &mut self.doctype.system_id,
        };
        slot.get_or_insert_with(String::new)
    }

    fn step_before_doctype_identifier(&mut self, kind: DoctypeIdKind) {
        let missing_id_err = match kind {
            DoctypeIdKind::Public => ErrorCode::MissingDoctypePublicIdentifier,
            DoctypeIdKind::System => ErrorCode::MissingDoctypeSystemIdentifier,
        };
        let missing_quote_err = match kind {
            DoctypeIdKind::Public => ErrorCode::MissingQuoteBeforeDoctypePublicIdentifier,
            DoctypeIdKind::System => ErrorCode::MissingQuoteBeforeDoctypeSystemIdentifier,
        };
        match self.consume() {
            Some(c) if is_ascii_whitespace(c) => {},
            Some('"') => {
                self.set_doctype_id(kind, String::new());
                self.state = State::DoctypeIdentifierDoubleQuoted(kind);
            },
            Some('\'') => {
                self.set_doctype_id(kind, String::new());
                self.state = State::DoctypeIdentifierSingleQuoted(kind);
            },
            Some('>') => {
                self.error(missing_id_err);
                self.doctype.force_quirks = true;
                self.emit_doctype();
                self.state = State::Data;
            },
            None => {
                self.error(ErrorCode::EofInDoctype);
                self.doctype.force_quirks = true;
                self.emit_doctype();
                self.pending.push(Token::Eof);
            },
            _ => {
                self.error(missing_quote_err);
                self.doctype.force_quirks = true;
                self.reconsume_current();
                self.state = State::BogusDoctype;
            },
        }
    }

    fn step_doctype_identifier_quoted(&mut self, kind: DoctypeIdKind, quote: char) {
        match self.consume() {
            Some(c) if c == quote => self.state = State::AfterDoctypeIdentifier(kind),
            Some('\0') => {
                self.error(ErrorCode::UnexpectedNullCharacter);
                self.doctype_id_mut(kind).push('\u{fffd}');
            },
            Some('>') => {
                let err = match kind {
                    DoctypeIdKind::Public => ErrorCode::AbruptDoctypePublicIdentifier,
                    DoctypeIdKind::System => ErrorCode::AbruptDoctypeSystemIdentifier,
                };
                self.error(err);
                self.doctype.force_quirks = true;
                self.emit_doctype();
                self.state = State::Data;
            },
            Some(c) => self.doctype_id_mut(kind).push(c),
            None => {
                self.error(ErrorCode::EofInDoctype);
                self.doctype.force_quirks = true;
                self.emit_doctype();
                self.pending.push(Token::Eof);
            },
        }
    }

    fn step_after_doctype_identifier(&mut self, kind: DoctypeIdKind) {
        match self.consume() {
            Some(c) if is_ascii_whitespace(c) => {
                if kind == DoctypeIdKind::Public {
                    self.state = State::BetweenDoctypePublicAndSystemIdentifiers;
                }
            },
            Some('>') => {
                self.emit_doctype();
                self.state = State::Data;
            },
            None => {
                self.error(ErrorCode::EofInDoctype);
                self.doctype.force_quirks = true;
                self.emit_doctype();
                self.pending.push(Token::Eof);
            },
            Some('"') if kind == DoctypeIdKind::Public => {
                self.error(ErrorCode::MissingWhitespaceBetweenDoctypePublicAndSystemIdentifiers);
                self.set_doctype_id(DoctypeIdKind::System, String::new());
                self.state = State::DoctypeIdentifierDoubleQuoted(DoctypeIdKind::System);
            },
            Some('\'') if kind == DoctypeIdKind::Public => {
                self.error(ErrorCode::MissingWhitespaceBetweenDoctypePublicAndSystemIdentifiers);
                self.set_doctype_id(DoctypeIdKind::System, String::new());
                self.state = State::DoctypeIdentifierSingleQuoted(DoctypeIdKind::System);
            },
            _ => {
                self.error(ErrorCode::UnexpectedCharacterAfterDoctypeSystemIdentifier);
                self.reconsume_current();
                self.state = State::BogusDoctype;
            },
        }
    }

    fn step_between_doctype_public_and_system_identifiers(&mut self) {
        match self.consume() {
            Some(c) if is_ascii_whitespace(c) => {},
            Some('>') => {
                self.emit_doctype();
                self.state = State::Data;
            },
            Some('"') => {
                self.set_doctype_id(DoctypeIdKind::System, String::new());
                self.state = State::DoctypeIdentifierDoubleQuoted(DoctypeIdKind::System);
            },
            Some('\'') => {
                self.set_doctype_id(DoctypeIdKind::System, String::new());
                self.state = State::DoctypeIdentifierSingleQuoted(DoctypeIdKind::System);
            },
            None => {
                self.error(ErrorCode::EofInDoctype);
                self.doctype.force_quirks = true;
                self.emit_doctype();
                self.pending.push(Token::Eof);
            },
            _ => {
                self.error(ErrorCode::MissingQuoteBeforeDoctypeSystemIdentifier);
                self.doctype.force_quirks = true;
                self.reconsume_current();
                self.state = State::BogusDoctype;
            },
        }
    }

    fn step_bogus_doctype(&mut self) {
        match self.consume() {
            Some('>') => {
                self.emit_doctype();
                self.state = State::Data;
            },
            Some('\0') => self.error(ErrorCode::UnexpectedNullCharacter),
            Some(_) => {},
            None => {
                self.emit_doctype();
                self.pending.push(Token::Eof);
            },
        }
    }

    fn step_cdata_section(&mut self) {
        match self.consume() {
            Some(']') => self.state = State::CdataSectionBracket,
            Some(c) => self.push_text(c),
            None => {
                self.error(ErrorCode::EofInCdata);
                self.flush_text(false);
                self.pending.push(Token::Eof);
            },
        }
    }

    fn step_cdata_section_bracket(&mut self) {
        match self.consume() {
            Some(']') => self.state = State::CdataSectionEnd,
            _ => {
                self.push_text(']');
                self.reconsume_current();
                self.state = State::CdataSection;
            },
        }
    }

    fn step_cdata_section_end(&mut self) {
        match self.consume() {
            Some(']') => self.push_text(']'),
            Some('>') => {
                self.flush_text(false);
                self.state = State::Data;
            },
            _ => {
                self.push_text(']');
                self.push_text(']');
                self.reconsume_current();
                self.state = State::CdataSection;
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> Vec<Token> {
        let mut t = Tokenizer::new(input.to_string());
        let mut out = Vec::new();
        loop {
            match t.next() {
                Token::Eof => {
                    out.push(Token::Eof);
                    break;
                },
                tok => out.push(tok),
            }
        }
        out
    }

    #[test]
    fn simple_tag_and_text() {
        let toks = run("<p>hi</p>");
        assert_eq!(
            toks,
            vec![
                Token::StartTag(Tag {
                    kind: TagKind::StartTag,
                    name: "p".into(),
                    self_closing: false,
                    attrs: vec![],
                }),
                Token::Character("hi".into()),
                Token::EndTag(Tag {
                    kind: TagKind::EndTag,
                    name: "p".into(),
                    self_closing: false,
                    attrs: vec![],
                }),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn attribute_with_entity_and_duplicate() {
        let mut t = Tokenizer::new("<a href=\"x&amp;y\" href=\"z\">".to_string());
        let tok = t.next();
        match tok {
            Token::StartTag(tag) => {
                assert_eq!(tag.get_attribute("href"), Some("x&y"));
                assert_eq!(tag.attrs.len(), 1);
            },
            other => panic!("unexpected {other:?}"),
        }
        assert!(t.errors().iter().any(|e| e.code == ErrorCode::DuplicateAttribute));
    }

    #[test]
    fn title_is_rcdata_and_decodes_entities() {
        let mut t = Tokenizer::new("<title>A &amp; B</title>".to_string());
        assert!(matches!(t.next(), Token::StartTag(_)));
        assert_eq!(t.next(), Token::Character("A & B".into()));
        assert!(matches!(t.next(), Token::EndTag(_)));
    }

    #[test]
    fn script_is_rawtext_and_does_not_decode_entities() {
        let mut t = Tokenizer::new("<script>a&amp;b</script>".to_string());
        assert!(matches!(t.next(), Token::StartTag(_)));
        assert_eq!(t.next(), Token::Character("a&amp;b".into()));
        assert!(matches!(t.next(), Token::EndTag(_)));
    }

    #[test]
    fn crlf_normalized_to_single_newline() {
        let toks = run("a\r\nb\rc\nd");
        assert_eq!(toks, vec![Token::Character("a\nb\nc\nd".into()), Token::Eof]);
    }

    #[test]
    fn eof_repeats_forever() {
        let mut t = Tokenizer::new("x".to_string());
        assert_eq!(t.next(), Token::Character("x".into()));
        assert_eq!(t.next(), Token::Eof);
        assert_eq!(t.next(), Token::Eof);
        assert_eq!(t.next(), Token::Eof);
    }

    #[test]
    fn comment_is_recognized() {
        let toks = run("<!-- hi -->");
        assert_eq!(
            toks,
            vec![Token::Comment { data: " hi ".into(), eof_terminated: false }, Token::Eof]
        );
    }

    #[test]
    fn doctype_with_quirks_on_eof() {
        let mut t = Tokenizer::new("<!DOCTYPE".to_string());
        match t.next() {
            Token::Doctype(d) => assert!(d.force_quirks),
            other => panic!("unexpected {other:?}"),
        }
    }
}
