// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The bounded `<meta charset>` prescan (§4.1.3).
//!
//! Operates directly on bytes, before any encoding has been chosen —
//! this is deliberately not UTF-8 aware; tag and attribute
//! punctuation (`<`, `>`, `"`, `'`, `=`) is the same single byte in
//! every encoding this crate supports.

use crate::encoding::{normalize_label, Encoding};
use crate::util::str::is_ascii_whitespace;

const NON_COMMENT_BUDGET: usize = 1024;
const ABSOLUTE_CEILING: usize = 65_536;

struct MetaAttrs {
    charset: Option<String>,
    http_equiv: Option<String>,
    content: Option<String>,
}

/// Scan up to the first 1024 non-comment bytes (within a 65536-byte
/// absolute ceiling) of `bytes` for a recognized `<meta charset>` or
/// `<meta http-equiv=content-type content=...charset=...>`
/// declaration.
pub fn prescan_meta_charset(bytes: &[u8]) -> Option<Encoding> {
    let scan_len = bytes.len().min(ABSOLUTE_CEILING);
    let bytes = &bytes[..scan_len];
    let mut pos = 0usize;
    let mut budget_used = 0usize;

    while pos < bytes.len() && budget_used < NON_COMMENT_BUDGET {
        if bytes[pos] != b'<' {
            pos += 1;
            budget_used += 1;
            continue;
        }

        if bytes[pos..].starts_with(b"<!--") {
            pos = skip_comment(bytes, pos);
            continue;
        }

        if is_meta_tag_start(&bytes[pos..]) {
            let before = pos;
            let (attrs, next) = scan_meta_attributes(bytes, pos + 5);
            pos = next;
            budget_used += pos - before;
            if let Some(attrs) = attrs {
                if let Some(encoding) = extract_from_attrs(&attrs) {
                    return Some(encoding);
                }
            }
            continue;
        }

        if looks_like_tag_start(&bytes[pos..]) {
            let before = pos;
            pos = skip_to_tag_end(bytes, pos);
            budget_used += pos - before;
            continue;
        }

        pos += 1;
        budget_used += 1;
    }

    None
}

fn is_meta_tag_start(bytes: &[u8]) -> bool {
    if bytes.len() < 5 || !bytes[..5].eq_ignore_ascii_case(b"<meta") {
        return false;
    }
    matches!(
        bytes.get(5),
        Some(b) if is_ascii_whitespace(*b as char) || *b == b'/' || *b == b'>'
    )
}

fn looks_like_tag_start(bytes: &[u8]) -> bool {
    match bytes.get(1) {
        Some(b'a'..=b'z' | b'A'..=b'Z' | b'!' | b'?') => true,
        Some(b'/') => matches!(bytes.get(2), Some(b'a'..=b'z' | b'A'..=b'Z')),
        _ => false,
    }
}

/// Skip an HTML comment; consumed bytes do not count against the
/// non-comment budget. An unterminated comment consumes to the scan
/// boundary.
fn skip_comment(bytes: &[u8], pos: usize) -> usize {
    let search_from = pos + 4;
    match find_subslice(&bytes[search_from..], b"-->") {
        Some(offset) => search_from + offset + 3,
        None => bytes.len(),
    }
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Skip a non-meta tag to its closing `>`, honoring quoted regions.
fn skip_to_tag_end(bytes: &[u8], mut pos: usize) -> usize {
    let mut quote: Option<u8> = None;
    while pos < bytes.len() {
        let b = bytes[pos];
        match quote {
            Some(q) => {
                if b == q {
                    quote = None;
                }
            },
            None => match b {
                b'"' | b'\'' => quote = Some(b),
                b'>' => return pos + 1,
                _ => {},
            },
        }
        pos += 1;
    }
    pos
}

/// Parse `<meta`'s attributes up to `>`. Returns `None` if an unclosed
/// quoted value is encountered (the whole meta tag is abandoned).
fn scan_meta_attributes(bytes: &[u8], mut pos: usize) -> (Option<MetaAttrs>, usize) {
    let mut attrs = MetaAttrs {
        charset: None,
        http_equiv: None,
        content: None,
    };

    loop {
        while matches!(bytes.get(pos), Some(b) if is_ascii_whitespace(*b as char) || *b == b'/') {
            pos += 1;
        }
        match bytes.get(pos) {
            None => return (None, bytes.len()),
            Some(b'>') => return (Some(attrs), pos + 1),
            _ => {},
        }

        let name_start = pos;
        while matches!(bytes.get(pos), Some(b) if !matches!(b, b'='|b'>'|b'"'|b'\'') && !is_ascii_whitespace(*b as char))
        {
            pos += 1;
        }
        if pos == name_start {
            // Stuck on a quote or other punctuation with no name; bail
            // out rather than loop forever.
            pos += 1;
            continue;
        }
        let name = String::from_utf8_lossy(&bytes[name_start..pos]).to_lowercase();

        while matches!(bytes.get(pos), Some(b) if is_ascii_whitespace(*b as char)) {
            pos += 1;
        }

        let value = if bytes.get(pos) == Some(&b'=') {
            pos += 1;
            while matches!(bytes.get(pos), Some(b) if is_ascii_whitespace(*b as char)) {
                pos += 1;
            }
            match bytes.get(pos) {
                Some(&q @ (b'"' | b'\'')) => {
                    pos += 1;
                    let value_start = pos;
                    match find_subslice(&bytes[pos..], &[q]) {
                        Some(offset) => {
                            let value =
                                String::from_utf8_lossy(&bytes[value_start..pos + offset])
                                    .into_owned();
                            pos = pos + offset + 1;
                            value
                        },
                        None => return (None, bytes.len()),
                    }
                },
                _ => {
                    let value_start = pos;
                    while matches!(bytes.get(pos), Some(b) if *b != b'>' && !is_ascii_whitespace(*b as char))
                    {
                        pos += 1;
                    }
                    String::from_utf8_lossy(&bytes[value_start..pos]).into_owned()
                },
            }
        } else {
            String::new()
        };

        match name.as_str() {
            "charset" if attrs.charset.is_none() => attrs.charset = Some(value),
            "http-equiv" if attrs.http_equiv.is_none() => attrs.http_equiv = Some(value),
            "content" if attrs.content.is_none() => attrs.content = Some(value),
            _ => {},
        }
    }
}

fn extract_from_attrs(attrs: &MetaAttrs) -> Option<Encoding> {
    if let Some(charset) = &attrs.charset {
        if let Some(encoding) = normalize_label(charset, true) {
            return Some(encoding);
        }
    }
    if attrs
        .http_equiv
        .as_deref()
        .is_some_and(|h| h.eq_ignore_ascii_case("content-type"))
    {
        if let Some(content) = &attrs.content {
            if let Some(label) = extract_charset_from_content(content) {
                if let Some(encoding) = normalize_label(&label, true) {
                    return Some(encoding);
                }
            }
        }
    }
    None
}

/// Find `charset=value` inside a `content="..."` attribute value, per
/// the "extracting a character encoding from a meta element"
/// algorithm: case-insensitive search for `charset`, optional
/// whitespace, `=`, optional whitespace, then a quoted or unquoted
/// value.
fn extract_charset_from_content(content: &str) -> Option<String> {
    let bytes = content.as_bytes();
    let mut pos = 0;
    loop {
        let rest = &bytes[pos..];
        let idx = rest
            .windows(7)
            .position(|w| w.eq_ignore_ascii_case(b"charset"))?;
        pos += idx + 7;

        let mut p = pos;
        while matches!(bytes.get(p), Some(b) if is_ascii_whitespace(*b as char)) {
            p += 1;
        }
        if bytes.get(p) != Some(&b'=') {
            // Not followed by '=': keep searching from just after this
            // occurrence of "charset".
            continue;
        }
        p += 1;
        while matches!(bytes.get(p), Some(b) if is_ascii_whitespace(*b as char)) {
            p += 1;
        }

        return match bytes.get(p) {
            Some(&q @ (b'"' | b'\'')) => {
                p += 1;
                let start = p;
                let end = bytes[p..].iter().position(|&b| b == q).map(|o| p + o)?;
                Some(content[start..end].to_string())
            },
            Some(_) => {
                let start = p;
                while matches!(bytes.get(p), Some(b) if !matches!(b, b' '|b';'|b'"'|b'\'')) {
                    p += 1;
                }
                if p == start {
                    None
                } else {
                    Some(content[start..p].to_string())
                }
            },
            None => None,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charset_attribute() {
        assert_eq!(
            prescan_meta_charset(b"<meta charset=\"utf-8\">"),
            Some(Encoding::Utf8)
        );
    }

    #[test]
    fn charset_attribute_unquoted() {
        assert_eq!(
            prescan_meta_charset(b"<meta charset=utf-8>"),
            Some(Encoding::Utf8)
        );
    }

    #[test]
    fn http_equiv_content_type() {
        let html = b"<meta http-equiv=\"Content-Type\" content=\"text/html; charset=iso-8859-2\">";
        assert_eq!(prescan_meta_charset(html), Some(Encoding::Iso8859_2));
    }

    #[test]
    fn comment_is_skipped_and_doesnt_count() {
        let mut html = b"<!--".to_vec();
        html.extend_from_slice(&[b'x'; 2000]);
        html.extend_from_slice(b"--><meta charset=\"utf-8\">");
        assert_eq!(prescan_meta_charset(&html), Some(Encoding::Utf8));
    }

    #[test]
    fn budget_exhausted_before_meta() {
        let mut html = vec![b'x'; 1025];
        html.extend_from_slice(b"<meta charset=\"iso-8859-2\">");
        assert_eq!(prescan_meta_charset(&html), None);
    }

    #[test]
    fn unclosed_quote_abandons_tag() {
        let html = b"<meta charset=\"utf-8><meta charset=\"iso-8859-2\">";
        assert_eq!(prescan_meta_charset(html), None);
    }

    #[test]
    fn metadata_tag_is_not_meta() {
        assert_eq!(
            prescan_meta_charset(b"<metadata charset=\"utf-8\">"),
            None
        );
    }

    #[test]
    fn unrecognized_charset_continues_scanning() {
        let html = b"<meta charset=\"bogus\"><meta charset=\"utf-8\">";
        assert_eq!(prescan_meta_charset(html), Some(Encoding::Utf8));
    }
}
