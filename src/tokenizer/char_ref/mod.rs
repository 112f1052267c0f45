// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Character reference decoding (§4.2.4, §4.2.5).
//!
//! Unlike a push-based tokenizer that resolves `&...;` one character
//! at a time as it arrives, this decodes a whole already-buffered run
//! of character data in a single pass. [`decode_entities`] is the
//! entry point; the tokenizer calls it when flushing a text or
//! attribute-value buffer that was seen to contain an `&`.

mod data;

use crate::tokenizer::token::ErrorCode;
use crate::encoding::tables::WINDOWS_1252_C1_REPLACEMENTS;

/// Decode every character reference in `text`. `in_attribute`
/// selects the ambiguous-ampersand suppression rule that applies only
/// to attribute values (§4.2.5 point 3). `start_line`/`start_column`
/// seed the position tracker so errors carry source-accurate
/// coordinates; `\n` inside `text` advances the line the same way the
/// tokenizer's own character consumption does.
pub fn decode_entities(
    text: &str,
    in_attribute: bool,
    start_line: u64,
    start_column: u64,
) -> (String, Vec<(ErrorCode, u64, u64)>) {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut errors = Vec::new();
    let mut i = 0;
    let mut line = start_line;
    let mut column = start_column;

    while i < chars.len() {
        if chars[i] != '&' {
            advance(chars[i], &mut line, &mut column);
            out.push(chars[i]);
            i += 1;
            continue;
        }

        match resolve_reference(&chars, i, in_attribute) {
            Some(Match { replacement, consumed, error }) => {
                if let Some(code) = error {
                    errors.push((code, line, column));
                }
                for &c in &chars[i..i + consumed] {
                    advance(c, &mut line, &mut column);
                }
                out.push_str(&replacement);
                i += consumed;
            },
            None => {
                advance(chars[i], &mut line, &mut column);
                out.push('&');
                i += 1;
            },
        }
    }

    (out, errors)
}

fn advance(c: char, line: &mut u64, column: &mut u64) {
    if c == '\n' {
        *line += 1;
        *column = 0;
    } else {
        *column += 1;
    }
}

struct Match {
    replacement: String,
    /// Source characters consumed, including the leading `&`.
    consumed: usize,
    error: Option<ErrorCode>,
}

/// Try to resolve a character reference starting at `chars[start]`,
/// which is always `&`. Returns `None` when nothing after the `&`
/// could possibly be a reference, in which case the caller treats the
/// `&` as a literal character and keeps scanning from `start + 1`.
fn resolve_reference(chars: &[char], start: usize, in_attribute: bool) -> Option<Match> {
    match chars.get(start + 1) {
        Some('#') => Some(resolve_numeric(chars, start)),
        Some(c) if c.is_ascii_alphanumeric() => resolve_named(chars, start, in_attribute),
        _ => None,
    }
}

fn resolve_numeric(chars: &[char], start: usize) -> Match {
    let mut i = start + 2; // past "&#"
    let hex = matches!(chars.get(i), Some('x' | 'X'));
    if hex {
        i += 1;
    }
    let digits_start = i;
    let radix = if hex { 16 } else { 10 };
    while chars.get(i).is_some_and(|c| c.is_digit(radix)) {
        i += 1;
    }

    if i == digits_start {
        let literal: String = chars[start..i].iter().collect();
        return Match {
            replacement: literal,
            consumed: i - start,
            error: Some(ErrorCode::AbsenceOfDigitsInNumericCharacterReference),
        };
    }

    let digits: String = chars[digits_start..i].iter().collect();
    let value = u32::from_str_radix(&digits, radix).unwrap_or(0x110000);

    let mut missing_semicolon = true;
    if chars.get(i) == Some(&';') {
        i += 1;
        missing_semicolon = false;
    }
    let consumed = i - start;

    let (resolved, mut error) = numeric_reference_value(value);
    if error.is_none() && missing_semicolon {
        error = Some(ErrorCode::MissingSemicolonAfterCharacterReference);
    }

    Match { replacement: resolved.to_string(), consumed, error }
}

/// Resolve a numeric character reference's code point to its final
/// character and an optional error, per §4.2.5's substitution table.
fn numeric_reference_value(n: u32) -> (char, Option<ErrorCode>) {
    if n == 0 {
        return ('\u{fffd}', Some(ErrorCode::NullCharacterReference));
    }
    if (0xD800..=0xDFFF).contains(&n) {
        return ('\u{fffd}', Some(ErrorCode::SurrogateCharacterReference));
    }
    if n > 0x10FFFF {
        return ('\u{fffd}', Some(ErrorCode::CharacterReferenceOutsideUnicodeRange));
    }
    if (0x80..=0x9F).contains(&n) {
        let replacement = WINDOWS_1252_C1_REPLACEMENTS[(n - 0x80) as usize]
            .unwrap_or_else(|| conv(n));
        return (replacement, Some(ErrorCode::ControlCharacterReference));
    }
    if matches!(n, 0x01..=0x08 | 0x0B | 0x0D..=0x1F | 0x7F) {
        return (conv(n), Some(ErrorCode::ControlCharacterReference));
    }
    if (0xFDD0..=0xFDEF).contains(&n) || (n & 0xFFFE) == 0xFFFE {
        return (conv(n), Some(ErrorCode::NoncharacterCharacterReference));
    }
    (conv(n), None)
}

fn conv(n: u32) -> char {
    char::from_u32(n).unwrap_or('\u{fffd}')
}

/// Resolve a named character reference, handling the legacy
/// semicolon-optional forms and the attribute ambiguous-ampersand
/// suppression (§4.2.5 points 2-4).
fn resolve_named(chars: &[char], start: usize, in_attribute: bool) -> Option<Match> {
    let run_start = start + 1;
    let mut run_end = run_start;
    while chars.get(run_end).is_some_and(|c| c.is_ascii_alphanumeric()) {
        run_end += 1;
    }
    let run: String = chars[run_start..run_end].iter().collect();

    if chars.get(run_end) == Some(&';') {
        let with_semi = format!("{run};");
        if let Some(value) = data::NAMED_ENTITIES.get(with_semi.as_str()) {
            return Some(Match {
                replacement: (*value).to_string(),
                consumed: run_end + 1 - start,
                error: None,
            });
        }
    }

    // Longest bare (no trailing `;`) prefix of `run` that is itself a
    // recognized legacy entity name.
    let run_chars: Vec<char> = run.chars().collect();
    for len in (1..=run_chars.len()).rev() {
        let candidate: String = run_chars[..len].iter().collect();
        if let Some(value) = data::NAMED_ENTITIES.get(candidate.as_str()) {
            let next_after = chars.get(run_start + len).copied();
            let suppressed = in_attribute
                && (matches!(next_after, Some('='))
                    || matches!(next_after, Some(c) if c.is_ascii_alphanumeric()));
            if suppressed {
                return None;
            }
            return Some(Match {
                replacement: (*value).to_string(),
                consumed: run_start + len - start,
                error: Some(ErrorCode::MissingSemicolonAfterCharacterReference),
            });
        }
    }

    if run.is_empty() {
        return None;
    }
    Some(Match {
        replacement: format!("&{run}"),
        consumed: run_end - start,
        error: Some(ErrorCode::UnknownNamedCharacterReference),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(text: &str, in_attribute: bool) -> String {
        decode_entities(text, in_attribute, 1, 0).0
    }

    #[test]
    fn exact_named_with_semicolon() {
        assert_eq!(decode("a &amp; b", false), "a & b");
        assert_eq!(decode("&copy;2024", false), "\u{a9}2024");
    }

    #[test]
    fn legacy_without_semicolon_in_text() {
        assert_eq!(decode("Q&ampA", false), "Q&A");
    }

    #[test]
    fn legacy_without_semicolon_suppressed_in_attribute_value() {
        // Followed by an alphanumeric: ambiguous, left literal.
        assert_eq!(decode("foo?a=1&amp2=2", true), "foo?a=1&amp2=2");
        // Followed by '=': also suppressed.
        assert_eq!(decode("foo?a=1&amp=2", true), "foo?a=1&amp=2");
        // Followed by something else: substituted.
        assert_eq!(decode("Tom &amp Jerry", true), "Tom & Jerry");
    }

    #[test]
    fn unknown_named_reference_left_literal() {
        assert_eq!(decode("&notareference;", false), "&notareference;");
    }

    #[test]
    fn numeric_decimal_and_hex() {
        assert_eq!(decode("&#65;", false), "A");
        assert_eq!(decode("&#x41;", false), "A");
    }

    #[test]
    fn numeric_without_semicolon_still_substitutes() {
        assert_eq!(decode("&#65", false), "A");
    }

    #[test]
    fn numeric_null_becomes_replacement_character() {
        assert_eq!(decode("&#0;", false), "\u{fffd}");
    }

    #[test]
    fn numeric_windows_1252_c1_substitution() {
        assert_eq!(decode("&#128;", false), "\u{20ac}");
    }

    #[test]
    fn numeric_out_of_range_becomes_replacement_character() {
        assert_eq!(decode("&#x110000;", false), "\u{fffd}");
    }

    #[test]
    fn absence_of_digits_left_literal() {
        assert_eq!(decode("&#;", false), "&#;");
        assert_eq!(decode("&#x;", false), "&#x;");
    }

    #[test]
    fn stray_ampersand_is_literal() {
        assert_eq!(decode("Q & A", false), "Q & A");
    }

    #[test]
    fn line_and_column_tracking_crosses_newlines() {
        let (_, errors) = decode_entities("ok\n&bogus;", false, 1, 0);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].1, 2);
    }
}
