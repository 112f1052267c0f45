// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Byte-stream character encoding detection and decoding.
//!
//! [`decode`] implements the algorithm order from the HTML standard's
//! "determining the character encoding" section: an explicit
//! transport hint wins, then a BOM, then a bounded prescan of the
//! document for a `<meta charset>` declaration, and finally a
//! `windows-1252` fallback. It never fails outright — the fallback
//! guarantees a `(String, Encoding)` pair for any input.

pub mod label;
mod prescan;
pub(crate) mod tables;

use crate::util::str::is_ascii_whitespace;
use log::debug;

pub use label::normalize_label;

/// One of the closed set of encodings this crate can decode. Every
/// variant has a canonical label (its [`Display`]/`name()` form) used
/// both for label lookups and as the value reported back to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    Utf8,
    Windows1252,
    Iso8859_2,
    EucJp,
    /// Endianness not yet known; resolved via BOM sniffing (default
    /// little-endian) at decode time, but still reported under this
    /// name per the HTML standard's own encoding list.
    Utf16,
    Utf16Le,
    Utf16Be,
}

impl Encoding {
    /// All recognized encodings, in the order the spec lists them.
    pub const ALL: &'static [Encoding] = &[
        Encoding::Utf8,
        Encoding::Windows1252,
        Encoding::Iso8859_2,
        Encoding::EucJp,
        Encoding::Utf16,
        Encoding::Utf16Le,
        Encoding::Utf16Be,
    ];

    pub fn name(&self) -> &'static str {
        match *self {
            Encoding::Utf8 => "UTF-8",
            Encoding::Windows1252 => "windows-1252",
            Encoding::Iso8859_2 => "iso-8859-2",
            Encoding::EucJp => "euc-jp",
            Encoding::Utf16 => "utf-16",
            Encoding::Utf16Le => "utf-16le",
            Encoding::Utf16Be => "utf-16be",
        }
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Informational: the caller supplied a transport hint that isn't a
/// recognized label. Decoding proceeds through BOM/prescan/fallback
/// regardless; this is never a hard error (§7: "No recoverable errors
/// surface to the caller").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrecognizedHint(pub String);

/// BOM byte sequences, longest first so UTF-8's 3-byte BOM isn't
/// shadowed by a coincidental 2-byte prefix match.
fn strip_bom(bytes: &[u8]) -> Option<(Encoding, &[u8])> {
    if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
        Some((Encoding::Utf8, &bytes[3..]))
    } else if bytes.starts_with(&[0xFF, 0xFE]) {
        Some((Encoding::Utf16Le, &bytes[2..]))
    } else if bytes.starts_with(&[0xFE, 0xFF]) {
        Some((Encoding::Utf16Be, &bytes[2..]))
    } else {
        None
    }
}

/// Decode a byte slice to text, choosing an encoding per §4.1.1.
///
/// Never returns a nil encoding: on total failure to detect anything
/// more specific, falls back to `windows-1252` with a best-effort
/// decode of the raw bytes.
pub fn decode(bytes: &[u8], hint: Option<&str>) -> (String, Encoding, Option<UnrecognizedHint>) {
    if let Some(hint) = hint {
        let trimmed = hint.trim_matches(is_ascii_whitespace);
        if !trimmed.is_empty() {
            match normalize_label(trimmed, false) {
                Some(encoding) => {
                    debug!("encoding: using transport hint {encoding}");
                    let body = strip_bom(bytes).map(|(_, rest)| rest).unwrap_or(bytes);
                    return (decode_bytes(body, encoding), encoding, None);
                },
                None => {
                    let warning = Some(UnrecognizedHint(trimmed.to_string()));
                    if let Some((encoding, rest)) = strip_bom(bytes) {
                        debug!("encoding: hint unrecognized, BOM indicates {encoding}");
                        return (decode_bytes(rest, encoding), encoding, warning);
                    }
                    if let Some(encoding) = prescan::prescan_meta_charset(bytes) {
                        debug!("encoding: hint unrecognized, prescan found {encoding}");
                        return (decode_bytes(bytes, encoding), encoding, warning);
                    }
                    debug!("encoding: hint unrecognized, falling back to windows-1252");
                    return (
                        decode_bytes(bytes, Encoding::Windows1252),
                        Encoding::Windows1252,
                        warning,
                    );
                },
            }
        }
    }

    if let Some((encoding, rest)) = strip_bom(bytes) {
        debug!("encoding: BOM indicates {encoding}");
        return (decode_bytes(rest, encoding), encoding, None);
    }

    if let Some(encoding) = prescan::prescan_meta_charset(bytes) {
        debug!("encoding: prescan found {encoding}");
        return (decode_bytes(bytes, encoding), encoding, None);
    }

    debug!("encoding: falling back to windows-1252");
    (
        decode_bytes(bytes, Encoding::Windows1252),
        Encoding::Windows1252,
        None,
    )
}

/// Decode `bytes` under a known encoding. `bytes` is assumed to have
/// already had any encoding-specific leading BOM stripped.
fn decode_bytes(bytes: &[u8], encoding: Encoding) -> String {
    match encoding {
        Encoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
        Encoding::Windows1252 => decode_windows_1252(bytes),
        Encoding::Iso8859_2 => decode_iso_8859_2(bytes),
        Encoding::EucJp => decode_euc_jp(bytes),
        Encoding::Utf16 => {
            if bytes.starts_with(&[0xFF, 0xFE]) {
                decode_utf16le(&bytes[2..])
            } else if bytes.starts_with(&[0xFE, 0xFF]) {
                decode_utf16be(&bytes[2..])
            } else {
                decode_utf16le(bytes)
            }
        },
        Encoding::Utf16Le => decode_utf16le(bytes),
        Encoding::Utf16Be => decode_utf16be(bytes),
    }
}

fn decode_windows_1252(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &b in bytes {
        let c = match b {
            0x80..=0x9F => tables::WINDOWS_1252_C1_REPLACEMENTS[(b - 0x80) as usize]
                .unwrap_or(b as char),
            _ => b as char,
        };
        out.push(c);
    }
    out
}

fn decode_iso_8859_2(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &b in bytes {
        let c = if b < 0x80 {
            b as char
        } else {
            tables::ISO_8859_2[(b - 0x80) as usize]
        };
        out.push(c);
    }
    out
}

/// EUC-JP: ASCII passes through; every multi-byte sequence is
/// replaced by a single U+FFFD rather than decoded, per §4.1.4's
/// disclosed simplification (no JIS X 0208/0212 tables).
fn decode_euc_jp(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b < 0x80 {
            out.push(b as char);
            i += 1;
            continue;
        }
        let seq_len = match b {
            0x8F => 3, // JIS X 0212
            0x8E => 2, // half-width katakana
            0xA1..=0xFE => 2, // JIS X 0208
            _ => 1,    // invalid lead byte
        };
        out.push('\u{fffd}');
        i += seq_len.min(bytes.len() - i).max(1);
    }
    out
}

/// Pair bytes little-endian into 16-bit units, odd trailing byte
/// padded with a zero byte. Rust's `char` cannot hold a lone
/// surrogate half, so (unlike a language with an unconstrained rune
/// type) those units become U+FFFD rather than an invalid scalar
/// value; true surrogate-pair combination into astral code points is
/// still not performed, per §9.
fn decode_utf16le(bytes: &[u8]) -> String {
    decode_utf16_units(bytes, |lo, hi| u16::from_le_bytes([lo, hi]))
}

fn decode_utf16be(bytes: &[u8]) -> String {
    decode_utf16_units(bytes, |hi, lo| u16::from_be_bytes([hi, lo]))
}

fn decode_utf16_units(bytes: &[u8], pair: fn(u8, u8) -> u16) -> String {
    let mut out = String::with_capacity(bytes.len() / 2);
    let mut i = 0;
    while i < bytes.len() {
        let b0 = bytes[i];
        let b1 = *bytes.get(i + 1).unwrap_or(&0);
        let unit = pair(b0, b1);
        out.push(char::from_u32(unit as u32).unwrap_or('\u{fffd}'));
        i += 2;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bom_wins_over_bad_content() {
        let (text, encoding, _) = decode(&[0xEF, 0xBB, 0xBF, b'h', b'i'], None);
        assert_eq!(text, "hi");
        assert_eq!(encoding, Encoding::Utf8);
    }

    #[test]
    fn meta_charset_detected() {
        let (_, encoding, _) = decode(b"<!--x--><meta charset=\"utf-8\">", None);
        assert_eq!(encoding, Encoding::Utf8);
    }

    #[test]
    fn meta_after_budget_ignored() {
        let mut bytes = vec![b'x'; 1025];
        bytes.extend_from_slice(b"<meta charset=\"iso-8859-2\">");
        let (_, encoding, _) = decode(&bytes, None);
        assert_eq!(encoding, Encoding::Windows1252);
    }

    #[test]
    fn meta_utf16_becomes_utf8() {
        let (_, encoding, _) = decode(b"<meta charset=\"utf-16\">", None);
        assert_eq!(encoding, Encoding::Utf8);
    }

    #[test]
    fn unclosed_quoted_meta_falls_back() {
        let input = b"<meta charset=\"utf-8><meta charset=\"iso-8859-2\">";
        let (_, encoding, _) = decode(input, None);
        assert_eq!(encoding, Encoding::Windows1252);
    }

    #[test]
    fn utf7_hint_is_coerced_to_windows_1252() {
        let (_, encoding, _) = decode(b"plain text", Some("utf-7"));
        assert_eq!(encoding, Encoding::Windows1252);
    }

    #[test]
    fn windows_1252_decodes_c1_range() {
        let text = decode_windows_1252(&[0x80]);
        assert_eq!(text, "\u{20ac}");
    }

    #[test]
    fn fallback_never_nil() {
        let (_, encoding, _) = decode(&[], None);
        assert_eq!(encoding, Encoding::Windows1252);
    }
}
