// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Label -> [`Encoding`] normalization, including the two security
//! coercions (UTF-7, ISO-8859-1 aliases) and the meta-only UTF-16/
//! UTF-32 -> UTF-8 coercion.

use crate::encoding::Encoding;
use crate::util::str::{is_ascii_whitespace, lower_ascii_str};

static LABELS: phf::Map<&'static str, Encoding> = phf::phf_map! {
    "utf-8" => Encoding::Utf8,
    "utf8" => Encoding::Utf8,
    "unicode-1-1-utf-8" => Encoding::Utf8,
    "windows-1252" => Encoding::Windows1252,
    "cp1252" => Encoding::Windows1252,
    "x-cp1252" => Encoding::Windows1252,
    "iso-8859-2" => Encoding::Iso8859_2,
    "iso8859-2" => Encoding::Iso8859_2,
    "iso_8859-2" => Encoding::Iso8859_2,
    "latin2" => Encoding::Iso8859_2,
    "l2" => Encoding::Iso8859_2,
    "csisolatin2" => Encoding::Iso8859_2,
    "euc-jp" => Encoding::EucJp,
    "eucjp" => Encoding::EucJp,
    "x-euc-jp" => Encoding::EucJp,
    "cseucpkdfmtjapanese" => Encoding::EucJp,
    "utf-16" => Encoding::Utf16,
    "utf-16le" => Encoding::Utf16Le,
    "utf-16be" => Encoding::Utf16Be,
};

/// Labels that must always resolve to `windows-1252`, regardless of
/// context, for security reasons (UTF-7 can smuggle `<script>` past a
/// naive scanner that only looks at ASCII bytes).
static UTF7_LABELS: phf::Set<&'static str> = phf::phf_set! {
    "utf-7", "utf7", "x-utf-7", "csunicode11utf7", "unicode-1-1-utf-7",
};

/// All labels the HTML spec folds into `windows-1252`, most of them
/// nominally ISO-8859-1 / US-ASCII aliases.
static ISO_8859_1_ALIASES: phf::Set<&'static str> = phf::phf_set! {
    "iso-8859-1", "latin1", "us-ascii", "ascii", "ansi_x3.4-1968",
    "cp819", "l1", "latin-1", "ibm819", "iso-ir-100", "csisolatin1",
    "iso8859-1", "iso88591", "iso_8859-1", "iso_8859-1:1987",
};

/// Meta-only labels that the HTML spec coerces to UTF-8 when they
/// appear inside a `<meta charset>`/`content` declaration, because
/// the bytes preceding the declaration were already interpreted as
/// ASCII-compatible to find it in the first place.
static UTF16_32_LABELS: phf::Set<&'static str> = phf::phf_set! {
    "utf-16", "utf-16le", "utf-16be", "utf-32", "utf-32le", "utf-32be",
};

/// Normalize a label per §4.1.2: lowercase, ASCII-trim, then resolve
/// through the closed label table, applying the two security
/// coercions and (if `in_meta`) the UTF-16/UTF-32 -> UTF-8 coercion.
pub fn normalize_label(raw: &str, in_meta: bool) -> Option<Encoding> {
    let trimmed = raw.trim_matches(is_ascii_whitespace);
    if trimmed.is_empty() {
        return None;
    }
    let label = lower_ascii_str(trimmed);

    if UTF7_LABELS.contains(label.as_str()) {
        return Some(Encoding::Windows1252);
    }
    if ISO_8859_1_ALIASES.contains(label.as_str()) {
        return Some(Encoding::Windows1252);
    }
    if in_meta && UTF16_32_LABELS.contains(label.as_str()) {
        return Some(Encoding::Utf8);
    }
    LABELS.get(label.as_str()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_labels() {
        assert_eq!(normalize_label("UTF-8", false), Some(Encoding::Utf8));
        assert_eq!(normalize_label("  utf8 ", false), Some(Encoding::Utf8));
        assert_eq!(
            normalize_label("iso-8859-2", false),
            Some(Encoding::Iso8859_2)
        );
    }

    #[test]
    fn utf7_is_coerced() {
        for label in ["utf-7", "UTF7", "x-utf-7"] {
            assert_eq!(normalize_label(label, false), Some(Encoding::Windows1252));
        }
    }

    #[test]
    fn iso_8859_1_aliases_are_coerced() {
        for label in ["iso-8859-1", "latin1", "us-ascii", "ASCII", "cp819"] {
            assert_eq!(normalize_label(label, false), Some(Encoding::Windows1252));
        }
    }

    #[test]
    fn utf16_coerced_only_in_meta() {
        assert_eq!(normalize_label("utf-16", false), Some(Encoding::Utf16));
        assert_eq!(normalize_label("utf-16", true), Some(Encoding::Utf8));
        assert_eq!(normalize_label("utf-32", false), None);
        assert_eq!(normalize_label("utf-32", true), Some(Encoding::Utf8));
    }

    #[test]
    fn unrecognized_is_none() {
        assert_eq!(normalize_label("", false), None);
        assert_eq!(normalize_label("bogus-charset", false), None);
    }
}
