// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Named character references.
//!
//! This is a curated subset of the ~2200-entry WHATWG named character
//! reference table (the full table is generated from `entities.json`,
//! which is not available to this build), covering the entire legacy
//! HTML4 entity list (valid without a trailing semicolon) plus the
//! common modern WHATWG additions. A key without a trailing `;` is by
//! construction one of the legacy, semicolon-optional names; every
//! other valid entity is stored with its `;` included in the key.

pub static NAMED_ENTITIES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    // Legacy (semicolon optional) entities, both forms.
    "amp" => "&", "amp;" => "&",
    "lt" => "<", "lt;" => "<",
    "gt" => ">", "gt;" => ">",
    "quot" => "\"", "quot;" => "\"",
    "nbsp" => "\u{a0}", "nbsp;" => "\u{a0}",
    "copy" => "\u{a9}", "copy;" => "\u{a9}",
    "reg" => "\u{ae}", "reg;" => "\u{ae}",
    "AElig" => "\u{c6}", "AElig;" => "\u{c6}",
    "Aacute" => "\u{c1}", "Aacute;" => "\u{c1}",
    "Acirc" => "\u{c2}", "Acirc;" => "\u{c2}",
    "Agrave" => "\u{c0}", "Agrave;" => "\u{c0}",
    "Aring" => "\u{c5}", "Aring;" => "\u{c5}",
    "Atilde" => "\u{c3}", "Atilde;" => "\u{c3}",
    "Auml" => "\u{c4}", "Auml;" => "\u{c4}",
    "Ccedil" => "\u{c7}", "Ccedil;" => "\u{c7}",
    "ETH" => "\u{d0}", "ETH;" => "\u{d0}",
    "Eacute" => "\u{c9}", "Eacute;" => "\u{c9}",
    "Ecirc" => "\u{ca}", "Ecirc;" => "\u{ca}",
    "Egrave" => "\u{c8}", "Egrave;" => "\u{c8}",
    "Euml" => "\u{cb}", "Euml;" => "\u{cb}",
    "Iacute" => "\u{cd}", "Iacute;" => "\u{cd}",
    "Icirc" => "\u{ce}", "Icirc;" => "\u{ce}",
    "Igrave" => "\u{cc}", "Igrave;" => "\u{cc}",
    "Iuml" => "\u{cf}", "Iuml;" => "\u{cf}",
    "Ntilde" => "\u{d1}", "Ntilde;" => "\u{d1}",
    "Oacute" => "\u{d3}", "Oacute;" => "\u{d3}",
    "Ocirc" => "\u{d4}", "Ocirc;" => "\u{d4}",
    "Ograve" => "\u{d2}", "Ograve;" => "\u{d2}",
    "Oslash" => "\u{d8}", "Oslash;" => "\u{d8}",
    "Otilde" => "\u{d5}", "Otilde;" => "\u{d5}",
    "Ouml" => "\u{d6}", "Ouml;" => "\u{d6}",
    "THORN" => "\u{de}", "THORN;" => "\u{de}",
    "Uacute" => "\u{da}", "Uacute;" => "\u{da}",
    "Ucirc" => "\u{db}", "Ucirc;" => "\u{db}",
    "Ugrave" => "\u{d9}", "Ugrave;" => "\u{d9}",
    "Uuml" => "\u{dc}", "Uuml;" => "\u{dc}",
    "Yacute" => "\u{dd}", "Yacute;" => "\u{dd}",
    "aacute" => "\u{e1}", "aacute;" => "\u{e1}",
    "acirc" => "\u{e2}", "acirc;" => "\u{e2}",
    "acute" => "\u{b4}", "acute;" => "\u{b4}",
    "aelig" => "\u{e6}", "aelig;" => "\u{e6}",
    "agrave" => "\u{e0}", "agrave;" => "\u{e0}",
    "aring" => "\u{e5}", "aring;" => "\u{e5}",
    "atilde" => "\u{e3}", "atilde;" => "\u{e3}",
    "auml" => "\u{e4}", "auml;" => "\u{e4}",
    "brvbar" => "\u{a6}", "brvbar;" => "\u{a6}",
    "ccedil" => "\u{e7}", "ccedil;" => "\u{e7}",
    "cedil" => "\u{b8}", "cedil;" => "\u{b8}",
    "cent" => "\u{a2}", "cent;" => "\u{a2}",
    "curren" => "\u{a4}", "curren;" => "\u{a4}",
    "deg" => "\u{b0}", "deg;" => "\u{b0}",
    "divide" => "\u{f7}", "divide;" => "\u{f7}",
    "eacute" => "\u{e9}", "eacute;" => "\u{e9}",
    "ecirc" => "\u{ea}", "ecirc;" => "\u{ea}",
    "egrave" => "\u{e8}", "egrave;" => "\u{e8}",
    "eth" => "\u{f0}", "eth;" => "\u{f0}",
    "euml" => "\u{eb}", "euml;" => "\u{eb}",
    "frac12" => "\u{bd}", "frac12;" => "\u{bd}",
    "frac14" => "\u{bc}", "frac14;" => "\u{bc}",
    "frac34" => "\u{be}", "frac34;" => "\u{be}",
    "iacute" => "\u{ed}", "iacute;" => "\u{ed}",
    "icirc" => "\u{ee}", "icirc;" => "\u{ee}",
    "iexcl" => "\u{a1}", "iexcl;" => "\u{a1}",
    "igrave" => "\u{ec}", "igrave;" => "\u{ec}",
    "iquest" => "\u{bf}", "iquest;" => "\u{bf}",
    "iuml" => "\u{ef}", "iuml;" => "\u{ef}",
    "laquo" => "\u{ab}", "laquo;" => "\u{ab}",
    "macr" => "\u{af}", "macr;" => "\u{af}",
    "micro" => "\u{b5}", "micro;" => "\u{b5}",
    "middot" => "\u{b7}", "middot;" => "\u{b7}",
    "not" => "\u{ac}", "not;" => "\u{ac}",
    "ntilde" => "\u{f1}", "ntilde;" => "\u{f1}",
    "oacute" => "\u{f3}", "oacute;" => "\u{f3}",
    "ocirc" => "\u{f4}", "ocirc;" => "\u{f4}",
    "ograve" => "\u{f2}", "ograve;" => "\u{f2}",
    "ordf" => "\u{aa}", "ordf;" => "\u{aa}",
    "ordm" => "\u{ba}", "ordm;" => "\u{ba}",
    "oslash" => "\u{f8}", "oslash;" => "\u{f8}",
    "otilde" => "\u{f5}", "otilde;" => "\u{f5}",
    "ouml" => "\u{f6}", "ouml;" => "\u{f6}",
    "para" => "\u{b6}", "para;" => "\u{b6}",
    "plusmn" => "\u{b1}", "plusmn;" => "\u{b1}",
    "pound" => "\u{a3}", "pound;" => "\u{a3}",
    "raquo" => "\u{bb}", "raquo;" => "\u{bb}",
    "sect" => "\u{a7}", "sect;" => "\u{a7}",
    "shy" => "\u{ad}", "shy;" => "\u{ad}",
    "sup1" => "\u{b9}", "sup1;" => "\u{b9}",
    "sup2" => "\u{b2}", "sup2;" => "\u{b2}",
    "sup3" => "\u{b3}", "sup3;" => "\u{b3}",
    "szlig" => "\u{df}", "szlig;" => "\u{df}",
    "thorn" => "\u{fe}", "thorn;" => "\u{fe}",
    "times" => "\u{d7}", "times;" => "\u{d7}",
    "uacute" => "\u{fa}", "uacute;" => "\u{fa}",
    "ucirc" => "\u{fb}", "ucirc;" => "\u{fb}",
    "ugrave" => "\u{f9}", "ugrave;" => "\u{f9}",
    "uml" => "\u{a8}", "uml;" => "\u{a8}",
    "uuml" => "\u{fc}", "uuml;" => "\u{fc}",
    "yacute" => "\u{fd}", "yacute;" => "\u{fd}",
    "yen" => "\u{a5}", "yen;" => "\u{a5}",
    "yuml" => "\u{ff}", "yuml;" => "\u{ff}",

    // Semicolon-required (modern) entities.
    "apos;" => "'",
    "trade;" => "\u{2122}",
    "hellip;" => "\u{2026}",
    "mdash;" => "\u{2014}",
    "ndash;" => "\u{2013}",
    "lsquo;" => "\u{2018}",
    "rsquo;" => "\u{2019}",
    "sbquo;" => "\u{201a}",
    "ldquo;" => "\u{201c}",
    "rdquo;" => "\u{201d}",
    "bdquo;" => "\u{201e}",
    "bull;" => "\u{2022}",
    "dagger;" => "\u{2020}",
    "Dagger;" => "\u{2021}",
    "permil;" => "\u{2030}",
    "lsaquo;" => "\u{2039}",
    "rsaquo;" => "\u{203a}",
    "euro;" => "\u{20ac}",
    "infin;" => "\u{221e}",
    "ne;" => "\u{2260}",
    "le;" => "\u{2264}",
    "ge;" => "\u{2265}",
    "forall;" => "\u{2200}",
    "exist;" => "\u{2203}",
    "empty;" => "\u{2205}",
    "nabla;" => "\u{2207}",
    "isin;" => "\u{2208}",
    "notin;" => "\u{2209}",
    "prod;" => "\u{220f}",
    "sum;" => "\u{2211}",
    "minus;" => "\u{2212}",
    "radic;" => "\u{221a}",
    "there4;" => "\u{2234}",
    "sim;" => "\u{223c}",
    "cong;" => "\u{2245}",
    "asymp;" => "\u{2248}",
    "equiv;" => "\u{2261}",
    "larr;" => "\u{2190}",
    "uarr;" => "\u{2191}",
    "rarr;" => "\u{2192}",
    "darr;" => "\u{2193}",
    "harr;" => "\u{2194}",
    "spades;" => "\u{2660}",
    "clubs;" => "\u{2663}",
    "hearts;" => "\u{2665}",
    "diams;" => "\u{2666}",
    "loz;" => "\u{25ca}",
    "alpha;" => "\u{3b1}",
    "beta;" => "\u{3b2}",
    "gamma;" => "\u{3b3}",
    "delta;" => "\u{3b4}",
    "epsilon;" => "\u{3b5}",
    "zeta;" => "\u{3b6}",
    "eta;" => "\u{3b7}",
    "theta;" => "\u{3b8}",
    "lambda;" => "\u{3bb}",
    "mu;" => "\u{3bc}",
    "pi;" => "\u{3c0}",
    "sigma;" => "\u{3c3}",
    "tau;" => "\u{3c4}",
    "phi;" => "\u{3c6}",
    "chi;" => "\u{3c7}",
    "psi;" => "\u{3c8}",
    "omega;" => "\u{3c9}",
    "Alpha;" => "\u{391}",
    "Beta;" => "\u{392}",
    "Gamma;" => "\u{393}",
    "Delta;" => "\u{394}",
    "Theta;" => "\u{398}",
    "Lambda;" => "\u{39b}",
    "Pi;" => "\u{3a0}",
    "Sigma;" => "\u{3a3}",
    "Phi;" => "\u{3a6}",
    "Psi;" => "\u{3a8}",
    "Omega;" => "\u{3a9}",
};
