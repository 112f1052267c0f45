// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Byte-stream encoding detection, an HTML5 tokenizer, and a CSS
//! selector engine, each independently usable.
//!
//! This crate stops short of tree construction: the tokenizer hands a
//! caller-driven consumer a stream of [`tokenizer::Token`]s and hooks
//! (`set_state`, `set_last_start_tag`, `set_allow_cdata`) for that
//! consumer to drive. The selector matcher consumes a caller-supplied
//! tree through [`selector::dom`].

#[macro_use]
mod macros;

pub mod encoding;
pub mod selector;
pub mod tokenizer;
mod util;

pub use encoding::{decode, Encoding};
pub use selector::{match_all, match_first, parse, SelectorError};
pub use tokenizer::{Tokenizer, TokenizerOpts};
