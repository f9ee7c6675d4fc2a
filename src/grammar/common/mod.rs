//! Building blocks shared by more than one language's class grammars.
//!
//! Chinese and Japanese both read cardinal numbers through the same
//! teen/tens/hundred/thousand/ten-thousand decomposition and the same CJK
//! digit glyphs (spec.md §4.3 "shared grammar fragments"), so the
//! compositional number builder lives here once instead of being
//! duplicated per language the way `original_source`'s `itn/chinese` and
//! `itn/japanese` packages do it.

pub mod kanji_numeral;
