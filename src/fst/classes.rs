//! Character classes published to grammar authors (spec.md §4.2).
//!
//! Each is a small acceptor built fresh on demand — these are cheap
//! (at most a few hundred states) and grammars only build them once per
//! `Normalizer` construction, so there is no need for the module-level
//! caching spec.md §9 explicitly warns against.

use super::kernel::{accept, concat, cross, delete_str, epsilon, insert_str, plus, star, union, union_all, Fst};

fn byte_range(lo: u8, hi: u8) -> Fst {
    union_all((lo..=hi).map(|b| accept(std::str::from_utf8(&[b]).unwrap_or(""))))
}

/// ASCII letters, upper and lower.
pub fn alpha() -> Fst {
    union(byte_range(b'a', b'z'), byte_range(b'A', b'Z'))
}

/// ASCII digits `0`-`9`.
pub fn digit() -> Fst {
    byte_range(b'0', b'9')
}

/// ASCII punctuation (the printable, non-alphanumeric, non-space range).
pub fn punct() -> Fst {
    union_all(vec![
        byte_range(b'!', b'/'),
        byte_range(b':', b'@'),
        byte_range(b'[', b'`'),
        byte_range(b'{', b'~'),
    ])
}

/// Space and tab.
pub fn space() -> Fst {
    union(accept(" "), accept("\t"))
}

/// Any single valid UTF-8 "character": one ASCII byte, or a 2/3/4-byte
/// lead-and-continuation sequence (covers CJK and other multi-byte text).
pub fn vchar() -> Fst {
    let ascii = byte_range(0x20, 0x7e);
    let cont = byte_range(0x80, 0xbf);
    let two = concat(byte_range(0xc2, 0xdf), cont.clone());
    let three = concat(concat(byte_range(0xe0, 0xef), cont.clone()), cont.clone());
    let four = concat(concat(concat(byte_range(0xf0, 0xf4), cont.clone()), cont.clone()), cont);
    union_all(vec![ascii, two, three, four])
}

/// `VCHAR` minus the double quote, used inside quoted token values.
pub fn not_quote() -> Fst {
    exclude_ascii(vchar(), &['"'])
}

/// `VCHAR` minus whitespace.
pub fn not_space() -> Fst {
    exclude_ascii(vchar(), &[' ', '\t', '\n'])
}

/// Remove the listed single-byte ASCII characters from an acceptor built
/// out of `byte_range`s; used for the small, fixed exclusion sets the
/// grammar library needs (spec.md §4.2's `difference`-flavored character
/// classes), without requiring a general FST `difference` over arbitrary
/// multi-byte alphabets.
fn exclude_ascii(whole: Fst, excluded: &[char]) -> Fst {
    let mut pieces = Vec::new();
    for b in 0x20u8..=0x7e {
        let ch = b as char;
        if !excluded.contains(&ch) {
            pieces.push(accept(&ch.to_string()));
        }
    }
    // Multi-byte characters can never equal a single excluded ASCII char,
    // so the non-ASCII portion of VCHAR passes through untouched.
    let non_ascii = exclude_ascii_prefix(whole);
    union(union_all(pieces), non_ascii)
}

fn exclude_ascii_prefix(whole: Fst) -> Fst {
    // Re-derive the >=0x80 lead-byte portion directly rather than trying to
    // subtract from `whole`, since `whole` mixes ASCII and multi-byte
    // branches in one union.
    let cont = byte_range(0x80, 0xbf);
    let two = concat(byte_range(0xc2, 0xdf), cont.clone());
    let three = concat(concat(byte_range(0xe0, 0xef), cont.clone()), cont.clone());
    let four = concat(concat(concat(byte_range(0xf0, 0xf4), cont.clone()), cont.clone()), cont);
    let _ = whole;
    union_all(vec![two, three, four])
}

/// Upper/lower-casing cross products for the ASCII range.
pub fn to_lower() -> Fst {
    union_all((b'A'..=b'Z').map(|u| cross(&(u as char).to_string(), &(u as char).to_ascii_lowercase().to_string())))
}

pub fn to_upper() -> Fst {
    union_all((b'a'..=b'z').map(|l| cross(&(l as char).to_string(), &(l as char).to_ascii_uppercase().to_string())))
}

pub fn lower() -> Fst {
    byte_range(b'a', b'z')
}

pub fn upper() -> Fst {
    byte_range(b'A', b'Z')
}

/// Deletes one run of one-or-more spaces.
pub fn delete_space() -> Fst {
    plus(delete_str(" "))
}

/// Collapses a run of one-or-more spaces down to exactly one.
pub fn delete_extra_space() -> Fst {
    concat(plus(delete_str(" ")), insert_str(" "))
}

/// Deletes zero or one space.
pub fn delete_zero_or_one_space() -> Fst {
    union(delete_str(" "), epsilon())
}

/// Inserts exactly one space.
pub fn insert_space() -> Fst {
    insert_str(" ")
}

/// `Σ*`: any sequence of valid characters, used as the universal alphabet
/// passed to `cdrewrite`.
pub fn sigma_star() -> Fst {
    star(vchar())
}
