//! Compositional CJK-numeral reading, grounded in
//! `original_source/tn/chinese/rules/cardinal.py` (digit string → kanji
//! reading) and `original_source/itn/chinese/rules/cardinal.py` (the
//! inverse). Shared by `grammar::zh::cardinal` directly and by
//! `grammar::ja::date` for year/day readings, since Japanese uses the same
//! glyphs for 0-9 and the same positional teen/tens/hundred/thousand
//! decomposition.
//!
//! `original_source`'s tagger additionally special-cases comma-grouped
//! thousands and a handful of fuzzy "five or six" range readings
//! (`special_2number`/`special_3number`); those are ASR-postprocessing
//! conveniences orthogonal to the core positional reading and are dropped
//! here (noted in DESIGN.md) rather than risk an unverified construction.

use crate::fst::{
    compose, concat, cross, delete_str, insert_str, invert, plus, ques, string_file, union, Fst,
};

const DIGIT_TSV: &str = include_str!("../../../data/zh/number/digit.tsv");
const ZERO_TSV: &str = include_str!("../../../data/zh/number/zero.tsv");
const SIGN_TSV: &str = include_str!("../../../data/zh/number/sign.tsv");
const DOT_TSV: &str = include_str!("../../../data/zh/number/dot.tsv");

pub fn tn_digit() -> Fst {
    string_file(DIGIT_TSV)
}

pub fn tn_zero() -> Fst {
    string_file(ZERO_TSV)
}

/// Any single digit 0-9, digit-string side on the left.
pub fn tn_digits() -> Fst {
    union(tn_zero(), tn_digit())
}

pub fn tn_sign() -> Fst {
    string_file(SIGN_TSV)
}

pub fn tn_dot() -> Fst {
    string_file(DOT_TSV)
}

pub fn itn_digit() -> Fst {
    invert(tn_digit())
}

pub fn itn_zero() -> Fst {
    invert(tn_zero())
}

pub fn itn_digits() -> Fst {
    invert(tn_digits())
}

pub fn itn_sign() -> Fst {
    invert(tn_sign())
}

pub fn itn_dot() -> Fst {
    invert(tn_dot())
}

/// `tens | teen` consuming the last two digits of a digit string: `"11"` ->
/// `"十一"`, `"20"` -> `"二十"`, `"30"` -> `"三十"`.
fn tn_tens() -> Fst {
    let teen = concat(delete_str("1"), concat(insert_str("十"), union(tn_digit(), delete_str("0"))));
    let tens = concat(tn_digit(), concat(insert_str("十"), union(tn_digit(), delete_str("0"))));
    union(teen, tens)
}

fn tn_hundred() -> Fst {
    let tail = union(
        union(tn_tens(), concat(tn_zero(), tn_digit())),
        delete_str("00"),
    );
    concat(tn_digit(), concat(insert_str("百"), tail))
}

fn tn_thousand() -> Fst {
    let tail = union(
        union(
            union(tn_hundred(), concat(tn_zero(), tn_tens())),
            concat(delete_str("0"), concat(tn_zero(), tn_digit())),
        ),
        delete_str("000"),
    );
    concat(tn_digit(), concat(insert_str("千"), tail))
}

fn tn_ten_thousand() -> Fst {
    let head = union(union(union(tn_thousand(), tn_hundred()), tn_tens()), tn_digit());
    let tail = union(
        union(tn_thousand(), concat(tn_zero(), tn_hundred())),
        union(
            concat(delete_str("0"), concat(tn_zero(), tn_tens())),
            union(
                concat(delete_str("00"), concat(tn_zero(), tn_digit())),
                delete_str("0000"),
            ),
        ),
    );
    concat(head, concat(insert_str("万"), tail))
}

/// Exactly two digits (teen or tens+ones), kanji reading only, with none of
/// `tn_number`'s 二->两 substitution -- `grammar::ja::date` composes its own
/// year reading from this rather than `tn_number`, since that rewrite is
/// specific to Mandarin.
pub fn tn_tens_group() -> Fst {
    tn_tens()
}

/// Exactly three digits (hundred group), kanji reading only, same caveat
/// as `tn_tens_group`.
pub fn tn_hundred_group() -> Fst {
    tn_hundred()
}

/// The full TN cardinal reading: digit string -> kanji, including an
/// optional leading sign and decimal tail.
pub fn tn_number() -> Fst {
    let number = union(
        union(union(tn_digits(), tn_tens()), union(tn_hundred(), tn_thousand())),
        tn_ten_thousand(),
    );
    let with_decimal = concat(number, ques(concat(tn_dot(), plus(tn_digits()))));
    let signed = concat(ques(tn_sign()), with_decimal);
    let two_hundred = crate::fst::build_rule(cross("二百", "两百"));
    let two_thousand = crate::fst::build_rule(cross("二千", "两千"));
    let two_ten_thousand = crate::fst::build_rule(cross("二万", "两万"));
    compose(&compose(&compose(&signed, &two_hundred), &two_thousand), &two_ten_thousand)
}

fn itn_tens() -> Fst {
    invert(tn_tens())
}

fn itn_hundred() -> Fst {
    invert(tn_hundred())
}

fn itn_thousand() -> Fst {
    invert(tn_thousand())
}

fn itn_ten_thousand() -> Fst {
    invert(tn_ten_thousand())
}

/// Rewrites `两百`/`两千`/`两万` to `二百`/`二千`/`二万` ahead of the
/// hundred/thousand/ten-thousand readers -- the ITN-side mirror of
/// `tn_number`'s forward `二`->`两` substitution, reinstating `两` as a
/// second digit-2 reading (`original_source/itn/japanese/rules/cardinal.py`).
fn liang_to_er() -> Fst {
    let hundred = crate::fst::build_rule(cross("两百", "二百"));
    let thousand = crate::fst::build_rule(cross("两千", "二千"));
    let ten_thousand = crate::fst::build_rule(cross("两万", "二万"));
    compose(&compose(&hundred, &thousand), &ten_thousand)
}

/// The compound (multi-digit, non-bare) portion of ITN cardinal reading
/// below the `万` scale: kanji -> digit string for tens/hundred/thousand
/// groups. `cardinal.rs` uses this when `enable_million` is off.
pub fn itn_number_below_million() -> Fst {
    let number = union(union(itn_tens(), itn_hundred()), itn_thousand());
    compose(&liang_to_er(), &number)
}

/// The compound (multi-digit, non-bare) portion of ITN cardinal reading:
/// kanji -> digit string for anything that isn't a single bare digit.
/// `cardinal.rs` uses this directly when `enable_0_to_9` is off.
pub fn itn_number_compound() -> Fst {
    let number = union(
        union(itn_tens(), itn_hundred()),
        union(itn_thousand(), itn_ten_thousand()),
    );
    compose(&liang_to_er(), &number)
}

/// The full ITN cardinal reading: kanji -> digit string, bare digits
/// included, with optional sign and decimal tail.
pub fn itn_number() -> Fst {
    let number = union(itn_digits(), itn_number_compound());
    let with_decimal = concat(number, ques(concat(itn_dot(), plus(itn_digits()))));
    concat(ques(itn_sign()), with_decimal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fst::{accept, shortest_path};

    #[test]
    fn tn_reads_hundred() {
        let composed = compose(&accept("120"), &tn_number());
        assert_eq!(shortest_path(&composed), Some("一百二十".into()));
    }

    #[test]
    fn tn_two_hundred_becomes_liang_bai() {
        let composed = compose(&accept("200"), &tn_number());
        assert_eq!(shortest_path(&composed), Some("两百".into()));
    }

    #[test]
    fn itn_reads_hundred_back() {
        let composed = compose(&accept("一百二十"), &itn_number());
        assert_eq!(shortest_path(&composed), Some("120".into()));
    }

    #[test]
    fn itn_reads_thousand_with_gap() {
        let composed = compose(&accept("一千零一"), &itn_number());
        assert_eq!(shortest_path(&composed), Some("1001".into()));
    }

    #[test]
    fn itn_reads_ten_thousand() {
        let composed = compose(&accept("一万"), &itn_number());
        assert_eq!(shortest_path(&composed), Some("10000".into()));
    }

    #[test]
    fn itn_reads_liang_bai_as_two_hundred() {
        let composed = compose(&accept("两百"), &itn_number());
        assert_eq!(shortest_path(&composed), Some("200".into()));
    }

    #[test]
    fn itn_reads_million_scale_with_liang() {
        let composed = compose(&accept("一千两百万"), &itn_number());
        assert_eq!(shortest_path(&composed), Some("12000000".into()));
    }

    #[test]
    fn itn_number_below_million_excludes_ten_thousand_scale() {
        let composed = compose(&accept("一千两百万"), &itn_number_below_million());
        assert_eq!(shortest_path(&composed), None);
    }
}
