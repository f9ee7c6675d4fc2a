//! English cardinal reading (spec.md §4.3 `[Cardinal]`, TN only), grounded
//! in `original_source/tn/english/rules/cardinal.py`. That implementation
//! loads a prebuilt `cardinal_number_name.far` compiled offline; since no
//! such artifact is available here, this builds the same digit/teen/tens/
//! hundred/thousand decomposition compositionally, the way
//! `grammar::common::kanji_numeral` does for Chinese.
//!
//! Caps at six digits (up to 999,999). Million-and-above grouping is
//! dropped as a documented simplification (see DESIGN.md) since none of
//! the downstream classes (date, money, fraction) ever feed it a larger
//! span.

use crate::fst::{
    add_weight, concat, delete_str, insert_str, invert, plus, ques, string_file, union, Fst,
};
use crate::processor::{add_tokens, delete_tokens, tag_field, untag_field, ClassGrammar};

const WEIGHT: f32 = 1.06;

const DIGIT_TSV: &str = include_str!("../../../data/en/number/digit.tsv");
const ZERO_TSV: &str = include_str!("../../../data/en/number/zero.tsv");
const TEEN_TSV: &str = include_str!("../../../data/en/number/teen.tsv");
const TENS_TSV: &str = include_str!("../../../data/en/number/tens.tsv");

pub fn tn_digit() -> Fst {
    string_file(DIGIT_TSV)
}

pub fn tn_zero() -> Fst {
    string_file(ZERO_TSV)
}

fn tn_teen() -> Fst {
    string_file(TEEN_TSV)
}

fn tn_tens_digit() -> Fst {
    string_file(TENS_TSV)
}

/// Any single digit, `"0"` through `"9"`.
pub fn tn_single_digit() -> Fst {
    union(tn_zero(), tn_digit())
}

/// Exactly two digits, leading digit nonzero: `"10"`.."99"`.
fn tn_two() -> Fst {
    let tens = concat(
        tn_tens_digit(),
        union(delete_str("0"), concat(insert_str(" "), tn_digit())),
    );
    union(tn_teen(), tens)
}

/// Exactly two digits, any value except `"00"`: `"01"`.."99"`, leading
/// zero deleted for the `"0X"` case.
fn tn_last_two_nonzero() -> Fst {
    union(concat(delete_str("0"), tn_digit()), tn_two())
}

/// Exactly three digits, leading (hundreds) digit nonzero: `"100"`.."999"`.
fn tn_three() -> Fst {
    concat(
        tn_digit(),
        concat(
            insert_str(" hundred"),
            union(delete_str("00"), concat(insert_str(" "), tn_last_two_nonzero())),
        ),
    )
}

/// Any three digits, `"000"`.."999"`, `"000"` mapping to the empty string.
fn tn_three_any() -> Fst {
    union(
        union(tn_three(), concat(delete_str("0"), tn_last_two_nonzero())),
        delete_str("000"),
    )
}

/// Any three digits excluding `"000"` (used after a scale word, where the
/// zero case is handled by deleting the whole group instead).
fn tn_three_any_nonzero() -> Fst {
    union(tn_three(), concat(delete_str("0"), tn_last_two_nonzero()))
}

/// Four to six digits: a 1-3 digit leading group (nonzero), a `" thousand"`
/// scale word, then a trailing group of exactly three digits.
fn tn_thousand_group() -> Fst {
    let head = union(union(tn_three(), tn_two()), tn_digit());
    let tail = union(delete_str("000"), concat(insert_str(" "), tn_three_any_nonzero()));
    concat(head, concat(insert_str(" thousand"), tail))
}

/// The digit-by-digit reading used after a decimal point: `".5"` ->
/// `"point five"`, `".50"` -> `"point five zero"`.
fn tn_decimal_tail() -> Fst {
    concat(
        delete_str("."),
        concat(insert_str("point"), plus(concat(insert_str(" "), tn_single_digit()))),
    )
}

/// The integer reading alone, no sign, no decimal tail, up to six digits:
/// `money.rs` and `fraction.rs` read their integer-valued spans with this
/// rather than the full signed/decimal `tn_number`.
pub fn tn_integer() -> Fst {
    union(
        union(tn_single_digit(), tn_two()),
        union(tn_three(), tn_thousand_group()),
    )
}

/// The full TN cardinal reading: digit string -> English words, with an
/// optional leading minus sign and an optional decimal tail.
pub fn tn_number() -> Fst {
    let with_decimal = concat(tn_integer(), ques(tn_decimal_tail()));
    concat(ques(concat(delete_str("-"), insert_str("minus "))), with_decimal)
}

/// Exactly two digits read as a standalone group (`"20"` -> `"twenty"`,
/// `"12"` -> `"twelve"`), exposed for `date.rs`'s year-as-two-pairs reading.
pub fn tn_two_digit_group() -> Fst {
    tn_two()
}

/// The ITN reading: spoken English words -> digit string, the inverse of
/// [`tn_number`]. Grounded in `original_source/itn/english/rules/
/// cardinal.py`, which builds the same digit/teen/tens/hundred/thousand
/// grammar the other direction around; inverting the TN transducer gets
/// the identical relation without re-deriving it, the way `grammar::zh::
/// date`'s `month_value_itn`/`day_value_itn` invert their TN counterparts.
pub fn itn_number() -> Fst {
    invert(tn_number())
}

/// `"2012"` read as a bare cardinal (not a year) -> `cardinal { value:
/// "two thousand twelve" }`; the class any standalone digit span that
/// isn't claimed by `date`/`money`/`fraction` falls through to.
pub struct CardinalTn {
    tagger: Fst,
    verbalizer: Fst,
}

impl CardinalTn {
    pub fn new() -> Self {
        let tagger = add_weight(add_tokens("cardinal", tag_field("value", tn_number())), WEIGHT);
        let verbalizer = delete_tokens("cardinal", untag_field("value"));
        Self { tagger, verbalizer }
    }
}

impl ClassGrammar for CardinalTn {
    fn name(&self) -> &str {
        "cardinal"
    }
    fn tagger(&self) -> &Fst {
        &self.tagger
    }
    fn verbalizer(&self) -> &Fst {
        &self.verbalizer
    }
}

/// `"minus twenty three"` -> `cardinal { value: "-23" }`.
pub struct CardinalItn {
    tagger: Fst,
    verbalizer: Fst,
}

impl CardinalItn {
    pub fn new() -> Self {
        let tagger = add_weight(add_tokens("cardinal", tag_field("value", itn_number())), WEIGHT);
        let verbalizer = delete_tokens("cardinal", untag_field("value"));
        Self { tagger, verbalizer }
    }
}

impl ClassGrammar for CardinalItn {
    fn name(&self) -> &str {
        "cardinal"
    }
    fn tagger(&self) -> &Fst {
        &self.tagger
    }
    fn verbalizer(&self) -> &Fst {
        &self.verbalizer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fst::{accept, compose, shortest_path};

    #[test]
    fn tags_and_verbalizes_bare_cardinal() {
        let cardinal = CardinalTn::new();
        let composed = compose(&accept("125"), cardinal.tagger());
        let tagged = shortest_path(&composed).unwrap();
        assert_eq!(tagged, "cardinal { value: \"one hundred twenty five\" }");

        let composed = compose(&accept(&tagged), cardinal.verbalizer());
        assert_eq!(
            shortest_path(&composed),
            Some("one hundred twenty five".to_string())
        );
    }

    #[test]
    fn reads_single_digit() {
        let composed = compose(&accept("5"), &tn_number());
        assert_eq!(shortest_path(&composed), Some("five".to_string()));
    }

    #[test]
    fn reads_teen() {
        let composed = compose(&accept("12"), &tn_number());
        assert_eq!(shortest_path(&composed), Some("twelve".to_string()));
    }

    #[test]
    fn reads_tens_with_ones() {
        let composed = compose(&accept("45"), &tn_number());
        assert_eq!(shortest_path(&composed), Some("forty five".to_string()));
    }

    #[test]
    fn reads_round_hundred() {
        let composed = compose(&accept("300"), &tn_number());
        assert_eq!(shortest_path(&composed), Some("three hundred".to_string()));
    }

    #[test]
    fn reads_hundred_with_remainder() {
        let composed = compose(&accept("125"), &tn_number());
        assert_eq!(
            shortest_path(&composed),
            Some("one hundred twenty five".to_string())
        );
    }

    #[test]
    fn reads_thousand() {
        let composed = compose(&accept("2012"), &tn_number());
        assert_eq!(
            shortest_path(&composed),
            Some("two thousand twelve".to_string())
        );
    }

    #[test]
    fn reads_decimal() {
        let composed = compose(&accept("12.50"), &tn_number());
        assert_eq!(
            shortest_path(&composed),
            Some("twelve point five zero".to_string())
        );
    }

    #[test]
    fn itn_tags_and_verbalizes_round_trip() {
        let cardinal = CardinalItn::new();
        let tagged = compose(&accept("one hundred twenty five"), cardinal.tagger());
        let tagged_str = shortest_path(&tagged).unwrap();
        assert_eq!(tagged_str, "cardinal { value: \"125\" }");
        let verbalized = compose(&accept(&tagged_str), cardinal.verbalizer());
        assert_eq!(shortest_path(&verbalized), Some("125".to_string()));
    }

    #[test]
    fn itn_tags_negative_number() {
        let cardinal = CardinalItn::new();
        let composed = compose(&accept("minus twenty three"), cardinal.tagger());
        assert_eq!(
            shortest_path(&composed),
            Some("cardinal { value: \"-23\" }".to_string())
        );
    }
}
