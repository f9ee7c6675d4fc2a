//! Chinese cardinal numbers (spec.md §4.3 `[Cardinal]`), grounded in
//! `original_source/tn/chinese/rules/cardinal.py` and
//! `original_source/itn/chinese/rules/cardinal.py`. Weight 1.06, matching
//! `itn/chinese/inverse_normalizer.py`'s calibration relative to the other
//! classes.

use crate::fst::{accept, add_weight, compose, concat, digit, epsilon, plus, ques, union, Fst};
use crate::grammar::common::kanji_numeral::{
    itn_digits, itn_number, itn_number_below_million, itn_number_compound, tn_number,
};
use crate::processor::{add_tokens, delete_tokens, literal, tag_field, untag_field, ClassGrammar};

const WEIGHT: f32 = 1.06;

pub struct CardinalTn {
    tagger: Fst,
    verbalizer: Fst,
}

impl CardinalTn {
    pub fn new() -> Self {
        let tagger = add_weight(
            add_tokens("cardinal", tag_field("value", tn_number())),
            WEIGHT,
        );
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

/// ITN cardinal: a `value` field pulled out of either a general numeric
/// string (ID numbers, phone numbers, dotted IPs) or a kanji number
/// reading.
pub struct CardinalItn {
    tagger: Fst,
    verbalizer: Fst,
}

impl CardinalItn {
    /// `enable_standalone_number`: whether a bare cardinal may be tagged on
    /// its own (vs. only nested inside date/money/measure/etc).
    /// `enable_0_to_9`: whether a single bare digit counts as standalone.
    /// `enable_million`: whether a standalone cardinal may fold a trailing
    /// `万`-scale reading into `thousand * 10_000` ("一千两百万" -> 12000000).
    pub fn new(enable_standalone_number: bool, enable_0_to_9: bool, enable_million: bool) -> Self {
        let mut cardinal = union(union(id_like(), phone_like()), id_card_like());
        if enable_standalone_number {
            let compound = if enable_million {
                itn_number_compound()
            } else {
                itn_number_below_million()
            };
            let number = if enable_0_to_9 {
                union(itn_digits(), compound)
            } else {
                compound
            };
            cardinal = union(cardinal, number);
        }

        let tagger = add_weight(add_tokens("cardinal", tag_field("value", cardinal)), WEIGHT);
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

/// `127.0.0.1`-shaped dotted digit strings (IDs, IPs): ASCII digit runs
/// separated by literal dots.
fn id_like() -> Fst {
    concat(plus(digit()), plus(concat(literal("."), plus(digit()))))
}

/// Fixed-width phone-number-like digit runs (3, 5, or 11 digits), matching
/// the lengths `original_source` special-cases for phone numbers.
fn phone_like() -> Fst {
    union(union(repeat_digit(3), repeat_digit(5)), repeat_digit(11))
}

/// 17-digit ID-card body with an optional 18th check character (digit or
/// `X`/`x`), spec.md's "18-digit ID cards with trailing X/x" edge case.
fn id_card_like() -> Fst {
    let check = union(union(digit(), accept("X")), accept("x"));
    concat(repeat_digit(17), ques(check))
}

fn repeat_digit(n: usize) -> Fst {
    let mut out = epsilon();
    for _ in 0..n {
        out = concat(out, digit());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fst::{accept, shortest_path};

    #[test]
    fn tn_tags_cardinal_value() {
        let cardinal = CardinalTn::new();
        let composed = compose(&accept("120"), cardinal.tagger());
        assert_eq!(
            shortest_path(&composed),
            Some("cardinal { value: \"一百二十\" }".to_string())
        );
    }

    #[test]
    fn itn_tags_and_verbalizes_round_trip() {
        let cardinal = CardinalItn::new(true, true, true);
        let tagged = compose(&accept("一百二十"), cardinal.tagger());
        let tagged_str = shortest_path(&tagged).unwrap();
        let verbalized = compose(&accept(&tagged_str), cardinal.verbalizer());
        assert_eq!(shortest_path(&verbalized), Some("120".to_string()));
    }

    #[test]
    fn itn_tags_id_card_with_trailing_x() {
        let cardinal = CardinalItn::new(true, true, true);
        let composed = compose(&accept("11010519491231002X"), cardinal.tagger());
        assert_eq!(
            shortest_path(&composed),
            Some("cardinal { value: \"11010519491231002X\" }".to_string())
        );
    }

    #[test]
    fn itn_tags_phone_number() {
        let cardinal = CardinalItn::new(true, true, true);
        let composed = compose(&accept("13125617878"), cardinal.tagger());
        assert_eq!(
            shortest_path(&composed),
            Some("cardinal { value: \"13125617878\" }".to_string())
        );
    }

    #[test]
    fn itn_tags_million_scale_when_enabled() {
        let cardinal = CardinalItn::new(true, true, true);
        let composed = compose(&accept("一千两百万"), cardinal.tagger());
        assert_eq!(
            shortest_path(&composed),
            Some("cardinal { value: \"12000000\" }".to_string())
        );
    }

    #[test]
    fn itn_skips_million_scale_when_disabled() {
        let cardinal = CardinalItn::new(true, true, false);
        let composed = compose(&accept("一千两百万"), cardinal.tagger());
        assert_eq!(shortest_path(&composed), None);
    }
}
