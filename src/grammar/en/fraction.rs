//! English fractions (spec.md §4.3 `[Fraction]`, TN only), grounded in
//! `original_source/tn/english/rules/fraction.py`. Supports the plain
//! `numerator/denominator` shape with `ordinal_denominator.tsv`'s word
//! forms (`"3/4"` -> `"three fourths"`); mixed numbers (`"1 1/2"`) and
//! negative fractions are dropped, noted in DESIGN.md.
//!
//! Denominator pluralization (`fourth` -> `fourths`) is decided at tag
//! time, keyed on whether the numerator span is literally `"1"`, so the
//! verbalizer stays a plain concatenation with no pluralization logic of
//! its own.

use crate::fst::{add_weight, concat, cross, delete_str, insert_str, union, union_all, Fst};
use crate::grammar::en::cardinal::{tn_two_digit_group, tn_zero};
use crate::processor::{
    add_tokens, delete_tokens, tag_field, tag_field_spaced, untag_field, untag_field_spaced,
    ClassGrammar,
};

const WEIGHT: f32 = 1.06;
const DIGIT_TSV: &str = include_str!("../../../data/en/number/digit.tsv");
const ORDINAL_DENOMINATOR_TSV: &str = include_str!("../../../data/en/fraction/ordinal_denominator.tsv");

/// Any single digit except `"1"`: the numerator reading used when the
/// plural denominator form applies.
fn digit_excluding_one() -> Fst {
    union_all(DIGIT_TSV.lines().filter_map(|line| {
        let line = line.trim_end_matches('\r');
        if line.is_empty() || line.starts_with('#') {
            return None;
        }
        let mut cols = line.split('\t');
        let digit = cols.next()?;
        let word = cols.next()?;
        if digit == "1" {
            return None;
        }
        Some(cross(digit, word))
    }))
}

fn numerator_plural() -> Fst {
    union(union(tn_zero(), digit_excluding_one()), tn_two_digit_group())
}

fn denominator_singular() -> Fst {
    crate::fst::string_file(ORDINAL_DENOMINATOR_TSV)
}

fn denominator_plural() -> Fst {
    concat(denominator_singular(), insert_str("s"))
}

/// `"3/4"` -> `fraction { numerator: "three" denominator: "fourths" }`;
/// `"1/2"` -> `fraction { numerator: "one" denominator: "half" }`.
pub struct FractionTn {
    tagger: Fst,
    verbalizer: Fst,
}

impl FractionTn {
    pub fn new() -> Self {
        let singular = concat(
            tag_field("numerator", cross("1", "one")),
            concat(delete_str("/"), tag_field_spaced("denominator", denominator_singular())),
        );
        let plural = concat(
            tag_field("numerator", numerator_plural()),
            concat(delete_str("/"), tag_field_spaced("denominator", denominator_plural())),
        );
        let tagger = add_weight(add_tokens("fraction", union(singular, plural)), WEIGHT);

        let verbalizer = delete_tokens(
            "fraction",
            concat(
                untag_field("numerator"),
                concat(insert_str(" "), untag_field_spaced("denominator")),
            ),
        );

        Self { tagger, verbalizer }
    }
}

impl ClassGrammar for FractionTn {
    fn name(&self) -> &str {
        "fraction"
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
    fn tags_plural_fraction() {
        let fraction = FractionTn::new();
        let composed = compose(&accept("3/4"), fraction.tagger());
        assert_eq!(
            shortest_path(&composed),
            Some("fraction { numerator: \"three\" denominator: \"fourths\" }".to_string())
        );
    }

    #[test]
    fn tags_singular_fraction() {
        let fraction = FractionTn::new();
        let composed = compose(&accept("1/2"), fraction.tagger());
        assert_eq!(
            shortest_path(&composed),
            Some("fraction { numerator: \"one\" denominator: \"half\" }".to_string())
        );
    }

    #[test]
    fn verbalizes_fraction() {
        let fraction = FractionTn::new();
        let tagged = "fraction { numerator: \"three\" denominator: \"fourths\" }";
        let composed = compose(&accept(tagged), fraction.verbalizer());
        assert_eq!(shortest_path(&composed), Some("three fourths".to_string()));
    }
}
