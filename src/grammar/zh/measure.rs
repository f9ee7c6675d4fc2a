//! Chinese measures (spec.md §4.3 `[Measure]`), grounded in
//! `original_source/itn/chinese/rules/measure.py`. Weight 1.04.
//!
//! Keeps the source's shapes: plain `number + unit`, `百分之N` percent, the
//! `每<unit><number><unit>` rate (`"10km/h"` <-> `"每小时十千米"`), and a
//! `number 到 number (+ unit)` range (spec.md §4.3's "Range support: number
//! to number + unit", `"百分之三十到四十"` <-> `"30%~40%"`). Drops the fuzzy
//! "several hundred/thousand" range reading (`measure_sp`'s
//! `unit_sp_case1`), noted in DESIGN.md.
//!
//! The rate branch's tagger emits `numerator` before `denominator` (the
//! order the input is read in); its verbalizer expects the canonical
//! `denominator`-before-`numerator` order spec.md §4.4's token order table
//! defines for measure, matching the reorder step the full pipeline runs
//! between tag and verbalize.

use crate::fst::{add_weight, compose, concat, delete_str, insert_str, invert, string_file, union, Fst};
use crate::grammar::common::kanji_numeral::{itn_number, tn_number};
use crate::processor::{
    add_tokens, delete_tokens, tag_field, tag_field_spaced, untag_field, untag_field_spaced,
    ClassGrammar,
};

const WEIGHT: f32 = 1.04;
const UNIT_TSV: &str = include_str!("../../../data/zh/measure/unit.tsv");

fn unit_tn() -> Fst {
    string_file(UNIT_TSV)
}

fn unit_itn() -> Fst {
    invert(unit_tn())
}

/// `"10km"` -> `value: "十千米"`; `"10km/h"` (rate) -> `numerator: "十千米"
/// denominator: "小时"`, verbalized as `每小时十千米`.
pub struct MeasureTn {
    tagger: Fst,
    verbalizer: Fst,
}

impl MeasureTn {
    pub fn new() -> Self {
        let plain = tag_field("value", concat(tn_number(), unit_tn()));
        let range = tag_field(
            "value",
            concat(
                tn_number(),
                concat(delete_str("~"), concat(insert_str("到"), concat(tn_number(), unit_tn()))),
            ),
        );
        let rate = concat(
            tag_field("numerator", concat(tn_number(), unit_tn())),
            concat(delete_str("/"), tag_field_spaced("denominator", unit_tn())),
        );
        let tagger = add_weight(add_tokens("measure", union(union(plain, range), rate)), WEIGHT);

        let plain_verbalizer = untag_field("value");
        let rate_verbalizer = concat(
            insert_str("每"),
            concat(untag_field("denominator"), untag_field_spaced("numerator")),
        );
        let verbalizer = delete_tokens("measure", union(plain_verbalizer, rate_verbalizer));
        Self { tagger, verbalizer }
    }
}

impl ClassGrammar for MeasureTn {
    fn name(&self) -> &str {
        "measure"
    }
    fn tagger(&self) -> &Fst {
        &self.tagger
    }
    fn verbalizer(&self) -> &Fst {
        &self.verbalizer
    }
}

/// `"十千米"` -> `value: "10km"`; `"百分之三十"` -> `value: "30%"`.
pub struct MeasureItn {
    tagger: Fst,
    verbalizer: Fst,
}

impl MeasureItn {
    pub fn new() -> Self {
        let measure = concat(itn_number(), unit_itn());
        let percent = concat(
            delete_str("百分之"),
            concat(itn_number(), insert_str("%")),
        );
        let percent_range = concat(
            delete_str("百分之"),
            concat(
                itn_number(),
                concat(
                    insert_str("%~"),
                    concat(delete_str("到"), concat(itn_number(), insert_str("%"))),
                ),
            ),
        );
        let unit_range = concat(
            itn_number(),
            concat(
                delete_str("到"),
                concat(insert_str("~"), concat(itn_number(), unit_itn())),
            ),
        );
        let plain = tag_field("value", union(union(measure.clone(), percent), union(percent_range, unit_range)));
        let rate = concat(
            concat(delete_str("每"), tag_field("denominator", unit_itn())),
            tag_field_spaced("numerator", measure),
        );

        let tagger = add_weight(add_tokens("measure", union(plain, rate)), WEIGHT);

        let plain_verbalizer = untag_field("value");
        let rate_verbalizer = concat(
            untag_field("numerator"),
            concat(insert_str("/"), untag_field_spaced("denominator")),
        );
        let verbalizer = delete_tokens("measure", union(plain_verbalizer, rate_verbalizer));
        Self { tagger, verbalizer }
    }
}

impl ClassGrammar for MeasureItn {
    fn name(&self) -> &str {
        "measure"
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
    use crate::fst::{accept, shortest_path};

    #[test]
    fn itn_tags_percent() {
        let measure = MeasureItn::new();
        let composed = compose(&accept("百分之三十"), measure.tagger());
        assert_eq!(
            shortest_path(&composed),
            Some("measure { value: \"30%\" }".to_string())
        );
    }

    #[test]
    fn itn_tags_percent_range() {
        let measure = MeasureItn::new();
        let composed = compose(&accept("百分之三十到四十"), measure.tagger());
        assert_eq!(
            shortest_path(&composed),
            Some("measure { value: \"30%~40%\" }".to_string())
        );
    }

    #[test]
    fn tn_tags_unit_range() {
        let measure = MeasureTn::new();
        let composed = compose(&accept("5~10kg"), measure.tagger());
        assert_eq!(
            shortest_path(&composed),
            Some("measure { value: \"五到十千克\" }".to_string())
        );
    }

    #[test]
    fn itn_tags_unit_measure() {
        let measure = MeasureItn::new();
        let composed = compose(&accept("十千米"), measure.tagger());
        assert_eq!(
            shortest_path(&composed),
            Some("measure { value: \"10km\" }".to_string())
        );
    }

    #[test]
    fn tn_tags_unit_measure() {
        let measure = MeasureTn::new();
        let composed = compose(&accept("10km"), measure.tagger());
        assert_eq!(
            shortest_path(&composed),
            Some("measure { value: \"十千米\" }".to_string())
        );
    }

    #[test]
    fn tn_tags_rate() {
        let measure = MeasureTn::new();
        let composed = compose(&accept("10km/h"), measure.tagger());
        assert_eq!(
            shortest_path(&composed),
            Some("measure { numerator: \"十千米\" denominator: \"小时\" }".to_string())
        );
    }

    #[test]
    fn tn_verbalizes_rate_in_canonical_order() {
        let measure = MeasureTn::new();
        let tagged = "measure { denominator: \"小时\" numerator: \"十千米\" }";
        let composed = compose(&accept(tagged), measure.verbalizer());
        assert_eq!(shortest_path(&composed), Some("每小时十千米".to_string()));
    }

    #[test]
    fn itn_tags_rate() {
        let measure = MeasureItn::new();
        let composed = compose(&accept("每小时十千米"), measure.tagger());
        assert_eq!(
            shortest_path(&composed),
            Some("measure { denominator: \"h\" numerator: \"10km\" }".to_string())
        );
    }

    #[test]
    fn itn_verbalizes_rate_in_canonical_order() {
        let measure = MeasureItn::new();
        let tagged = "measure { numerator: \"10km\" denominator: \"h\" }";
        let composed = compose(&accept(tagged), measure.verbalizer());
        assert_eq!(shortest_path(&composed), Some("10km/h".to_string()));
    }
}
