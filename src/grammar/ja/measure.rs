//! Japanese measures (spec.md §4.3 `[Measure]`), grounded in
//! `original_source/tn/japanese/rules/measure.py` and its ITN counterpart.
//! Weight 1.04, matching the other languages' measure calibration.
//!
//! Keeps the plain `number + unit` shape (`"10km"` <-> `"十キロメートル"`).
//! Drops the source's `から`-range reading (`"1-11月"`) and the `毎<unit>`
//! rate suffix, noted in DESIGN.md -- both need a second unit lexicon
//! (time units for the rate denominator) this crate doesn't carry data
//! for.

use crate::fst::{add_weight, compose, concat, invert, string_file, Fst};
use crate::grammar::common::kanji_numeral::{itn_number, tn_number};
use crate::processor::{add_tokens, delete_tokens, tag_field, untag_field, ClassGrammar};

const WEIGHT: f32 = 1.04;
const UNIT_TSV: &str = include_str!("../../../data/ja/measure/unit.tsv");

fn unit_tn() -> Fst {
    string_file(UNIT_TSV)
}

fn unit_itn() -> Fst {
    invert(unit_tn())
}

pub struct MeasureTn {
    tagger: Fst,
    verbalizer: Fst,
}

impl MeasureTn {
    pub fn new() -> Self {
        let value = tag_field("value", concat(tn_number(), unit_tn()));
        let tagger = add_weight(add_tokens("measure", value), WEIGHT);
        let verbalizer = delete_tokens("measure", untag_field("value"));
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

pub struct MeasureItn {
    tagger: Fst,
    verbalizer: Fst,
}

impl MeasureItn {
    pub fn new() -> Self {
        let value = tag_field("value", concat(itn_number(), unit_itn()));
        let tagger = add_weight(add_tokens("measure", value), WEIGHT);
        let verbalizer = delete_tokens("measure", untag_field("value"));
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
    fn tn_tags_unit_measure() {
        let measure = MeasureTn::new();
        let composed = compose(&accept("10km"), measure.tagger());
        assert_eq!(
            shortest_path(&composed),
            Some("measure { value: \"十キロメートル\" }".to_string())
        );
    }

    #[test]
    fn itn_tags_percent() {
        let measure = MeasureItn::new();
        let composed = compose(&accept("三十パーセント"), measure.tagger());
        assert_eq!(
            shortest_path(&composed),
            Some("measure { value: \"30%\" }".to_string())
        );
    }

    #[test]
    fn itn_round_trips_unit_measure() {
        let measure = MeasureItn::new();
        let tagged = compose(&accept("十キログラム"), measure.tagger());
        let tagged_str = shortest_path(&tagged).unwrap();
        assert_eq!(tagged_str, "measure { value: \"10kg\" }");
        let verbalized = compose(&accept(&tagged_str), measure.verbalizer());
        assert_eq!(shortest_path(&verbalized), Some("10kg".to_string()));
    }
}
