//! Chinese math expressions, ITN only (spec.md §4.3 `[Math]`), grounded in
//! `original_source/itn/chinese/rules/math.py`. Weight 1.10 — applied last
//! among the class graph so that a well-formed date/money/measure match
//! always wins over an incidental "number operator number" reading.

use crate::fst::{add_weight, compose, concat, invert, plus, string_file, Fst};
use crate::grammar::common::kanji_numeral::itn_number;
use crate::processor::{add_tokens, delete_tokens, tag_field, untag_field, ClassGrammar};

const WEIGHT: f32 = 1.10;
const OPERATOR_TSV: &str = include_str!("../../../data/zh/math/operator.tsv");

fn operator_tn() -> Fst {
    string_file(OPERATOR_TSV)
}

fn operator_itn() -> Fst {
    invert(operator_tn())
}

/// `"三加五等于八"` -> `value: "3+5=8"`.
pub struct MathItn {
    tagger: Fst,
    verbalizer: Fst,
}

impl MathItn {
    pub fn new() -> Self {
        let expr = concat(itn_number(), plus(concat(operator_itn(), itn_number())));
        let tagger = add_weight(add_tokens("math", tag_field("value", expr)), WEIGHT);
        let verbalizer = delete_tokens("math", untag_field("value"));
        Self { tagger, verbalizer }
    }
}

impl ClassGrammar for MathItn {
    fn name(&self) -> &str {
        "math"
    }
    fn tagger(&self) -> &Fst {
        &self.tagger
    }
    fn verbalizer(&self) -> &Fst {
        &self.verbalizer
    }
}
