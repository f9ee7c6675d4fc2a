//! Chinese fractions (spec.md §4.3 `[Fraction]`), grounded in
//! `original_source/tn/chinese/rules/fraction.py` ("numerator/denominator")
//! and `original_source/itn/chinese/rules/fraction.py` ("sign/denominator/
//! numerator", reading "X分之Y" as "Y/X"). Weight 1.04.

use crate::fst::{add_weight, compose, concat, delete_str, ques, Fst};
use crate::grammar::common::kanji_numeral::{itn_number, itn_sign, tn_number};
use crate::processor::{
    add_tokens, delete_tokens, tag_field, tag_field_spaced, untag_field, untag_field_spaced,
    ClassGrammar,
};

const WEIGHT: f32 = 1.04;

/// `"3/4"` -> `numerator: "三" denominator: "四"`.
pub struct FractionTn {
    tagger: Fst,
    verbalizer: Fst,
}

impl FractionTn {
    pub fn new() -> Self {
        let numerator = tag_field("numerator", tn_number());
        let denominator = tag_field_spaced("denominator", tn_number());
        let body = concat(numerator, concat(delete_str("/"), denominator));
        let tagger = add_weight(add_tokens("fraction", body), WEIGHT);

        // The verbalizer reads `denominator分之numerator`, matching the
        // token order `TokenParser` emits for TN fraction (denominator
        // first — spec.md §4.4's TN fraction order).
        let verbalizer = delete_tokens(
            "fraction",
            concat(
                untag_field("denominator"),
                concat(crate::fst::insert_str("分之"), untag_field_spaced("numerator")),
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

/// `"三分之二"` -> `sign: "" numerator: "2" denominator: "3"` -> `"2/3"`.
pub struct FractionItn {
    tagger: Fst,
    verbalizer: Fst,
}

impl FractionItn {
    pub fn new() -> Self {
        let sign = tag_field("sign", ques(itn_sign()));
        let denominator = tag_field_spaced("denominator", itn_number());
        let numerator = tag_field_spaced("numerator", itn_number());
        let body = concat(
            sign,
            concat(denominator, concat(delete_str("分之"), numerator)),
        );
        let tagger = add_weight(add_tokens("fraction", body), WEIGHT);

        let verbalizer = delete_tokens(
            "fraction",
            concat(
                untag_field("sign"),
                concat(
                    untag_field_spaced("numerator"),
                    concat(crate::fst::insert_str("/"), untag_field_spaced("denominator")),
                ),
            ),
        );

        Self { tagger, verbalizer }
    }
}

impl ClassGrammar for FractionItn {
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
    use crate::fst::{accept, shortest_path};

    #[test]
    fn itn_tags_and_verbalizes_fraction() {
        use crate::config::{Language, Operator};
        use crate::token::TokenParser;

        let fraction = FractionItn::new();
        let tagged = compose(&accept("三分之二"), fraction.tagger());
        let tagged_str = shortest_path(&tagged).unwrap();
        assert_eq!(
            tagged_str,
            "fraction { sign: \"\" denominator: \"3\" numerator: \"2\" }"
        );
        // The tagger reads denominator before numerator ("X分之Y" reads as
        // denominator X, numerator Y); the verbalizer expects the canonical
        // sign/numerator/denominator order (`TokenParser::itn_orders`), so
        // the full pipeline's reorder step runs between tag and verbalize.
        let reordered = TokenParser::new(Language::Zh, Operator::Itn)
            .reorder(&tagged_str)
            .unwrap();
        let verbalized = compose(&accept(&reordered), fraction.verbalizer());
        assert_eq!(shortest_path(&verbalized), Some("2/3".to_string()));
    }

    #[test]
    fn tn_tags_and_verbalizes_fraction() {
        let fraction = FractionTn::new();
        let tagged = compose(&accept("3/4"), fraction.tagger());
        let tagged_str = shortest_path(&tagged).unwrap();
        let verbalized = compose(&accept(&tagged_str), fraction.verbalizer());
        assert_eq!(shortest_path(&verbalized), Some("四分之三".to_string()));
    }
}
