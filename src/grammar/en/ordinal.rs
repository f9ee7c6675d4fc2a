//! English ordinal words (ITN only), grounded in `original_source/itn/
//! english/rules/ordinal.py` ("thirteenth" -> `ordinal { value: "13th" }`).
//!
//! The source builds this by stripping an ordinal word down to its cardinal
//! spelling, parsing that with the cardinal grammar, then appending a
//! digit-suffix (`st`/`nd`/`rd`/`th`) via a rewrite rule keyed on the final
//! digit. This crate instead enumerates the closed 1..99 vocabulary
//! directly into a lexicon (`data/en/ordinal/word.tsv`, extending the same
//! digit-to-word-phrase shape `en::date::day_ordinal.tsv` already uses for
//! 1..31), since every ordinal this class needs to recognize is a fixed
//! word or two-word phrase with no open-ended composition above ninety
//! ninth.

use crate::fst::{add_weight, invert, string_file, Fst};
use crate::processor::{add_tokens, delete_tokens, tag_field, untag_field, ClassGrammar};

const WEIGHT: f32 = 1.06;
const ORDINAL_WORD_TSV: &str = include_str!("../../../data/en/ordinal/word.tsv");

fn ordinal_value_itn() -> Fst {
    invert(string_file(ORDINAL_WORD_TSV))
}

/// `"twenty third"` -> `ordinal { value: "23rd" }`.
pub struct OrdinalItn {
    tagger: Fst,
    verbalizer: Fst,
}

impl OrdinalItn {
    pub fn new() -> Self {
        let tagger = add_weight(
            add_tokens("ordinal", tag_field("value", ordinal_value_itn())),
            WEIGHT,
        );
        let verbalizer = delete_tokens("ordinal", untag_field("value"));
        Self { tagger, verbalizer }
    }
}

impl ClassGrammar for OrdinalItn {
    fn name(&self) -> &str {
        "ordinal"
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
    fn tags_simple_ordinal() {
        let ordinal = OrdinalItn::new();
        let composed = compose(&accept("thirteenth"), ordinal.tagger());
        assert_eq!(
            shortest_path(&composed),
            Some("ordinal { value: \"13th\" }".to_string())
        );
    }

    #[test]
    fn tags_and_verbalizes_compound_ordinal() {
        let ordinal = OrdinalItn::new();
        let tagged = compose(&accept("twenty third"), ordinal.tagger());
        let tagged_str = shortest_path(&tagged).unwrap();
        assert_eq!(tagged_str, "ordinal { value: \"23rd\" }");
        let verbalized = compose(&accept(&tagged_str), ordinal.verbalizer());
        assert_eq!(shortest_path(&verbalized), Some("23rd".to_string()));
    }
}
