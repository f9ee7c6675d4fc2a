//! English whitelist (spec.md §4.3 `[Whitelist]`, TN only): abbreviation
//! expansion keyed on a flat lexicon (`"Mr."` -> `"mister"`), grounded in
//! `original_source/tn/english/rules/whitelist.py`'s `string_file` lookup.
//! Weight 1.01, matching `grammar::zh::whitelist`'s rationale: known
//! abbreviations should win over any other class reading the same span.

use crate::fst::{add_weight, string_file, Fst};
use crate::processor::{add_tokens, delete_tokens, tag_field, untag_field, ClassGrammar};

const WEIGHT: f32 = 1.01;
const WHITELIST_TSV: &str = include_str!("../../../data/en/default/whitelist.tsv");

pub struct WhitelistTn {
    tagger: Fst,
    verbalizer: Fst,
}

impl WhitelistTn {
    pub fn new() -> Self {
        let lexicon = string_file(WHITELIST_TSV);
        let tagger = add_weight(add_tokens("whitelist", tag_field("value", lexicon)), WEIGHT);
        let verbalizer = delete_tokens("whitelist", untag_field("value"));
        Self { tagger, verbalizer }
    }
}

impl ClassGrammar for WhitelistTn {
    fn name(&self) -> &str {
        "whitelist"
    }
    fn tagger(&self) -> &Fst {
        &self.tagger
    }
    fn verbalizer(&self) -> &Fst {
        &self.verbalizer
    }
}
