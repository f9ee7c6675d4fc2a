//! Chinese whitelist (spec.md §4.3 `[Whitelist]`), grounded in
//! `original_source/itn/chinese/rules/whitelist.py` and
//! `tn/chinese/rules/whitelist.py` (both directions are the identity map
//! over a fixed known-abbreviation lexicon). Weight 1.01 — lowest of the
//! ordinary classes, so a whitelist hit always wins over a coincidental
//! cardinal/date/etc match on the same span.
//!
//! TN also carries the erhua ("儿化音") case from the same source file: a
//! standalone trailing "儿" tags at weight 0.1 (below the whitelist lexicon
//! match itself), and `remove_erhua` picks whether the verbalizer drops it
//! or keeps it.

use crate::fst::{accept, add_weight, compose, delete_str, invert, string_file, union, Fst};
use crate::processor::{add_tokens, delete_tokens, tag_field, untag_field, ClassGrammar};

const WEIGHT: f32 = 1.01;
const ERHUA_WEIGHT: f32 = 0.1;
const WHITELIST_TSV: &str = include_str!("../../../data/zh/default/whitelist.tsv");

pub struct WhitelistTn {
    tagger: Fst,
    verbalizer: Fst,
}

impl WhitelistTn {
    pub fn new(remove_erhua: bool) -> Self {
        let lexicon = string_file(WHITELIST_TSV);
        let erhua_field = add_weight(tag_field("erhua", accept("儿")), ERHUA_WEIGHT);
        let value_field = tag_field("value", lexicon);
        let tagger = add_weight(add_tokens("whitelist", union(erhua_field, value_field)), WEIGHT);

        let erhua_verbalizer = if remove_erhua {
            delete_str("erhua: \"儿\"")
        } else {
            untag_field("erhua")
        };
        let verbalizer = delete_tokens("whitelist", union(erhua_verbalizer, untag_field("value")));
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

pub struct WhitelistItn {
    tagger: Fst,
    verbalizer: Fst,
}

impl WhitelistItn {
    pub fn new() -> Self {
        let lexicon = invert(string_file(WHITELIST_TSV));
        let tagger = add_weight(add_tokens("whitelist", tag_field("value", lexicon)), WEIGHT);
        let verbalizer = delete_tokens("whitelist", untag_field("value"));
        Self { tagger, verbalizer }
    }
}

impl ClassGrammar for WhitelistItn {
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
