//! Japanese whitelist (spec.md §4.3 `[Whitelist]`), grounded in
//! `original_source/tn/japanese/rules/whitelist.py` and its ITN
//! counterpart: a fixed lexicon mapping known abbreviations to their
//! katakana reading (`"AI"` -> `"エーアイ"`), weight 1.01 same as the
//! other languages.

use crate::fst::{add_weight, invert, string_file, Fst};
use crate::processor::{add_tokens, delete_tokens, tag_field, untag_field, ClassGrammar};

const WEIGHT: f32 = 1.01;
const WHITELIST_TSV: &str = include_str!("../../../data/ja/default/whitelist.tsv");

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fst::{accept, compose, shortest_path};

    #[test]
    fn tn_tags_known_abbreviation() {
        let whitelist = WhitelistTn::new();
        let composed = compose(&accept("AI"), whitelist.tagger());
        assert_eq!(
            shortest_path(&composed),
            Some("whitelist { value: \"エーアイ\" }".to_string())
        );
    }

    #[test]
    fn itn_round_trips_known_abbreviation() {
        let whitelist = WhitelistItn::new();
        let tagged = compose(&accept("エーアイ"), whitelist.tagger());
        let tagged_str = shortest_path(&tagged).unwrap();
        let verbalized = compose(&accept(&tagged_str), whitelist.verbalizer());
        assert_eq!(shortest_path(&verbalized), Some("エーアイ".to_string()));
    }
}
