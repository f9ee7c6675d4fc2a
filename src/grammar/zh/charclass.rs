//! Char/word fallback (spec.md §4.3 `[CharFallback]`): the class every
//! pipeline carries at the back of the union, weight 100, so any span no
//! other class tags still gets wrapped as a single `char` token and
//! survives verbalization unchanged. Grounded in `normalizer.rs`'s
//! existing pass-through-on-no-match behavior in the teacher repo, made
//! explicit here as its own class so the class union stays total.

use crate::fst::{add_weight, Fst};
use crate::processor::{add_tokens, char_value, delete_tokens, tag_field, untag_field, ClassGrammar};

const WEIGHT: f32 = 100.0;

/// Tags exactly one character as `char { value: "x" }` and verbalizes it
/// back unchanged, used for every language/operator combination.
pub struct CharFallback {
    tagger: Fst,
    verbalizer: Fst,
}

impl CharFallback {
    pub fn new() -> Self {
        let tagger = add_weight(add_tokens("char", tag_field("value", char_value())), WEIGHT);
        let verbalizer = delete_tokens("char", untag_field("value"));
        Self { tagger, verbalizer }
    }
}

impl ClassGrammar for CharFallback {
    fn name(&self) -> &str {
        "char"
    }
    fn tagger(&self) -> &Fst {
        &self.tagger
    }
    fn verbalizer(&self) -> &Fst {
        &self.verbalizer
    }
}
