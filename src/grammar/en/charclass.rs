//! English character fallback (spec.md §4.3 `[CharFallback]`, TN only):
//! passes a single untouched character through unchanged, weight 100, so
//! it only wins when nothing narrower matches the span (spec.md §4.3's
//! weight table rationale).

use crate::fst::{add_weight, Fst};
use crate::processor::{add_tokens, char_value, delete_tokens, tag_field, untag_field, ClassGrammar};

const WEIGHT: f32 = 100.0;

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fst::{accept, compose, shortest_path};

    #[test]
    fn tags_and_verbalizes_single_char() {
        let fallback = CharFallback::new();
        let composed = compose(&accept("z"), fallback.tagger());
        let tagged = shortest_path(&composed).unwrap();
        assert_eq!(tagged, "char { value: \"z\" }");

        let composed = compose(&accept(&tagged), fallback.verbalizer());
        assert_eq!(shortest_path(&composed), Some("z".to_string()));
    }
}
