//! Japanese character fallback (spec.md §4.3 `[CharFallback]`), identical
//! in shape to `grammar::zh::charclass` and `grammar::en::charclass`:
//! passes a single untouched character through unchanged, weight 100.

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
        let tagged = compose(&accept("猫"), fallback.tagger());
        let tagged_str = shortest_path(&tagged).unwrap();
        assert_eq!(tagged_str, "char { value: \"猫\" }");
        let verbalized = compose(&accept(&tagged_str), fallback.verbalizer());
        assert_eq!(shortest_path(&verbalized), Some("猫".to_string()));
    }
}
