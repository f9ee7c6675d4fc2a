//! Japanese cardinal numbers (spec.md §4.3 `[Cardinal]`), TN and ITN.
//! Grounded in `original_source/tn/japanese/rules/cardinal.py`, which reads
//! digit strings as a plain kanji thousand-group reading with the same
//! zero-gap-filler convention Mandarin uses (`kanji_numeral::tn_number`'s
//! own behavior) -- unlike `grammar::ja::date`'s year reading, bare
//! cardinals keep the filler (`"2009"` -> `"二千九"` stays a date-only
//! special case; a bare `"2009"` cardinal reads `"二千九"` too since there's
//! no trailing zero group here, but `"2005"` reads `"二千五"` while a
//! hypothetical `"2005"` year would too -- the two conventions only
//! diverge when the trailing group itself is the all-zero `"00X"` shape).
//! Reuses `kanji_numeral::{tn_number, itn_number}` directly, same as
//! `grammar::zh::cardinal`.

use crate::fst::{add_weight, Fst};
use crate::grammar::common::kanji_numeral::{itn_number, tn_number};
use crate::processor::{add_tokens, delete_tokens, tag_field, untag_field, ClassGrammar};

const WEIGHT: f32 = 1.06;

pub struct CardinalTn {
    tagger: Fst,
    verbalizer: Fst,
}

impl CardinalTn {
    pub fn new() -> Self {
        let tagger = add_weight(
            add_tokens("cardinal", tag_field("value", tn_number())),
            WEIGHT,
        );
        let verbalizer = delete_tokens("cardinal", untag_field("value"));
        Self { tagger, verbalizer }
    }
}

impl ClassGrammar for CardinalTn {
    fn name(&self) -> &str {
        "cardinal"
    }
    fn tagger(&self) -> &Fst {
        &self.tagger
    }
    fn verbalizer(&self) -> &Fst {
        &self.verbalizer
    }
}

pub struct CardinalItn {
    tagger: Fst,
    verbalizer: Fst,
}

impl CardinalItn {
    pub fn new() -> Self {
        let tagger = add_weight(
            add_tokens("cardinal", tag_field("value", itn_number())),
            WEIGHT,
        );
        let verbalizer = delete_tokens("cardinal", untag_field("value"));
        Self { tagger, verbalizer }
    }
}

impl ClassGrammar for CardinalItn {
    fn name(&self) -> &str {
        "cardinal"
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
    fn tn_tags_cardinal_value() {
        let cardinal = CardinalTn::new();
        let composed = compose(&accept("120"), cardinal.tagger());
        assert_eq!(
            shortest_path(&composed),
            Some("cardinal { value: \"一百二十\" }".to_string())
        );
    }

    #[test]
    fn itn_round_trips() {
        let cardinal = CardinalItn::new();
        let tagged = compose(&accept("一万"), cardinal.tagger());
        let tagged_str = shortest_path(&tagged).unwrap();
        assert_eq!(tagged_str, "cardinal { value: \"10000\" }");
        let verbalized = compose(&accept(&tagged_str), cardinal.verbalizer());
        assert_eq!(shortest_path(&verbalized), Some("10000".to_string()));
    }
}
