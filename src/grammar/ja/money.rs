//! Japanese money (spec.md §4.3 `[Money]`), grounded in
//! `data/ja/money/currency.tsv` and the Chinese money grammar's shape.
//! Weight 1.05, matching the Chinese money calibration.
//!
//! Keeps the plain `currency + value` shape (`"$3"` <-> `"三ドル"`). Drops
//! the source's cents/decimal reading -- Japanese currency pairs in this
//! pack (yen, dollar, euro) carry no subunit lexicon the way Chinese
//! jiao/fen do, so there's nothing to ground a `decimal` field on.

use crate::fst::{add_weight, compose, concat, invert, string_file, Fst};
use crate::grammar::common::kanji_numeral::{itn_number, tn_number};
use crate::processor::{add_tokens, delete_tokens, tag_field, tag_field_spaced, untag_field, untag_field_spaced, ClassGrammar};

const WEIGHT: f32 = 1.05;
const CURRENCY_TSV: &str = include_str!("../../../data/ja/money/currency.tsv");

fn currency_tn() -> Fst {
    string_file(CURRENCY_TSV)
}

fn currency_itn() -> Fst {
    invert(currency_tn())
}

/// `"$3"` -> `money { value: "三" currency: "ドル" }`.
pub struct MoneyTn {
    tagger: Fst,
    verbalizer: Fst,
}

impl MoneyTn {
    pub fn new() -> Self {
        let currency = tag_field("currency", currency_tn());
        let value = tag_field_spaced("value", tn_number());
        let tagger = add_weight(add_tokens("money", concat(currency, value)), WEIGHT);
        // Canonical order is `value` then `currency` (shared with the
        // Chinese tn_orders table), which differs from the symbol-first
        // order this tagger reads off "$3" -- the verbalizer expects its
        // input already reordered.
        let verbalizer = delete_tokens(
            "money",
            concat(untag_field("value"), untag_field_spaced("currency")),
        );
        Self { tagger, verbalizer }
    }
}

impl ClassGrammar for MoneyTn {
    fn name(&self) -> &str {
        "money"
    }
    fn tagger(&self) -> &Fst {
        &self.tagger
    }
    fn verbalizer(&self) -> &Fst {
        &self.verbalizer
    }
}

/// `"三ドル"` -> `money { currency: "$" value: "3" }`.
pub struct MoneyItn {
    tagger: Fst,
    verbalizer: Fst,
}

impl MoneyItn {
    pub fn new() -> Self {
        let value = tag_field("value", itn_number());
        let currency = tag_field_spaced("currency", currency_itn());
        let tagger = add_weight(add_tokens("money", concat(value, currency)), WEIGHT);
        // Canonical order is `currency` then `value`, matching the Chinese
        // itn_orders table (minus its `decimal` field, which this library
        // doesn't tag).
        let verbalizer = delete_tokens(
            "money",
            concat(untag_field("currency"), untag_field_spaced("value")),
        );
        Self { tagger, verbalizer }
    }
}

impl ClassGrammar for MoneyItn {
    fn name(&self) -> &str {
        "money"
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
    use crate::config::{Language, Operator};
    use crate::fst::{accept, shortest_path};
    use crate::token::TokenParser;

    #[test]
    fn tn_tags_and_verbalizes_money() {
        let money = MoneyTn::new();
        let tagged = compose(&accept("$3"), money.tagger());
        let tagged_str = shortest_path(&tagged).unwrap();
        assert_eq!(tagged_str, "money { currency: \"ドル\" value: \"三\" }");

        let reordered = TokenParser::new(Language::Ja, Operator::Tn)
            .reorder(&tagged_str)
            .unwrap();
        let verbalized = compose(&accept(&reordered), money.verbalizer());
        assert_eq!(shortest_path(&verbalized), Some("三ドル".to_string()));
    }

    #[test]
    fn itn_round_trips_money() {
        let money = MoneyItn::new();
        let tagged = compose(&accept("三ドル"), money.tagger());
        let tagged_str = shortest_path(&tagged).unwrap();
        assert_eq!(tagged_str, "money { value: \"3\" currency: \"$\" }");

        let reordered = TokenParser::new(Language::Ja, Operator::Itn)
            .reorder(&tagged_str)
            .unwrap();
        let verbalized = compose(&accept(&reordered), money.verbalizer());
        assert_eq!(shortest_path(&verbalized), Some("3$".to_string()));
    }
}
