//! Chinese money (spec.md §4.3 `[Money]`), grounded in
//! `original_source/tn/chinese/rules/money.py` and
//! `original_source/itn/chinese/rules/money.py`. Weight 1.05.

use crate::fst::{add_weight, compose, concat, delete_str, insert_str, invert, ques, string_file, union, Fst};
use crate::grammar::common::kanji_numeral::{itn_digit, itn_number, tn_number};
use crate::processor::{
    add_tokens, delete_tokens, tag_field, tag_field_spaced, untag_field, untag_field_spaced,
    ClassGrammar,
};

const WEIGHT: f32 = 1.05;
const CURRENCY_TSV: &str = include_str!("../../../data/zh/money/currency.tsv");

fn currency_tn() -> Fst {
    string_file(CURRENCY_TSV)
}

fn currency_itn() -> Fst {
    invert(currency_tn())
}

/// `"$3.5"` -> `currency: "美元" value: "三点五"`.
pub struct MoneyTn {
    tagger: Fst,
    verbalizer: Fst,
}

impl MoneyTn {
    pub fn new() -> Self {
        let currency = tag_field("currency", currency_tn());
        let value = tag_field_spaced("value", tn_number());
        let tagger = add_weight(add_tokens("money", concat(currency, value)), WEIGHT);
        // Canonical order for a TN money token is `value` then `currency`
        // (see `TokenParser::tn_orders`), which differs from the order this
        // tagger reads off the input ("$3" puts the symbol first) -- the
        // verbalizer expects its input already reordered.
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

/// `"三千三百八十元五毛八分"` -> `value: "3380" currency: "¥" decimal: ".58"`.
pub struct MoneyItn {
    tagger: Fst,
    verbalizer: Fst,
}

impl MoneyItn {
    pub fn new() -> Self {
        let value = tag_field("value", itn_number());
        let currency = tag_field_spaced("currency", currency_itn());
        let jiao = concat(itn_digit(), union(delete_str("毛"), delete_str("角")));
        let fen = concat(itn_digit(), delete_str("分"));
        let cents = ques(concat(insert_str("."), concat(jiao, ques(fen))));
        let decimal = tag_field_spaced("decimal", cents);

        let tagger = add_weight(
            add_tokens("money", concat(value, concat(currency, decimal))),
            WEIGHT,
        );
        let verbalizer = delete_tokens(
            "money",
            concat(
                untag_field("currency"),
                concat(untag_field_spaced("value"), untag_field_spaced("decimal")),
            ),
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
    use crate::fst::{accept, shortest_path};

    #[test]
    fn tn_tags_and_verbalizes_money() {
        use crate::config::{Language, Operator};
        use crate::token::TokenParser;

        let money = MoneyTn::new();
        let tagged = compose(&accept("$3"), money.tagger());
        let tagged_str = shortest_path(&tagged).unwrap();
        let reordered = TokenParser::new(Language::Zh, Operator::Tn)
            .reorder(&tagged_str)
            .unwrap();
        let verbalized = compose(&accept(&reordered), money.verbalizer());
        assert_eq!(shortest_path(&verbalized), Some("三美元".to_string()));
    }

    #[test]
    fn itn_tags_money_with_cents() {
        let money = MoneyItn::new();
        let composed = compose(&accept("三元五毛八分"), money.tagger());
        assert_eq!(
            shortest_path(&composed),
            Some("money { value: \"3\" currency: \"¥\" decimal: \".58\" }".to_string())
        );
    }
}
