//! English money (spec.md §4.3 `[Money]`, TN only), grounded in
//! `original_source/tn/english/rules/money.py`. Supports the
//! `$12.50`-style major-unit-symbol-prefixed amount; the source file's
//! trailing-unit (`12.50 USD`), quantifier (`$1m`), and range forms are
//! dropped, noted in DESIGN.md.
//!
//! Reads the currency symbol into `currency_maj`'s word the way
//! `original_source`'s `get_money_graph` does, by branching once per
//! symbol in `currency_maj.tsv` — the symbol is consumed at the start of
//! the input but its word only needs to be known, not computed, so a
//! handful of literal branches sidestep the reorder dance `date.rs` needs
//! for its year/month/day fields.

use crate::fst::{add_weight, concat, delete_str, insert_str, union, union_all, Fst};
use crate::grammar::en::cardinal::tn_integer;
use crate::processor::{
    add_tokens, delete_tokens, tag_field, tag_field_spaced, untag_field, untag_field_spaced,
    ClassGrammar,
};

const WEIGHT: f32 = 1.0;
const CURRENCY_TSV: &str = include_str!("../../../data/en/money/currency_maj.tsv");

fn currency_branches() -> Vec<(String, String)> {
    CURRENCY_TSV
        .lines()
        .filter_map(|line| {
            let line = line.trim_end_matches('\r');
            if line.is_empty() || line.starts_with('#') {
                return None;
            }
            let mut cols = line.split('\t');
            let symbol = cols.next()?.to_string();
            let word = cols.next()?.to_string();
            Some((symbol, word))
        })
        .collect()
}

/// `"$12.50"` -> `money { integer_part: "twelve" fractional_part: "fifty"
/// currency_maj: "dollars" } `; `"$5"` -> `money { integer_part: "five"
/// currency_maj: "dollars" }`.
pub struct MoneyTn {
    tagger: Fst,
    verbalizer: Fst,
}

impl MoneyTn {
    pub fn new() -> Self {
        let branches: Vec<Fst> = currency_branches()
            .into_iter()
            .map(|(symbol, word)| {
                let with_cents = concat(
                    tag_field("integer_part", tn_integer()),
                    concat(
                        delete_str("."),
                        concat(
                            tag_field_spaced("fractional_part", tn_integer()),
                            tag_field_spaced("currency_maj", insert_str(&format!("{word}s"))),
                        ),
                    ),
                );
                let whole_only = concat(
                    tag_field("integer_part", tn_integer()),
                    tag_field_spaced("currency_maj", insert_str(&format!("{word}s"))),
                );
                concat(delete_str(&symbol), union(with_cents, whole_only))
            })
            .collect();

        let tagger = add_weight(add_tokens("money", union_all(branches)), WEIGHT);

        let with_cents_verbalizer = concat(
            untag_field("integer_part"),
            concat(
                insert_str(" "),
                concat(
                    untag_field_spaced("currency_maj"),
                    concat(
                        insert_str(" and "),
                        concat(untag_field_spaced("fractional_part"), insert_str(" cents")),
                    ),
                ),
            ),
        );
        let whole_only_verbalizer = concat(
            untag_field("integer_part"),
            concat(insert_str(" "), untag_field_spaced("currency_maj")),
        );
        let verbalizer = delete_tokens("money", union(with_cents_verbalizer, whole_only_verbalizer));

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fst::{accept, compose, shortest_path};

    #[test]
    fn tags_amount_with_cents() {
        let money = MoneyTn::new();
        let composed = compose(&accept("$12.50"), money.tagger());
        assert_eq!(
            shortest_path(&composed),
            Some(
                "money { integer_part: \"twelve\" fractional_part: \"fifty\" currency_maj: \"dollars\" }"
                    .to_string()
            )
        );
    }

    #[test]
    fn verbalizes_amount_with_cents() {
        let money = MoneyTn::new();
        let tagged =
            "money { integer_part: \"twelve\" fractional_part: \"fifty\" currency_maj: \"dollars\" }";
        let composed = compose(&accept(tagged), money.verbalizer());
        assert_eq!(
            shortest_path(&composed),
            Some("twelve dollars and fifty cents".to_string())
        );
    }

    #[test]
    fn tags_whole_amount() {
        let money = MoneyTn::new();
        let composed = compose(&accept("$5"), money.tagger());
        assert_eq!(
            shortest_path(&composed),
            Some("money { integer_part: \"five\" currency_maj: \"dollars\" }".to_string())
        );
    }
}
