//! English measures (spec.md §4.3 `[Measure]`, TN only), grounded in
//! `original_source/tn/english/rules/measure.py`. Supports `number + unit`
//! (`"12kg"` -> `"twelve kilograms"`) with the teacher's singular/plural
//! unit distinction (count `"1"` keeps the singular form, everything else
//! pluralizes with a trailing `"s"`, dropping the source's suppletive/
//! irregular-plural table as a documented simplification) and a `"per"`
//! rate reading (`"5kg/h"` -> `"five kilograms per hour"`). The rate
//! branch tags its fields in the exact order it verbalizes
//! (`value`/`unit`/`unit2`) and marks `preserve_order: "true"`, the same
//! field `original_source`'s measure tagger sets on branches whose read
//! order already matches its output order (spec.md §9).

use crate::fst::{add_weight, concat, cross, delete_str, insert_str, union, union_all, Fst};
use crate::grammar::en::cardinal::tn_integer;
use crate::processor::{
    add_tokens, delete_tokens, tag_field, tag_field_spaced, untag_field, untag_field_spaced,
    ClassGrammar,
};

const WEIGHT: f32 = 1.04;
const UNIT_TSV: &str = include_str!("../../../data/en/measure/unit.tsv");

fn unit_rows() -> Vec<(String, String)> {
    UNIT_TSV
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

/// `"12kg"` -> `measure { value: "twelve" unit: "kilograms" }`; `"5kg/h"`
/// (rate) -> `measure { value: "five" unit: "kilograms" unit2: "hour"
/// preserve_order: "true" }`.
pub struct MeasureTn {
    tagger: Fst,
    verbalizer: Fst,
}

impl MeasureTn {
    pub fn new() -> Self {
        let rows = unit_rows();

        let plain_branches: Vec<Fst> = rows
            .iter()
            .map(|(symbol, word)| {
                let singular = add_weight(
                    concat(
                        tag_field("value", cross("1", "one")),
                        concat(delete_str(symbol), tag_field_spaced("unit", insert_str(word))),
                    ),
                    0.0,
                );
                let plural = add_weight(
                    concat(
                        tag_field("value", tn_integer()),
                        concat(
                            delete_str(symbol),
                            tag_field_spaced("unit", insert_str(&format!("{word}s"))),
                        ),
                    ),
                    0.01,
                );
                union(singular, plural)
            })
            .collect();

        let rate_branches: Vec<Fst> = rows
            .iter()
            .flat_map(|(symbol, word)| {
                rows.iter().map(move |(symbol2, word2)| {
                    concat(
                        tag_field("value", tn_integer()),
                        concat(
                            delete_str(symbol),
                            concat(
                                tag_field_spaced("unit", insert_str(&format!("{word}s"))),
                                concat(
                                    delete_str("/"),
                                    concat(
                                        delete_str(symbol2),
                                        concat(
                                            tag_field_spaced("unit2", insert_str(word2)),
                                            insert_str(" preserve_order: \"true\""),
                                        ),
                                    ),
                                ),
                            ),
                        ),
                    )
                })
            })
            .collect();

        let tagger = add_weight(
            add_tokens("measure", union(union_all(plain_branches), union_all(rate_branches))),
            WEIGHT,
        );

        let plain_verbalizer = concat(
            untag_field("value"),
            concat(insert_str(" "), untag_field_spaced("unit")),
        );
        let rate_verbalizer = concat(
            untag_field("value"),
            concat(
                insert_str(" "),
                concat(
                    untag_field_spaced("unit"),
                    concat(
                        insert_str(" per "),
                        concat(
                            untag_field_spaced("unit2"),
                            delete_str(" preserve_order: \"true\""),
                        ),
                    ),
                ),
            ),
        );
        let verbalizer = delete_tokens("measure", union(plain_verbalizer, rate_verbalizer));

        Self { tagger, verbalizer }
    }
}

impl ClassGrammar for MeasureTn {
    fn name(&self) -> &str {
        "measure"
    }
    fn tagger(&self) -> &Fst {
        &self.tagger
    }
    fn verbalizer(&self) -> &Fst {
        &self.verbalizer
    }
}
