//! Chinese time-of-day (spec.md §4.3 `[Time]`), grounded in
//! `original_source/tn/chinese/rules/time.py` and
//! `original_source/itn/chinese/rules/time.py`. Weight 1.05.
//!
//! Hour/minute/second use the same compositional cardinal reading as
//! `[Cardinal]` (bounded implicitly by the `hh:mm[:ss]` input shape)
//! rather than `original_source`'s separate, range-restricted
//! `hour.tsv`/`minute.tsv`/`second.tsv` lexicons.

use crate::fst::{add_weight, compose, concat, delete_str, insert_str, invert, ques, string_file, union, Fst};
use crate::grammar::common::kanji_numeral::{itn_number, tn_number};
use crate::processor::{
    add_tokens, delete_tokens, tag_field, tag_field_spaced, untag_field, untag_field_spaced,
    ClassGrammar,
};

const WEIGHT: f32 = 1.05;
const NOON_TSV: &str = include_str!("../../../data/zh/time/noon.tsv");

fn noon_tn() -> Fst {
    string_file(NOON_TSV)
}

fn noon_itn() -> Fst {
    invert(noon_tn())
}

/// `"14:30"` -> `hour: "十四" minute: "三十"`.
pub struct TimeTn {
    tagger: Fst,
    verbalizer: Fst,
}

impl TimeTn {
    pub fn new() -> Self {
        let colon = union(delete_str(":"), delete_str("："));
        let hour = tag_field("hour", tn_number());
        let minute = tag_field_spaced("minute", tn_number());
        let second = tag_field_spaced("second", tn_number());

        let body = concat(
            hour,
            concat(colon.clone(), concat(minute, ques(concat(colon, second)))),
        );
        let tagger = add_weight(add_tokens("time", body), WEIGHT);

        let verbalizer = delete_tokens(
            "time",
            concat(
                untag_field("hour"),
                concat(
                    insert_str(":"),
                    concat(
                        untag_field_spaced("minute"),
                        ques(concat(insert_str(":"), untag_field_spaced("second"))),
                    ),
                ),
            ),
        );

        Self { tagger, verbalizer }
    }
}

impl ClassGrammar for TimeTn {
    fn name(&self) -> &str {
        "time"
    }
    fn tagger(&self) -> &Fst {
        &self.tagger
    }
    fn verbalizer(&self) -> &Fst {
        &self.verbalizer
    }
}

/// `"下午三点二十分"` -> `noon: "pm" hour: "3" minute: "20"`.
pub struct TimeItn {
    tagger: Fst,
    verbalizer: Fst,
}

impl TimeItn {
    pub fn new() -> Self {
        let noon = tag_field("noon", noon_itn());
        let hour = concat(tag_field("hour", itn_number()), delete_str("点"));
        let minute = concat(
            tag_field_spaced("minute", itn_number()),
            ques(delete_str("分")),
        );

        let with_noon = concat(noon, concat(hour.clone(), minute.clone()));
        let without_noon = concat(hour, minute);
        let time = union(with_noon, without_noon);

        let tagger = add_weight(add_tokens("time", time), WEIGHT);

        // The tagger reads `noon` before `hour`/`minute` (the order "下午
        // 三点二十分" is read in); the canonical ITN order puts `noon` last
        // (`TokenParser::itn_orders`), so this verbalizer expects its input
        // already reordered.
        let verbalizer = delete_tokens(
            "time",
            concat(
                untag_field("hour"),
                concat(
                    insert_str(":"),
                    concat(
                        untag_field_spaced("minute"),
                        ques(concat(insert_str(" "), untag_field_spaced("noon"))),
                    ),
                ),
            ),
        );

        Self { tagger, verbalizer }
    }
}

impl ClassGrammar for TimeItn {
    fn name(&self) -> &str {
        "time"
    }
    fn tagger(&self) -> &Fst {
        &self.tagger
    }
    fn verbalizer(&self) -> &Fst {
        &self.verbalizer
    }
}
