//! English dates (spec.md §4.3 `[Date]`, TN only), grounded in
//! `original_source/tn/english/rules/date.py`. Supports the ISO
//! `yyyy-mm-dd` shape (the shape spec.md §8's worked example needs);
//! the source file's month-day/day-month free-text variants, financial
//! period shorthand (`1H23`), and two-digit-year decades (`'70s`) are
//! dropped, noted in DESIGN.md.
//!
//! Years read as two two-digit groups the way `date.py`'s
//! `get_four_digit_year_graph` does (`"2012"` -> `"twenty twelve"`), not
//! via the general cardinal reading (`"two thousand twelve"`) `cardinal.rs`
//! would give the same digits outside a year context.

use crate::fst::{add_weight, concat, delete_str, insert_str, invert, string_file, union, Fst};
use crate::grammar::en::cardinal::tn_two_digit_group;
use crate::processor::{
    add_tokens, delete_tokens, tag_field, tag_field_spaced, untag_field, untag_field_spaced,
    ClassGrammar,
};

const WEIGHT: f32 = 1.0;
const MONTH_TSV: &str = include_str!("../../../data/en/date/month.tsv");
const DAY_ORDINAL_TSV: &str = include_str!("../../../data/en/date/day_ordinal.tsv");
// Zero-padded-key twins of the two lexicons above, used only for the ITN
// direction: inverting the TN lexicons directly is ambiguous (`"january"`
// could invert to either `"1"` or `"01"`), so ITN needs its own lexicon
// that always carries a fixed two-digit key to match the ISO `mm`/`dd`
// fields `DateTn` emits.
const MONTH_ITN_TSV: &str = include_str!("../../../data/en/date/month_itn.tsv");
const DAY_ORDINAL_ITN_TSV: &str = include_str!("../../../data/en/date/day_ordinal_itn.tsv");

/// `"2012"` -> `"twenty twelve"`; `"1900"`/`"2000"` -> `"nineteen hundred"`/
/// `"twenty hundred"` (the round-hundred reading `date.py`'s
/// `get_four_digit_year_graph` falls back to when the last two digits are
/// zero).
fn year_value() -> Fst {
    let two_pairs = concat(
        tn_two_digit_group(),
        concat(insert_str(" "), tn_two_digit_group()),
    );
    let round_hundred = concat(
        tn_two_digit_group(),
        concat(delete_str("00"), insert_str(" hundred")),
    );
    union(two_pairs, round_hundred)
}

fn month_value() -> Fst {
    let lexicon = string_file(MONTH_TSV);
    union(concat(delete_str("0"), lexicon.clone()), lexicon)
}

fn day_value() -> Fst {
    let lexicon = string_file(DAY_ORDINAL_TSV);
    union(concat(delete_str("0"), lexicon.clone()), lexicon)
}

fn month_value_itn() -> Fst {
    invert(string_file(MONTH_ITN_TSV))
}

fn day_value_itn() -> Fst {
    invert(string_file(DAY_ORDINAL_ITN_TSV))
}

/// `"2012-01-05"` -> `date { year: "twenty twelve" month: "january" day:
/// "fifth" }`, read year-month-day (matching the input's natural order);
/// the verbalizer expects month-day-year, relying on the reorder step
/// between tag and verbalize (spec.md §4.5) to bridge the two.
pub struct DateTn {
    tagger: Fst,
    verbalizer: Fst,
}

impl DateTn {
    pub fn new() -> Self {
        let body = concat(
            tag_field("year", year_value()),
            concat(
                delete_str("-"),
                concat(
                    tag_field_spaced("month", month_value()),
                    concat(delete_str("-"), tag_field_spaced("day", day_value())),
                ),
            ),
        );
        let tagger = add_weight(add_tokens("date", body), WEIGHT);

        let verbalizer = delete_tokens(
            "date",
            concat(
                untag_field("month"),
                concat(
                    insert_str(" "),
                    concat(
                        untag_field_spaced("day"),
                        concat(insert_str(" "), untag_field_spaced("year")),
                    ),
                ),
            ),
        );

        Self { tagger, verbalizer }
    }
}

impl ClassGrammar for DateTn {
    fn name(&self) -> &str {
        "date"
    }
    fn tagger(&self) -> &Fst {
        &self.tagger
    }
    fn verbalizer(&self) -> &Fst {
        &self.verbalizer
    }
}

/// `"january fifth twenty twelve"` -> `date { month: "01" day: "05" year:
/// "2012" }`, read in spoken order (month day year); the verbalizer expects
/// the canonical year-month-day order (`TokenParser::itn_orders`, the same
/// table Chinese/Japanese date ITN uses), so the pipeline's reorder step
/// runs between tag and verbalize, matching the other languages' ITN date
/// classes rather than `en_tn_orders`' month-day-year TN convention.
pub struct DateItn {
    tagger: Fst,
    verbalizer: Fst,
}

impl DateItn {
    pub fn new() -> Self {
        let body = concat(
            tag_field("month", month_value_itn()),
            concat(
                insert_str(" "),
                concat(
                    tag_field_spaced("day", day_value_itn()),
                    concat(insert_str(" "), tag_field_spaced("year", invert(year_value()))),
                ),
            ),
        );
        let tagger = add_weight(add_tokens("date", body), WEIGHT);

        let verbalizer = delete_tokens(
            "date",
            concat(
                untag_field("year"),
                concat(
                    insert_str("-"),
                    concat(
                        untag_field_spaced("month"),
                        concat(insert_str("-"), untag_field_spaced("day")),
                    ),
                ),
            ),
        );

        Self { tagger, verbalizer }
    }
}

impl ClassGrammar for DateItn {
    fn name(&self) -> &str {
        "date"
    }
    fn tagger(&self) -> &Fst {
        &self.tagger
    }
    fn verbalizer(&self) -> &Fst {
        &self.verbalizer
    }
}
