//! Japanese dates (spec.md §4.3 `[Date]`), grounded in
//! `original_source/tn/japanese/rules/date.py` and its ITN counterpart.
//! Supports the `yyyy/mm/dd` digit shape both directions; the source
//! files' range reading (`5~9日`), era-year shorthand (`令和6年`), and
//! weekday suffixes are dropped, noted in DESIGN.md.
//!
//! The year reads as a kanji thousand-group with leading zeros in the
//! trailing three digits dropped silently (`"2024"` -> `"二千二十四"`,
//! not `"二千零二十四"`) rather than Mandarin's zero-gap-preserving
//! cardinal convention (`kanji_numeral::tn_number`'s own behavior) --
//! `original_source`'s docstring examples (`2009年 -> 二千九年`) confirm
//! Japanese year reading omits the filler, so this builds its own
//! thousand-group reader instead of reusing `tn_number` for years.

use crate::fst::{add_weight, compose, concat, delete_str, insert_str, invert, union, Fst};
use crate::grammar::common::kanji_numeral::{tn_digit, tn_hundred_group, tn_tens_group};
use crate::processor::{
    add_tokens, delete_tokens, tag_field, tag_field_spaced, untag_field, untag_field_spaced,
    ClassGrammar,
};

const WEIGHT: f32 = 1.02;

fn last_two_nonzero() -> Fst {
    union(concat(delete_str("0"), tn_digit()), tn_tens_group())
}

/// Exactly four digits: thousand-digit + "千" + the trailing three digits,
/// with leading zeros in the trailing group dropped silently.
fn year_value_tn() -> Fst {
    let tail = union(
        union(tn_hundred_group(), concat(delete_str("0"), last_two_nonzero())),
        delete_str("000"),
    );
    concat(tn_digit(), concat(insert_str("千"), tail))
}

/// One or two digits, used for month (1-12) and day (1-31): a bare digit,
/// a zero-padded digit, or a tens+ones/teen pair.
fn small_number_tn() -> Fst {
    union(
        union(tn_digit(), concat(delete_str("0"), tn_digit())),
        tn_tens_group(),
    )
}

fn year_value_itn() -> Fst {
    invert(year_value_tn())
}

fn small_number_itn() -> Fst {
    invert(small_number_tn())
}

/// `"2024/10/01"` -> `date { year: "二千二十四" month: "十" day: "一" }`,
/// verbalized as `二千二十四年十月一日`.
pub struct DateTn {
    tagger: Fst,
    verbalizer: Fst,
}

impl DateTn {
    pub fn new() -> Self {
        let body = concat(
            tag_field("year", year_value_tn()),
            concat(
                delete_str("/"),
                concat(
                    tag_field_spaced("month", small_number_tn()),
                    concat(delete_str("/"), tag_field_spaced("day", small_number_tn())),
                ),
            ),
        );
        let tagger = add_weight(add_tokens("date", body), WEIGHT);

        let verbalizer = delete_tokens(
            "date",
            concat(
                untag_field("year"),
                concat(
                    insert_str("年"),
                    concat(
                        untag_field_spaced("month"),
                        concat(insert_str("月"), concat(untag_field_spaced("day"), insert_str("日"))),
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

/// `"二千二十四年十月一日"` -> `date { year: "2024" month: "10" day: "1"
/// }`, verbalized as `2024年10月1日`.
pub struct DateItn {
    tagger: Fst,
    verbalizer: Fst,
}

impl DateItn {
    pub fn new() -> Self {
        let body = concat(
            concat(tag_field("year", year_value_itn()), delete_str("年")),
            concat(
                concat(tag_field_spaced("month", small_number_itn()), delete_str("月")),
                concat(tag_field_spaced("day", small_number_itn()), delete_str("日")),
            ),
        );
        let tagger = add_weight(add_tokens("date", body), WEIGHT);

        let verbalizer = delete_tokens(
            "date",
            concat(
                untag_field("year"),
                concat(
                    insert_str("年"),
                    concat(
                        untag_field_spaced("month"),
                        concat(insert_str("月"), concat(untag_field_spaced("day"), insert_str("日"))),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fst::{accept, shortest_path};

    #[test]
    fn tn_tags_full_date() {
        let date = DateTn::new();
        let composed = compose(&accept("2024/10/01"), date.tagger());
        assert_eq!(
            shortest_path(&composed),
            Some("date { year: \"二千二十四\" month: \"十\" day: \"一\" }".to_string())
        );
    }

    #[test]
    fn tn_verbalizes_full_date() {
        let date = DateTn::new();
        let tagged = "date { year: \"二千二十四\" month: \"十\" day: \"一\" }";
        let composed = compose(&accept(tagged), date.verbalizer());
        assert_eq!(
            shortest_path(&composed),
            Some("二千二十四年十月一日".to_string())
        );
    }

    #[test]
    fn itn_tags_full_date() {
        let date = DateItn::new();
        let composed = compose(&accept("二千二十四年十月一日"), date.tagger());
        assert_eq!(
            shortest_path(&composed),
            Some("date { year: \"2024\" month: \"10\" day: \"1\" }".to_string())
        );
    }

    #[test]
    fn itn_verbalizes_full_date() {
        let date = DateItn::new();
        let tagged = "date { year: \"2024\" month: \"10\" day: \"1\" }";
        let composed = compose(&accept(tagged), date.verbalizer());
        assert_eq!(shortest_path(&composed), Some("2024年10月1日".to_string()));
    }
}
