//! Chinese dates (spec.md §4.3 `[Date]`), grounded in
//! `original_source/tn/chinese/rules/date.py` (digit date -> kanji) and
//! `original_source/itn/chinese/rules/date.py` (kanji -> digit date).
//! Weight 1.02, matching `itn/chinese/inverse_normalizer.py`.
//!
//! TN bakes the unit glyph (`年`/`月`/`日`) into the tagged field's *value*
//! rather than the token framing, matching `original_source`'s
//! `insert('年"')`-style year field. ITN strips the glyph out of the
//! captured value instead (so `year`/`month`/`day` hold bare digit
//! strings) and has its verbalizer re-insert it, except for a bare
//! `yyyy年`-only reading, which keeps the glyph in the value like TN does.

use crate::fst::{
    accept, add_weight, compose, concat, delete_str, insert_str, invert, ques, union, Fst,
};
use crate::grammar::common::kanji_numeral::{itn_digits, tn_digits, tn_number};
use crate::processor::{
    add_tokens, delete_tokens, tag_field, tag_field_spaced, untag_field, untag_field_spaced,
    ClassGrammar,
};

const WEIGHT: f32 = 1.02;

fn sep_tn() -> Fst {
    union(union(delete_str("/"), delete_str("-")), delete_str("."))
}

/// `yyyy = digit + (digit|zero)**3`: every digit read individually, per
/// `original_source/tn/chinese/rules/date.py`.
fn digit_year_tn() -> Fst {
    let mut year = tn_digits();
    for _ in 0..3 {
        year = concat(year, tn_digits());
    }
    year
}

fn digit_year_itn() -> Fst {
    let mut year = itn_digits();
    for _ in 0..3 {
        year = concat(year, itn_digits());
    }
    year
}

fn year3_itn() -> Fst {
    concat(itn_digits(), concat(itn_digits(), itn_digits()))
}

fn year2_itn() -> Fst {
    concat(itn_digits(), itn_digits())
}

fn year_core_itn() -> Fst {
    union(digit_year_itn(), union(year3_itn(), year2_itn()))
}

fn month_value_tn() -> Fst {
    concat(tn_number(), insert_str("月"))
}

fn day_value_tn() -> Fst {
    concat(tn_number(), insert_str("日"))
}

fn month_value_itn() -> Fst {
    concat(invert(tn_number()), delete_str("月"))
}

fn day_value_itn() -> Fst {
    concat(invert(tn_number()), delete_str("日"))
}

/// `yyyy/mm/dd`, `yyyy年mm月dd日`, `yyyy/mm`, `mm/dd` — the shapes
/// `original_source` tags, minus the day-first `dd/mm/yyyy` reading this
/// library doesn't need to disambiguate from `yyyy/mm/dd`.
pub struct DateTn {
    tagger: Fst,
    verbalizer: Fst,
}

impl DateTn {
    pub fn new() -> Self {
        let year_value = concat(digit_year_tn(), insert_str("年"));

        let full = concat(
            concat(tag_field("year", year_value.clone()), sep_tn()),
            concat(
                tag_field_spaced("month", month_value_tn()),
                concat(sep_tn(), tag_field_spaced("day", day_value_tn())),
            ),
        );
        // `yyyy年mm月dd日` input -- digits already separated by the calendar
        // glyphs themselves rather than `/`/`-`/`.`. `year_value`/
        // `month_value_tn`/`day_value_tn` each insert their own glyph on the
        // output side, so this branch just deletes the matching glyph
        // already present in the input right after it.
        let full_cjk = concat(
            concat(tag_field("year", year_value.clone()), delete_str("年")),
            concat(
                concat(tag_field_spaced("month", month_value_tn()), delete_str("月")),
                concat(tag_field_spaced("day", day_value_tn()), delete_str("日")),
            ),
        );
        let year_month = concat(
            tag_field("year", year_value),
            concat(sep_tn(), tag_field_spaced("month", month_value_tn())),
        );
        let month_day = concat(
            tag_field("month", month_value_tn()),
            concat(sep_tn(), tag_field_spaced("day", day_value_tn())),
        );

        let date = union(union(union(full, full_cjk), year_month), month_day);
        let tagger = add_weight(add_tokens("date", date), WEIGHT);

        let verbalizer = delete_tokens(
            "date",
            concat(
                ques(untag_field("year")),
                concat(untag_field_spaced("month"), ques(untag_field_spaced("day"))),
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

/// `yyyy年mm月dd日`, `yyyy年mm月`, `mm月dd日`, bare `yyyy年` (spec.md §8's
/// "2011年3月" / "2008年8月8号" style ITN scenarios).
pub struct DateItn {
    tagger: Fst,
    verbalizer: Fst,
}

impl DateItn {
    pub fn new() -> Self {
        let year_field = concat(tag_field("year", year_core_itn()), delete_str("年"));
        let year_only = tag_field("year", concat(year_core_itn(), accept("年")));

        let full = concat(
            year_field.clone(),
            concat(
                tag_field_spaced("month", month_value_itn()),
                tag_field_spaced("day", day_value_itn()),
            ),
        );
        let year_month = concat(year_field, tag_field_spaced("month", month_value_itn()));
        let month_day = concat(
            tag_field_spaced("month", month_value_itn()),
            tag_field_spaced("day", day_value_itn()),
        );

        let date = union(union(full, year_month), union(month_day, year_only));
        let tagger = add_weight(add_tokens("date", date), WEIGHT);

        // `year_field`/`month_value_itn`/`day_value_itn` strip the 年/月/日
        // glyph out of the captured value, so the verbalizer re-inserts it
        // (the `year_only` branch keeps its glyph inside the value already,
        // hence the plain `untag_field("year")` fallback below).
        let year_v = ques(concat(untag_field("year"), insert_str("年")));
        let month_v = concat(untag_field_spaced("month"), insert_str("月"));
        let day_v = ques(concat(untag_field_spaced("day"), insert_str("日")));
        let verbalizer = delete_tokens(
            "date",
            union(concat(year_v, concat(month_v, day_v)), untag_field("year")),
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
    use crate::fst::shortest_path;

    #[test]
    fn itn_tags_full_date() {
        let date = DateItn::new();
        let composed = compose(&accept("二零一一年三月"), date.tagger());
        assert_eq!(
            shortest_path(&composed),
            Some("date { year: \"2011\" month: \"3\" }".to_string())
        );
    }

    #[test]
    fn itn_verbalizes_full_date() {
        let date = DateItn::new();
        let tagged = "date { year: \"2011\" month: \"3\" }";
        let composed = compose(&accept(tagged), date.verbalizer());
        assert_eq!(shortest_path(&composed), Some("2011年3月".to_string()));
    }

    #[test]
    fn itn_round_trips_full_date_with_day() {
        let date = DateItn::new();
        let tagged = compose(&accept("二零二三年十一月二十八日"), date.tagger());
        let tagged_str = shortest_path(&tagged).unwrap();
        assert_eq!(
            tagged_str,
            "date { year: \"2023\" month: \"11\" day: \"28\" }"
        );
        let verbalized = compose(&accept(&tagged_str), date.verbalizer());
        assert_eq!(shortest_path(&verbalized), Some("2023年11月28日".to_string()));
    }

    #[test]
    fn tn_tags_year_month_day() {
        let date = DateTn::new();
        let composed = compose(&accept("2024/1/15"), date.tagger());
        assert_eq!(
            shortest_path(&composed),
            Some("date { year: \"二零二四年\" month: \"一月\" day: \"十五日\" }".to_string())
        );
    }

    #[test]
    fn tn_round_trips_full_date_with_cjk_separators() {
        let date = DateTn::new();
        let tagged = compose(&accept("2008年8月8日"), date.tagger());
        let tagged_str = shortest_path(&tagged).unwrap();
        assert_eq!(
            tagged_str,
            "date { year: \"二零零八年\" month: \"八月\" day: \"八日\" }"
        );
        let verbalized = compose(&accept(&tagged_str), date.verbalizer());
        assert_eq!(
            shortest_path(&verbalized),
            Some("二零零八年八月八日".to_string())
        );
    }
}
