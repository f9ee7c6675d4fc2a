//! End-to-end coverage of `Normalizer::normalize` against the worked
//! examples and edge cases this crate is built for.

use wetext_fst::{Language, Normalizer, NormalizerConfig, Operator};

fn itn_config(lang: Language) -> NormalizerConfig {
    NormalizerConfig::new().with_lang(lang).with_operator(Operator::Itn)
}

fn tn_config(lang: Language) -> NormalizerConfig {
    NormalizerConfig::new().with_lang(lang).with_operator(Operator::Tn)
}

#[test]
fn zh_itn_full_date() {
    let mut normalizer = Normalizer::new(itn_config(Language::Zh));
    let result = normalizer.normalize("二零二三年十一月二十八日").unwrap();
    assert_eq!(result, "2023年11月28日");
}

#[test]
fn zh_itn_decimal() {
    let mut normalizer = Normalizer::new(itn_config(Language::Zh));
    let result = normalizer.normalize("零点八").unwrap();
    assert_eq!(result, "0.8");
}

#[test]
fn zh_itn_percent_range() {
    let mut normalizer = Normalizer::new(itn_config(Language::Zh));
    let result = normalizer.normalize("百分之三十到四十").unwrap();
    assert_eq!(result, "30%~40%");
}

#[test]
fn zh_itn_fraction() {
    let mut normalizer = Normalizer::new(itn_config(Language::Zh));
    let result = normalizer.normalize("三分之二").unwrap();
    assert_eq!(result, "2/3");
}

#[test]
fn zh_itn_million_scale_cardinal() {
    let mut normalizer = Normalizer::new(itn_config(Language::Zh).with_enable_million(true));
    let result = normalizer.normalize("一千两百万").unwrap();
    assert_eq!(result, "12000000");
}

#[test]
fn zh_itn_million_scale_cardinal_disabled_by_default() {
    let mut normalizer = Normalizer::new(itn_config(Language::Zh));
    let result = normalizer.normalize("一千两百万").unwrap();
    assert_ne!(result, "12000000");
}

#[test]
fn zh_tn_full_date_with_cjk_separators() {
    let mut normalizer = Normalizer::new(tn_config(Language::Zh));
    let result = normalizer.normalize("2008年8月8日").unwrap();
    assert_eq!(result, "二零零八年八月八日");
}

#[test]
fn zh_tn_measure_rate() {
    let mut normalizer = Normalizer::new(tn_config(Language::Zh));
    let result = normalizer.normalize("10km/h").unwrap();
    assert_eq!(result, "每小时十千米");
}

#[test]
fn en_tn_money() {
    let mut normalizer = Normalizer::new(tn_config(Language::En));
    let result = normalizer.normalize("$12.50").unwrap();
    assert_eq!(result, "twelve dollars and fifty cents");
}

#[test]
fn en_tn_date() {
    let mut normalizer = Normalizer::new(tn_config(Language::En));
    let result = normalizer.normalize("2012-01-05").unwrap();
    assert_eq!(result, "january fifth twenty twelve");
}

#[test]
fn en_tn_fraction() {
    let mut normalizer = Normalizer::new(tn_config(Language::En));
    let result = normalizer.normalize("3/4").unwrap();
    assert_eq!(result, "three fourths");
}

#[test]
fn en_tn_measure() {
    let mut normalizer = Normalizer::new(tn_config(Language::En));
    let result = normalizer.normalize("12kg").unwrap();
    assert_eq!(result, "twelve kilograms");
}

#[test]
fn en_tn_measure_rate_preserves_order() {
    let mut normalizer = Normalizer::new(tn_config(Language::En));
    let result = normalizer.normalize("5kg/h").unwrap();
    assert_eq!(result, "five kilograms per hour");
}

#[test]
fn en_itn_cardinal() {
    let mut normalizer = Normalizer::new(itn_config(Language::En));
    let result = normalizer.normalize("one hundred twenty five").unwrap();
    assert_eq!(result, "125");
}

#[test]
fn en_itn_date() {
    let mut normalizer = Normalizer::new(itn_config(Language::En));
    let result = normalizer.normalize("january fifth twenty twelve").unwrap();
    assert_eq!(result, "2012-01-05");
}

#[test]
fn en_itn_ordinal() {
    let mut normalizer = Normalizer::new(itn_config(Language::En));
    let result = normalizer.normalize("twenty third").unwrap();
    assert_eq!(result, "23rd");
}

#[test]
fn ja_tn_date() {
    let mut normalizer = Normalizer::new(tn_config(Language::Ja));
    let result = normalizer.normalize("2024/10/01").unwrap();
    assert_eq!(result, "二千二十四年十月一日");
}

#[test]
fn ja_itn_date() {
    let mut normalizer = Normalizer::new(itn_config(Language::Ja));
    let result = normalizer.normalize("二千二十四年十月一日").unwrap();
    assert_eq!(result, "2024年10月1日");
}

#[test]
fn zh_itn_id_card_with_trailing_x() {
    let mut normalizer = Normalizer::new(itn_config(Language::Zh));
    let result = normalizer.normalize("11010519491231002X").unwrap();
    assert_eq!(result, "11010519491231002X");
}

#[test]
fn zh_itn_phone_number() {
    let mut normalizer = Normalizer::new(itn_config(Language::Zh));
    let result = normalizer.normalize("13125617878").unwrap();
    assert_eq!(result, "13125617878");
}

#[test]
fn empty_input_normalizes_to_empty() {
    let mut normalizer = Normalizer::with_defaults();
    assert_eq!(normalizer.normalize("").unwrap(), "");
}

#[test]
fn punctuation_only_input_is_left_alone() {
    let mut normalizer = Normalizer::new(tn_config(Language::Zh));
    assert_eq!(normalizer.normalize("，。！？").unwrap(), "，。！？");
}

#[test]
fn whitespace_is_trimmed() {
    let mut normalizer = Normalizer::new(tn_config(Language::Zh));
    let result = normalizer.normalize("  123  ").unwrap();
    assert_eq!(result, "一百二十三");
}
