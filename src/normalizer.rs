//! Main `Normalizer` implementation (spec.md §4.5): orchestrates the
//! preprocess -> tag -> reorder -> verbalize -> postprocess pipeline, with
//! every tagger/verbalizer grammar built in-process by `crate::grammar`
//! (rather than loaded from a pre-compiled `.fst` file, the teacher's own
//! approach) and memoized by `crate::cache::FstCache`.

use log::{debug, info};

use crate::cache::FstCache;
use crate::config::{Language, NormalizerConfig, Operator};
use crate::contractions::fix_contractions;
use crate::error::Result;
use crate::fst::{accept, compose, optimize, shortest_path, star, union_all, Fst};
use crate::grammar::{en, ja, zh};
use crate::processor::ClassGrammar;
use crate::token::TokenParser;

/// WeText Normalizer
///
/// Main entry point for text normalization functionality.
/// Supports Text Normalization (TN) and Inverse Text Normalization (ITN)
/// for Chinese, English, and Japanese.
///
/// # Example
/// ```rust,ignore
/// use wetext_fst::{Normalizer, NormalizerConfig, Language};
///
/// let config = NormalizerConfig::new().with_lang(Language::Zh);
/// let mut normalizer = Normalizer::new(config);
/// let result = normalizer.normalize("2024年1月15日").unwrap();
/// ```
pub struct Normalizer {
    config: NormalizerConfig,
    cache: FstCache,
}

impl Normalizer {
    /// Create a new Normalizer backed by an in-memory (and optionally
    /// on-disk, via `config.cache_dir`) grammar cache.
    pub fn new(config: NormalizerConfig) -> Self {
        let cache = FstCache::new(config.cache_dir.clone(), config.overwrite_cache);
        Self { config, cache }
    }

    /// Create a Normalizer with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(NormalizerConfig::default())
    }

    /// Normalize text using the configured settings.
    pub fn normalize(&mut self, text: &str) -> Result<String> {
        self.normalize_with_config(text, &self.config.clone())
    }

    /// Normalize text with a specific configuration, overriding the one
    /// the Normalizer was constructed with.
    pub fn normalize_with_config(&mut self, text: &str, config: &NormalizerConfig) -> Result<String> {
        let mut text = text.to_string();

        if config.fix_contractions && text.contains('\'') {
            text = fix_contractions(&text);
        }

        text = self.preprocess(&text, config)?;

        let lang = if config.lang == Language::Auto {
            Self::detect_language(&text)
        } else {
            config.lang
        };

        if self.should_normalize(&text, config.operator, config.remove_erhua) {
            text = self.tag(&text, lang, config)?;
            text = self.reorder(&text, lang, config.operator)?;
            text = self.verbalize(&text, lang, config)?;
        }

        text = self.postprocess(&text, config)?;

        Ok(text)
    }

    /// Detect text language from its script.
    ///
    /// Extends the teacher's Chinese/English detection with a Japanese
    /// branch: any Hiragana/Katakana character marks the whole span
    /// Japanese, since those scripts never occur in Chinese text. Plain
    /// CJK ideographs with no kana default to Chinese, matching the
    /// teacher's original behavior for mixed kanji/hanzi input.
    fn detect_language(text: &str) -> Language {
        let mut has_cjk = false;
        let mut has_alpha = false;

        for ch in text.chars() {
            if ('\u{3040}'..='\u{309f}').contains(&ch) || ('\u{30a0}'..='\u{30ff}').contains(&ch) {
                return Language::Ja;
            }
            if ('\u{4e00}'..='\u{9fff}').contains(&ch) {
                has_cjk = true;
            }
            if ch.is_ascii_alphabetic() {
                has_alpha = true;
            }
        }

        if has_cjk {
            return Language::Zh;
        }
        if !text.is_empty() && !has_alpha {
            return Language::Zh;
        }
        Language::En
    }

    /// Whether the tag/reorder/verbalize pass is worth running at all.
    fn should_normalize(&self, text: &str, operator: Operator, remove_erhua: bool) -> bool {
        if operator == Operator::Tn {
            if text.chars().any(|c| c.is_ascii_digit()) {
                return true;
            }
            if remove_erhua && (text.contains('儿') || text.contains('兒')) {
                return true;
            }
            false
        } else {
            !text.is_empty()
        }
    }

    fn preprocess(&mut self, text: &str, config: &NormalizerConfig) -> Result<String> {
        let mut result = text.trim().to_string();

        if config.traditional_to_simple {
            let fst = self.cache.get_or_build("zh/traditional_to_simple", zh::traditional_to_simple);
            result = apply(&result, fst);
        }

        Ok(result)
    }

    fn postprocess(&mut self, text: &str, config: &NormalizerConfig) -> Result<String> {
        let mut result = text.to_string();

        if config.full_to_half {
            let fst = self.cache.get_or_build("zh/full_to_half", zh::full_to_half);
            result = apply(&result, fst);
        }

        if config.remove_interjections {
            let fst = self.cache.get_or_build("zh/remove_interjections", zh::remove_interjections);
            result = apply(&result, fst);
        }

        if config.remove_puncts {
            let fst = self.cache.get_or_build("zh/remove_puncts", zh::remove_puncts);
            result = apply(&result, fst);
        }

        if config.tag_oov {
            result = tag_oov(&result);
        }

        Ok(result.trim().to_string())
    }

    /// Build (or fetch from cache) the full tagger for `lang`/`config` and
    /// run it over `text`. The tagger is `(union of every class tagger)*`,
    /// optimized once and reused across calls with the same key.
    fn tag(&mut self, text: &str, lang: Language, config: &NormalizerConfig) -> Result<String> {
        let key = tagger_key(lang, config);
        let config = config.clone();
        let fst = self
            .cache
            .get_or_build(&key, move || build_full_transducer(lang, config.operator, &config, true));
        Ok(apply(text, fst).trim().to_string())
    }

    fn reorder(&self, text: &str, lang: Language, operator: Operator) -> Result<String> {
        TokenParser::new(lang, operator).reorder(text)
    }

    fn verbalize(&mut self, text: &str, lang: Language, config: &NormalizerConfig) -> Result<String> {
        let key = verbalizer_key(lang, config);
        let config = config.clone();
        let fst = self
            .cache
            .get_or_build(&key, move || build_full_transducer(lang, config.operator, &config, false));
        Ok(apply(text, fst).trim().to_string())
    }
}

/// The `<prefix>_tagger.fst` / `<prefix>_verbalizer.fst` prefix spec.md
/// §4.6 names for each (language, direction) pair.
fn fst_prefix(lang: Language, operator: Operator) -> &'static str {
    match (lang, operator) {
        (Language::Zh | Language::Auto, Operator::Tn) => "zh_tn",
        (Language::Zh | Language::Auto, Operator::Itn) => "zh_itn",
        (Language::En, Operator::Tn) => "en_tn",
        (Language::En, Operator::Itn) => "en_itn",
        (Language::Ja, Operator::Tn) => "ja_tn",
        (Language::Ja, Operator::Itn) => "ja_itn",
    }
}

fn tagger_key(lang: Language, config: &NormalizerConfig) -> String {
    format!(
        "{}::tagger::erhua={}:std={}:0to9={}:million={}",
        fst_prefix(lang, config.operator),
        config.remove_erhua,
        config.enable_standalone_number,
        config.enable_0_to_9,
        config.enable_million,
    )
}

fn verbalizer_key(lang: Language, config: &NormalizerConfig) -> String {
    format!(
        "{}::verbalizer::erhua={}",
        fst_prefix(lang, config.operator),
        config.remove_erhua
    )
}

/// Every class grammar's tagger (or verbalizer) for `(lang, operator)`,
/// unioned and starred so a full sentence -- not just one matched span --
/// can be tagged in a single pass, then optimized once and cached.
fn build_full_transducer(lang: Language, operator: Operator, config: &NormalizerConfig, tagging: bool) -> Fst {
    let classes: Vec<Box<dyn ClassGrammar>> = match (lang, operator) {
        (Language::En, Operator::Tn) => en::tn_classes(),
        (Language::Zh, Operator::Tn) => zh::tn_classes(config),
        (Language::Zh, Operator::Itn) => zh::itn_classes(config),
        (Language::Ja, Operator::Tn) => ja::tn_classes(),
        (Language::Ja, Operator::Itn) => ja::itn_classes(),
        (Language::En, Operator::Itn) => en::itn_classes(),
        (Language::Auto, _) => zh::tn_classes(config),
    };

    let parts: Vec<Fst> = classes
        .iter()
        .map(|c| if tagging { c.tagger().clone() } else { c.verbalizer().clone() })
        .collect();
    let one_token = union_all(parts);

    if tagging {
        // Between tagged spans the tagger just copies whitespace through
        // unchanged, matching every class grammar's "one span, no leading
        // space" shape.
        optimize(star(union_all(vec![one_token, crate::fst::accept(" ")])))
    } else {
        optimize(star(union_all(vec![one_token, crate::fst::accept(" ")])))
    }
}

fn apply(text: &str, fst: &Fst) -> String {
    let composed = compose(&accept(text), fst);
    shortest_path(&composed).unwrap_or_else(|| text.to_string())
}

/// Plain-Rust OOV diagnostic pass (spec.md §6 `--tag_oov`): wraps any
/// character outside a conservative known charset (ASCII letters/digits/
/// punctuation/space, CJK ideographs, Hiragana, Katakana, fullwidth forms)
/// in `oov { value: "X" }`. `original_source`'s own `tag_oov` difference-
/// over-an-8105-character national-standard lexicon isn't reproduced here
/// as an FST rewrite rule -- encoding that as a UTF-8 byte-range difference
/// automaton is disproportionate for what is a debug-only toggle, so this
/// runs as a plain string scan instead, noted in DESIGN.md.
fn tag_oov(text: &str) -> String {
    let is_known = |c: char| {
        c.is_ascii_alphanumeric()
            || c.is_ascii_punctuation()
            || c.is_whitespace()
            || ('\u{4e00}'..='\u{9fff}').contains(&c)
            || ('\u{3040}'..='\u{309f}').contains(&c)
            || ('\u{30a0}'..='\u{30ff}').contains(&c)
            || ('\u{ff00}'..='\u{ffef}').contains(&c)
    };

    let mut out = String::new();
    for c in text.chars() {
        if is_known(c) {
            out.push(c);
        } else {
            out.push_str(&format!("oov {{ value: \"{c}\" }}"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_language_by_script() {
        assert_eq!(Normalizer::detect_language("hello world"), Language::En);
        assert_eq!(Normalizer::detect_language("你好世界"), Language::Zh);
        assert_eq!(Normalizer::detect_language("こんにちは"), Language::Ja);
        assert_eq!(Normalizer::detect_language("カタカナ"), Language::Ja);
        assert_eq!(Normalizer::detect_language("東京タワー"), Language::Ja);
        assert_eq!(Normalizer::detect_language("123"), Language::Zh);
        assert_eq!(Normalizer::detect_language(""), Language::En);
    }

    #[test]
    fn tags_oov_characters() {
        assert_eq!(tag_oov("hi \u{0001}"), "hi oov { value: \"\u{0001}\" }");
        assert_eq!(tag_oov("hello"), "hello");
    }

    #[test]
    fn normalizes_zh_cardinal() {
        let mut normalizer = Normalizer::new(NormalizerConfig::new().with_lang(Language::Zh));
        let result = normalizer.normalize("123").unwrap();
        assert_eq!(result, "一百二十三");
    }

    #[test]
    fn normalizes_en_date() {
        let mut normalizer = Normalizer::new(
            NormalizerConfig::new()
                .with_lang(Language::En)
                .with_operator(Operator::Tn),
        );
        let result = normalizer.normalize("2012-01-05").unwrap();
        assert_eq!(result, "january fifth twenty twelve");
    }

    #[test]
    fn itn_round_trips_zh_cardinal() {
        let mut normalizer = Normalizer::new(
            NormalizerConfig::new()
                .with_lang(Language::Zh)
                .with_operator(Operator::Itn),
        );
        let result = normalizer.normalize("一百二十三").unwrap();
        assert_eq!(result, "123");
    }
}
