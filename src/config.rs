//! Configuration types for wetext-fst.

use std::path::PathBuf;

/// Text normalization operation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operator {
    /// Text Normalization: numbers → words (e.g., "123" → "一百二十三").
    #[default]
    Tn,
    /// Inverse Text Normalization: words → numbers (e.g., "一百二十三" → "123").
    Itn,
}

/// Language type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// Auto-detect language.
    #[default]
    Auto,
    /// English.
    En,
    /// Chinese.
    Zh,
    /// Japanese.
    Ja,
}

/// Normalizer configuration (spec.md §6 CLI toggles).
#[derive(Debug, Clone, Default)]
pub struct NormalizerConfig {
    /// Language setting, `Auto` means auto-detect.
    pub lang: Language,

    /// Operation type: TN or ITN.
    pub operator: Operator,

    /// Whether to fix English contractions (e.g., "don't" → "do not").
    pub fix_contractions: bool,

    /// Whether to convert Traditional Chinese to Simplified Chinese.
    pub traditional_to_simple: bool,

    /// Whether to convert full-width characters to half-width.
    pub full_to_half: bool,

    /// Whether to remove interjections (e.g., "嗯", "啊").
    pub remove_interjections: bool,

    /// Whether to remove punctuation marks.
    pub remove_puncts: bool,

    /// Whether to tag OOV (out-of-vocabulary) words.
    pub tag_oov: bool,

    /// Whether to enable 0-9 digit conversion in ITN.
    pub enable_0_to_9: bool,

    /// Whether to remove erhua (儿化音), e.g. "哪儿" → "哪".
    pub remove_erhua: bool,

    /// Whether bare cardinal numbers are taggable on their own, vs. only as
    /// part of a larger class (date, money, measure, ...).
    pub enable_standalone_number: bool,

    /// Whether ITN cardinal may fold a trailing `万`-scale reading into a
    /// `thousand * 10_000` value (spec.md §8, "一千两百万" scenario).
    pub enable_million: bool,

    /// Directory the compiled tagger/verbalizer FSTs are cached under
    /// (spec.md §4.6). `None` disables caching.
    pub cache_dir: Option<PathBuf>,

    /// Rebuild and overwrite the cache even if a valid artifact exists.
    pub overwrite_cache: bool,
}

impl NormalizerConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            enable_standalone_number: true,
            enable_0_to_9: true,
            ..Self::default()
        }
    }

    pub fn with_lang(mut self, lang: Language) -> Self {
        self.lang = lang;
        self
    }

    pub fn with_operator(mut self, operator: Operator) -> Self {
        self.operator = operator;
        self
    }

    pub fn with_fix_contractions(mut self, fix: bool) -> Self {
        self.fix_contractions = fix;
        self
    }

    pub fn with_traditional_to_simple(mut self, convert: bool) -> Self {
        self.traditional_to_simple = convert;
        self
    }

    pub fn with_full_to_half(mut self, convert: bool) -> Self {
        self.full_to_half = convert;
        self
    }

    pub fn with_remove_interjections(mut self, remove: bool) -> Self {
        self.remove_interjections = remove;
        self
    }

    pub fn with_remove_puncts(mut self, remove: bool) -> Self {
        self.remove_puncts = remove;
        self
    }

    pub fn with_remove_erhua(mut self, remove: bool) -> Self {
        self.remove_erhua = remove;
        self
    }

    pub fn with_tag_oov(mut self, tag: bool) -> Self {
        self.tag_oov = tag;
        self
    }

    pub fn with_enable_0_to_9(mut self, enable: bool) -> Self {
        self.enable_0_to_9 = enable;
        self
    }

    pub fn with_enable_standalone_number(mut self, enable: bool) -> Self {
        self.enable_standalone_number = enable;
        self
    }

    pub fn with_enable_million(mut self, enable: bool) -> Self {
        self.enable_million = enable;
        self
    }

    pub fn with_cache_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.cache_dir = Some(dir.into());
        self
    }

    pub fn with_overwrite_cache(mut self, overwrite: bool) -> Self {
        self.overwrite_cache = overwrite;
        self
    }
}
