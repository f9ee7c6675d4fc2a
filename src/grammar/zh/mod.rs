//! Chinese class grammar library (spec.md §4.3) plus the language-specific
//! pre/postprocessing passes `original_source/tn/chinese/rules/{pre,post}processor.py`
//! and `original_source/itn/chinese/rules/postprocessor.py` apply around
//! the tag/verbalize pipeline.

mod cardinal;
mod charclass;
mod date;
mod fraction;
mod math;
mod measure;
mod money;
mod time;
mod whitelist;

pub use cardinal::{CardinalItn, CardinalTn};
pub use charclass::CharFallback;
pub use date::{DateItn, DateTn};
pub use fraction::{FractionItn, FractionTn};
pub use math::MathItn;
pub use measure::{MeasureItn, MeasureTn};
pub use money::{MoneyItn, MoneyTn};
pub use time::{TimeItn, TimeTn};
pub use whitelist::{WhitelistItn, WhitelistTn};

use crate::config::NormalizerConfig;
use crate::fst::{build_rule, cross, optimize, string_file, union_all, Fst};
use crate::processor::ClassGrammar;

const FULL_TO_HALF_TSV: &str = include_str!("../../../data/zh/char/fullwidth_to_halfwidth.tsv");
const PUNCTS_TSV: &str = include_str!("../../../data/zh/char/punctuations_zh.tsv");
const DENYLIST_TSV: &str = include_str!("../../../data/zh/default/denylist.tsv");
const TRADITIONAL_TO_SIMPLE_TSV: &str = include_str!("../../../data/zh/charset/traditional_to_simple.tsv");

/// The TN class grammars, in the order the pipeline composes/unions them.
pub fn tn_classes(config: &NormalizerConfig) -> Vec<Box<dyn ClassGrammar>> {
    vec![
        Box::new(WhitelistTn::new(config.remove_erhua)),
        Box::new(DateTn::new()),
        Box::new(TimeTn::new()),
        Box::new(MoneyTn::new()),
        Box::new(FractionTn::new()),
        Box::new(MeasureTn::new()),
        Box::new(CardinalTn::new()),
        Box::new(CharFallback::new()),
    ]
}

/// The ITN class grammars, in the order the pipeline composes/unions them.
/// `math` sits last among the "real" classes (spec.md §4.3) since an
/// arithmetic-expression reading should only win when nothing narrower
/// matches the same span.
pub fn itn_classes(config: &NormalizerConfig) -> Vec<Box<dyn ClassGrammar>> {
    vec![
        Box::new(WhitelistItn::new()),
        Box::new(DateItn::new()),
        Box::new(TimeItn::new()),
        Box::new(MoneyItn::new()),
        Box::new(FractionItn::new()),
        Box::new(MeasureItn::new()),
        Box::new(CardinalItn::new(
            config.enable_standalone_number,
            config.enable_0_to_9,
            config.enable_million,
        )),
        Box::new(MathItn::new()),
        Box::new(CharFallback::new()),
    ]
}

/// `traditional_to_simple.py`'s pass: rewrites traditional characters to
/// their simplified form wherever they occur in the input.
pub fn traditional_to_simple() -> Fst {
    optimize(build_rule(string_file(TRADITIONAL_TO_SIMPLE_TSV)))
}

/// `fullwidth_to_halfwidth.tsv`'s pass: rewrites full-width punctuation and
/// digits to their half-width ASCII form.
pub fn full_to_half() -> Fst {
    optimize(build_rule(string_file(FULL_TO_HALF_TSV)))
}

/// Deletes filler interjections ("嗯", "啊", ...) from the input, grounded
/// in `original_source/processors/preprocessor.py`'s `deny` pass.
pub fn remove_interjections() -> Fst {
    optimize(build_rule(delete_lexicon(DENYLIST_TSV)))
}

/// Deletes Chinese punctuation marks, grounded in
/// `original_source/tn/chinese/rules/postprocessor.py`'s `remove_puncts`.
pub fn remove_puncts() -> Fst {
    optimize(build_rule(delete_lexicon(PUNCTS_TSV)))
}

/// Parses single-column TSV entries into `cross(entry, "")`, the delete-on-
/// match transducer `pynutil.delete(string_file(...))` builds in
/// `original_source`. `string_file` itself treats a bare column as an
/// identity mapping, so the two diverge on purpose here.
fn delete_lexicon(tsv: &str) -> Fst {
    union_all(tsv.lines().filter_map(|line| {
        let line = line.trim_end_matches('\r');
        if line.is_empty() || line.starts_with('#') {
            return None;
        }
        let entry = line.split('\t').next()?;
        Some(cross(entry, ""))
    }))
}
