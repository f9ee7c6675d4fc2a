//! English class grammar library (spec.md §4.3). TN covers whitelist,
//! date, money, fraction, measure, and cardinal; ITN (grounded in
//! `original_source/itn/english/rules/{cardinal,date,ordinal}.py`) covers
//! spoken-word cardinal, date, and ordinal parsing.

pub mod cardinal;
mod charclass;
mod date;
mod fraction;
mod measure;
mod money;
mod ordinal;
mod whitelist;

pub use charclass::CharFallback;
pub use date::{DateItn, DateTn};
pub use fraction::FractionTn;
pub use measure::MeasureTn;
pub use money::MoneyTn;
pub use ordinal::OrdinalItn;
pub use whitelist::WhitelistTn;

use crate::processor::ClassGrammar;

/// The TN class grammars, in the order the pipeline composes/unions them.
pub fn tn_classes() -> Vec<Box<dyn ClassGrammar>> {
    vec![
        Box::new(WhitelistTn::new()),
        Box::new(DateTn::new()),
        Box::new(MoneyTn::new()),
        Box::new(FractionTn::new()),
        Box::new(MeasureTn::new()),
        Box::new(cardinal::CardinalTn::new()),
        Box::new(CharFallback::new()),
    ]
}

/// The ITN class grammars. No whitelist/char-fallback pass: unlike TN's
/// identity-mapped OOV handling, ITN input that isn't a recognized spoken
/// number/date/ordinal phrase is left as plain English prose untouched.
pub fn itn_classes() -> Vec<Box<dyn ClassGrammar>> {
    vec![
        Box::new(DateItn::new()),
        Box::new(OrdinalItn::new()),
        Box::new(cardinal::CardinalItn::new()),
    ]
}
