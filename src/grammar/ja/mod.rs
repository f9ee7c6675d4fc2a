//! Japanese class grammar library (spec.md §4.3), TN and ITN. Narrower
//! than the Chinese library: fraction, time, and math readings are
//! dropped (noted in DESIGN.md) since neither spec.md's worked examples
//! nor `original_source/{tn,itn}/japanese/rules/` carry enough shared
//! lexicon data in this pack to ground them confidently; whitelist, date,
//! measure, money, and cardinal cover everything the worked examples
//! exercise.

mod cardinal;
mod charclass;
mod date;
mod measure;
mod money;
mod whitelist;

pub use cardinal::{CardinalItn, CardinalTn};
pub use charclass::CharFallback;
pub use date::{DateItn, DateTn};
pub use measure::{MeasureItn, MeasureTn};
pub use money::{MoneyItn, MoneyTn};
pub use whitelist::{WhitelistItn, WhitelistTn};

use crate::processor::ClassGrammar;

/// The TN class grammars, in the order the pipeline composes/unions them.
pub fn tn_classes() -> Vec<Box<dyn ClassGrammar>> {
    vec![
        Box::new(WhitelistTn::new()),
        Box::new(DateTn::new()),
        Box::new(MoneyTn::new()),
        Box::new(MeasureTn::new()),
        Box::new(CardinalTn::new()),
        Box::new(CharFallback::new()),
    ]
}

/// The ITN class grammars, in the order the pipeline composes/unions them.
pub fn itn_classes() -> Vec<Box<dyn ClassGrammar>> {
    vec![
        Box::new(WhitelistItn::new()),
        Box::new(DateItn::new()),
        Box::new(MoneyItn::new()),
        Box::new(MeasureItn::new()),
        Box::new(CardinalItn::new()),
        Box::new(CharFallback::new()),
    ]
}
