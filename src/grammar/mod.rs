//! Class grammar library (spec.md §4.3): one module per language, each
//! exposing `tn_classes`/`itn_classes` constructors plus any
//! language-specific pre/postprocessing passes the `Normalizer` composes
//! around the tag/verbalize union.

pub mod common;
pub mod en;
pub mod ja;
pub mod zh;
