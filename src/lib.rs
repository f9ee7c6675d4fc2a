//! # wetext-fst: WFST-based text normalization / inverse text normalization
//!
//! Builds its own weighted finite-state transducer grammars in Rust
//! (`rustfst`) for Chinese, English, and Japanese TN/ITN, rather than
//! loading FSTs pre-compiled by the Python toolchain this crate is
//! grounded in.
//!
//! ## Example
//!
//! ```rust,ignore
//! use wetext_fst::{Normalizer, NormalizerConfig, Language};
//!
//! let config = NormalizerConfig::new().with_lang(Language::Zh);
//! let mut normalizer = Normalizer::new(config);
//! let result = normalizer.normalize("2024年1月15日").unwrap();
//! ```

mod cache;
mod config;
mod contractions;
mod error;
pub mod fst;
pub mod grammar;
mod normalizer;
pub mod processor;
mod token;

pub use config::{Language, NormalizerConfig, Operator};
pub use error::{Result, WeTextError};
pub use normalizer::Normalizer;

/// Convenience function: normalize text with default configuration.
///
/// # Example
/// ```rust,ignore
/// let result = wetext_fst::normalize("123").unwrap();
/// assert_eq!(result, "一百二十三");
/// ```
pub fn normalize(text: &str) -> Result<String> {
    Normalizer::with_defaults().normalize(text)
}
