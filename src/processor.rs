//! The `Processor` contract (spec.md §4.2): every class grammar exposes a
//! `name`, a `tagger`, and a `verbalizer`, built with the `add_tokens` /
//! `delete_tokens` helpers below. `Processor` itself is a helper namespace
//! of constants/combinators, not a base class to inherit from (spec.md §9) —
//! here that's a free-function module plus the `ClassGrammar` capability
//! interface the pipeline iterates over.

use crate::fst::{
    accept, concat, cross, delete_str, insert_str, not_quote, union, Fst,
};

/// The capability interface every class grammar implements. The pipeline
/// (`crate::normalizer`) holds a `Vec<Box<dyn ClassGrammar>>` and never
/// needs to know the concrete class behind each entry.
pub trait ClassGrammar {
    fn name(&self) -> &str;
    fn tagger(&self) -> &Fst;
    fn verbalizer(&self) -> &Fst;
}

/// `add_tokens(t)` = `insert("name { ") + t + insert(" }")`.
pub fn add_tokens(name: &str, body: Fst) -> Fst {
    let opened = concat(insert_str(&format!("{name} {{ ")), body);
    concat(opened, insert_str(" }"))
}

/// `delete_tokens(t)` = `delete("name { ") + t + delete(" }")`.
pub fn delete_tokens(name: &str, body: Fst) -> Fst {
    let opened = concat(delete_str(&format!("{name} {{ ")), body);
    concat(opened, delete_str(" }"))
}

/// A quoted field inside a tagger's output: `insert('key: "') + value + insert('"')`.
pub fn tag_field(key: &str, value: Fst) -> Fst {
    let opened = concat(insert_str(&format!("{key}: \"")), value);
    concat(opened, insert_str("\""))
}

/// A quoted field inside a tagger's output preceded by a space, used for
/// every field after the first one in a token.
pub fn tag_field_spaced(key: &str, value: Fst) -> Fst {
    let opened = concat(insert_str(&format!(" {key}: \"")), value);
    concat(opened, insert_str("\""))
}

/// The matching verbalizer-side accessor for a field built with
/// `tag_field`/`tag_field_spaced`: deletes the `key: "`...`"` wrapper and
/// exposes the raw value.
pub fn untag_field(key: &str) -> Fst {
    concat(
        concat(delete_str(&format!("{key}: \"")), crate::fst::star(sigma_value())),
        delete_str("\""),
    )
}

/// Same as `untag_field` but for a field that is not first in the token
/// (so it is preceded by a literal space in the tagged string).
pub fn untag_field_spaced(key: &str) -> Fst {
    concat(
        concat(delete_str(&format!(" {key}: \"")), crate::fst::star(sigma_value())),
        delete_str("\""),
    )
}

/// `Processor.SIGMA`: any value character, with its escaped forms folded
/// back to their literal form — the value-tape counterpart of
/// `Processor.CHAR` in spec.md §4.2.
pub fn sigma_value() -> Fst {
    union(
        not_quote(),
        union(cross("\\\\", "\\"), cross("\\\"", "\"")),
    )
}

/// `Processor.CHAR`: any value character, with `\` and `"` escaped on the
/// way in — used when building a tagger value from raw input.
pub fn char_value() -> Fst {
    union(not_quote(), union(cross("\\", "\\\\"), cross("\"", "\\\"")))
}

/// An acceptor for a literal string, passed through the escaping used on
/// tagger output.
pub fn literal(s: &str) -> Fst {
    accept(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fst::{compose, shortest_path};

    #[test]
    fn add_tokens_wraps_body() {
        let body = tag_field("value", literal("12"));
        let tagger = add_tokens("cardinal", body);
        let composed = compose(&literal("12"), &tagger);
        assert_eq!(
            shortest_path(&composed),
            Some("cardinal { value: \"12\" }".to_string())
        );
    }

    #[test]
    fn delete_tokens_unwraps_body() {
        let body = untag_field("value");
        let verbalizer = delete_tokens("cardinal", body);
        let composed = compose(&literal("cardinal { value: \"12\" }"), &verbalizer);
        assert_eq!(shortest_path(&composed), Some("12".to_string()));
    }
}
