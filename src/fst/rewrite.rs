//! `cdrewrite` — context-dependent rewrite (spec.md §4.1).
//!
//! A full Mohri/Sproat obligatory-rewrite construction needs marker
//! insertion and a filter transducer to get non-overlapping, leftmost
//! application exactly right for arbitrary regular contexts. Every call
//! site in this crate's grammar library only ever needs literal or
//! empty left/right contexts (full-width/half-width maps, erhua removal,
//! interjection stripping, the tokenizer's trailing-space cleanup), so this
//! implements the restricted but still genuinely context-checking version:
//! at every position where `left` matches immediately before and `right`
//! matches immediately after, apply `tau`; elsewhere copy one character
//! through unchanged. Repetition (`.star`) gives left-to-right, obligatory,
//! non-overlapping application for this context shape.

use super::classes::vchar;
use super::kernel::{compose, concat, project_input, star, union, Fst};

/// `cdrewrite(T, L, R, Σ*)`.
pub fn cdrewrite(tau: Fst, left: Fst, right: Fst, sigma_star: Fst) -> Fst {
    let left_ctx = project_input(left);
    let right_ctx = project_input(right);
    let in_context = concat(concat(left_ctx, tau), right_ctx);
    let step = union(in_context, vchar());
    let rewritten = star(step);
    compose(&sigma_star, &rewritten)
}

/// `Processor.build_rule(t)`: `cdrewrite(t, ε, ε, Σ*)`, the context-free
/// "replace everywhere" shape used by most postprocessor/preprocessor
/// rewrites.
pub fn build_rule(tau: Fst) -> Fst {
    cdrewrite(tau, super::kernel::epsilon(), super::kernel::epsilon(), sigma_star_cached())
}

/// `cdrewrite(t, L, R, Σ*)` with explicit contexts.
pub fn build_rule_ctx(tau: Fst, left: Fst, right: Fst) -> Fst {
    cdrewrite(tau, left, right, sigma_star_cached())
}

fn sigma_star_cached() -> Fst {
    star(vchar())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fst::kernel::{accept, cross, delete_str, shortest_path};

    #[test]
    fn build_rule_rewrites_everywhere() {
        let rule = build_rule(cross("a", "A"));
        let composed = compose(&accept("banana"), &rule);
        assert_eq!(shortest_path(&composed), Some("bAnAnA".into()));
    }

    #[test]
    fn build_rule_can_delete() {
        let rule = build_rule(delete_str("x"));
        let composed = compose(&accept("taxi"), &rule);
        assert_eq!(shortest_path(&composed), Some("tai".into()));
    }
}
