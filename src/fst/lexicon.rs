//! `string_file`: loads a TSV lexicon into the union of `cross(src, dst)`
//! transducers it describes (spec.md §4.1, §6).
//!
//! Lexicon *content* is an external-collaborator concern (spec.md §1's
//! scope carve-out) — this module only implements the mechanism that turns
//! TSV text into a transducer. Callers pass already-loaded text (typically
//! `include_str!`-embedded from `data/`, per spec.md §6's "embedded data
//! root").

use super::kernel::{cross, union_all, Fst};

/// Parse `source\tdst` (or bare `source`, meaning an identity mapping) TSV
/// text into a transducer accepting any of its rows.
pub fn string_file(tsv: &str) -> Fst {
    union_all(tsv.lines().filter_map(parse_line))
}

fn parse_line(line: &str) -> Option<Fst> {
    let line = line.trim_end_matches('\r');
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let mut cols = line.split('\t');
    let src = cols.next()?;
    let dst = cols.next().unwrap_or(src);
    Some(cross(src, dst))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fst::kernel::{accept, compose, shortest_path};

    #[test]
    fn parses_two_column_rows() {
        let fst = string_file("一\t1\n二\t2\n");
        let composed = compose(&accept("二"), &fst);
        assert_eq!(shortest_path(&composed), Some("2".into()));
    }

    #[test]
    fn single_column_row_is_identity() {
        let fst = string_file("hello\n");
        let composed = compose(&accept("hello"), &fst);
        assert_eq!(shortest_path(&composed), Some("hello".into()));
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let fst = string_file("# comment\n\na\tb\n");
        let composed = compose(&accept("a"), &fst);
        assert_eq!(shortest_path(&composed), Some("b".into()));
    }
}
