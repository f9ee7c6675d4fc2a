//! Core weighted-transducer algebra (spec.md §4.1).
//!
//! Transducers are `rustfst::VectorFst<TropicalWeight>` over a byte
//! alphabet. Byte `b` is encoded as label `b as Label + 1` so that label `0`
//! stays reserved for `EPS_LABEL`; `decode` undoes the offset. This mirrors
//! the convention OpenFst's byte-symbol machines use to avoid colliding a
//! literal NUL byte with epsilon.

use rustfst::algorithms::closure::{closure, ClosureType};
use rustfst::algorithms::compose::compose as rustfst_compose;
use rustfst::algorithms::concat::concat as rustfst_concat;
use rustfst::algorithms::determinize::determinize;
use rustfst::algorithms::rm_epsilon::rm_epsilon;
use rustfst::algorithms::tr_compares::{ILabelCompare, OLabelCompare};
use rustfst::algorithms::union::union as rustfst_union;
use rustfst::algorithms::{minimize, shortest_path as rustfst_shortest_path, tr_sort};
use rustfst::fst_impls::VectorFst;
use rustfst::fst_traits::{CoreFst, ExpandedFst, Fst as FstTrait, MutableFst, SerializableFst};
use rustfst::semirings::{Semiring, TropicalWeight};
use rustfst::{Label, Tr, Trs, EPS_LABEL};

use std::path::Path;

use crate::error::{Result, WeTextError};

pub type Weight = TropicalWeight;
pub type Fst = VectorFst<Weight>;

fn byte_label(b: u8) -> Label {
    b as Label + 1
}

fn label_byte(l: Label) -> u8 {
    (l - 1) as u8
}

/// Identity transducer on `s`, zero weight (spec.md §4.1 `accept`).
pub fn accept(s: &str) -> Fst {
    cross(s, s)
}

/// The empty-string identity transducer.
pub fn epsilon() -> Fst {
    let mut fst = Fst::new();
    let s = fst.add_state();
    fst.set_start(s).expect("fresh state is valid start");
    fst.set_final(s, Weight::one()).expect("fresh state is valid final");
    fst
}

/// `cross(a, b)`: maps `a` to `b` with zero weight, padding the shorter
/// side with epsilon so both tapes are consumed/produced over the same
/// linear chain of states.
pub fn cross(a: &str, b: &str) -> Fst {
    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();
    let len = a_bytes.len().max(b_bytes.len());

    let mut fst = Fst::new();
    let mut state = fst.add_state();
    fst.set_start(state).expect("fresh state is valid start");

    for i in 0..len {
        let ilabel = a_bytes.get(i).map_or(EPS_LABEL, |&b| byte_label(b));
        let olabel = b_bytes.get(i).map_or(EPS_LABEL, |&b| byte_label(b));
        let next = fst.add_state();
        fst.add_tr(state, Tr::new(ilabel, olabel, Weight::one(), next))
            .expect("linear chain transition is always valid");
        state = next;
    }

    fst.set_final(state, Weight::one())
        .expect("fresh state is valid final");
    fst
}

/// `insert(s)` = `cross("", s)`.
pub fn insert_str(s: &str) -> Fst {
    cross("", s)
}

/// `delete(s)` = `cross(s, "")`.
pub fn delete_str(s: &str) -> Fst {
    cross(s, "")
}

/// `A | B`: union of accepted paths.
pub fn union(mut a: Fst, b: Fst) -> Fst {
    if a.num_states() == 0 {
        return b;
    }
    if b.num_states() == 0 {
        return a;
    }
    rustfst_union(&mut a, &b).expect("union of two valid VectorFsts cannot fail");
    a
}

/// Fold `union` over any number of fragments, returning the empty lattice
/// for an empty input (spec.md §4.1 edge case policy).
pub fn union_all<I: IntoIterator<Item = Fst>>(fsts: I) -> Fst {
    let mut iter = fsts.into_iter();
    let Some(first) = iter.next() else {
        return Fst::new();
    };
    iter.fold(first, union)
}

/// `A + B`: concatenation.
pub fn concat(mut a: Fst, b: Fst) -> Fst {
    rustfst_concat(&mut a, &b).expect("concat of two valid VectorFsts cannot fail");
    a
}

/// Fold `concat` left to right.
pub fn concat_all<I: IntoIterator<Item = Fst>>(fsts: I) -> Fst {
    let mut iter = fsts.into_iter();
    let Some(first) = iter.next() else {
        return epsilon();
    };
    iter.fold(first, concat)
}

/// `A.star`: zero or more repetitions (Kleene closure).
pub fn star(mut a: Fst) -> Fst {
    closure(&mut a, ClosureType::ClosureStar);
    a
}

/// `A.plus`: one or more repetitions.
pub fn plus(mut a: Fst) -> Fst {
    closure(&mut a, ClosureType::ClosurePlus);
    a
}

/// `A.ques`: zero or one repetition.
pub fn ques(a: Fst) -> Fst {
    union(a, epsilon())
}

/// `add_weight(A, w)`: add `w` to every accepting path by multiplying it
/// (tropical ⊗ = +) into each final state's weight. This affects every
/// complete path through `A` exactly once, regardless of path structure.
pub fn add_weight(mut a: Fst, w: f32) -> Fst {
    let extra = Weight::new(w);
    let finals: Vec<_> = a
        .final_states_iter()
        .map(|s| (s, a.final_weight(s).unwrap().unwrap_or_else(Weight::one)))
        .collect();
    for (state, old) in finals {
        a.set_final(state, old.times(&extra).unwrap_or_else(|_| Weight::new(w)))
            .expect("state came from final_states_iter, must be settable");
    }
    a
}

/// `invert(A)`: swap the input and output tapes.
pub fn invert(a: Fst) -> Fst {
    let mut out = Fst::new();
    for _ in 0..a.num_states() {
        out.add_state();
    }
    if let Some(start) = a.start() {
        out.set_start(start).expect("mirrored state exists");
    }
    for state in 0..a.num_states() as u32 {
        if let Ok(Some(w)) = a.final_weight(state) {
            out.set_final(state, w).expect("mirrored state exists");
        }
        if let Ok(trs) = a.get_trs(state) {
            for tr in trs.trs() {
                out.add_tr(
                    state,
                    Tr::new(tr.olabel, tr.ilabel, tr.weight.clone(), tr.nextstate),
                )
                .expect("mirrored transition is valid");
            }
        }
    }
    out
}

/// `project(A, "input")`.
pub fn project_input(a: Fst) -> Fst {
    project(a, true)
}

/// `project(A, "output")`.
pub fn project_output(a: Fst) -> Fst {
    project(a, false)
}

fn project(mut a: Fst, keep_input: bool) -> Fst {
    for state in 0..a.num_states() as u32 {
        if let Ok(trs) = a.get_trs(state) {
            let new_trs: Vec<Tr<Weight>> = trs
                .trs()
                .iter()
                .map(|tr| {
                    let label = if keep_input { tr.ilabel } else { tr.olabel };
                    Tr::new(label, label, tr.weight.clone(), tr.nextstate)
                })
                .collect();
            a.pop_trs(state).expect("state is valid");
            for tr in new_trs {
                a.add_tr(state, tr).expect("projected transition is valid");
            }
        }
    }
    a
}

/// `A @ B`: composition. Returns the empty lattice if the alphabets are
/// incompatible (spec.md §4.1 edge case policy) rather than propagating a
/// `rustfst` error, since an empty result is itself meaningful here.
pub fn compose(a: &Fst, b: &Fst) -> Fst {
    rustfst_compose::<Weight, Fst, Fst, Fst, _, _>(a, b).unwrap_or_else(|_| Fst::new())
}

/// `A.optimize()`: determinize/minimize where possible. `rustfst`'s
/// determinize only accepts functional transducers; when it (or minimize)
/// fails we fall back to the epsilon-removed, connected form rather than
/// erroring, matching spec.md's "equivalent semantics" requirement without
/// demanding every grammar fragment be literally determinizable.
pub fn optimize(mut a: Fst) -> Fst {
    if rm_epsilon(&mut a).is_err() {
        return a;
    }
    tr_sort(&mut a, ILabelCompare {});

    match determinize(&a) {
        Ok(mut det) => {
            let _ = minimize(&mut det);
            tr_sort(&mut det, OLabelCompare {});
            det
        }
        Err(_) => a,
    }
}

/// `shortest_path(L, n=1)`: the lowest-weight accepted string. Ties are
/// broken deterministically by `rustfst`'s internal state-id ordering
/// (spec.md §4.1, §5 ordering guarantee).
pub fn shortest_path(a: &Fst) -> Option<String> {
    if a.num_states() == 0 {
        return None;
    }
    let best: Fst = rustfst_shortest_path(a).ok()?;
    if best.num_states() == 0 {
        return None;
    }
    decode_output(&best)
}

/// Walk the (assumed-linear) best-path FST and decode its output tape back
/// into a UTF-8 string.
fn decode_output(fst: &Fst) -> Option<String> {
    let mut bytes = Vec::new();
    let mut state = fst.start()?;
    let mut visited = std::collections::HashSet::new();
    loop {
        if fst.is_final(state).ok()? {
            if fst.get_trs(state).map(|t| t.trs().is_empty()).unwrap_or(true) {
                break;
            }
        }
        if !visited.insert(state) {
            break; // guard against a malformed best-path cycle
        }
        let trs = fst.get_trs(state).ok()?;
        let tr = trs.trs().first()?.clone();
        if tr.olabel != EPS_LABEL {
            bytes.push(label_byte(tr.olabel));
        }
        state = tr.nextstate;
    }
    String::from_utf8(bytes).ok()
}

pub fn read<P: AsRef<Path>>(path: P) -> Result<Fst> {
    Fst::read(path.as_ref()).map_err(|e| WeTextError::FstLoadError(e.to_string()))
}

pub fn write<P: AsRef<Path>>(fst: &Fst, path: P) -> Result<()> {
    fst.write(path.as_ref())
        .map_err(|e| WeTextError::FstOperationError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_roundtrips() {
        let a = accept("hi");
        let result = compose(&self::accept("hi"), &a);
        assert_eq!(shortest_path(&result), Some("hi".to_string()));
    }

    #[test]
    fn cross_maps_a_to_b() {
        let t = cross("abc", "xy");
        let input = accept("abc");
        let composed = compose(&input, &t);
        assert_eq!(shortest_path(&composed), Some("xy".to_string()));
    }

    #[test]
    fn union_accepts_either_branch() {
        let t = union(cross("a", "1"), cross("b", "2"));
        assert_eq!(shortest_path(&compose(&accept("a"), &t)), Some("1".into()));
        assert_eq!(shortest_path(&compose(&accept("b"), &t)), Some("2".into()));
    }

    #[test]
    fn star_accepts_repetition() {
        let t = star(cross("a", "x"));
        let composed = compose(&accept("aaa"), &t);
        assert_eq!(shortest_path(&composed), Some("xxx".into()));
    }

    #[test]
    fn add_weight_prefers_lower_branch() {
        let cheap = add_weight(cross("x", "cheap"), 0.0);
        let expensive = add_weight(cross("x", "expensive"), 5.0);
        let t = union(cheap, expensive);
        let composed = compose(&accept("x"), &t);
        assert_eq!(shortest_path(&composed), Some("cheap".into()));
    }

    #[test]
    fn invert_swaps_tapes() {
        let t = invert(cross("ab", "cd"));
        let composed = compose(&accept("cd"), &t);
        assert_eq!(shortest_path(&composed), Some("ab".into()));
    }

    #[test]
    fn empty_lattice_shortest_path_is_none() {
        assert_eq!(shortest_path(&Fst::new()), None);
    }
}
