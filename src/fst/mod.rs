//! The FST Kernel: weighted transducer primitives over a UTF-8 byte
//! alphabet in the tropical semiring.
//!
//! Every class grammar in `crate::grammar` is built exclusively out of the
//! operations exposed here. Nothing above this module touches `rustfst`
//! directly.

mod classes;
mod kernel;
mod lexicon;
mod rewrite;

pub use classes::*;
pub use kernel::{
    accept, add_weight, compose, concat, concat_all, cross, delete_str, epsilon, insert_str,
    invert, optimize, plus, project_input, project_output, ques, read, shortest_path, star, union,
    union_all, write, Fst, Weight,
};
pub use lexicon::string_file;
pub use rewrite::{build_rule, build_rule_ctx, cdrewrite};
