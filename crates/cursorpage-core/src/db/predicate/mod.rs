//! Module: predicate
//! Responsibility: typed, composable row filters and their reference evaluator.
//! Does not own: keyset predicate construction (see `db::sort::keyset`).
//! Boundary: filters are passed opaquely to data sources.

mod ast;
mod eval;


pub use ast::{CompareOp, ComparePredicate, Predicate};
pub use eval::{FieldPresence, Row, eval};
