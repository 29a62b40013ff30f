//! Module: filter
//! Responsibility: typed construction of filter expressions and OR composition.
//! Does not own: filter evaluation or backend syntax.
//! Boundary: user-facing combinators; AND is list concatenation at the call site.

mod ast;
mod builder;


pub use ast::{
    CompareOp, Conjunction, Disjunction, FieldFilter, Filter, FilterKind, FilterOp, FilterOperand,
    MembershipOp, PatternOp,
};
pub use builder::{eq, ge, gt, in_, le, like, lt, ne, not_in, not_like, or_};
