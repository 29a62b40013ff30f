//! Core algebra for persistq: typed field handles, filter and update
//! expressions, LIKE escaping, select-option folding, and the JSON codec
//! for persisted values.
//!
//! Nothing in this crate executes a query. Outputs are backend-agnostic
//! values handed to a separate translation layer; `eval` is an in-memory
//! reference interpreter used by tests and diagnostics.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod codec;
pub mod config;
pub mod error;
pub mod eval;
pub mod field;
pub mod filter;
pub mod like;
pub mod select;
pub mod traits;
pub mod update;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;
#[cfg(test)]
pub(crate) mod test_trace;

pub use error::Error;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, evaluators, or codecs are re-exported here.
///

pub mod prelude {
    pub use crate::{
        field::{Field, FieldKey},
        filter::{
            Conjunction, Disjunction, Filter, FilterOp, eq, ge, gt, in_, le, like, lt, ne,
            not_in, not_like, or_,
        },
        like::{EscapedLikeText, escape},
        select::{OrderDirection, SelectOption, fold},
        traits::{EntityKind, FieldValue},
        update::{Update, UpdateKind, add, assign, divide, multiply, subtract},
        value::Value,
    };
}
