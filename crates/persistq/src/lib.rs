//! ## Crate layout
//! - `core`: typed fields, filter and update algebra, LIKE escaping,
//!   select options, value model, JSON codec, config, and the in-memory
//!   reference evaluator.
//!
//! The `prelude` module is what record and query code imports; evaluators,
//! codecs, and errors are reached through `core` directly.

pub use persistq_core as core;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//
// Macros
//

pub use crate::core::{Error, impl_field_value};

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{
        field::{Field, FieldKey},
        filter::{
            Conjunction, Disjunction, Filter, FilterOp, eq, ge, gt, in_, le, like, lt, ne,
            not_in, not_like, or_,
        },
        like::{EscapedLikeText, LikeEscaper, escape},
        select::{OrderDirection, SelectOption},
        traits::{EntityKind, FieldValue as _, TextValue as _},
        update::{Update, UpdateKind, add, assign, divide, multiply, subtract},
        value::Value,
    };
    pub use serde::{Deserialize, Serialize};
}
