//! Module: select
//! Responsibility: result-shaping options and their canonical fold.
//! Does not own: sorting or paging rows; see `eval::select` for the
//! in-memory reference.


use crate::{
    field::{Field, FieldKey},
    traits::{EntityKind, FieldValue},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

///
/// OrderDirection
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

///
/// SelectOption
///
/// One result-shaping directive. Options are consumed once by `fold`;
/// conflicting limits or offsets are legal input.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SelectOption<E> {
    LimitTo(u32),
    OffsetBy(u32),
    OrderBy(FieldKey<E>, OrderDirection),
}

impl<E> SelectOption<E> {
    #[must_use]
    pub const fn is_order(&self) -> bool {
        matches!(self, Self::OrderBy(..))
    }
}

impl<E, T> Field<E, T>
where
    E: EntityKind,
    T: FieldValue,
{
    /// Order ascending by this field.
    #[must_use]
    pub const fn asc(self) -> SelectOption<E> {
        SelectOption::OrderBy(self.key(), OrderDirection::Asc)
    }

    /// Order descending by this field.
    #[must_use]
    pub const fn desc(self) -> SelectOption<E> {
        SelectOption::OrderBy(self.key(), OrderDirection::Desc)
    }
}

///
/// SelectFold
///
/// Canonical form of an option list.
/// `limit == 0` means unbounded and `offset == 0` means no skip.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SelectFold<E> {
    pub limit: u32,
    pub offset: u32,
    pub remaining: Vec<SelectOption<E>>,
}

impl<E> SelectFold<E> {
    /// Limit as an option, `None` when unbounded.
    #[must_use]
    pub const fn limit(&self) -> Option<u32> {
        match self.limit {
            0 => None,
            n => Some(n),
        }
    }

    /// Ordering clauses in application order.
    pub fn order_by(&self) -> impl Iterator<Item = (FieldKey<E>, OrderDirection)> + '_ {
        self.remaining.iter().filter_map(|option| match option {
            SelectOption::OrderBy(field, direction) => Some((*field, *direction)),
            _ => None,
        })
    }

    #[must_use]
    pub fn into_parts(self) -> (u32, u32, Vec<SelectOption<E>>) {
        (self.limit, self.offset, self.remaining)
    }
}

///
/// Fold an option list into `(limit, offset, remaining)`.
///
/// The list is scanned right to left. The first `LimitTo` / `OffsetBy` seen
/// in that scan wins, so the last one in the original order takes effect
/// and earlier ones are dropped. Every other option is kept in original
/// order. Nothing is rejected.
///
#[must_use]
pub fn fold<E>(options: Vec<SelectOption<E>>) -> SelectFold<E> {
    let mut limit = None;
    let mut offset = None;
    let mut remaining = Vec::new();

    for option in options.into_iter().rev() {
        match option {
            SelectOption::LimitTo(n) => keep_last(&mut limit, n, "limit"),
            SelectOption::OffsetBy(n) => keep_last(&mut offset, n, "offset"),
            other => remaining.push(other),
        }
    }
    remaining.reverse();

    SelectFold {
        limit: limit.unwrap_or(0),
        offset: offset.unwrap_or(0),
        remaining,
    }
}

// Right-to-left scan: the first value seen is the last one written.
fn keep_last(slot: &mut Option<u32>, value: u32, kind: &'static str) {
    match slot {
        Some(kept) => debug!(kind, kept = *kept, dropped = value, "select option overridden"),
        None => *slot = Some(value),
    }
}
