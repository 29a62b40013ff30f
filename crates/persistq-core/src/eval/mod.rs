//! Module: eval
//! Responsibility: in-memory reference interpretation of filters, updates,
//! and select options over rows that expose fields by name.
//! Does not own: planning, indexing, or any backend translation.
//! Boundary: used by tests and diagnostics to pin down what the algebra
//! means; production execution lives in the translation layer.

mod compare;
mod like;


use crate::{
    filter::{CompareOp, FieldFilter, Filter, FilterKind, MembershipOp, PatternOp},
    select::{OrderDirection, SelectOption, fold},
    update::{Update, UpdateKind},
    value::{Value, ValueKind},
};
use compare::{compare_eq, compare_order, sort_cmp};
use std::{cmp::Ordering, collections::BTreeMap};
use thiserror::Error as ThisError;
use tracing::{debug, trace};

// re-exports
pub use like::like_match;

///
/// EvalError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum EvalError {
    #[error("field '{field}' is not present on the row")]
    MissingField { field: String },

    #[error("cannot {kind} a {operand} operand into {current} field '{field}'")]
    NonNumeric {
        field: String,
        kind: UpdateKind,
        current: ValueKind,
        operand: ValueKind,
    },

    #[error("division by zero on field '{field}'")]
    DivisionByZero { field: String },

    #[error("arithmetic overflow on field '{field}'")]
    Overflow { field: String },
}

///
/// FieldPresence
///
/// Result of reading a field from a row. Distinguishes a missing field
/// from a present field whose value is `Value::Null`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldPresence {
    Present(Value),
    Missing,
}

impl FieldPresence {
    const fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Present(value) => Some(value),
            Self::Missing => None,
        }
    }
}

///
/// Row
///
/// Read access to a row-like value by field name.
///

pub trait Row {
    fn field(&self, name: &str) -> FieldPresence;
}

///
/// RowMut
///
/// Write access for update evaluation. Updates never add fields.
///

pub trait RowMut: Row {
    fn field_mut(&mut self, name: &str) -> Option<&mut Value>;
}

impl Row for BTreeMap<String, Value> {
    fn field(&self, name: &str) -> FieldPresence {
        match self.get(name) {
            Some(value) => FieldPresence::Present(value.clone()),
            None => FieldPresence::Missing,
        }
    }
}

impl RowMut for BTreeMap<String, Value> {
    fn field_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.get_mut(name)
    }
}

// ----------------------------------------------------------------------
// Filters
// ----------------------------------------------------------------------

///
/// Evaluate a filter list against a single row.
///
/// The list is a conjunction (an empty list matches everything); an `Or`
/// node matches when either branch matches. Comparisons that are not
/// defined for the stored value evaluate to `false`.
///
#[must_use]
pub fn matches<E, R: Row + ?Sized>(row: &R, filters: &[Filter<E>]) -> bool {
    filters.iter().all(|filter| match filter {
        Filter::Field(filter) => eval_field(row, filter),
        Filter::Or(disjunction) => {
            matches(row, disjunction.left()) || matches(row, disjunction.right())
        }
    })
}

/// Keep the rows that match `filters`, preserving order.
#[must_use]
pub fn filter_rows<E, R: Row>(rows: Vec<R>, filters: &[Filter<E>]) -> Vec<R> {
    rows.into_iter()
        .filter(|row| matches(row, filters))
        .collect()
}

fn eval_field<E, R: Row + ?Sized>(row: &R, filter: &FieldFilter<E>) -> bool {
    let name = filter.field.as_str();

    let matched = match row.field(name) {
        FieldPresence::Present(actual) => eval_kind(&actual, &filter.kind),
        FieldPresence::Missing => false,
    };
    trace!(field = name, op = %filter.op(), matched, "filter evaluated");

    matched
}

fn eval_kind(actual: &Value, kind: &FilterKind) -> bool {
    match kind {
        FilterKind::Compare { op, value } => eval_compare(actual, *op, value),

        // null fields never take part in set membership
        FilterKind::Membership { .. } if actual.is_null() => false,
        FilterKind::Membership { op, values } => {
            let found = values
                .iter()
                .any(|value| compare_eq(actual, value).unwrap_or(false));
            match op {
                MembershipOp::In => found,
                MembershipOp::NotIn => !found,
            }
        }

        FilterKind::Pattern {
            op,
            pattern,
            escape,
        } => {
            let Some(text) = actual.as_text() else {
                return false;
            };
            let found = like_match(text, pattern.as_str(), *escape);
            match op {
                PatternOp::Like => found,
                PatternOp::NotLike => !found,
            }
        }
    }
}

fn eval_compare(actual: &Value, op: CompareOp, value: &Value) -> bool {
    // equality against null is a presence test
    match (op, value.is_null()) {
        (CompareOp::Eq, true) => return actual.is_null(),
        (CompareOp::Ne, true) => return !actual.is_null(),
        _ if actual.is_null() || value.is_null() => return false,
        _ => {}
    }

    match op {
        CompareOp::Eq => compare_eq(actual, value).unwrap_or(false),
        CompareOp::Ne => compare_eq(actual, value).is_some_and(|eq| !eq),
        CompareOp::Lt => compare_order(actual, value).is_some_and(Ordering::is_lt),
        CompareOp::Le => compare_order(actual, value).is_some_and(Ordering::is_le),
        CompareOp::Gt => compare_order(actual, value).is_some_and(Ordering::is_gt),
        CompareOp::Ge => compare_order(actual, value).is_some_and(Ordering::is_ge),
    }
}

// ----------------------------------------------------------------------
// Updates
// ----------------------------------------------------------------------

///
/// Apply updates to a row, in order.
///
/// All updates are computed first and written only if every one succeeds,
/// so a failing update leaves the row untouched. Arithmetic on a null
/// stored value yields null.
///
pub fn apply_updates<E, R: RowMut + ?Sized>(
    row: &mut R,
    updates: &[Update<E>],
) -> Result<(), EvalError> {
    let mut staged: BTreeMap<&'static str, Value> = BTreeMap::new();

    for update in updates {
        let name = update.field.as_str();
        let current = match staged.get(name) {
            Some(value) => value.clone(),
            None => match row.field(name) {
                FieldPresence::Present(value) => value,
                FieldPresence::Missing => {
                    return Err(EvalError::MissingField {
                        field: name.to_string(),
                    });
                }
            },
        };

        let next = apply_one(name, &current, update.kind, &update.value)?;
        staged.insert(name, next);
    }

    for (name, value) in staged {
        let slot = row.field_mut(name).ok_or_else(|| EvalError::MissingField {
            field: name.to_string(),
        })?;
        *slot = value;
    }

    Ok(())
}

fn apply_one(
    field: &str,
    current: &Value,
    kind: UpdateKind,
    operand: &Value,
) -> Result<Value, EvalError> {
    if kind == UpdateKind::Assign {
        return Ok(operand.clone());
    }
    if current.is_null() {
        return Ok(Value::Null);
    }

    match (current, operand) {
        (Value::Int(a), Value::Int(b)) => int_arith(field, kind, *a, *b).map(Value::Int),
        (a, b) => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => float_arith(field, kind, a, b),
            _ => Err(EvalError::NonNumeric {
                field: field.to_string(),
                kind,
                current: current.kind(),
                operand: operand.kind(),
            }),
        },
    }
}

fn int_arith(field: &str, kind: UpdateKind, a: i64, b: i64) -> Result<i64, EvalError> {
    let result = match kind {
        UpdateKind::Add => a.checked_add(b),
        UpdateKind::Subtract => a.checked_sub(b),
        UpdateKind::Multiply => a.checked_mul(b),
        UpdateKind::Divide if b == 0 => {
            return Err(EvalError::DivisionByZero {
                field: field.to_string(),
            });
        }
        UpdateKind::Divide => a.checked_div(b),
        UpdateKind::Assign => Some(b),
    };

    result.ok_or_else(|| EvalError::Overflow {
        field: field.to_string(),
    })
}

fn float_arith(field: &str, kind: UpdateKind, a: f64, b: f64) -> Result<Value, EvalError> {
    let result = match kind {
        UpdateKind::Add => a + b,
        UpdateKind::Subtract => a - b,
        UpdateKind::Multiply => a * b,
        UpdateKind::Divide if b == 0.0 => {
            return Err(EvalError::DivisionByZero {
                field: field.to_string(),
            });
        }
        UpdateKind::Divide => a / b,
        UpdateKind::Assign => b,
    };

    Value::float(result).ok_or_else(|| EvalError::Overflow {
        field: field.to_string(),
    })
}

// ----------------------------------------------------------------------
// Select options
// ----------------------------------------------------------------------

///
/// Shape a row set with select options.
///
/// Options are folded first; rows are then stable-sorted by every order
/// clause in order of appearance, `offset` rows are skipped, and at most
/// `limit` rows are kept (`0` keeps all).
///
#[must_use]
pub fn select<E, R: Row>(mut rows: Vec<R>, options: Vec<SelectOption<E>>) -> Vec<R> {
    let plan = fold(options);
    let order: Vec<_> = plan.order_by().collect();

    if !order.is_empty() {
        rows.sort_by(|left, right| {
            order
                .iter()
                .map(|(field, direction)| {
                    let left = left.field(field.as_str());
                    let right = right.field(field.as_str());
                    let ordering = sort_cmp(left.as_value(), right.as_value());
                    match direction {
                        OrderDirection::Asc => ordering,
                        OrderDirection::Desc => ordering.reverse(),
                    }
                })
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal)
        });
    }

    let rows_in = rows.len();
    let skipped = rows.into_iter().skip(to_usize(plan.offset));
    let out: Vec<R> = match plan.limit() {
        Some(limit) => skipped.take(to_usize(limit)).collect(),
        None => skipped.collect(),
    };
    debug!(
        limit = plan.limit,
        offset = plan.offset,
        rows_in,
        rows_out = out.len(),
        "select plan applied"
    );

    out
}

fn to_usize(n: u32) -> usize {
    usize::try_from(n).unwrap_or(usize::MAX)
}
