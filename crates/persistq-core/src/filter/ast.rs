use crate::{field::FieldKey, like::EscapedLikeText, value::Value};
use derive_more::{Deref, IntoIterator};
use std::fmt;

///
/// Filter AST
///
/// Pure, backend-agnostic representation of filter conditions.
/// This layer records intent only. Operator semantics, empty-set behavior,
/// and ESCAPE clause emission all belong to the translation layer.
///

///
/// FilterOp
///
/// Flat operator tag, as seen by the translation layer.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum FilterOp {
    Eq = 0x01,
    Ne = 0x02,
    Lt = 0x03,
    Le = 0x04,
    Gt = 0x05,
    Ge = 0x06,
    In = 0x07,
    NotIn = 0x08,
    Like = 0x09,
    NotLike = 0x0a,
}

impl FilterOp {
    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// True for operators whose operand is a sequence.
    #[must_use]
    pub const fn takes_sequence(self) -> bool {
        matches!(self, Self::In | Self::NotIn | Self::Like | Self::NotLike)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Ne => "ne",
            Self::Lt => "lt",
            Self::Le => "le",
            Self::Gt => "gt",
            Self::Ge => "ge",
            Self::In => "in",
            Self::NotIn => "not_in",
            Self::Like => "like",
            Self::NotLike => "not_like",
        }
    }
}

impl fmt::Display for FilterOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// CompareOp
/// Operators taking a single scalar operand.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CompareOp {
    #[must_use]
    pub const fn filter_op(self) -> FilterOp {
        match self {
            Self::Eq => FilterOp::Eq,
            Self::Ne => FilterOp::Ne,
            Self::Lt => FilterOp::Lt,
            Self::Le => FilterOp::Le,
            Self::Gt => FilterOp::Gt,
            Self::Ge => FilterOp::Ge,
        }
    }
}

///
/// MembershipOp
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MembershipOp {
    In,
    NotIn,
}

impl MembershipOp {
    #[must_use]
    pub const fn filter_op(self) -> FilterOp {
        match self {
            Self::In => FilterOp::In,
            Self::NotIn => FilterOp::NotIn,
        }
    }
}

///
/// PatternOp
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PatternOp {
    Like,
    NotLike,
}

impl PatternOp {
    #[must_use]
    pub const fn filter_op(self) -> FilterOp {
        match self {
            Self::Like => FilterOp::Like,
            Self::NotLike => FilterOp::NotLike,
        }
    }
}

///
/// FilterKind
///
/// Operator and operand together. Splitting the operator set by operand
/// shape keeps single-vs-sequence mismatches unrepresentable.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FilterKind {
    Compare {
        op: CompareOp,
        value: Value,
    },
    /// Values are forwarded as given; an empty list is legal.
    Membership {
        op: MembershipOp,
        values: Vec<Value>,
    },
    Pattern {
        op: PatternOp,
        pattern: EscapedLikeText,
        escape: char,
    },
}

impl FilterKind {
    #[must_use]
    pub const fn op(&self) -> FilterOp {
        match self {
            Self::Compare { op, .. } => op.filter_op(),
            Self::Membership { op, .. } => op.filter_op(),
            Self::Pattern { op, .. } => op.filter_op(),
        }
    }
}

///
/// FilterOperand
///
/// Wire shape of a filter operand.
/// Pattern filters flatten to `Many([escaped_text, escape_char])`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FilterOperand {
    Single(Value),
    Many(Vec<Value>),
}

///
/// FieldFilter
///
/// One condition on one field.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldFilter<E> {
    pub field: FieldKey<E>,
    pub kind: FilterKind,
}

impl<E> FieldFilter<E> {
    #[must_use]
    pub const fn op(&self) -> FilterOp {
        self.kind.op()
    }

    /// Operand in wire shape.
    #[must_use]
    pub fn operand(&self) -> FilterOperand {
        match &self.kind {
            FilterKind::Compare { value, .. } => FilterOperand::Single(value.clone()),
            FilterKind::Membership { values, .. } => FilterOperand::Many(values.clone()),
            FilterKind::Pattern {
                pattern, escape, ..
            } => FilterOperand::Many(vec![
                Value::Text(pattern.as_str().to_string()),
                Value::Text(escape.to_string()),
            ]),
        }
    }
}

///
/// Filter
///
/// Element of a filter list. A list of filters is a conjunction; the only
/// way to introduce a disjunction is `or_`, which yields an `Or` node over
/// exactly two prebuilt lists.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Filter<E> {
    Field(FieldFilter<E>),
    Or(Disjunction<E>),
}

impl<E> Filter<E> {
    #[must_use]
    pub const fn as_field(&self) -> Option<&FieldFilter<E>> {
        match self {
            Self::Field(filter) => Some(filter),
            Self::Or(_) => None,
        }
    }

    #[must_use]
    pub const fn as_or(&self) -> Option<&Disjunction<E>> {
        match self {
            Self::Or(disjunction) => Some(disjunction),
            Self::Field(_) => None,
        }
    }
}

///
/// Conjunction
///
/// AND group: every filter must hold. Empty means no constraint.
///

#[derive(Clone, Debug, Deref, Eq, IntoIterator, PartialEq)]
pub struct Conjunction<E>(Vec<Filter<E>>);

impl<E> Conjunction<E> {
    #[must_use]
    pub const fn new(filters: Vec<Filter<E>>) -> Self {
        Self(filters)
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Filter<E>> {
        self.0
    }
}

impl<E> From<Vec<Filter<E>>> for Conjunction<E> {
    fn from(filters: Vec<Filter<E>>) -> Self {
        Self(filters)
    }
}

///
/// Disjunction
///
/// OR node over exactly two conjunctions, kept in argument order and never
/// flattened or simplified.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Disjunction<E> {
    left: Conjunction<E>,
    right: Conjunction<E>,
}

impl<E> Disjunction<E> {
    #[must_use]
    pub const fn new(left: Conjunction<E>, right: Conjunction<E>) -> Self {
        Self { left, right }
    }

    #[must_use]
    pub const fn left(&self) -> &Conjunction<E> {
        &self.left
    }

    #[must_use]
    pub const fn right(&self) -> &Conjunction<E> {
        &self.right
    }

    #[must_use]
    pub fn into_branches(self) -> (Conjunction<E>, Conjunction<E>) {
        (self.left, self.right)
    }
}
