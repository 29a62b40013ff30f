use crate::{
    field::{Field, FieldKey},
    filter::{
        CompareOp, Conjunction, Disjunction, FieldFilter, Filter, FilterKind, MembershipOp,
        PatternOp,
    },
    like::EscapedLikeText,
    traits::{EntityKind, FieldValue, TextValue},
    value::Value,
};

// ----------------------------------------------------------------------
// Field methods
// ----------------------------------------------------------------------
// One combinator per operator. Operands are converted into the field's
// declared type first, so a mismatched operand does not compile.

impl<E, T> Field<E, T>
where
    E: EntityKind,
    T: FieldValue,
{
    /// Equality. A null operand matches a null field.
    #[must_use]
    pub fn eq(self, value: impl Into<T>) -> Filter<E> {
        compare(self.key(), CompareOp::Eq, operand::<T>(value))
    }

    /// Inequality. A null operand matches a non-null field.
    #[must_use]
    pub fn ne(self, value: impl Into<T>) -> Filter<E> {
        compare(self.key(), CompareOp::Ne, operand::<T>(value))
    }

    #[must_use]
    pub fn lt(self, value: impl Into<T>) -> Filter<E> {
        compare(self.key(), CompareOp::Lt, operand::<T>(value))
    }

    #[must_use]
    pub fn le(self, value: impl Into<T>) -> Filter<E> {
        compare(self.key(), CompareOp::Le, operand::<T>(value))
    }

    #[must_use]
    pub fn gt(self, value: impl Into<T>) -> Filter<E> {
        compare(self.key(), CompareOp::Gt, operand::<T>(value))
    }

    #[must_use]
    pub fn ge(self, value: impl Into<T>) -> Filter<E> {
        compare(self.key(), CompareOp::Ge, operand::<T>(value))
    }

    /// Membership test against a fixed list. An empty list is forwarded as is.
    #[must_use]
    pub fn in_<I>(self, values: I) -> Filter<E>
    where
        I: IntoIterator,
        I::Item: Into<T>,
    {
        membership(self.key(), MembershipOp::In, operands::<T, _>(values))
    }

    /// Negated membership test. An empty list is forwarded as is.
    #[must_use]
    pub fn not_in<I>(self, values: I) -> Filter<E>
    where
        I: IntoIterator,
        I::Item: Into<T>,
    {
        membership(self.key(), MembershipOp::NotIn, operands::<T, _>(values))
    }
}

impl<E, T> Field<E, T>
where
    E: EntityKind,
    T: TextValue,
{
    /// Pattern match. `escape` must be the character `pattern` was escaped with.
    #[must_use]
    pub fn like(self, escape: char, pattern: EscapedLikeText) -> Filter<E> {
        pattern_filter(self.key(), PatternOp::Like, escape, pattern)
    }

    /// Negated pattern match.
    #[must_use]
    pub fn not_like(self, escape: char, pattern: EscapedLikeText) -> Filter<E> {
        pattern_filter(self.key(), PatternOp::NotLike, escape, pattern)
    }
}

// ----------------------------------------------------------------------
// Free-function combinators
// ----------------------------------------------------------------------

#[must_use]
pub fn eq<E: EntityKind, T: FieldValue>(field: Field<E, T>, value: impl Into<T>) -> Filter<E> {
    field.eq(value)
}

#[must_use]
pub fn ne<E: EntityKind, T: FieldValue>(field: Field<E, T>, value: impl Into<T>) -> Filter<E> {
    field.ne(value)
}

#[must_use]
pub fn lt<E: EntityKind, T: FieldValue>(field: Field<E, T>, value: impl Into<T>) -> Filter<E> {
    field.lt(value)
}

#[must_use]
pub fn le<E: EntityKind, T: FieldValue>(field: Field<E, T>, value: impl Into<T>) -> Filter<E> {
    field.le(value)
}

#[must_use]
pub fn gt<E: EntityKind, T: FieldValue>(field: Field<E, T>, value: impl Into<T>) -> Filter<E> {
    field.gt(value)
}

#[must_use]
pub fn ge<E: EntityKind, T: FieldValue>(field: Field<E, T>, value: impl Into<T>) -> Filter<E> {
    field.ge(value)
}

#[must_use]
pub fn in_<E, T, I>(field: Field<E, T>, values: I) -> Filter<E>
where
    E: EntityKind,
    T: FieldValue,
    I: IntoIterator,
    I::Item: Into<T>,
{
    field.in_(values)
}

#[must_use]
pub fn not_in<E, T, I>(field: Field<E, T>, values: I) -> Filter<E>
where
    E: EntityKind,
    T: FieldValue,
    I: IntoIterator,
    I::Item: Into<T>,
{
    field.not_in(values)
}

#[must_use]
pub fn like<E: EntityKind, T: TextValue>(
    escape: char,
    field: Field<E, T>,
    pattern: EscapedLikeText,
) -> Filter<E> {
    field.like(escape, pattern)
}

#[must_use]
pub fn not_like<E: EntityKind, T: TextValue>(
    escape: char,
    field: Field<E, T>,
    pattern: EscapedLikeText,
) -> Filter<E> {
    field.not_like(escape, pattern)
}

///
/// OR two filter lists.
///
/// Returns a single-element list holding one disjunction whose branches are
/// `left` and `right` verbatim, in that order. Concatenate the result with
/// other lists to AND it with further filters.
///
#[must_use]
pub fn or_<E>(left: Vec<Filter<E>>, right: Vec<Filter<E>>) -> Vec<Filter<E>> {
    vec![Filter::Or(Disjunction::new(
        Conjunction::new(left),
        Conjunction::new(right),
    ))]
}

// ----------------------------------------------------------------------
// Internal helpers (not public API)
// ----------------------------------------------------------------------

const fn compare<E>(field: FieldKey<E>, op: CompareOp, value: Value) -> Filter<E> {
    Filter::Field(FieldFilter {
        field,
        kind: FilterKind::Compare { op, value },
    })
}

// Convert an operand into the declared type before lowering it.
fn operand<T: FieldValue>(value: impl Into<T>) -> Value {
    let value: T = value.into();
    value.to_value()
}

fn operands<T, I>(values: I) -> Vec<Value>
where
    T: FieldValue,
    I: IntoIterator,
    I::Item: Into<T>,
{
    values.into_iter().map(operand::<T>).collect()
}

const fn membership<E>(field: FieldKey<E>, op: MembershipOp, values: Vec<Value>) -> Filter<E> {
    Filter::Field(FieldFilter {
        field,
        kind: FilterKind::Membership { op, values },
    })
}

const fn pattern_filter<E>(
    field: FieldKey<E>,
    op: PatternOp,
    escape: char,
    pattern: EscapedLikeText,
) -> Filter<E> {
    Filter::Field(FieldFilter {
        field,
        kind: FilterKind::Pattern {
            op,
            pattern,
            escape,
        },
    })
}
