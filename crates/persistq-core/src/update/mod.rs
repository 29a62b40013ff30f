//! Module: update
//! Responsibility: typed construction of field mutations.
//! Does not own: arithmetic semantics; this layer records intent only.


use crate::{
    field::{Field, FieldKey},
    traits::{EntityKind, FieldValue},
    value::Value,
};
use std::fmt;

///
/// UpdateKind
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum UpdateKind {
    Assign = 0x01,
    Add = 0x02,
    Subtract = 0x03,
    Multiply = 0x04,
    Divide = 0x05,
}

impl UpdateKind {
    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// True for kinds that combine with the stored value.
    #[must_use]
    pub const fn is_arithmetic(self) -> bool {
        !matches!(self, Self::Assign)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Assign => "assign",
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }
}

impl fmt::Display for UpdateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// Update
///
/// One mutation of one field: `field <kind> value`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Update<E> {
    pub field: FieldKey<E>,
    pub kind: UpdateKind,
    pub value: Value,
}

impl<E, T> Field<E, T>
where
    E: EntityKind,
    T: FieldValue,
{
    /// Replace the stored value.
    #[must_use]
    pub fn assign(self, value: impl Into<T>) -> Update<E> {
        update(self, UpdateKind::Assign, value)
    }

    /// Add to the stored value.
    #[must_use]
    pub fn add(self, value: impl Into<T>) -> Update<E> {
        update(self, UpdateKind::Add, value)
    }

    /// Subtract from the stored value.
    #[must_use]
    pub fn subtract(self, value: impl Into<T>) -> Update<E> {
        update(self, UpdateKind::Subtract, value)
    }

    /// Multiply the stored value.
    #[must_use]
    pub fn multiply(self, value: impl Into<T>) -> Update<E> {
        update(self, UpdateKind::Multiply, value)
    }

    /// Divide the stored value.
    #[must_use]
    pub fn divide(self, value: impl Into<T>) -> Update<E> {
        update(self, UpdateKind::Divide, value)
    }
}

#[must_use]
pub fn assign<E: EntityKind, T: FieldValue>(field: Field<E, T>, value: impl Into<T>) -> Update<E> {
    field.assign(value)
}

#[must_use]
pub fn add<E: EntityKind, T: FieldValue>(field: Field<E, T>, value: impl Into<T>) -> Update<E> {
    field.add(value)
}

#[must_use]
pub fn subtract<E: EntityKind, T: FieldValue>(
    field: Field<E, T>,
    value: impl Into<T>,
) -> Update<E> {
    field.subtract(value)
}

#[must_use]
pub fn multiply<E: EntityKind, T: FieldValue>(
    field: Field<E, T>,
    value: impl Into<T>,
) -> Update<E> {
    field.multiply(value)
}

#[must_use]
pub fn divide<E: EntityKind, T: FieldValue>(field: Field<E, T>, value: impl Into<T>) -> Update<E> {
    field.divide(value)
}

fn update<E, T>(field: Field<E, T>, kind: UpdateKind, value: impl Into<T>) -> Update<E>
where
    E: EntityKind,
    T: FieldValue,
{
    let value: T = value.into();

    Update {
        field: field.key(),
        kind,
        value: value.to_value(),
    }
}
