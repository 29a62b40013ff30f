//! Module: field
//! Responsibility: typed and type-erased field handles.
//! Does not own: schema derivation or field storage layout.
//! Boundary: handles are produced by the schema layer and consumed by the
//! filter, update, and select builders.

#[cfg(test)]
mod tests;

use crate::traits::{EntityKind, FieldValue};
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
};

///
/// Field
///
/// Zero-cost typed handle for one attribute of one record kind.
/// `E` is the owning record kind and `T` the declared value type; both are
/// phantom, so the handle carries only a `&'static str`.
///
/// Handles compare by identity (field name within the owner type).
///

pub struct Field<E, T> {
    name: &'static str,
    _marker: PhantomData<fn() -> (E, T)>,
}

impl<E, T> Field<E, T>
where
    E: EntityKind,
    T: FieldValue,
{
    /// Create a new field handle.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    /// Erase the declared value type, keeping owner and identity.
    #[must_use]
    pub const fn key(self) -> FieldKey<E> {
        FieldKey::new(self.name)
    }
}

impl<E, T> Field<E, T> {
    /// Return the underlying field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.name
    }
}

///
/// FieldKey
///
/// Field identity with the declared value type erased.
/// Filters, updates, and order clauses store this so that expressions over
/// differently typed fields of one record kind share a single list type.
///

pub struct FieldKey<E> {
    name: &'static str,
    _marker: PhantomData<fn() -> E>,
}

impl<E> FieldKey<E> {
    #[must_use]
    pub(crate) const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.name
    }
}

impl<E: EntityKind> FieldKey<E> {
    /// Owner path of this field, as declared by the schema layer.
    #[must_use]
    pub const fn entity_path(self) -> &'static str {
        E::PATH
    }
}

// ----------------------------------------------------------------------
// Boundary traits
// ----------------------------------------------------------------------
// Implemented by hand: deriving would put bounds on the phantom params.

impl<E, T> Clone for Field<E, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E, T> Copy for Field<E, T> {}

impl<E, T> PartialEq for Field<E, T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<E, T> Eq for Field<E, T> {}

impl<E, T> Hash for Field<E, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl<E, T> fmt::Debug for Field<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Field").field(&self.name).finish()
    }
}

impl<E, T> AsRef<str> for Field<E, T> {
    fn as_ref(&self) -> &str {
        self.name
    }
}

impl<E, T> From<Field<E, T>> for FieldKey<E> {
    fn from(field: Field<E, T>) -> Self {
        Self::new(field.name)
    }
}

impl<E> Clone for FieldKey<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for FieldKey<E> {}

impl<E> PartialEq for FieldKey<E> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<E> Eq for FieldKey<E> {}

impl<E> PartialOrd for FieldKey<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for FieldKey<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(other.name)
    }
}

impl<E> Hash for FieldKey<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl<E> fmt::Debug for FieldKey<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FieldKey").field(&self.name).finish()
    }
}

impl<E> fmt::Display for FieldKey<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl<E> AsRef<str> for FieldKey<E> {
    fn as_ref(&self) -> &str {
        self.name
    }
}
