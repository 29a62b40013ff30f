use crate::{field::Field, traits::EntityKind, value::Float64};

///
/// Person
///
/// Record kind shared by unit tests across modules.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Person;

impl EntityKind for Person {
    const PATH: &'static str = "test::Person";
}

pub(crate) const ID: Field<Person, i64> = Field::new("id");
pub(crate) const AGE: Field<Person, i64> = Field::new("age");
pub(crate) const NAME: Field<Person, String> = Field::new("name");
pub(crate) const NICK: Field<Person, Option<String>> = Field::new("nick");
pub(crate) const SCORE: Field<Person, Float64> = Field::new("score");

///
/// Pet
///
/// Second record kind, used to check owner separation.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Pet;

impl EntityKind for Pet {
    const PATH: &'static str = "test::Pet";
}

pub(crate) const PET_NAME: Field<Pet, String> = Field::new("name");

/// Finite float for test operands.
pub(crate) fn float(value: f64) -> Float64 {
    Float64::try_new(value).expect("test floats are finite")
}
