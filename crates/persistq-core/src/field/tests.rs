use crate::{
    field::FieldKey,
    test_fixtures::{AGE, ID, NAME, PET_NAME, Person},
};
use std::collections::HashSet;

#[test]
fn handles_compare_by_name() {
    assert_eq!(AGE, AGE);
    assert_ne!(AGE.key(), ID.key());
    assert_eq!(AGE.as_str(), "age");
}

#[test]
fn key_erases_value_type_but_keeps_identity() {
    let keys: Vec<FieldKey<Person>> = vec![AGE.key(), NAME.key(), AGE.into()];

    assert_eq!(keys[0], keys[2]);
    assert_eq!(keys[1].as_str(), "name");

    let unique: HashSet<_> = keys.into_iter().collect();
    assert_eq!(unique.len(), 2);
}

#[test]
fn key_reports_owner_path() {
    assert_eq!(NAME.key().entity_path(), "test::Person");
    assert_eq!(PET_NAME.key().entity_path(), "test::Pet");
}

#[test]
fn debug_and_display_show_field_name() {
    assert_eq!(format!("{AGE:?}"), "Field(\"age\")");
    assert_eq!(AGE.key().to_string(), "age");
}
