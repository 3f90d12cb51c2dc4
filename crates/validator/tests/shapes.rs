//! Object and array shape validators.

use pretty_assertions::assert_eq;
use rstest::rstest;
use sift_validator::prelude::*;

fn foo_bar(foo: impl Into<Value>, bar: impl Into<Value>) -> Object {
    Object::builder()
        .property("foo", foo)
        .property("bar", bar)
        .build()
}

// ============================================================================
// TUPLE
// ============================================================================

#[rstest]
#[case::exact(vec![Value::from("a"), Value::from(1)], true)]
#[case::empty(vec![], false)]
#[case::short(vec![Value::from("a")], false)]
#[case::swapped(vec![Value::from(1), Value::from("a")], false)]
#[case::long(vec![Value::from("a"), Value::from(1), Value::from(true)], false)]
fn tuple_of_string_and_number(#[case] items: Vec<Value>, #[case] ok: bool) {
    assert_eq!(is(&Value::array(items), &tuple((string(), number()))), ok);
}

#[test]
fn tuple_length_reason_differs_from_element_reason() {
    let pair = tuple((string(), number()));

    let short = pair.validate(&Value::array(["a"])).err();
    let swapped = pair
        .validate(&Value::array([Value::from(1), Value::from("a")]))
        .err();

    assert!(short.as_ref().is_some_and(ValidationError::is_leaf));
    assert_eq!(
        swapped.as_ref().and_then(ValidationError::message),
        Some("The element at index 0 is invalid.")
    );
}

// ============================================================================
// PROPS
// ============================================================================

#[test]
fn strict_props_without_extra_keys() {
    let shape = strict_props(
        Props::new()
            .field("foo", string())
            .field("bar", number())
            .deny_extra(),
    );

    assert!(shape.validate(&foo_bar("", 0)).is_ok());

    let extra = Object::builder()
        .property("foo", "")
        .property("bar", 0)
        .property("baz", 0)
        .build();
    assert_eq!(
        shape.validate(&extra),
        Err(ValidationError::new(
            "The object has unexpected properties: \"baz\"."
        ))
    );

    assert_eq!(
        shape.validate(&foo_bar(0, 0)),
        Err(ValidationError::wrapped(
            "The property \"foo\" is invalid.",
            "The value is not a string."
        ))
    );
}

#[test]
fn props_options_deserialize_from_config() {
    let options: PropsOptions = serde_json::from_value(serde_json::json!({
        "partial": true,
        "allowExtra": false
    }))
    .unwrap_or_default();

    let shape = strict_props(
        Props::new()
            .field("foo", string())
            .with_options(options),
    );

    assert!(shape.validate(&Object::new()).is_ok());
    assert!(
        shape
            .validate(&Object::builder().property("x", 1).build())
            .is_err()
    );
}

#[test]
fn props_reason_nests_through_levels() {
    let address = props(Props::new().field("city", string()));
    let user = props(
        Props::new()
            .field("name", string())
            .field("address", address),
    );

    let input = Value::from(serde_json::json!({
        "name": "ann",
        "address": { "city": 7 }
    }));

    assert_eq!(
        user.validate(&input).err().map(|r| r.tree().to_string()),
        Some(
            "The property \"address\" is invalid.\n  \
             The property \"city\" is invalid.\n    \
             The value is not a string."
                .to_owned()
        )
    );
}

#[test]
fn loose_props_inspect_primitives() {
    let sized = loose_props(Props::new().field("length", number()));

    assert!(is(&Value::from("hello"), &sized));
    assert!(!is(&Value::from(5), &sized));
    assert!(props(Props::new()).validate(&Value::from("hello")).is_err());
}

// ============================================================================
// PROP
// ============================================================================

#[rstest]
#[case::absent(Object::new(), true)]
#[case::present_valid(Object::builder().property("key", "v").build(), true)]
#[case::present_invalid(Object::builder().property("key", 1).build(), false)]
fn partial_prop(#[case] object: Object, #[case] ok: bool) {
    assert_eq!(is(&object, &strict_prop("key", string()).partial()), ok);
}

#[test]
fn prop_reads_slots_of_arrays_and_functions() {
    assert!(is(&Value::array([1, 2]), &prop("length", equal(2))));
    assert!(is(
        &Value::from(Function::new("run", 1)),
        &prop("name", equal("run"))
    ));
}

// ============================================================================
// ARRAY_OF / DICT
// ============================================================================

#[test]
fn array_of_strings() {
    let names = array_of(string());

    assert!(is(&Value::array(Vec::<Value>::new()), &names));
    assert!(is(&Value::array(["a", "b"]), &names));
    assert_eq!(
        names.validate(&Value::array([Value::from("a"), Value::from(1)])),
        Err(ValidationError::wrapped(
            "The element at index 1 is invalid.",
            "The value is not a string."
        ))
    );
}

#[test]
fn dict_of_counters() {
    let counters = dict(string(), number());
    let input = Value::from(serde_json::json!({ "a": 1, "b": 2 }));
    let bad = Value::from(serde_json::json!({ "a": 1, "b": [] }));

    assert!(is(&input, &counters));
    assert_eq!(
        counters.validate(&bad).err().and_then(|r| r.message().map(str::to_owned)),
        Some("The property \"b\" is invalid.".to_owned())
    );
}

#[test]
fn key_of_pairs_with_dict() {
    let allowed = Object::builder()
        .property("read", true)
        .property("write", true)
        .build();
    let grants = dict(key_of(&allowed), boolean());

    assert!(is(
        &Value::from(serde_json::json!({ "read": false })),
        &grants
    ));
    assert_eq!(
        grants
            .validate(&Value::from(serde_json::json!({ "exec": true })))
            .err()
            .map(|r| r.leaf_messages().join("")),
        Some("The key \"exec\" is not a property of the object.".to_owned())
    );
}
