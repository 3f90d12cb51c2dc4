//! Property-based tests for sift-validator.

use proptest::collection;
use proptest::prelude::*;
use sift_validator::prelude::*;

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Undefined),
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<f64>().prop_map(Value::from),
        any::<i64>().prop_map(|n| Value::from(i128::from(n))),
        ".{0,8}".prop_map(Value::from),
    ]
}

fn value() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            collection::vec(inner.clone(), 0..4).prop_map(Value::array),
            collection::btree_map("[a-c]", inner, 0..4).prop_map(|map| {
                let object = map
                    .into_iter()
                    .fold(Object::builder(), |builder, (key, value)| {
                        builder.property(key, value)
                    })
                    .build();
                Value::from(object)
            }),
        ]
    })
}

// ============================================================================
// DETERMINISM: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn shape_validation_is_deterministic(v in value()) {
        let shape = or((
            array_of(or((number(), string()))),
            props(Props::new().optional_field("a", number()).deny_extra()),
        ));
        prop_assert_eq!(shape.validate(&v), shape.validate(&v));
    }

    #[test]
    fn value_is_equal_to_itself(v in value()) {
        prop_assert!(unknown().validate(&v).is_ok());
        // NaN is the one value that is not strictly equal to itself
        prop_assert_eq!(is(&v, &equal(v.clone())), !matches!(v, Value::Number(n) if n.is_nan()));
    }
}

// ============================================================================
// COMBINATOR LAWS
// ============================================================================

proptest! {
    #[test]
    fn or_succeeds_iff_either_succeeds(v in value()) {
        let a_ok = is(&v, &string());
        let b_ok = is(&v, &array());

        prop_assert_eq!(is(&v, &or((string(), array()))), a_ok || b_ok);
        prop_assert_eq!(is(&v, &or((array(), string()))), a_ok || b_ok);
    }

    #[test]
    fn and_succeeds_iff_both_succeed(v in value()) {
        let a_ok = is(&v, &object());
        let b_ok = is(&v, &loose_prop("length", number()));

        prop_assert_eq!(is(&v, &and((object(), loose_prop("length", number())))), a_ok && b_ok);
        prop_assert_eq!(is(&v, &and((loose_prop("length", number()), object()))), a_ok && b_ok);
    }

    #[test]
    fn not_is_complementary(v in value()) {
        prop_assert_eq!(is(&v, &not::<Value, _>(nullish())), !is(&v, &nullish()));
        prop_assert_eq!(is(&v, &number().not::<Value>()), !is(&v, &number()));
    }

    #[test]
    fn wrap_error_keeps_outcome(v in value()) {
        let plain = array_of(number());
        let wrapped = array_of(number()).wrap_error("The list is invalid.");

        match (plain.validate(&v), wrapped.validate(&v)) {
            (Ok(_), Ok(_)) => {}
            (Err(inner), Err(outer)) => {
                prop_assert_eq!(outer.cause(), Some(&inner));
                prop_assert_eq!(outer.total_error_count(), inner.total_error_count() + 1);
            }
            _ => prop_assert!(false, "outcomes differ"),
        }
    }

    #[test]
    fn or_reason_lists_every_branch(v in scalar()) {
        let none = or((symbol(), function(), array()));
        let reason = none.validate(&v);

        prop_assert!(reason.is_err());
        prop_assert_eq!(reason.map_err(|r| r.causes().len()), Err(3));
    }
}
