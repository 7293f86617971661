use sprig_core::{PropType, PropValue, coerce_attr, to_attr_name, to_prop_name};
use sprig_tpl::shared;

#[test]
fn prop_name_to_attr_name() {
    assert_eq!(to_attr_name("count"), "count");
    assert_eq!(to_attr_name("maxValue"), "max-value");
    assert_eq!(to_attr_name("aVeryLongName"), "a-very-long-name");
}

#[test]
fn attr_name_to_prop_name() {
    assert_eq!(to_prop_name("count"), "count");
    assert_eq!(to_prop_name("max-value"), "maxValue");
    assert_eq!(to_prop_name("a-very-long-name"), "aVeryLongName");
}

#[test]
fn boolean_coercion() {
    assert_eq!(coerce_attr(PropType::Boolean, None), PropValue::Bool(false));
    assert_eq!(
        coerce_attr(PropType::Boolean, Some("")),
        PropValue::Bool(false)
    );
    assert_eq!(
        coerce_attr(PropType::Boolean, Some("false")),
        PropValue::Bool(false)
    );
    assert_eq!(
        coerce_attr(PropType::Boolean, Some("true")),
        PropValue::Bool(true)
    );
    assert_eq!(
        coerce_attr(PropType::Boolean, Some("anything")),
        PropValue::Bool(true)
    );
}

#[test]
fn number_coercion() {
    assert_eq!(
        coerce_attr(PropType::Number, Some("5")),
        PropValue::Number(5.0)
    );
    assert_eq!(
        coerce_attr(PropType::Number, Some("-2.5")),
        PropValue::Number(-2.5)
    );
}

#[test]
fn non_numeric_and_absent_coerce_to_nan() {
    for raw in [Some("abc"), Some(""), None] {
        match coerce_attr(PropType::Number, raw) {
            PropValue::Number(n) => assert!(n.is_nan()),
            other => panic!("expected number, got {other:?}"),
        }
    }
}

#[test]
fn text_coercion_is_identity() {
    assert_eq!(
        coerce_attr(PropType::Text, Some("hello")),
        PropValue::Text("hello".into())
    );
    assert_eq!(coerce_attr(PropType::Text, None), PropValue::Text("".into()));
}

#[test]
fn nan_values_never_compare_equal() {
    // keeps NaN-valued sets from short-circuiting as redundant
    assert_ne!(
        PropValue::Number(f64::NAN),
        PropValue::Number(f64::NAN)
    );
}

#[test]
fn shared_values_compare_by_identity() {
    let a = shared(vec![1, 2]);
    let b = shared(vec![1, 2]);
    assert_eq!(PropValue::Shared(a.clone()), PropValue::Shared(a.clone()));
    assert_ne!(PropValue::Shared(a), PropValue::Shared(b));
}

#[test]
fn truthiness() {
    assert!(PropValue::Bool(true).truthy());
    assert!(!PropValue::Bool(false).truthy());
    assert!(PropValue::Number(1.0).truthy());
    assert!(!PropValue::Number(0.0).truthy());
    assert!(!PropValue::Number(f64::NAN).truthy());
    assert!(PropValue::Text("x".into()).truthy());
    assert!(!PropValue::Text("".into()).truthy());
    assert!(PropValue::Shared(shared(0u8)).truthy());
}
