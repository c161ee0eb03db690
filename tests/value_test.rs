use bytevm::value::{Value, ValueType};

#[test]
fn display_formats_integers_and_booleans() {
    assert_eq!(format!("{}", Value::Integer(42)), "42");
    assert_eq!(format!("{}", Value::Integer(-7)), "-7");
    assert_eq!(format!("{}", Value::Boolean(true)), "true");
    assert_eq!(format!("{}", Value::Boolean(false)), "false");
}

#[test]
fn display_formats_arrays_recursively() {
    let value = Value::Array(vec![
        Value::Integer(1),
        Value::Array(vec![Value::Boolean(true), Value::Integer(2)]),
        Value::Array(vec![]),
    ]);
    assert_eq!(format!("{}", value), "[1, [true, 2], []]");
}

#[test]
fn falsey_covers_zero_and_false_only() {
    assert!(Value::Integer(0).is_falsey());
    assert!(Value::Boolean(false).is_falsey());
    assert!(!Value::Integer(1).is_falsey());
    assert!(!Value::Integer(-1).is_falsey());
    assert!(!Value::Boolean(true).is_falsey());
}

#[test]
fn arrays_are_never_falsey() {
    assert!(!Value::Array(vec![]).is_falsey());
    assert!(!Value::Array(vec![Value::Integer(0)]).is_falsey());
}

#[test]
fn value_type_reports_variant() {
    assert_eq!(Value::Integer(3).value_type(), ValueType::Integer);
    assert_eq!(Value::Boolean(true).value_type(), ValueType::Boolean);
    assert_eq!(Value::Array(vec![]).value_type(), ValueType::Array);
    assert_eq!(ValueType::Array.to_string(), "array");
}

#[test]
fn equality_is_structural() {
    let a = Value::Array(vec![Value::Integer(1), Value::Boolean(false)]);
    let b = Value::from(vec![Value::from(1), Value::from(false)]);
    assert_eq!(a, b);
    assert_ne!(a, Value::Array(vec![Value::Integer(1)]));
}
