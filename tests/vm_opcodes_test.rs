use bytevm::error::{Fault, Table};
use bytevm::value::{Value, ValueType};
use bytevm::vm::opcodes::arithmetic::{op_iadd, op_idiv, op_imul, op_irem, op_isub};
use bytevm::vm::opcodes::collections::op_array_index;
use bytevm::vm::opcodes::comparison::{op_eq, op_le, op_lt};
use bytevm::vm::opcodes::io::op_print;
use std::io::{self, Write};

// ============================================================================
// Arithmetic Operations Tests
// ============================================================================

#[test]
fn test_op_iadd_adds_integers() {
    assert_eq!(
        op_iadd(Value::Integer(2), Value::Integer(40)),
        Ok(Value::Integer(42))
    );
}

#[test]
fn test_op_isub_subtracts_second_from_first() {
    assert_eq!(
        op_isub(Value::Integer(2), Value::Integer(40)),
        Ok(Value::Integer(-38))
    );
}

#[test]
fn test_op_imul_multiplies() {
    assert_eq!(
        op_imul(Value::Integer(-6), Value::Integer(7)),
        Ok(Value::Integer(-42))
    );
}

#[test]
fn test_op_idiv_truncates() {
    assert_eq!(
        op_idiv(Value::Integer(9), Value::Integer(4)),
        Ok(Value::Integer(2))
    );
    assert_eq!(
        op_idiv(Value::Integer(-9), Value::Integer(4)),
        Ok(Value::Integer(-2))
    );
}

#[test]
fn test_op_idiv_errors_on_zero_divisor() {
    assert_eq!(
        op_idiv(Value::Integer(9), Value::Integer(0)),
        Err(Fault::DivisionByZero)
    );
}

#[test]
fn test_op_irem_keeps_dividend_sign() {
    assert_eq!(
        op_irem(Value::Integer(-9), Value::Integer(4)),
        Ok(Value::Integer(-1))
    );
    assert_eq!(
        op_irem(Value::Integer(9), Value::Integer(0)),
        Err(Fault::DivisionByZero)
    );
}

#[test]
fn test_arithmetic_reports_left_operand_type_first() {
    let result = op_iadd(Value::Array(vec![]), Value::Boolean(true));
    assert_eq!(
        result,
        Err(Fault::TypeMismatch {
            expected: ValueType::Integer,
            actual: ValueType::Array,
        })
    );
}

#[test]
fn test_type_check_precedes_zero_check() {
    let result = op_idiv(Value::Boolean(true), Value::Integer(0));
    assert_eq!(
        result,
        Err(Fault::TypeMismatch {
            expected: ValueType::Integer,
            actual: ValueType::Boolean,
        })
    );
}

// ============================================================================
// Comparison Operations Tests
// ============================================================================

#[test]
fn test_op_lt_is_order_sensitive() {
    assert_eq!(op_lt(&Value::Integer(1), &Value::Integer(2)), Ok(true));
    assert_eq!(op_lt(&Value::Integer(2), &Value::Integer(1)), Ok(false));
    assert_eq!(op_lt(&Value::Integer(2), &Value::Integer(2)), Ok(false));
}

#[test]
fn test_op_le_includes_equality() {
    assert_eq!(op_le(&Value::Integer(2), &Value::Integer(2)), Ok(true));
    assert_eq!(op_le(&Value::Integer(3), &Value::Integer(2)), Ok(false));
}

#[test]
fn test_op_eq_compares_integers() {
    assert_eq!(op_eq(&Value::Integer(7), &Value::Integer(7)), Ok(true));
    assert_eq!(op_eq(&Value::Integer(7), &Value::Integer(8)), Ok(false));
}

#[test]
fn test_op_eq_rejects_arrays_even_when_equal() {
    let array = Value::Array(vec![Value::Integer(1)]);
    assert_eq!(
        op_eq(&array, &array),
        Err(Fault::TypeMismatch {
            expected: ValueType::Integer,
            actual: ValueType::Array,
        })
    );
}

#[test]
fn test_op_lt_reports_right_operand_type() {
    assert_eq!(
        op_lt(&Value::Integer(1), &Value::Boolean(false)),
        Err(Fault::TypeMismatch {
            expected: ValueType::Integer,
            actual: ValueType::Boolean,
        })
    );
}

// ============================================================================
// Collection Operations Tests
// ============================================================================

#[test]
fn test_op_array_index_returns_element_copy() {
    let array = Value::Array(vec![Value::Integer(1), Value::Boolean(true)]);
    assert_eq!(op_array_index(&array, 1), Ok(Value::Boolean(true)));
    assert_eq!(
        array,
        Value::Array(vec![Value::Integer(1), Value::Boolean(true)])
    );
}

#[test]
fn test_op_array_index_out_of_range() {
    let array = Value::Array(vec![Value::Integer(1)]);
    assert_eq!(
        op_array_index(&array, 1),
        Err(Fault::IndexOutOfRange {
            table: Table::Array,
            index: 1,
            bound: 1,
        })
    );
}

#[test]
fn test_op_array_index_rejects_non_arrays() {
    assert_eq!(
        op_array_index(&Value::Boolean(false), 0),
        Err(Fault::TypeMismatch {
            expected: ValueType::Array,
            actual: ValueType::Boolean,
        })
    );
}

// ============================================================================
// I/O Operations Tests
// ============================================================================

#[test]
fn test_op_print_writes_rendered_value_and_newline() {
    let mut out = Vec::new();
    op_print(&Value::Array(vec![Value::Integer(1), Value::Boolean(false)]), &mut out).unwrap();
    op_print(&Value::Integer(-5), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "[1, false]\n-5\n");
}

struct BrokenSink;

impl Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_op_print_surfaces_sink_failure() {
    let result = op_print(&Value::Integer(1), &mut BrokenSink);
    assert_eq!(result, Err(Fault::Output("sink closed".to_string())));
}
