use crate::error::{Fault, Table};
use crate::value::{Value, ValueType};

/// Handle ARRID - Read one element of an array without consuming it
pub fn op_array_index(array: &Value, index: usize) -> Result<Value, Fault> {
    match array {
        Value::Array(items) => items.get(index).cloned().ok_or(Fault::IndexOutOfRange {
            table: Table::Array,
            index,
            bound: items.len(),
        }),
        other => Err(Fault::TypeMismatch {
            expected: ValueType::Array,
            actual: other.value_type(),
        }),
    }
}
