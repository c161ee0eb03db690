//! Opcode handler modules
//!
//! This module organizes opcode implementations into logical categories.
//! Control flow (`JMP`, `JF`) and calls (`CALL`, `RET`) move the instruction
//! pointer and stay on the VM itself.

pub mod arithmetic;
pub mod collections;
pub mod comparison;
pub mod io;
pub mod variables;

use crate::error::Fault;
use crate::value::{Value, ValueType};

/// Unwraps both operands as integers, reporting the first one that is not.
pub(crate) fn integer_operands(a: &Value, b: &Value) -> Result<(i64, i64), Fault> {
    match (a, b) {
        (Value::Integer(lhs), Value::Integer(rhs)) => Ok((*lhs, *rhs)),
        (Value::Integer(_), other) | (other, _) => Err(Fault::TypeMismatch {
            expected: ValueType::Integer,
            actual: other.value_type(),
        }),
    }
}
