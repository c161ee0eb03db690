use super::integer_operands;
use crate::error::Fault;
use crate::value::Value;

/// Handle EQ - Integer equality
pub fn op_eq(a: &Value, b: &Value) -> Result<bool, Fault> {
    let (lhs, rhs) = integer_operands(a, b)?;
    Ok(lhs == rhs)
}

/// Handle LT - `a < b`, with `a` pushed first
pub fn op_lt(a: &Value, b: &Value) -> Result<bool, Fault> {
    let (lhs, rhs) = integer_operands(a, b)?;
    Ok(lhs < rhs)
}

/// Handle LE - `a <= b`, with `a` pushed first
pub fn op_le(a: &Value, b: &Value) -> Result<bool, Fault> {
    let (lhs, rhs) = integer_operands(a, b)?;
    Ok(lhs <= rhs)
}
