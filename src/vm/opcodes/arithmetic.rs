use super::integer_operands;
use crate::error::Fault;
use crate::value::Value;

/// Handle IADD - Add two integers (wrapping on overflow)
pub fn op_iadd(a: Value, b: Value) -> Result<Value, Fault> {
    let (lhs, rhs) = integer_operands(&a, &b)?;
    Ok(Value::Integer(lhs.wrapping_add(rhs)))
}

/// Handle ISUB - Subtract the second integer from the first
pub fn op_isub(a: Value, b: Value) -> Result<Value, Fault> {
    let (lhs, rhs) = integer_operands(&a, &b)?;
    Ok(Value::Integer(lhs.wrapping_sub(rhs)))
}

/// Handle IMUL - Multiply two integers
pub fn op_imul(a: Value, b: Value) -> Result<Value, Fault> {
    let (lhs, rhs) = integer_operands(&a, &b)?;
    Ok(Value::Integer(lhs.wrapping_mul(rhs)))
}

/// Handle IDIV - Truncating integer division
pub fn op_idiv(a: Value, b: Value) -> Result<Value, Fault> {
    let (lhs, rhs) = integer_operands(&a, &b)?;
    if rhs == 0 {
        return Err(Fault::DivisionByZero);
    }
    Ok(Value::Integer(lhs.wrapping_div(rhs)))
}

/// Handle IREM - Remainder with the sign of the dividend
pub fn op_irem(a: Value, b: Value) -> Result<Value, Fault> {
    let (lhs, rhs) = integer_operands(&a, &b)?;
    if rhs == 0 {
        return Err(Fault::DivisionByZero);
    }
    Ok(Value::Integer(lhs.wrapping_rem(rhs)))
}
