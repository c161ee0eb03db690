//! I/O operation handlers for the VM.

use crate::error::Fault;
use crate::value::Value;
use std::io::Write;

/// Handler for PRINT - writes the rendered value and a newline to `out`.
///
/// The caller peeks the value; the stack is left untouched.
pub fn op_print<W: Write>(value: &Value, out: &mut W) -> Result<(), Fault> {
    writeln!(out, "{}", value).map_err(|err| Fault::Output(err.to_string()))
}
