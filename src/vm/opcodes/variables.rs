//! Variable access operation handlers for the VM.
//!
//! - Globals: `GLOAD`, `GSTORE` index the 256-slot global table.
//! - Locals: `LOAD`, `STORE` address the operand stack relative to the
//!   innermost frame, at `base - argc + offset`. Offsets below `argc` name
//!   the arguments.

use crate::error::Fault;
use crate::value::Value;
use crate::vm::call_frame::CallFrame;
use crate::vm::stack_ops::Stack;
use crate::vm::tables::Globals;

/// Handler for LOAD - reads a frame-relative stack slot.
pub fn op_load(offset: u8, stack: &Stack, frames: &[CallFrame]) -> Result<Value, Fault> {
    let frame = frames.last().ok_or(Fault::NoActiveFrame)?;
    stack.get(frame.slot(offset as usize)).cloned()
}

/// Handler for STORE - overwrites a frame-relative stack slot.
pub fn op_store(
    offset: u8,
    value: Value,
    stack: &mut Stack,
    frames: &[CallFrame],
) -> Result<(), Fault> {
    let frame = frames.last().ok_or(Fault::NoActiveFrame)?;
    stack.set(frame.slot(offset as usize), value)
}

/// Handler for GLOAD - reads a global that has been stored.
pub fn op_gload(index: u8, globals: &Globals) -> Result<Value, Fault> {
    globals.load(index)
}

/// Handler for GSTORE - overwrites a global.
pub fn op_gstore(index: u8, value: Value, globals: &mut Globals) {
    globals.store(index, value);
}
