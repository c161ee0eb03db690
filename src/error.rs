//! Fault taxonomy for the execution engine.
//!
//! Every fault aborts the run. Opcode handlers return a bare [`Fault`]; the
//! run loop attaches the offset of the faulting opcode and hands the caller a
//! [`RuntimeError`].

use crate::value::ValueType;
use std::fmt;
use thiserror::Error;

/// Names the indexed store an out-of-range access was aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Constants,
    Globals,
    Array,
    Stack,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Table::Constants => "constant pool",
            Table::Globals => "global table",
            Table::Array => "array",
            Table::Stack => "stack slot",
        };
        write!(f, "{}", name)
    }
}

/// A fault detected while executing one instruction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Fault {
    /// A push found the operand stack at capacity.
    #[error("stack overflow")]
    StackOverflow,

    /// A pop, peek or frame restore needed more values than the stack holds.
    #[error("stack underflow")]
    StackUnderflow,

    /// The byte at the instruction pointer is not an opcode.
    #[error("unknown opcode {0}")]
    UnknownOpcode(u8),

    /// An operand had the wrong variant.
    #[error("type mismatch: expected {expected}, found {actual}")]
    TypeMismatch {
        expected: ValueType,
        actual: ValueType,
    },

    /// An index fell outside the populated part of a table.
    #[error("{table} index {index} out of range (bound {bound})")]
    IndexOutOfRange {
        table: Table,
        index: usize,
        bound: usize,
    },

    /// `IDIV` or `IREM` with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// `LOAD`, `STORE` or `RET` outside any call.
    #[error("no active call frame")]
    NoActiveFrame,

    /// An opcode's immediate bytes run past the end of the buffer.
    #[error("truncated instruction")]
    TruncatedInstruction,

    /// The `PRINT` sink rejected the rendered value.
    #[error("output failed: {0}")]
    Output(String),
}

/// The fault that ended a run, with the byte offset of the opcode that raised it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{fault} at ip {ip}")]
pub struct RuntimeError {
    pub fault: Fault,
    pub ip: usize,
}

impl RuntimeError {
    pub fn new(fault: Fault, ip: usize) -> Self {
        RuntimeError { fault, ip }
    }
}
