//! A stack-based bytecode virtual machine.
//!
//! Programs are a byte buffer of instructions plus a constant pool
//! ([`bytecode::Chunk`]), built by hand or by the [`assembler`]. A
//! [`vm::VM`] runs one program to completion over a 256-slot operand stack,
//! a 256-slot global table and a chain of call frames.

pub mod assembler;
pub mod bytecode;
pub mod cli;
pub mod error;
pub mod token;
pub mod value;
pub mod vm;

pub use bytecode::{Chunk, OpCode};
pub use error::{Fault, RuntimeError};
pub use value::{Value, ValueType};
pub use vm::VM;
