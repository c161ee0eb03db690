//! Bytecode reading utilities for the VM.
//!
//! This module provides helper methods for reading opcodes and immediate
//! operands from the instruction buffer.

use super::VM;
use crate::error::Fault;
use std::io::Write;

impl<W: Write> VM<W> {
    /// Read a single byte at the instruction pointer and advance it.
    pub(super) fn read_byte(&mut self) -> Result<u8, Fault> {
        let byte = *self
            .code
            .get(self.ip)
            .ok_or(Fault::TruncatedInstruction)?;
        self.ip += 1;
        Ok(byte)
    }

    /// Read a 16-bit unsigned integer (big-endian) from the instruction stream.
    pub(super) fn read_u16(&mut self) -> Result<u16, Fault> {
        let high = self.read_byte()? as u16;
        let low = self.read_byte()? as u16;
        Ok((high << 8) | low)
    }
}
