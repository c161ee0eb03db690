//! Opcode dispatching for the VM.
//!
//! This module implements the main opcode dispatch logic that executes
//! individual bytecode instructions.

use super::{Step, VM};
use crate::bytecode::OpCode;
use crate::error::Fault;
use crate::value::Value;
use crate::vm::opcodes;
use std::io::Write;

impl<W: Write> VM<W> {
    /// Dispatch and execute a single opcode instruction.
    pub(super) fn dispatch_opcode(&mut self, instruction: OpCode) -> Result<Step, Fault> {
        match instruction {
            OpCode::OpHalt => return Ok(Step::Halt),
            OpCode::OpConst => {
                let index = self.read_byte()?;
                let constant = self.constants.get(index)?.clone();
                self.push(constant)?;
            }
            OpCode::OpIAdd
            | OpCode::OpISub
            | OpCode::OpIMul
            | OpCode::OpIDiv
            | OpCode::OpIRem => {
                let b = self.pop()?;
                let a = self.pop()?;
                let result = match instruction {
                    OpCode::OpIAdd => opcodes::arithmetic::op_iadd(a, b)?,
                    OpCode::OpISub => opcodes::arithmetic::op_isub(a, b)?,
                    OpCode::OpIMul => opcodes::arithmetic::op_imul(a, b)?,
                    OpCode::OpIDiv => opcodes::arithmetic::op_idiv(a, b)?,
                    _ => opcodes::arithmetic::op_irem(a, b)?,
                };
                self.push(result)?;
            }
            OpCode::OpEq | OpCode::OpLt | OpCode::OpLe => {
                let b = self.pop()?;
                let a = self.pop()?;
                let result = match instruction {
                    OpCode::OpEq => opcodes::comparison::op_eq(&a, &b)?,
                    OpCode::OpLt => opcodes::comparison::op_lt(&a, &b)?,
                    _ => opcodes::comparison::op_le(&a, &b)?,
                };
                self.push(Value::Boolean(result))?;
            }
            OpCode::OpArray => {
                let count = self.read_u16()? as usize;
                let elements = self.stack.pop_many(count)?;
                self.push(Value::Array(elements))?;
            }
            OpCode::OpArrId => {
                let index = self.read_u16()? as usize;
                let element = opcodes::collections::op_array_index(self.peek(0)?, index)?;
                self.push(element)?;
            }
            OpCode::OpJmp => {
                let address = self.read_u16()? as usize;
                self.ip = address;
            }
            OpCode::OpJf => {
                let address = self.read_u16()? as usize;
                let condition = self.pop()?;
                if condition.is_falsey() {
                    self.ip = address;
                }
            }
            OpCode::OpGLoad => {
                let index = self.read_byte()?;
                let value = opcodes::variables::op_gload(index, &self.globals)?;
                self.push(value)?;
            }
            OpCode::OpGStore => {
                let index = self.read_byte()?;
                let value = self.pop()?;
                opcodes::variables::op_gstore(index, value, &mut self.globals);
            }
            OpCode::OpLoad => {
                let offset = self.read_byte()?;
                let value = opcodes::variables::op_load(offset, &self.stack, &self.frames)?;
                self.push(value)?;
            }
            OpCode::OpStore => {
                let offset = self.read_byte()?;
                if self.frames.is_empty() {
                    return Err(Fault::NoActiveFrame);
                }
                let value = self.pop()?;
                opcodes::variables::op_store(offset, value, &mut self.stack, &self.frames)?;
            }
            OpCode::OpCall => {
                let address = self.read_u16()? as usize;
                let argc = self.read_byte()? as usize;
                self.call(address, argc)?;
            }
            OpCode::OpRet => self.handle_return()?,
            OpCode::OpPrint => {
                let value = self.stack.peek(0)?;
                opcodes::io::op_print(value, &mut self.out)?;
            }
        }
        Ok(Step::Continue)
    }
}
