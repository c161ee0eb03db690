use crate::error::{Fault, Table};
use crate::value::Value;

pub const STACK_MAX: usize = 256;

/// Operand stack for the VM.
///
/// Holds temporaries, call arguments and locals. The length is the stack
/// pointer; it never exceeds `STACK_MAX`.
pub struct Stack {
    data: Vec<Value>,
}

impl Stack {
    pub fn new() -> Self {
        Stack {
            data: Vec::with_capacity(STACK_MAX),
        }
    }

    /// Push a value onto the stack
    #[inline]
    pub fn push(&mut self, value: Value) -> Result<(), Fault> {
        if self.data.len() >= STACK_MAX {
            return Err(Fault::StackOverflow);
        }
        self.data.push(value);
        Ok(())
    }

    /// Pop a value from the stack and return it
    #[inline]
    pub fn pop(&mut self) -> Result<Value, Fault> {
        self.data.pop().ok_or(Fault::StackUnderflow)
    }

    /// Pop the top `count` values, returned in push order.
    pub fn pop_many(&mut self, count: usize) -> Result<Vec<Value>, Fault> {
        if count > self.data.len() {
            return Err(Fault::StackUnderflow);
        }
        let at = self.data.len() - count;
        Ok(self.data.split_off(at))
    }

    /// Peek at a value on the stack without removing it.
    /// Distance 0 = top of stack, 1 = second from top, etc.
    #[inline]
    pub fn peek(&self, distance: usize) -> Result<&Value, Fault> {
        self.data
            .len()
            .checked_sub(distance + 1)
            .map(|index| &self.data[index])
            .ok_or(Fault::StackUnderflow)
    }

    /// Get the current stack top index
    #[inline]
    pub fn top(&self) -> usize {
        self.data.len()
    }

    /// Drop everything above `top`. Fails if the stack is already shallower.
    pub fn set_top(&mut self, top: usize) -> Result<(), Fault> {
        if top > self.data.len() {
            return Err(Fault::StackUnderflow);
        }
        self.data.truncate(top);
        Ok(())
    }

    /// Get a reference to a live stack slot
    pub fn get(&self, index: usize) -> Result<&Value, Fault> {
        self.data.get(index).ok_or(Fault::IndexOutOfRange {
            table: Table::Stack,
            index,
            bound: self.data.len(),
        })
    }

    /// Overwrite a live stack slot
    pub fn set(&mut self, index: usize, value: Value) -> Result<(), Fault> {
        let bound = self.data.len();
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Fault::IndexOutOfRange {
                table: Table::Stack,
                index,
                bound,
            }),
        }
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.data
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}

// VM stack operation methods
use super::VM;
use std::io::Write;

impl<W: Write> VM<W> {
    /// Push a value onto the VM's operand stack.
    #[inline]
    pub(super) fn push(&mut self, value: Value) -> Result<(), Fault> {
        self.stack.push(value)
    }

    /// Pop a value from the VM's operand stack.
    #[inline]
    pub(super) fn pop(&mut self) -> Result<Value, Fault> {
        self.stack.pop()
    }

    /// Peek at a value on the stack without removing it.
    #[inline]
    pub(super) fn peek(&self, distance: usize) -> Result<&Value, Fault> {
        self.stack.peek(distance)
    }
}
