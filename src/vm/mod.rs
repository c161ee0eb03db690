//! The execution engine.
//!
//! A [`VM`] owns one program and drives a strictly sequential
//! fetch-decode-execute loop over it. Control returns to the caller on
//! `HALT`, when the instruction pointer runs past the last byte, or on the
//! first fault.

mod bytecode_reader;
mod call_frame;
mod function_calls;
mod opcode_dispatcher;
pub mod opcodes;
mod return_handler;
mod stack_ops;
mod tables;

use crate::bytecode::{Chunk, OpCode};
use crate::error::{Fault, RuntimeError};
use crate::value::Value;
use call_frame::CallFrame;
use stack_ops::Stack;
use std::io::{self, Write};
use tables::{ConstantPool, Globals};
use tracing::{debug, trace};

pub use call_frame::FrameInfo;
pub use stack_ops::STACK_MAX;
pub use tables::{CONSTANTS_MAX, GLOBALS_MAX};

/// Outcome of dispatching one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    Continue,
    Halt,
}

pub struct VM<W: Write = io::Stdout> {
    code: Vec<u8>,
    ip: usize,
    stack: Stack,
    globals: Globals,
    constants: ConstantPool,
    frames: Vec<CallFrame>,
    out: W,
}

impl VM<io::Stdout> {
    /// Creates a VM whose `PRINT` output goes to stdout.
    pub fn new(chunk: Chunk) -> Self {
        VM::with_output(chunk, io::stdout())
    }
}

impl<W: Write> VM<W> {
    /// Creates a VM whose `PRINT` output goes to `out`.
    pub fn with_output(chunk: Chunk, out: W) -> Self {
        let Chunk { code, constants } = chunk;
        VM {
            code,
            ip: 0,
            stack: Stack::new(),
            globals: Globals::new(),
            constants: ConstantPool::new(constants),
            frames: Vec::new(),
            out,
        }
    }

    /// Runs the program to completion.
    ///
    /// Returns `Ok(())` on `HALT` or when execution falls off the end of the
    /// code, and the first fault otherwise. The VM is left in the state it
    /// had when the run stopped.
    pub fn run(&mut self) -> Result<(), RuntimeError> {
        debug!(code_len = self.code.len(), ip = self.ip, "run started");
        while self.ip < self.code.len() {
            let start = self.ip;
            match self.step() {
                Ok(Step::Continue) => {}
                Ok(Step::Halt) => {
                    debug!(ip = start, depth = self.stack.top(), "halted");
                    return Ok(());
                }
                Err(fault) => {
                    debug!(ip = start, %fault, "run aborted");
                    return Err(RuntimeError::new(fault, start));
                }
            }
        }
        debug!(depth = self.stack.top(), "ran past end of code");
        Ok(())
    }

    fn step(&mut self) -> Result<Step, Fault> {
        let byte = self.read_byte()?;
        let instruction = OpCode::try_from(byte).map_err(Fault::UnknownOpcode)?;
        trace!(
            ip = self.ip - 1,
            op = instruction.mnemonic(),
            depth = self.stack.top(),
            "dispatch"
        );
        self.dispatch_opcode(instruction)
    }

    /// Offset of the next byte the loop will fetch.
    pub fn ip(&self) -> usize {
        self.ip
    }

    /// Live operand stack, bottom first.
    pub fn stack(&self) -> &[Value] {
        self.stack.as_slice()
    }

    /// Top of the operand stack, if any.
    pub fn peek_stack(&self) -> Option<&Value> {
        self.stack.as_slice().last()
    }

    /// Contents of a global slot, `None` if it was never stored.
    pub fn global(&self, index: u8) -> Option<&Value> {
        self.globals.get(index)
    }

    /// Number of calls that have not returned yet.
    pub fn frame_depth(&self) -> usize {
        self.frames.len()
    }

    /// The innermost active frame, if any.
    pub fn current_frame(&self) -> Option<FrameInfo> {
        self.frames.last().map(CallFrame::info)
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }
}
