//! Text assembler producing a [`Chunk`].
//!
//! One instruction per line, `;` comments, `name:` label definitions. Jump
//! and call targets may be labels or absolute byte addresses. `const`
//! takes a literal and interns it into the constant pool.
//!
//! ```text
//!         const 10
//!         call double, 1
//!         print
//!         halt
//! double: load 0
//!         load 0
//!         iadd
//!         ret
//! ```

use crate::bytecode::{Chunk, OpCode};
use crate::token::Token;
use crate::value::Value;
use logos::Logos;
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AsmError {
    #[error("line {line}: unrecognized input `{text}`")]
    InvalidToken { line: usize, text: String },

    #[error("line {line}: unknown mnemonic `{name}`")]
    UnknownMnemonic { line: usize, name: String },

    #[error("line {line}: expected {expected}")]
    UnexpectedToken { line: usize, expected: &'static str },

    #[error("line {line}: `{mnemonic}` takes {expected} operand(s), found {found}")]
    OperandCount {
        line: usize,
        mnemonic: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: invalid operand for `{mnemonic}`")]
    InvalidOperand { line: usize, mnemonic: &'static str },

    #[error("line {line}: operand {value} out of range 0..={max}")]
    OperandOutOfRange { line: usize, value: i64, max: u16 },

    #[error("line {line}: undefined label `{name}`")]
    UndefinedLabel { line: usize, name: String },

    #[error("line {line}: duplicate label `{name}`")]
    DuplicateLabel { line: usize, name: String },

    #[error("line {line}: constant pool is full")]
    ConstantPoolFull { line: usize },
}

#[derive(Debug, Clone, PartialEq)]
enum Operand {
    Integer(i64),
    Boolean(bool),
    Label(String),
}

#[derive(Debug)]
struct Instruction {
    op: OpCode,
    operands: Vec<Operand>,
    line: usize,
}

/// Number of source operands an opcode takes. Only `call` takes two.
fn operand_count(op: OpCode) -> usize {
    match op {
        OpCode::OpCall => 2,
        op if op.operand_width() > 0 => 1,
        _ => 0,
    }
}

/// Assembles `source` into instruction bytes and a constant pool.
pub fn assemble(source: &str) -> Result<Chunk, AsmError> {
    let (instructions, labels) = parse(source)?;
    let mut chunk = Chunk::new();
    for instruction in &instructions {
        emit(&mut chunk, instruction, &labels)?;
    }
    debug!(
        bytes = chunk.code.len(),
        constants = chunk.constants.len(),
        labels = labels.len(),
        "assembled"
    );
    Ok(chunk)
}

/// First pass: tokenize, collect instructions and resolve label offsets.
fn parse(source: &str) -> Result<(Vec<Instruction>, HashMap<String, usize>), AsmError> {
    let mut instructions = Vec::new();
    let mut labels = HashMap::new();
    let mut offset = 0usize;
    let mut line = 1usize;
    let mut current: Option<Instruction> = None;

    for (token, span) in Token::lexer(source).spanned() {
        let token = token.map_err(|_| AsmError::InvalidToken {
            line,
            text: source[span].to_string(),
        })?;
        if token == Token::Newline {
            if let Some(instruction) = current.take() {
                offset += finish(&instruction)?;
                instructions.push(instruction);
            }
            line += 1;
            continue;
        }
        match current.as_mut() {
            Some(instruction) => push_operand(instruction, token)?,
            None => match token {
                Token::Label(name) => {
                    if labels.insert(name.clone(), offset).is_some() {
                        return Err(AsmError::DuplicateLabel { line, name });
                    }
                }
                Token::Identifier(name) => {
                    let op = OpCode::from_mnemonic(&name)
                        .ok_or(AsmError::UnknownMnemonic { line, name })?;
                    current = Some(Instruction {
                        op,
                        operands: Vec::new(),
                        line,
                    });
                }
                _ => {
                    return Err(AsmError::UnexpectedToken {
                        line,
                        expected: "a label or mnemonic",
                    })
                }
            },
        }
    }
    if let Some(instruction) = current.take() {
        finish(&instruction)?;
        instructions.push(instruction);
    }
    Ok((instructions, labels))
}

fn push_operand(instruction: &mut Instruction, token: Token) -> Result<(), AsmError> {
    let operand = match token {
        Token::Comma => return Ok(()),
        Token::Integer(n) => Operand::Integer(n),
        Token::True => Operand::Boolean(true),
        Token::False => Operand::Boolean(false),
        Token::Identifier(name) => Operand::Label(name),
        Token::Label(_) | Token::Newline => {
            return Err(AsmError::UnexpectedToken {
                line: instruction.line,
                expected: "an operand",
            })
        }
    };
    instruction.operands.push(operand);
    Ok(())
}

/// Checks the operand count and returns the encoded size of the instruction.
fn finish(instruction: &Instruction) -> Result<usize, AsmError> {
    let expected = operand_count(instruction.op);
    if instruction.operands.len() != expected {
        return Err(AsmError::OperandCount {
            line: instruction.line,
            mnemonic: instruction.op.mnemonic(),
            expected,
            found: instruction.operands.len(),
        });
    }
    Ok(1 + instruction.op.operand_width())
}

/// Second pass: encode one instruction.
fn emit(
    chunk: &mut Chunk,
    instruction: &Instruction,
    labels: &HashMap<String, usize>,
) -> Result<(), AsmError> {
    let Instruction { op, operands, line } = instruction;
    let (op, line) = (*op, *line);
    chunk.write_op(op);
    match op {
        OpCode::OpConst => {
            let value = match &operands[0] {
                Operand::Integer(n) => Value::Integer(*n),
                Operand::Boolean(b) => Value::Boolean(*b),
                Operand::Label(_) => {
                    return Err(AsmError::InvalidOperand {
                        line,
                        mnemonic: op.mnemonic(),
                    })
                }
            };
            let index = intern(chunk, value, line)?;
            chunk.write_byte(index);
        }
        OpCode::OpGLoad | OpCode::OpGStore | OpCode::OpLoad | OpCode::OpStore => {
            let byte = immediate(&operands[0], op, line, u8::MAX as u16)?;
            chunk.write_byte(byte as u8);
        }
        OpCode::OpArray | OpCode::OpArrId => {
            let value = immediate(&operands[0], op, line, u16::MAX)?;
            chunk.write_u16(value);
        }
        OpCode::OpJmp | OpCode::OpJf => {
            let address = address(&operands[0], op, labels, line)?;
            chunk.write_u16(address);
        }
        OpCode::OpCall => {
            let address = address(&operands[0], op, labels, line)?;
            let argc = immediate(&operands[1], op, line, u8::MAX as u16)?;
            chunk.write_u16(address);
            chunk.write_byte(argc as u8);
        }
        _ => {}
    }
    Ok(())
}

/// Reuses an existing pool slot holding `value`, or appends one.
fn intern(chunk: &mut Chunk, value: Value, line: usize) -> Result<u8, AsmError> {
    if let Some(index) = chunk.constants.iter().position(|existing| *existing == value) {
        return Ok(index as u8);
    }
    chunk
        .add_constant(value)
        .ok_or(AsmError::ConstantPoolFull { line })
}

fn in_range(value: i64, line: usize, max: u16) -> Result<u16, AsmError> {
    if (0..=max as i64).contains(&value) {
        Ok(value as u16)
    } else {
        Err(AsmError::OperandOutOfRange { line, value, max })
    }
}

fn immediate(operand: &Operand, op: OpCode, line: usize, max: u16) -> Result<u16, AsmError> {
    match operand {
        Operand::Integer(n) => in_range(*n, line, max),
        _ => Err(AsmError::InvalidOperand {
            line,
            mnemonic: op.mnemonic(),
        }),
    }
}

fn address(
    operand: &Operand,
    op: OpCode,
    labels: &HashMap<String, usize>,
    line: usize,
) -> Result<u16, AsmError> {
    match operand {
        Operand::Integer(n) => in_range(*n, line, u16::MAX),
        Operand::Label(name) => {
            let offset = labels.get(name).ok_or_else(|| AsmError::UndefinedLabel {
                line,
                name: name.clone(),
            })?;
            in_range(*offset as i64, line, u16::MAX)
        }
        Operand::Boolean(_) => Err(AsmError::InvalidOperand {
            line,
            mnemonic: op.mnemonic(),
        }),
    }
}
