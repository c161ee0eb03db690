use crate::value::Value;
use crate::vm::CONSTANTS_MAX;

/// Represents the instructions that our Virtual Machine will execute.
///
/// Each opcode is one byte followed by a fixed number of immediate bytes
/// (see [`OpCode::operand_width`]). Two-byte immediates are big-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OpCode {
    /// Stops execution normally.
    OpHalt,
    /// Pushes the constant pool entry named by a 1-byte index.
    OpConst,
    /// Pops two integers, pushes their sum.
    OpIAdd,
    /// Pops two integers, pushes the first minus the second.
    OpISub,
    /// Pops two integers, pushes their product.
    OpIMul,
    /// Pops two integers, pushes the truncating quotient.
    OpIDiv,
    /// Pops two integers, pushes the remainder.
    OpIRem,
    /// Pops a 2-byte count of values and pushes them as one array.
    OpArray,
    /// Peeks the array on top and pushes the element at a 2-byte index.
    OpArrId,
    /// Pops two integers, pushes whether they are equal.
    OpEq,
    /// Pops two integers, pushes whether the first is less than the second.
    OpLt,
    /// Pops two integers, pushes whether the first is at most the second.
    OpLe,
    /// Jumps to a 2-byte address.
    OpJmp,
    /// Pops a value and jumps to a 2-byte address if it is falsey.
    OpJf,
    /// Pushes the global named by a 1-byte index.
    OpGLoad,
    /// Pops into the global named by a 1-byte index.
    OpGStore,
    /// Pushes the frame-relative stack slot named by a 1-byte offset.
    OpLoad,
    /// Pops into the frame-relative stack slot named by a 1-byte offset.
    OpStore,
    /// Calls the 2-byte address with a 1-byte argument count.
    OpCall,
    /// Returns the top of stack to the caller.
    OpRet,
    /// Renders the top of stack without popping it.
    OpPrint,
}

impl OpCode {
    /// Number of immediate bytes that follow the opcode byte.
    pub fn operand_width(self) -> usize {
        match self {
            OpCode::OpConst
            | OpCode::OpGLoad
            | OpCode::OpGStore
            | OpCode::OpLoad
            | OpCode::OpStore => 1,
            OpCode::OpArray | OpCode::OpArrId | OpCode::OpJmp | OpCode::OpJf => 2,
            OpCode::OpCall => 3,
            _ => 0,
        }
    }

    /// Lower-case assembler name.
    pub fn mnemonic(self) -> &'static str {
        match self {
            OpCode::OpHalt => "halt",
            OpCode::OpConst => "const",
            OpCode::OpIAdd => "iadd",
            OpCode::OpISub => "isub",
            OpCode::OpIMul => "imul",
            OpCode::OpIDiv => "idiv",
            OpCode::OpIRem => "irem",
            OpCode::OpArray => "array",
            OpCode::OpArrId => "arrid",
            OpCode::OpEq => "eq",
            OpCode::OpLt => "lt",
            OpCode::OpLe => "le",
            OpCode::OpJmp => "jmp",
            OpCode::OpJf => "jf",
            OpCode::OpGLoad => "gload",
            OpCode::OpGStore => "gstore",
            OpCode::OpLoad => "load",
            OpCode::OpStore => "store",
            OpCode::OpCall => "call",
            OpCode::OpRet => "ret",
            OpCode::OpPrint => "print",
        }
    }

    /// Looks up an opcode by its assembler name, ignoring case.
    pub fn from_mnemonic(name: &str) -> Option<OpCode> {
        let lower = name.to_ascii_lowercase();
        (0..=OpCode::OpPrint as u8)
            .filter_map(|byte| OpCode::try_from(byte).ok())
            .find(|op| op.mnemonic() == lower)
    }
}

impl TryFrom<u8> for OpCode {
    type Error = u8;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        let op = match byte {
            0 => OpCode::OpHalt,
            1 => OpCode::OpConst,
            2 => OpCode::OpIAdd,
            3 => OpCode::OpISub,
            4 => OpCode::OpIMul,
            5 => OpCode::OpIDiv,
            6 => OpCode::OpIRem,
            7 => OpCode::OpArray,
            8 => OpCode::OpArrId,
            9 => OpCode::OpEq,
            10 => OpCode::OpLt,
            11 => OpCode::OpLe,
            12 => OpCode::OpJmp,
            13 => OpCode::OpJf,
            14 => OpCode::OpGLoad,
            15 => OpCode::OpGStore,
            16 => OpCode::OpLoad,
            17 => OpCode::OpStore,
            18 => OpCode::OpCall,
            19 => OpCode::OpRet,
            20 => OpCode::OpPrint,
            _ => return Err(byte),
        };
        Ok(op)
    }
}

/// A program: the instruction bytes plus the constant pool they index.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    pub code: Vec<u8>,
    pub constants: Vec<Value>,
}

impl Chunk {
    pub fn new() -> Self {
        Chunk {
            code: Vec::new(),
            constants: Vec::new(),
        }
    }

    /// Builds a chunk from already-encoded bytes and a pre-populated pool.
    pub fn from_parts(code: Vec<u8>, constants: Vec<Value>) -> Self {
        Chunk { code, constants }
    }

    pub fn write_op(&mut self, op: OpCode) {
        self.code.push(op as u8);
    }

    pub fn write_byte(&mut self, byte: u8) {
        self.code.push(byte);
    }

    /// Appends a big-endian 2-byte immediate.
    pub fn write_u16(&mut self, value: u16) {
        self.code.extend_from_slice(&value.to_be_bytes());
    }

    /// Appends a constant and returns its pool index, or `None` once the pool
    /// holds `CONSTANTS_MAX` entries.
    pub fn add_constant(&mut self, value: Value) -> Option<u8> {
        if self.constants.len() >= CONSTANTS_MAX {
            return None;
        }
        self.constants.push(value);
        Some((self.constants.len() - 1) as u8)
    }
}

impl Default for Chunk {
    fn default() -> Self {
        Self::new()
    }
}
