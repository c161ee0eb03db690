//! Fixed-capacity tables addressed by single-byte immediates.

use crate::error::{Fault, Table};
use crate::value::Value;
use tracing::warn;

pub const CONSTANTS_MAX: usize = 256;
pub const GLOBALS_MAX: usize = 256;

/// Constant pool (read-only once the VM is built)
#[derive(Debug)]
pub struct ConstantPool {
    values: Vec<Value>,
}

impl ConstantPool {
    pub fn new(mut values: Vec<Value>) -> Self {
        if values.len() > CONSTANTS_MAX {
            warn!(
                supplied = values.len(),
                "constant pool truncated to {} entries", CONSTANTS_MAX
            );
            values.truncate(CONSTANTS_MAX);
        }
        ConstantPool { values }
    }

    pub fn get(&self, index: u8) -> Result<&Value, Fault> {
        self.values
            .get(index as usize)
            .ok_or(Fault::IndexOutOfRange {
                table: Table::Constants,
                index: index as usize,
                bound: self.values.len(),
            })
    }
}

/// Global variable storage. Slots start out empty.
#[derive(Debug)]
pub struct Globals {
    values: Vec<Option<Value>>,
}

impl Globals {
    pub fn new() -> Self {
        Globals {
            values: vec![None; GLOBALS_MAX],
        }
    }

    pub fn get(&self, index: u8) -> Option<&Value> {
        self.values[index as usize].as_ref()
    }

    /// Value of a slot as seen by `GLOAD`. A slot nothing has stored into is
    /// outside the populated part of the table.
    pub fn load(&self, index: u8) -> Result<Value, Fault> {
        self.get(index).cloned().ok_or(Fault::IndexOutOfRange {
            table: Table::Globals,
            index: index as usize,
            bound: GLOBALS_MAX,
        })
    }

    pub fn store(&mut self, index: u8, value: Value) {
        self.values[index as usize] = Some(value);
    }
}

impl Default for Globals {
    fn default() -> Self {
        Self::new()
    }
}
