use std::fmt;

/// The variant tag of a runtime [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// Signed machine integer.
    Integer,
    /// Boolean.
    Boolean,
    /// Ordered sequence of values.
    Array,
}

impl ValueType {
    /// Returns the lower-case name used in fault messages.
    pub fn name(&self) -> &'static str {
        match self {
            ValueType::Integer => "integer",
            ValueType::Boolean => "boolean",
            ValueType::Array => "array",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A runtime value on the operand stack, in the global table or in the
/// constant pool.
///
/// Values are immutable once built. An array owns its elements outright, so
/// the value graph is a tree and needs no collector: a value is dropped as
/// soon as it is popped or overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    Array(Vec<Value>),
}

impl Value {
    /// Reports the variant tag.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Integer(_) => ValueType::Integer,
            Value::Boolean(_) => ValueType::Boolean,
            Value::Array(_) => ValueType::Array,
        }
    }

    /// Whether `JF` treats this value as logical false.
    ///
    /// Zero and `false` are falsey. Arrays are always truthy, including the
    /// empty array.
    pub fn is_falsey(&self) -> bool {
        match self {
            Value::Integer(n) => *n == 0,
            Value::Boolean(b) => !*b,
            Value::Array(_) => false,
        }
    }

    /// Returns the integer payload, if this is an integer.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}
