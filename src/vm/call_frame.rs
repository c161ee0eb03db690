/// Bookkeeping for one active call.
///
/// `base` is the stack depth right after the caller staged its arguments,
/// so the arguments occupy `base - argc .. base` and locals are addressed
/// from `base - argc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallFrame {
    pub return_ip: usize,
    pub base: usize,
    pub argc: usize,
}

impl CallFrame {
    pub fn new(return_ip: usize, base: usize, argc: usize) -> Self {
        Self {
            return_ip,
            base,
            argc,
        }
    }

    /// Absolute stack index of the slot `offset` in this frame.
    pub fn slot(&self, offset: usize) -> usize {
        self.base - self.argc + offset
    }

    pub fn info(&self) -> FrameInfo {
        FrameInfo {
            return_ip: self.return_ip,
            base: self.base,
            argc: self.argc,
        }
    }
}

/// Read-only view of a call frame for hosts and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameInfo {
    pub return_ip: usize,
    pub base: usize,
    pub argc: usize,
}
