use crate::error::Fault;
use crate::vm::call_frame::CallFrame;
use crate::vm::VM;
use std::io::Write;
use tracing::debug;

impl<W: Write> VM<W> {
    /// Enter the function at `address` with `argc` arguments already staged.
    ///
    /// The new frame records the instruction pointer just past the `CALL`
    /// and the current stack depth as its base.
    pub(super) fn call(&mut self, address: usize, argc: usize) -> Result<(), Fault> {
        let base = self.stack.top();
        if argc > base {
            return Err(Fault::StackUnderflow);
        }
        self.frames.push(CallFrame::new(self.ip, base, argc));
        debug!(
            address,
            base,
            argc,
            depth = self.frames.len(),
            "call"
        );
        self.ip = address;
        Ok(())
    }
}
