use crate::error::Fault;
use crate::vm::VM;
use std::io::Write;
use tracing::debug;

impl<W: Write> VM<W> {
    /// Leave the innermost frame.
    ///
    /// Pops the return value, cuts the stack back to the frame base, drops the
    /// `argc` argument slots below it, resumes after the `CALL` and pushes the
    /// return value. The net effect of a call is to replace its arguments
    /// with one result.
    pub(super) fn handle_return(&mut self) -> Result<(), Fault> {
        let frame = *self.frames.last().ok_or(Fault::NoActiveFrame)?;
        let result = self.pop()?;
        self.stack.set_top(frame.base)?;
        self.stack.set_top(frame.base - frame.argc)?;
        self.frames.pop();
        self.ip = frame.return_ip;
        debug!(
            resume = frame.return_ip,
            depth = self.frames.len(),
            "return"
        );
        self.push(result)
    }
}
