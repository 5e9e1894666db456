use anyhow::Result;
use std::io::Write;

/// Conventional process exit code type used by this crate.
///
/// Signal terminations are folded in as `128 + signal`, the way POSIX shells
/// report them.
pub type ExitCode = i32;

/// Outcome of executing one command line: prompt again, or stop the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    Continue,
    Exit,
}

/// Object-safe trait for any command the shell can execute.
///
/// Implemented by builtin invocations and by external programs.
pub trait ExecutableCommand {
    /// Executes the command.
    ///
    /// `stdout` is the shell's own output stream. External programs inherit the
    /// real standard streams instead, so they only flush it before starting.
    fn execute(self: Box<Self>, stdout: &mut dyn Write) -> Result<Continuation>;
}

/// Factory that tries to create a command from a name and its full argument list.
///
/// Returns `None` when the factory doesn't recognize the `name`.
pub trait CommandFactory {
    /// `args[0]` is `name` itself.
    fn try_create(&self, name: &str, args: &[String]) -> Option<Box<dyn ExecutableCommand>>;
}
