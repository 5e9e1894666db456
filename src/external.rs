use crate::command::{CommandFactory, Continuation, ExecutableCommand, ExitCode};
use crate::interpreter::Factory;
use anyhow::{Context, Result};
use log::debug;
use std::io::Write;
use std::process::{Child, Command};

/// Command that is not a builtin: a program started as a foreground child.
pub struct ExternalCommand {
    program: String,
    args: Vec<String>,
}

impl ExternalCommand {
    /// `argv[0]` is `program`; `args` are the remaining arguments.
    pub fn new(program: String, args: Vec<String>) -> Self {
        Self { program, args }
    }
}

impl CommandFactory for Factory<ExternalCommand> {
    fn try_create(&self, name: &str, args: &[String]) -> Option<Box<dyn ExecutableCommand>> {
        if name.is_empty() {
            return None;
        }
        Some(Box::new(ExternalCommand::new(
            name.to_owned(),
            args.iter().skip(1).cloned().collect(),
        )))
    }
}

impl ExecutableCommand for ExternalCommand {
    fn execute(self: Box<Self>, stdout: &mut dyn Write) -> Result<Continuation> {
        // The child writes straight to the inherited descriptor.
        stdout.flush()?;

        // Resolution through PATH is left to the platform, as execvp does.
        let child = Command::new(&self.program)
            .args(&self.args)
            .spawn()
            .with_context(|| self.program.clone())?;
        debug!("started {} as pid {}", self.program, child.id());

        let code = wait_for_termination(child)
            .with_context(|| format!("{}: failed to wait for child", self.program))?;
        debug!("{} finished with status {}", self.program, code);

        // The child's status never stops the shell.
        Ok(Continuation::Continue)
    }
}

/// Blocks until `child` has exited or was killed by a signal.
///
/// Stop and continue notifications do not end the wait. Returns the exit code, or
/// `128 + signal` for a signal death.
#[cfg(unix)]
pub fn wait_for_termination(child: Child) -> Result<ExitCode> {
    use nix::errno::Errno;
    use nix::sys::wait::{WaitPidFlag, WaitStatus, waitpid};
    use nix::unistd::Pid;

    let pid = Pid::from_raw(child.id() as i32);
    loop {
        match waitpid(pid, Some(WaitPidFlag::WUNTRACED)) {
            Ok(WaitStatus::Exited(_, code)) => return Ok(code),
            Ok(WaitStatus::Signaled(_, signal, _)) => return Ok(128 + signal as i32),
            Ok(status) => debug!("pid {} reported {:?}, still waiting", pid, status),
            Err(Errno::EINTR) => continue,
            Err(errno) => return Err(errno).context("waitpid"),
        }
    }
}

#[cfg(not(unix))]
pub fn wait_for_termination(mut child: Child) -> Result<ExitCode> {
    let status = child.wait().context("wait")?;
    Ok(status.code().unwrap_or(-1))
}
