use crate::command::{CommandFactory, Continuation, ExecutableCommand};
use crate::interpreter::Factory;
use anyhow::{Context, Result, bail};
use std::env;
use std::io::Write;

/// Commands implemented by the shell itself rather than by a child process.
///
/// Lookup is an exact, case-sensitive match on the command name. The order of
/// [`Builtin::ALL`] is the order `help` lists them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    /// Change the working directory of the shell process.
    Cd,
    /// Print usage and the list of builtins.
    Help,
    /// Stop the shell.
    Exit,
}

impl Builtin {
    pub const ALL: [Builtin; 3] = [Builtin::Cd, Builtin::Help, Builtin::Exit];

    /// Canonical name of the command, e.g. "cd".
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Cd => "cd",
            Builtin::Help => "help",
            Builtin::Exit => "exit",
        }
    }

    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|builtin| builtin.name() == name)
    }

    /// Runs the builtin with the full argument list, `args[0]` being its own name.
    ///
    /// Arguments a builtin has no use for are ignored.
    pub fn run(self, args: &[String], stdout: &mut dyn Write) -> Result<Continuation> {
        match self {
            Builtin::Cd => change_dir(args.get(1).map(String::as_str)),
            Builtin::Help => print_help(stdout),
            Builtin::Exit => Ok(Continuation::Exit),
        }
    }
}

fn change_dir(target: Option<&str>) -> Result<Continuation> {
    let Some(target) = target else {
        bail!("expected argument to \"cd\"");
    };
    env::set_current_dir(target).with_context(|| format!("cd: {}", target))?;
    log::debug!("working directory is now {}", target);
    Ok(Continuation::Continue)
}

fn print_help(stdout: &mut dyn Write) -> Result<Continuation> {
    writeln!(stdout, "Type program names and arguments, and hit enter.")?;
    writeln!(stdout, "The following are built in:")?;
    for builtin in Builtin::ALL {
        writeln!(stdout, "  {}", builtin.name())?;
    }
    writeln!(stdout, "Use the man command for information on other programs.")?;
    Ok(Continuation::Continue)
}

/// A builtin bound to the arguments it was invoked with.
struct BuiltinCall {
    builtin: Builtin,
    args: Vec<String>,
}

impl ExecutableCommand for BuiltinCall {
    fn execute(self: Box<Self>, stdout: &mut dyn Write) -> Result<Continuation> {
        self.builtin.run(&self.args, stdout)
    }
}

impl CommandFactory for Factory<Builtin> {
    fn try_create(&self, name: &str, args: &[String]) -> Option<Box<dyn ExecutableCommand>> {
        let builtin = Builtin::lookup(name)?;
        Some(Box::new(BuiltinCall {
            builtin,
            args: args.to_vec(),
        }))
    }
}
