use crate::PROGRAM_NAME;
use crate::builtin::Builtin;
use crate::command::{CommandFactory, Continuation};
use crate::external::ExternalCommand;
use crate::lexer;
use crate::reader::{Input, LineReader};
use anyhow::Result;
use log::{debug, warn};
use std::io::Write;

/// Factory allows creating instances of ExecutableCommand.
///
/// Only supports the command kinds defined in this crate: [`Builtin`] and
/// [`ExternalCommand`].
pub(crate) struct Factory<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for Factory<T> {
    fn default() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

/// A minimal interactive interpreter that runs builtin and external commands.
///
/// Factories are queried in order and the first one that recognizes the command
/// name wins. See [`Default`] for the set included out of the box.
///
/// Example
/// ```
/// use wish::Interpreter;
/// use wish::command::Continuation;
/// let sh = Interpreter::default();
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let next = sh.execute(&["exit".to_string()], &mut out, &mut err);
/// assert_eq!(next, Continuation::Exit);
/// ```
pub struct Interpreter {
    commands: Vec<Box<dyn CommandFactory>>,
}

impl Interpreter {
    /// Create a new interpreter with a custom set of command factories.
    pub fn new(commands: Vec<Box<dyn CommandFactory>>) -> Self {
        Self { commands }
    }

    /// Execute one tokenized command line.
    ///
    /// An empty argument list is a no-op. Failures are reported to `stderr` with
    /// the program tag and never stop the loop; only `exit` does.
    pub fn execute(
        &self,
        args: &[String],
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Continuation {
        let Some(name) = args.first() else {
            return Continuation::Continue;
        };

        let Some(cmd) = self
            .commands
            .iter()
            .find_map(|factory| factory.try_create(name, args))
        else {
            report(stderr, format_args!("{}: command not found", name));
            return Continuation::Continue;
        };

        debug!("dispatching {:?}", args);
        let next = match cmd.execute(stdout) {
            Ok(next) => next,
            Err(err) => {
                report(stderr, format_args!("{:#}", err));
                Continuation::Continue
            }
        };
        if let Err(err) = stdout.flush() {
            warn!("failed to flush stdout: {}", err);
        }
        next
    }

    /// Read-Eval-Print Loop.
    ///
    /// Runs until `exit` is executed or `reader` reaches end of input, both of
    /// which return `Ok`. A read failure is returned as an error.
    pub fn repl(
        &self,
        reader: &mut dyn LineReader,
        prompt: &str,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<()> {
        loop {
            let line = match reader.read_line(prompt)? {
                Input::Line(line) => line,
                Input::Eof => {
                    debug!("end of input");
                    return Ok(());
                }
            };

            let args = lexer::split_into_tokens(&line);
            drop(line);
            debug!("tokens: {:?}", args);

            if self.execute(&args, stdout, stderr) == Continuation::Exit {
                return Ok(());
            }
        }
    }
}

impl Default for Interpreter {
    /// Create an interpreter with the default set of commands:
    /// - built-ins: `cd`, `help`, `exit`
    /// - external command launcher
    fn default() -> Self {
        Self::new(vec![
            Box::new(Factory::<Builtin>::default()),
            Box::new(Factory::<ExternalCommand>::default()),
        ])
    }
}

fn report(stderr: &mut dyn Write, message: std::fmt::Arguments<'_>) {
    if let Err(err) = writeln!(stderr, "{}: {}", PROGRAM_NAME, message) {
        warn!("failed to write to stderr: {}", err);
    }
}
