use argh::FromArgs;
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use wish::reader::{EditorReader, LineReader, PlainReader};
use wish::{DEFAULT_PROMPT, Interpreter, PROGRAM_NAME};

#[derive(FromArgs)]
/// Interactive command interpreter with the builtins cd, help and exit.
/// Anything else is run as an external program.
struct Options {
    #[argh(switch)]
    /// read commands without line editing, even on a terminal.
    plain: bool,

    #[argh(option, default = "String::from(DEFAULT_PROMPT)")]
    /// text printed before each command is read.
    prompt: String,
}

fn main() -> ExitCode {
    env_logger::init();
    let options: Options = argh::from_env();

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {:#}", PROGRAM_NAME, err);
            ExitCode::FAILURE
        }
    }
}

fn run(options: &Options) -> anyhow::Result<()> {
    let mut reader: Box<dyn LineReader> = if !options.plain && io::stdin().is_terminal() {
        Box::new(EditorReader::new()?)
    } else {
        Box::new(PlainReader::new(io::stdin().lock(), io::stdout()))
    };

    Interpreter::default().repl(
        reader.as_mut(),
        &options.prompt,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
}
