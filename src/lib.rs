//! A tiny interactive command interpreter.
//!
//! Each cycle reads one line, splits it on whitespace and either runs one of the
//! three builtins (`cd`, `help`, `exit`) in-process or launches an external
//! program and waits for it to terminate.
//!
//! The main entry point is [`Interpreter`]. Line sources live in [`reader`], the
//! command seams in [`command`].

mod builtin;
pub mod command;
mod external;
mod interpreter;
pub mod lexer;
pub mod reader;

pub use builtin::Builtin;
pub use interpreter::Interpreter;

/// Tag prefixed to every message the shell writes to standard error.
pub const PROGRAM_NAME: &str = "wish";

/// Prompt printed before each line is read.
pub const DEFAULT_PROMPT: &str = "wish> ";
