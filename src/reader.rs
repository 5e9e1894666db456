//! Sources of command lines.
//!
//! [`EditorReader`] gives line editing on a terminal; [`PlainReader`] reads from
//! any buffered byte stream and is what pipes, files and tests use.

use anyhow::{Context, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{BufRead, Write};

/// Result of asking a [`LineReader`] for the next line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// One line of text without its `\n` terminator.
    Line(String),
    /// The input stream has ended.
    Eof,
}

/// Something the main loop can prompt and read a line from.
pub trait LineReader {
    /// Shows `prompt` and returns the next line.
    ///
    /// Errors are unrecoverable read failures; end of input is `Ok(Input::Eof)`.
    fn read_line(&mut self, prompt: &str) -> Result<Input>;
}

/// Reads lines from a byte stream and writes prompts to `output`.
pub struct PlainReader<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PlainReader<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the prompt sink, e.g. to inspect what was written in tests.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> LineReader for PlainReader<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Input> {
        write!(self.output, "{}", prompt).context("failed to write prompt")?;
        self.output.flush().context("failed to write prompt")?;

        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .context("failed to read line")?;

        // A final line that is cut off by end of input is dropped, not executed.
        if read == 0 || buf.last() != Some(&b'\n') {
            if !buf.is_empty() {
                log::debug!("discarding {} bytes of unterminated input", buf.len());
            }
            return Ok(Input::Eof);
        }
        buf.pop();

        Ok(Input::Line(String::from_utf8_lossy(&buf).into_owned()))
    }
}

/// Interactive reader backed by rustyline.
///
/// History is kept in memory for the current session only.
pub struct EditorReader {
    editor: DefaultEditor,
}

impl EditorReader {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().context("failed to initialize line editor")?;
        Ok(Self { editor })
    }
}

impl LineReader for EditorReader {
    fn read_line(&mut self, prompt: &str) -> Result<Input> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor
                        .add_history_entry(line.as_str())
                        .context("failed to record history")?;
                }
                Ok(Input::Line(line))
            }
            // Ctrl-C abandons the line being edited.
            Err(ReadlineError::Interrupted) => Ok(Input::Line(String::new())),
            Err(ReadlineError::Eof) => Ok(Input::Eof),
            Err(err) => Err(err).context("failed to read line"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, Read};

    fn reader(input: &str) -> PlainReader<Cursor<Vec<u8>>, Vec<u8>> {
        PlainReader::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_reads_lines_without_terminator() {
        let mut r = reader("ls -l\npwd\n");
        assert_eq!(r.read_line("> ").unwrap(), Input::Line("ls -l".to_string()));
        assert_eq!(r.read_line("> ").unwrap(), Input::Line("pwd".to_string()));
        assert_eq!(r.read_line("> ").unwrap(), Input::Eof);
    }

    #[test]
    fn test_writes_prompt_before_each_read() {
        let mut r = reader("a\n");
        r.read_line("wish> ").unwrap();
        r.read_line("wish> ").unwrap();
        assert_eq!(String::from_utf8(r.into_output()).unwrap(), "wish> wish> ");
    }

    #[test]
    fn test_empty_line_is_a_line() {
        let mut r = reader("\n");
        assert_eq!(r.read_line("").unwrap(), Input::Line(String::new()));
    }

    #[test]
    fn test_carriage_return_is_kept() {
        let mut r = reader("pwd\r\n");
        assert_eq!(r.read_line("").unwrap(), Input::Line("pwd\r".to_string()));
    }

    #[test]
    fn test_empty_input_is_eof() {
        let mut r = reader("");
        assert_eq!(r.read_line("").unwrap(), Input::Eof);
    }

    #[test]
    fn test_unterminated_last_line_is_discarded() {
        let mut r = reader("help\nexit");
        assert_eq!(r.read_line("").unwrap(), Input::Line("help".to_string()));
        assert_eq!(r.read_line("").unwrap(), Input::Eof);
    }

    #[test]
    fn test_very_long_line() {
        let long = "x".repeat(1 << 20);
        let mut r = reader(&format!("{}\n", long));
        assert_eq!(r.read_line("").unwrap(), Input::Line(long));
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let mut r = PlainReader::new(Cursor::new(b"echo \xff\n".to_vec()), Vec::new());
        assert_eq!(
            r.read_line("").unwrap(),
            Input::Line("echo \u{fffd}".to_string())
        );
    }

    struct BrokenInput;

    impl Read for BrokenInput {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("device gone"))
        }
    }

    #[test]
    fn test_read_failure_is_an_error() {
        let mut r = PlainReader::new(io::BufReader::new(BrokenInput), Vec::new());
        let err = r.read_line("").unwrap_err();
        assert!(format!("{:#}", err).contains("device gone"));
    }
}
