use std::io::{self, BufRead, StdinLock, Stdout, Write};

use questionnaire_types::{Console, LineReader, PromptError, Session, Terminal};
use tracing::debug;

/// A terminal over any line-buffered reader and writer.
///
/// Prompts and notices go to the writer, answers are read from the reader.
/// Works with piped input: reaching end of input fails the read with
/// [`PromptError::InputClosed`].
#[derive(Debug)]
pub struct StdioTerminal<R, W> {
    reader: R,
    writer: W,
}

impl StdioTerminal<StdinLock<'static>, Stdout> {
    /// A terminal over the process's stdin and stdout.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdioTerminal<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consume the terminal, returning the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> Terminal for StdioTerminal<R, W> {
    type Session<'a>
        = StdioSession<'a, R, W>
    where
        Self: 'a;

    fn open(&mut self) -> Result<Self::Session<'_>, PromptError> {
        Ok(StdioSession {
            reader: &mut self.reader,
            writer: &mut self.writer,
        })
    }
}

/// A session borrowing the reader and writer of a [`StdioTerminal`].
#[derive(Debug)]
pub struct StdioSession<'a, R, W> {
    reader: &'a mut R,
    writer: &'a mut W,
}

impl<R: BufRead, W: Write> LineReader for StdioSession<'_, R, W> {
    fn ask(&mut self, query: &str) -> Result<String, PromptError> {
        write!(self.writer, "{query}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(PromptError::InputClosed);
        }

        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(trimmed.to_string())
    }
}

impl<R: BufRead, W: Write> Console for StdioSession<'_, R, W> {
    fn say(&mut self, line: &str) {
        if let Err(err) = writeln!(self.writer, "{line}") {
            debug!(%err, "failed to write console line");
        }
    }
}

impl<R: BufRead, W: Write> Session for StdioSession<'_, R, W> {
    fn close(&mut self) {
        if let Err(err) = self.writer.flush() {
            debug!(%err, "failed to flush on close");
        }
    }
}
