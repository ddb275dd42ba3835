use std::io::{self, BufRead, ErrorKind, Write};

/// Line-oriented operator input.
///
/// Closed input (EOF) surfaces as an `UnexpectedEof` error so a workflow can
/// bail out with `?` before anything is persisted.
pub(super) struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub(super) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Show `label`, read one line and return it trimmed.
    pub(super) fn ask(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_string())
    }

    /// Ask until `parse` accepts the answer.
    pub(super) fn ask_parsed<T>(
        &mut self,
        label: &str,
        parse: impl Fn(&str) -> Option<T>,
        invalid: &str,
    ) -> io::Result<T> {
        loop {
            let answer = self.ask(label)?;
            match parse(&answer) {
                Some(value) => return Ok(value),
                None => writeln!(self.output, "{}", invalid)?,
            }
        }
    }

    /// Like [`Prompter::ask_parsed`], but a blank answer returns `None`.
    pub(super) fn ask_parsed_or_keep<T>(
        &mut self,
        label: &str,
        parse: impl Fn(&str) -> Option<T>,
        invalid: &str,
    ) -> io::Result<Option<T>> {
        loop {
            let answer = self.ask(label)?;
            if answer.is_empty() {
                return Ok(None);
            }
            match parse(&answer) {
                Some(value) => return Ok(Some(value)),
                None => writeln!(self.output, "{}", invalid)?,
            }
        }
    }
}

pub(super) fn is_eof(err: &io::Error) -> bool {
    err.kind() == ErrorKind::UnexpectedEof
}
