use std::io::{self, BufRead, Write};

/// Line-oriented player input. Stdin for interactive play, a file for
/// scripted runs.
pub struct LineInput<R> {
    reader: R,
    echo: bool,
}

impl<R: BufRead> LineInput<R> {
    pub fn interactive(reader: R) -> Self {
        Self {
            reader,
            echo: false,
        }
    }

    /// Scripted input is echoed after each prompt so transcripts read like
    /// a real session.
    pub fn scripted(reader: R) -> Self {
        Self { reader, echo: true }
    }

    /// Read one line without its terminator. `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).to_string();
        Ok(Some(trimmed))
    }

    /// Print `question`, then read the answer.
    pub fn prompt<W: Write>(&mut self, out: &mut W, question: &str) -> io::Result<Option<String>> {
        write!(out, "{question}")?;
        out.flush()?;
        let answer = self.read_line()?;
        if self.echo {
            writeln!(out, "{}", answer.as_deref().unwrap_or_default())?;
        }
        Ok(answer)
    }
}
