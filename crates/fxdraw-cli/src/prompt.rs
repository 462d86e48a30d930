use std::io::{self, Write};

/// Boundary for operator interaction.
///
/// The ceremony flow only ever talks to the operator through this trait, so
/// tests drive a full ceremony with scripted answers instead of a terminal.
pub trait Prompter {
    /// Show `label` and read one line of input, trimmed of surrounding
    /// whitespace.
    fn ask(&mut self, label: &str) -> io::Result<String>;
}

/// Prompter reading from stdin, with labels written to stdout.
#[derive(Debug, Default)]
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn ask(&mut self, label: &str) -> io::Result<String> {
        print!("{label}");
        io::stdout().flush()?;

        let mut line = String::new();
        let read = io::stdin().read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before the ceremony finished",
            ));
        }

        Ok(line.trim().to_owned())
    }
}
