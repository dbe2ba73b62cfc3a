use bookcore::{ContactSummary, UpcomingBirthday, UserView};
use std::io::{self, Stdout, Write};

/// Plain-text view over any writer
pub struct ConsoleView<W: Write> {
    out: W,
}

impl ConsoleView<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Print without a trailing newline, flushing so prompts show up before
    /// input is read.
    pub fn prompt(&mut self, text: &str) {
        let _ = write!(self.out, "{}", text);
        let _ = self.out.flush();
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: impl std::fmt::Display) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            tracing::warn!("Failed to write output: {}", e);
        }
    }
}

impl<W: Write> UserView for ConsoleView<W> {
    fn show_message(&mut self, message: &str) {
        self.line(message);
    }

    fn show_contacts(&mut self, contacts: &[ContactSummary]) {
        for contact in contacts {
            self.line(contact);
        }
    }

    fn show_birthdays(&mut self, birthdays: &[UpcomingBirthday]) {
        for birthday in birthdays {
            self.line(birthday);
        }
    }
}
