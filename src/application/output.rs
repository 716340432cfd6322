use std::io::{self, Stdout, Write};

use colored::Colorize;
use nstree::NodeKind;
use supports_color::Stream;

use crate::application::Message;

/// Writes command messages line by line, colored when `color` is set.
pub struct Output<W: Write> {
    writer: W,
    color: bool,
}

impl<W: Write> Output<W> {
    pub fn new(writer: W, color: bool) -> Self {
        Output { writer, color }
    }

    pub fn print(&mut self, message: &Message) -> io::Result<()> {
        let line = match message {
            Message::Success(text) if self.color => text.green().to_string(),
            Message::Error(text) if self.color => text.red().to_string(),
            Message::Entry {
                text,
                kind: NodeKind::Directory,
            } if self.color => text.blue().bold().to_string(),
            Message::Success(text)
            | Message::Error(text)
            | Message::Entry { text, .. }
            | Message::Plain(text) => text.clone(),
        };
        writeln!(self.writer, "{line}")
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl Default for Output<Stdout> {
    fn default() -> Self {
        Output::new(io::stdout(), supports_color::on(Stream::Stdout).is_some())
    }
}
