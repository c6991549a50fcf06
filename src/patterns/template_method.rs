//! Pattern 3: Template Method
//! Example: `display` fixes the algorithm, implementors fill in the steps
//!
//! Run with: cargo run --bin p03_template_method

use std::io::{self, Write};

use crate::config::PlaygroundConfig;
use crate::error::Result;

pub const REPEAT: usize = 5;

pub trait AbstractDisplay {
    fn open(&self, out: &mut dyn Write) -> io::Result<()>;
    fn print_body(&self, out: &mut dyn Write) -> io::Result<()>;
    fn close(&self, out: &mut dyn Write) -> io::Result<()>;

    /// The template method. Implementors never override it.
    fn display(&self, out: &mut dyn Write) -> io::Result<()> {
        self.open(out)?;
        for _ in 0..REPEAT {
            self.print_body(out)?;
        }
        self.close(out)
    }
}

pub struct CharDisplay {
    ch: char,
}

impl CharDisplay {
    pub fn new(ch: char) -> Self {
        Self { ch }
    }
}

impl AbstractDisplay for CharDisplay {
    fn open(&self, out: &mut dyn Write) -> io::Result<()> {
        write!(out, "<<")
    }

    fn print_body(&self, out: &mut dyn Write) -> io::Result<()> {
        write!(out, "{}", self.ch)
    }

    fn close(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, ">>")
    }
}

pub struct StringDisplay {
    text: String,
    width: usize,
}

impl StringDisplay {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let width = text.chars().count();
        Self { text, width }
    }

    fn print_line(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "+{}+", "-".repeat(self.width))
    }
}

impl AbstractDisplay for StringDisplay {
    fn open(&self, out: &mut dyn Write) -> io::Result<()> {
        self.print_line(out)
    }

    fn print_body(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "|{}|", self.text)
    }

    fn close(&self, out: &mut dyn Write) -> io::Result<()> {
        self.print_line(out)
    }
}

pub fn run(out: &mut dyn Write, _config: &PlaygroundConfig) -> Result<()> {
    let displays: Vec<Box<dyn AbstractDisplay>> = vec![
        Box::new(CharDisplay::new('H')),
        Box::new(StringDisplay::new("Hello world!")),
    ];
    for display in &displays {
        display.display(out)?;
    }
    Ok(())
}
