//! Pattern 12: Decorator
//! Example: Stacking borders around a text display
//!
//! Run with: cargo run --bin p12_decorator
//!
//! Every border is itself a `Display`, so decorations nest to any depth and the
//! wrapped display never changes. Inner displays are shared through `Rc`, which
//! lets the same core appear in several decorated views at once.

use std::io::{self, Write};
use std::rc::Rc;

use crate::config::PlaygroundConfig;
use crate::error::Result;

pub trait Display {
    /// Width in characters.
    fn columns(&self) -> usize;
    fn rows(&self) -> usize;
    /// Text of `row`, which must be below `rows()`.
    fn row_text(&self, row: usize) -> String;

    fn show(&self, out: &mut dyn Write) -> io::Result<()> {
        for row in 0..self.rows() {
            writeln!(out, "{}", self.row_text(row))?;
        }
        Ok(())
    }
}

// =============================================================================
// Core displays
// =============================================================================

pub struct StringDisplay {
    text: String,
}

impl StringDisplay {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Display for StringDisplay {
    fn columns(&self) -> usize {
        self.text.chars().count()
    }

    fn rows(&self) -> usize {
        1
    }

    fn row_text(&self, row: usize) -> String {
        if row == 0 {
            self.text.clone()
        } else {
            String::new()
        }
    }
}

/// Several lines, each padded to the widest one.
#[derive(Default)]
pub struct MultiStringDisplay {
    lines: Vec<String>,
    width: usize,
}

impl MultiStringDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, line: impl Into<String>) -> Self {
        let line = line.into();
        self.width = self.width.max(line.chars().count());
        self.lines.push(line);
        self
    }
}

impl Display for MultiStringDisplay {
    fn columns(&self) -> usize {
        self.width
    }

    fn rows(&self) -> usize {
        self.lines.len()
    }

    fn row_text(&self, row: usize) -> String {
        let line = self.lines.get(row).map(String::as_str).unwrap_or("");
        let padding = self.width - line.chars().count();
        format!("{line}{}", " ".repeat(padding))
    }
}

// =============================================================================
// Borders
// =============================================================================

pub struct SideBorder {
    inner: Rc<dyn Display>,
    border: char,
}

impl SideBorder {
    pub fn new(inner: Rc<dyn Display>, border: char) -> Self {
        Self { inner, border }
    }
}

impl Display for SideBorder {
    fn columns(&self) -> usize {
        1 + self.inner.columns() + 1
    }

    fn rows(&self) -> usize {
        self.inner.rows()
    }

    fn row_text(&self, row: usize) -> String {
        format!("{}{}{}", self.border, self.inner.row_text(row), self.border)
    }
}

pub struct FullBorder {
    inner: Rc<dyn Display>,
}

impl FullBorder {
    pub fn new(inner: Rc<dyn Display>) -> Self {
        Self { inner }
    }
}

impl Display for FullBorder {
    fn columns(&self) -> usize {
        1 + self.inner.columns() + 1
    }

    fn rows(&self) -> usize {
        1 + self.inner.rows() + 1
    }

    fn row_text(&self, row: usize) -> String {
        if row == 0 || row == self.inner.rows() + 1 {
            format!("+{}+", "-".repeat(self.inner.columns()))
        } else {
            format!("|{}|", self.inner.row_text(row - 1))
        }
    }
}

pub struct UpDownBorder {
    inner: Rc<dyn Display>,
    border: char,
}

impl UpDownBorder {
    pub fn new(inner: Rc<dyn Display>, border: char) -> Self {
        Self { inner, border }
    }
}

impl Display for UpDownBorder {
    fn columns(&self) -> usize {
        self.inner.columns()
    }

    fn rows(&self) -> usize {
        1 + self.inner.rows() + 1
    }

    fn row_text(&self, row: usize) -> String {
        if row == 0 || row == self.inner.rows() + 1 {
            std::iter::repeat(self.border)
                .take(self.inner.columns())
                .collect()
        } else {
            self.inner.row_text(row - 1)
        }
    }
}

pub fn run(out: &mut dyn Write, _config: &PlaygroundConfig) -> Result<()> {
    let b1: Rc<dyn Display> = Rc::new(StringDisplay::new("Hello world"));
    let b2: Rc<dyn Display> = Rc::new(SideBorder::new(b1.clone(), '#'));
    let b3: Rc<dyn Display> = Rc::new(FullBorder::new(b2.clone()));
    b1.show(out)?;
    b2.show(out)?;
    b3.show(out)?;

    writeln!(out)?;
    let japan: Rc<dyn Display> = Rc::new(StringDisplay::new("Hello Japan"));
    let starred: Rc<dyn Display> = Rc::new(SideBorder::new(japan, '*'));
    let boxed: Rc<dyn Display> = Rc::new(FullBorder::new(starred));
    let slashed: Rc<dyn Display> = Rc::new(SideBorder::new(boxed, '/'));
    let b4: Rc<dyn Display> = Rc::new(FullBorder::new(slashed));
    b4.show(out)?;

    writeln!(out)?;
    let b5: Rc<dyn Display> = Rc::new(FullBorder::new(b4.clone()));
    b5.show(out)?;

    writeln!(out)?;
    let b6 = SideBorder::new(b5, '$');
    b6.show(out)?;

    writeln!(out)?;
    let lines: Rc<dyn Display> = Rc::new(
        MultiStringDisplay::new()
            .add("Good morning.")
            .add("Hello.")
            .add("Good night, see you tomorrow."),
    );
    let b7 = FullBorder::new(Rc::new(UpDownBorder::new(lines, '=')));
    b7.show(out)?;
    Ok(())
}
