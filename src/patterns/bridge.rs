//! Pattern 9: Bridge
//! Example: Separating "what a display can do" from "how it draws"
//!
//! Run with: cargo run --bin p09_bridge
//!
//! - Implementation hierarchy: [`DisplayImpl`] and its implementors.
//! - Function hierarchy: [`Display`] → [`CountDisplay`] → [`RandomCountDisplay`]
//!   and [`IncreaseDisplay`].
//!
//! The two grow independently. Each function layer wraps the previous one and
//! derefs to it, so the inherited operations stay callable.

use std::io::{self, Write};
use std::ops::Deref;

use rand::Rng;

use crate::config::PlaygroundConfig;
use crate::error::Result;

const RNG_STREAM: u64 = 9;

// =============================================================================
// Implementation hierarchy
// =============================================================================

pub trait DisplayImpl {
    fn raw_open(&self, out: &mut dyn Write) -> io::Result<()>;
    fn raw_print(&self, out: &mut dyn Write) -> io::Result<()>;
    fn raw_close(&self, out: &mut dyn Write) -> io::Result<()>;
}

pub struct StringDisplayImpl {
    text: String,
    width: usize,
}

impl StringDisplayImpl {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let width = text.chars().count();
        Self { text, width }
    }

    fn print_line(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "+{}+", "-".repeat(self.width))
    }
}

impl DisplayImpl for StringDisplayImpl {
    fn raw_open(&self, out: &mut dyn Write) -> io::Result<()> {
        self.print_line(out)
    }

    fn raw_print(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "|{}|", self.text)
    }

    fn raw_close(&self, out: &mut dyn Write) -> io::Result<()> {
        self.print_line(out)
    }
}

/// Draws one row: `head`, then `body` once per print, then `foot`.
pub struct CharDisplayImpl {
    head: char,
    body: char,
    foot: char,
}

impl CharDisplayImpl {
    pub fn new(head: char, body: char, foot: char) -> Self {
        Self { head, body, foot }
    }
}

impl DisplayImpl for CharDisplayImpl {
    fn raw_open(&self, out: &mut dyn Write) -> io::Result<()> {
        write!(out, "{}", self.head)
    }

    fn raw_print(&self, out: &mut dyn Write) -> io::Result<()> {
        write!(out, "{}", self.body)
    }

    fn raw_close(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.foot)
    }
}

// =============================================================================
// Function hierarchy
// =============================================================================

pub struct Display {
    imp: Box<dyn DisplayImpl>,
}

impl Display {
    pub fn new(imp: Box<dyn DisplayImpl>) -> Self {
        Self { imp }
    }

    pub fn open(&self, out: &mut dyn Write) -> io::Result<()> {
        self.imp.raw_open(out)
    }

    pub fn print(&self, out: &mut dyn Write) -> io::Result<()> {
        self.imp.raw_print(out)
    }

    pub fn close(&self, out: &mut dyn Write) -> io::Result<()> {
        self.imp.raw_close(out)
    }

    pub fn display(&self, out: &mut dyn Write) -> io::Result<()> {
        self.open(out)?;
        self.print(out)?;
        self.close(out)
    }
}

pub struct CountDisplay {
    display: Display,
}

impl CountDisplay {
    pub fn new(imp: Box<dyn DisplayImpl>) -> Self {
        Self {
            display: Display::new(imp),
        }
    }

    /// Prints the body exactly `times` times between one open and one close.
    pub fn multi_display(&self, times: usize, out: &mut dyn Write) -> io::Result<()> {
        self.open(out)?;
        for _ in 0..times {
            self.print(out)?;
        }
        self.close(out)
    }
}

impl Deref for CountDisplay {
    type Target = Display;

    fn deref(&self) -> &Self::Target {
        &self.display
    }
}

pub struct RandomCountDisplay {
    count: CountDisplay,
}

impl RandomCountDisplay {
    pub fn new(imp: Box<dyn DisplayImpl>) -> Self {
        Self {
            count: CountDisplay::new(imp),
        }
    }

    /// Prints the body a random number of times in `0..times`; returns that number.
    pub fn random_display(
        &self,
        times: usize,
        rng: &mut impl Rng,
        out: &mut dyn Write,
    ) -> io::Result<usize> {
        let n = if times == 0 {
            0
        } else {
            rng.gen_range(0..times)
        };
        self.multi_display(n, out)?;
        Ok(n)
    }
}

impl Deref for RandomCountDisplay {
    type Target = CountDisplay;

    fn deref(&self) -> &Self::Target {
        &self.count
    }
}

pub struct IncreaseDisplay {
    count: CountDisplay,
    step: usize,
}

impl IncreaseDisplay {
    pub fn new(imp: Box<dyn DisplayImpl>, step: usize) -> Self {
        Self {
            count: CountDisplay::new(imp),
            step,
        }
    }

    /// `levels` rows, row `i` printing the body `i * step` times.
    pub fn increase_display(&self, levels: usize, out: &mut dyn Write) -> io::Result<()> {
        for level in 0..levels {
            self.multi_display(level * self.step, out)?;
        }
        Ok(())
    }
}

impl Deref for IncreaseDisplay {
    type Target = CountDisplay;

    fn deref(&self) -> &Self::Target {
        &self.count
    }
}

pub fn run(out: &mut dyn Write, config: &PlaygroundConfig) -> Result<()> {
    let d1 = Display::new(Box::new(StringDisplayImpl::new("Hello, Japan!")));
    let d2 = CountDisplay::new(Box::new(StringDisplayImpl::new("Hello, World!")));
    let d3 = CountDisplay::new(Box::new(StringDisplayImpl::new("Hello, Universe!")));
    d1.display(out)?;
    d2.display(out)?;
    d3.multi_display(5, out)?;

    let mut rng = config.rng(RNG_STREAM);
    let d4 = RandomCountDisplay::new(Box::new(StringDisplayImpl::new("Hello, Random!")));
    let shown = d4.random_display(5, &mut rng, out)?;
    log::debug!("random display printed {shown} rows");

    let d5 = IncreaseDisplay::new(Box::new(CharDisplayImpl::new('<', '*', '>')), 1);
    d5.increase_display(4, out)?;
    let d6 = IncreaseDisplay::new(Box::new(CharDisplayImpl::new('|', '#', '-')), 2);
    d6.increase_display(4, out)?;
    Ok(())
}
