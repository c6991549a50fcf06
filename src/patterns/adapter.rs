//! Pattern 2: Adapter
//! Example: Wrapping an existing `Banner` behind the `Print` interface
//!
//! Run with: cargo run --bin p02_adapter

use std::io::{self, Write};

use crate::config::PlaygroundConfig;
use crate::error::Result;

// =============================================================================
// Adaptee: already provided and well tested, so it is left untouched
// =============================================================================

pub struct Banner {
    text: String,
}

impl Banner {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn show_with_paren(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "({})", self.text)
    }

    pub fn show_with_aster(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "*{}*", self.text)
    }
}

// =============================================================================
// Target interface and the adapter
// =============================================================================

pub trait Print {
    fn print_weak(&self, out: &mut dyn Write) -> io::Result<()>;
    fn print_strong(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Delegates to a wrapped [`Banner`].
pub struct PrintBanner {
    banner: Banner,
}

impl PrintBanner {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            banner: Banner::new(text),
        }
    }
}

impl Print for PrintBanner {
    fn print_weak(&self, out: &mut dyn Write) -> io::Result<()> {
        self.banner.show_with_paren(out)
    }

    fn print_strong(&self, out: &mut dyn Write) -> io::Result<()> {
        self.banner.show_with_aster(out)
    }
}

/// A caller that only knows about `Print`.
pub struct Client {
    printer: Box<dyn Print>,
}

impl Client {
    pub fn new(printer: Box<dyn Print>) -> Self {
        Self { printer }
    }

    pub fn emphasize(&self, out: &mut dyn Write) -> io::Result<()> {
        self.printer.print_strong(out)
    }
}

pub fn run(out: &mut dyn Write, _config: &PlaygroundConfig) -> Result<()> {
    let banner = PrintBanner::new("helloWorld!");
    banner.print_strong(out)?;
    banner.print_weak(out)?;

    let client = Client::new(Box::new(banner));
    client.emphasize(out)?;
    Ok(())
}
