//! Pattern 21: Proxy
//! Example: A printer that is only built when something is actually printed
//!
//! Run with: cargo run --bin p21_proxy
//!
//! The proxy answers name queries itself and creates the real, slow `Printer`
//! on the first `print`.

use std::io::{self, Write};

use crate::config::{Pacer, PlaygroundConfig};
use crate::error::Result;

const WARMUP_STEPS: usize = 5;

pub trait Printable {
    fn set_printer_name(&mut self, name: &str);
    fn printer_name(&self) -> &str;
    fn print(&mut self, text: &str, out: &mut dyn Write) -> io::Result<()>;
}

pub struct Printer {
    name: String,
}

impl Printer {
    /// Slow to construct: prints a progress dot per warm-up step, pausing on
    /// `pacer` before each one.
    pub fn new(name: impl Into<String>, pacer: Pacer, out: &mut dyn Write) -> io::Result<Self> {
        let name = name.into();
        write!(out, "Creating Printer instance ({name})")?;
        for _ in 0..WARMUP_STEPS {
            out.flush()?;
            pacer.pause();
            write!(out, ".")?;
        }
        writeln!(out, "done.")?;
        Ok(Self { name })
    }
}

impl Printable for Printer {
    fn set_printer_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    fn printer_name(&self) -> &str {
        &self.name
    }

    fn print(&mut self, text: &str, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "=== {} ===", self.name)?;
        writeln!(out, "{text}")
    }
}

pub struct PrinterProxy {
    name: String,
    pacer: Pacer,
    real: Option<Printer>,
}

impl PrinterProxy {
    pub fn new(name: impl Into<String>, pacer: Pacer) -> Self {
        Self {
            name: name.into(),
            pacer,
            real: None,
        }
    }

    pub fn is_realized(&self) -> bool {
        self.real.is_some()
    }
}

impl Printable for PrinterProxy {
    fn set_printer_name(&mut self, name: &str) {
        if let Some(real) = self.real.as_mut() {
            real.set_printer_name(name);
        }
        self.name = name.to_string();
    }

    fn printer_name(&self) -> &str {
        &self.name
    }

    fn print(&mut self, text: &str, out: &mut dyn Write) -> io::Result<()> {
        let real = match self.real.take() {
            Some(real) => real,
            None => {
                log::debug!("realizing printer {}", self.name);
                Printer::new(self.name.clone(), self.pacer, out)?
            }
        };
        self.real.insert(real).print(text, out)
    }
}

pub fn run(out: &mut dyn Write, config: &PlaygroundConfig) -> Result<()> {
    let mut printer: Box<dyn Printable> = Box::new(PrinterProxy::new("Alice", config.pacer()));
    writeln!(out, "The printer is now {}.", printer.printer_name())?;
    printer.set_printer_name("Bob");
    writeln!(out, "The printer is now {}.", printer.printer_name())?;
    printer.print("Hello, world.", out)?;
    printer.set_printer_name("Carol");
    printer.print("Hello again.", out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_changes_do_not_realize() {
        let mut proxy = PrinterProxy::new("Alice", Pacer::OFF);
        proxy.set_printer_name("Bob");
        assert_eq!(proxy.printer_name(), "Bob");
        assert!(!proxy.is_realized());
    }

    #[test]
    fn test_first_print_realizes_once() {
        let mut proxy = PrinterProxy::new("Alice", Pacer::OFF);
        let mut buf = Vec::new();
        proxy.print("one", &mut buf).unwrap();
        proxy.print("two", &mut buf).unwrap();
        assert!(proxy.is_realized());

        let output = String::from_utf8(buf).unwrap();
        assert_eq!(output.matches("Creating Printer instance").count(), 1);
        assert!(output.starts_with(
            "Creating Printer instance (Alice).....done.\n"
        ));
        assert!(output.ends_with("=== Alice ===\ntwo\n"));
    }

    #[test]
    fn test_rename_reaches_real_printer() {
        let mut proxy = PrinterProxy::new("Alice", Pacer::OFF);
        proxy.print("x", &mut io::sink()).unwrap();
        proxy.set_printer_name("Carol");
        let mut buf = Vec::new();
        proxy.print("y", &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "=== Carol ===\ny\n");
    }

    #[test]
    fn test_paced_printer_prints_same_dots() {
        let mut buf = Vec::new();
        let printer = Printer::new("Dan", Pacer::from_millis(1), &mut buf)
            .unwrap();
        assert_eq!(printer.printer_name(), "Dan");
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Creating Printer instance (Dan).....done.\n"
        );
    }
}
