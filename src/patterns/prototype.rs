//! Pattern 6: Prototype
//! Example: Creating new instances by copying registered ones
//!
//! Run with: cargo run --bin p06_prototype

use std::collections::HashMap;
use std::io::{self, Write};

use crate::config::PlaygroundConfig;
use crate::error::{PlaygroundError, Result};

pub trait Product {
    fn use_with(&self, text: &str, out: &mut dyn Write) -> io::Result<()>;
    fn clone_box(&self) -> Box<dyn Product>;
}

/// Knows prototypes only by name, never by concrete type.
#[derive(Default)]
pub struct Manager {
    showcase: HashMap<String, Box<dyn Product>>,
}

impl Manager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, prototype: Box<dyn Product>) {
        self.showcase.insert(name.into(), prototype);
    }

    pub fn create(&self, name: &str) -> Option<Box<dyn Product>> {
        let copy = self.showcase.get(name).map(|p| p.clone_box());
        if copy.is_none() {
            log::warn!("no prototype named '{name}'");
        }
        copy
    }
}

#[derive(Clone)]
pub struct MessageBox {
    deco: char,
}

impl MessageBox {
    pub fn new(deco: char) -> Self {
        Self { deco }
    }
}

impl Product for MessageBox {
    fn use_with(&self, text: &str, out: &mut dyn Write) -> io::Result<()> {
        let edge: String = std::iter::repeat(self.deco)
            .take(text.chars().count() + 2)
            .collect();
        writeln!(out, "{edge}")?;
        writeln!(out, "{}{}{}", self.deco, text, self.deco)?;
        writeln!(out, "{edge}")
    }

    fn clone_box(&self) -> Box<dyn Product> {
        Box::new(self.clone())
    }
}

#[derive(Clone)]
pub struct UnderlinePen {
    underline: char,
}

impl UnderlinePen {
    pub fn new(underline: char) -> Self {
        Self { underline }
    }
}

impl Product for UnderlinePen {
    fn use_with(&self, text: &str, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{text}")?;
        let line: String = text.chars().map(|_| self.underline).collect();
        writeln!(out, "{line}")
    }

    fn clone_box(&self) -> Box<dyn Product> {
        Box::new(self.clone())
    }
}

/// Copies the prototype registered as `name` and uses the copy on `text`.
pub fn use_prototype(manager: &Manager, name: &str, text: &str, out: &mut dyn Write) -> Result<()> {
    let product = manager
        .create(name)
        .ok_or_else(|| PlaygroundError::UnknownPrototype(name.to_string()))?;
    product.use_with(text, out)?;
    Ok(())
}

pub fn run(out: &mut dyn Write, _config: &PlaygroundConfig) -> Result<()> {
    let mut manager = Manager::new();
    manager.register("strong1", Box::new(MessageBox::new('*')));
    manager.register("strong2", Box::new(MessageBox::new('/')));
    manager.register("line", Box::new(UnderlinePen::new('-')));

    for (i, name) in ["strong1", "strong2", "line"].into_iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        use_prototype(&manager, name, "helloWorld", out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(product: &dyn Product, text: &str) -> String {
        let mut buf = Vec::new();
        product.use_with(text, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_message_box() {
        assert_eq!(
            render(&MessageBox::new('*'), "hey"),
            "*****\n*hey*\n*****\n"
        );
    }

    #[test]
    fn test_underline_pen() {
        assert_eq!(render(&UnderlinePen::new('~'), "abc"), "abc\n~~~\n");
    }

    #[test]
    fn test_manager_returns_independent_copies() {
        let mut manager = Manager::new();
        manager.register("box", Box::new(MessageBox::new('#')));

        let a = manager.create("box").unwrap();
        let b = manager.create("box").unwrap();
        assert!(!std::ptr::eq(
            a.as_ref() as *const dyn Product as *const u8,
            b.as_ref() as *const dyn Product as *const u8
        ));
        assert_eq!(render(a.as_ref(), "x"), render(b.as_ref(), "x"));
    }

    #[test]
    fn test_unknown_prototype() {
        let manager = Manager::new();
        assert!(manager.create("missing").is_none());
    }

    #[test]
    fn test_use_prototype_maps_missing_name() {
        let mut manager = Manager::new();
        manager.register("line", Box::new(UnderlinePen::new('-')));

        let mut buf = Vec::new();
        let err = use_prototype(&manager, "strong1", "hi", &mut buf)
            .unwrap_err();
        assert!(matches!(err, PlaygroundError::UnknownPrototype(ref name) if name == "strong1"));
        assert!(buf.is_empty());

        use_prototype(&manager, "line", "hi", &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "hi\n--\n");
    }

    #[test]
    fn test_page_output() {
        let mut buf = Vec::new();
        run(&mut buf, &PlaygroundConfig::default()).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "************\n*helloWorld*\n************\n\n\
             ////////////\n/helloWorld/\n////////////\n\n\
             helloWorld\n----------\n"
        );
    }
}
