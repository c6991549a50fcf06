//! Pattern 4: Factory Method
//! Example: A framework that creates and registers products it knows nothing about
//!
//! Run with: cargo run --bin p04_factory_method
//!
//! `Factory::create` is a template method applied to construction: the
//! framework fixes "create, then register" and the concrete factory decides
//! what gets created.

use std::fmt;
use std::io::{self, Write};

use crate::config::PlaygroundConfig;
use crate::error::Result;

// =============================================================================
// Framework side
// =============================================================================

pub trait Product: fmt::Display {
    fn use_product(&self, out: &mut dyn Write) -> io::Result<()>;
    fn owner(&self) -> &str;
}

pub trait Factory {
    fn create_product(&mut self, owner: &str, out: &mut dyn Write) -> io::Result<Box<dyn Product>>;
    fn register_product(&mut self, product: &dyn Product, out: &mut dyn Write) -> io::Result<()>;

    fn create(&mut self, owner: &str, out: &mut dyn Write) -> io::Result<Box<dyn Product>> {
        let product = self.create_product(owner, out)?;
        self.register_product(product.as_ref(), out)?;
        Ok(product)
    }
}

// =============================================================================
// ID card side
// =============================================================================

pub struct IdCard {
    owner: String,
    serial: u32,
}

impl IdCard {
    fn new(owner: &str, serial: u32, out: &mut dyn Write) -> io::Result<Self> {
        writeln!(out, "Creating a card for {owner}.")?;
        Ok(Self {
            owner: owner.to_string(),
            serial,
        })
    }

    pub fn serial(&self) -> u32 {
        self.serial
    }
}

impl fmt::Display for IdCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IDCard {} (#{})", self.owner, self.serial)
    }
}

impl Product for IdCard {
    fn use_product(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Using {self}.")
    }

    fn owner(&self) -> &str {
        &self.owner
    }
}

pub struct IdCardFactory {
    next_serial: u32,
    /// Serial handed out by `create_product` and not yet registered.
    pending: Option<u32>,
    owners: Vec<(u32, String)>,
}

impl IdCardFactory {
    pub const FIRST_SERIAL: u32 = 100;

    pub fn new() -> Self {
        Self {
            next_serial: Self::FIRST_SERIAL,
            pending: None,
            owners: Vec::new(),
        }
    }

    /// `(serial, owner)` for every registered card, in registration order.
    pub fn owners(&self) -> &[(u32, String)] {
        &self.owners
    }

    fn issue_serial(&mut self) -> u32 {
        let serial = self.next_serial;
        self.next_serial += 1;
        serial
    }
}

impl Default for IdCardFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl Factory for IdCardFactory {
    fn create_product(&mut self, owner: &str, out: &mut dyn Write) -> io::Result<Box<dyn Product>> {
        let serial = self.issue_serial();
        let card = IdCard::new(owner, serial, out)?;
        self.pending = Some(serial);
        Ok(Box::new(card))
    }

    // A real system would persist the card here. Products made elsewhere get
    // a fresh serial.
    fn register_product(&mut self, product: &dyn Product, out: &mut dyn Write) -> io::Result<()> {
        let serial = match self.pending.take() {
            Some(serial) => serial,
            None => self.issue_serial(),
        };
        writeln!(out, "Registered {product}.")?;
        self.owners.push((serial, product.owner().to_string()));
        Ok(())
    }
}

pub fn run(out: &mut dyn Write, _config: &PlaygroundConfig) -> Result<()> {
    let mut factory = IdCardFactory::new();
    let cards = ["Yamada", "Tamura", "Suzuki"]
        .into_iter()
        .map(|owner| factory.create(owner, out))
        .collect::<io::Result<Vec<_>>>()?;

    for card in &cards {
        card.use_product(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_registers_in_order() {
        let mut factory = IdCardFactory::new();
        let mut sink = Vec::new();
        factory.create("Ann", &mut sink).unwrap();
        factory.create("Ben", &mut sink).unwrap();

        assert_eq!(
            factory.owners(),
            [(100, "Ann".to_string()), (101, "Ben".to_string())]
        );
        let output = String::from_utf8(sink).unwrap();
        assert_eq!(
            output,
            "Creating a card for Ann.\nRegistered IDCard Ann (#100).\n\
             Creating a card for Ben.\nRegistered IDCard Ben (#101).\n"
        );
    }

    #[test]
    fn test_id_card_accessors() {
        let card = IdCard::new("Cho", 7, &mut io::sink()).unwrap();
        assert_eq!(card.owner(), "Cho");
        assert_eq!(card.serial(), 7);
        assert_eq!(card.to_string(), "IDCard Cho (#7)");
    }

    #[test]
    fn test_page_uses_every_card() {
        let mut buf = Vec::new();
        run(&mut buf, &PlaygroundConfig::default()).unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert_eq!(output.matches("Creating a card").count(), 3);
        assert!(output.ends_with(
            "Using IDCard Yamada (#100).\n\
             Using IDCard Tamura (#101).\n\
             Using IDCard Suzuki (#102).\n"
        ));
    }

    #[test]
    fn test_product_owner_through_trait() {
        let mut factory = IdCardFactory::new();
        let card = factory.create("Dana", &mut io::sink()).unwrap();
        assert_eq!(card.owner(), "Dana");
        assert_eq!(card.to_string(), "IDCard Dana (#100)");
    }

    #[test]
    fn test_register_foreign_product_gets_new_serial() {
        let mut factory = IdCardFactory::new();
        factory.create("Eve", &mut io::sink()).unwrap();
        let outside = IdCard::new("Fay", 999, &mut io::sink()).unwrap();
        factory.register_product(&outside, &mut io::sink()).unwrap();
        assert_eq!(
            factory.owners(),
            [(100, "Eve".to_string()), (101, "Fay".to_string())]
        );
    }
}
