//! Pattern 18: Memento
//! Example: A dice gamer who saves good states and falls back to them
//!
//! Run with: cargo run --bin p18_memento
//!
//! The memento's fields are private to this module. Outside code can hold a
//! `Memento` and read its money, but only the `Gamer` can look inside it.

use std::fmt;
use std::io::{self, Write};

use itertools::Itertools;
use rand::rngs::StdRng;
use rand::Rng;

use crate::config::PlaygroundConfig;
use crate::error::Result;

const RNG_STREAM: u64 = 18;
const FRUITS: [&str; 4] = ["apple", "grape", "banana", "orange"];
const DELICIOUS: &str = "delicious ";
/// Added on a roll of 1. Money caps at `u32::MAX`.
const WINNINGS: u32 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct Memento {
    money: u32,
    fruits: Vec<String>,
}

impl Memento {
    pub fn money(&self) -> u32 {
        self.money
    }
}

pub struct Gamer {
    money: u32,
    fruits: Vec<String>,
    rng: StdRng,
}

impl Gamer {
    pub fn new(money: u32, rng: StdRng) -> Self {
        Self {
            money,
            fruits: Vec::new(),
            rng,
        }
    }

    pub fn money(&self) -> u32 {
        self.money
    }

    pub fn fruits(&self) -> &[String] {
        &self.fruits
    }

    /// Rolls one die and applies its effect.
    pub fn bet(&mut self, out: &mut dyn Write) -> io::Result<()> {
        let dice = self.rng.gen_range(1..=6);
        writeln!(out, "The dice rolled {dice}.")?;
        match dice {
            1 => {
                self.money = self.money.saturating_add(WINNINGS);
                writeln!(out, "Money has increased.")
            }
            2 => {
                self.money /= 2;
                writeln!(out, "Money has been halved.")
            }
            6 => {
                let fruit = self.random_fruit();
                writeln!(out, "Got a fruit ({fruit}).")?;
                self.fruits.push(fruit);
                Ok(())
            }
            _ => writeln!(out, "Nothing happened."),
        }
    }

    /// Only delicious fruits are worth keeping.
    pub fn create_memento(&self) -> Memento {
        Memento {
            money: self.money,
            fruits: self
                .fruits
                .iter()
                .filter(|fruit| fruit.starts_with(DELICIOUS))
                .cloned()
                .collect(),
        }
    }

    pub fn restore_memento(&mut self, memento: &Memento) {
        self.money = memento.money;
        self.fruits = memento.fruits.clone();
    }

    fn random_fruit(&mut self) -> String {
        let name = FRUITS[self.rng.gen_range(0..FRUITS.len())];
        if self.rng.gen_bool(0.5) {
            format!("{DELICIOUS}{name}")
        } else {
            name.to_string()
        }
    }
}

impl fmt::Display for Gamer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[money = {}, fruits = [{}]]",
            self.money,
            self.fruits.iter().join(", ")
        )
    }
}

pub fn run(out: &mut dyn Write, config: &PlaygroundConfig) -> Result<()> {
    let mut gamer = Gamer::new(config.memento.starting_money, config.rng(RNG_STREAM));
    let mut memento = gamer.create_memento();

    for round in 0..config.memento.rounds {
        writeln!(out, "==== {round}")?;
        writeln!(out, "Current state: {gamer}")?;
        gamer.bet(out)?;
        writeln!(out, "Money is now {}.", gamer.money())?;

        if gamer.money() > memento.money() {
            writeln!(out, "    (Money has grown, saving the current state.)")?;
            memento = gamer.create_memento();
        } else if gamer.money() <= memento.money() / 2 {
            writeln!(
                out,
                "    (Money has dropped a lot, restoring the saved state.)"
            )?;
            gamer.restore_memento(&memento);
            log::debug!("restored to {gamer}");
        }
        writeln!(out)?;
        config.pause();
    }
    Ok(())
}
