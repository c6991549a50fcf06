//! Pattern 17: Observer
//! Example: Number generators broadcasting every new value
//!
//! Run with: cargo run --bin p17_observer
//!
//! Observers get the generator itself on each update and read whatever they
//! need from it. The generator never knows what its observers do.

use std::io::{self, Write};

use rand::rngs::StdRng;
use rand::Rng;

use crate::config::{Pacer, PlaygroundConfig};
use crate::error::Result;

const RNG_STREAM: u64 = 17;

pub trait Observer {
    fn update(&self, generator: &dyn NumberGenerator, out: &mut dyn Write) -> io::Result<()>;
}

pub trait NumberGenerator {
    fn number(&self) -> u32;

    /// Produces every number, notifying observers after each one.
    fn execute(&mut self, out: &mut dyn Write) -> io::Result<()>;

    fn observers(&self) -> &[Box<dyn Observer>];
    fn observers_mut(&mut self) -> &mut Vec<Box<dyn Observer>>;

    fn add_observer(&mut self, observer: Box<dyn Observer>) {
        self.observers_mut().push(observer);
    }

    fn notify_observers(&self, out: &mut dyn Write) -> io::Result<()>
    where
        Self: Sized,
    {
        for observer in self.observers() {
            observer.update(self, out)?;
        }
        Ok(())
    }
}

// =============================================================================
// Generators
// =============================================================================

pub struct RandomNumberGenerator {
    rng: StdRng,
    number: u32,
    count: usize,
    max: u32,
    pacer: Pacer,
    observers: Vec<Box<dyn Observer>>,
}

impl RandomNumberGenerator {
    /// `count` numbers in `0..max`, pausing on `pacer` after each one.
    pub fn new(rng: StdRng, count: usize, max: u32, pacer: Pacer) -> Self {
        Self {
            rng,
            number: 0,
            count,
            max: max.max(1),
            pacer,
            observers: Vec::new(),
        }
    }
}

impl NumberGenerator for RandomNumberGenerator {
    fn number(&self) -> u32 {
        self.number
    }

    fn execute(&mut self, out: &mut dyn Write) -> io::Result<()> {
        for _ in 0..self.count {
            self.number = self.rng.gen_range(0..self.max);
            self.notify_observers(out)?;
            self.pacer.pause();
        }
        Ok(())
    }

    fn observers(&self) -> &[Box<dyn Observer>] {
        &self.observers
    }

    fn observers_mut(&mut self) -> &mut Vec<Box<dyn Observer>> {
        &mut self.observers
    }
}

/// Counts from `start` up to, but not including, `end`.
pub struct IncrementalNumberGenerator {
    number: u32,
    start: u32,
    end: u32,
    step: u32,
    observers: Vec<Box<dyn Observer>>,
}

impl IncrementalNumberGenerator {
    pub fn new(start: u32, end: u32, step: u32) -> Self {
        Self {
            number: start,
            start,
            end,
            step: step.max(1),
            observers: Vec::new(),
        }
    }
}

impl NumberGenerator for IncrementalNumberGenerator {
    fn number(&self) -> u32 {
        self.number
    }

    fn execute(&mut self, out: &mut dyn Write) -> io::Result<()> {
        let values = (self.start..self.end).step_by(self.step as usize);
        for value in values {
            self.number = value;
            self.notify_observers(out)?;
        }
        Ok(())
    }

    fn observers(&self) -> &[Box<dyn Observer>] {
        &self.observers
    }

    fn observers_mut(&mut self) -> &mut Vec<Box<dyn Observer>> {
        &mut self.observers
    }
}

// =============================================================================
// Observers
// =============================================================================

pub struct DigitObserver;

impl Observer for DigitObserver {
    fn update(&self, generator: &dyn NumberGenerator, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "DigitObserver: {}", generator.number())
    }
}

pub struct GraphObserver;

impl Observer for GraphObserver {
    fn update(&self, generator: &dyn NumberGenerator, out: &mut dyn Write) -> io::Result<()> {
        let stars = "*".repeat(generator.number() as usize);
        writeln!(out, "GraphObserver: {stars}")
    }
}

pub fn run(out: &mut dyn Write, config: &PlaygroundConfig) -> Result<()> {
    let mut random = RandomNumberGenerator::new(
        config.rng(RNG_STREAM),
        config.observer.numbers,
        config.observer.max,
        config.pacer(),
    );
    random.add_observer(Box::new(DigitObserver));
    random.add_observer(Box::new(GraphObserver));
    random.execute(out)?;

    writeln!(out)?;
    let mut incremental = IncrementalNumberGenerator::new(10, 50, 5);
    incremental.add_observer(Box::new(GraphObserver));
    incremental.execute(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder(Rc<RefCell<Vec<u32>>>);

    impl Observer for Recorder {
        fn update(&self, generator: &dyn NumberGenerator, _out: &mut dyn Write) -> io::Result<()> {
            self.0.borrow_mut().push(generator.number());
            Ok(())
        }
    }

    #[test]
    fn test_incremental_notifies_each_value() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut generator = IncrementalNumberGenerator::new(10, 50, 10);
        generator.add_observer(Box::new(Recorder(seen.clone())));
        generator.execute(&mut io::sink()).unwrap();
        assert_eq!(*seen.borrow(), [10, 20, 30, 40]);
    }

    #[test]
    fn test_random_numbers_stay_in_range() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let rng = PlaygroundConfig::seeded(4).rng(RNG_STREAM);
        let mut generator = RandomNumberGenerator::new(rng, 30, 50, Pacer::OFF);
        generator.add_observer(Box::new(Recorder(seen.clone())));
        generator.execute(&mut io::sink()).unwrap();
        assert_eq!(seen.borrow().len(), 30);
        assert!(seen.borrow().iter().all(|n| *n < 50));
    }

    #[test]
    fn test_every_observer_sees_every_number() {
        let mut generator = IncrementalNumberGenerator::new(3, 4, 1);
        generator.add_observer(Box::new(DigitObserver));
        generator.add_observer(Box::new(GraphObserver));
        let mut buf = Vec::new();
        generator.execute(&mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "DigitObserver: 3\nGraphObserver: ***\n"
        );
    }

    #[test]
    fn test_page_line_count() {
        let mut buf = Vec::new();
        run(&mut buf, &PlaygroundConfig::seeded(9)).unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert_eq!(output.matches("DigitObserver: ").count(), 20);
        assert_eq!(output.matches("GraphObserver: ").count(), 20 + 8);
    }
}
