//! Pattern 20: Flyweight
//! Example: Big characters built once and shared between strings
//!
//! Run with: cargo run --bin p20_flyweight
//!
//! `BigCharFactory` keeps one `BigChar` per character. Strings built through
//! the same factory hold `Rc`s into that pool, so repeated letters cost one
//! pointer each instead of another copy of the font data.

use std::io::{self, Write};
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::config::PlaygroundConfig;
use crate::error::Result;

const LEAD: usize = 21;
const TAIL: usize = 26;

#[derive(Debug)]
pub struct BigChar {
    ch: char,
    font_data: String,
}

impl BigChar {
    /// Builds the font data for `ch`. This is the expensive part the pool avoids.
    pub fn new(ch: char) -> Self {
        log::debug!("building big char '{ch}'");
        let font_data = format!("{}{}{}", "-".repeat(LEAD), ch, "-".repeat(TAIL));
        Self { ch, font_data }
    }

    pub fn ch(&self) -> char {
        self.ch
    }

    pub fn font_data(&self) -> &str {
        &self.font_data
    }

    pub fn print(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.font_data)
    }
}

#[derive(Debug, Default)]
pub struct BigCharFactory {
    pool: FxHashMap<char, Rc<BigChar>>,
}

impl BigCharFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_big_char(&mut self, ch: char) -> Rc<BigChar> {
        self.pool
            .entry(ch)
            .or_insert_with(|| Rc::new(BigChar::new(ch)))
            .clone()
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    pub fn contains(&self, ch: char) -> bool {
        self.pool.contains_key(&ch)
    }
}

pub struct BigString {
    chars: Vec<Rc<BigChar>>,
}

impl BigString {
    /// Shares characters through `factory`.
    pub fn new(text: &str, factory: &mut BigCharFactory) -> Self {
        Self {
            chars: text.chars().map(|ch| factory.get_big_char(ch)).collect(),
        }
    }

    /// Builds every character afresh, for comparison with [`new`](Self::new).
    pub fn new_unshared(text: &str) -> Self {
        Self {
            chars: text.chars().map(|ch| Rc::new(BigChar::new(ch))).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Number of distinct `BigChar` allocations behind this string.
    pub fn distinct_instances(&self) -> usize {
        let mut seen: Vec<*const BigChar> = self.chars.iter().map(Rc::as_ptr).collect();
        seen.sort();
        seen.dedup();
        seen.len()
    }

    pub fn print(&self, out: &mut dyn Write) -> io::Result<()> {
        for big in &self.chars {
            big.print(out)?;
        }
        Ok(())
    }
}

pub fn run(out: &mut dyn Write, _config: &PlaygroundConfig) -> Result<()> {
    let mut factory = BigCharFactory::new();
    let shared = BigString::new("HelloWorld", &mut factory);
    shared.print(out)?;
    writeln!(
        out,
        "{} characters, {} pooled in the factory",
        shared.len(),
        factory.len()
    )?;

    let unshared = BigString::new_unshared("HelloWorld");
    writeln!(
        out,
        "without sharing: {} separate instances",
        unshared.distinct_instances()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_data_layout() {
        let big = BigChar::new('x');
        assert_eq!(big.font_data().len(), LEAD + 1 + TAIL);
        assert_eq!(big.font_data().chars().nth(LEAD), Some('x'));
        assert!(big.font_data().starts_with("---------------------x-"));
    }

    #[test]
    fn test_pool_holds_distinct_chars() {
        let mut factory = BigCharFactory::new();
        let text = BigString::new("HelloWorld", &mut factory);
        assert_eq!(text.len(), 10);
        assert_eq!(factory.len(), 7);
        for ch in ['H', 'e', 'l', 'o', 'W', 'r', 'd'] {
            assert!(factory.contains(ch));
        }
        assert_eq!(text.distinct_instances(), 7);
    }

    #[test]
    fn test_factory_returns_same_instance() {
        let mut factory = BigCharFactory::new();
        let a = factory.get_big_char('a');
        let b = factory.get_big_char('a');
        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(a.ch(), 'a');
    }

    #[test]
    fn test_pool_is_shared_across_strings() {
        let mut factory = BigCharFactory::new();
        let first = BigString::new("abc", &mut factory);
        let second = BigString::new("cab", &mut factory);
        assert_eq!(factory.len(), 3);
        assert!(Rc::ptr_eq(&first.chars[0], &second.chars[1]));
    }

    #[test]
    fn test_unshared_allocates_per_char() {
        let text = BigString::new_unshared("HelloWorld");
        assert_eq!(text.distinct_instances(), 10);
    }

    #[test]
    fn test_empty_string() {
        let mut factory = BigCharFactory::new();
        let text = BigString::new("", &mut factory);
        assert!(text.is_empty());
        assert!(factory.is_empty());
    }
}
