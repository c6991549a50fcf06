//! Pattern 14: Chain of Responsibility
//! Example: Passing a trouble along a line of support staff
//!
//! Run with: cargo run --bin p14_chain_of_responsibility
//!
//! Supports live in an arena and point at their successor by index, so the
//! chain is a plain `Vec` with no shared ownership. Linking refuses anything
//! that would make the walk loop forever.

use std::fmt;
use std::io::Write;

use crate::config::PlaygroundConfig;
use crate::error::{PlaygroundError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trouble(pub u32);

impl Trouble {
    pub fn number(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Trouble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Trouble {}]", self.0)
    }
}

/// What a support is able to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolver {
    NoSupport,
    /// Numbers strictly below the limit.
    Limit(u32),
    Odd,
    /// Exactly one number.
    Special(u32),
}

impl Resolver {
    pub fn resolves(self, trouble: Trouble) -> bool {
        let n = trouble.number();
        match self {
            Resolver::NoSupport => false,
            Resolver::Limit(limit) => n < limit,
            Resolver::Odd => n % 2 == 1,
            Resolver::Special(number) => n == number,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Support {
    name: String,
    resolver: Resolver,
}

impl Support {
    pub fn new(name: impl Into<String>, resolver: Resolver) -> Self {
        Self {
            name: name.into(),
            resolver,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn resolver(&self) -> Resolver {
        self.resolver
    }
}

impl fmt::Display for Support {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SupportId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Resolved(SupportId),
    Unresolved,
}

// =============================================================================
// Arena
// =============================================================================

#[derive(Debug, Default)]
pub struct SupportChain {
    nodes: Vec<Support>,
    next: Vec<Option<SupportId>>,
}

impl SupportChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, support: Support) -> SupportId {
        self.nodes.push(support);
        self.next.push(None);
        SupportId(self.nodes.len() - 1)
    }

    /// `None` for an id handed out by a different chain.
    pub fn get(&self, id: SupportId) -> Option<&Support> {
        self.nodes.get(id.0)
    }

    pub fn next_of(&self, id: SupportId) -> Option<SupportId> {
        self.next.get(id.0).copied().flatten()
    }

    /// Makes `to` the successor of `from` and returns `to`, so calls chain.
    ///
    /// Fails with [`PlaygroundError::ChainCycle`] when `from` is reachable
    /// from `to`, since the walk would then never end, and with
    /// [`PlaygroundError::UnknownSupport`] for ids from another chain.
    pub fn set_next(&mut self, from: SupportId, to: SupportId) -> Result<SupportId> {
        for id in [from, to] {
            if id.0 >= self.nodes.len() {
                return Err(PlaygroundError::UnknownSupport(id.0));
            }
        }
        let mut cursor = Some(to);
        while let Some(id) = cursor {
            if id == from {
                return Err(PlaygroundError::ChainCycle {
                    from: from.0,
                    to: to.0,
                });
            }
            cursor = self.next_of(id);
        }
        self.next[from.0] = Some(to);
        Ok(to)
    }

    /// Links the given supports in order.
    pub fn link(&mut self, ids: &[SupportId]) -> Result<()> {
        for pair in ids.windows(2) {
            self.set_next(pair[0], pair[1])?;
        }
        Ok(())
    }

    /// Walks from `start` until some support resolves the trouble. A `start`
    /// from another chain resolves nothing.
    pub fn support(&self, start: SupportId, trouble: Trouble) -> Outcome {
        let mut cursor = Some(start);
        while let Some(id) = cursor {
            let support = match self.get(id) {
                Some(support) => support,
                None => break,
            };
            if support.resolver().resolves(trouble) {
                log::debug!("{trouble} resolved by {support}");
                return Outcome::Resolved(id);
            }
            cursor = self.next_of(id);
        }
        Outcome::Unresolved
    }

    pub fn describe(&self, trouble: Trouble, outcome: Outcome) -> String {
        let resolver = match outcome {
            Outcome::Resolved(id) => self.get(id),
            Outcome::Unresolved => None,
        };
        match resolver {
            Some(support) => format!("{trouble} is resolved by {support}."),
            None => format!("{trouble} cannot be resolved."),
        }
    }
}

/// Alice → Bob → Charlie → Diana → Elmo → Fred. Returns the chain and its head.
pub fn standard_chain() -> Result<(SupportChain, SupportId)> {
    let mut chain = SupportChain::new();
    let alice = chain.add(Support::new("Alice", Resolver::NoSupport));
    let bob = chain.add(Support::new("Bob", Resolver::Limit(100)));
    let charlie = chain.add(Support::new("Charlie", Resolver::Special(429)));
    let diana = chain.add(Support::new("Diana", Resolver::Limit(200)));
    let elmo = chain.add(Support::new("Elmo", Resolver::Odd));
    let fred = chain.add(Support::new("Fred", Resolver::Limit(300)));
    chain.link(&[alice, bob, charlie, diana, elmo, fred])?;
    Ok((chain, alice))
}

pub fn run(out: &mut dyn Write, config: &PlaygroundConfig) -> Result<()> {
    let (chain, head) = standard_chain()?;
    for n in 0..config.chain.troubles {
        let trouble = Trouble(n);
        let outcome = chain.support(head, trouble);
        writeln!(out, "{}", chain.describe(trouble, outcome))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver_name(chain: &SupportChain, head: SupportId, n: u32) -> Option<&str> {
        match chain.support(head, Trouble(n)) {
            Outcome::Resolved(id) => chain.get(id).map(Support::name),
            Outcome::Unresolved => None,
        }
    }

    #[test]
    fn test_standard_chain_rules() {
        let (chain, head) = standard_chain().unwrap();
        assert_eq!(resolver_name(&chain, head, 0), Some("Bob"));
        assert_eq!(resolver_name(&chain, head, 99), Some("Bob"));
        assert_eq!(resolver_name(&chain, head, 150), Some("Diana"));
        assert_eq!(resolver_name(&chain, head, 201), Some("Elmo"));
        assert_eq!(resolver_name(&chain, head, 202), Some("Fred"));
        assert_eq!(resolver_name(&chain, head, 429), Some("Charlie"));
        assert_eq!(resolver_name(&chain, head, 300), None);
        assert_eq!(resolver_name(&chain, head, 498), None);
    }

    #[test]
    fn test_every_trouble_gets_one_line() {
        let mut buf = Vec::new();
        run(&mut buf, &PlaygroundConfig::default()).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 500);
        assert_eq!(lines[0], "[Trouble 0] is resolved by [Bob].");
        assert_eq!(lines[429], "[Trouble 429] is resolved by [Charlie].");
        assert_eq!(lines[300], "[Trouble 300] cannot be resolved.");
    }

    #[test]
    fn test_set_next_rejects_cycles() {
        let mut chain = SupportChain::new();
        let a = chain.add(Support::new("A", Resolver::NoSupport));
        let b = chain.add(Support::new("B", Resolver::NoSupport));
        chain.set_next(a, b).unwrap();
        let err = chain.set_next(b, a).unwrap_err();
        assert!(matches!(
            err,
            PlaygroundError::ChainCycle { from: 1, to: 0 }
        ));
        assert!(chain.set_next(a, a).is_err());
        assert_eq!(chain.next_of(b), None);
    }

    #[test]
    fn test_relinking_changes_the_walk() {
        let mut chain = SupportChain::new();
        let a = chain.add(Support::new("A", Resolver::NoSupport));
        let b = chain.add(Support::new("B", Resolver::Odd));
        let c = chain.add(Support::new("C", Resolver::Limit(10)));
        chain.link(&[a, b, c]).unwrap();
        assert_eq!(chain.support(a, Trouble(3)), Outcome::Resolved(b));

        chain.set_next(a, c).unwrap();
        assert_eq!(chain.support(a, Trouble(3)), Outcome::Resolved(c));
        assert_eq!(chain.support(a, Trouble(11)), Outcome::Unresolved);
    }

    #[test]
    fn test_ids_from_another_chain() {
        let (chain, _) = standard_chain().unwrap();
        let mut small = SupportChain::new();
        let only = small.add(Support::new("Solo", Resolver::Limit(10)));

        let mut other = SupportChain::new();
        for name in ["A", "B", "C", "D", "E", "F", "G"] {
            other.add(Support::new(name, Resolver::Odd));
        }
        let foreign = other.add(Support::new("H", Resolver::Odd));

        assert!(chain.get(foreign).is_none());
        assert_eq!(chain.next_of(foreign), None);
        assert_eq!(chain.support(foreign, Trouble(1)), Outcome::Unresolved);
        assert_eq!(
            chain.describe(Trouble(1), Outcome::Resolved(foreign)),
            "[Trouble 1] cannot be resolved."
        );

        let err = small.set_next(only, foreign).unwrap_err();
        assert!(matches!(err, PlaygroundError::UnknownSupport(7)));
        assert_eq!(small.next_of(only), None);
    }
}
