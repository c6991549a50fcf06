//! Pattern 5: Singleton
//! Example: A lazily created, process-wide instance
//!
//! Run with: cargo run --bin p05_singleton
//!
//! The instance is built on first access, so `Start` is printed before
//! `init called`.

use std::io::Write;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use lazy_static::lazy_static;

use crate::config::PlaygroundConfig;
use crate::error::Result;

static INIT_COUNT: AtomicUsize = AtomicUsize::new(0);

lazy_static! {
    static ref INSTANCE: Singleton = Singleton::new();
    static ref TICKET_MAKER: TicketMaker = TicketMaker::new(TicketMaker::FIRST_TICKET);
}

pub struct Singleton {
    _private: (),
}

impl Singleton {
    fn new() -> Self {
        println!("init called");
        log::debug!("singleton initialised");
        INIT_COUNT.fetch_add(1, Ordering::SeqCst);
        Self { _private: () }
    }

    pub fn instance() -> &'static Singleton {
        &INSTANCE
    }

    /// How many times the constructor has run in this process. Never above 1.
    pub fn init_count() -> usize {
        INIT_COUNT.load(Ordering::SeqCst)
    }
}

/// Hands out unique ticket numbers to the whole process.
pub struct TicketMaker {
    next: AtomicU64,
}

impl TicketMaker {
    pub const FIRST_TICKET: u64 = 1000;

    fn new(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    pub fn instance() -> &'static TicketMaker {
        &TICKET_MAKER
    }

    pub fn next_ticket(&self) -> u64 {
        self.next.fetch_add(1, Ordering::SeqCst)
    }
}

pub fn run(out: &mut dyn Write, _config: &PlaygroundConfig) -> Result<()> {
    writeln!(out, "Start")?;
    // The constructor prints straight to stdout; flush so the order holds.
    out.flush()?;

    let first = Singleton::instance();
    let second = Singleton::instance();
    if std::ptr::eq(first, second) {
        writeln!(out, "first and second are the same instance")?;
    } else {
        writeln!(out, "first and second are different instances")?;
    }

    let maker = TicketMaker::instance();
    for _ in 0..3 {
        writeln!(out, "ticket: {}", maker.next_ticket())?;
    }
    writeln!(out, "End")?;
    Ok(())
}
