//! Pattern 19: State
//! Example: A safe whose behaviour changes between day and night
//!
//! Run with: cargo run --bin p19_state
//!
//! Each state is a small object that knows how to react to every event and
//! when to hand over to the other state. The states carry no data, so one
//! [`StateTable`] is built up front and shared by reference.

use std::fmt;
use std::io::{self, Write};

use crate::config::PlaygroundConfig;
use crate::error::Result;

pub const DAY_START: u32 = 9;
pub const DAY_END: u32 = 17;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateKind {
    Day,
    Night,
}

impl StateKind {
    pub fn for_hour(hour: u32) -> Self {
        if (DAY_START..DAY_END).contains(&hour) {
            StateKind::Day
        } else {
            StateKind::Night
        }
    }
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateKind::Day => f.write_str("Day"),
            StateKind::Night => f.write_str("Night"),
        }
    }
}

/// What a state may ask of the safe it belongs to.
pub trait Context {
    fn set_clock(&mut self, hour: u32) -> io::Result<()>;
    fn change_state(&mut self, kind: StateKind) -> io::Result<()>;
    fn call_security_center(&mut self, msg: &str) -> io::Result<()>;
    fn record_log(&mut self, msg: &str) -> io::Result<()>;
}

pub trait State {
    fn kind(&self) -> StateKind;
    fn do_clock(&self, context: &mut dyn Context, hour: u32) -> io::Result<()>;
    fn do_use(&self, context: &mut dyn Context) -> io::Result<()>;
    fn do_alarm(&self, context: &mut dyn Context) -> io::Result<()>;
    fn do_phone(&self, context: &mut dyn Context) -> io::Result<()>;

    fn name(&self) -> String {
        self.kind().to_string()
    }
}

// =============================================================================
// States
// =============================================================================

pub struct DayState;

impl State for DayState {
    fn kind(&self) -> StateKind {
        StateKind::Day
    }

    fn do_clock(&self, context: &mut dyn Context, hour: u32) -> io::Result<()> {
        if StateKind::for_hour(hour) == StateKind::Night {
            context.change_state(StateKind::Night)?;
        }
        Ok(())
    }

    fn do_use(&self, context: &mut dyn Context) -> io::Result<()> {
        context.record_log("Vault used (day)")
    }

    fn do_alarm(&self, context: &mut dyn Context) -> io::Result<()> {
        context.call_security_center("Emergency bell (day)")
    }

    fn do_phone(&self, context: &mut dyn Context) -> io::Result<()> {
        context.call_security_center("Normal call (day)")
    }
}

pub struct NightState;

impl State for NightState {
    fn kind(&self) -> StateKind {
        StateKind::Night
    }

    fn do_clock(&self, context: &mut dyn Context, hour: u32) -> io::Result<()> {
        if StateKind::for_hour(hour) == StateKind::Day {
            context.change_state(StateKind::Day)?;
        }
        Ok(())
    }

    fn do_use(&self, context: &mut dyn Context) -> io::Result<()> {
        context.call_security_center("EMERGENCY: vault used at night")
    }

    fn do_alarm(&self, context: &mut dyn Context) -> io::Result<()> {
        context.call_security_center("Emergency bell (night)")
    }

    fn do_phone(&self, context: &mut dyn Context) -> io::Result<()> {
        context.record_log("Night call recording")
    }
}

/// One instance of every state.
pub struct StateTable {
    day: DayState,
    night: NightState,
}

impl StateTable {
    pub fn new() -> Self {
        Self {
            day: DayState,
            night: NightState,
        }
    }

    pub fn get(&self, kind: StateKind) -> &dyn State {
        match kind {
            StateKind::Day => &self.day,
            StateKind::Night => &self.night,
        }
    }
}

impl Default for StateTable {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Context
// =============================================================================

pub struct SafeFrame<'s, 'w, W: Write + ?Sized> {
    states: &'s StateTable,
    current: StateKind,
    hour: u32,
    out: &'w mut W,
}

impl<'s, 'w, W: Write + ?Sized> SafeFrame<'s, 'w, W> {
    /// Starts in the day state at noon.
    pub fn new(states: &'s StateTable, out: &'w mut W) -> Self {
        Self {
            states,
            current: StateKind::Day,
            hour: 12,
            out,
        }
    }

    pub fn state(&self) -> StateKind {
        self.current
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn use_vault(&mut self) -> io::Result<()> {
        let states = self.states;
        states.get(self.current).do_use(self)
    }

    pub fn alarm(&mut self) -> io::Result<()> {
        let states = self.states;
        states.get(self.current).do_alarm(self)
    }

    pub fn phone(&mut self) -> io::Result<()> {
        let states = self.states;
        states.get(self.current).do_phone(self)
    }
}

impl<W: Write + ?Sized> Context for SafeFrame<'_, '_, W> {
    fn set_clock(&mut self, hour: u32) -> io::Result<()> {
        self.hour = hour;
        writeln!(self.out, "Time is {hour:02}:00")?;
        let states = self.states;
        states.get(self.current).do_clock(self, hour)
    }

    fn change_state(&mut self, kind: StateKind) -> io::Result<()> {
        log::debug!("safe state {} -> {}", self.current, kind);
        writeln!(self.out, "state: {} -> {}", self.current, kind)?;
        self.current = kind;
        Ok(())
    }

    fn call_security_center(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.out, "call! {msg}")
    }

    fn record_log(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.out, "record... {msg}")
    }
}

pub fn run(out: &mut dyn Write, config: &PlaygroundConfig) -> Result<()> {
    let states = StateTable::new();
    let mut frame = SafeFrame::new(&states, out);
    for hour in 0..24 {
        frame.set_clock(hour)?;
        frame.use_vault()?;
        frame.phone()?;
        config.pause();
    }
    frame.alarm()?;
    Ok(())
}
