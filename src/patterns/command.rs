//! Pattern 22: Command
//! Example: A drawing history that can be replayed and undone
//!
//! Run with: cargo run --bin p22_command
//!
//! Every drawing action is a value implementing [`Command`]. A [`MacroCommand`]
//! is a command made of commands, so the whole history replays with one
//! `execute`. The canvas does not own the history; it is handed in on `paint`.

use std::fmt;
use std::io::{self, Write};

use crate::config::PlaygroundConfig;
use crate::error::Result;

pub const DEFAULT_COLOR: &str = "black";

pub trait Drawable {
    fn draw(&mut self, x: i32, y: i32);
    fn set_color(&mut self, color: &str);
}

pub trait Command: fmt::Debug {
    fn execute(&self, target: &mut dyn Drawable);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCommand {
    x: i32,
    y: i32,
}

impl DrawCommand {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Command for DrawCommand {
    fn execute(&self, target: &mut dyn Drawable) {
        target.draw(self.x, self.y);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorCommand {
    color: String,
}

impl ColorCommand {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
        }
    }
}

impl Command for ColorCommand {
    fn execute(&self, target: &mut dyn Drawable) {
        target.set_color(&self.color);
    }
}

#[derive(Debug, Default)]
pub struct MacroCommand {
    commands: Vec<Box<dyn Command>>,
}

impl MacroCommand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, command: Box<dyn Command>) {
        self.commands.push(command);
    }

    /// Drops the most recent command and hands it back.
    pub fn undo(&mut self) -> Option<Box<dyn Command>> {
        self.commands.pop()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Command for MacroCommand {
    fn execute(&self, target: &mut dyn Drawable) {
        for command in &self.commands {
            command.execute(target);
        }
    }
}

// =============================================================================
// Canvas
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
    pub color: String,
}

#[derive(Debug)]
pub struct DrawCanvas {
    color: String,
    points: Vec<Point>,
}

impl DrawCanvas {
    pub fn new() -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            points: Vec::new(),
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Clears the canvas, replays `history`, then prints what is on it.
    pub fn paint(&mut self, history: &MacroCommand, out: &mut dyn Write) -> io::Result<()> {
        self.points.clear();
        self.color = DEFAULT_COLOR.to_string();
        history.execute(self);
        writeln!(out, "canvas: {} points", self.points.len())?;
        for point in &self.points {
            writeln!(out, "  ({}, {}) {}", point.x, point.y, point.color)?;
        }
        Ok(())
    }
}

impl Default for DrawCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Drawable for DrawCanvas {
    fn draw(&mut self, x: i32, y: i32) {
        self.points.push(Point {
            x,
            y,
            color: self.color.clone(),
        });
    }

    fn set_color(&mut self, color: &str) {
        self.color = color.to_string();
    }
}

pub fn run(out: &mut dyn Write, _config: &PlaygroundConfig) -> Result<()> {
    let mut history = MacroCommand::new();
    let mut canvas = DrawCanvas::new();

    for i in 0..3 {
        history.append(Box::new(DrawCommand::new(10 + i, 10 + i)));
    }
    history.append(Box::new(ColorCommand::new("red")));
    history.append(Box::new(DrawCommand::new(20, 5)));
    history.append(Box::new(DrawCommand::new(21, 5)));
    canvas.paint(&history, out)?;

    if let Some(undone) = history.undo() {
        writeln!(out, "undo: {undone:?}")?;
    }
    canvas.paint(&history, out)?;

    history.clear();
    writeln!(out, "clear")?;
    canvas.paint(&history, out)?;
    Ok(())
}
