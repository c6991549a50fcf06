//! Pattern 16: Mediator
//! Example: A login dialog whose widgets never talk to each other
//!
//! Run with: cargo run --bin p16_mediator
//!
//! Widgets report changes to the frame, and the frame alone decides who is
//! enabled. The frame owns every widget in an arena keyed by [`ColleagueId`],
//! so widgets need no reference back to it.

use std::fmt;
use std::io::{self, Write};

use crate::config::PlaygroundConfig;
use crate::error::Result;

pub trait Colleague {
    fn set_colleague_enabled(&mut self, enabled: bool);
    fn is_enabled(&self) -> bool;
}

pub trait Mediator {
    /// Re-evaluates every widget after `changed` reported a change.
    fn colleague_changed(&mut self, changed: ColleagueId);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColleagueId {
    CheckGuest,
    CheckLogin,
    TextUser,
    TextPass,
    ButtonOk,
    ButtonCancel,
}

impl ColleagueId {
    pub const ALL: [ColleagueId; 6] = [
        ColleagueId::CheckGuest,
        ColleagueId::CheckLogin,
        ColleagueId::TextUser,
        ColleagueId::TextPass,
        ColleagueId::ButtonOk,
        ColleagueId::ButtonCancel,
    ];
}

// =============================================================================
// Widgets
// =============================================================================

#[derive(Debug)]
pub struct CheckBox {
    caption: String,
    checked: bool,
    enabled: bool,
}

impl CheckBox {
    pub fn new(caption: impl Into<String>, checked: bool) -> Self {
        Self {
            caption: caption.into(),
            checked,
            enabled: true,
        }
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }
}

impl Colleague for CheckBox {
    fn set_colleague_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[derive(Debug)]
pub struct TextField {
    caption: String,
    text: String,
    enabled: bool,
}

impl TextField {
    pub fn new(caption: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            text: String::new(),
            enabled: true,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn background(&self) -> &'static str {
        if self.enabled {
            "white"
        } else {
            "lightGray"
        }
    }
}

impl Colleague for TextField {
    fn set_colleague_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[derive(Debug)]
pub struct Button {
    caption: String,
    enabled: bool,
}

impl Button {
    pub fn new(caption: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            enabled: true,
        }
    }
}

impl Colleague for Button {
    fn set_colleague_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

enum Widget {
    Check(CheckBox),
    Text(TextField),
    Button(Button),
}

impl Widget {
    fn colleague(&self) -> &dyn Colleague {
        match self {
            Widget::Check(check) => check,
            Widget::Text(text) => text,
            Widget::Button(button) => button,
        }
    }

    fn colleague_mut(&mut self) -> &mut dyn Colleague {
        match self {
            Widget::Check(check) => check,
            Widget::Text(text) => text,
            Widget::Button(button) => button,
        }
    }

    fn caption(&self) -> &str {
        match self {
            Widget::Check(check) => &check.caption,
            Widget::Text(text) => &text.caption,
            Widget::Button(button) => &button.caption,
        }
    }
}

impl fmt::Display for Widget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.colleague().is_enabled() {
            "enabled"
        } else {
            "disabled"
        };
        match self {
            Widget::Check(check) => {
                let mark = if check.checked { "(*)" } else { "( )" };
                write!(f, "{mark} {:<8} {state}", check.caption)
            }
            Widget::Text(text) => write!(
                f,
                "[{}] {:<8} {state}, {}",
                text.text,
                text.caption,
                text.background()
            ),
            Widget::Button(button) => write!(f, "<{}> {state}", button.caption),
        }
    }
}

// =============================================================================
// Frame
// =============================================================================

pub struct LoginFrame {
    widgets: Vec<Widget>,
}

impl LoginFrame {
    /// A fresh dialog with "Guest" selected.
    pub fn new() -> Self {
        // Order must match `ColleagueId`.
        let widgets = vec![
            Widget::Check(CheckBox::new("Guest", true)),
            Widget::Check(CheckBox::new("Login", false)),
            Widget::Text(TextField::new("Username")),
            Widget::Text(TextField::new("Password")),
            Widget::Button(Button::new("OK")),
            Widget::Button(Button::new("Cancel")),
        ];
        let mut frame = Self { widgets };
        frame.colleague_changed(ColleagueId::CheckGuest);
        frame
    }

    fn widget(&self, id: ColleagueId) -> &Widget {
        &self.widgets[id as usize]
    }

    fn widget_mut(&mut self, id: ColleagueId) -> &mut Widget {
        &mut self.widgets[id as usize]
    }

    pub fn colleague(&self, id: ColleagueId) -> &dyn Colleague {
        self.widget(id).colleague()
    }

    pub fn is_enabled(&self, id: ColleagueId) -> bool {
        self.colleague(id).is_enabled()
    }

    fn set_enabled(&mut self, id: ColleagueId, enabled: bool) {
        self.widget_mut(id)
            .colleague_mut()
            .set_colleague_enabled(enabled);
    }

    fn is_checked(&self, id: ColleagueId) -> bool {
        matches!(self.widget(id), Widget::Check(check) if check.is_checked())
    }

    pub fn text(&self, id: ColleagueId) -> &str {
        match self.widget(id) {
            Widget::Text(field) => field.text(),
            _ => "",
        }
    }

    pub fn select_guest(&mut self) {
        self.select(ColleagueId::CheckGuest);
    }

    pub fn select_login(&mut self) {
        self.select(ColleagueId::CheckLogin);
    }

    /// Radio semantics: checking one box clears the other.
    fn select(&mut self, id: ColleagueId) {
        for other in [ColleagueId::CheckGuest, ColleagueId::CheckLogin] {
            if let Widget::Check(check_box) = self.widget_mut(other) {
                check_box.checked = other == id;
            }
        }
        self.colleague_changed(id);
    }

    /// Typing into a disabled field is ignored.
    pub fn type_text(&mut self, id: ColleagueId, text: &str) {
        match self.widget_mut(id) {
            Widget::Text(field) if field.is_enabled() => field.text = text.to_string(),
            _ => return,
        }
        self.colleague_changed(id);
    }

    pub fn print_state(&self, out: &mut dyn Write) -> io::Result<()> {
        for widget in &self.widgets {
            writeln!(out, "  {widget}")?;
        }
        Ok(())
    }
}

impl Default for LoginFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl Mediator for LoginFrame {
    fn colleague_changed(&mut self, changed: ColleagueId) {
        use ColleagueId::*;
        log::debug!("{} changed", self.widget(changed).caption());

        if self.is_checked(CheckGuest) {
            self.set_enabled(TextUser, false);
            self.set_enabled(TextPass, false);
            self.set_enabled(ButtonOk, true);
        } else {
            let has_user = !self.text(TextUser).is_empty();
            let has_pass = !self.text(TextPass).is_empty();
            self.set_enabled(TextUser, true);
            self.set_enabled(TextPass, has_user);
            self.set_enabled(ButtonOk, has_user && has_pass);
        }
        self.set_enabled(ButtonCancel, true);
    }
}

pub fn run(out: &mut dyn Write, _config: &PlaygroundConfig) -> Result<()> {
    let mut frame = LoginFrame::new();
    writeln!(out, "Mediator Sample")?;
    frame.print_state(out)?;

    writeln!(out, "select Login:")?;
    frame.select_login();
    frame.print_state(out)?;

    writeln!(out, "type username:")?;
    frame.type_text(ColleagueId::TextUser, "hyuki");
    frame.print_state(out)?;

    writeln!(out, "type password:")?;
    frame.type_text(ColleagueId::TextPass, "secret");
    frame.print_state(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ColleagueId::*;

    fn enabled(frame: &LoginFrame) -> Vec<ColleagueId> {
        ColleagueId::ALL
            .into_iter()
            .filter(|id| frame.is_enabled(*id))
            .collect()
    }

    #[test]
    fn test_guest_disables_credentials() {
        let frame = LoginFrame::new();
        assert_eq!(
            enabled(&frame),
            [CheckGuest, CheckLogin, ButtonOk, ButtonCancel]
        );
    }

    #[test]
    fn test_login_flow() {
        let mut frame = LoginFrame::new();
        frame.select_login();
        assert!(frame.is_enabled(TextUser));
        assert!(!frame.is_enabled(TextPass));
        assert!(!frame.is_enabled(ButtonOk));

        frame.type_text(TextUser, "hyuki");
        assert!(frame.is_enabled(TextPass));
        assert!(!frame.is_enabled(ButtonOk));

        frame.type_text(TextPass, "secret");
        assert!(frame.is_enabled(ButtonOk));

        frame.type_text(TextUser, "");
        assert!(!frame.is_enabled(TextPass));
        assert!(!frame.is_enabled(ButtonOk));
        assert!(frame.is_enabled(ButtonCancel));
    }

    #[test]
    fn test_back_to_guest() {
        let mut frame = LoginFrame::new();
        frame.select_login();
        frame.type_text(TextUser, "a");
        frame.type_text(TextPass, "b");
        frame.select_guest();
        assert!(!frame.is_enabled(TextUser));
        assert!(!frame.is_enabled(TextPass));
        assert!(frame.is_enabled(ButtonOk));
        assert!(frame.is_checked(CheckGuest));
        assert!(!frame.is_checked(CheckLogin));
    }

    #[test]
    fn test_disabled_field_ignores_typing() {
        let mut frame = LoginFrame::new();
        frame.type_text(TextUser, "ghost");
        assert_eq!(frame.text(TextUser), "");
    }

    #[test]
    fn test_print_state_shows_background() {
        let mut frame = LoginFrame::new();
        frame.select_login();
        let mut buf = Vec::new();
        frame.print_state(&mut buf).unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("(*) Login"));
        assert!(output.contains("Username enabled, white"));
        assert!(output.contains("Password disabled, lightGray"));
        assert!(output.contains("<OK> disabled"));
    }
}
