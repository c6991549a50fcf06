//! Pattern 7: Builder
//! Example: One director, two document builders
//!
//! Run with: cargo run --bin p07_builder

use std::io::Write;

use html_escape::encode_text;

use crate::config::PlaygroundConfig;
use crate::error::Result;

pub trait Builder {
    fn make_title(&mut self, title: &str);
    fn make_string(&mut self, text: &str);
    fn make_items(&mut self, items: &[&str]);
    fn close(&mut self);
}

/// Knows the structure of the document, not how any format renders it.
pub struct Director;

impl Director {
    pub fn construct(builder: &mut dyn Builder) {
        builder.make_title("Greeting");
        builder.make_string("General greetings");
        builder.make_items(&["How are you?", "Hello.", "Hi."]);
        builder.make_string("Greetings by time of day");
        builder.make_items(&["Good morning.", "Good afternoon.", "Good night."]);
        builder.close();
    }
}

const RULE: &str = "=====================";

#[derive(Default)]
pub struct TextBuilder {
    buffer: String,
}

impl TextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn result(&self) -> &str {
        &self.buffer
    }
}

impl Builder for TextBuilder {
    fn make_title(&mut self, title: &str) {
        self.buffer.push_str(RULE);
        self.buffer.push('\n');
        self.buffer.push_str(&format!("[{title}]\n\n"));
    }

    fn make_string(&mut self, text: &str) {
        self.buffer.push_str(&format!("* {text}\n"));
    }

    fn make_items(&mut self, items: &[&str]) {
        for item in items {
            self.buffer.push_str(&format!("  - {item}\n"));
        }
        self.buffer.push('\n');
    }

    fn close(&mut self) {
        self.buffer.push_str(RULE);
        self.buffer.push('\n');
    }
}

pub struct HtmlBuilder {
    filename: String,
    buffer: String,
}

impl HtmlBuilder {
    pub fn new() -> Self {
        Self {
            filename: "untitled.html".to_string(),
            buffer: String::new(),
        }
    }

    /// `(filename, html)` of the document built so far.
    pub fn result(&self) -> (&str, &str) {
        (&self.filename, &self.buffer)
    }
}

impl Default for HtmlBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder for HtmlBuilder {
    fn make_title(&mut self, title: &str) {
        self.filename = format!("{title}.html");
        let title = encode_text(title);
        self.buffer.push_str(&format!(
            "<html><head><title>{title}</title></head><body>\n<h1>{title}</h1>\n"
        ));
    }

    fn make_string(&mut self, text: &str) {
        self.buffer.push_str(&format!("<p>{}</p>\n", encode_text(text)));
    }

    fn make_items(&mut self, items: &[&str]) {
        self.buffer.push_str("<ul>\n");
        for item in items {
            self.buffer.push_str(&format!("<li>{}</li>\n", encode_text(item)));
        }
        self.buffer.push_str("</ul>\n");
    }

    fn close(&mut self) {
        self.buffer.push_str("</body></html>\n");
    }
}

pub fn run(out: &mut dyn Write, _config: &PlaygroundConfig) -> Result<()> {
    let mut text = TextBuilder::new();
    Director::construct(&mut text);
    write!(out, "{}", text.result())?;

    let mut html = HtmlBuilder::new();
    Director::construct(&mut html);
    let (filename, document) = html.result();
    writeln!(out, "{filename}")?;
    write!(out, "{document}")?;
    Ok(())
}
