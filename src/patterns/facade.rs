//! Pattern 15: Facade
//! Example: One call that looks up a user and writes their welcome page
//!
//! Run with: cargo run --bin p15_facade
//!
//! `Database` and `HtmlWriter` are usable on their own, but callers only need
//! [`PageMaker::make_welcome_page`].

use std::collections::HashMap;
use std::io::{self, Write};

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::config::PlaygroundConfig;
use crate::error::{PlaygroundError, Result};

const MAILDATA: &str = "\
# address=display name
hyuki@example.com=Hiroshi Yuki
hanako@example.com=Hanako Sato
tomura@example.com=Tomura
mamoru@example.com=Mamoru Takahashi
";

// =============================================================================
// Database
// =============================================================================

pub struct Database;

impl Database {
    /// Parses the named data set. Blank lines and `#` comments are skipped.
    pub fn properties(name: &str) -> Result<HashMap<String, String>> {
        let source = match name {
            "maildata" => MAILDATA,
            other => return Err(PlaygroundError::UnknownDatabase(other.to_string())),
        };
        Ok(parse_properties(source))
    }
}

fn parse_properties(source: &str) -> HashMap<String, String> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_owned(), value.trim().to_owned()))
        .collect()
}

// =============================================================================
// HtmlWriter
// =============================================================================

pub struct HtmlWriter<'a, W: Write + ?Sized> {
    out: &'a mut W,
}

impl<'a, W: Write + ?Sized> HtmlWriter<'a, W> {
    pub fn new(out: &'a mut W) -> Self {
        Self { out }
    }

    pub fn title(&mut self, title: &str) -> io::Result<()> {
        let title = encode_text(title);
        writeln!(self.out, "<html>")?;
        writeln!(self.out, "<head>")?;
        writeln!(self.out, "<title>{title}</title>")?;
        writeln!(self.out, "</head>")?;
        writeln!(self.out, "<body>")?;
        writeln!(self.out, "<h1>{title}</h1>")
    }

    pub fn paragraph(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "<p>{}</p>", encode_text(text))
    }

    pub fn link(&mut self, href: &str, caption: &str) -> io::Result<()> {
        writeln!(
            self.out,
            "<a href=\"{}\">{}</a>",
            encode_double_quoted_attribute(href),
            encode_text(caption)
        )
    }

    pub fn mailto(&mut self, address: &str, name: &str) -> io::Result<()> {
        self.link(&format!("mailto:{address}"), name)
    }

    pub fn close(&mut self) -> io::Result<()> {
        writeln!(self.out, "</body>")?;
        writeln!(self.out, "</html>")
    }
}

// =============================================================================
// Facade
// =============================================================================

pub struct PageMaker;

impl PageMaker {
    /// Writes the welcome page for `address` to `out`, then reports `filename`.
    pub fn make_welcome_page(address: &str, filename: &str, out: &mut dyn Write) -> Result<()> {
        let mailprop = Database::properties("maildata")?;
        let name = mailprop
            .get(address)
            .ok_or_else(|| PlaygroundError::missing_property("maildata", address))?;

        let mut writer = HtmlWriter::new(out);
        writer.title(&format!("Welcome to {name}'s page!"))?;
        writer.paragraph(&format!("Welcome to {name}'s page!"))?;
        writer.paragraph("Waiting for your mail!")?;
        writer.mailto(address, name)?;
        writer.close()?;

        writeln!(out, "{filename} is created for {address} ({name})")?;
        log::debug!("welcome page {filename} written");
        Ok(())
    }
}

pub fn run(out: &mut dyn Write, _config: &PlaygroundConfig) -> Result<()> {
    PageMaker::make_welcome_page("hyuki@example.com", "welcome.html", out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_properties_parse() {
        let props = Database::properties("maildata").unwrap();
        assert_eq!(props.len(), 4);
        assert_eq!(props["hyuki@example.com"], "Hiroshi Yuki");
    }

    #[test]
    fn test_parse_skips_comments_and_junk() {
        let props = parse_properties("# c\n\n a = 1 \nnoequals\nb=x=y\n");
        assert_eq!(props.len(), 2);
        assert_eq!(props["a"], "1");
        assert_eq!(props["b"], "x=y");
    }

    #[test]
    fn test_unknown_database() {
        let err = Database::properties("nope").unwrap_err();
        assert!(matches!(err, PlaygroundError::UnknownDatabase(ref name) if name == "nope"));
    }

    #[test]
    fn test_html_writer_escapes() {
        let mut buf = Vec::new();
        let mut writer = HtmlWriter::new(&mut buf);
        writer.paragraph("a < b & c").unwrap();
        writer.link("x?a=\"1\"", "<here>").unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("<p>a &lt; b &amp; c</p>"));
        assert!(output.contains(
            "<a href=\"x?a=&quot;1&quot;\">&lt;here&gt;</a>"
        ));
    }

    #[test]
    fn test_welcome_page() {
        let mut buf = Vec::new();
        PageMaker::make_welcome_page("hyuki@example.com", "welcome.html", &mut buf)
            .unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert!(output.starts_with("<html>\n"));
        assert!(output.contains("<h1>Welcome to Hiroshi Yuki's page!</h1>"));
        assert!(output.contains(
            "<a href=\"mailto:hyuki@example.com\">Hiroshi Yuki</a>"
        ));
        assert!(output.ends_with(
            "welcome.html is created for hyuki@example.com (Hiroshi Yuki)\n"
        ));
    }

    #[test]
    fn test_unknown_address() {
        let err = PageMaker::make_welcome_page("nobody@example.com", "x.html", &mut io::sink())
            .unwrap_err();
        assert!(matches!(err, PlaygroundError::MissingProperty { .. }));
    }
}
