//! Pattern 8: Abstract Factory
//! Example: Link / tray / page families rendered as lists or as tables
//!
//! Run with: cargo run --bin p08_abstract_factory
//!
//! The driver only talks to the `Factory`, `Item`, `Tray` and `Page` traits.
//! Switching `abstract_factory.kind` in the config swaps the whole family.

use std::io::{self, Write};

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::config::PlaygroundConfig;
use crate::error::{PlaygroundError, Result};

// =============================================================================
// Abstract parts
// =============================================================================

pub trait Item {
    fn caption(&self) -> &str;
    fn make_html(&self) -> String;
}

pub trait Tray: Item {
    fn add(&mut self, item: Box<dyn Item>);
    fn into_item(self: Box<Self>) -> Box<dyn Item>;
}

pub trait Page {
    fn title(&self) -> &str;
    fn add(&mut self, item: Box<dyn Item>);
    fn make_html(&self) -> String;

    fn output(&self, filename: &str, out: &mut dyn Write) -> io::Result<()> {
        write!(out, "{}", self.make_html())?;
        writeln!(out, "{filename} created.")
    }
}

pub trait Factory {
    fn create_link(&self, caption: &str, url: &str) -> Box<dyn Item>;
    fn create_tray(&self, caption: &str) -> Box<dyn Tray>;
    fn create_page(&self, title: &str, author: &str) -> Box<dyn Page>;
}

/// Picks a concrete factory by name.
pub fn factory_for(kind: &str) -> Result<Box<dyn Factory>> {
    match kind.trim().to_ascii_lowercase().as_str() {
        "list" => Ok(Box::new(ListFactory)),
        "table" => Ok(Box::new(TableFactory)),
        _ => Err(PlaygroundError::UnknownFactory(kind.to_string())),
    }
}

fn page_frame(title: &str, author: &str, body: &str) -> String {
    let title = encode_text(title);
    format!(
        "<html><head><title>{title}</title></head>\n<body>\n<h1>{title}</h1>\n\
         {body}<hr><address>{}</address>\n</body></html>\n",
        encode_text(author)
    )
}

// =============================================================================
// List family
// =============================================================================

pub struct ListFactory;

impl Factory for ListFactory {
    fn create_link(&self, caption: &str, url: &str) -> Box<dyn Item> {
        Box::new(ListLink {
            caption: caption.to_string(),
            url: url.to_string(),
        })
    }

    fn create_tray(&self, caption: &str) -> Box<dyn Tray> {
        Box::new(ListTray {
            caption: caption.to_string(),
            items: Vec::new(),
        })
    }

    fn create_page(&self, title: &str, author: &str) -> Box<dyn Page> {
        Box::new(ListPage {
            title: title.to_string(),
            author: author.to_string(),
            content: Vec::new(),
        })
    }
}

struct ListLink {
    caption: String,
    url: String,
}

impl Item for ListLink {
    fn caption(&self) -> &str {
        &self.caption
    }

    fn make_html(&self) -> String {
        format!(
            "  <li><a href=\"{}\">{}</a></li>\n",
            encode_double_quoted_attribute(&self.url),
            encode_text(&self.caption)
        )
    }
}

struct ListTray {
    caption: String,
    items: Vec<Box<dyn Item>>,
}

impl Item for ListTray {
    fn caption(&self) -> &str {
        &self.caption
    }

    fn make_html(&self) -> String {
        let mut html = format!("<li>\n{}\n<ul>\n", encode_text(&self.caption));
        for item in &self.items {
            html.push_str(&item.make_html());
        }
        html.push_str("</ul>\n</li>\n");
        html
    }
}

impl Tray for ListTray {
    fn add(&mut self, item: Box<dyn Item>) {
        self.items.push(item);
    }

    fn into_item(self: Box<Self>) -> Box<dyn Item> {
        self
    }
}

struct ListPage {
    title: String,
    author: String,
    content: Vec<Box<dyn Item>>,
}

impl Page for ListPage {
    fn title(&self) -> &str {
        &self.title
    }

    fn add(&mut self, item: Box<dyn Item>) {
        self.content.push(item);
    }

    fn make_html(&self) -> String {
        let mut body = String::from("<ul>\n");
        for item in &self.content {
            body.push_str(&item.make_html());
        }
        body.push_str("</ul>\n");
        page_frame(&self.title, &self.author, &body)
    }
}

// =============================================================================
// Table family
// =============================================================================

pub struct TableFactory;

impl Factory for TableFactory {
    fn create_link(&self, caption: &str, url: &str) -> Box<dyn Item> {
        Box::new(TableLink {
            caption: caption.to_string(),
            url: url.to_string(),
        })
    }

    fn create_tray(&self, caption: &str) -> Box<dyn Tray> {
        Box::new(TableTray {
            caption: caption.to_string(),
            items: Vec::new(),
        })
    }

    fn create_page(&self, title: &str, author: &str) -> Box<dyn Page> {
        Box::new(TablePage {
            title: title.to_string(),
            author: author.to_string(),
            content: Vec::new(),
        })
    }
}

struct TableLink {
    caption: String,
    url: String,
}

impl Item for TableLink {
    fn caption(&self) -> &str {
        &self.caption
    }

    fn make_html(&self) -> String {
        format!(
            "<td><a href=\"{}\">{}</a></td>\n",
            encode_double_quoted_attribute(&self.url),
            encode_text(&self.caption)
        )
    }
}

struct TableTray {
    caption: String,
    items: Vec<Box<dyn Item>>,
}

impl Item for TableTray {
    fn caption(&self) -> &str {
        &self.caption
    }

    fn make_html(&self) -> String {
        let mut html = format!(
            "<td><table width=\"100%\" border=\"1\"><tr>\
             <td bgcolor=\"#cccccc\" align=\"center\" colspan=\"{}\"><b>{}</b></td></tr>\n<tr>\n",
            self.items.len().max(1),
            encode_text(&self.caption)
        );
        for item in &self.items {
            html.push_str(&item.make_html());
        }
        html.push_str("</tr></table></td>\n");
        html
    }
}

impl Tray for TableTray {
    fn add(&mut self, item: Box<dyn Item>) {
        self.items.push(item);
    }

    fn into_item(self: Box<Self>) -> Box<dyn Item> {
        self
    }
}

struct TablePage {
    title: String,
    author: String,
    content: Vec<Box<dyn Item>>,
}

impl Page for TablePage {
    fn title(&self) -> &str {
        &self.title
    }

    fn add(&mut self, item: Box<dyn Item>) {
        self.content.push(item);
    }

    fn make_html(&self) -> String {
        let mut body = String::from("<table width=\"80%\" border=\"3\">\n");
        for item in &self.content {
            body.push_str(&format!("<tr>{}</tr>\n", item.make_html()));
        }
        body.push_str("</table>\n");
        page_frame(&self.title, &self.author, &body)
    }
}

// =============================================================================
// Driver
// =============================================================================

/// Builds the blog page with whichever family `factory` belongs to.
pub fn blog_page(factory: &dyn Factory) -> Box<dyn Page> {
    let mut tray = factory.create_tray("Blog Site");
    for n in 1..=3 {
        let caption = format!("Blog{n}");
        let url = format!("https://example.com/blog{n}");
        tray.add(factory.create_link(&caption, &url));
    }

    let mut page = factory.create_page("Blog", "Suzuki");
    page.add(tray.into_item());
    page
}

pub fn run(out: &mut dyn Write, config: &PlaygroundConfig) -> Result<()> {
    let factory = factory_for(&config.abstract_factory.kind)?;
    log::debug!("using '{}' factory", config.abstract_factory.kind);
    let page = blog_page(factory.as_ref());
    page.output(&format!("{}.html", page.title()), out)?;
    Ok(())
}
