//! Pattern 13: Visitor
//! Example: Listing, sizing and searching a file tree without touching it
//!
//! Run with: cargo run --bin p13_visitor
//!
//! `File` and `Directory` only know how to `accept` a visitor. Every operation
//! lives in its own visitor, so adding one never changes the tree types.
//! The flip side: adding a new entry kind means touching every visitor.

use std::io::{self, Write};

use crate::config::PlaygroundConfig;
use crate::error::Result;

pub struct File {
    name: String,
    size: u64,
}

pub struct Directory {
    name: String,
    entries: Vec<Entry>,
}

pub enum Entry {
    File(File),
    Directory(Directory),
}

impl File {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.size
    }
}

impl Directory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn with(mut self, entry: impl Into<Entry>) -> Self {
        self.entries.push(entry.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.entries.iter().map(Entry::size).sum()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

impl From<File> for Entry {
    fn from(file: File) -> Self {
        Entry::File(file)
    }
}

impl From<Directory> for Entry {
    fn from(dir: Directory) -> Self {
        Entry::Directory(dir)
    }
}

impl Entry {
    pub fn name(&self) -> &str {
        match self {
            Entry::File(file) => file.name(),
            Entry::Directory(dir) => dir.name(),
        }
    }

    pub fn size(&self) -> u64 {
        match self {
            Entry::File(file) => file.size(),
            Entry::Directory(dir) => dir.size(),
        }
    }

    pub fn accept(&self, visitor: &mut dyn Visitor) -> io::Result<()> {
        match self {
            Entry::File(file) => visitor.visit_file(file),
            Entry::Directory(dir) => visitor.visit_directory(dir),
        }
    }
}

pub trait Visitor {
    fn visit_file(&mut self, file: &File) -> io::Result<()>;
    fn visit_directory(&mut self, dir: &Directory) -> io::Result<()>;
}

// =============================================================================
// Visitors
// =============================================================================

/// Prints every entry with its full path and size.
pub struct ListVisitor<'a, W: Write + ?Sized> {
    current_dir: String,
    out: &'a mut W,
}

impl<'a, W: Write + ?Sized> ListVisitor<'a, W> {
    pub fn new(out: &'a mut W) -> Self {
        Self {
            current_dir: String::new(),
            out,
        }
    }
}

impl<W: Write + ?Sized> Visitor for ListVisitor<'_, W> {
    fn visit_file(&mut self, file: &File) -> io::Result<()> {
        writeln!(
            self.out,
            "{}/{}({})",
            self.current_dir,
            file.name(),
            file.size()
        )
    }

    fn visit_directory(&mut self, dir: &Directory) -> io::Result<()> {
        writeln!(
            self.out,
            "{}/{}({})",
            self.current_dir,
            dir.name(),
            dir.size()
        )?;
        let saved = self.current_dir.clone();
        self.current_dir = format!("{}/{}", saved, dir.name());
        for entry in dir.entries() {
            entry.accept(self)?;
        }
        self.current_dir = saved;
        Ok(())
    }
}

/// Totals file sizes by walking the tree rather than asking directories.
#[derive(Default)]
pub struct SizeVisitor {
    total: u64,
    files: usize,
}

impl SizeVisitor {
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn files(&self) -> usize {
        self.files
    }
}

impl Visitor for SizeVisitor {
    fn visit_file(&mut self, file: &File) -> io::Result<()> {
        self.total += file.size();
        self.files += 1;
        Ok(())
    }

    fn visit_directory(&mut self, dir: &Directory) -> io::Result<()> {
        for entry in dir.entries() {
            entry.accept(self)?;
        }
        Ok(())
    }
}

/// Collects the paths of files whose name ends with a given suffix.
pub struct FileFindVisitor {
    suffix: String,
    current_dir: String,
    found: Vec<String>,
}

impl FileFindVisitor {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
            current_dir: String::new(),
            found: Vec::new(),
        }
    }

    pub fn found(&self) -> &[String] {
        &self.found
    }
}

impl Visitor for FileFindVisitor {
    fn visit_file(&mut self, file: &File) -> io::Result<()> {
        if file.name().ends_with(&self.suffix) {
            self.found.push(format!("{}/{}", self.current_dir, file.name()));
        }
        Ok(())
    }

    fn visit_directory(&mut self, dir: &Directory) -> io::Result<()> {
        let saved = self.current_dir.clone();
        self.current_dir = format!("{}/{}", saved, dir.name());
        for entry in dir.entries() {
            entry.accept(self)?;
        }
        self.current_dir = saved;
        Ok(())
    }
}

pub fn sample_tree() -> Entry {
    let bin = Directory::new("bin")
        .with(File::new("vi", 10000))
        .with(File::new("latex", 30000));
    let yuki = Directory::new("yuki")
        .with(File::new("diary.html", 100))
        .with(File::new("compose.java", 200));
    let hanako = Directory::new("hanako").with(File::new("memo.tex", 300));
    let usr = Directory::new("usr")
        .with(yuki)
        .with(hanako)
        .with(Directory::new("tomura"));

    Directory::new("root")
        .with(bin)
        .with(Directory::new("tmp"))
        .with(usr)
        .into()
}

pub fn run(out: &mut dyn Write, _config: &PlaygroundConfig) -> Result<()> {
    let root = sample_tree();
    root.accept(&mut ListVisitor::new(out))?;

    let mut sizes = SizeVisitor::default();
    root.accept(&mut sizes)?;
    writeln!(
        out,
        "total: {} bytes in {} files",
        sizes.total(),
        sizes.files()
    )?;

    let mut finder = FileFindVisitor::new(".html");
    root.accept(&mut finder)?;
    writeln!(out, "HTML files:")?;
    for path in finder.found() {
        writeln!(out, "{path}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_visitor_matches_composite_listing() {
        let mut buf = Vec::new();
        sample_tree()
            .accept(&mut ListVisitor::new(&mut buf))
            .unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], "/root(40600)");
        assert_eq!(lines[7], "/root/usr/yuki/diary.html(100)");
        assert_eq!(lines[11], "/root/usr/tomura(0)");
    }

    #[test]
    fn test_size_visitor_agrees_with_size() {
        let root = sample_tree();
        let mut sizes = SizeVisitor::default();
        root.accept(&mut sizes).unwrap();
        assert_eq!(sizes.total(), 40600);
        assert_eq!(sizes.total(), root.size());
        assert_eq!(sizes.files(), 5);
    }

    #[test]
    fn test_file_find_visitor() {
        let mut finder = FileFindVisitor::new(".html");
        sample_tree().accept(&mut finder).unwrap();
        assert_eq!(finder.found(), ["/root/usr/yuki/diary.html"]);

        let mut none = FileFindVisitor::new(".rs");
        sample_tree().accept(&mut none).unwrap();
        assert!(none.found().is_empty());
    }

    #[test]
    fn test_accept_on_a_lone_file() {
        let file: Entry = File::new("notes.txt", 42).into();
        let mut buf = Vec::new();
        file.accept(&mut ListVisitor::new(&mut buf)).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "/notes.txt(42)\n");
    }
}
