//! Pattern 11: Composite
//! Example: Files and directories behind one `Entry` type
//!
//! Run with: cargo run --bin p11_composite
//!
//! A directory holds entries, and an entry may itself be a directory.
//! Containers and contents are treated alike, so the tree can recurse freely.

use std::io::{self, Write};

use crate::config::PlaygroundConfig;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq)]
pub struct File {
    name: String,
    size: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Directory {
    name: String,
    entries: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq)]
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
}

impl Directory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn add(&mut self, entry: impl Into<Entry>) -> &mut Self {
        self.entries.push(entry.into());
        self
    }

    /// Consuming variant of [`add`](Self::add) for building trees bottom-up.
    pub fn with(mut self, entry: impl Into<Entry>) -> Self {
        self.entries.push(entry.into());
        self
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
            Entry::File(file) => &file.name,
            Entry::Directory(dir) => &dir.name,
        }
    }

    /// A file's own size, or the sum over everything below a directory.
    pub fn size(&self) -> u64 {
        match self {
            Entry::File(file) => file.size,
            Entry::Directory(dir) => dir.entries.iter().map(Entry::size).sum(),
        }
    }

    pub fn print_list(&self, prefix: &str, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}/{}({})", prefix, self.name(), self.size())?;
        if let Entry::Directory(dir) = self {
            let child_prefix = format!("{}/{}", prefix, dir.name);
            for entry in &dir.entries {
                entry.print_list(&child_prefix, out)?;
            }
        }
        Ok(())
    }
}

/// `/root` with `bin`, `tmp` and `usr`, as used by the page.
pub fn sample_tree() -> Entry {
    let bin = Directory::new("bin")
        .with(File::new("vi", 10000))
        .with(File::new("latex", 30000));
    let yuki = Directory::new("yuki")
        .with(File::new("diary.html", 100))
        .with(File::new("compose.java", 200));
    let hanako = Directory::new("hanako").with(File::new("memo.tex", 300));
    let tomura = Directory::new("tomura");
    let usr = Directory::new("usr").with(yuki).with(hanako).with(tomura);

    let mut root = Directory::new("root");
    root.add(bin).add(Directory::new("tmp")).add(usr);
    root.into()
}

pub fn run(out: &mut dyn Write, _config: &PlaygroundConfig) -> Result<()> {
    sample_tree().print_list("", out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_size_is_sum_of_files() {
        let root = sample_tree();
        assert_eq!(root.size(), 10000 + 30000 + 100 + 200 + 300);
        assert_eq!(root.size(), 40600);
    }

    #[test]
    fn test_empty_directory_has_zero_size() {
        let dir: Entry = Directory::new("empty").into();
        assert_eq!(dir.size(), 0);
    }

    #[test]
    fn test_directory_size_tracks_additions() {
        let mut dir = Directory::new("d");
        dir.add(File::new("a", 5));
        assert_eq!(Entry::from(dir.clone()).size(), 5);
        dir.add(Directory::new("sub").with(File::new("b", 7)));
        assert_eq!(Entry::from(dir).size(), 12);
    }

    #[test]
    fn test_print_list() {
        let mut buf = Vec::new();
        sample_tree().print_list("", &mut buf).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let expected = "\
/root(40600)
/root/bin(40000)
/root/bin/vi(10000)
/root/bin/latex(30000)
/root/tmp(0)
/root/usr(600)
/root/usr/yuki(300)
/root/usr/yuki/diary.html(100)
/root/usr/yuki/compose.java(200)
/root/usr/hanako(300)
/root/usr/hanako/memo.tex(300)
/root/usr/tomura(0)
";
        assert_eq!(output, expected);
    }
}
