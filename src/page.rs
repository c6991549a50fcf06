//! Page registry and the shared `main` used by every page binary.

use std::io::{self, Write};
use std::process::ExitCode;

use colored::Colorize;

use crate::config::PlaygroundConfig;
use crate::error::{PlaygroundError, Result};
use crate::logging;
use crate::patterns;

/// Signature of a page's driver block.
pub type PageFn = fn(&mut dyn Write, &PlaygroundConfig) -> Result<()>;

#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub number: u8,
    pub slug: &'static str,
    pub title: &'static str,
    pub run: PageFn,
}

impl Page {
    /// Name of the standalone binary, e.g. `p09_bridge`.
    pub fn bin_name(&self) -> String {
        format!("p{:02}_{}", self.number, self.slug)
    }
}

pub const PAGES: &[Page] = &[
    Page {
        number: 2,
        slug: "adapter",
        title: "Adapter",
        run: patterns::adapter::run,
    },
    Page {
        number: 3,
        slug: "template_method",
        title: "Template Method",
        run: patterns::template_method::run,
    },
    Page {
        number: 4,
        slug: "factory_method",
        title: "Factory Method",
        run: patterns::factory_method::run,
    },
    Page {
        number: 5,
        slug: "singleton",
        title: "Singleton",
        run: patterns::singleton::run,
    },
    Page {
        number: 6,
        slug: "prototype",
        title: "Prototype",
        run: patterns::prototype::run,
    },
    Page {
        number: 7,
        slug: "builder",
        title: "Builder",
        run: patterns::builder::run,
    },
    Page {
        number: 8,
        slug: "abstract_factory",
        title: "Abstract Factory",
        run: patterns::abstract_factory::run,
    },
    Page {
        number: 9,
        slug: "bridge",
        title: "Bridge",
        run: patterns::bridge::run,
    },
    Page {
        number: 10,
        slug: "strategy",
        title: "Strategy",
        run: patterns::strategy::run,
    },
    Page {
        number: 11,
        slug: "composite",
        title: "Composite",
        run: patterns::composite::run,
    },
    Page {
        number: 12,
        slug: "decorator",
        title: "Decorator",
        run: patterns::decorator::run,
    },
    Page {
        number: 13,
        slug: "visitor",
        title: "Visitor",
        run: patterns::visitor::run,
    },
    Page {
        number: 14,
        slug: "chain_of_responsibility",
        title: "Chain of Responsibility",
        run: patterns::chain_of_responsibility::run,
    },
    Page {
        number: 15,
        slug: "facade",
        title: "Facade",
        run: patterns::facade::run,
    },
    Page {
        number: 16,
        slug: "mediator",
        title: "Mediator",
        run: patterns::mediator::run,
    },
    Page {
        number: 17,
        slug: "observer",
        title: "Observer",
        run: patterns::observer::run,
    },
    Page {
        number: 18,
        slug: "memento",
        title: "Memento",
        run: patterns::memento::run,
    },
    Page {
        number: 19,
        slug: "state",
        title: "State",
        run: patterns::state::run,
    },
    Page {
        number: 20,
        slug: "flyweight",
        title: "Flyweight",
        run: patterns::flyweight::run,
    },
    Page {
        number: 21,
        slug: "proxy",
        title: "Proxy",
        run: patterns::proxy::run,
    },
    Page {
        number: 22,
        slug: "command",
        title: "Command",
        run: patterns::command::run,
    },
];

/// Looks a page up by slug (`chain_of_responsibility`, `chain-of-responsibility`),
/// page number (`14`) or binary name (`p14_chain_of_responsibility`).
pub fn find(name: &str) -> Result<&'static Page> {
    let wanted = name.trim().to_ascii_lowercase().replace('-', "_");
    let number = wanted.parse::<u8>().ok();

    PAGES
        .iter()
        .find(|page| {
            page.slug == wanted || Some(page.number) == number || page.bin_name() == wanted
        })
        .ok_or_else(|| PlaygroundError::UnknownPage(name.to_string()))
}

/// Runs one page against stdout with the given config.
pub fn run_to_stdout(page: &Page, config: &PlaygroundConfig) -> Result<()> {
    log::info!("running page {} ({})", page.number, page.title);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    (page.run)(&mut out, config)?;
    out.flush()?;
    Ok(())
}

/// The whole `main` of a standalone page binary.
pub fn main_for(slug: &str) -> ExitCode {
    logging::init();

    let result = PlaygroundConfig::load().and_then(|config| {
        let page = find(slug)?;
        run_to_stdout(page, &config)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
