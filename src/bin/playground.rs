//! Runs any page of the playground.
//!
//! Usage:
//!   cargo run --bin playground -- list
//!   cargo run --bin playground -- run bridge 14 p20_flyweight
//!   cargo run --bin playground -- all

use std::env;
use std::process::ExitCode;

use colored::Colorize;
use design_patterns::page::{self, Page, PAGES};
use design_patterns::{logging, PlaygroundConfig, Result};

fn print_usage() {
    println!("{}", "Design pattern playground".bold());
    println!();
    println!("  playground list            list every page");
    println!(
        "  playground run <page>...   run pages by name, number or binary name"
    );
    println!("  playground all             run every page in order");
}

fn list() {
    for page in PAGES {
        println!(
            "{:>3}  {:<26} {}",
            page.number,
            page.title.bold(),
            page.bin_name().dimmed()
        );
    }
}

fn header(page: &Page) {
    let title = format!("Pattern {}: {}", page.number, page.title);
    println!();
    println!("{}", "=".repeat(title.len()).cyan());
    println!("{}", title.cyan().bold());
    println!("{}", "=".repeat(title.len()).cyan());
}

fn run_pages(pages: &[&Page], config: &PlaygroundConfig) -> Result<()> {
    for page in pages {
        header(page);
        page::run_to_stdout(page, config)?;
    }
    Ok(())
}

fn dispatch(args: &[String]) -> Result<()> {
    let Some(command) = args.first() else {
        print_usage();
        return Ok(());
    };

    match command.as_str() {
        "list" => {
            list();
            Ok(())
        }
        "run" => {
            let pages = args[1..]
                .iter()
                .map(|name| page::find(name))
                .collect::<Result<Vec<_>>>()?;
            if pages.is_empty() {
                print_usage();
                return Ok(());
            }
            let config = PlaygroundConfig::load()?;
            run_pages(&pages, &config)
        }
        "all" => {
            let config = PlaygroundConfig::load()?;
            let pages: Vec<&Page> = PAGES.iter().collect();
            run_pages(&pages, &config)
        }
        _ => {
            // A bare page name works as a shorthand for `run`.
            let page = page::find(command)?;
            let config = PlaygroundConfig::load()?;
            run_pages(&[page], &config)
        }
    }
}

fn main() -> ExitCode {
    logging::init();
    let args: Vec<String> = env::args().skip(1).collect();

    match dispatch(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
