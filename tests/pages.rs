//! Runs every registered page end to end with a fixed seed.

use design_patterns::page::{self, PAGES};
use design_patterns::patterns::{chain_of_responsibility, decorator, flyweight};
use design_patterns::{logging, PlaygroundConfig, PlaygroundError};

fn render(slug: &str, config: &PlaygroundConfig) -> String {
    let page = page::find(slug).unwrap();
    let mut buf = Vec::new();
    (page.run)(&mut buf, config).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_every_page_runs() {
    logging::init_for_tests();
    let config = PlaygroundConfig::seeded(2024);
    for page in PAGES {
        let mut buf = Vec::new();
        (page.run)(&mut buf, &config)
            .unwrap_or_else(|err| panic!("page {} failed: {err}", page.bin_name()));
        assert!(!buf.is_empty(), "page {} printed nothing", page.bin_name());
    }
}

#[test]
fn test_seeded_pages_are_reproducible() {
    let config = PlaygroundConfig::seeded(77);
    for slug in ["bridge", "strategy", "observer", "memento"] {
        assert_eq!(
            render(slug, &config),
            render(slug, &config),
            "{slug} differs between runs"
        );
    }
}

#[test]
fn test_composite_root_size() {
    let output = render("composite", &PlaygroundConfig::default());
    assert_eq!(output.lines().next(), Some("/root(40600)"));
}

#[test]
fn test_decorator_side_border_width() {
    use std::rc::Rc;
    use decorator::{Display, SideBorder, StringDisplay};

    let border = SideBorder::new(Rc::new(StringDisplay::new("Hello world")), '#');
    assert_eq!(border.columns(), "Hello world".len() + 2);
}

#[test]
fn test_chain_resolves_each_trouble_once() {
    let (chain, head) = chain_of_responsibility::standard_chain().unwrap();
    let output = render("chain_of_responsibility", &PlaygroundConfig::default());
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 500);

    for (n, line) in lines.iter().enumerate() {
        let trouble = chain_of_responsibility::Trouble(n as u32);
        assert_eq!(*line, chain.describe(trouble, chain.support(head, trouble)));
        assert!(line.starts_with(&format!("[Trouble {n}] ")));
    }
}

#[test]
fn test_flyweight_pool_size() {
    let mut factory = flyweight::BigCharFactory::new();
    flyweight::BigString::new("HelloWorld", &mut factory);
    assert_eq!(factory.len(), 7);
}

#[test]
fn test_abstract_factory_kinds() {
    let mut config = PlaygroundConfig::default();
    config.abstract_factory.kind = "table".to_string();
    assert!(render("abstract_factory", &config).contains("<table"));

    config.abstract_factory.kind = "tree".to_string();
    let page = page::find("abstract_factory").unwrap();
    let err = (page.run)(&mut Vec::new(), &config).unwrap_err();
    assert!(matches!(err, PlaygroundError::UnknownFactory(_)));
}
