//! # Design Pattern Playground
//!
//! Twenty-one small pages, one per classic object-oriented design pattern.
//! Every page is self-contained: its participants live in one module under
//! [`patterns`] and its driver block is that module's `run` function.
//!
//! ## Pages
//!
//! | #  | Page                      | Relationship shown                        |
//! |----|---------------------------|-------------------------------------------|
//! | 2  | Adapter                   | wrapping an existing type                 |
//! | 3  | Template Method           | provided trait method calling hooks       |
//! | 4  | Factory Method            | template method applied to construction   |
//! | 5  | Singleton                 | lazily initialised process-wide instance  |
//! | 6  | Prototype                 | cloning registered instances              |
//! | 7  | Builder                   | director driving an abstract builder      |
//! | 8  | Abstract Factory          | families of related parts                 |
//! | 9  | Bridge                    | function and implementation hierarchies   |
//! | 10 | Strategy                  | swappable algorithms                      |
//! | 11 | Composite                 | containers and contents treated alike     |
//! | 12 | Decorator                 | stacked wrappers with the same interface  |
//! | 13 | Visitor                   | operations separated from structure       |
//! | 14 | Chain of Responsibility   | requests passed along handlers            |
//! | 15 | Facade                    | one entry point over several helpers      |
//! | 16 | Mediator                  | colleagues coordinated by one owner       |
//! | 17 | Observer                  | subjects notifying subscribers            |
//! | 18 | Memento                   | snapshot and restore                      |
//! | 19 | State                     | behaviour selected by state objects       |
//! | 20 | Flyweight                 | shared intrinsic state                    |
//! | 21 | Proxy                     | deferred construction                     |
//! | 22 | Command                   | requests as values, replayable history    |
//!
//! ## Running Pages
//!
//! ```bash
//! cargo run --bin p14_chain_of_responsibility
//! cargo run --bin playground -- list
//! cargo run --bin playground -- run decorator 19
//! PLAYGROUND_SEED=7 cargo run --bin playground -- all
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod page;
pub mod patterns;

pub use config::{Pacer, PlaygroundConfig};
pub use error::{PlaygroundError, Result};
