//! One module per playground page. Each module owns its participants and a
//! `run` function that acts as the page's driver block.

pub mod abstract_factory;
pub mod adapter;
pub mod bridge;
pub mod builder;
pub mod chain_of_responsibility;
pub mod command;
pub mod composite;
pub mod decorator;
pub mod facade;
pub mod factory_method;
pub mod flyweight;
pub mod mediator;
pub mod memento;
pub mod observer;
pub mod prototype;
pub mod proxy;
pub mod singleton;
pub mod state;
pub mod strategy;
pub mod template_method;
pub mod visitor;
