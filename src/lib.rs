//! # SOLID Principles by Example
//!
//! Five small, self-contained lessons. Each module holds a `before` rendition
//! that breaks the principle and an "after" rendition at the module root that
//! fixes it.
//!
//! ## Single Responsibility
//! - `User` keeps properties, `UserRepository` keeps persistence
//! - `UserService` is a facade over both
//!
//! ## Open/Closed
//! - `Dish` trait, one type per dish
//! - `Salad` and config-driven `Special` added without edits
//!
//! ## Liskov Substitution
//! - `Bird` for everything all birds do
//! - `FlyingBird: Bird` for the ones that fly
//!
//! ## Interface Segregation
//! - `Printer`, `Scanner`, `Faxer` instead of one wide `Worker`
//!
//! ## Dependency Inversion
//! - `Switch<D: Switchable>` drives any device
//!
//! Run the walkthrough with: `cargo run --bin solid -- [srp|ocp|lsp|isp|dip]`

pub mod config;
pub mod dependency_inversion;
pub mod error;
pub mod interface_segregation;
pub mod liskov_substitution;
pub mod logging;
pub mod open_closed;
pub mod report;
pub mod single_responsibility;

pub use config::SolidConfig;
pub use error::{ConfigError, Result, SolidError};
pub use report::{Principle, Report};
