//! Open/Closed Principle: "Extend, don't modify."
//!
//! A type should be open for extension but closed for modification. The menu
//! below grows by adding new `Dish` implementations; nothing that already
//! exists is edited.

use std::fmt;
use std::io::Write;

// =============================================================================
// Before: every new dish edits the same match arms
// =============================================================================

pub mod before {
    use std::fmt;

    #[derive(Debug, Clone, PartialEq)]
    pub struct Dish {
        kind: String,
    }

    impl Dish {
        pub fn new(kind: impl Into<String>) -> Self {
            Dish { kind: kind.into() }
        }

        // Adding "salad" means touching this match and the one in `price`.
        pub fn description(&self) -> &'static str {
            match self.kind.as_str() {
                "pasta" => "Delicious Italian Pasta",
                "pizza" => "Cheesy Margherita Pizza",
                "burger" => "Juicy Beef Burger",
                _ => "Unknown Dish",
            }
        }

        pub fn price(&self) -> f64 {
            match self.kind.as_str() {
                "pasta" => 12.99,
                "pizza" => 15.99,
                "burger" => 10.99,
                _ => 0.0,
            }
        }
    }

    impl fmt::Display for Dish {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "{} - ${:.2}", self.description(), self.price())
        }
    }
}

// =============================================================================
// After: closed abstraction, one implementation per dish
// =============================================================================

pub trait Dish {
    fn description(&self) -> String;
    fn price(&self) -> f64;

    fn label(&self) -> String {
        format!("{} - ${:.2}", self.description(), self.price())
    }
}

impl fmt::Display for dyn Dish + '_ {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.label())
    }
}

pub struct Pasta;

impl Dish for Pasta {
    fn description(&self) -> String {
        "Delicious Italian Pasta".to_string()
    }

    fn price(&self) -> f64 {
        12.99
    }
}

pub struct Pizza;

impl Dish for Pizza {
    fn description(&self) -> String {
        "Cheesy Margherita Pizza".to_string()
    }

    fn price(&self) -> f64 {
        15.99
    }
}

pub struct Burger;

impl Dish for Burger {
    fn description(&self) -> String {
        "Juicy Beef Burger".to_string()
    }

    fn price(&self) -> f64 {
        10.99
    }
}

/// Added later, without modifying anything above.
pub struct Salad;

impl Dish for Salad {
    fn description(&self) -> String {
        "Fresh Garden Salad".to_string()
    }

    fn price(&self) -> f64 {
        8.99
    }
}

/// A dish that only exists at runtime, e.g. a daily special read from config.
#[derive(Debug, Clone, PartialEq)]
pub struct Special {
    description: String,
    price: f64,
}

impl Special {
    pub fn new(description: impl Into<String>, price: f64) -> Self {
        Special {
            description: description.into(),
            price,
        }
    }
}

impl Dish for Special {
    fn description(&self) -> String {
        self.description.clone()
    }

    fn price(&self) -> f64 {
        self.price
    }
}

// =============================================================================
// Menu
// =============================================================================

#[derive(Default)]
pub struct Menu {
    items: Vec<Box<dyn Dish>>,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pasta, pizza and burger.
    pub fn standard() -> Self {
        let mut menu = Menu::new();
        menu.add(Pasta);
        menu.add(Pizza);
        menu.add(Burger);
        menu
    }

    pub fn add(&mut self, dish: impl Dish + 'static) {
        self.items.push(Box::new(dish));
    }

    pub fn items(&self) -> &[Box<dyn Dish>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(|dish| dish.price()).sum()
    }
}

/// Works for every dish, including ones written after this function.
pub fn print_menu(out: &mut impl Write, menu: &Menu) -> std::io::Result<()> {
    for dish in menu.items() {
        writeln!(out, "{}", dish.label())?;
    }
    Ok(())
}
