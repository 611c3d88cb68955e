//! Liskov Substitution Principle: "I know I can trust you to do what I expect
//! you to do!"
//!
//! Anything accepted as a `Bird` must behave like one. Flight moves into its
//! own supertrait so that only birds that can honour it promise it.
//!
//! A penguin is not a flying bird, and the compiler says so:
//!
//! ```compile_fail
//! use solid_principles::liskov_substitution::{make_bird_fly, Penguin};
//!
//! let mut out = Vec::new();
//! make_bird_fly(&mut out, &Penguin).unwrap();
//! ```

use std::io::Write;

// =============================================================================
// Before: every bird inherits `fly`, whether it can or not
// =============================================================================

pub mod before {
    use std::io::Write;

    use crate::error::{Result, SolidError};

    pub trait Bird {
        fn fly(&self) -> Result<String> {
            Ok("I can fly!".to_string())
        }
    }

    pub struct Sparrow;

    impl Bird for Sparrow {}

    pub struct Penguin;

    impl Bird for Penguin {
        fn fly(&self) -> Result<String> {
            Err(SolidError::not_implemented("Penguins cannot fly!"))
        }
    }

    /// Type-checks for any bird, then fails at runtime for some of them.
    pub fn make_bird_fly(out: &mut impl Write, bird: &dyn Bird) -> Result<()> {
        writeln!(out, "{}", bird.fly()?)?;
        Ok(())
    }
}

// =============================================================================
// After: flight is a separate capability
// =============================================================================

pub trait Bird {
    fn sound(&self) -> &'static str;
}

pub trait FlyingBird: Bird {
    fn fly(&self) -> &'static str;
}

pub struct Sparrow;

impl Bird for Sparrow {
    fn sound(&self) -> &'static str {
        "Chirp Chirp"
    }
}

impl FlyingBird for Sparrow {
    fn fly(&self) -> &'static str {
        "I can fly!"
    }
}

/// Makes sound, cannot fly, and never claims to.
pub struct Penguin;

impl Bird for Penguin {
    fn sound(&self) -> &'static str {
        "Honk Honk"
    }
}

pub fn make_bird_sound<B: Bird + ?Sized>(
    out: &mut impl Write,
    bird: &B,
) -> std::io::Result<()> {
    writeln!(out, "{}", bird.sound())
}

/// Only accepts birds that promised to fly.
pub fn make_bird_fly<B: FlyingBird + ?Sized>(
    out: &mut impl Write,
    bird: &B,
) -> std::io::Result<()> {
    writeln!(out, "{}", bird.fly())
}
