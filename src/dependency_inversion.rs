//! Dependency Inversion Principle: "Don't trust anyone below you!"
//!
//! The switch depends on the `Switchable` abstraction instead of a concrete
//! bulb, so new devices plug in without the switch changing.

use std::io::Write;
use tracing::debug;

// =============================================================================
// Before: the switch is welded to one device type
// =============================================================================

pub mod before {
    use std::io::Write;

    pub struct LightBulb;

    impl LightBulb {
        pub fn turn_on(&self) -> &'static str {
            "LightBulb: Turning on"
        }

        pub fn turn_off(&self) -> &'static str {
            "LightBulb: Turning off"
        }
    }

    /// Supporting an LED light would mean editing this struct.
    pub struct Switch {
        bulb: LightBulb,
    }

    impl Switch {
        pub fn new(bulb: LightBulb) -> Self {
            Switch { bulb }
        }

        pub fn operate(&self, out: &mut impl Write) -> std::io::Result<()> {
            writeln!(out, "Switch: Operating")?;
            writeln!(out, "{}", self.bulb.turn_on())
        }
    }
}

// =============================================================================
// After: both sides depend on the abstraction
// =============================================================================

pub trait Switchable {
    fn turn_on(&self) -> &'static str;
    fn turn_off(&self) -> &'static str;
}

impl<T: Switchable + ?Sized> Switchable for Box<T> {
    fn turn_on(&self) -> &'static str {
        (**self).turn_on()
    }

    fn turn_off(&self) -> &'static str {
        (**self).turn_off()
    }
}

pub struct LightBulb;

impl Switchable for LightBulb {
    fn turn_on(&self) -> &'static str {
        "LightBulb: Turning on"
    }

    fn turn_off(&self) -> &'static str {
        "LightBulb: Turning off"
    }
}

pub struct LedLight;

impl Switchable for LedLight {
    fn turn_on(&self) -> &'static str {
        "LEDLight: Turning on"
    }

    fn turn_off(&self) -> &'static str {
        "LEDLight: Turning off"
    }
}

pub struct Switch<D: Switchable> {
    device: D,
}

impl<D: Switchable> Switch<D> {
    pub fn new(device: D) -> Self {
        Switch { device }
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn operate(&self, out: &mut impl Write) -> std::io::Result<()> {
        debug!("switch operating");
        writeln!(out, "Switch: Operating")?;
        writeln!(out, "{}", self.device.turn_on())
    }

    pub fn release(&self, out: &mut impl Write) -> std::io::Result<()> {
        debug!("switch releasing");
        writeln!(out, "Switch: Releasing")?;
        writeln!(out, "{}", self.device.turn_off())
    }
}
