//! Before/after walkthrough of each principle, written to any `io::Write`.

use colored::{ColoredString, Colorize};
use itertools::Itertools;
use rusqlite::Connection;
use serde::Deserialize;
use std::fmt;
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

use crate::config::SolidConfig;
use crate::error::{Result, SolidError};
use crate::open_closed::{Menu, Salad, Special};
use crate::single_responsibility::{SqliteUserRepository, UserRepository, UserService};
use crate::{
    dependency_inversion as dip, interface_segregation as isp, liskov_substitution as lsp,
    open_closed as ocp, single_responsibility as srp,
};

// =============================================================================
// Principle
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Principle {
    SingleResponsibility,
    OpenClosed,
    LiskovSubstitution,
    InterfaceSegregation,
    DependencyInversion,
}

impl Principle {
    /// In SOLID order.
    pub const ALL: [Principle; 5] = [
        Principle::SingleResponsibility,
        Principle::OpenClosed,
        Principle::LiskovSubstitution,
        Principle::InterfaceSegregation,
        Principle::DependencyInversion,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Principle::SingleResponsibility => "srp",
            Principle::OpenClosed => "ocp",
            Principle::LiskovSubstitution => "lsp",
            Principle::InterfaceSegregation => "isp",
            Principle::DependencyInversion => "dip",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            Principle::SingleResponsibility => "single-responsibility",
            Principle::OpenClosed => "open-closed",
            Principle::LiskovSubstitution => "liskov-substitution",
            Principle::InterfaceSegregation => "interface-segregation",
            Principle::DependencyInversion => "dependency-inversion",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Principle::SingleResponsibility => "Single Responsibility Principle",
            Principle::OpenClosed => "Open/Closed Principle",
            Principle::LiskovSubstitution => "Liskov Substitution Principle",
            Principle::InterfaceSegregation => "Interface Segregation Principle",
            Principle::DependencyInversion => "Dependency Inversion Principle",
        }
    }

    pub fn motto(self) -> &'static str {
        match self {
            Principle::SingleResponsibility => "...You had one job",
            Principle::OpenClosed => "Extend, don't modify.",
            Principle::LiskovSubstitution => {
                "I know I can trust you to do what I expect you to do!"
            }
            Principle::InterfaceSegregation => {
                "Don't force clients to depend on interfaces they don't use!"
            }
            Principle::DependencyInversion => "Don't trust anyone below you!",
        }
    }
}

impl fmt::Display for Principle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.title(), self.code().to_uppercase())
    }
}

impl FromStr for Principle {
    type Err = SolidError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Principle::ALL
            .into_iter()
            .find(|p| p.code() == wanted || p.slug() == wanted)
            .ok_or_else(|| SolidError::UnknownPrinciple(s.to_string()))
    }
}

// Config files accept the same spellings as the command line.
impl TryFrom<String> for Principle {
    type Error = SolidError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Comma separated short codes, for usage text.
pub fn principle_codes() -> String {
    Principle::ALL.iter().map(|p| p.code()).join(", ")
}

// =============================================================================
// Report
// =============================================================================

pub struct Report {
    principles: Vec<Principle>,
    color: bool,
    database: Option<PathBuf>,
    specials: Vec<Special>,
}

impl Report {
    pub fn new(config: &SolidConfig) -> Self {
        Report {
            principles: config.principles.clone(),
            color: config.use_color(),
            database: config.database.clone(),
            specials: config.special_dishes().collect(),
        }
    }

    pub fn run_all(&self, out: &mut impl Write) -> Result<()> {
        for (index, principle) in self.principles.iter().enumerate() {
            if index > 0 {
                writeln!(out)?;
            }
            self.run(out, *principle)?;
        }
        Ok(())
    }

    pub fn run(&self, out: &mut impl Write, principle: Principle) -> Result<()> {
        debug!(principle = principle.code(), "running walkthrough");
        let header = format!("== {principle} ==");
        writeln!(out, "{}", self.paint(&header, |s| s.bold().cyan()))?;
        writeln!(out, "\"{}\"", principle.motto())?;

        writeln!(out, "{}", self.paint("Before:", |s| s.red()))?;
        match principle {
            Principle::SingleResponsibility => self.srp_before(out)?,
            Principle::OpenClosed => self.ocp_before(out)?,
            Principle::LiskovSubstitution => self.lsp_before(out)?,
            Principle::InterfaceSegregation => self.isp_before(out)?,
            Principle::DependencyInversion => self.dip_before(out)?,
        }

        writeln!(out, "{}", self.paint("After:", |s| s.green()))?;
        match principle {
            Principle::SingleResponsibility => self.srp_after(out)?,
            Principle::OpenClosed => self.ocp_after(out)?,
            Principle::LiskovSubstitution => self.lsp_after(out)?,
            Principle::InterfaceSegregation => self.isp_after(out)?,
            Principle::DependencyInversion => self.dip_after(out)?,
        }
        Ok(())
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    // Illustrative failures are part of the lesson, so they are written out
    // rather than propagated.
    fn failure(&self, out: &mut impl Write, err: &SolidError) -> Result<()> {
        let line = format!("error: {err}");
        writeln!(out, "{}", self.paint(&line, |s| s.yellow()))?;
        Ok(())
    }

    fn srp_before(&self, out: &mut impl Write) -> Result<()> {
        let conn = Connection::open_in_memory()?;
        let user = srp::before::User::new("alice");
        let id = user.save_to_database(&conn)?;
        writeln!(out, "User '{}' saved itself as {id}", user.username())?;
        Ok(())
    }

    fn srp_after(&self, out: &mut impl Write) -> Result<()> {
        let repository = match &self.database {
            Some(path) => SqliteUserRepository::open(path)?,
            None => SqliteUserRepository::open_in_memory()?,
        };
        let mut service = UserService::new("alice", repository);
        let id = service.save()?;
        let stored = service.repository().get(id)?;
        writeln!(out, "UserService saved '{}' as {id}", service.username())?;
        if let Some(user) = stored {
            writeln!(out, "UserRepository returned '{}'", user.username())?;
        }
        Ok(())
    }

    fn ocp_before(&self, out: &mut impl Write) -> Result<()> {
        for kind in ["pasta", "pizza", "burger", "salad"] {
            writeln!(out, "{}", ocp::before::Dish::new(kind))?;
        }
        Ok(())
    }

    fn ocp_after(&self, out: &mut impl Write) -> Result<()> {
        let mut menu = Menu::standard();
        menu.add(Salad);
        for special in &self.specials {
            menu.add(special.clone());
        }
        ocp::print_menu(out, &menu)?;
        writeln!(out, "{} dishes, ${:.2} in total", menu.len(), menu.total())?;
        Ok(())
    }

    fn lsp_before(&self, out: &mut impl Write) -> Result<()> {
        lsp::before::make_bird_fly(out, &lsp::before::Sparrow)?;
        if let Err(err) = lsp::before::make_bird_fly(out, &lsp::before::Penguin) {
            self.failure(out, &err)?;
        }
        Ok(())
    }

    fn lsp_after(&self, out: &mut impl Write) -> Result<()> {
        lsp::make_bird_sound(out, &lsp::Sparrow)?;
        lsp::make_bird_sound(out, &lsp::Penguin)?;
        lsp::make_bird_fly(out, &lsp::Sparrow)?;
        Ok(())
    }

    fn isp_before(&self, out: &mut impl Write) -> Result<()> {
        use isp::before::Worker;

        let worker = isp::before::PrintWorker;
        for outcome in [
            worker.print_document(),
            worker.scan_document(),
            worker.fax_document(),
        ] {
            match outcome {
                Ok(line) => writeln!(out, "{line}")?,
                Err(err) => self.failure(out, &err)?,
            }
        }
        Ok(())
    }

    fn isp_after(&self, out: &mut impl Write) -> Result<()> {
        isp::perform_printing(out, &isp::PrintWorker)?;
        isp::perform_scanning(out, &isp::ScanWorker)?;
        isp::perform_faxing(out, &isp::FaxWorker)?;
        Ok(())
    }

    fn dip_before(&self, out: &mut impl Write) -> Result<()> {
        dip::before::Switch::new(dip::before::LightBulb).operate(out)?;
        Ok(())
    }

    fn dip_after(&self, out: &mut impl Write) -> Result<()> {
        dip::Switch::new(dip::LightBulb).operate(out)?;
        let led = dip::Switch::new(dip::LedLight);
        led.operate(out)?;
        led.release(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn plain_config(principles: &[Principle]) -> SolidConfig {
        SolidConfig {
            principles: principles.to_vec(),
            color: false,
            ..SolidConfig::default()
        }
    }

    fn render(config: &SolidConfig) -> String {
        let mut out = Vec::new();
        Report::new(config).run_all(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_principle_names() {
        assert_eq!(
            "srp".parse::<Principle>().unwrap(),
            Principle::SingleResponsibility
        );
        assert_eq!("Open-Closed".parse::<Principle>().unwrap(), Principle::OpenClosed);
        assert_eq!(
            "interface_segregation".parse::<Principle>().unwrap(),
            Principle::InterfaceSegregation
        );
        assert!(matches!(
            "kiss".parse::<Principle>(),
            Err(SolidError::UnknownPrinciple(name)) if name == "kiss"
        ));
    }

    #[test]
    fn test_principle_display() {
        assert_eq!(
            Principle::LiskovSubstitution.to_string(),
            "Liskov Substitution Principle (LSP)"
        );
        assert_eq!(principle_codes(), "srp, ocp, lsp, isp, dip");
    }

    #[test]
    fn test_lsp_walkthrough() {
        let output = render(&plain_config(&[Principle::LiskovSubstitution]));
        assert_eq!(
            output,
            "== Liskov Substitution Principle (LSP) ==\n\
             \"I know I can trust you to do what I expect you to do!\"\n\
             Before:\n\
             I can fly!\n\
             error: not implemented: Penguins cannot fly!\n\
             After:\n\
             Chirp Chirp\n\
             Honk Honk\n\
             I can fly!\n"
        );
    }

    #[test]
    fn test_isp_walkthrough_shows_forced_failures() {
        let output = render(&plain_config(&[Principle::InterfaceSegregation]));
        assert!(output.contains("error: not implemented: This worker doesn't scan.\n"));
        assert!(output.contains("error: not implemented: This worker doesn't fax.\n"));
        assert!(output.ends_with("Printing document\nScanning document\nFaxing document\n"));
    }

    #[test]
    fn test_ocp_walkthrough_includes_specials() {
        let mut config = plain_config(&[Principle::OpenClosed]);
        config.specials.push(crate::config::SpecialConfig {
            description: "Chef's Soup".to_string(),
            price: 6.5,
        });

        let output = render(&config);
        assert!(output.contains("Unknown Dish - $0.00\n"));
        assert!(output.contains("Fresh Garden Salad - $8.99\n"));
        assert!(output.contains("Chef's Soup - $6.50\n"));
        assert!(output.contains("5 dishes, $55.46 in total\n"));
    }

    #[test]
    fn test_dip_walkthrough() {
        let output = render(&plain_config(&[Principle::DependencyInversion]));
        assert!(output.ends_with(
            "After:\n\
             Switch: Operating\n\
             LightBulb: Turning on\n\
             Switch: Operating\n\
             LEDLight: Turning on\n\
             Switch: Releasing\n\
             LEDLight: Turning off\n"
        ));
    }

    #[test]
    fn test_srp_walkthrough_uses_configured_database() {
        let db = NamedTempFile::new().unwrap();
        let mut config = plain_config(&[Principle::SingleResponsibility]);
        config.database = Some(db.path().to_path_buf());

        let output = render(&config);
        assert!(output.contains("User 'alice' saved itself as #1\n"));
        assert!(output.contains("UserService saved 'alice' as #1\n"));
        assert!(output.contains("UserRepository returned 'alice'\n"));

        let repo = SqliteUserRepository::open(db.path()).unwrap();
        assert!(repo.get(srp::UserId(1)).unwrap().is_some());
    }

    #[test]
    fn test_run_all_in_configured_order() {
        let output = render(&plain_config(&Principle::ALL));
        let positions: Vec<usize> = Principle::ALL
            .iter()
            .map(|p| output.find(&format!("== {p} ==")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
