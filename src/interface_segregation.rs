//! Interface Segregation Principle: "Don't force clients to depend on
//! interfaces they don't use!"
//!
//! One wide `Worker` trait becomes three narrow ones. Each worker implements
//! only what it can do, and each caller asks only for what it needs.
//!
//! Asking a print-only worker to scan no longer compiles:
//!
//! ```compile_fail
//! use solid_principles::interface_segregation::{perform_scanning, PrintWorker};
//!
//! let mut out = Vec::new();
//! perform_scanning(&mut out, &PrintWorker).unwrap();
//! ```

use std::io::Write;

// =============================================================================
// Before: one trait for every task
// =============================================================================

pub mod before {
    use crate::error::{Result, SolidError};

    pub trait Worker {
        fn print_document(&self) -> Result<&'static str>;
        fn scan_document(&self) -> Result<&'static str>;
        fn fax_document(&self) -> Result<&'static str>;
    }

    /// Only prints, but has to answer for scanning and faxing too.
    pub struct PrintWorker;

    impl Worker for PrintWorker {
        fn print_document(&self) -> Result<&'static str> {
            Ok("Printing document")
        }

        fn scan_document(&self) -> Result<&'static str> {
            Err(SolidError::not_implemented("This worker doesn't scan."))
        }

        fn fax_document(&self) -> Result<&'static str> {
            Err(SolidError::not_implemented("This worker doesn't fax."))
        }
    }
}

// =============================================================================
// After: one trait per capability
// =============================================================================

pub trait Printer {
    fn print_document(&self) -> &'static str;
}

pub trait Scanner {
    fn scan_document(&self) -> &'static str;
}

pub trait Faxer {
    fn fax_document(&self) -> &'static str;
}

pub struct PrintWorker;

impl Printer for PrintWorker {
    fn print_document(&self) -> &'static str {
        "Printing document"
    }
}

pub struct ScanWorker;

impl Scanner for ScanWorker {
    fn scan_document(&self) -> &'static str {
        "Scanning document"
    }
}

pub struct FaxWorker;

impl Faxer for FaxWorker {
    fn fax_document(&self) -> &'static str {
        "Faxing document"
    }
}

/// Opts into all three interfaces because it really does all three.
pub struct MultiFunctionDevice;

impl Printer for MultiFunctionDevice {
    fn print_document(&self) -> &'static str {
        "Printing document"
    }
}

impl Scanner for MultiFunctionDevice {
    fn scan_document(&self) -> &'static str {
        "Scanning document"
    }
}

impl Faxer for MultiFunctionDevice {
    fn fax_document(&self) -> &'static str {
        "Faxing document"
    }
}

// Client code depends on exactly one capability each.

pub fn perform_printing(out: &mut impl Write, worker: &impl Printer) -> std::io::Result<()> {
    writeln!(out, "{}", worker.print_document())
}

pub fn perform_scanning(out: &mut impl Write, worker: &impl Scanner) -> std::io::Result<()> {
    writeln!(out, "{}", worker.scan_document())
}

pub fn perform_faxing(out: &mut impl Write, worker: &impl Faxer) -> std::io::Result<()> {
    writeln!(out, "{}", worker.fax_document())
}

#[cfg(test)]
mod tests {
    use super::before::Worker;
    use super::*;

    #[test]
    fn test_each_worker_does_its_job() {
        let mut out = Vec::new();
        perform_printing(&mut out, &PrintWorker).unwrap();
        perform_scanning(&mut out, &ScanWorker).unwrap();
        perform_faxing(&mut out, &FaxWorker).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Printing document\nScanning document\nFaxing document\n"
        );
    }

    #[test]
    fn test_multifunction_device_satisfies_every_client() {
        let device = MultiFunctionDevice;
        assert_eq!(device.print_document(), PrintWorker.print_document());
        assert_eq!(device.scan_document(), ScanWorker.scan_document());
        assert_eq!(device.fax_document(), FaxWorker.fax_document());
    }

    #[test]
    fn test_before_worker_fails_unused_methods() {
        let worker = before::PrintWorker;
        assert_eq!(worker.print_document().unwrap(), "Printing document");
        assert_eq!(
            worker.scan_document().unwrap_err().to_string(),
            "not implemented: This worker doesn't scan."
        );
        assert_eq!(
            worker.fax_document().unwrap_err().to_string(),
            "not implemented: This worker doesn't fax."
        );
    }
}
