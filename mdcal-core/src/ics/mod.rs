//! iCal output.
//!
//! This module writes RFC 5545 calendar files from parsed events.

mod generate;

pub use generate::generate_ics;
