//! Core types and parsing for mdcal.
//!
//! This crate turns a markdown event list into structured [`Event`]s and
//! renders them as machine-consumable artifacts:
//! - `block` splits the document into heading-delimited event blocks
//! - `parse` turns each block into an [`Event`] (date-range resolution
//!   and tag extraction included), collecting per-block errors without
//!   aborting the rest of the document
//! - `ics` and `html` serialize the ordered event list into an RFC 5545
//!   calendar and a self-contained web page
//!
//! All parsing is pure: file I/O lives in the CLI.

pub mod block;
pub mod date;
pub mod error;
pub mod event;
pub mod html;
pub mod ics;
pub mod parse;
pub mod tags;

// Re-export the types callers deal with day to day
pub use error::{BlockError, ParseError};
pub use event::Event;
pub use parse::{ParseOutcome, parse_block, parse_document};
