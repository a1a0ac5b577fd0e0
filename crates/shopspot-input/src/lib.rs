//! Shopspot Input -- reading test cases and writing their answers.
//!
//! - [`limits`] holds the accepted ranges for every input value and loads
//!   overrides from RON, TOML or JSON files.
//! - [`parser`] turns the line-oriented case stream into validated
//!   [`parser::TestCase`] values.
//! - [`report`] formats simulator results with 1-based coordinates.
//! - [`driver`] ties the three together over a reader and a writer.

pub mod driver;
pub mod error;
pub mod limits;
pub mod parser;
pub mod report;

pub use driver::{DriverError, RunMode, process_stream};
pub use error::InputError;
pub use limits::{Bounds, InputLimits, LimitsLoadError, load_limits};
pub use parser::{CaseReader, TestCase};
pub use report::CaseReport;
