//! Output formatting for address and subnet reports.
//!
//! - [`report`] - the data printed for one address
//! - [`terminal`] - aligned terminal output with colors
//! - [`json`] - JSON output

mod json;
mod report;
mod terminal;

pub use json::to_json;
pub use report::Report;
pub use terminal::{format_label, print_report, report_rows};
