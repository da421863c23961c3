//! Terminal output utilities.

use super::Report;
use colored::Colorize;

/// Width of the label column.
const LABEL_WIDTH: usize = 10;

/// Right-align a label followed by a colon.
///
/// # Arguments
/// * `label` - The label to format
/// * `width` - The minimum width of the label, colon excluded
pub fn format_label(label: &str, width: usize) -> String {
    format!("{label:>width$}:")
}

/// Labelled rows of a report, in print order.
///
/// Network and broadcast rows are left out for /31 and /32 subnets.
pub fn report_rows(report: &Report) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("address", report.address.to_string()),
        ("value", report.value.to_string()),
    ];

    if let Some(subnet) = report.subnet {
        rows.push(("cidr", subnet.to_string()));
        rows.push(("netmask", subnet.netmask().to_string()));
        if let Some(network) = subnet.network() {
            rows.push(("network", network.to_string()));
        }
        rows.push(("first", subnet.first().to_string()));
        rows.push(("last", subnet.last().to_string()));
        if let Some(broadcast) = subnet.broadcast() {
            rows.push(("broadcast", broadcast.to_string()));
        }
        rows.push(("size", subnet.size().to_string()));
    }
    rows
}

/// Print a report to stdout, one labelled row per line.
pub fn print_report(report: &Report) {
    for (label, value) in report_rows(report) {
        println!("{} {}", format_label(label, LABEL_WIDTH).bold(), value);
    }
}
