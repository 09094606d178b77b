//! Plain-text rendering of submission outcomes and the profile table.

use std::collections::BTreeMap;
use std::io::{self, Write};

use crate::client::{Listing, Notification};

const HEADERS: [&str; 5] = ["Full Name", "Username", "Email", "Department", "Role"];

pub fn print_notification(out: &mut impl Write, n: &Notification) -> io::Result<()> {
    let marker = if n.variant == "destructive" { "!!" } else { "ok" };
    writeln!(out, "[{marker}] {}: {}", n.title, n.description)
}

pub fn print_field_errors(
    out: &mut impl Write,
    fields: &BTreeMap<String, Vec<String>>,
) -> io::Result<()> {
    for (field, messages) in fields {
        for message in messages {
            writeln!(out, "{field}: {message}")?;
        }
    }
    Ok(())
}

/// Print the listing as an aligned table. An empty listing prints only the
/// button caption; while loading, the caption precedes the rows already held.
pub fn print_listing(out: &mut impl Write, listing: &Listing) -> io::Result<()> {
    if !listing.show_table {
        return writeln!(out, "({})", listing.button_label);
    }
    if listing.loading {
        writeln!(out, "({})", listing.button_label)?;
    }

    let cells: Vec<[String; 5]> = listing
        .rows
        .iter()
        .map(|r| {
            [
                r.full_name.clone(),
                r.username.clone(),
                r.email.clone(),
                r.department.to_string(),
                r.role.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_row(out, &HEADERS.map(str::to_owned), &widths)?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    writeln!(out, "{}", rule.join("-+-"))?;
    for row in &cells {
        write_row(out, row, &widths)?;
    }
    writeln!(out, "{} profile(s)", cells.len())
}

fn write_row(out: &mut impl Write, cells: &[String; 5], widths: &[usize; 5]) -> io::Result<()> {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        // Padding counts chars, so Greek text stays aligned.
        .map(|(cell, &width)| format!("{cell:width$}"))
        .collect();
    writeln!(out, "{}", padded.join(" | ").trim_end())
}
