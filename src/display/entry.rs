//! Entry display formatting
//!
//! Formats entries for terminal display, keeping the on-screen numbering
//! identical to the 1-based positions the ledger operations accept.

use crate::models::Entry;

/// Format a single entry under its position header
pub fn format_numbered_entry(position: usize, entry: &Entry) -> String {
    format!("Entry #{}\n{}", position, entry)
}

/// Format a sequence of (position, entry) pairs
///
/// Positions are printed as given, so filtered listings keep their original
/// numbering.
pub fn format_entry_list<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = (usize, &'a Entry)>,
{
    let mut output = String::new();
    let mut any = false;

    for (position, entry) in entries {
        any = true;
        output.push_str(&format_numbered_entry(position, entry));
        output.push('\n');
    }

    if !any {
        return "No entries found.\n".to_string();
    }

    output
}
