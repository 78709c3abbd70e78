//! Terminal display formatting

pub mod entry;

pub use entry::{format_entry_list, format_numbered_entry};
