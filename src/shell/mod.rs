//! Interactive menu shell
//!
//! The numbered text menu the user drives the ledger from. All entry fields
//! are collected as free-text line prompts; destructive actions require an
//! explicit confirmation step before applying.
//!
//! The ledger is reloaded from the store at the top of every menu cycle and
//! every mutation is flushed back in full before the next prompt, so there
//! is no uncommitted in-memory state surviving past a single action.

use std::io::{self, BufRead, Write};

use crate::display::{format_entry_list, format_numbered_entry};
use crate::error::{WalletError, WalletResult};
use crate::models::entry::parse_date;
use crate::models::{Category, Entry};
use crate::services::{EntryQuery, Ledger};
use crate::storage::EntryStore;

/// Run the interactive session until the user exits
///
/// Creates the backing file on first run. Validation errors are reported
/// and the session continues; storage errors abort.
pub fn run(store: &EntryStore) -> WalletResult<()> {
    println!();
    println!("===========================================");
    println!("  Personal Finance Wallet");
    println!("===========================================");

    loop {
        if !store.exists() {
            store.initialize()?;
        }
        let mut ledger = Ledger::new(store.load()?);

        print_menu();
        let Some(choice) = prompt("> ")? else {
            break;
        };

        match choice.to_lowercase().as_str() {
            "1" => print!("{}", ledger.balance()),
            "2" => handle_add(store, &mut ledger)?,
            "3" => handle_edit(store, &mut ledger)?,
            "4" => handle_search(&ledger)?,
            "5" => print!("{}", format_entry_list(ledger.list_all())),
            "6" => handle_delete(store, &mut ledger)?,
            "exit" | "quit" | "q" => break,
            _ => println!("Unknown command."),
        }
    }

    println!("Goodbye.");
    Ok(())
}

/// Print the main menu
fn print_menu() {
    println!();
    println!("Choose a menu option.");
    println!("1 - Balance");
    println!("2 - Add an entry");
    println!("3 - Edit an entry");
    println!("4 - Search entries");
    println!("5 - List all entries");
    println!("6 - Delete an entry");
    println!("exit - Quit");
}

/// Collect fields for a new entry and append it
fn handle_add(store: &EntryStore, ledger: &mut Ledger) -> WalletResult<()> {
    let Some(entry) = prompt_entry()? else {
        return Ok(());
    };

    ledger.add(entry);
    store.save(ledger.entries())?;
    println!("Entry added.");
    Ok(())
}

/// Pick an entry, confirm, collect replacement fields, and swap it in
fn handle_edit(store: &EntryStore, ledger: &mut Ledger) -> WalletResult<()> {
    let Some(position) = select_entry(ledger, "edit")? else {
        return Ok(());
    };
    let Some(entry) = prompt_entry()? else {
        return Ok(());
    };

    ledger.edit(position, entry)?;
    store.save(ledger.entries())?;
    println!("Entry updated.");
    Ok(())
}

/// Pick an entry, confirm, and remove it
fn handle_delete(store: &EntryStore, ledger: &mut Ledger) -> WalletResult<()> {
    let Some(position) = select_entry(ledger, "delete")? else {
        return Ok(());
    };

    ledger.delete(position)?;
    store.save(ledger.entries())?;
    println!("Entry deleted.");
    Ok(())
}

/// Ask for a search field and value, then print the matching entries
fn handle_search(ledger: &Ledger) -> WalletResult<()> {
    println!("Search by which field?");
    println!("1 - Date");
    println!("2 - Category");
    println!("3 - Amount");

    let Some(field) = prompt("> ")? else {
        return Ok(());
    };

    let query = match field.as_str() {
        "1" => {
            let Some(raw) = prompt("Enter a date (YYYY-MM-DD): ")? else {
                return Ok(());
            };
            parse_date(&raw).map(EntryQuery::Date)
        }
        "2" => {
            let Some(raw) = prompt("Enter a category (Income or Expense): ")? else {
                return Ok(());
            };
            Category::parse_input(&raw).map(EntryQuery::Category)
        }
        "3" => {
            let Some(raw) = prompt("Enter an amount (e.g. 1500): ")? else {
                return Ok(());
            };
            parse_amount_for_search(&raw).map(EntryQuery::Amount)
        }
        _ => {
            println!("Unknown search field.");
            return Ok(());
        }
    };

    match query {
        Ok(query) => print!("{}", format_entry_list(ledger.filter(&query))),
        Err(err) => println!("{}", err),
    }

    Ok(())
}

/// Collect the four entry fields and validate them
///
/// Returns `None` on end of input. A validation failure is reported here
/// and also returns `None`, cancelling the action.
fn prompt_entry() -> WalletResult<Option<Entry>> {
    let Some(date) = prompt("Enter a date (YYYY-MM-DD): ")? else {
        return Ok(None);
    };
    let Some(category) = prompt("Enter a category (Income or Expense): ")? else {
        return Ok(None);
    };
    let Some(amount) = prompt("Enter an amount: ")? else {
        return Ok(None);
    };
    let Some(description) = prompt("Enter a description: ")? else {
        return Ok(None);
    };

    match Entry::from_input(&date, &category, &amount, &description) {
        Ok(entry) => Ok(Some(entry)),
        Err(err) if err.is_validation() => {
            println!("{}", err);
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

/// Ask for an entry position and confirm the action against it
///
/// Accepts `m` to cancel back to the menu. Rejects non-numeric and
/// out-of-range positions before asking for confirmation.
fn select_entry(ledger: &Ledger, action: &str) -> WalletResult<Option<usize>> {
    let Some(raw) = prompt(&format!(
        "Enter the number of the entry to {}, or M to return to the menu: ",
        action
    ))?
    else {
        return Ok(None);
    };

    if raw.eq_ignore_ascii_case("m") {
        return Ok(None);
    }

    let Ok(position) = raw.parse::<usize>() else {
        println!("Invalid entry number.");
        return Ok(None);
    };

    let entry = match ledger.get_one(position) {
        Ok(entry) => entry,
        Err(WalletError::IndexOutOfRange { .. }) => {
            println!("Invalid entry number.");
            return Ok(None);
        }
        Err(err) => return Err(err),
    };

    println!("Do you really want to {} this entry:", action);
    print!("{}", format_numbered_entry(position, entry));

    let Some(confirmation) = prompt("Press Y to confirm, anything else to cancel: ")? else {
        return Ok(None);
    };

    if confirmation.eq_ignore_ascii_case("y") {
        Ok(Some(position))
    } else {
        println!("Cancelled.");
        Ok(None)
    }
}

/// Prompt for one line of input
///
/// Returns `None` on end of input so a closed stdin ends the session
/// cleanly instead of spinning on the menu.
fn prompt(text: &str) -> WalletResult<Option<String>> {
    print!("{}", text);
    io::stdout().flush()?;

    let mut input = String::new();
    let bytes = io::stdin().lock().read_line(&mut input)?;
    if bytes == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

/// Coerce a search amount to an integer
///
/// Search values below 1 can't match any stored entry, but they are not a
/// construction, so only numeric coercion is enforced.
fn parse_amount_for_search(raw: &str) -> WalletResult<i64> {
    raw.trim()
        .parse()
        .map_err(|_| WalletError::InvalidAmount(raw.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_for_search_accepts_any_integer() {
        assert_eq!(parse_amount_for_search("1500").unwrap(), 1500);
        assert_eq!(parse_amount_for_search("0").unwrap(), 0);
        assert!(parse_amount_for_search("abc").is_err());
    }
}
