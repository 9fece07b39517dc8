//! Watchlist commands: names, add-name, init.

use crate::namelist::store;
use crate::output::OutputControls;
use anyhow::{Context, Result};
use std::path::Path;

/// List all names on the watchlist.
pub fn list(names_file: &Path, output: &OutputControls) -> Result<()> {
    let watchlist = store::load_list(names_file);
    let all = watchlist.all();

    if output.json {
        output.print(&all);
    } else {
        if all.is_empty() {
            println!("No names loaded.");
            println!("Add one with 'scamlist add-name <name>'.");
            return Ok(());
        }

        println!("Names ({}):", all.len());
        println!("{}", "-".repeat(50));
        for name in all {
            println!("{}", name);
        }
    }

    Ok(())
}

/// Add a name to the watchlist file.
///
/// Edits the file only; a running daemon keeps serving its startup snapshot.
pub fn add(name: &str, names_file: &Path) -> Result<()> {
    store::init_source(names_file)?;

    // Strict load on purpose: a malformed file should fail loudly here
    // rather than be overwritten with a one-entry list.
    let mut names = store::load(names_file)?;

    let folded = name.to_lowercase();
    if let Some(existing) = names.iter().find(|n| n.to_lowercase() == folded) {
        println!("'{}' is already on the list as '{}'", name, existing);
        return Ok(());
    }

    names.push(name.to_string());

    let json = serde_json::to_string_pretty(&names)?;
    std::fs::write(names_file, json)
        .with_context(|| format!("Failed to write names file: {:?}", names_file))?;

    println!("Added '{}' ({} names total)", name, names.len());

    Ok(())
}

/// Create an empty watchlist file if none exists.
pub fn init(names_file: &Path) -> Result<()> {
    if store::init_source(names_file)? {
        println!("Created empty names file at {:?}", names_file);
    } else {
        println!("Names file already exists at {:?}", names_file);
    }

    Ok(())
}
