//! Check commands: check, start.

use crate::namelist::store;
use crate::output::OutputControls;
use crate::reply;
use anyhow::Result;
use serde_json::json;
use std::path::Path;

/// Check a name against the watchlist and print the reply.
pub fn run(text: &str, names_file: &Path, output: &OutputControls) -> Result<()> {
    let list = store::load_list(names_file);
    let result = list.lookup(text);
    let rendered = reply::render(&result);

    if output.json {
        output.print(&json!({
            "query": text,
            "outcome": result.kind(),
            "reply": rendered,
            "suggestions": result.suggestions(),
        }));
    } else {
        println!("{}", rendered);
    }

    Ok(())
}

/// Print the welcome/instructions message.
pub fn start(output: &OutputControls) -> Result<()> {
    if output.json {
        output.print(&json!({ "reply": reply::WELCOME }));
    } else {
        println!("{}", reply::WELCOME);
    }

    Ok(())
}
