use crate::prelude::{println, *};
use crosspost_core::Dialect;
use serde::Serialize;

#[derive(Debug, clap::Args, Clone)]
pub struct DialectsOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct DialectEntry {
    pub id: &'static str,
    pub description: &'static str,
}

pub fn dialect_entries() -> Vec<DialectEntry> {
    Dialect::ALL
        .iter()
        .map(|dialect| DialectEntry {
            id: dialect.as_str(),
            description: dialect.description(),
        })
        .collect()
}

pub fn run(options: DialectsOptions, global: crate::Global) -> Result<()> {
    let entries = dialect_entries();

    if global.verbose {
        println!("{} dialect(s) registered", entries.len());
    }

    if options.json {
        let json = serde_json::to_string_pretty(&entries)?;
        println!("{}", json);
        return Ok(());
    }

    let mut table = new_table();
    table.add_row(prettytable::row!["Dialect", "Description"]);
    for entry in &entries {
        table.add_row(prettytable::row![entry.id, entry.description]);
    }
    println!("{}", table);

    Ok(())
}
