//! List command implementation

use super::ListCommands;
use anyhow::Result;
use ucoll_api::Attribute;

/// Execute a list subcommand
pub fn execute(what: ListCommands) -> Result<()> {
    for line in lines(what)? {
        println!("{line}");
    }
    Ok(())
}

fn lines(what: ListCommands) -> Result<Vec<String>> {
    Ok(match what {
        ListCommands::Locales => ucoll_core::available_locales(),
        ListCommands::Keywords => ucoll_core::keywords()?
            .into_iter()
            .map(|(keyword, values)| format!("{keyword}: {}", values.join(", ")))
            .collect(),
        ListCommands::Overrides => ucoll_core::override_locales()
            .into_iter()
            .map(str::to_owned)
            .collect(),
        ListCommands::Attributes => Attribute::ALL
            .iter()
            .map(|attribute| {
                let values: Vec<&str> = attribute
                    .supported_values()
                    .iter()
                    .map(|value| value.name())
                    .collect();
                format!("{attribute}: default, {}", values.join(", "))
            })
            .collect(),
    })
}
