//! Route table listing command

use crate::shell;
use anyhow::Result;
use colored::Colorize;
use hotlist_core::ServeConfig;

/// Print the validated route table in declaration order
pub async fn routes_command(config: ServeConfig) -> Result<()> {
    let router = shell::build_router(&config)?;

    for entry in router.table().entries() {
        let indent = "  ".repeat(entry.depth);
        match entry.redirect {
            Some(target) => println!(
                "{indent}{}  {}  [{}]  {} {}",
                entry.path.cyan(),
                entry.name,
                entry.view,
                "->".dimmed(),
                target.yellow()
            ),
            None => println!(
                "{indent}{}  {}  [{}]",
                entry.path.cyan(),
                entry.name,
                entry.view
            ),
        }
    }

    Ok(())
}
