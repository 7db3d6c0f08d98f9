//! Path resolution command

use crate::shell;
use anyhow::{bail, Result};
use colored::Colorize;
use hotlist_core::{Outcome, ServeConfig};

/// Resolve a path against the route table and show the activation
pub async fn resolve_command(config: ServeConfig, path: String) -> Result<()> {
    let app = shell::mount(&config).await?;

    match app.navigate(&path).await? {
        Outcome::Activated(route) => {
            println!("route:    {}", route.name.as_str().green());
            println!("path:     {}", route.path);
            if let Some(from) = &route.redirected_from {
                println!("redirect: {from} {} {}", "->".dimmed(), route.path);
            }

            let mut params: Vec<_> = route.params.iter().collect();
            params.sort();
            for (key, value) in params {
                println!("param:    {key}={value}");
            }

            if let Some(location) = app.location() {
                println!("location: {location}");
            }

            println!();
            println!("{}", app.render());
            Ok(())
        }
        Outcome::Fallback { path } => bail!("no route matches '{path}'"),
        Outcome::Superseded => Ok(()),
    }
}
