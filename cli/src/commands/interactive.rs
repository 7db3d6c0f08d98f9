//! Interactive navigation loop

use crate::shell;
use anyhow::Result;
use colored::Colorize;
use hotlist_core::api::ApiClient;
use hotlist_core::{App, ServeConfig};
use std::io::Write;
use tokio::io::AsyncBufReadExt;

/// Run the shell as a line-based navigation loop
///
/// Each input line is a path to navigate; `:`-prefixed lines are shell
/// commands.
pub async fn interactive_command(config: ServeConfig) -> Result<()> {
    let app = shell::mount(&config).await?;
    let api = match &config.server {
        Some(server) => Some(ApiClient::new(server.clone())?),
        None => None,
    };

    println!("{}", app.render());
    println!();

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt(&app);
        let Some(line) = lines.next_line().await? else {
            break;
        };

        match line.trim() {
            "" => continue,
            ":quit" | ":q" => break,
            ":routes" => {
                for entry in app.router().table().entries() {
                    let indent = "  ".repeat(entry.depth);
                    println!("{indent}{}  {}", entry.path.cyan(), entry.name);
                }
            }
            ":back" => match app.back().await? {
                Some(_) => println!("{}", app.render()),
                None => println!("{}", "history is empty".dimmed()),
            },
            ":hot" => fetch_hot_list(api.as_ref()).await,
            path => match app.navigate(path).await {
                Ok(_) => println!("{}", app.render()),
                Err(err) => eprintln!("{} {err}", "error:".red()),
            },
        }
    }

    Ok(())
}

fn prompt(app: &App) {
    let location = app.location().unwrap_or_else(|| "-".to_string());
    print!("{} ", location.as_str().bold());
    let _ = std::io::stdout().flush();
}

async fn fetch_hot_list(api: Option<&ApiClient>) {
    let Some(api) = api else {
        println!(
            "{}",
            "no backend configured; set --server or HOTLIST_SERVER".yellow()
        );
        return;
    };

    match api.hot_list(None).await {
        Ok(items) if items.is_empty() => println!("hot list is empty"),
        Ok(items) => {
            for item in items {
                match &item.extra {
                    Some(extra) => println!(
                        "{}  {}  {}",
                        item.title.as_str().bold(),
                        extra,
                        item.link.as_str().dimmed()
                    ),
                    None => println!(
                        "{}  {}",
                        item.title.as_str().bold(),
                        item.link.as_str().dimmed()
                    ),
                }
            }
        }
        Err(err) => eprintln!("{} {err}", "fetch failed:".red()),
    }
}
