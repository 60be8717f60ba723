//! Line-oriented front end.
//!
//! Reads commands from any async line source and interleaves them with
//! settlements arriving from the network, printing the list as it changes.

use std::io::Write;
use std::str::FromStr;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::domain::{Ingredient, NewIngredient};

use super::app::PantryApp;

pub const HELP: &str = "\
commands:
  add <title> <amount>   add an ingredient (amount is the last word)
  rm <id>                remove an ingredient
  search [title]         load the list, optionally only exact title matches
  list                   show the current list
  clear                  dismiss the current error
  quit                   leave";

#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Add(NewIngredient),
    Remove(String),
    Search(String),
    List,
    Clear,
    Help,
    Quit,
}

impl FromStr for ShellCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map(|(v, r)| (v, r.trim()))
            .unwrap_or((line, ""));

        match verb.to_ascii_lowercase().as_str() {
            "add" => {
                let Some((title, amount)) = rest.rsplit_once(char::is_whitespace) else {
                    return Err("usage: add <title> <amount>".into());
                };
                let title = title.trim();
                if title.is_empty() {
                    return Err("usage: add <title> <amount>".into());
                }
                Ok(ShellCommand::Add(NewIngredient::new(title, amount)))
            }
            "rm" | "remove" | "delete" => {
                if rest.is_empty() {
                    return Err("usage: rm <id>".into());
                }
                Ok(ShellCommand::Remove(rest.to_string()))
            }
            "search" | "filter" => Ok(ShellCommand::Search(rest.to_string())),
            "list" | "ls" => Ok(ShellCommand::List),
            "clear" => Ok(ShellCommand::Clear),
            "help" | "?" => Ok(ShellCommand::Help),
            "quit" | "exit" => Ok(ShellCommand::Quit),
            other => Err(format!("unknown command `{other}` (try `help`)")),
        }
    }
}

pub fn render_list(items: &[Ingredient]) -> String {
    if items.is_empty() {
        return "(no ingredients)".to_string();
    }
    items
        .iter()
        .map(|i| format!("- {i}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub async fn run_shell<R, W>(app: &mut PantryApp, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<ShellCommand>() {
                    Ok(ShellCommand::Quit) => break,
                    Ok(command) => execute(app, command, out)?,
                    Err(err) => writeln!(out, "{err}")?,
                }
            }
            received = app.wait_for_action() => {
                if !received {
                    break;
                }
                report(app, out)?;
            }
        }
    }

    if app.state.is_busy() {
        app.settle().await;
        report(app, out)?;
    }
    Ok(())
}

pub fn execute<W: Write>(app: &mut PantryApp, command: ShellCommand, out: &mut W) -> Result<()> {
    match command {
        ShellCommand::Add(ingredient) => {
            writeln!(out, "adding {}...", ingredient.title)?;
            if let Err(err) = app.add_ingredient(ingredient) {
                writeln!(out, "error: {err}")?;
            }
        }
        ShellCommand::Remove(id) => {
            writeln!(out, "removing {id}...")?;
            if let Err(err) = app.remove_ingredient(id) {
                writeln!(out, "error: {err}")?;
            }
        }
        ShellCommand::Search(filter) => {
            writeln!(out, "loading...")?;
            app.search_ingredients(filter);
        }
        ShellCommand::List => writeln!(out, "{}", render_list(app.ingredients()))?,
        ShellCommand::Clear => app.dismiss_errors(),
        ShellCommand::Help => writeln!(out, "{HELP}")?,
        ShellCommand::Quit => {}
    }
    Ok(())
}

fn report<W: Write>(app: &PantryApp, out: &mut W) -> Result<()> {
    if let Some(err) = app.error() {
        writeln!(out, "error: {err} (`clear` to dismiss)")?;
    }
    if !app.state.is_busy() {
        writeln!(out, "{}", render_list(app.ingredients()))?;
    }
    Ok(())
}
