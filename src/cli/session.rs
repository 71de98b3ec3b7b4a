//! Interactive, line-driven converter screen
//!
//! Each input line is one host event. The session plays the role of the UI
//! toolkit: it owns the widgets, forwards their notifications to the
//! [`Screen`] and redraws the state after every event.

use super::ui;
use crate::core::config::AppConfig;
use crate::core::{Converter, CurrencySelector, MemoryInput, MemorySelector, Screen, Side};
use anyhow::{Result, bail};
use std::io::{BufRead, Write};
use tracing::debug;

const HELP: &str = "\
Commands:
  a <amount>       edit field A (empty clears it)
  b <amount>       edit field B
  focus a|b        move focus to a field
  cur a|b <CODE>   select a currency for a field
  show             redraw the fields
  help             show this help
  quit             leave the session";

#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Edit(Side, String),
    Focus(Side),
    Currency(Side, String),
    Show,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<SessionCommand> {
    let line = line.trim();
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(w, r)| (w, r.trim()));

    let command = match word.to_lowercase().as_str() {
        "a" => SessionCommand::Edit(Side::A, rest.to_string()),
        "b" => SessionCommand::Edit(Side::B, rest.to_string()),
        "focus" => SessionCommand::Focus(rest.parse()?),
        "cur" => {
            let Some((side, code)) = rest.split_once(char::is_whitespace) else {
                bail!("Usage: cur a|b <CODE>");
            };
            SessionCommand::Currency(side.parse()?, code.trim().to_string())
        }
        "show" => SessionCommand::Show,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" | "q" => SessionCommand::Quit,
        "" => bail!("Empty command"),
        other => bail!("Unknown command: {other}"),
    };
    Ok(command)
}

pub type MemoryScreen = Screen<MemoryInput, MemorySelector>;

pub fn new_screen(config: &AppConfig) -> Result<MemoryScreen> {
    let rates = config.rate_table()?;
    let selector = || MemorySelector::new(rates.codes(), "");
    let selectors = [selector(), selector()];
    let converter = Converter::new(rates.clone(), &config.currency_a, &config.currency_b)?;
    Ok(Screen::new(
        converter,
        [MemoryInput::new(), MemoryInput::new()],
        selectors,
    ))
}

/// Applies one command to the screen. Returns `false` once the session ends.
pub fn apply<W: Write>(
    screen: &mut MemoryScreen,
    command: SessionCommand,
    out: &mut W,
) -> Result<bool> {
    match command {
        SessionCommand::Edit(side, text) => {
            screen.focus_gained(side);
            screen.input_mut(side).type_text(&text);
            if let Some(update) = screen.text_changed(side) {
                // Hosts report programmatic writes as changes too
                screen.text_changed(update.side);
            }
        }
        SessionCommand::Focus(side) => screen.focus_gained(side),
        SessionCommand::Currency(side, code) => {
            screen.selector_mut(side).select(&code);
            match screen.selection_changed(side) {
                Ok(update) => {
                    screen.text_changed(update.side);
                }
                Err(e) => {
                    let current = screen.state().currency(side).to_string();
                    let selector = screen.selector_mut(side);
                    selector.select(&current);
                    let available = format!("Available: {}", selector.options().join(", "));
                    writeln!(out, "{}", ui::style_text(&e.to_string(), ui::StyleType::Error))?;
                    writeln!(out, "{}", ui::style_text(&available, ui::StyleType::Subtle))?;
                }
            }
        }
        SessionCommand::Show => {}
        SessionCommand::Help => {
            writeln!(out, "{}", ui::style_text(HELP, ui::StyleType::Subtle))?;
            return Ok(true);
        }
        SessionCommand::Quit => return Ok(false),
    }

    writeln!(out, "{}", ui::state_table(screen.state()))?;
    Ok(true)
}

/// Runs the session until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(config: &AppConfig, input: R, out: &mut W) -> Result<()> {
    let mut screen = new_screen(config)?;
    writeln!(
        out,
        "{}",
        ui::style_text("Currency converter", ui::StyleType::Title)
    )?;
    writeln!(out, "{}", ui::style_text(HELP, ui::StyleType::Subtle))?;
    writeln!(out, "{}", ui::state_table(screen.state()))?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        debug!(line = %line, "Session input");

        match parse_command(&line) {
            Ok(command) => {
                if !apply(&mut screen, command, out)? {
                    break;
                }
            }
            Err(e) => writeln!(out, "{}", ui::style_text(&e.to_string(), ui::StyleType::Error))?,
        }
    }
    Ok(())
}
