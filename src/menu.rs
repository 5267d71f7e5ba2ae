//! Interactive menu: prompt, read one choice, dispatch to a report.

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::grid::Grid;
use crate::report::{write_grid_report, write_plant_report};

/// Menu prompt lines, printed verbatim.
pub const PROMPT_LINES: [&str; 2] = [
    "1) Generatee Power Plant Report",
    "2) Generatee Power Grid Report",
];

/// Trailing prompt; no newline follows it.
pub const CHOOSE_PROMPT: &str = "Please choose an option: ";

/// Printed for any input other than `1` or `2`.
pub const UNKNOWN_REQUEST: &str = "Unknown request, exiting applciation...";

/// A dispatched menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    PlantReport,
    GridReport,
    Unknown,
}

impl MenuChoice {
    /// Interprets the first whitespace-delimited token of `line`.
    pub fn parse(line: &str) -> Self {
        match line.split_whitespace().next() {
            Some("1") => Self::PlantReport,
            Some("2") => Self::GridReport,
            _ => Self::Unknown,
        }
    }
}

/// Dispatcher states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    AwaitingInput,
    Dispatched(MenuChoice),
    Exit,
}

/// Writes the menu prompt.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_prompt(mut writer: impl Write) -> io::Result<()> {
    for line in PROMPT_LINES {
        writeln!(writer, "{line}")?;
    }
    write!(writer, "{CHOOSE_PROMPT}")?;
    writer.flush()
}

/// Reads one line and interprets it as a menu choice.
///
/// Read failures and end of input resolve to [`MenuChoice::Unknown`].
pub fn read_choice(mut input: impl BufRead) -> MenuChoice {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => {
            debug!("input closed before a choice was entered");
            MenuChoice::Unknown
        }
        Ok(_) => MenuChoice::parse(&line),
        Err(e) => {
            debug!(error = %e, "failed to read menu choice");
            MenuChoice::Unknown
        }
    }
}

/// Runs the menu once: prompt, read, dispatch, exit.
///
/// Returns the choice that was dispatched.
///
/// # Errors
///
/// Returns an `io::Error` only if writing to `output` fails.
pub fn run(
    grid: &Grid,
    mut input: impl BufRead,
    mut output: impl Write,
) -> io::Result<MenuChoice> {
    let mut state = MenuState::AwaitingInput;
    let mut dispatched = MenuChoice::Unknown;

    loop {
        state = match state {
            MenuState::AwaitingInput => {
                write_prompt(&mut output)?;
                MenuState::Dispatched(read_choice(&mut input))
            }
            MenuState::Dispatched(choice) => {
                info!(?choice, "dispatching menu choice");
                match choice {
                    MenuChoice::PlantReport => write_plant_report(grid, &mut output)?,
                    MenuChoice::GridReport => write_grid_report(grid, &mut output)?,
                    MenuChoice::Unknown => {
                        writeln!(output, "{UNKNOWN_REQUEST}")?;
                        output.flush()?;
                    }
                }
                dispatched = choice;
                MenuState::Exit
            }
            MenuState::Exit => return Ok(dispatched),
        };
    }
}
