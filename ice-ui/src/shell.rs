//! Interactive line shell: one planner session driven by typed commands.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use ice_core::{Page, ParsePageError, PlanEvent};
use thiserror::Error;
use tracing::debug;

use crate::app::Planner;

pub const HELP: &str = "\
commands:
  set <field> <value>   change a field (team, logo, ice, hrs, pct, fix, coach, jersey, players)
  go <page>             open calculator, summary or settings
  show                  print the current page
  link                  print the shareable link
  copy                  copy the shareable link to the clipboard
  reset                 forget the saved plan and start over
  help                  this text
  quit                  leave the shell";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Set { name: String, value: String },
    Go(Page),
    Show,
    Link,
    Copy,
    Reset,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShellError {
    #[error("unknown command '{0}'; type 'help'")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error(transparent)]
    Page(#[from] ParsePageError),
}

impl FromStr for ShellCommand {
    type Err = ShellError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "set" => parse_assignment(rest)
                .map(|(name, value)| Self::Set {
                    name: name.to_string(),
                    value: value.to_string(),
                })
                .ok_or(ShellError::Usage("set <field> <value>")),
            "go" | "page" if rest.is_empty() => Err(ShellError::Usage("go <page>")),
            "go" | "page" => Ok(Self::Go(rest.parse()?)),
            "show" => Ok(Self::Show),
            "link" => Ok(Self::Link),
            "copy" => Ok(Self::Copy),
            "reset" => Ok(Self::Reset),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => Err(ShellError::Unknown(word.to_string())),
        }
    }
}

/// Splits `field value` or `field=value`. The value may be empty or
/// contain spaces.
pub fn parse_assignment(input: &str) -> Option<(&str, &str)> {
    let input = input.trim();
    let (name, value) = match input.split_once('=') {
        Some((name, value)) if !name.trim().contains(char::is_whitespace) => (name, value),
        _ => input
            .split_once(char::is_whitespace)
            .unwrap_or((input, "")),
    };
    let name = name.trim();
    if name.is_empty() {
        None
    } else {
        Some((name, value.trim()))
    }
}

/// Runs commands from `input` until `quit` or end of input, writing pages
/// and messages to `output`.
pub fn run_shell<R: BufRead, W: Write>(
    planner: &mut Planner,
    input: R,
    mut output: W,
) -> io::Result<()> {
    writeln!(output, "{}", planner.render())?;
    write!(output, "> ")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            write!(output, "> ")?;
            output.flush()?;
            continue;
        }

        match line.parse::<ShellCommand>() {
            Ok(ShellCommand::Quit) => break,
            Ok(command) => {
                debug!(?command, "shell command");
                execute(planner, command, &mut output)?;
            }
            Err(error) => writeln!(output, "{error}")?,
        }
        write!(output, "> ")?;
        output.flush()?;
    }
    writeln!(output)?;
    Ok(())
}

fn execute<W: Write>(
    planner: &mut Planner,
    command: ShellCommand,
    output: &mut W,
) -> io::Result<()> {
    match command {
        ShellCommand::Set { name, value } => match planner.set(&name, &value) {
            Ok(()) => writeln!(output, "{}", planner.render()),
            Err(error) => writeln!(output, "{error}"),
        },
        ShellCommand::Go(page) => {
            planner.handle(PlanEvent::Navigate(page));
            writeln!(output, "{}", planner.render())
        }
        ShellCommand::Show => writeln!(output, "{}", planner.render()),
        ShellCommand::Link => writeln!(output, "{}", planner.link()),
        ShellCommand::Copy => {
            planner.handle(PlanEvent::CopyLink);
            writeln!(output, "{}", planner.link())
        }
        ShellCommand::Reset => {
            planner.reset();
            writeln!(output, "{}", planner.render())
        }
        ShellCommand::Help => writeln!(output, "{HELP}"),
        ShellCommand::Quit => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_set_with_space_or_equals() {
        assert_eq!(
            "set team Penn State".parse(),
            Ok(ShellCommand::Set {
                name: "team".to_string(),
                value: "Penn State".to_string()
            })
        );
        assert_eq!(
            "set players=15".parse(),
            Ok(ShellCommand::Set {
                name: "players".to_string(),
                value: "15".to_string()
            })
        );
    }

    #[test]
    fn set_value_may_contain_equals() {
        assert_eq!(
            parse_assignment("logo https://img.example/?a=b"),
            Some(("logo", "https://img.example/?a=b"))
        );
        assert_eq!(parse_assignment("team="), Some(("team", "")));
        assert_eq!(parse_assignment(""), None);
    }

    #[test]
    fn parses_navigation_and_bare_commands() {
        assert_eq!("go summary".parse(), Ok(ShellCommand::Go(Page::Summary)));
        assert_eq!("SHOW".parse(), Ok(ShellCommand::Show));
        assert_eq!("q".parse(), Ok(ShellCommand::Quit));
    }

    #[test]
    fn reports_bad_input() {
        assert_eq!(
            "fly away".parse::<ShellCommand>(),
            Err(ShellError::Unknown("fly".to_string()))
        );
        assert_eq!(
            "go".parse::<ShellCommand>(),
            Err(ShellError::Usage("go <page>"))
        );
        assert!(matches!(
            "go billing".parse::<ShellCommand>(),
            Err(ShellError::Page(_))
        ));
    }
}
