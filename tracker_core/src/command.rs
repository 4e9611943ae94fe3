//! Line-oriented commands for driving a tracker interactively.

use crate::{Error, Result};
use std::str::FromStr;

/// One parsed session command
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Meal { calories: i64, description: String },
    Steps(i64),
    Water(f64),
    /// Elapsed hours; `None` means derive them from the clock
    Alarm(Option<u64>),
    Report,
    Meals,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  meal <calories> <description>   log a meal
  steps <count>                   log steps
  water <liters>                  log water intake
  alarm [hours]                   check the hydration alarm
  report                          show the daily summary
  meals                           list logged meals
  help                            show this help
  quit                            end the session";

fn parse_number<T: FromStr>(what: &str, token: Option<&str>) -> Result<T> {
    let token = token.ok_or_else(|| Error::Command(format!("missing {}", what)))?;
    token
        .parse()
        .map_err(|_| Error::Command(format!("invalid {}: {:?}", what, token)))
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };
        let mut args = rest.split_whitespace();

        let command = match verb.to_lowercase().as_str() {
            "meal" => {
                let calories = parse_number("calories", args.next())?;
                let description = args.by_ref().collect::<Vec<_>>().join(" ");
                if description.is_empty() {
                    return Err(Error::Command("meal needs a description".into()));
                }
                Command::Meal {
                    calories,
                    description,
                }
            }
            "steps" => Command::Steps(parse_number("step count", args.next())?),
            "water" => Command::Water(parse_number("liters", args.next())?),
            "alarm" => match args.next() {
                Some(hours) => Command::Alarm(Some(parse_number("hours", Some(hours))?)),
                None => Command::Alarm(None),
            },
            "report" => Command::Report,
            "meals" => Command::Meals,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            "" => return Err(Error::Command("empty command".into())),
            other => return Err(Error::Command(format!("unknown command: {}", other))),
        };

        if args.next().is_some() && !matches!(command, Command::Meal { .. }) {
            return Err(Error::Command(format!("too many arguments for {}", verb)));
        }

        Ok(command)
    }
}
