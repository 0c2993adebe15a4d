use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use wardrobe::{Request, Slot};

/// Everything the main loop reacts to. Control clients send these as one text line
/// each, in the form produced by `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    Change(Slot, Request),
    RandomizeAll,
    Activate,
    Reset,
    Status,
    ConfigReload,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command '{0}'")]
    Unknown(String),
    #[error("Missing {0}")]
    Missing(&'static str),
    #[error("Unknown slot '{0}'")]
    Slot(String),
    #[error("Invalid number '{0}'")]
    Number(String),
    #[error("Unexpected trailing input '{0}'")]
    Trailing(String),
}

fn parse_slot(word: Option<&str>) -> Result<Slot, CommandError> {
    let word = word.ok_or(CommandError::Missing("slot"))?;
    Slot::from_str(word).map_err(|_| CommandError::Slot(word.to_string()))
}

fn parse_number(word: Option<&str>, what: &'static str) -> Result<isize, CommandError> {
    let word = word.ok_or(CommandError::Missing(what))?;
    if word.eq_ignore_ascii_case("none") {
        return Ok(wardrobe::cycle::NONE_INDEX);
    }
    word.parse()
        .map_err(|_| CommandError::Number(word.to_string()))
}

impl FromStr for AppEvent {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let command = words.next().ok_or(CommandError::Empty)?;

        let event = match command.to_ascii_lowercase().as_str() {
            "next" => AppEvent::Change(parse_slot(words.next())?, Request::NEXT),
            "prev" => AppEvent::Change(parse_slot(words.next())?, Request::PREVIOUS),
            "random" => AppEvent::Change(parse_slot(words.next())?, Request::Random),
            "step" => {
                let slot = parse_slot(words.next())?;
                AppEvent::Change(slot, Request::Relative(parse_number(words.next(), "delta")?))
            }
            "set" => {
                let slot = parse_slot(words.next())?;
                AppEvent::Change(slot, Request::Absolute(parse_number(words.next(), "index")?))
            }
            "randomize" => AppEvent::RandomizeAll,
            "activate" => AppEvent::Activate,
            "reset" => AppEvent::Reset,
            "status" => AppEvent::Status,
            "reload" => AppEvent::ConfigReload,
            "quit" => AppEvent::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        let rest: Vec<&str> = words.collect();
        if !rest.is_empty() {
            return Err(CommandError::Trailing(rest.join(" ")));
        }
        Ok(event)
    }
}

impl fmt::Display for AppEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppEvent::Change(slot, Request::Relative(1)) => write!(f, "next {slot}"),
            AppEvent::Change(slot, Request::Relative(-1)) => write!(f, "prev {slot}"),
            AppEvent::Change(slot, Request::Relative(delta)) => write!(f, "step {slot} {delta}"),
            AppEvent::Change(slot, Request::Absolute(index)) => write!(f, "set {slot} {index}"),
            AppEvent::Change(slot, Request::Random) => write!(f, "random {slot}"),
            AppEvent::RandomizeAll => f.write_str("randomize"),
            AppEvent::Activate => f.write_str("activate"),
            AppEvent::Reset => f.write_str("reset"),
            AppEvent::Status => f.write_str("status"),
            AppEvent::ConfigReload => f.write_str("reload"),
            AppEvent::Quit => f.write_str("quit"),
        }
    }
}
