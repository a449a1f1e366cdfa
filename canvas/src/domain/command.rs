// Commands the conversational host sends to the canvas, and how they mutate state.

use super::state::{AnimationState, Tint};
use serde_json::{Map, Value};
use std::fmt;

/// A parsed host command. Wire names are matched case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Tint { tint: Tint },
    Spin { spin: bool },
    RestartGame,
}

/// Reasons a wire message cannot become a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    NotAnObject,
    MissingName,
    UnknownCommand(String),
    MissingField(&'static str),
    InvalidField(&'static str),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::NotAnObject => write!(f, "command message is not an object"),
            CommandError::MissingName => write!(f, "command message has no command name"),
            CommandError::UnknownCommand(name) => write!(f, "unknown command {name:?}"),
            CommandError::MissingField(field) => write!(f, "missing payload field {field:?}"),
            CommandError::InvalidField(field) => write!(f, "invalid payload field {field:?}"),
        }
    }
}

impl std::error::Error for CommandError {}

impl Command {
    /// Parses a `{ "command": name, ...payload }` message.
    pub fn parse(message: &Value) -> Result<Self, CommandError> {
        let fields = message.as_object().ok_or(CommandError::NotAnObject)?;
        let name = fields
            .get("command")
            .and_then(Value::as_str)
            .ok_or(CommandError::MissingName)?;

        match name.to_ascii_uppercase().as_str() {
            "TINT" => {
                let tint = required(fields, "tint")?
                    .as_u64()
                    .and_then(|raw| u32::try_from(raw).ok())
                    .and_then(Tint::new)
                    .ok_or(CommandError::InvalidField("tint"))?;
                Ok(Command::Tint { tint })
            }
            "SPIN" => {
                let spin = required(fields, "spin")?
                    .as_bool()
                    .ok_or(CommandError::InvalidField("spin"))?;
                Ok(Command::Spin { spin })
            }
            "RESTART_GAME" => Ok(Command::RestartGame),
            _ => Err(CommandError::UnknownCommand(name.to_string())),
        }
    }

    /// Canonical wire name.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Tint { .. } => "TINT",
            Command::Spin { .. } => "SPIN",
            Command::RestartGame => "RESTART_GAME",
        }
    }

    pub fn apply(self, state: &mut AnimationState, default_tint: Tint) {
        match self {
            Command::Tint { tint } => state.tint = tint,
            Command::Spin { spin } => state.spinning = spin,
            // Also re-enables the restart button and releases the in-flight guard.
            Command::RestartGame => state.reset(default_tint),
        }
    }
}

fn required<'a>(
    fields: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a Value, CommandError> {
    fields
        .get(field)
        .filter(|value| !value.is_null())
        .ok_or(CommandError::MissingField(field))
}
