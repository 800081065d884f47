use crate::shef::domain::serial_command::SerialCommand::*;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// A serial command code, sent through `/serial/processCommand`.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum SerialCommand {
    Standby,
    Active,
    GetPrimaryStatus,
    GetCommandVersion,
    GetCurrentChannel,
    GetSignalQuality,
    GetCurrentTime,
    GetUserCommand,
    EnableUserEntry,
    DisableUserEntry,
    GetReturnValue,
    Reboot,
    SendUserCommand,
    OpenUserChannel,
}

impl SerialCommand {
    pub fn code(&self) -> &'static str {
        match self {
            Standby => "FA81",
            Active => "FA82",
            GetPrimaryStatus => "FA83",
            GetCommandVersion => "FA84",
            GetCurrentChannel => "FA87",
            GetSignalQuality => "FA90",
            GetCurrentTime => "FA91",
            GetUserCommand => "FA92",
            EnableUserEntry => "FA93",
            DisableUserEntry => "FA94",
            GetReturnValue => "FA95",
            Reboot => "FA96",
            SendUserCommand => "FAA5",
            OpenUserChannel => "FAA6",
        }
    }

    pub fn all() -> [SerialCommand; 14] {
        [
            Standby,
            Active,
            GetPrimaryStatus,
            GetCommandVersion,
            GetCurrentChannel,
            GetSignalQuality,
            GetCurrentTime,
            GetUserCommand,
            EnableUserEntry,
            DisableUserEntry,
            GetReturnValue,
            Reboot,
            SendUserCommand,
            OpenUserChannel,
        ]
    }
}

impl Display for SerialCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for SerialCommand {
    type Err = UnknownSerialCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.to_uppercase();
        SerialCommand::all()
            .into_iter()
            .find(|command| command.code() == value)
            .ok_or_else(|| UnknownSerialCommand(s.to_string()))
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("unknown serial command '{0}'")]
pub struct UnknownSerialCommand(pub String);
