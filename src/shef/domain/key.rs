use crate::shef::domain::key::Key::*;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// A key on the remote control, as accepted by `/remote/processKey`.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum Key {
    Power,
    PowerOn,
    PowerOff,
    Format,
    Pause,
    Rewind,
    Replay,
    Stop,
    Advance,
    FastForward,
    Record,
    Play,
    Guide,
    Active,
    List,
    Exit,
    Back,
    Menu,
    Info,
    Up,
    Down,
    Left,
    Right,
    Select,
    Red,
    Green,
    Yellow,
    Blue,
    ChannelUp,
    ChannelDown,
    Previous,
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
    Dash,
    Enter,
}

impl Key {
    pub fn as_str(&self) -> &'static str {
        match self {
            Power => "power",
            PowerOn => "poweron",
            PowerOff => "poweroff",
            Format => "format",
            Pause => "pause",
            Rewind => "rew",
            Replay => "replay",
            Stop => "stop",
            Advance => "advance",
            FastForward => "ffwd",
            Record => "record",
            Play => "play",
            Guide => "guide",
            Active => "active",
            List => "list",
            Exit => "exit",
            Back => "back",
            Menu => "menu",
            Info => "info",
            Up => "up",
            Down => "down",
            Left => "left",
            Right => "right",
            Select => "select",
            Red => "red",
            Green => "green",
            Yellow => "yellow",
            Blue => "blue",
            ChannelUp => "chanup",
            ChannelDown => "chandown",
            Previous => "prev",
            Digit0 => "0",
            Digit1 => "1",
            Digit2 => "2",
            Digit3 => "3",
            Digit4 => "4",
            Digit5 => "5",
            Digit6 => "6",
            Digit7 => "7",
            Digit8 => "8",
            Digit9 => "9",
            Dash => "dash",
            Enter => "enter",
        }
    }

    pub fn all() -> [Key; 43] {
        [
            Power, PowerOn, PowerOff, Format, Pause, Rewind, Replay, Stop, Advance, FastForward, Record, Play, Guide, Active, List,
            Exit, Back, Menu, Info, Up, Down, Left, Right, Select, Red, Green, Yellow, Blue, ChannelUp, ChannelDown, Previous,
            Digit0, Digit1, Digit2, Digit3, Digit4, Digit5, Digit6, Digit7, Digit8, Digit9, Dash, Enter,
        ]
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Key {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.to_lowercase();
        Key::all()
            .into_iter()
            .find(|key| key.as_str() == value)
            .ok_or_else(|| ParseKeyError::UnknownKey(s.to_string()))
    }
}

/// How long a key is held, passed as the optional `hold` parameter.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum Hold {
    KeyPress,
    KeyDown,
    KeyUp,
}

impl Hold {
    pub fn as_str(&self) -> &'static str {
        match self {
            Hold::KeyPress => "keyPress",
            Hold::KeyDown => "keyDown",
            Hold::KeyUp => "keyUp",
        }
    }
}

impl Display for Hold {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Hold {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "keypress" | "press" => Ok(Hold::KeyPress),
            "keydown" | "down" => Ok(Hold::KeyDown),
            "keyup" | "up" => Ok(Hold::KeyUp),
            _ => Err(ParseKeyError::UnknownHold(s.to_string())),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ParseKeyError {
    #[error("unknown key '{0}'")]
    UnknownKey(String),
    #[error("unknown hold '{0}'")]
    UnknownHold(String),
}
