mod key;
mod outcome;
mod serial_command;
mod status;

pub use key::{Hold, Key, ParseKeyError};
pub use outcome::{Outcome, Payload};
pub use serial_command::{SerialCommand, UnknownSerialCommand};
pub use status::Status;
