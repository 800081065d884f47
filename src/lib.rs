//! Client for set-top-boxes that speak the SHEF HTTP remote-control protocol.

pub mod shef;

pub use shef::domain::{Hold, Key, Outcome, Payload, SerialCommand, Status};
pub use shef::{Params, RemoteClient, RemoteError};
