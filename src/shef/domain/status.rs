use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// The status block the set-top-box attaches to every JSON reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    pub code: u16,
    pub command_result: u8,
    pub msg: String,
    pub query: String,
}

impl Status {
    pub fn new(code: u16, command_result: u8, msg: impl Into<String>, query: impl Into<String>) -> Self {
        Status {
            code,
            command_result,
            msg: msg.into(),
            query: query.into(),
        }
    }

    pub fn host_recognized(query: impl Into<String>) -> Self {
        Status::new(200, 0, "Host is a SHEF set-top-box", query)
    }

    pub fn host_unrecognized(query: impl Into<String>) -> Self {
        Status::new(404, 1, "Host does not appear to be a SHEF set-top-box", query)
    }

    pub fn invalid_address(query: impl Into<String>) -> Self {
        Status::new(405, 1, "Not a valid IP address", query)
    }

    pub fn host_error(query: impl Into<String>) -> Self {
        Status::new(503, 1, "Host error", query)
    }

    pub fn is_success(&self) -> bool {
        self.code == 200 && self.command_result == 0
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.code, self.msg, self.query)
    }
}
