use crate::shef::domain::Status;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// The result of a single request to the set-top-box.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(Payload),
    Failure(Status),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn payload(&self) -> Option<&Payload> {
        match self {
            Outcome::Success(payload) => Some(payload),
            Outcome::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&Status> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(status) => Some(status),
        }
    }
}

/// Raw reply body of a successful request.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload {
    pub http_status: u16,
    pub body: String,
}

#[derive(Deserialize)]
struct StatusEnvelope {
    status: Status,
}

impl Payload {
    pub fn new(http_status: u16, body: impl Into<String>) -> Self {
        Payload {
            http_status,
            body: body.into(),
        }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    /// The status block of the reply, if the body is JSON and carries one.
    pub fn status(&self) -> Option<Status> {
        self.json::<StatusEnvelope>().ok().map(|envelope| envelope.status)
    }
}
