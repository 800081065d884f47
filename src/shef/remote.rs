use crate::shef::address::{AddressError, DeviceAddress};
use crate::shef::domain::{Hold, Key, Outcome, Payload, SerialCommand, Status};
use crate::shef::endpoint::Endpoint;
use crate::shef::probe::probe;
use crate::shef::query::{Parameter, Params, build_query};
use crate::shef::transport::{HttpClientError, Transport, new_http_client};
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

pub const DEFAULT_PORT: u16 = 8080;

/// Remote control for a single set-top-box.
///
/// Every operation issues at most one GET and keeps no state between calls.
#[derive(Debug)]
pub struct RemoteClient<T: Transport = Client> {
    address: DeviceAddress,
    port: u16,
    transport: T,
}

impl RemoteClient<Client> {
    /// Connects to the box at `address` on the default port.
    pub async fn connect(address: &str) -> Result<Self, RemoteError> {
        let client = new_http_client()?;
        RemoteClient::connect_with(address, DEFAULT_PORT, client).await
    }
}

impl<T: Transport> RemoteClient<T> {
    /// Validates `address` and probes the host before handing out a client.
    #[instrument(skip(transport))]
    pub async fn connect_with(address: &str, port: u16, transport: T) -> Result<Self, RemoteError> {
        let address = DeviceAddress::parse(address).map_err(|source| RemoteError::InvalidAddress {
            address: address.to_string(),
            source,
        })?;

        let status = probe(&transport, &address, port).await;
        if !status.is_success() {
            return Err(RemoteError::DeviceUnrecognized {
                address: address.to_string(),
                status,
            });
        }

        info!("✅ Connected to set-top-box at {}:{}", address, port);
        Ok(RemoteClient { address, port, transport })
    }

    pub fn address(&self) -> &DeviceAddress {
        &self.address
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Sends `params` to `path`. Unknown parameter names are dropped.
    #[instrument(skip(self, params), fields(address = %self.address))]
    pub async fn dispatch(&self, path: &str, params: &Params) -> Result<Outcome, RemoteError> {
        if path.is_empty() {
            return Err(RemoteError::EmptyPath);
        }

        let target = format!("{}{}", path, build_query(params));
        let url = format!("http://{}:{}{}", self.address, self.port, target);
        debug!("📺 GET {}", url);

        let response = match self.transport.get(&url).await {
            Ok(response) => response,
            Err(e) => {
                warn!("⚠️ Request to '{}' failed: {}", target, e);
                return Ok(Outcome::Failure(Status::host_error(target)));
            }
        };

        let success = response.is_success();
        let payload = Payload::new(response.status, response.body);
        if success {
            return Ok(Outcome::Success(payload));
        }

        let status = payload.status().unwrap_or_else(|| {
            let msg = match payload.body().trim() {
                "" => "Request rejected by the set-top-box",
                body => body,
            };
            Status::new(payload.http_status, 1, msg, target.clone())
        });
        warn!(status_code = payload.http_status, "⚠️ Request to '{}' was rejected: {}", target, status.msg);
        Ok(Outcome::Failure(status))
    }

    /// Information about the program on the currently tuned channel.
    pub async fn get_tuned(&self, params: &Params) -> Result<Outcome, RemoteError> {
        self.dispatch(Endpoint::GetTuned.path(), params).await
    }

    /// Tunes to the channel given by `major` (and optionally `minor`).
    pub async fn tune(&self, params: &Params) -> Result<Outcome, RemoteError> {
        require(params, Endpoint::Tune, Parameter::Major)?;
        self.dispatch(Endpoint::Tune.path(), params).await
    }

    pub async fn get_locations(&self, params: &Params) -> Result<Outcome, RemoteError> {
        self.dispatch(Endpoint::GetLocations.path(), params).await
    }

    pub async fn get_version(&self, params: &Params) -> Result<Outcome, RemoteError> {
        self.dispatch(Endpoint::GetVersion.path(), params).await
    }

    pub async fn get_mode(&self, params: &Params) -> Result<Outcome, RemoteError> {
        self.dispatch(Endpoint::Mode.path(), params).await
    }

    /// Presses `key`, optionally with a `hold`. Key names are passed through unchecked.
    pub async fn process_key(&self, params: &Params) -> Result<Outcome, RemoteError> {
        require(params, Endpoint::ProcessKey, Parameter::Key)?;
        self.dispatch(Endpoint::ProcessKey.path(), params).await
    }

    /// Sends the serial command in `cmd`. Codes are passed through unchecked.
    pub async fn process_command(&self, params: &Params) -> Result<Outcome, RemoteError> {
        require(params, Endpoint::ProcessCommand, Parameter::Cmd)?;
        self.dispatch(Endpoint::ProcessCommand.path(), params).await
    }

    /// The API listing of the set-top-box.
    pub async fn get_options(&self, params: &Params) -> Result<Outcome, RemoteError> {
        self.dispatch(Endpoint::GetOptions.path(), params).await
    }

    /// Program information for channel `major`, optionally at `time`.
    pub async fn get_prog_info(&self, params: &Params) -> Result<Outcome, RemoteError> {
        require(params, Endpoint::GetProgInfo, Parameter::Major)?;
        self.dispatch(Endpoint::GetProgInfo.path(), params).await
    }

    pub async fn tune_to(&self, major: u32, minor: Option<u32>) -> Result<Outcome, RemoteError> {
        let mut params = Params::new().with(Parameter::Major.as_str(), major.to_string());
        if let Some(minor) = minor {
            params.insert(Parameter::Minor.as_str(), minor.to_string());
        }
        self.tune(&params).await
    }

    pub async fn press_key(&self, key: Key, hold: Option<Hold>) -> Result<Outcome, RemoteError> {
        let mut params = Params::new().with(Parameter::Key.as_str(), key.as_str());
        if let Some(hold) = hold {
            params.insert(Parameter::Hold.as_str(), hold.as_str());
        }
        self.process_key(&params).await
    }

    pub async fn send_command(&self, command: SerialCommand) -> Result<Outcome, RemoteError> {
        self.process_command(&Params::new().with(Parameter::Cmd.as_str(), command.code())).await
    }
}

fn require(params: &Params, endpoint: Endpoint, parameter: Parameter) -> Result<(), RemoteError> {
    match params.present(parameter) {
        Some(_) => Ok(()),
        None => Err(RemoteError::MissingParameter { endpoint, parameter }),
    }
}

#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("not a valid IP address: {source}")]
    InvalidAddress { address: String, source: AddressError },
    #[error("{address} is not a usable set-top-box: {status}")]
    DeviceUnrecognized { address: String, status: Status },
    #[error("'{parameter}' is not optional for {endpoint}")]
    MissingParameter { endpoint: Endpoint, parameter: Parameter },
    #[error("request path is not optional")]
    EmptyPath,
    #[error(transparent)]
    HttpClient(#[from] HttpClientError),
}

impl RemoteError {
    /// The error expressed as a SHEF status block.
    pub fn status(&self) -> Status {
        match self {
            RemoteError::InvalidAddress { .. } => Status::invalid_address(Endpoint::GetOptions.path()),
            RemoteError::DeviceUnrecognized { status, .. } => status.clone(),
            RemoteError::MissingParameter { endpoint, .. } => Status::new(400, 1, self.to_string(), endpoint.path()),
            RemoteError::EmptyPath => Status::new(400, 1, self.to_string(), ""),
            RemoteError::HttpClient(_) => Status::host_error(Endpoint::GetOptions.path()),
        }
    }
}
