mod address;
pub mod domain;
mod endpoint;
mod probe;
mod query;
mod remote;
mod transport;

pub use address::{AddressError, DeviceAddress};
pub use endpoint::Endpoint;
pub use probe::probe;
pub use query::{Parameter, Params, build_query};
pub use remote::{DEFAULT_PORT, RemoteClient, RemoteError};
pub use transport::{HttpClientError, Transport, TransportError, TransportResponse, new_http_client};
