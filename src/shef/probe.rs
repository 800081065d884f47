use crate::shef::address::DeviceAddress;
use crate::shef::domain::Status;
use crate::shef::endpoint::Endpoint;
use crate::shef::transport::Transport;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, instrument, warn};

#[derive(Debug, Deserialize)]
struct OptionsResponse {
    options: Option<Value>,
}

/// Asks the host for its option listing to find out whether it speaks SHEF.
///
/// Never fails: network errors and unexpected replies are reported through
/// the returned status.
#[instrument(skip(transport, address), fields(address = %address))]
pub async fn probe(transport: &dyn Transport, address: &DeviceAddress, port: u16) -> Status {
    let path = Endpoint::GetOptions.path();
    info!("Probing {}:{}...", address, port);

    let response = match transport.get(&format!("http://{}:{}{}", address, port, path)).await {
        Ok(response) => response,
        Err(e) => {
            warn!("⚠️ Unable to reach {}: {}", address, e);
            return Status::host_error(path);
        }
    };

    let options = serde_json::from_str::<OptionsResponse>(&response.body)
        .ok()
        .and_then(|r| r.options);

    if options.as_ref().is_some_and(has_content) {
        info!("Probing {}:{}... OK", address, port);
        Status::host_recognized(path)
    } else {
        warn!(status = response.status, "⚠️ {} answered without an option listing", address);
        Status::host_unrecognized(path)
    }
}

fn has_content(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
    }
}
