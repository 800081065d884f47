use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;
use thiserror::Error;
use tracing::trace;

/// Status and body of an HTTP reply.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues a plain GET and hands back whatever the host answered.
#[async_trait]
pub trait Transport: Debug + Send + Sync {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError>;
}

#[async_trait]
impl Transport for Client {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError> {
        let response = Client::get(self, url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        trace!(status, "Received {} bytes", body.len());

        Ok(TransportResponse { status, body })
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for &T {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError> {
        (**self).get(url).await
    }
}

pub fn new_http_client() -> Result<Client, HttpClientError> {
    let client = Client::builder().build()?;
    Ok(client)
}

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum HttpClientError {
    #[error("unable to build the HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

#[cfg(test)]
pub use recording::RecordingTransport;

#[cfg(test)]
mod recording {
    use super::*;
    use std::io;
    use std::sync::Mutex;

    /// Records every requested URL and answers with a canned reply.
    #[derive(Debug)]
    pub struct RecordingTransport {
        reply: Option<TransportResponse>,
        requests: Mutex<Vec<String>>,
    }

    impl RecordingTransport {
        pub fn replying(status: u16, body: &str) -> Self {
            RecordingTransport {
                reply: Some(TransportResponse {
                    status,
                    body: body.to_string(),
                }),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn unreachable() -> Self {
            RecordingTransport {
                reply: None,
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn get(&self, url: &str) -> Result<TransportResponse, TransportError> {
            self.requests.lock().unwrap().push(url.to_string());
            self.reply
                .clone()
                .ok_or_else(|| io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused").into())
        }
    }
}
