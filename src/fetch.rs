use crate::errors::AppError;
use log::debug;
use std::time::Duration;

/// Retrieves a schedule file by URL. Implementations block until done.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, AppError>;
}

/// Plain HTTP GET via reqwest's blocking client.
///
/// Behavior:
/// - 2xx -> body bytes.
/// - Any other status -> `Err(AppError::Fetch(...))` carrying the status.
/// - Transport failures -> `Err(AppError::Fetch(...))`.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, AppError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Fetch(format!("building http client: {}", e)))?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, AppError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| AppError::Fetch(format!("GET {}: {}", url, e)))?;
        let status = resp.status();
        debug!("http response code for {} is {}", url, status.as_u16());
        if !status.is_success() {
            return Err(AppError::Fetch(format!("GET {}: HTTP {}", url, status)));
        }
        let body = resp
            .bytes()
            .map_err(|e| AppError::Fetch(format!("reading body of {}: {}", url, e)))?;
        Ok(body.to_vec())
    }
}
