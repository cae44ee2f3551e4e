use crate::api::ApiError;
use reqwest::{header::HeaderMap, Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;

const RETRY_BACKOFF: Duration = Duration::from_millis(300);

/// Thin wrapper over `reqwest::Client` shared by every remote client.
///
/// Each request is bounded by `timeout`. GET requests are attempted up to
/// `attempts` times on timeouts, connection errors and 5xx responses; POST
/// requests are sent exactly once.
#[derive(Debug, Clone)]
pub struct Http {
    client: Client,
    timeout: Duration,
    attempts: u32,
}

impl Http {
    pub fn new(timeout: Duration, attempts: u32, headers: HeaderMap) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| ApiError::Transport {
                url: String::new(),
                source,
            })?;
        Ok(Self {
            client,
            timeout,
            attempts: attempts.max(1),
        })
    }

    pub async fn get_json<T, Q>(&self, url: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let mut attempt = 1;
        loop {
            tracing::debug!(attempt, %url, "GET");
            let result = self.execute(url, self.client.get(url).query(query)).await;
            match result {
                Err(ref error) if attempt < self.attempts && is_transient(error) => {
                    tracing::debug!(attempt, %url, %error, "retrying GET");
                    tokio::time::sleep(RETRY_BACKOFF * attempt).await;
                    attempt += 1;
                }
                Err(error) => return Err(error),
                Ok(response) => return self.decode(url, response).await,
            }
        }
    }

    pub async fn post_json<T, B>(&self, url: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        tracing::debug!(%url, "POST");
        let response = self.execute(url, self.client.post(url).json(body)).await?;
        self.decode(url, response).await
    }

    async fn execute(&self, url: &str, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|source| self.transport_error(url, source))?;
        let status = response.status();
        tracing::debug!(%url, %status, "response");

        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            url: url.to_string(),
            status,
            body,
        })
    }

    async fn decode<T: DeserializeOwned>(&self, url: &str, response: Response) -> Result<T, ApiError> {
        let bytes = response.bytes().await.map_err(|source| self.transport_error(url, source))?;
        serde_json::from_slice(&bytes).map_err(|error| ApiError::Decode {
            url: url.to_string(),
            reason: error.to_string(),
        })
    }

    fn transport_error(&self, url: &str, source: reqwest::Error) -> ApiError {
        if source.is_timeout() {
            ApiError::Timeout {
                url: url.to_string(),
                seconds: self.timeout.as_secs(),
            }
        } else {
            ApiError::Transport {
                url: url.to_string(),
                source,
            }
        }
    }
}

fn is_transient(error: &ApiError) -> bool {
    match error {
        ApiError::Timeout { .. } => true,
        ApiError::Transport { source, .. } => source.is_connect(),
        ApiError::Status { status, .. } => status.is_server_error(),
        ApiError::Decode { .. } | ApiError::TooManyPages { .. } => false,
    }
}
