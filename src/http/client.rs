//! Low-level HTTP client: `RobinhoodHttp`.
//!
//! Sends one request per call with the header set handed in by the caller and
//! classifies non-success statuses. No retries and no caching happen here.

use crate::error::HttpError;

use reqwest::header::HeaderMap;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Low-level HTTP client for the Robinhood REST API.
#[derive(Clone)]
pub struct RobinhoodHttp {
    client: Client,
}

impl RobinhoodHttp {
    pub fn new(timeout: Duration) -> Result<Self, HttpError> {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(timeout).pool_max_idle_per_host(10);
        }
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// `GET url` with the given headers.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        headers: &HeaderMap,
    ) -> Result<T, HttpError> {
        let req = self.client.get(url).headers(headers.clone());
        self.send(Method::GET, url, req).await
    }

    /// `POST url` with a form-encoded body.
    ///
    /// The content type comes from `headers`.
    pub(crate) async fn post_form<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
        headers: &HeaderMap,
    ) -> Result<T, HttpError> {
        let encoded = serde_urlencoded::to_string(body)?;
        let req = self
            .client
            .post(url)
            .headers(headers.clone())
            .body(encoded);
        self.send(Method::POST, url, req).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        req: reqwest::RequestBuilder,
    ) -> Result<T, HttpError> {
        tracing::debug!(%method, url, "Sending request");

        let resp = req.send().await?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();
        tracing::debug!(%method, url, status = status_code, "Request rejected");

        match status_code {
            401 => Err(HttpError::Unauthorized(body_text)),
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited(body_text)),
            400..=499 => Err(HttpError::BadRequest {
                status: status_code,
                body: body_text,
            }),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}
