//! # Upstream Relay
//!
//! The document service is reached through a single shared `reqwest::Client`.
//! Responses are relayed to the browser untouched: same status code, same
//! `Content-Type`, same body. Only a transport failure (service down, timeout,
//! truncated body) is answered by the proxy itself, with a `500` carrying a
//! [`ProxyFailure`] JSON body.

use std::time::Duration;

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use docgen_common::requests::ProxyFailure;
use log::{error, info};

/// Handle to the document service, shared by all workers as `web::Data`.
pub struct Upstream {
    client: reqwest::Client,
    base_url: String,
}

impl Upstream {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Absolute upstream URL for `path`, keeping the caller's query string.
    pub fn url(&self, path: &str, query: &str) -> String {
        if query.is_empty() {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}{}?{}", self.base_url, path, query)
        }
    }

    /// Sends `request` and turns the upstream answer into the proxy response.
    ///
    /// `failure_message` becomes the `message` of the `500` body when the
    /// service cannot be reached.
    pub async fn relay(
        &self,
        request: reqwest::RequestBuilder,
        failure_message: &'static str,
    ) -> HttpResponse {
        match forward(request).await {
            Ok(response) => response,
            Err(err) => {
                error!("{}: {}", failure_message, err);
                HttpResponse::InternalServerError().json(ProxyFailure {
                    message: failure_message.to_string(),
                    error: err.to_string(),
                })
            }
        }
    }
}

async fn forward(request: reqwest::RequestBuilder) -> Result<HttpResponse, reqwest::Error> {
    let response = request.send().await?;
    let upstream_status = response.status().as_u16();
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let url = response.url().to_string();
    let body = response.bytes().await?;

    info!("{} <- {} ({} bytes)", upstream_status, url, body.len());

    let status = StatusCode::from_u16(upstream_status).unwrap_or(StatusCode::BAD_GATEWAY);
    let mut builder = HttpResponse::build(status);
    if let Some(content_type) = content_type {
        builder.content_type(content_type);
    }
    Ok(builder.body(body.to_vec()))
}
