//! HTTP transport seam
//!
//! Providers describe requests as plain data; a transport executes them.
//! `ReqwestTransport` talks to the network, `MockTransport` replays canned
//! responses and records what it was asked for.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use super::DispatchFailure;

/// Outbound GET request
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub timeout: Duration,
}

impl HttpRequest {
    pub fn get(url: Url, timeout: Duration) -> Self {
        Self {
            url,
            headers: Vec::new(),
            timeout,
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Origin only; paths and query strings carry lookup targets and keys
    pub fn display_url(&self) -> String {
        redact(&self.url)
    }
}

/// Status and raw body of a provider response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, request: HttpRequest) -> Result<HttpResponse, DispatchFailure>;
}

/// Build `base/segment/segment`, percent-encoding each segment
pub fn endpoint(base: &str, segments: &[&str]) -> Result<Url, DispatchFailure> {
    let mut url =
        Url::parse(base).map_err(|e| DispatchFailure::Transport(format!("Invalid base URL {}: {}", base, e)))?;
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|_| DispatchFailure::Transport(format!("Base URL cannot take a path: {}", base)))?;
        path.pop_if_empty();
        for segment in segments {
            path.push(segment);
        }
    }
    Ok(url)
}

fn redact(url: &Url) -> String {
    url.origin().ascii_serialization()
}

/// reqwest-backed transport
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, DispatchFailure> {
        let client = Client::builder()
            .build()
            .map_err(|e| DispatchFailure::Transport(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, request: HttpRequest) -> Result<HttpResponse, DispatchFailure> {
        let mut builder = self.client.get(request.url.clone()).timeout(request.timeout);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        // URLs can carry credentials, so they are stripped from errors
        let response = builder
            .send()
            .await
            .map_err(|e| DispatchFailure::Transport(format!("Request failed: {}", e.without_url())))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| DispatchFailure::Transport(format!("Failed to read body: {}", e.without_url())))?;

        log::debug!("GET {} -> {} ({} bytes)", request.display_url(), status, body.len());
        Ok(HttpResponse { status, body })
    }
}

/// Transport that replays scripted responses in order
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, DispatchFailure>>>,
    requests: Mutex<Vec<HttpRequest>>,
    delay: Option<Duration>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response
    pub fn with_response(self, response: HttpResponse) -> Self {
        lock(&self.responses).push_back(Ok(response));
        self
    }

    /// Queue a transport failure
    pub fn with_failure(self, failure: DispatchFailure) -> Self {
        lock(&self.responses).push_back(Err(failure));
        self
    }

    /// Sleep before answering each request
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Requests seen so far
    pub fn requests(&self) -> Vec<HttpRequest> {
        lock(&self.requests).clone()
    }

    pub fn call_count(&self) -> usize {
        lock(&self.requests).len()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn get(&self, request: HttpRequest) -> Result<HttpResponse, DispatchFailure> {
        lock(&self.requests).push(request);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| Err(DispatchFailure::Transport("No scripted response".to_string())))
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
