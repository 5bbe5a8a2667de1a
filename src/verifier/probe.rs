//! HTTP probing for link verification
//!
//! This module owns the shared HTTP client and the probe sequence:
//! - HEAD request with redirects followed
//! - One GET retry when the server answers HEAD with 405
//! - Error classification into [`ProbeError`]

use crate::config::VerifierConfig;
use crate::verifier::result::{ProbeError, VerificationResult};
use crate::verifier::Verify;
use async_trait::async_trait;
use reqwest::{redirect::Policy, Client, Method, StatusCode};
use std::time::Duration;

/// Builds the HTTP client used for every verification
///
/// # Arguments
///
/// * `config` - The verifier configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use price_scout::config::VerifierConfig;
/// use price_scout::verifier::build_http_client;
///
/// let client = build_http_client(&VerifierConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &VerifierConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .redirect(Policy::limited(config.max_redirects))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Checks whether URLs are live
///
/// Holds one pooled client for the lifetime of the process. Cloning is cheap
/// and shares the pool.
#[derive(Debug, Clone)]
pub struct LinkVerifier {
    client: Client,
}

impl LinkVerifier {
    /// Creates a verifier with a client built from `config`
    pub fn new(config: &VerifierConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::with_client(build_http_client(config)?))
    }

    /// Creates a verifier around an existing client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Runs the probe sequence for `url`
    ///
    /// # Request Flow
    ///
    /// 1. HEAD `url`, following redirects
    /// 2. On 405, GET `url` once with the same client
    /// 3. A final 200 yields the post-redirect URL
    ///
    /// | Condition | Outcome |
    /// |-----------|---------|
    /// | HTTP 200 | `Ok(final_url)` |
    /// | Any other status | `UnexpectedStatus` |
    /// | Timeout | `Timeout` |
    /// | DNS, refused, TLS | `Connect` |
    /// | Anything else | `Unknown` |
    pub async fn check(&self, url: &str) -> Result<String, ProbeError> {
        let (status, final_url) = self.send(Method::HEAD, url).await?;

        let (status, final_url) = if status == StatusCode::METHOD_NOT_ALLOWED {
            tracing::debug!("HEAD not allowed for {}, falling back to GET", url);
            self.send(Method::GET, url).await?
        } else {
            (status, final_url)
        };

        if status == StatusCode::OK {
            Ok(final_url)
        } else {
            Err(ProbeError::status(status, final_url))
        }
    }

    /// Sends one request and returns the final status and URL
    async fn send(&self, method: Method, url: &str) -> Result<(StatusCode, String), ProbeError> {
        tracing::debug!("{} {}", method, url);

        let response = self.client.request(method, url).send().await?;
        let status = response.status();
        let final_url = response.url().to_string();

        tracing::debug!("{} answered {} at {}", url, status.as_u16(), final_url);
        Ok((status, final_url))
    }
}

#[async_trait]
impl Verify for LinkVerifier {
    async fn verify(&self, url: &str) -> VerificationResult {
        let result = VerificationResult::from((url, self.check(url).await));

        if !result.valid {
            tracing::warn!("Verification failed for {}: {}", url, result.message);
        }

        result
    }
}
