//! Link verification
//!
//! This module answers one question: is this URL live? It contains:
//! - The [`Verify`] trait the catalog and HTTP shell depend on
//! - [`LinkVerifier`], the reqwest-backed implementation
//! - [`VerificationResult`] and the [`ProbeError`] taxonomy
//!
//! Verification is total: every network outcome becomes a
//! [`VerificationResult`], never an `Err`.

mod probe;
mod result;

pub use probe::{build_http_client, LinkVerifier};
pub use result::{ProbeError, VerificationResult, ACCESSIBLE_MESSAGE};

use async_trait::async_trait;

/// Something that can decide whether a URL is reachable
#[async_trait]
pub trait Verify: Send + Sync {
    /// Verifies `url`, capturing every failure in the returned result
    async fn verify(&self, url: &str) -> VerificationResult;
}
