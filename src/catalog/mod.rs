//! Listing generation for product searches
//!
//! This module contains:
//! - Retailer descriptors and search URL construction
//! - Price sources (the synthetic formula used by the demo)
//! - Listing ordering and best-deal selection
//! - [`Catalog`], which ties a retailer list to a verifier

mod listing;
mod pricing;
mod retailer;

pub use listing::{best_deal, sort_listings, Listing, Price, UNAVAILABLE};
pub use pricing::{round_cents, PriceSource, SyntheticPricing};
pub use retailer::RetailerDescriptor;

use crate::config::Config;
use crate::verifier::{VerificationResult, Verify};
use chrono::Local;
use futures::future::join_all;
use std::sync::Arc;

/// Format of [`Listing::timestamp`]
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Generates ranked listings for a query across a fixed retailer list
pub struct Catalog {
    retailers: Vec<RetailerDescriptor>,
    verifier: Arc<dyn Verify>,
    pricing: Box<dyn PriceSource>,
    currency: String,
}

impl Catalog {
    pub fn new(
        retailers: Vec<RetailerDescriptor>,
        verifier: Arc<dyn Verify>,
        pricing: impl PriceSource + 'static,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            retailers,
            verifier,
            pricing: Box::new(pricing),
            currency: currency.into(),
        }
    }

    /// Builds a catalog from the retailer and pricing sections of `config`
    pub fn from_config(config: &Config, verifier: Arc<dyn Verify>) -> Self {
        Self::new(
            config.retailers.iter().map(RetailerDescriptor::from).collect(),
            verifier,
            SyntheticPricing::from(&config.pricing),
            config.pricing.currency.clone(),
        )
    }

    /// The retailers in declared order
    pub fn retailers(&self) -> &[RetailerDescriptor] {
        &self.retailers
    }

    /// Searches every retailer for `query`
    ///
    /// # Process
    ///
    /// 1. Verify each retailer's base URL (concurrently, one call per retailer)
    /// 2. Build one listing per retailer in declared order
    /// 3. Sort verified-first, then by price
    ///
    /// Unverified retailers are kept with an unavailable price. The query is
    /// trimmed; rejecting empty queries is the caller's job.
    pub async fn search(&self, query: &str) -> Vec<Listing> {
        let query = query.trim();

        let checks = self
            .retailers
            .iter()
            .map(|retailer| self.verifier.verify(&retailer.base_url));
        let verifications = join_all(checks).await;

        let mut listings: Vec<Listing> = self
            .retailers
            .iter()
            .zip(verifications)
            .enumerate()
            .map(|(index, (retailer, verification))| {
                self.build_listing(index, retailer, query, verification)
            })
            .collect();

        sort_listings(&mut listings);

        tracing::info!(
            "Search '{}': {} listing(s), {} verified",
            query,
            listings.len(),
            listings.iter().filter(|l| l.verified).count()
        );

        listings
    }

    fn build_listing(
        &self,
        index: usize,
        retailer: &RetailerDescriptor,
        query: &str,
        verification: VerificationResult,
    ) -> Listing {
        let price = if verification.valid {
            Price::from(self.pricing.price_for(index, retailer, query))
        } else {
            Price::Unavailable
        };

        Listing {
            retailer: retailer.name.clone(),
            product_name: format!("{} - {} listing", query, retailer.name),
            price,
            currency: self.currency.clone(),
            url: retailer.search_url(query),
            verified: verification.valid,
            verification_status: verification.message,
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}
