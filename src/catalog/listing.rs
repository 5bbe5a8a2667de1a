//! Listings and their ordering
//!
//! A [`Listing`] is one retailer's entry in a search result. Listings sort
//! verified-first, then by ascending price, with unavailable prices last.

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Wire value used for a price that could not be determined
pub const UNAVAILABLE: &str = "N/A";

/// A listing price
///
/// Serializes as a JSON number, or as the string `"N/A"` when unavailable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Price {
    Amount(f64),
    Unavailable,
}

impl Price {
    /// The numeric amount, if any
    pub fn amount(&self) -> Option<f64> {
        match self {
            Self::Amount(value) => Some(*value),
            Self::Unavailable => None,
        }
    }

    /// Sort key: unavailable prices compare as infinitely expensive
    fn sort_key(&self) -> f64 {
        self.amount().unwrap_or(f64::INFINITY)
    }
}

impl From<Option<f64>> for Price {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Unavailable, Self::Amount)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Amount(value) => serializer.serialize_f64(*value),
            Self::Unavailable => serializer.serialize_str(UNAVAILABLE),
        }
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Amount(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Amount(value) => Ok(Self::Amount(value)),
            Raw::Text(text) if text == UNAVAILABLE => Ok(Self::Unavailable),
            Raw::Text(text) => Err(de::Error::custom(format!(
                "expected a number or \"{}\", got \"{}\"",
                UNAVAILABLE, text
            ))),
        }
    }
}

/// One retailer's entry in a search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub retailer: String,
    pub product_name: String,
    pub price: Price,
    pub currency: String,
    /// The retailer's search URL for the query
    pub url: String,
    pub verified: bool,
    /// Message from the retailer's verification
    pub verification_status: String,
    /// Local generation time, `YYYY-MM-DD HH:MM:SS`
    pub timestamp: String,
}

/// Sorts listings verified-first, then by ascending price
///
/// The sort is stable, so listings with equal keys keep their input order.
pub fn sort_listings(listings: &mut [Listing]) {
    listings.sort_by(|a, b| {
        (!a.verified)
            .cmp(&!b.verified)
            .then_with(|| a.price.sort_key().total_cmp(&b.price.sort_key()))
    });
}

/// Picks the cheapest verified listing with a numeric price
///
/// Ties go to the listing that appears first. Returns `None` when no listing
/// qualifies.
pub fn best_deal(listings: &[Listing]) -> Option<&Listing> {
    listings
        .iter()
        .filter(|listing| listing.verified)
        .filter_map(|listing| listing.price.amount().map(|price| (price, listing)))
        .min_by(|(a, _), (b, _)| a.total_cmp(b))
        .map(|(_, listing)| listing)
}
