use serde::Deserialize;

/// Default user agent sent with every verification request
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Main configuration structure for Price-Scout
///
/// Every section is optional; a missing section falls back to its defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub verifier: VerifierConfig,

    #[serde(default)]
    pub pricing: PricingConfig,

    #[serde(default = "default_retailers", rename = "retailer")]
    pub retailers: Vec<RetailerEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            verifier: VerifierConfig::default(),
            pricing: PricingConfig::default(),
            retailers: default_retailers(),
        }
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,

    /// Port to bind (0 picks a free port)
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

/// Link verifier configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VerifierConfig {
    /// Per-request timeout in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Maximum redirect hops followed before giving up
    #[serde(rename = "max-redirects")]
    pub max_redirects: usize,

    /// User-Agent header value
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            max_redirects: 10,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Synthetic pricing constants
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Price of the first retailer in the list
    #[serde(rename = "base-price")]
    pub base_price: f64,

    /// Amount added per retailer index
    #[serde(rename = "step-up")]
    pub step_up: f64,

    /// Amount subtracted per retailer index
    #[serde(rename = "step-down")]
    pub step_down: f64,

    /// Currency code stamped on every listing
    pub currency: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base_price: 99.99,
            step_up: 10.0,
            step_down: 2.5,
            currency: "USD".to_string(),
        }
    }
}

/// A retailer as it appears in the configuration file
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RetailerEntry {
    /// Display name (e.g., "Amazon")
    pub name: String,

    /// Site root, verified for reachability
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Path and query prefix the search terms are appended to
    #[serde(rename = "search-path")]
    pub search_path: String,
}

impl RetailerEntry {
    fn new(name: &str, base_url: &str, search_path: &str) -> Self {
        Self {
            name: name.to_string(),
            base_url: base_url.to_string(),
            search_path: search_path.to_string(),
        }
    }
}

/// The built-in retailer list, in ranking-index order
pub fn default_retailers() -> Vec<RetailerEntry> {
    vec![
        RetailerEntry::new("Amazon", "https://www.amazon.com", "/s?k="),
        RetailerEntry::new("eBay", "https://www.ebay.com", "/sch/i.html?_nkw="),
        RetailerEntry::new("Walmart", "https://www.walmart.com", "/search?q="),
        RetailerEntry::new("Best Buy", "https://www.bestbuy.com", "/site/searchpage.jsp?st="),
        RetailerEntry::new("Target", "https://www.target.com", "/s?searchTerm="),
    ]
}
