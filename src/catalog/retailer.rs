use crate::config::RetailerEntry;

/// A retailer that search listings are generated for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetailerDescriptor {
    /// Display name
    pub name: String,

    /// Site root; this is what gets verified
    pub base_url: String,

    /// Appended to the base URL ahead of the search terms
    pub search_path: String,
}

impl RetailerDescriptor {
    pub fn new(
        name: impl Into<String>,
        base_url: impl Into<String>,
        search_path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            base_url: base_url.into(),
            search_path: search_path.into(),
        }
    }

    /// Builds the retailer's search URL for `query`
    ///
    /// Spaces become `+`; nothing else is encoded.
    ///
    /// # Examples
    ///
    /// ```
    /// use price_scout::RetailerDescriptor;
    ///
    /// let shop = RetailerDescriptor::new("Amazon", "https://www.amazon.com", "/s?k=");
    /// assert_eq!(
    ///     shop.search_url("wireless mouse"),
    ///     "https://www.amazon.com/s?k=wireless+mouse"
    /// );
    /// ```
    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}{}{}",
            self.base_url,
            self.search_path,
            query.replace(' ', "+")
        )
    }
}

impl From<&RetailerEntry> for RetailerDescriptor {
    fn from(entry: &RetailerEntry) -> Self {
        Self::new(&entry.name, &entry.base_url, &entry.search_path)
    }
}
