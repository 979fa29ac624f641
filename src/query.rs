//! Query-string construction.
//!
//! Provides the deterministic query encoder and the per-call query structs
//! used by the collection endpoints.

use form_urlencoded::Serializer;

/// Suffix appended to array-valued parameter keys.
const ARRAY_SUFFIX: &str = "[]";

/// Deterministic query-string builder.
///
/// Array-valued parameters are encoded as repeated `key[]` pairs. Before
/// encoding, all pairs are sorted lexicographically by key then value, so
/// identical arguments always produce byte-identical query strings. Keys and
/// values are percent-encoded with the `application/x-www-form-urlencoded`
/// set (the brackets become `%5B%5D`).
#[derive(Debug, Clone, Default)]
pub struct QueryString {
    pairs: Vec<(String, String)>,
}

impl QueryString {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a scalar parameter.
    pub fn push(&mut self, key: impl Into<String>, value: impl ToString) {
        self.pairs.push((key.into(), value.to_string()));
    }

    /// Adds an array-valued parameter as one `key[]` pair per value.
    ///
    /// An empty slice adds nothing; absent parameters never appear.
    pub fn push_array(&mut self, key: &str, values: &[String]) {
        for value in values {
            self.pairs
                .push((format!("{}{}", key, ARRAY_SUFFIX), value.clone()));
        }
    }

    /// Returns true if no parameters were added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Encodes the accumulated pairs into a query string (without a leading
    /// `?`). Returns an empty string when no parameters were added.
    #[must_use]
    pub fn encode(&self) -> String {
        let mut pairs = self.pairs.clone();
        pairs.sort();

        let mut serializer = Serializer::new(String::new());
        for (key, value) in &pairs {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

/// Query parameters for `GET /listings`.
///
/// Every field is optional; a `page` parameter is always sent, falling back
/// to the client's configured default when unset.
#[derive(Debug, Clone, Default)]
pub struct ListingsQuery {
    /// Result page to request.
    pub page: Option<u64>,

    /// Restrict listings to these base currencies.
    pub base_currency: Vec<String>,

    /// Restrict listings to these ratings.
    pub rating: Vec<String>,

    /// Restrict listings to these loan terms.
    pub term: Vec<String>,
}

impl ListingsQuery {
    /// Creates an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page.
    #[must_use]
    pub fn with_page(mut self, page: u64) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the base-currency filter.
    #[must_use]
    pub fn with_base_currency<I, S>(mut self, currencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.base_currency = currencies.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the rating filter.
    #[must_use]
    pub fn with_rating<I, S>(mut self, ratings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rating = ratings.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the term filter.
    #[must_use]
    pub fn with_term<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.term = terms.into_iter().map(Into::into).collect();
        self
    }

    /// Encodes the query, substituting `default_page` when no page was set.
    #[must_use]
    pub fn encode(&self, default_page: u64) -> String {
        let mut query = QueryString::new();
        query.push("page", self.page.unwrap_or(default_page));
        query.push_array("base_currency", &self.base_currency);
        query.push_array("rating", &self.rating);
        query.push_array("term", &self.term);
        query.encode()
    }
}

/// Query parameters for `GET /investments`.
#[derive(Debug, Clone, Default)]
pub struct InvestmentsQuery {
    /// Restrict investments to these base currencies.
    pub base_currency: Vec<String>,
}

impl InvestmentsQuery {
    /// Creates an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base-currency filter.
    #[must_use]
    pub fn with_base_currency<I, S>(mut self, currencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.base_currency = currencies.into_iter().map(Into::into).collect();
        self
    }

    /// Encodes the query; empty when no filter is set.
    #[must_use]
    pub fn encode(&self) -> String {
        let mut query = QueryString::new();
        query.push_array("base_currency", &self.base_currency);
        query.encode()
    }
}

/// Query parameters for `GET /loans`.
#[derive(Debug, Clone, Default)]
pub struct LoansQuery {
    /// Restrict loans to these statuses.
    pub status: Vec<String>,
}

impl LoansQuery {
    /// Creates an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the status filter.
    #[must_use]
    pub fn with_status<I, S>(mut self, statuses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.status = statuses.into_iter().map(Into::into).collect();
        self
    }

    /// Encodes the query; empty when no filter is set.
    #[must_use]
    pub fn encode(&self) -> String {
        let mut query = QueryString::new();
        query.push_array("status", &self.status);
        query.encode()
    }
}
