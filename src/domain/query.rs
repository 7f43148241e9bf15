/// Ordered set of query parameters appended to a request URL.
///
/// Pairs are serialized in insertion order. Optional values that are `None`
/// are skipped, so upstream never receives null placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryFilters {
    pairs: Vec<(String, String)>,
}

impl QueryFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a key/value pair.
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.push(key, value);
        self
    }

    /// Append a key/value pair only when `value` is present.
    pub fn with_opt<V: ToString>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl ToString) {
        self.pairs.push((key.into(), value.to_string()));
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Filters accepted by `GET /contacts`.
pub struct ContactFilters {
    pub email: Option<String>,
    pub name: Option<String>,
    pub number: Option<u64>,
    pub customer: Option<bool>,
    pub vendor: Option<bool>,
}

impl From<ContactFilters> for QueryFilters {
    fn from(filters: ContactFilters) -> Self {
        QueryFilters::new()
            .with_opt("email", filters.email)
            .with_opt("name", filters.name)
            .with_opt("number", filters.number)
            .with_opt("customer", filters.customer)
            .with_opt("vendor", filters.vendor)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Filters accepted by `GET /articles`.
pub struct ArticleFilters {
    pub article_number: Option<String>,
    pub gtin: Option<String>,
    pub article_type: Option<ArticleType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleType {
    Product,
    Service,
}

impl ArticleType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Product => "PRODUCT",
            Self::Service => "SERVICE",
        }
    }
}

impl From<ArticleFilters> for QueryFilters {
    fn from(filters: ArticleFilters) -> Self {
        QueryFilters::new()
            .with_opt("articleNumber", filters.article_number)
            .with_opt("gtin", filters.gtin)
            .with_opt("type", filters.article_type.map(ArticleType::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_owned(), value.to_owned())
    }

    #[test]
    fn default_contact_filters_are_empty() {
        let query = QueryFilters::from(ContactFilters::default());
        assert!(query.is_empty());
    }

    #[test]
    fn contact_filters_keep_only_present_keys_in_order() {
        let query = QueryFilters::from(ContactFilters {
            email: Some("max@gmx.de".to_owned()),
            name: Some("Mustermann".to_owned()),
            ..Default::default()
        });
        assert_eq!(
            query.pairs(),
            &[pair("email", "max@gmx.de"), pair("name", "Mustermann")]
        );
    }

    #[test]
    fn contact_filters_render_numbers_and_flags() {
        let query = QueryFilters::from(ContactFilters {
            number: Some(10308),
            customer: Some(true),
            vendor: Some(false),
            ..Default::default()
        });
        assert_eq!(
            query.pairs(),
            &[
                pair("number", "10308"),
                pair("customer", "true"),
                pair("vendor", "false"),
            ]
        );
    }

    #[test]
    fn article_filters_use_upstream_keys() {
        let query = QueryFilters::from(ArticleFilters {
            article_number: Some("LXW-BUHA-2024-001".to_owned()),
            gtin: None,
            article_type: Some(ArticleType::Service),
        });
        assert_eq!(
            query.pairs(),
            &[
                pair("articleNumber", "LXW-BUHA-2024-001"),
                pair("type", "SERVICE"),
            ]
        );
    }

    #[test]
    fn with_opt_skips_none() {
        let query = QueryFilters::new()
            .with("page", 0)
            .with_opt::<String>("name", None)
            .with("size", 25);
        assert_eq!(query.pairs(), &[pair("page", "0"), pair("size", "25")]);
    }
}
