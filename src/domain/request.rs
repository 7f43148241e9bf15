use std::fmt;

use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::domain::query::QueryFilters;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
/// A single lexoffice API call, described relative to the API base URL.
///
/// Path segments are percent-encoded when the final URL is built, so ids are
/// always confined to their own segment.
pub struct Request {
    method: Method,
    segments: Vec<String>,
    query: QueryFilters,
    body: Option<Value>,
}

impl Request {
    /// Create a request for `path`, split on `/` into segments.
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            segments: path
                .split('/')
                .filter(|segment| !segment.is_empty())
                .map(str::to_owned)
                .collect(),
            query: QueryFilters::default(),
            body: None,
        }
    }

    pub fn get(path: &str) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: &str) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: &str) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: &str) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Append one path segment verbatim (it is encoded, never split).
    pub fn segment(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Append query parameters after the ones already present.
    pub fn query(mut self, query: impl Into<QueryFilters>) -> Self {
        let query: QueryFilters = query.into();
        for (key, value) in query.pairs() {
            self.query.push(key.as_str(), value);
        }
        self
    }

    /// Attach a JSON body. The value is sent as given, without client-side schema checks.
    pub fn json<B>(mut self, body: &B) -> Result<Self, serde_json::Error>
    where
        B: Serialize + ?Sized,
    {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn query_filters(&self) -> &QueryFilters {
        &self.query
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    pub(crate) fn into_body(self) -> Option<Value> {
        self.body
    }

    /// Resolve against `base`. An empty query set leaves no `?` behind.
    pub(crate) fn url(&self, base: &Url) -> Url {
        let mut url = base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(&self.segments);
        }
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query.pairs());
        }
        url
    }
}
