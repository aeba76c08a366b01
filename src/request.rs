//! Per-request context
//!
//! The helpers never reach into ambient global state: the current path and
//! query parameters are passed in explicitly through a [`RequestContext`].
//! Outside a real request (layout previews, background rendering) use
//! [`RequestContext::detached`], which falls back to no path and empty
//! parameters instead of erroring.

use crate::query::QueryParams;

/// Path and query parameters of the request being rendered
///
/// Immutable for the duration of one render call.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    path: Option<String>,
    query: QueryParams,
}

impl RequestContext {
    /// Create a context from a path and already-parsed parameters
    pub fn new(path: impl Into<String>, query: QueryParams) -> Self {
        Self {
            path: Some(path.into()),
            query,
        }
    }

    /// Create a context from a path and a raw query string
    ///
    /// Malformed query strings yield empty parameters, never an error.
    pub fn from_query_string(path: impl Into<String>, raw: &str) -> Self {
        Self::new(path, QueryParams::parse(raw))
    }

    /// Context for rendering outside a real request: no path, no parameters
    pub fn detached() -> Self {
        Self::default()
    }

    /// The request path, if one is known
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// The request's query parameters
    pub fn query(&self) -> &QueryParams {
        &self.query
    }
}
