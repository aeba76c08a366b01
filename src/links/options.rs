//! Helper options
//!
//! Structured option carriers for the link helpers. Every field that also
//! exists on the global [`Config`](crate::config::Config) is optional here;
//! a set value always overrides the global one.

use crate::query::QueryParams;
use serde_json::Value;

/// Options for `link_to_previous_page` / `link_to_next_page`
#[derive(Debug, Clone, Default)]
pub struct LinkOptions {
    /// Override the query parameters used as the URL base (instead of the
    /// current request's parameters)
    pub params: Option<QueryParams>,
    /// Query-string key encoding the page number
    pub param_name: Option<String>,
    /// Pre-escaped content shown when no link applies
    pub placeholder: Option<String>,
    /// Render the link as an asynchronous request
    pub remote: bool,
    /// `rel` attribute; defaults to `previous`/`next` per helper
    pub rel: Option<String>,
    /// Include the page key even for page 1
    pub params_on_first_page: Option<bool>,
    /// Pass-through attributes, rendered in insertion order
    pub extra: Vec<(String, String)>,
}

impl LinkOptions {
    /// Create empty options (all defaults come from the global config)
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the base query parameters
    pub fn params(mut self, params: QueryParams) -> Self {
        self.params = Some(params);
        self
    }

    /// Override the page parameter name
    pub fn param_name(mut self, name: impl Into<String>) -> Self {
        self.param_name = Some(name.into());
        self
    }

    /// Set the no-link placeholder (trusted, pre-escaped)
    pub fn placeholder(mut self, html: impl Into<String>) -> Self {
        self.placeholder = Some(html.into());
        self
    }

    /// Mark the link as an asynchronous request
    pub fn remote(mut self, remote: bool) -> Self {
        self.remote = remote;
        self
    }

    /// Override the `rel` attribute
    pub fn rel(mut self, rel: impl Into<String>) -> Self {
        self.rel = Some(rel.into());
        self
    }

    /// Include the page key even for page 1
    pub fn params_on_first_page(mut self, keep: bool) -> Self {
        self.params_on_first_page = Some(keep);
        self
    }

    /// Add a pass-through attribute
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.push((key.into(), value.into()));
        self
    }
}

/// Options for `paginate`
#[derive(Debug, Clone, Default)]
pub struct PaginateOptions {
    /// Query-string key encoding the page number
    pub param_name: Option<String>,
    /// Include the page key even for page 1
    pub params_on_first_page: Option<bool>,
    /// Render links as asynchronous requests
    pub remote: bool,
    /// Inner window size
    pub window: Option<u32>,
    /// Outer window size
    pub outer_window: Option<u32>,
    /// Left outer window size
    pub left: Option<u32>,
    /// Right outer window size
    pub right: Option<u32>,
    /// Pass-through locals handed to the paginator collaborator's tags
    pub extra: Vec<(String, Value)>,
}

impl PaginateOptions {
    /// Create empty options (all defaults come from the state and config)
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the page parameter name
    pub fn param_name(mut self, name: impl Into<String>) -> Self {
        self.param_name = Some(name.into());
        self
    }

    /// Include the page key even for page 1
    pub fn params_on_first_page(mut self, keep: bool) -> Self {
        self.params_on_first_page = Some(keep);
        self
    }

    /// Render links as asynchronous requests
    pub fn remote(mut self, remote: bool) -> Self {
        self.remote = remote;
        self
    }

    /// Override the inner window size
    pub fn window(mut self, window: u32) -> Self {
        self.window = Some(window);
        self
    }

    /// Override the outer window size
    pub fn outer_window(mut self, outer_window: u32) -> Self {
        self.outer_window = Some(outer_window);
        self
    }

    /// Override the left outer window size
    pub fn left(mut self, left: u32) -> Self {
        self.left = Some(left);
        self
    }

    /// Override the right outer window size
    pub fn right(mut self, right: u32) -> Self {
        self.right = Some(right);
        self
    }

    /// Add a pass-through local
    pub fn local(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.push((key.into(), value.into()));
        self
    }
}
