//! Rendering collaborator seams
//!
//! This crate decides *what* to link to; turning that into markup belongs to
//! collaborators behind two traits. [`TagRenderer`] builds a single link tag
//! (and owns HTML escaping). [`PaginatorRenderer`] computes the visible page
//! window and assembles the full pagination markup, usually from templates on
//! the registered view search path.
//!
//! [`PageUrls`] is the URL-building view handed to both: given any page
//! number it produces the href, with the page key merged into the current
//! request parameters.

use crate::error::Result;
use crate::query::QueryParams;
use serde_json::Value;
use std::fmt;

// ============================================================================
// SafeHtml
// ============================================================================

/// Pre-escaped markup returned by the helpers
///
/// Content wrapped in `SafeHtml` is trusted as-is: placeholder text is passed
/// through verbatim and collaborator output is already escaped. Callers must
/// not escape it a second time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SafeHtml(String);

impl SafeHtml {
    /// Wrap already-escaped markup
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// The markup as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the underlying string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SafeHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SafeHtml {
    fn from(html: String) -> Self {
        Self(html)
    }
}

// ============================================================================
// Page URL building
// ============================================================================

/// Builds the URL for any page number of the current request
///
/// Holds the request path, the current parameters with the page key already
/// stripped, and the effective page-key settings. The page key for page 1 is
/// omitted entirely unless `params_on_first_page` is set.
#[derive(Debug, Clone)]
pub struct PageUrls {
    path: String,
    params: QueryParams,
    param_name: String,
    params_on_first_page: bool,
}

impl PageUrls {
    /// Create a URL builder
    ///
    /// Any existing value under `param_name` is stripped from `params`; the
    /// target page is merged in per call.
    pub fn new(
        path: impl Into<String>,
        params: QueryParams,
        param_name: impl Into<String>,
        params_on_first_page: bool,
    ) -> Self {
        let param_name = param_name.into();
        let params = params.without(&param_name);
        Self {
            path: path.into(),
            params,
            param_name,
            params_on_first_page,
        }
    }

    /// The query-string key encoding the page number
    pub fn param_name(&self) -> &str {
        &self.param_name
    }

    /// URL for the given page number
    ///
    /// Result is the bare path when the output parameter mapping ends up
    /// empty, otherwise `path?query`. Original keys keep their order; the
    /// page key serializes last.
    pub fn url_for(&self, page: u32) -> String {
        let mut out = self.params.clone();
        if page != 1 || self.params_on_first_page {
            out.set(self.param_name.as_str(), page.to_string());
        }
        if out.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, out.to_query_string())
        }
    }
}

// ============================================================================
// Collaborator traits
// ============================================================================

/// Link/tag building collaborator
///
/// Implementations own tag assembly and HTML escaping; the helpers only
/// supply the text, the href, and the attribute list in render order.
pub trait TagRenderer: Send + Sync {
    /// Render one `<a>` tag
    fn link_to(&self, text: &str, url: &str, attrs: &[(String, String)]) -> String;
}

/// Page-window and markup collaborator for [`paginate`]
///
/// Given the merged [`PaginateParams`], computes which page numbers and
/// ellipsis markers to display (inner window around the current page, outer
/// windows at the edges) and assembles the markup, asking `urls` for each
/// href.
///
/// [`paginate`]: crate::links::PageLinkBuilder::paginate
pub trait PaginatorRenderer: Send + Sync {
    /// Render the full pagination nav
    fn render(&self, params: &PaginateParams, urls: &PageUrls) -> Result<String>;
}

/// Merged options handed to a [`PaginatorRenderer`]
#[derive(Debug, Clone)]
pub struct PaginateParams {
    /// Current page number, 1-based
    pub current_page: u32,
    /// Total number of pages
    pub total_pages: u32,
    /// Items per page
    pub per_page: u32,
    /// Query-string key encoding the page number
    pub param_name: String,
    /// Render links as asynchronous requests
    pub remote: bool,
    /// Inner window size (pages shown around the current page)
    pub window: u32,
    /// Outer window size (pages always shown near both edges)
    pub outer_window: u32,
    /// Left outer window size
    pub left: u32,
    /// Right outer window size
    pub right: u32,
    /// Pass-through locals for the collaborator's tags, in insertion order
    pub extra: Vec<(String, Value)>,
}
