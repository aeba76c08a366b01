//! # pagekit
//!
//! View-layer pagination link helpers for Rust web applications.
//!
//! pagekit is the thin glue between a paginated collection and the markup
//! that navigates it: it builds page URLs by rewriting the page key of the
//! current request's query string, decides between a link and a placeholder
//! for previous/next navigation, and merges options for a full page-number
//! nav. It deliberately does *not* compute page windows or build HTML — both
//! stay behind collaborator traits so any paginator and any template engine
//! can plug in.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pagekit::{LinkOptions, PageLinkBuilder, PageState, RequestContext};
//!
//! // inside a request handler
//! let ctx = RequestContext::from_query_string("/articles", "locale=en&page=5");
//! let helpers = PageLinkBuilder::new(ctx);
//! let state = PageState::new(5, 10, 25);
//!
//! // "<a href="/articles?locale=en&page=4" rel="previous">Previous Page</a>"
//! let prev = helpers.link_to_previous_page(&state, "Previous Page", &LinkOptions::new(), &renderer);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       PageLinkBuilder                        │
//! │  page_url()   link_to_previous_page()   link_to_next_page()  │
//! │  paginate()                                                  │
//! └──────────────────────────────────────────────────────────────┘
//!        │                    │                      │
//! ┌──────┴──────┬─────────────┴────────┬─────────────┴───────────┐
//! │ RequestCtx  │  QueryParams codec   │  Collaborator traits    │
//! │ path+params │  form encoding,      │  TagRenderer            │
//! │ explicit,   │  bracket notation,   │  PaginatorRenderer      │
//! │ no globals  │  stable order        │  (window + markup)      │
//! └─────────────┴──────────────────────┴─────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_possible_truncation)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Process-wide configuration
pub mod config;

/// Order-preserving query-string parameters
pub mod query;

/// Per-request context
pub mod request;

/// Pagination state
pub mod page;

/// Rendering collaborator seams
pub mod render;

/// Pagination link helpers
pub mod links;

/// Application registration
pub mod registry;

/// Bundled navigation labels
pub mod locale;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{config, configure, Config};
pub use error::{Error, Result};
pub use links::{LinkOptions, PageLinkBuilder, PaginateOptions};
pub use locale::Labels;
pub use page::PageState;
pub use query::{QueryParams, QueryValue};
pub use registry::{register, HelperHost, Registration};
pub use render::{PageUrls, PaginateParams, PaginatorRenderer, SafeHtml, TagRenderer};
pub use request::RequestContext;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
