//! Pagination link helpers
//!
//! The view-facing surface of the crate: `paginate`,
//! `link_to_previous_page`, and `link_to_next_page`, exposed as methods on
//! [`PageLinkBuilder`].
//!
//! # Overview
//!
//! A builder is created once per request from an explicit
//! [`RequestContext`](crate::request::RequestContext). The prev/next helpers
//! decide between a link and a placeholder from the
//! [`PageState`](crate::page::PageState) predicates and delegate tag
//! building to a [`TagRenderer`](crate::render::TagRenderer); `paginate`
//! merges options over config defaults and delegates everything else to a
//! [`PaginatorRenderer`](crate::render::PaginatorRenderer).

mod builder;
mod options;

pub use builder::PageLinkBuilder;
pub use options::{LinkOptions, PaginateOptions};
