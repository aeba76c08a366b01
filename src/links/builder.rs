//! Page link construction
//!
//! [`PageLinkBuilder`] is the request-scoped entry point for all helpers. It
//! owns the request context and a config snapshot, merges per-call options
//! over the global defaults, and hands the final URL and attribute list to
//! the rendering collaborators. Every call is stateless given its inputs.

use crate::config::{self, Config};
use crate::error::Result;
use crate::links::options::{LinkOptions, PaginateOptions};
use crate::page::PageState;
use crate::query::QueryParams;
use crate::render::{PageUrls, PaginateParams, PaginatorRenderer, SafeHtml, TagRenderer};
use crate::request::RequestContext;
use tracing::debug;

/// Request-scoped pagination link helpers
#[derive(Debug, Clone)]
pub struct PageLinkBuilder {
    ctx: RequestContext,
    config: Config,
}

impl PageLinkBuilder {
    /// Create a builder with a snapshot of the global config
    pub fn new(ctx: RequestContext) -> Self {
        Self::with_config(ctx, config::config())
    }

    /// Create a builder with an explicit config
    pub fn with_config(ctx: RequestContext, config: Config) -> Self {
        Self { ctx, config }
    }

    /// The request context this builder renders for
    pub fn context(&self) -> &RequestContext {
        &self.ctx
    }

    /// URL for `page` built from an explicit parameter mapping
    ///
    /// The output mapping equals `params` with `param_name` set to `page`,
    /// except that page 1 omits the key entirely unless
    /// `params_on_first_page` is set. With an empty output mapping the
    /// result is the bare path.
    pub fn page_url(
        &self,
        params: &QueryParams,
        param_name: &str,
        page: u32,
        params_on_first_page: bool,
    ) -> String {
        self.page_urls(Some(params.clone()), param_name, params_on_first_page)
            .url_for(page)
    }

    /// Link to the previous page, or the placeholder on the first page
    ///
    /// The placeholder (default empty) is returned verbatim as pre-escaped
    /// content with no link markup. Otherwise the link URL carries the
    /// previous page number and the tag defaults to `rel="previous"`.
    pub fn link_to_previous_page<R: TagRenderer>(
        &self,
        state: &PageState,
        text: &str,
        options: &LinkOptions,
        renderer: &R,
    ) -> SafeHtml {
        match state.prev_page() {
            Some(page) => self.adjacent_link(page, "previous", text, options, renderer),
            None => SafeHtml::new(options.placeholder.clone().unwrap_or_default()),
        }
    }

    /// Link to the next page, or the placeholder on the last page
    ///
    /// The placeholder is also used when the current page is out of range.
    /// Otherwise the tag defaults to `rel="next"`.
    pub fn link_to_next_page<R: TagRenderer>(
        &self,
        state: &PageState,
        text: &str,
        options: &LinkOptions,
        renderer: &R,
    ) -> SafeHtml {
        match state.next_page() {
            Some(page) => self.adjacent_link(page, "next", text, options, renderer),
            None => SafeHtml::new(options.placeholder.clone().unwrap_or_default()),
        }
    }

    /// Render the full pagination nav through a [`PaginatorRenderer`]
    ///
    /// Merges `options` over the state and the config defaults, then
    /// delegates window computation and markup assembly entirely to the
    /// collaborator.
    pub fn paginate<R: PaginatorRenderer>(
        &self,
        state: &PageState,
        options: &PaginateOptions,
        renderer: &R,
    ) -> Result<SafeHtml> {
        let param_name = options
            .param_name
            .clone()
            .unwrap_or_else(|| self.config.param_name.clone());
        let params_on_first_page = options
            .params_on_first_page
            .unwrap_or(self.config.params_on_first_page);

        let params = PaginateParams {
            current_page: state.current_page,
            total_pages: state.total_pages,
            per_page: state.per_page,
            param_name: param_name.clone(),
            remote: options.remote,
            window: options.window.unwrap_or(self.config.window),
            outer_window: options.outer_window.unwrap_or(self.config.outer_window),
            left: options.left.unwrap_or(self.config.left),
            right: options.right.unwrap_or(self.config.right),
            extra: options.extra.clone(),
        };
        let urls = PageUrls::new(
            self.ctx.path().unwrap_or(""),
            self.ctx.query().clone(),
            param_name,
            params_on_first_page,
        );

        debug!(
            current_page = params.current_page,
            total_pages = params.total_pages,
            window = params.window,
            param_name = %params.param_name,
            "rendering pagination nav"
        );
        renderer.render(&params, &urls).map(SafeHtml::new)
    }

    fn adjacent_link<R: TagRenderer>(
        &self,
        page: u32,
        default_rel: &str,
        text: &str,
        options: &LinkOptions,
        renderer: &R,
    ) -> SafeHtml {
        let param_name = options
            .param_name
            .as_deref()
            .unwrap_or(&self.config.param_name);
        let params_on_first_page = options
            .params_on_first_page
            .unwrap_or(self.config.params_on_first_page);
        let url = self
            .page_urls(options.params.clone(), param_name, params_on_first_page)
            .url_for(page);

        let mut attrs: Vec<(String, String)> = Vec::with_capacity(options.extra.len() + 2);
        attrs.push((
            "rel".to_string(),
            options
                .rel
                .clone()
                .unwrap_or_else(|| default_rel.to_string()),
        ));
        if options.remote {
            attrs.push(("data-remote".to_string(), "true".to_string()));
        }
        attrs.extend(options.extra.iter().cloned());

        SafeHtml::new(renderer.link_to(text, &url, &attrs))
    }

    // Base params default to the current request's; the page key is stripped
    // inside PageUrls either way.
    fn page_urls(
        &self,
        params: Option<QueryParams>,
        param_name: &str,
        params_on_first_page: bool,
    ) -> PageUrls {
        let base = params.unwrap_or_else(|| self.ctx.query().clone());
        PageUrls::new(
            self.ctx.path().unwrap_or(""),
            base,
            param_name,
            params_on_first_page,
        )
    }
}
