//! Integration tests for the public helper API
//!
//! Exercises the full flow a host application goes through: register the
//! helpers, build a request context, and render prev/next links and the full
//! nav through fake collaborators.

use pagekit::{
    register, Config, Error, HelperHost, LinkOptions, PageLinkBuilder, PageState, PageUrls,
    PaginateOptions, PaginateParams, PaginatorRenderer, QueryParams, RequestContext, Result,
    TagRenderer,
};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

// ============================================================================
// Fake collaborators
// ============================================================================

/// Stand-in for the host's templating helper library
struct Tags;

impl TagRenderer for Tags {
    fn link_to(&self, text: &str, url: &str, attrs: &[(String, String)]) -> String {
        let attrs: String = attrs
            .iter()
            .map(|(k, v)| format!(" {k}=\"{v}\""))
            .collect();
        format!("<a href=\"{url}\"{attrs}>{text}</a>")
    }
}

/// Paginator collaborator with a crude window: current page +/- the inner
/// window size, no outer windows
struct WindowNav;

impl PaginatorRenderer for WindowNav {
    fn render(&self, params: &PaginateParams, urls: &PageUrls) -> Result<String> {
        let lo = params.current_page.saturating_sub(params.window).max(1);
        let hi = (params.current_page + params.window).min(params.total_pages);
        let mut out = String::from("<nav>");
        for page in lo..=hi {
            if page == params.current_page {
                out.push_str(&format!("<span>{page}</span>"));
            } else {
                out.push_str(&format!("<a href=\"{}\">{page}</a>", urls.url_for(page)));
            }
        }
        out.push_str("</nav>");
        Ok(out)
    }
}

struct App {
    views: Option<PathBuf>,
    i18n_load_path: Vec<PathBuf>,
}

impl HelperHost for App {
    fn views_dir(&self) -> Option<PathBuf> {
        self.views.clone()
    }

    fn i18n_load_path(&mut self) -> Option<&mut Vec<PathBuf>> {
        Some(&mut self.i18n_load_path)
    }
}

fn helpers(path: &str, raw_query: &str) -> PageLinkBuilder {
    PageLinkBuilder::with_config(
        RequestContext::from_query_string(path, raw_query),
        Config::default(),
    )
}

// ============================================================================
// Registration
// ============================================================================

#[test]
fn test_register_wires_views_and_locales() {
    let mut app = App {
        views: Some(PathBuf::from("/app/views")),
        i18n_load_path: vec![PathBuf::from("/app/locales/app.yml")],
    };
    let registration = register(&mut app);

    assert_eq!(registration.view_paths[0], PathBuf::from("/app/views"));
    assert_eq!(registration.view_paths.len(), 2);
    assert!(!registration.locale_paths.is_empty());
    // host entries stay in front of the merged bundled locales
    assert_eq!(app.i18n_load_path[0], PathBuf::from("/app/locales/app.yml"));
    assert_eq!(
        app.i18n_load_path.len(),
        1 + registration.locale_paths.len()
    );
}

// ============================================================================
// Prev/next links end to end
// ============================================================================

#[test]
fn test_prev_next_on_middle_page() {
    let helpers = helpers("/articles", "locale=en&page=5");
    let state = PageState::new(5, 10, 25);

    let prev = helpers.link_to_previous_page(&state, "Previous Page", &LinkOptions::new(), &Tags);
    let next = helpers.link_to_next_page(&state, "Next Page", &LinkOptions::new(), &Tags);

    assert_eq!(
        prev.as_str(),
        "<a href=\"/articles?locale=en&page=4\" rel=\"previous\">Previous Page</a>"
    );
    assert_eq!(
        next.as_str(),
        "<a href=\"/articles?locale=en&page=6\" rel=\"next\">Next Page</a>"
    );
}

#[test]
fn test_edges_render_placeholders() {
    let helpers = helpers("/articles", "");
    let first = PageState::new(1, 10, 25);
    let out_of_range = PageState::new(11, 10, 25);

    let prev = helpers.link_to_previous_page(
        &first,
        "Prev",
        &LinkOptions::new().placeholder("<span>At the Beginning</span>"),
        &Tags,
    );
    let next = helpers.link_to_next_page(&out_of_range, "Next", &LinkOptions::new(), &Tags);

    assert_eq!(prev.as_str(), "<span>At the Beginning</span>");
    assert_eq!(next.as_str(), "");
}

#[test]
fn test_remote_link() {
    let helpers = helpers("/articles", "");
    let state = PageState::new(2, 10, 25);
    let next =
        helpers.link_to_next_page(&state, "Next Page", &LinkOptions::new().remote(true), &Tags);
    assert_eq!(
        next.as_str(),
        "<a href=\"/articles?page=3\" rel=\"next\" data-remote=\"true\">Next Page</a>"
    );
}

// ============================================================================
// paginate end to end
// ============================================================================

#[test]
fn test_paginate_full_nav() {
    let helpers = helpers("/articles", "locale=en&page=3");
    let state = PageState::new(3, 5, 25);

    let nav = helpers
        .paginate(&state, &PaginateOptions::new().window(1), &WindowNav)
        .unwrap();

    assert_eq!(
        nav.as_str(),
        "<nav>\
         <a href=\"/articles?locale=en&page=2\">2</a>\
         <span>3</span>\
         <a href=\"/articles?locale=en&page=4\">4</a>\
         </nav>"
    );
}

#[test]
fn test_paginate_first_page_link_drops_page_key() {
    let helpers = helpers("/articles", "page=2");
    let state = PageState::new(2, 2, 25);

    let nav = helpers
        .paginate(&state, &PaginateOptions::new(), &WindowNav)
        .unwrap();

    assert_eq!(nav.as_str(), "<nav><a href=\"/articles\">1</a><span>2</span></nav>");
}

#[test]
fn test_paginate_render_error_propagates() {
    struct Broken;
    impl PaginatorRenderer for Broken {
        fn render(&self, _: &PaginateParams, _: &PageUrls) -> Result<String> {
            Err(Error::render("engine missing"))
        }
    }

    let helpers = helpers("/articles", "");
    let err = helpers
        .paginate(&PageState::new(1, 3, 25), &PaginateOptions::new(), &Broken)
        .unwrap_err();
    assert_eq!(err.to_string(), "Render failed: engine missing");
}

// ============================================================================
// Global configuration
// ============================================================================

#[test]
fn test_global_config_feeds_new_builders_and_per_call_wins() {
    pagekit::configure(|c| {
        c.param_name = "p".to_string();
        c.params_on_first_page = true;
    });

    let ctx = RequestContext::from_query_string("/articles", "p=3");
    let builder = PageLinkBuilder::new(ctx);
    let state = PageState::new(3, 10, 25);

    let prev = builder.link_to_previous_page(&state, "Prev", &LinkOptions::new(), &Tags);
    assert_eq!(prev.as_str(), "<a href=\"/articles?p=2\" rel=\"previous\">Prev</a>");

    // per-call override beats the global value
    let prev = builder.link_to_previous_page(
        &state,
        "Prev",
        &LinkOptions::new().param_name("page"),
        &Tags,
    );
    assert_eq!(
        prev.as_str(),
        "<a href=\"/articles?p=3&page=2\" rel=\"previous\">Prev</a>"
    );

    pagekit::configure(|c| *c = Config::default());
}

// ============================================================================
// Query round-trip at the public surface
// ============================================================================

#[test]
fn test_generated_query_round_trip() {
    let helpers = helpers("/articles", "");
    let q = QueryParams::parse("locale=en&tags%5B%5D=a&tags%5B%5D=b");
    let url = helpers.page_url(&q, "page", 3, false);
    assert_eq!(url, "/articles?locale=en&tags%5B%5D=a&tags%5B%5D=b&page=3");

    let (_, raw) = url.split_once('?').unwrap();
    assert_eq!(QueryParams::parse(raw).to_query_string(), raw);
}
