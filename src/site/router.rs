//! URL path to page mapping shared by the builder and the preview server.

use crate::render::{
    RenderResult, SiteContext, render_category_page, render_company_not_found,
    render_company_page, render_home_page, render_not_found_page,
};
use crate::repository::CompanyRepository;

/// A page of the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Category(String),
    Company(String),
    NotFound,
}

impl Route {
    /// Map a request path to a route.
    ///
    /// Query strings, fragments, a trailing slash and a trailing
    /// `index.html` are ignored.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.strip_suffix("index.html").unwrap_or(path);
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Self::Home,
            ["kategoria", slug] if is_path_segment(slug) => Self::Category((*slug).to_string()),
            ["firma", id] if is_path_segment(id) => Self::Company((*id).to_string()),
            _ => Self::NotFound,
        }
    }

    /// Site-relative path of the route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Category(slug) => format!("/kategoria/{slug}"),
            Self::Company(id) => format!("/firma/{id}"),
            Self::NotFound => "/404".to_string(),
        }
    }
}

/// Whether `segment` is usable both as a URL segment and a directory name.
#[must_use]
pub fn is_path_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && segment
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

/// HTML body and HTTP status of a rendered route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub status: u16,
    pub body: String,
}

impl RenderedPage {
    const fn ok(body: String) -> Self {
        Self { status: 200, body }
    }

    const fn not_found(body: String) -> Self {
        Self { status: 404, body }
    }
}

/// Render `route`, falling back to the matching not-found page.
pub fn render_route<R: CompanyRepository + ?Sized>(
    repo: &R,
    ctx: &SiteContext,
    route: &Route,
) -> RenderResult<RenderedPage> {
    let page = match route {
        Route::Home => RenderedPage::ok(render_home_page(repo, ctx)?),
        Route::Category(slug) => match render_category_page(repo, ctx, slug)? {
            Some(body) => RenderedPage::ok(body),
            None => RenderedPage::not_found(render_not_found_page(ctx)?),
        },
        Route::Company(id) => match render_company_page(repo, ctx, id)? {
            Some(body) => RenderedPage::ok(body),
            None => RenderedPage::not_found(render_company_not_found(ctx, id)?),
        },
        Route::NotFound => RenderedPage::not_found(render_not_found_page(ctx)?),
    };
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::StaticRepository;

    #[test]
    fn test_parse_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/index.html"), Route::Home);
        assert_eq!(
            Route::parse("/kategoria/budowlane/"),
            Route::Category("budowlane".into())
        );
        assert_eq!(
            Route::parse("/firma/murator?ref=x"),
            Route::Company("murator".into())
        );
        assert_eq!(
            Route::parse("/firma/murator/index.html"),
            Route::Company("murator".into())
        );
        assert_eq!(Route::parse("/firma/../etc"), Route::NotFound);
        assert_eq!(Route::parse("/firma"), Route::NotFound);
        assert_eq!(Route::parse("/o-nas"), Route::NotFound);
    }

    #[test]
    fn test_route_path() {
        assert_eq!(Route::Company("x".into()).path(), "/firma/x");
        assert_eq!(Route::parse(&Route::Category("a".into()).path()), Route::Category("a".into()));
    }

    #[test]
    fn test_render_route_statuses() {
        let repo = StaticRepository::from_json_str(
            r#"{"budowlane": {"name": "Budowlane", "short": "", "items": [
                {"id": "murator", "brand": "Murator", "company": "Murator SA", "score": 91}
            ]}}"#,
            "[]",
        )
        .unwrap();
        let ctx = SiteContext::default();

        let status = |route: Route| render_route(&repo, &ctx, &route).unwrap().status;
        assert_eq!(status(Route::Home), 200);
        assert_eq!(status(Route::Category("budowlane".into())), 200);
        assert_eq!(status(Route::Category("banki-i-finanse".into())), 200);
        assert_eq!(status(Route::Category("moda".into())), 404);
        assert_eq!(status(Route::Company("murator".into())), 200);
        assert_eq!(status(Route::Company("brak".into())), 404);
        assert_eq!(status(Route::NotFound), 404);
    }
}
