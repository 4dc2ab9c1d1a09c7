//! Static site generation.

use super::router::{Route, is_path_segment, render_route};
use crate::error::{Result, SiteError};
use crate::render::{KNOWN_CATEGORY_PAGES, SiteContext};
use crate::repository::CompanyRepository;
use indexmap::IndexSet;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Counts reported after a build.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct BuildSummary {
    pub output_dir: PathBuf,
    pub pages: usize,
    pub categories: usize,
    pub companies: usize,
    /// Ids or slugs that cannot be used as directory names
    pub skipped: Vec<String>,
}

/// Every route the site consists of, in output order.
///
/// Category pages cover the data categories followed by any known page
/// missing from the data.
#[must_use]
pub fn site_routes<R: CompanyRepository + ?Sized>(repo: &R) -> Vec<Route> {
    let mut slugs: IndexSet<&str> = repo
        .categories()
        .into_iter()
        .map(|c| c.slug.as_str())
        .collect();
    slugs.extend(KNOWN_CATEGORY_PAGES.iter().map(|m| m.slug));

    let mut routes = vec![Route::Home];
    routes.extend(slugs.into_iter().map(|s| Route::Category(s.to_string())));
    routes.extend(
        repo.companies()
            .into_iter()
            .map(|c| Route::Company(c.id().to_string())),
    );
    routes
}

/// Output file for a route below `out_dir`.
fn output_path(out_dir: &Path, route: &Route) -> PathBuf {
    match route {
        Route::Home => out_dir.join("index.html"),
        Route::Category(slug) => out_dir.join("kategoria").join(slug).join("index.html"),
        Route::Company(id) => out_dir.join("firma").join(id).join("index.html"),
        Route::NotFound => out_dir.join("404.html"),
    }
}

/// Render every page of the site into `out_dir`.
///
/// Pages are rendered in parallel and written once all of them succeeded.
pub fn build_site<R: CompanyRepository + Sync + ?Sized>(
    repo: &R,
    ctx: &SiteContext,
    out_dir: &Path,
) -> Result<BuildSummary> {
    let mut summary = BuildSummary {
        output_dir: out_dir.to_path_buf(),
        ..BuildSummary::default()
    };

    let mut routes = Vec::new();
    for route in site_routes(repo) {
        if let Route::Category(key) | Route::Company(key) = &route
            && !is_path_segment(key)
        {
            tracing::warn!("Skipping '{}': not usable as a path segment", key);
            summary.skipped.push(key.clone());
            continue;
        }
        routes.push(route);
    }
    routes.push(Route::NotFound);

    let pages: Vec<(PathBuf, String)> = routes
        .par_iter()
        .map(|route| -> Result<(PathBuf, String)> {
            let page = render_route(repo, ctx, route)
                .map_err(|e| SiteError::render(format!("rendering {}", route.path()), e))?;
            Ok((output_path(out_dir, route), page.body))
        })
        .collect::<Result<_>>()?;

    for (path, body) in &pages {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SiteError::io(parent, e))?;
        }
        std::fs::write(path, body).map_err(|e| SiteError::io(path, e))?;
        tracing::debug!("Wrote {}", path.display());
    }

    summary.pages = pages.len();
    summary.categories = routes
        .iter()
        .filter(|r| matches!(r, Route::Category(_)))
        .count();
    summary.companies = routes
        .iter()
        .filter(|r| matches!(r, Route::Company(_)))
        .count();

    tracing::info!(
        "Built {} pages ({} categories, {} companies) into {}",
        summary.pages,
        summary.categories,
        summary.companies,
        out_dir.display()
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::StaticRepository;

    #[test]
    fn test_routes_include_known_pages_once() {
        let repo = StaticRepository::from_json_str(
            r#"{"budowlane": {"name": "Budowlane", "short": "", "items": [
                {"id": "murator", "brand": "Murator", "company": "Murator SA", "score": 91}
            ]}}"#,
            "[]",
        )
        .unwrap();
        let routes = site_routes(&repo);
        assert_eq!(routes[0], Route::Home);
        assert_eq!(routes[1], Route::Category("budowlane".into()));
        let categories = routes
            .iter()
            .filter(|r| matches!(r, Route::Category(_)))
            .count();
        assert_eq!(categories, KNOWN_CATEGORY_PAGES.len());
        assert!(routes.contains(&Route::Company("murator".into())));
    }

    #[test]
    fn test_output_paths() {
        let out = Path::new("public");
        assert_eq!(output_path(out, &Route::Home), out.join("index.html"));
        assert_eq!(
            output_path(out, &Route::Company("a".into())),
            out.join("firma").join("a").join("index.html")
        );
        assert_eq!(output_path(out, &Route::NotFound), out.join("404.html"));
    }
}
