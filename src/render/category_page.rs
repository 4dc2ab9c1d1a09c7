//! Category listing pages.

use super::escape::{escape_html, escape_href};
use super::layout::{Crumb, PageMeta, page_shell, write_breadcrumbs};
use super::{RenderResult, SiteContext};
use crate::model::{Category, CompanySummary};
use crate::repository::CompanyRepository;
use crate::scoring::ScoreBand;
use std::fmt::Write;

pub(crate) const DEMO_DISCLAIMER: &str = "Wartości demonstracyjne — nie są danymi rzeczywistymi.";
const CATEGORY_NOT_FOUND: &str = "Kategoria nie została znaleziona";

/// Fixed metadata of a hand-written category page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryPageMeta {
    pub slug: &'static str,
    /// Last breadcrumb entry
    pub label: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Category pages that exist regardless of the data document.
pub const KNOWN_CATEGORY_PAGES: &[CategoryPageMeta] = &[
    CategoryPageMeta {
        slug: "banki-i-finanse",
        label: "Banki i finanse",
        title: "Banki i finanse - Czy Polska Firma",
        description: "Sprawdź indeks polskości banków i usług finansowych. Które instytucje finansowe są polskie?",
    },
    CategoryPageMeta {
        slug: "budowlane",
        label: "Budowlane",
        title: "Budowlane - Czy Polska Firma",
        description: "Sprawdź indeks polskości firm budowlanych. Materiały, markety i wyposażenie domu - które firmy są polskie?",
    },
    CategoryPageMeta {
        slug: "sklepy-spozywcze",
        label: "Sklepy spożywcze",
        title: "Sklepy spożywcze - CzyPolskaFirma",
        description: "Sprawdź indeks polskości sklepów spożywczych i sieci handlowych w Polsce",
    },
];

#[must_use]
pub fn category_page_meta(slug: &str) -> Option<&'static CategoryPageMeta> {
    KNOWN_CATEGORY_PAGES.iter().find(|m| m.slug == slug)
}

/// Render `/kategoria/{slug}`.
///
/// Returns `None` when the slug is neither in the data nor a known page.
/// A known page whose category is missing from the data renders the
/// not-found message without a list.
pub fn render_category_page<R: CompanyRepository + ?Sized>(
    repo: &R,
    ctx: &SiteContext,
    slug: &str,
) -> RenderResult<Option<String>> {
    let known = category_page_meta(slug);
    let category = repo.get_category(slug);

    let (label, meta) = match (known, category) {
        (None, None) => return Ok(None),
        (Some(known), _) => (
            known.label.to_string(),
            PageMeta {
                title: known.title.to_string(),
                description: known.description.to_string(),
            },
        ),
        (None, Some(category)) => (
            category.name.clone(),
            PageMeta {
                title: ctx.page_title(&category.name),
                description: category.short.clone(),
            },
        ),
    };

    let mut body = String::new();
    writeln!(body, "<div class=\"container\">")?;
    write_breadcrumbs(
        &mut body,
        &[
            Crumb::Link {
                label: "Strona główna",
                href: "/",
            },
            Crumb::Text("Kategorie"),
            Crumb::Current(&label),
        ],
    )?;

    match category {
        Some(category) => write_category_body(&mut body, category)?,
        None => {
            tracing::debug!("Category '{}' has no data", slug);
            writeln!(body, "<section class=\"card empty-state\">")?;
            writeln!(body, "  <h1>{CATEGORY_NOT_FOUND}</h1>")?;
            writeln!(body, "</section>")?;
        }
    }
    writeln!(body, "</div>")?;

    page_shell(ctx, &meta, &body).map(Some)
}

fn write_category_body(html: &mut String, category: &Category) -> RenderResult<()> {
    writeln!(html, "<div class=\"category-heading\">")?;
    writeln!(html, "  <h1>{}</h1>", escape_html(&category.name))?;
    writeln!(html, "  <p>{}</p>", escape_html(&category.short))?;
    writeln!(html, "</div>")?;

    if category.items.is_empty() {
        writeln!(html, "<p class=\"placeholder\">Brak firm w tej kategorii.</p>")?;
    } else {
        writeln!(html, "<ul class=\"company-list\">")?;
        for item in &category.items {
            write_list_item(html, item)?;
        }
        writeln!(html, "</ul>")?;
    }

    writeln!(html, "<p class=\"muted-note\">{DEMO_DISCLAIMER}</p>")?;
    Ok(())
}

fn write_list_item(html: &mut String, item: &CompanySummary) -> RenderResult<()> {
    let band = ScoreBand::of(item.score);
    writeln!(html, "  <li>")?;
    writeln!(html, "    <div>")?;
    writeln!(
        html,
        "      <a href=\"{}\"><strong>{}</strong></a>",
        escape_href(&item.profile_path()),
        escape_html(&item.brand)
    )?;
    writeln!(html, "      <div class=\"muted\">{}</div>", escape_html(&item.company))?;
    write!(html, "      <div>")?;
    for badge in &item.badges {
        write!(html, "<span class=\"badge\">{}</span>", escape_html(&badge.label()))?;
    }
    writeln!(html, "</div>")?;
    writeln!(html, "    </div>")?;
    writeln!(
        html,
        "    <span class=\"score {}\">{}/100</span>",
        band.text_class(),
        item.score
    )?;
    writeln!(html, "  </li>")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::StaticRepository;

    fn repo() -> StaticRepository {
        StaticRepository::from_json_str(
            r#"{
                "budowlane": {"name": "Budowlane", "short": "Materiały <i>i</i> narzędzia", "items": [
                    {"id": "murator", "brand": "Murator", "company": "Murator SA", "score": 91, "badges": ["polski_kapital"]},
                    {"id": "tani", "brand": "Tani", "company": "Tani GmbH", "score": 22}
                ]},
                "rtv-agd": {"name": "RTV i AGD", "short": "Elektronika", "items": []}
            }"#,
            "[]",
        )
        .unwrap()
    }

    #[test]
    fn test_known_category_page() {
        let html = render_category_page(&repo(), &SiteContext::default(), "budowlane")
            .unwrap()
            .unwrap();
        assert!(html.contains("<title>Budowlane - Czy Polska Firma</title>"));
        assert!(html.contains("Materiały &lt;i&gt;i&lt;/i&gt; narzędzia"));
        assert!(html.contains("href=\"/firma/murator\""));
        assert!(html.contains("polski kapital"));
        assert!(html.contains("score-high\">91/100"));
        assert!(html.contains("score-low\">22/100"));
        assert!(html.contains(DEMO_DISCLAIMER));
    }

    #[test]
    fn test_known_page_without_data() {
        let html = render_category_page(&repo(), &SiteContext::default(), "banki-i-finanse")
            .unwrap()
            .unwrap();
        assert!(html.contains(CATEGORY_NOT_FOUND));
        assert!(html.contains("Banki i finanse"));
        assert!(!html.contains("<ul class=\"company-list\">"));
    }

    #[test]
    fn test_data_only_category_uses_suffix() {
        let html = render_category_page(&repo(), &SiteContext::default(), "rtv-agd")
            .unwrap()
            .unwrap();
        assert!(html.contains("<title>RTV i AGD - Czy Polska Firma</title>"));
        assert!(html.contains("Brak firm w tej kategorii."));
    }

    #[test]
    fn test_unknown_slug() {
        assert!(
            render_category_page(&repo(), &SiteContext::default(), "moda")
                .unwrap()
                .is_none()
        );
    }
}
