//! Company profile page.
//!
//! Sections follow the profile layout top to bottom: header, report panel,
//! index breakdown, the four fact cards, history, sources and alternatives.
//! Any section whose data is absent renders [`PLACEHOLDER`].

use super::category_page::DEMO_DISCLAIMER;
use super::escape::{escape_html, escape_html_attr, escape_href};
use super::format::{PLACEHOLDER, format_date, format_thousands, yes_no};
use super::layout::{Crumb, PageMeta, page_shell, write_breadcrumbs};
use super::report_dialog::{write_report_dialog, write_report_trigger};
use super::{RenderResult, SiteContext};
use crate::interaction::{FormMode, SHARE_LABEL};
use crate::model::{CompanyDetail, CompanySummary};
use crate::repository::CompanyRepository;
use crate::scoring::{ScoreBand, effective_breakdown, rank_alternatives};
use std::fmt::Write;

const LOGO_FALLBACK: &str = "/placeholder.svg?height=80&width=80";
const CORRECTION_DIALOG: &str = "zglos-poprawke";
const INDEX_DIALOG: &str = "zglos-indeks";
const ALTERNATIVE_BADGES_SHOWN: usize = 2;

/// Render `/firma/{id}`, or `None` for an unknown id.
pub fn render_company_page<R: CompanyRepository + ?Sized>(
    repo: &R,
    ctx: &SiteContext,
    id: &str,
) -> RenderResult<Option<String>> {
    let Some(detail) = repo.get_company(id) else {
        return Ok(None);
    };

    let slug = detail.summary.category_slug.as_str();
    let category_name = repo.category_name(slug);
    let category_href = format!("/kategoria/{slug}");
    let alternatives = rank_alternatives(repo, slug, detail.id());

    let mut body = String::new();
    writeln!(body, "<div class=\"container\">")?;
    write_breadcrumbs(
        &mut body,
        &[
            Crumb::Link {
                label: "Strona główna",
                href: "/",
            },
            Crumb::Link {
                label: "Kategorie",
                href: "/#kategorie",
            },
            Crumb::Link {
                label: category_name,
                href: &category_href,
            },
            Crumb::Current(detail.brand()),
        ],
    )?;

    write_header(&mut body, detail)?;
    write_report_panel(&mut body)?;
    write_breakdown(&mut body, detail)?;

    writeln!(body, "<div class=\"grid-2\">")?;
    write_ownership(&mut body, detail)?;
    write_headquarters(&mut body, detail)?;
    write_production(&mut body, detail)?;
    write_employment(&mut body, detail)?;
    writeln!(body, "</div>")?;

    write_history(&mut body, detail)?;
    write_sources(&mut body, detail)?;
    if !alternatives.is_empty() {
        write_alternatives(&mut body, &alternatives)?;
    }

    write_report_dialog(&mut body, ctx, CORRECTION_DIALOG, &FormMode::Brand)?;
    write_report_dialog(
        &mut body,
        ctx,
        INDEX_DIALOG,
        &FormMode::Company {
            name: detail.brand().to_string(),
        },
    )?;
    writeln!(body, "</div>")?;

    let meta = PageMeta {
        title: ctx.page_title(detail.brand()),
        description: format!(
            "Indeks polskości marki {}: {}/100. Właścicielstwo, siedziba, podatki, produkcja i zatrudnienie.",
            detail.brand(),
            detail.score()
        ),
    };
    page_shell(ctx, &meta, &body).map(Some)
}

/// Page shown for an id that has no profile.
pub fn render_company_not_found(ctx: &SiteContext, id: &str) -> RenderResult<String> {
    let mut body = String::new();
    writeln!(body, "<div class=\"container narrow\">")?;
    write_breadcrumbs(
        &mut body,
        &[
            Crumb::Link {
                label: "Strona główna",
                href: "/",
            },
            Crumb::Link {
                label: "Kategorie",
                href: "/#kategorie",
            },
            Crumb::Current(id),
        ],
    )?;
    writeln!(body, "<section class=\"card empty-state\">")?;
    writeln!(body, "  <h1>Nie znaleziono firmy</h1>")?;
    writeln!(
        body,
        "  <p>Firma „{}” nie istnieje w naszej bazie.</p>",
        escape_html(id)
    )?;
    writeln!(body, "  <a class=\"button\" href=\"/#kategorie\">Przeglądaj kategorie</a>")?;
    writeln!(body, "</section>")?;
    writeln!(body, "</div>")?;

    let meta = PageMeta {
        title: ctx.page_title("Nie znaleziono firmy"),
        description: "Firma nie została znaleziona.".to_string(),
    };
    page_shell(ctx, &meta, &body)
}

// ============================================================================
// Header and panels
// ============================================================================

fn write_header(html: &mut String, detail: &CompanyDetail) -> RenderResult<()> {
    let band = ScoreBand::of(detail.score());
    let logo = detail.logo_url.as_deref().unwrap_or(LOGO_FALLBACK);

    writeln!(html, "<section class=\"card\">")?;
    writeln!(html, "  <div class=\"company-header\">")?;
    writeln!(html, "    <div class=\"company-identity\">")?;
    writeln!(
        html,
        "      <img src=\"{}\" alt=\"Logo {}\">",
        escape_href(logo),
        escape_html_attr(detail.brand())
    )?;
    writeln!(html, "      <div>")?;
    writeln!(html, "        <h1>{}</h1>", escape_html(detail.brand()))?;
    writeln!(html, "        <p>{}</p>", escape_html(&detail.summary.company))?;
    write!(html, "        <div>")?;
    for badge in &detail.summary.badges {
        write!(html, "<span class=\"badge\">{}</span>", escape_html(&badge.label()))?;
    }
    writeln!(html, "</div>")?;
    writeln!(html, "      </div>")?;
    writeln!(html, "    </div>")?;

    writeln!(html, "    <div>")?;
    writeln!(
        html,
        "      <div class=\"score-box {}\"><div class=\"value {}\">{}/100</div><div>Indeks polskości</div></div>",
        band.background_class(),
        band.text_class(),
        detail.score()
    )?;
    writeln!(html, "      <div class=\"actions\">")?;
    write_report_trigger(html, CORRECTION_DIALOG, "Zgłoś poprawkę", false)?;
    writeln!(
        html,
        "<button type=\"button\" class=\"button\" data-share-path=\"{}\"><span class=\"label\">{SHARE_LABEL}</span></button>",
        escape_html_attr(&detail.summary.profile_path())
    )?;
    if let Some(website) = &detail.website {
        writeln!(
            html,
            "<a class=\"button\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Strona firmy</a>",
            escape_href(website)
        )?;
    }
    writeln!(html, "      </div>")?;
    writeln!(html, "    </div>")?;
    writeln!(html, "  </div>")?;
    writeln!(html, "  <p class=\"disclaimer\">{DEMO_DISCLAIMER}</p>")?;
    writeln!(html, "</section>")?;
    Ok(())
}

fn write_report_panel(html: &mut String) -> RenderResult<()> {
    writeln!(html, "<section class=\"card company-header\">")?;
    writeln!(html, "  <div>")?;
    writeln!(html, "    <h3>Masz informacje o tej firmie?</h3>")?;
    writeln!(html, "    <p>Pomóż nam obliczyć dokładny indeks polskości</p>")?;
    writeln!(html, "  </div>")?;
    write_report_trigger(html, INDEX_DIALOG, "Zgłoś indeks polskości", false)?;
    writeln!(html, "</section>")?;
    Ok(())
}

fn write_breakdown(html: &mut String, detail: &CompanyDetail) -> RenderResult<()> {
    let breakdown = effective_breakdown(detail);

    writeln!(html, "<section class=\"card\">")?;
    writeln!(html, "  <h2>Rozbicie Indeksu polskości</h2>")?;
    writeln!(html, "  <div class=\"grid-3\">")?;
    for (criterion, value) in breakdown.entries() {
        let max = criterion.max_points();
        writeln!(html, "    <div class=\"criterion\">")?;
        writeln!(
            html,
            "      <div class=\"criterion-head\"><h3>{}</h3><span>{value}/{max}</span></div>",
            criterion.label()
        )?;
        writeln!(
            html,
            "      <div class=\"progress\" role=\"progressbar\" aria-valuemin=\"0\" aria-valuemax=\"100\" aria-valuenow=\"{pct:.0}\" aria-label=\"Indeks polskości — {}: {value} na {max}\"><div style=\"width: {pct:.0}%\"></div></div>",
            criterion.label(),
            pct = breakdown.percentage(criterion)
        )?;
        writeln!(html, "      <p>{}</p>", criterion.description())?;
        writeln!(html, "    </div>")?;
    }
    writeln!(html, "  </div>")?;

    let verified = detail
        .last_verified
        .as_deref()
        .map_or_else(|| PLACEHOLDER.to_string(), format_date);
    writeln!(
        html,
        "  <p class=\"muted\">Ostatnia weryfikacja: {} | <a href=\"/#metodologia\">Metodologia</a></p>",
        escape_html(&verified)
    )?;
    writeln!(html, "</section>")?;
    Ok(())
}

// ============================================================================
// Fact cards
// ============================================================================

fn write_placeholder(html: &mut String) -> RenderResult<()> {
    writeln!(html, "  <p class=\"placeholder\">{PLACEHOLDER}</p>")?;
    Ok(())
}

fn write_ownership(html: &mut String, detail: &CompanyDetail) -> RenderResult<()> {
    let ownership = detail.ownership.as_ref();

    writeln!(html, "<section class=\"card\">")?;
    writeln!(html, "  <h2>Właścicielstwo i kapitał</h2>")?;
    match ownership.and_then(|o| o.company_tree.as_ref()) {
        Some(tree) => {
            writeln!(html, "  <ul>")?;
            for level in tree {
                writeln!(
                    html,
                    "    <li><strong>{}:</strong> {}</li>",
                    escape_html(&level.label),
                    escape_html(&level.value)
                )?;
            }
            writeln!(html, "  </ul>")?;
        }
        None => write_placeholder(html)?,
    }

    if let Some(owners) = ownership.and_then(|o| o.beneficial_owners.as_ref()) {
        writeln!(html, "  <h3>Beneficjenci rzeczywiści:</h3>")?;
        writeln!(html, "  <ul>")?;
        for owner in owners {
            write!(html, "    <li>{}", escape_html(&owner.name))?;
            if let Some(country) = &owner.country {
                write!(html, " <span class=\"muted\">{}</span>", escape_html(country))?;
            }
            if let Some(share) = &owner.share {
                write!(html, " <strong>{}</strong>", escape_html(share))?;
            }
            writeln!(html, "</li>")?;
        }
        writeln!(html, "  </ul>")?;
    }
    writeln!(html, "</section>")?;
    Ok(())
}

fn write_headquarters(html: &mut String, detail: &CompanyDetail) -> RenderResult<()> {
    writeln!(html, "<section class=\"card\">")?;
    writeln!(html, "  <h2>Siedziba i podatki</h2>")?;
    match &detail.headquarters {
        Some(hq) => writeln!(
            html,
            "  <p><strong>Siedziba główna:</strong> {}, {}</p>",
            escape_html(&hq.city),
            escape_html(&hq.country)
        )?,
        None => write_placeholder(html)?,
    }

    if let Some(tax) = &detail.tax {
        write!(
            html,
            "  <p><strong>CIT w Polsce:</strong> {}",
            yes_no(tax.pays_cit_in_pl.unwrap_or(false))
        )?;
        if let Some(year) = &tax.last_year {
            write!(html, " ({})", escape_html(year))?;
        }
        writeln!(html, "</p>")?;
    }

    if let Some(registry) = &detail.registry {
        writeln!(html, "  <div><strong>Rejestry:</strong>")?;
        for (label, value) in registry.entries() {
            writeln!(html, "    <div>{label}: {}</div>", escape_html(value))?;
        }
        writeln!(html, "  </div>")?;
    }
    writeln!(html, "</section>")?;
    Ok(())
}

fn write_production(html: &mut String, detail: &CompanyDetail) -> RenderResult<()> {
    writeln!(html, "<section class=\"card\">")?;
    writeln!(html, "  <h2>Produkcja i łańcuch dostaw</h2>")?;
    match &detail.production {
        Some(production) => {
            let level = production
                .in_pl
                .map_or_else(|| PLACEHOLDER.to_string(), |l| l.to_string());
            writeln!(html, "  <p><strong>Produkcja w Polsce:</strong> {level}</p>")?;
            if let Some(notes) = &production.notes {
                writeln!(html, "  <p class=\"muted\">{}</p>", escape_html(notes))?;
            }
        }
        None => write_placeholder(html)?,
    }
    writeln!(html, "</section>")?;
    Ok(())
}

fn write_employment(html: &mut String, detail: &CompanyDetail) -> RenderResult<()> {
    writeln!(html, "<section class=\"card\">")?;
    writeln!(html, "  <h2>Zatrudnienie i R&amp;D</h2>")?;
    match &detail.employment {
        Some(employment) => {
            let level = employment
                .in_pl
                .map_or_else(|| PLACEHOLDER.to_string(), |l| l.to_string());
            write!(html, "  <p><strong>Zatrudnienie w Polsce:</strong> {level}")?;
            if let Some(headcount) = employment.headcount_pl.filter(|&n| n > 0) {
                write!(
                    html,
                    " <span class=\"muted\">({} osób)</span>",
                    format_thousands(headcount)
                )?;
            }
            writeln!(html, "</p>")?;
        }
        None => write_placeholder(html)?,
    }

    match &detail.rnd {
        Some(rnd) => {
            writeln!(
                html,
                "  <p><strong>R&amp;D w Polsce:</strong> {}</p>",
                yes_no(rnd.in_pl.unwrap_or(false))
            )?;
            if let Some(notes) = &rnd.notes {
                writeln!(html, "  <p class=\"muted\">{}</p>", escape_html(notes))?;
            }
        }
        None => write_placeholder(html)?,
    }
    writeln!(html, "</section>")?;
    Ok(())
}

// ============================================================================
// History, sources, alternatives
// ============================================================================

fn write_history(html: &mut String, detail: &CompanyDetail) -> RenderResult<()> {
    writeln!(html, "<section class=\"card\">")?;
    writeln!(html, "  <h2>Krótka historia</h2>")?;
    if detail.history.is_empty() {
        write_placeholder(html)?;
    }
    for event in &detail.history {
        writeln!(html, "  <div class=\"timeline-item\">")?;
        writeln!(html, "    <span class=\"date\">{}</span>", escape_html(&event.date))?;
        writeln!(html, "    <div>")?;
        writeln!(html, "      <h3>{}</h3>", escape_html(&event.title))?;
        if let Some(text) = &event.text {
            writeln!(html, "      <p>{}</p>", escape_html(text))?;
        }
        writeln!(html, "    </div>")?;
        writeln!(html, "  </div>")?;
    }
    writeln!(html, "</section>")?;
    Ok(())
}

fn write_sources(html: &mut String, detail: &CompanyDetail) -> RenderResult<()> {
    writeln!(html, "<section class=\"card\">")?;
    writeln!(html, "  <h2>Źródła</h2>")?;
    if detail.sources.is_empty() {
        write_placeholder(html)?;
    } else {
        writeln!(html, "  <div class=\"grid-2\">")?;
        for source in &detail.sources {
            writeln!(
                html,
                "    <a class=\"alternative\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                escape_href(&source.url),
                escape_html(&source.label)
            )?;
        }
        writeln!(html, "  </div>")?;
    }
    writeln!(html, "</section>")?;
    Ok(())
}

fn write_alternatives(html: &mut String, alternatives: &[&CompanySummary]) -> RenderResult<()> {
    writeln!(html, "<section class=\"card\">")?;
    writeln!(html, "  <h2>Polskie alternatywy</h2>")?;
    writeln!(html, "  <div class=\"grid-3\">")?;
    for alt in alternatives {
        writeln!(
            html,
            "    <a class=\"alternative\" href=\"{}\">",
            escape_href(&alt.profile_path())
        )?;
        writeln!(
            html,
            "      <div class=\"criterion-head\"><h3>{}</h3><span class=\"{}\">{}/100</span></div>",
            escape_html(&alt.brand),
            ScoreBand::of(alt.score).text_class(),
            alt.score
        )?;
        writeln!(html, "      <p>{}</p>", escape_html(&alt.company))?;
        write!(html, "      <div>")?;
        for badge in alt.badges.iter().take(ALTERNATIVE_BADGES_SHOWN) {
            write!(html, "<span class=\"badge\">{}</span>", escape_html(&badge.label()))?;
        }
        if alt.badges.len() > ALTERNATIVE_BADGES_SHOWN {
            write!(
                html,
                "<span class=\"badge\">+{}</span>",
                alt.badges.len() - ALTERNATIVE_BADGES_SHOWN
            )?;
        }
        writeln!(html, "</div>")?;
        writeln!(html, "    </a>")?;
    }
    writeln!(html, "  </div>")?;
    writeln!(html, "</section>")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::StaticRepository;

    const CATEGORIES: &str = r#"{
        "sklepy-spozywcze": {"name": "Sklepy spożywcze", "short": "Sieci handlowe", "items": [
            {"id": "sadownik", "brand": "Sadownik", "company": "Sadownik Sp. z o.o.", "score": 88,
             "badges": ["polski_kapital"]},
            {"id": "zielnik", "brand": "Zielnik", "company": "Zielnik SA", "score": 75,
             "badges": ["polski_kapital", "produkcja_w_polsce", "siedziba_w_polsce"]},
            {"id": "spar-ex", "brand": "Sparex", "company": "Sparex BV", "score": 30}
        ]}
    }"#;

    const COMPANIES: &str = r#"[{
        "id": "sadownik",
        "brand": "Sadownik",
        "company": "Sadownik Sp. z o.o.",
        "categorySlug": "sklepy-spozywcze",
        "score": 88,
        "badges": ["polski_kapital"],
        "website": "https://sadownik.example.pl",
        "headquarters": {"country": "Polska", "city": "Grójec"},
        "tax": {"paysCITinPL": true, "lastYear": "2023"},
        "employment": {"inPL": "tak", "headcountPL": 12500},
        "history": [{"date": "1991", "title": "Założenie <firmy>"}],
        "lastVerified": "2024-03-15"
    }]"#;

    fn repo() -> StaticRepository {
        StaticRepository::from_json_str(CATEGORIES, COMPANIES).unwrap()
    }

    fn page(id: &str) -> String {
        render_company_page(&repo(), &SiteContext::default(), id)
            .unwrap()
            .unwrap()
    }

    #[test]
    fn test_profile_sections() {
        let html = page("sadownik");
        assert!(html.contains("<title>Sadownik - Czy Polska Firma</title>"));
        assert!(html.contains("href=\"/kategoria/sklepy-spozywcze\">Sklepy spożywcze</a>"));
        assert!(html.contains("alt=\"Logo Sadownik\""));
        assert!(html.contains(LOGO_FALLBACK.replace('&', "&amp;").as_str()));
        assert!(html.contains("88/100</div><div>Indeks polskości"));
        assert!(html.contains("Strona firmy"));
        assert!(html.contains("<strong>Siedziba główna:</strong> Grójec, Polska"));
        assert!(html.contains("<strong>CIT w Polsce:</strong> Tak (2023)"));
        assert!(html.contains("(12\u{a0}500 osób)"));
        assert!(html.contains("Założenie &lt;firmy&gt;"));
        assert!(html.contains("Ostatnia weryfikacja: 15.03.2024"));
        assert!(html.contains("data-share-path=\"/firma/sadownik\""));
        assert!(html.contains("Zgłoś indeks polskości dla Sadownik"));
    }

    #[test]
    fn test_header_and_panel_dialog_modes() {
        let html = page("sadownik");
        assert!(html.contains(
            "<h2 id=\"zglos-poprawke-title\">Zgłoś markę lub poprawkę</h2>"
        ));
        assert!(html.contains(
            "<h2 id=\"zglos-indeks-title\">Zgłoś indeks polskości dla Sadownik</h2>"
        ));
        assert_eq!(html.matches("value=\"Sadownik\" disabled").count(), 1);
    }

    #[test]
    fn test_missing_sections_use_placeholder() {
        let html = page("sadownik");
        // ownership, production, rnd, sources
        assert_eq!(html.matches(PLACEHOLDER).count(), 4);
    }

    #[test]
    fn test_breakdown_grid_uses_calculator() {
        let html = page("sadownik");
        assert!(html.contains("Rozbicie Indeksu polskości"));
        assert!(html.contains("<span>40/40</span>"));
        assert!(html.contains("aria-label=\"Indeks polskości — Kapitał: 40 na 40\""));
    }

    #[test]
    fn test_alternatives_limit_badges() {
        let html = page("sadownik");
        assert!(html.contains("Polskie alternatywy"));
        assert!(html.contains("href=\"/firma/zielnik\""));
        assert!(html.contains("<span class=\"badge\">+1</span>"));
        assert!(!html.contains("href=\"/firma/spar-ex\""));
    }

    #[test]
    fn test_synthesized_profile_has_no_alternatives_section_when_none_qualify() {
        let repo = StaticRepository::from_json_str(
            r#"{"budowlane": {"name": "Budowlane", "short": "", "items": [
                {"id": "solo", "brand": "Solo", "company": "Solo SA", "score": 50}
            ]}}"#,
            "[]",
        )
        .unwrap();
        let html = render_company_page(&repo, &SiteContext::default(), "solo")
            .unwrap()
            .unwrap();
        assert!(!html.contains("Polskie alternatywy"));
        assert!(html.contains("Ostatnia weryfikacja: Dane w przygotowaniu"));
    }

    #[test]
    fn test_unknown_company() {
        assert!(
            render_company_page(&repo(), &SiteContext::default(), "brak")
                .unwrap()
                .is_none()
        );
        let html = render_company_not_found(&SiteContext::default(), "<brak>").unwrap();
        assert!(html.contains("Nie znaleziono firmy"));
        assert!(html.contains("&lt;brak&gt;"));
    }
}
