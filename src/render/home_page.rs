//! Landing page.

use super::escape::{escape_html, escape_href};
use super::layout::{PageMeta, page_shell};
use super::report_dialog::{write_report_dialog, write_report_trigger};
use super::{RenderResult, SiteContext};
use crate::interaction::FormMode;
use crate::model::{Category, Criterion, TOTAL_POINTS};
use crate::repository::CompanyRepository;
use std::fmt::Write;

const BRAND_DIALOG: &str = "zglos-marke";

/// Render `/`: hero, category index, methodology and the brand report
/// section.
pub fn render_home_page<R: CompanyRepository + ?Sized>(
    repo: &R,
    ctx: &SiteContext,
) -> RenderResult<String> {
    let mut body = String::new();

    writeln!(body, "<section class=\"container hero\">")?;
    writeln!(body, "  <h1>Czy to polska firma?</h1>")?;
    writeln!(
        body,
        "  <p>Sprawdź indeks polskości marek: kapitał, siedzibę, podatki, produkcję i zatrudnienie.</p>"
    )?;
    writeln!(body, "</section>")?;

    write_category_index(&mut body, &repo.categories())?;
    write_methodology(&mut body)?;

    writeln!(body, "<section id=\"zglos\" class=\"container narrow empty-state\">")?;
    writeln!(body, "  <h2>Zgłoś markę lub poprawkę</h2>")?;
    writeln!(
        body,
        "  <p>Pomóż nam rozwijać bazę. Podaj nazwę i link do źródła.</p>"
    )?;
    write_report_trigger(&mut body, BRAND_DIALOG, "Zgłoś markę", true)?;
    write_report_dialog(&mut body, ctx, BRAND_DIALOG, &FormMode::Brand)?;
    writeln!(body, "</section>")?;

    let meta = PageMeta {
        title: ctx.title_suffix.clone(),
        description: "Sprawdź, które marki są polskie. Indeks polskości firm w jednym miejscu."
            .to_string(),
    };
    page_shell(ctx, &meta, &body)
}

fn write_category_index(html: &mut String, categories: &[&Category]) -> RenderResult<()> {
    writeln!(html, "<section id=\"kategorie\" class=\"container\">")?;
    writeln!(html, "  <h2>Kategorie</h2>")?;
    if categories.is_empty() {
        writeln!(html, "  <p class=\"placeholder\">Brak kategorii.</p>")?;
    } else {
        writeln!(html, "  <div class=\"grid-3\">")?;
        for category in categories {
            writeln!(
                html,
                "    <a class=\"alternative\" href=\"{}\">",
                escape_href(&category.path())
            )?;
            writeln!(html, "      <h3>{}</h3>", escape_html(&category.name))?;
            writeln!(html, "      <p>{}</p>", escape_html(&category.short))?;
            writeln!(
                html,
                "      <span class=\"muted\">Firm: {}</span>",
                category.items.len()
            )?;
            writeln!(html, "    </a>")?;
        }
        writeln!(html, "  </div>")?;
    }
    writeln!(html, "</section>")?;
    Ok(())
}

fn write_methodology(html: &mut String) -> RenderResult<()> {
    writeln!(html, "<section id=\"metodologia\" class=\"container\">")?;
    writeln!(html, "  <h2>Metodologia</h2>")?;
    writeln!(
        html,
        "  <p>Indeks polskości to suma punktów z siedmiu kryteriów, maksymalnie {TOTAL_POINTS}.</p>"
    )?;
    writeln!(html, "  <div class=\"grid-3\">")?;
    for criterion in Criterion::ALL {
        writeln!(html, "    <div class=\"criterion\">")?;
        writeln!(
            html,
            "      <div class=\"criterion-head\"><h3>{}</h3><span>{} pkt</span></div>",
            criterion.label(),
            criterion.max_points()
        )?;
        writeln!(html, "      <p>{}</p>", criterion.description())?;
        writeln!(html, "    </div>")?;
    }
    writeln!(html, "  </div>")?;
    writeln!(html, "</section>")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::StaticRepository;

    #[test]
    fn test_home_page_sections() {
        let repo = StaticRepository::from_json_str(
            r#"{
                "budowlane": {"name": "Budowlane", "short": "Materiały", "items": []},
                "sklepy-spozywcze": {"name": "Sklepy spożywcze", "short": "Sieci", "items": []}
            }"#,
            "[]",
        )
        .unwrap();
        let html = render_home_page(&repo, &SiteContext::default()).unwrap();

        assert!(html.contains("<title>Czy Polska Firma</title>"));
        assert!(html.contains("id=\"kategorie\""));
        assert!(html.contains("id=\"metodologia\""));
        assert!(html.contains("id=\"zglos\""));
        assert!(html.contains("<span>40 pkt</span>"));
        assert!(html.contains("data-dialog-open=\"zglos-marke\""));

        let budowlane = html.find("/kategoria/budowlane").unwrap();
        let spozywcze = html.find("/kategoria/sklepy-spozywcze").unwrap();
        assert!(budowlane < spozywcze);
    }
}
