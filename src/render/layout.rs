//! Page shell: head, header, footer, breadcrumbs and the client script.

use super::escape::{escape_html, escape_html_attr, escape_href};
use super::{RenderResult, SiteContext};
use std::fmt::Write;

/// Title and description of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    /// Full `<title>` text
    pub title: String,
    pub description: String,
}

/// One breadcrumb entry.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Crumb<'a> {
    Link { label: &'a str, href: &'a str },
    Text(&'a str),
    Current(&'a str),
}

/// Wrap `body` in the full document.
pub(crate) fn page_shell(ctx: &SiteContext, meta: &PageMeta, body: &str) -> RenderResult<String> {
    let mut html = String::with_capacity(body.len() + 8 * 1024);

    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(html, "<html lang=\"pl\">")?;
    writeln!(html, "<head>")?;
    writeln!(html, "<meta charset=\"utf-8\">")?;
    writeln!(
        html,
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">"
    )?;
    writeln!(html, "<title>{}</title>", escape_html(&meta.title))?;
    writeln!(
        html,
        "<meta name=\"description\" content=\"{}\">",
        escape_html_attr(&meta.description)
    )?;
    writeln!(
        html,
        "<meta property=\"og:title\" content=\"{}\">",
        escape_html_attr(&meta.title)
    )?;
    writeln!(
        html,
        "<meta property=\"og:description\" content=\"{}\">",
        escape_html_attr(&meta.description)
    )?;
    writeln!(html, "<style>{STYLES}</style>")?;
    writeln!(html, "</head>")?;
    writeln!(html, "<body>")?;

    write_header(&mut html)?;
    writeln!(html, "<main>")?;
    html.push_str(body);
    writeln!(html, "</main>")?;
    write_footer(&mut html, ctx)?;
    write_script(&mut html, ctx)?;

    writeln!(html, "</body>")?;
    writeln!(html, "</html>")?;
    Ok(html)
}

fn write_header(html: &mut String) -> RenderResult<()> {
    writeln!(html, "<header class=\"site-header\">")?;
    writeln!(html, "  <div class=\"container header-row\">")?;
    writeln!(
        html,
        "    <a href=\"/\" class=\"logo\">Czy<span>Polska</span>Firma</a>"
    )?;
    writeln!(html, "    <nav class=\"main-nav\">")?;
    writeln!(html, "      <a href=\"/#kategorie\">Kategorie</a>")?;
    writeln!(html, "      <a href=\"/#metodologia\">Metodologia</a>")?;
    writeln!(html, "      <a href=\"/#zglos\">Zgłoś markę</a>")?;
    writeln!(html, "    </nav>")?;
    writeln!(html, "  </div>")?;
    writeln!(html, "</header>")?;
    Ok(())
}

const FOOTER_COLUMNS: &[(&str, &[&str])] = &[
    ("O projekcie", &["O nas", "Misja", "Zespół"]),
    ("Metodologia", &["Kryteria oceny", "Źródła danych", "Aktualizacje"]),
    ("Kategorie", &["Spożywcze", "RTV/AGD", "Moda", "Wszystkie"]),
];

const SOCIAL_LINKS: &[&str] = &["Twitter", "LinkedIn", "GitHub"];

fn write_footer(html: &mut String, ctx: &SiteContext) -> RenderResult<()> {
    let email = escape_html(&ctx.contact_email);
    let mailto = escape_href(&format!("mailto:{}", ctx.contact_email));

    writeln!(html, "<footer class=\"site-footer\">")?;
    writeln!(html, "  <div class=\"container\">")?;
    writeln!(html, "    <div class=\"footer-columns\">")?;
    for (heading, links) in FOOTER_COLUMNS {
        writeln!(html, "      <div>")?;
        writeln!(html, "        <h3>{heading}</h3>")?;
        writeln!(html, "        <ul>")?;
        for link in *links {
            writeln!(html, "          <li><a href=\"#\">{link}</a></li>")?;
        }
        writeln!(html, "        </ul>")?;
        writeln!(html, "      </div>")?;
    }
    writeln!(html, "      <div>")?;
    writeln!(html, "        <h3>Kontakt</h3>")?;
    writeln!(html, "        <ul>")?;
    writeln!(html, "          <li><a href=\"{mailto}\">{email}</a></li>")?;
    writeln!(html, "          <li><a href=\"#\">Polityka prywatności</a></li>")?;
    writeln!(html, "          <li><a href=\"#\">Regulamin</a></li>")?;
    writeln!(html, "        </ul>")?;
    writeln!(html, "      </div>")?;
    writeln!(html, "    </div>")?;

    writeln!(html, "    <div class=\"social\">")?;
    for name in SOCIAL_LINKS {
        writeln!(html, "      <a href=\"#\" aria-label=\"{name}\">{name}</a>")?;
    }
    writeln!(html, "      <a href=\"{mailto}\" aria-label=\"E-mail\">E-mail</a>")?;
    writeln!(html, "    </div>")?;

    writeln!(html, "    <div id=\"newsletter\" class=\"newsletter\">")?;
    writeln!(html, "      <h3>Dołącz do listy oczekujących</h3>")?;
    writeln!(
        html,
        "      <p>Bądź pierwszym, który dowie się o uruchomieniu serwisu</p>"
    )?;
    writeln!(html, "      <form class=\"newsletter-form\" onsubmit=\"return false\">")?;
    writeln!(
        html,
        "        <input type=\"email\" placeholder=\"Twój e-mail\" required>"
    )?;
    writeln!(html, "        <button type=\"submit\">Zapisz mnie</button>")?;
    writeln!(html, "      </form>")?;
    writeln!(html, "    </div>")?;

    writeln!(html, "    <div class=\"legal\">")?;
    writeln!(
        html,
        "      <p>Serwis ma charakter informacyjny. Nie stanowi porady prawnej. Dane mogą ulegać zmianie; pokazujemy daty ostatniej weryfikacji i linki do źródeł.</p>"
    )?;
    writeln!(
        html,
        "      <p>© {} CzyPolskaFirma. Wszystkie prawa zastrzeżone.</p>",
        ctx.copyright_year
    )?;
    writeln!(html, "    </div>")?;
    writeln!(html, "  </div>")?;
    writeln!(html, "</footer>")?;
    Ok(())
}

/// Render a breadcrumb trail.
pub(crate) fn write_breadcrumbs(html: &mut String, crumbs: &[Crumb<'_>]) -> RenderResult<()> {
    writeln!(html, "<nav aria-label=\"Breadcrumb\" class=\"breadcrumbs\">")?;
    writeln!(html, "  <ol>")?;
    for (i, crumb) in crumbs.iter().enumerate() {
        if i > 0 {
            writeln!(html, "    <li class=\"sep\" aria-hidden=\"true\">›</li>")?;
        }
        match crumb {
            Crumb::Link { label, href } => writeln!(
                html,
                "    <li><a href=\"{}\">{}</a></li>",
                escape_href(href),
                escape_html(label)
            )?,
            Crumb::Text(label) => {
                writeln!(html, "    <li class=\"muted\">{}</li>", escape_html(label))?;
            }
            Crumb::Current(label) => writeln!(
                html,
                "    <li class=\"current\" aria-current=\"page\">{}</li>",
                escape_html(label)
            )?,
        }
    }
    writeln!(html, "  </ol>")?;
    writeln!(html, "</nav>")?;
    Ok(())
}

/// Generic page for unknown routes.
pub fn render_not_found_page(ctx: &SiteContext) -> RenderResult<String> {
    let mut body = String::new();
    writeln!(body, "<div class=\"container narrow\">")?;
    write_breadcrumbs(
        &mut body,
        &[
            Crumb::Link {
                label: "Strona główna",
                href: "/",
            },
            Crumb::Current("Nie znaleziono"),
        ],
    )?;
    writeln!(body, "<section class=\"card empty-state\">")?;
    writeln!(body, "  <h1>Nie znaleziono strony</h1>")?;
    writeln!(body, "  <p>Strona, której szukasz, nie istnieje lub została przeniesiona.</p>")?;
    writeln!(body, "  <a class=\"button\" href=\"/\">Wróć na stronę główną</a>")?;
    writeln!(body, "</section>")?;
    writeln!(body, "</div>")?;

    let meta = PageMeta {
        title: ctx.page_title("Nie znaleziono"),
        description: "Strona nie istnieje.".to_string(),
    };
    page_shell(ctx, &meta, &body)
}

fn write_script(html: &mut String, ctx: &SiteContext) -> RenderResult<()> {
    writeln!(html, "<script>")?;
    writeln!(html, "const CONFIRM_MS = {};", ctx.confirmation_ms)?;
    writeln!(
        html,
        "const MAX_ATTACHMENT_BYTES = {};",
        ctx.max_attachment_mb.saturating_mul(1024 * 1024)
    )?;
    writeln!(
        html,
        "const TOO_LARGE = \"Plik jest za duży. Maksymalny rozmiar to {}MB.\";",
        ctx.max_attachment_mb
    )?;
    html.push_str(SCRIPT);
    writeln!(html, "</script>")?;
    Ok(())
}

const SCRIPT: &str = r#"
document.querySelectorAll("[data-dialog-open]").forEach((trigger) => {
  trigger.addEventListener("click", () => {
    const dialog = document.getElementById(trigger.dataset.dialogOpen);
    if (dialog) dialog.showModal();
  });
});

document.querySelectorAll("dialog.report-dialog").forEach((dialog) => {
  const form = dialog.querySelector("form");
  const thanks = dialog.querySelector(".report-thanks");
  const nameInput = form.querySelector("[name=brandName]");
  const prefill = nameInput.defaultValue;
  const fileInput = form.querySelector("input[type=file]");
  let accepted = new DataTransfer();
  let resetTimer = null;

  const reset = () => {
    if (resetTimer) clearTimeout(resetTimer);
    resetTimer = null;
    form.reset();
    accepted = new DataTransfer();
    nameInput.value = prefill;
    form.hidden = false;
    thanks.hidden = true;
  };

  dialog.querySelectorAll("[data-dialog-close]").forEach((button) => {
    button.addEventListener("click", () => dialog.close());
  });
  dialog.addEventListener("close", reset);

  // a rejected file leaves the previous attachment selected
  fileInput.addEventListener("change", () => {
    const file = fileInput.files[0];
    if (file && file.size > MAX_ATTACHMENT_BYTES) {
      alert(TOO_LARGE);
      fileInput.files = accepted.files;
      return;
    }
    accepted = new DataTransfer();
    if (file) accepted.items.add(file);
  });

  form.addEventListener("submit", (event) => {
    event.preventDefault();
    form.hidden = true;
    thanks.hidden = false;
    resetTimer = setTimeout(() => dialog.close(), CONFIRM_MS);
  });
});

document.querySelectorAll("[data-share-path]").forEach((button) => {
  const label = button.querySelector(".label");
  const idle = label.textContent;
  let revertTimer = null;
  button.addEventListener("click", async () => {
    try {
      await navigator.clipboard.writeText(window.location.origin + button.dataset.sharePath);
      label.textContent = "Skopiowano!";
      if (revertTimer) clearTimeout(revertTimer);
      revertTimer = setTimeout(() => { label.textContent = idle; }, CONFIRM_MS);
    } catch (err) {
      console.error("Failed to copy URL:", err);
    }
  });
});
"#;

const STYLES: &str = r"
:root {
    --red: #dc2626;
    --red-dark: #b91c1c;
    --slate-50: #f8fafc;
    --slate-100: #f1f5f9;
    --slate-200: #e2e8f0;
    --slate-400: #94a3b8;
    --slate-500: #64748b;
    --slate-600: #475569;
    --slate-700: #334155;
    --slate-800: #1e293b;
    --slate-900: #0f172a;
    --green: #16a34a;
    --amber: #b45309;
}
* { box-sizing: border-box; }
body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--slate-50);
    color: var(--slate-900);
    line-height: 1.6;
}
a { color: inherit; }
.container { max-width: 1200px; margin: 0 auto; padding: 0 16px; }
.narrow { max-width: 800px; }
.site-header { background: #fff; border-bottom: 1px solid var(--slate-200); }
.header-row { display: flex; justify-content: space-between; align-items: center; height: 64px; }
.logo { font-weight: 700; font-size: 1.25rem; text-decoration: none; }
.logo span { color: var(--red); }
.main-nav a { margin-left: 24px; text-decoration: none; color: var(--slate-600); }
.breadcrumbs ol { list-style: none; display: flex; flex-wrap: wrap; gap: 8px; padding: 12px 0; margin: 0; font-size: 0.875rem; color: var(--slate-600); }
.breadcrumbs a { text-decoration: none; }
.breadcrumbs .muted { color: var(--slate-400); }
.breadcrumbs .current { color: var(--slate-900); font-weight: 500; }
.card { background: #fff; border-radius: 8px; box-shadow: 0 1px 2px rgba(0,0,0,0.05); padding: 32px; margin-bottom: 32px; }
.grid-2 { display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 32px; }
.grid-3 { display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 24px; }
.badge { display: inline-block; padding: 2px 8px; border-radius: 9999px; background: var(--slate-100); color: var(--slate-700); font-size: 0.75rem; margin: 0 4px 4px 0; }
.placeholder { color: var(--slate-500); font-style: italic; }
.disclaimer { background: #fffbeb; border: 1px solid #fde68a; color: var(--amber); border-radius: 8px; padding: 12px; font-size: 0.875rem; font-weight: 500; }
.muted-note { text-align: center; color: var(--slate-500); font-size: 0.875rem; }
.score-high { color: var(--green); }
.score-medium { color: #ca8a04; }
.score-low { color: var(--red); }
.score-bg-high { background: #f0fdf4; }
.score-bg-medium { background: #fefce8; }
.score-bg-low { background: #fef2f2; }
.score-box { text-align: center; padding: 24px; border-radius: 8px; }
.score-box .value { font-size: 2.25rem; font-weight: 700; }
.company-header { display: flex; flex-wrap: wrap; justify-content: space-between; gap: 24px; }
.company-identity { display: flex; gap: 24px; align-items: flex-start; }
.company-identity img { width: 80px; height: 80px; object-fit: contain; border-radius: 8px; background: var(--slate-50); }
.actions { display: flex; flex-wrap: wrap; gap: 8px; }
.button { display: inline-flex; align-items: center; gap: 8px; padding: 8px 16px; border-radius: 6px; border: 1px solid var(--slate-200); background: transparent; cursor: pointer; font: inherit; text-decoration: none; }
.button.primary { background: var(--red); border-color: var(--red); color: #fff; }
.button.primary:hover { background: var(--red-dark); }
.criterion { border: 1px solid var(--slate-200); border-radius: 8px; padding: 16px; }
.criterion-head { display: flex; justify-content: space-between; font-weight: 600; }
.progress { height: 8px; background: var(--slate-100); border-radius: 9999px; overflow: hidden; margin: 8px 0; }
.progress > div { height: 100%; background: var(--red); }
.company-list { list-style: none; padding: 0; margin: 0; }
.company-list li { background: #fff; border-radius: 8px; padding: 16px 24px; margin-bottom: 12px; display: flex; justify-content: space-between; align-items: center; gap: 16px; }
.company-list a { text-decoration: none; }
.timeline-item { display: flex; gap: 16px; margin-bottom: 24px; }
.timeline-item .date { width: 80px; text-align: right; color: var(--red); font-weight: 600; font-size: 0.875rem; flex-shrink: 0; }
.alternative { display: block; border: 1px solid var(--slate-200); border-radius: 8px; padding: 16px; text-decoration: none; }
.empty-state { text-align: center; }
dialog.report-dialog { border: none; border-radius: 8px; max-width: 520px; width: 100%; padding: 24px; }
dialog.report-dialog::backdrop { background: rgba(15, 23, 42, 0.5); }
.field { margin-bottom: 16px; }
.field label { display: block; font-size: 0.875rem; font-weight: 500; color: var(--slate-700); margin-bottom: 4px; }
.field input, .field textarea { width: 100%; padding: 8px; border: 1px solid var(--slate-200); border-radius: 6px; font: inherit; }
.hint { font-size: 0.75rem; color: var(--slate-500); }
.report-thanks { text-align: center; padding: 32px 0; }
.site-footer { background: var(--slate-900); color: #fff; padding: 64px 0; margin-top: 64px; }
.footer-columns { display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 32px; margin-bottom: 48px; }
.footer-columns ul { list-style: none; padding: 0; }
.footer-columns a, .social a { color: var(--slate-400); text-decoration: none; }
.social { display: flex; justify-content: center; gap: 24px; margin-bottom: 32px; }
.newsletter { background: var(--slate-800); border-radius: 8px; padding: 32px; text-align: center; margin-bottom: 32px; }
.newsletter-form { display: flex; gap: 12px; max-width: 420px; margin: 0 auto; }
.newsletter-form input { flex: 1; padding: 8px 16px; border-radius: 8px; border: 1px solid var(--slate-700); background: var(--slate-700); color: #fff; }
.newsletter-form button { padding: 8px 24px; border-radius: 8px; border: none; background: var(--red); color: #fff; font-weight: 500; }
.legal { border-top: 1px solid var(--slate-700); padding-top: 32px; text-align: center; color: var(--slate-400); font-size: 0.875rem; }
";
