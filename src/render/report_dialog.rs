//! Report dialog markup.

use super::escape::{escape_html, escape_html_attr};
use super::{RenderResult, SiteContext};
use crate::interaction::{FormMode, FormTexts, accept_attribute};
use std::fmt::Write;

/// Button that opens the dialog with `dialog_id`.
pub(crate) fn write_report_trigger(
    html: &mut String,
    dialog_id: &str,
    label: &str,
    primary: bool,
) -> RenderResult<()> {
    let class = if primary { "button primary" } else { "button" };
    writeln!(
        html,
        "<button type=\"button\" class=\"{class}\" data-dialog-open=\"{}\">{}</button>",
        escape_html_attr(dialog_id),
        escape_html(label)
    )?;
    Ok(())
}

/// The `<dialog>` element with the form and its thank-you panel.
pub(crate) fn write_report_dialog(
    html: &mut String,
    ctx: &SiteContext,
    dialog_id: &str,
    mode: &FormMode,
) -> RenderResult<()> {
    let texts = FormTexts::for_mode(mode);
    let id = escape_html_attr(dialog_id);
    let field = |name: &str| format!("{id}-{name}");

    writeln!(
        html,
        "<dialog id=\"{id}\" class=\"report-dialog\" aria-labelledby=\"{}\">",
        field("title")
    )?;
    writeln!(html, "  <h2 id=\"{}\">{}</h2>", field("title"), escape_html(&texts.title))?;
    writeln!(html, "  <form method=\"dialog\">")?;

    let name_input_state = match mode {
        FormMode::Brand => String::new(),
        FormMode::Company { name } => format!(" value=\"{}\" disabled", escape_html_attr(name)),
    };
    writeln!(html, "    <div class=\"field\">")?;
    writeln!(
        html,
        "      <label for=\"{}\">{}</label>",
        field("brandName"),
        escape_html(texts.name_label)
    )?;
    writeln!(
        html,
        "      <input id=\"{}\" name=\"brandName\" type=\"text\" placeholder=\"{}\" required{name_input_state}>",
        field("brandName"),
        escape_html_attr(&texts.name_placeholder)
    )?;
    writeln!(html, "    </div>")?;

    writeln!(html, "    <div class=\"field\">")?;
    writeln!(
        html,
        "      <label for=\"{}\">{}</label>",
        field("sourceLink"),
        escape_html(texts.source_label)
    )?;
    writeln!(
        html,
        "      <input id=\"{}\" name=\"sourceLink\" type=\"url\" placeholder=\"{}\" required>",
        field("sourceLink"),
        escape_html_attr(texts.source_placeholder)
    )?;
    writeln!(html, "    </div>")?;

    writeln!(html, "    <div class=\"field\">")?;
    writeln!(
        html,
        "      <label for=\"{}\">Załącznik (opcjonalnie)</label>",
        field("attachment")
    )?;
    writeln!(
        html,
        "      <input id=\"{}\" name=\"attachment\" type=\"file\" accept=\"{}\">",
        field("attachment"),
        accept_attribute()
    )?;
    writeln!(
        html,
        "      <p class=\"hint\">Obsługiwane formaty: PDF, DOC, DOCX, JPG, PNG, GIF, TXT, CSV, XLS, XLSX. Maksymalny rozmiar: {}MB</p>",
        ctx.max_attachment_mb
    )?;
    writeln!(html, "    </div>")?;

    writeln!(html, "    <div class=\"field\">")?;
    writeln!(
        html,
        "      <label for=\"{}\">{}</label>",
        field("comment"),
        escape_html(texts.comment_label)
    )?;
    writeln!(
        html,
        "      <textarea id=\"{}\" name=\"comment\" rows=\"3\" placeholder=\"{}\"></textarea>",
        field("comment"),
        escape_html_attr(texts.comment_placeholder)
    )?;
    writeln!(html, "    </div>")?;

    writeln!(html, "    <div class=\"field\">")?;
    writeln!(
        html,
        "      <label for=\"{}\">Twój email (opcjonalnie)</label>",
        field("email")
    )?;
    writeln!(
        html,
        "      <input id=\"{}\" name=\"email\" type=\"email\" placeholder=\"twoj@email.com\">",
        field("email")
    )?;
    writeln!(html, "      <p class=\"hint\">{}</p>", escape_html(texts.email_hint))?;
    writeln!(html, "    </div>")?;

    writeln!(
        html,
        "    <button type=\"submit\" class=\"button primary\">{}</button>",
        escape_html(texts.submit)
    )?;
    writeln!(
        html,
        "    <button type=\"button\" class=\"button\" data-dialog-close>Anuluj</button>"
    )?;
    writeln!(html, "  </form>")?;

    writeln!(html, "  <div class=\"report-thanks\" role=\"status\" hidden>")?;
    writeln!(html, "    <h3>{}</h3>", escape_html(texts.thanks_heading))?;
    writeln!(html, "    <p>{}</p>", escape_html(texts.thanks_body))?;
    writeln!(html, "  </div>")?;
    writeln!(html, "</dialog>")?;
    Ok(())
}
