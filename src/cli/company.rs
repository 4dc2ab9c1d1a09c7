//! Company command handler.
//!
//! Implements the `company` subcommand: profile summary, breakdown and
//! Polish alternatives of one company.

use super::OutputOptions;
use crate::config::AppConfig;
use crate::interaction::{Host, ShareButton, SystemClock, SystemHost, share_url};
use crate::model::{Breakdown, CompanyDetail, CompanySummary};
use crate::pipeline::{OutputFormat, exit_codes, load_repository, write_output};
use crate::repository::CompanyRepository;
use crate::scoring::{ScoreBand, effective_breakdown, rank_alternatives};
use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CompanyReport<'a> {
    #[serde(flatten)]
    detail: &'a CompanyDetail,
    category_name: &'a str,
    effective_breakdown: Breakdown,
    breakdown_derived: bool,
    band: ScoreBand,
    alternatives: Vec<&'a CompanySummary>,
    share_url: String,
}

/// Run the company command
pub fn run_company(
    config: &AppConfig,
    id: &str,
    output: &OutputOptions,
    copy_link: bool,
) -> Result<i32> {
    let repo = load_repository(config)?;
    let Some(detail) = repo.get_company(id) else {
        eprintln!("Nie znaleziono firmy: {id}");
        return Ok(exit_codes::NOT_FOUND);
    };

    let slug = detail.summary.category_slug.as_str();
    let category_name = repo.category_name(slug);
    let breakdown = effective_breakdown(detail);
    let alternatives = rank_alternatives(&repo, slug, detail.id());

    let mut host = SystemHost::new(config.site.origin.clone());
    let url = share_url(&host, detail.id());

    let content = match output.format {
        OutputFormat::Json => {
            let report = CompanyReport {
                detail,
                category_name,
                effective_breakdown: breakdown,
                breakdown_derived: detail.breakdown.is_none(),
                band: ScoreBand::of(detail.score()),
                alternatives: alternatives.clone(),
                share_url: url.clone(),
            };
            serde_json::to_string_pretty(&report).context("failed to serialize company")?
        }
        OutputFormat::Text => {
            output
                .reporter()
                .company(detail, category_name, &breakdown, &alternatives)
        }
    };
    write_output(&content, &output.target)?;

    if copy_link {
        copy_share_link(&mut host, url, config);
    }
    Ok(exit_codes::SUCCESS)
}

fn copy_share_link(host: &mut dyn Host, url: String, config: &AppConfig) {
    let mut button = ShareButton::new(SystemClock, url, config.interaction.confirmation());
    let copied = button.click(host);
    eprintln!("{}: {}", button.label(), button.url());
    if !copied {
        eprintln!("Nie udało się skopiować linku do schowka.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::OutputTarget;

    fn json_to(path: &std::path::Path) -> OutputOptions {
        OutputOptions {
            format: OutputFormat::Json,
            target: OutputTarget::File(path.to_path_buf()),
            no_color: true,
        }
    }

    #[test]
    fn test_unknown_company_exits_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let code = run_company(
            &AppConfig::default(),
            "nie-ma-takiej-firmy",
            &json_to(&dir.path().join("out.json")),
            false,
        )
        .unwrap();
        assert_eq!(code, exit_codes::NOT_FOUND);
    }

    #[test]
    fn test_company_json_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let repo = load_repository(&AppConfig::default()).unwrap();
        let id = repo.companies()[0].id().to_string();

        let code = run_company(&AppConfig::default(), &id, &json_to(&path), false).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["id"], id.as_str());
        assert!(value["effectiveBreakdown"]["capital"].is_u64());
        assert_eq!(value["shareUrl"], format!("/firma/{id}"));
    }
}
