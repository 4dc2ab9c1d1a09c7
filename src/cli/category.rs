//! Category command handler.

use super::OutputOptions;
use crate::config::AppConfig;
use crate::pipeline::{OutputFormat, exit_codes, load_repository, write_output};
use crate::render::category_page_meta;
use crate::repository::CompanyRepository;
use anyhow::{Context, Result};

/// Run the category command
pub fn run_category(config: &AppConfig, slug: &str, output: &OutputOptions) -> Result<i32> {
    let repo = load_repository(config)?;
    let Some(category) = repo.get_category(slug) else {
        if category_page_meta(slug).is_some() {
            tracing::debug!("'{}' is a known page without data", slug);
        }
        eprintln!("Kategoria nie została znaleziona: {slug}");
        return Ok(exit_codes::NOT_FOUND);
    };

    let content = match output.format {
        OutputFormat::Json => {
            let mut value =
                serde_json::to_value(category).context("failed to serialize category")?;
            if let Some(map) = value.as_object_mut() {
                map.insert("slug".to_string(), category.slug.clone().into());
            }
            serde_json::to_string_pretty(&value).context("failed to serialize category")?
        }
        OutputFormat::Text => output.reporter().category(category),
    };
    write_output(&content, &output.target)?;
    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::OutputTarget;

    #[test]
    fn test_category_json_includes_slug() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("category.json");
        let output = OutputOptions {
            format: OutputFormat::Json,
            target: OutputTarget::File(path.clone()),
            no_color: true,
        };

        let code = run_category(&AppConfig::default(), "budowlane", &output).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(value["slug"], "budowlane");
        assert!(value["items"].is_array());
    }

    #[test]
    fn test_unknown_category() {
        let output = OutputOptions::stdout(OutputFormat::Text);
        let code = run_category(&AppConfig::default(), "moda", &output).unwrap();
        assert_eq!(code, exit_codes::NOT_FOUND);
    }
}
