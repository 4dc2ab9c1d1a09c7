//! Validate command handler.
//!
//! Implements the `validate` subcommand: configuration checks followed by
//! consistency checks over the loaded data documents.

use super::OutputOptions;
use crate::config::{AppConfig, Validatable};
use crate::pipeline::{OutputFormat, exit_codes, load_repository, write_output};
use crate::repository::validate_repository;
use anyhow::{Context, Result};

/// Run the validate command
pub fn run_validate(config: &AppConfig, output: &OutputOptions) -> Result<i32> {
    let config_errors = config.validate();
    for error in &config_errors {
        tracing::warn!("Configuration: {}", error);
    }

    let repo = load_repository(config)?;
    let issues = validate_repository(&repo);

    let content = match output.format {
        OutputFormat::Json => {
            let report = serde_json::json!({
                "config": config_errors
                    .iter()
                    .map(|e| serde_json::json!({"field": e.field, "message": e.message}))
                    .collect::<Vec<_>>(),
                "data": issues
                    .iter()
                    .map(|i| serde_json::json!({"subject": i.subject, "message": i.to_string()}))
                    .collect::<Vec<_>>(),
            });
            serde_json::to_string_pretty(&report).context("failed to serialize validation report")?
        }
        OutputFormat::Text => {
            let reporter = output.reporter();
            let mut lines: Vec<String> = config_errors
                .iter()
                .map(|e| format!("Konfiguracja: {e}"))
                .collect();
            lines.push(reporter.issues(&issues));
            lines.join("\n")
        }
    };
    write_output(&content, &output.target)?;

    if config_errors.is_empty() && issues.is_empty() {
        Ok(exit_codes::SUCCESS)
    } else {
        Ok(exit_codes::VALIDATION_ISSUES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::OutputTarget;
    use std::fs;

    fn json_output(dir: &tempfile::TempDir) -> (OutputOptions, std::path::PathBuf) {
        let path = dir.path().join("report.json");
        let output = OutputOptions {
            format: OutputFormat::Json,
            target: OutputTarget::File(path.clone()),
            no_color: true,
        };
        (output, path)
    }

    #[test]
    fn test_bundled_data_is_clean() {
        let dir = tempfile::tempdir().unwrap();
        let (output, path) = json_output(&dir);
        let code = run_validate(&AppConfig::default(), &output).unwrap();

        let report = fs::read_to_string(path).unwrap();
        assert_eq!(code, exit_codes::SUCCESS, "{report}");
    }

    #[test]
    fn test_broken_data_reports_issues() {
        let dir = tempfile::tempdir().unwrap();
        let categories = dir.path().join("categories.json");
        let companies = dir.path().join("companies.json");
        fs::write(
            &categories,
            r#"{"budowlane": {"name": "Budowlane", "items": [
                {"id": "a", "brand": "A", "company": "A SA", "score": 120}
            ]}}"#,
        )
        .unwrap();
        fs::write(
            &companies,
            r#"[{"id": "a", "brand": "A", "company": "A SA", "score": 120,
                 "breakdown": {"capital": 50}, "lastVerified": "wczoraj"}]"#,
        )
        .unwrap();

        let config = AppConfig::builder()
            .categories_file(&categories)
            .companies_file(&companies)
            .build();
        let (output, path) = json_output(&dir);
        let code = run_validate(&config, &output).unwrap();
        assert_eq!(code, exit_codes::VALIDATION_ISSUES);

        let report: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        let messages: Vec<&str> = report["data"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|i| i["message"].as_str())
            .collect();
        assert!(messages.iter().any(|m| m.contains("score 120")));
        assert!(messages.iter().any(|m| m.contains("wczoraj")));
    }
}
