use anyhow::Result;
use sentinel_config::{Config, OutputFormat};
use sentinel_core::{RiskLevel, ScanResult};
use sentinel_engine::Scanner;
use sentinel_sources::{Input, SourceHandlerRegistry};
use serde::Serialize;

use crate::cli::ScanArgs;
use crate::commands::build_registry;

/// One scanned source, as printed with --json
#[derive(Serialize)]
struct ScanReport<'a> {
    source: &'a str,
    content_hash: &'a str,
    #[serde(flatten)]
    result: &'a ScanResult,
}

pub async fn handle(args: ScanArgs, config: &Config) -> Result<()> {
    let registry = build_registry(config, &args.patterns, !args.no_project)?;
    let inputs = SourceHandlerRegistry::new().load_all(&args.sources).await?;

    let texts = inputs.iter().map(|input| input.content.clone()).collect();
    let results = Scanner::new().scan_batch(texts, registry).await?;

    let json = args.json || config.output.format == OutputFormat::Json;
    let show_values = args.show_values || config.output.show_values;

    if json {
        print_json(&inputs, &results)?;
    } else {
        for (input, result) in inputs.iter().zip(&results) {
            print!("{}", render_text(input, result, show_values));
        }
    }

    if let Some(threshold) = args.fail_on
        && let Some(worst) = highest_risk(&results)
        && worst >= threshold
    {
        anyhow::bail!("Risk level {} reached threshold {}", worst, threshold);
    }

    Ok(())
}

fn print_json(inputs: &[Input], results: &[ScanResult]) -> Result<()> {
    let reports: Vec<ScanReport> = inputs
        .iter()
        .zip(results)
        .map(|(input, result)| ScanReport {
            source: &input.label,
            content_hash: &input.content_hash,
            result,
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&reports)?);
    Ok(())
}

fn render_text(input: &Input, result: &ScanResult, show_values: bool) -> String {
    let mut out = String::new();

    out.push_str(&format!("{} (risk: {})\n", input.label, result.risk_level));
    out.push_str(&result.redacted_text);
    if !result.redacted_text.ends_with('\n') {
        out.push('\n');
    }

    if result.detections.is_empty() {
        out.push_str("  No PII detected.\n");
    } else {
        let summary: Vec<String> = result
            .counts_by_kind()
            .into_iter()
            .map(|(kind, count)| format!("{} {}", kind, count))
            .collect();
        out.push_str(&format!(
            "\n  Detections ({}): {}\n",
            result.detections.len(),
            summary.join(", ")
        ));
        for detection in &result.detections {
            out.push_str(&format!(
                "    {:<12} {}..{}",
                detection.kind, detection.start, detection.end
            ));
            if show_values {
                out.push_str(&format!("  {}", detection.value));
            }
            out.push('\n');
        }
    }

    for skipped in &result.skipped_rules {
        out.push_str(&format!(
            "  ⚠ Skipped pattern {}: {}\n",
            skipped.name, skipped.reason
        ));
    }

    out.push('\n');
    out
}

fn highest_risk(results: &[ScanResult]) -> Option<RiskLevel> {
    results.iter().map(|r| r.risk_level).max()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(text: &str) -> (Input, ScanResult) {
        let input = Input::new("text", text.to_string());
        let result = Scanner::new().scan(text, Vec::<(String, String)>::new());
        (input, result)
    }

    #[test]
    fn test_render_hides_values_by_default() {
        let (input, result) = scan("PAN ABCDE1234F");
        let out = render_text(&input, &result, false);

        assert!(out.starts_with("text (risk: High)\nPAN **********\n"));
        assert!(out.contains("PAN"));
        assert!(out.contains("4..14"));
        assert!(!out.contains("ABCDE1234F"));

        let out = render_text(&input, &result, true);
        assert!(out.contains("ABCDE1234F"));
    }

    #[test]
    fn test_render_clean_text() {
        let (input, result) = scan("all clear");
        let out = render_text(&input, &result, false);

        assert!(out.contains("(risk: None)"));
        assert!(out.contains("No PII detected."));
    }

    #[test]
    fn test_highest_risk() {
        let (_, clean) = scan("all clear");
        let (_, pan) = scan("ABCDE1234F");

        assert_eq!(highest_risk(&[]), None);
        assert_eq!(highest_risk(&[clean.clone()]), Some(RiskLevel::None));
        assert_eq!(highest_risk(&[clean, pan]), Some(RiskLevel::High));
    }

    #[test]
    fn test_json_report_shape() {
        let (input, result) = scan("mail a@b.io");
        let report = ScanReport {
            source: &input.label,
            content_hash: &input.content_hash,
            result: &result,
        };
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["source"], "text");
        assert_eq!(json["risk_level"], "Low");
        assert_eq!(json["detections"][0]["type"], "EMAIL");
    }
}
