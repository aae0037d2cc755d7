use crate::core::preview::EventPreview;
use crate::utils::error::{Result, SplitError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const OUTPUT_FORMATS: [&str; 4] = ["text", "json", "csv", "tsv"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
    Tsv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Tsv => "tsv",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = SplitError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            other => Err(SplitError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: other.to_string(),
                reason: format!("Valid formats: {}", OUTPUT_FORMATS.join(", ")),
            }),
        }
    }
}

pub fn render(preview: &EventPreview, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(preview)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(preview)?),
        OutputFormat::Csv => render_delimited(preview, b','),
        OutputFormat::Tsv => render_delimited(preview, b'\t'),
    }
}

fn render_text(preview: &EventPreview) -> String {
    let display = &preview.display;
    let mut lines = Vec::new();

    if !preview.input.title.is_empty() {
        lines.push(preview.input.title.clone());
    }
    if !preview.input.description.is_empty() {
        lines.push(preview.input.description.clone());
    }
    if !display.held_at.is_empty() {
        lines.push(format!("Held at: {}", display.held_at));
    }

    lines.push(format!(
        "Total: {} ({} people)",
        display.total_amount, preview.summary.total_people
    ));
    for tier in &display.tiers {
        lines.push(format!(
            "  Tier {} x {}: {} each ({})",
            tier.tier, tier.count, tier.amount, tier.subtotal
        ));
    }
    lines.push(format!(
        "Collected: {} (drift {})",
        display.collected, display.drift
    ));

    lines.join("\n")
}

/// 只輸出數值欄位，方便試算表直接匯入
fn render_delimited(preview: &EventPreview, delimiter: u8) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer.write_record(["tier", "count", "amount", "subtotal"])?;
    for allocation in &preview.summary.allocations {
        writer.write_record([
            allocation.tier.to_string(),
            allocation.count.to_string(),
            allocation.amount.to_string(),
            allocation.subtotal().to_string(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| SplitError::RenderError {
        message: e.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|e| SplitError::RenderError {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::preview::PreviewEngine;
    use crate::domain::model::{EventFormInput, TierConfig};

    fn sample_preview() -> EventPreview {
        PreviewEngine::default().preview_input(EventFormInput {
            title: "Team dinner".to_string(),
            description: String::new(),
            total_amount: 1000,
            tier_count: 1,
            held_at: None,
            tiers: vec![TierConfig::new(1, 3)],
        })
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(" tsv ".parse::<OutputFormat>().unwrap(), OutputFormat::Tsv);
        assert!("xml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Csv.to_string(), "csv");
    }

    #[test]
    fn test_render_text() {
        let text = render(&sample_preview(), OutputFormat::Text).unwrap();
        assert!(text.starts_with("Team dinner\n"));
        assert!(text.contains("Total: 1,000円 (3 people)"));
        assert!(text.contains("Tier 1 x 3: 333円 each (999円)"));
        assert!(text.contains("Collected: 999円 (drift -1円)"));
        assert!(!text.contains("Held at"));
    }

    #[test]
    fn test_render_csv_and_tsv() {
        let csv = render(&sample_preview(), OutputFormat::Csv).unwrap();
        assert_eq!(csv, "tier,count,amount,subtotal\n1,3,333,999\n");

        let tsv = render(&sample_preview(), OutputFormat::Tsv).unwrap();
        assert_eq!(tsv, "tier\tcount\tamount\tsubtotal\n1\t3\t333\t999\n");
    }

    #[test]
    fn test_render_json() {
        let json = render(&sample_preview(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["input"]["totalAmount"], 1000);
        assert_eq!(value["summary"]["drift"], -1);
        assert_eq!(value["display"]["tiers"][0]["amount"], "333円");
    }
}
