//! Output reporters for SafeShelf health reports
//!
//! Supports multiple output formats:
//! - `text` - Terminal output with colors
//! - `json` - The report payload, optionally embedded with product metadata
//! - `markdown` - GitHub-flavored Markdown

mod json;
mod markdown;
mod text;

use crate::models::{HealthReport, Product};
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// A product paired with its report, as handed to reporters
#[derive(Debug, Clone, Copy)]
pub struct Scored<'a> {
    pub product: &'a Product,
    pub report: &'a HealthReport,
}

/// JSON layout switches. Text and Markdown ignore them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonOptions {
    /// Wrap each report under `health_report` next to the product's metadata
    pub embed: bool,
    /// Single-line output instead of pretty-printed
    pub compact: bool,
}

/// Render reports using an OutputFormat enum
pub fn report_with_format(
    items: &[Scored<'_>],
    format: OutputFormat,
    json_options: JsonOptions,
) -> Result<String> {
    let pretty = !json_options.compact;
    match format {
        OutputFormat::Text => text::render(items),
        OutputFormat::Json if json_options.embed => json::render_embedded(items, pretty),
        OutputFormat::Json => json::render(items, pretty),
        OutputFormat::Markdown => markdown::render(items),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{Nutrient, Nutriments};
    use crate::scoring::compute_health_impact;

    /// A product that trips every domain, with its report
    pub(crate) fn test_product() -> (Product, HealthReport) {
        let product = Product {
            code: Some("3017620422003".into()),
            product_name: Some("Hazelnut Spread".into()),
            brands: Some("Acme".into()),
            nutriments: Nutriments::default()
                .with(Nutrient::Sugars, 56.3)
                .with(Nutrient::SaturatedFat, 10.6)
                .with(Nutrient::Salt, 0.107),
            ingredients_text: "Sugar, palm oil, hazelnuts".into(),
            ingredients_tags: vec!["en:sugar".into(), "en:palm-oil".into()],
            nova_group: Some(4),
            ..Default::default()
        };
        let report = compute_health_impact(&product);
        (product, report)
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(
            OutputFormat::from_str("md").unwrap(),
            OutputFormat::Markdown
        );
        assert!(OutputFormat::from_str("sarif").is_err());
    }

    #[test]
    fn test_compact_json_is_single_line() {
        let (product, report) = test_product();
        let items = [Scored { product: &product, report: &report }];
        let compact = JsonOptions { compact: true, ..Default::default() };
        let out = report_with_format(&items, OutputFormat::Json, compact).unwrap();
        assert!(!out.contains('\n'));

        let embedded = JsonOptions { embed: true, compact: true };
        let out = report_with_format(&items, OutputFormat::Json, embedded).unwrap();
        assert!(!out.contains('\n'));
        assert!(out.contains("\"health_report\":"));

        let pretty = report_with_format(&items, OutputFormat::Json, JsonOptions::default()).unwrap();
        assert!(pretty.contains('\n'));
    }

    #[test]
    fn test_fixture_report() {
        let (_, report) = test_product();
        // 100 - 20 (fat) - 40 (sugar) - 20 (palm) - 20 (nova)
        assert_eq!(report.score, 0);
    }
}
