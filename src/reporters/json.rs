//! JSON reporter
//!
//! Emits the health report payload: `score`, `grade`, `analysis`
//! (`heart`, `metabolic`, `toxicity`) and `citations`. A single report is an
//! object; a batch is an array.

use super::Scored;
use crate::models::HealthReport;
use anyhow::Result;
use serde::Serialize;

/// Report wrapped with the product metadata it was computed for, the
/// shape the lookup handler returns to clients.
#[derive(Debug, Serialize)]
struct EmbeddedReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    product_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    brands: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    nova_group: Option<u8>,
    health_report: &'a HealthReport,
}

impl<'a> From<&Scored<'a>> for EmbeddedReport<'a> {
    fn from(item: &Scored<'a>) -> Self {
        let product = item.product;
        Self {
            code: product.code.as_deref(),
            product_name: product.product_name.as_deref(),
            brands: product.brands.as_deref(),
            image_url: product.image_url.as_deref(),
            nova_group: product.nova_group,
            health_report: item.report,
        }
    }
}

fn one_or_many<T: Serialize>(items: Vec<T>, pretty: bool) -> Result<String> {
    let out = match (items.len(), pretty) {
        (1, true) => serde_json::to_string_pretty(&items[0])?,
        (1, false) => serde_json::to_string(&items[0])?,
        (_, true) => serde_json::to_string_pretty(&items)?,
        (_, false) => serde_json::to_string(&items)?,
    };
    Ok(out)
}

/// Render the report payloads, pretty-printed or on a single line
pub fn render(items: &[Scored<'_>], pretty: bool) -> Result<String> {
    one_or_many(items.iter().map(|i| i.report).collect(), pretty)
}

/// Render reports embedded under `health_report` with product metadata
pub fn render_embedded(items: &[Scored<'_>], pretty: bool) -> Result<String> {
    one_or_many(items.iter().map(EmbeddedReport::from).collect(), pretty)
}
