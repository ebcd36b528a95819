//! Heart-health analyzer
//!
//! Rules are evaluated independently and their penalties add up:
//!
//! | Rule              | Threshold               | Penalty | Level                  |
//! |-------------------|-------------------------|---------|------------------------|
//! | Saturated fat     | > 5 g/100g              | 20      | at least Risk          |
//! | Sodium            | salt > 1.5 g/100g       | 20      | Risk, or High Risk     |
//! | Trans fat         | declared > 0, or hidden | 40      | Critical               |
//!
//! Salt falls back to `sodium × 2.5` when the product does not declare it.

use super::base::{round_tenths, DomainAnalyzer};
use crate::models::{DomainAnalysis, Nutrient, Nutriments, Product, RiskLevel};
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

const SATURATED_FAT_LIMIT: f64 = 5.0;
const SALT_LIMIT: f64 = 1.5;
const SODIUM_TO_SALT: f64 = 2.5;

pub const SATURATED_FAT_CITATION: &str = "WHO Saturated Fatty Acid and Trans-Fatty Acid Intake Guideline (2023)";
pub const SODIUM_CITATION: &str = "WHO Guideline: Sodium Intake for Adults and Children (2012)";
pub const TRANS_FAT_CITATION: &str = "WHO REPLACE Action Package (2018)";

static HIDDEN_TRANS_FAT: OnceLock<Regex> = OnceLock::new();

fn hidden_trans_fat() -> &'static Regex {
    HIDDEN_TRANS_FAT.get_or_init(|| {
        Regex::new(r"(?i)hydrogenated|partially hydrogenated|vanaspati|margerine|shortening")
            .expect("valid regex")
    })
}

/// Effective salt per 100g: declared salt, else derived from sodium
pub fn effective_salt(nutrients: &Nutriments) -> f64 {
    nutrients
        .get(Nutrient::Salt)
        .unwrap_or_else(|| nutrients.amount(Nutrient::Sodium) * SODIUM_TO_SALT)
}

/// Evaluate cardiovascular risk from fats and sodium
pub fn analyze_heart(nutrients: &Nutriments, ingredients_text: &str) -> DomainAnalysis {
    let mut result = DomainAnalysis::default();

    let saturated_fat = nutrients.amount(Nutrient::SaturatedFat);
    if saturated_fat > SATURATED_FAT_LIMIT {
        debug!("heart: saturated fat {:.1}g over limit", saturated_fat);
        result.flag(
            format!("High Saturated Fat: {:.1}g per 100g", round_tenths(saturated_fat)),
            20,
            SATURATED_FAT_CITATION,
        );
        result.status = result.status.raise_to(RiskLevel::Risk);
    }

    let salt = effective_salt(nutrients);
    if salt > SALT_LIMIT {
        debug!("heart: salt {:.2}g over limit", salt);
        result.flag(
            format!("High Sodium: {:.1}g salt per 100g", round_tenths(salt)),
            20,
            SODIUM_CITATION,
        );
        result.status = result.status.escalate();
    }

    let declared_trans = nutrients.get(Nutrient::TransFat).filter(|v| *v > 0.0);
    let trans_reason = match declared_trans {
        Some(grams) => Some(format!(
            "Trans Fat Declared: {:.1}g per 100g",
            round_tenths(grams)
        )),
        None if hidden_trans_fat().is_match(ingredients_text) => {
            Some("Hidden Trans Fat: Hydrogenated Oils".to_string())
        }
        None => None,
    };
    if let Some(reason) = trans_reason {
        debug!("heart: {}", reason);
        result.flag(reason, 40, TRANS_FAT_CITATION);
        result.status = RiskLevel::Critical;
    }

    result
}

/// Heart-health [`DomainAnalyzer`]
#[derive(Debug, Clone, Copy, Default)]
pub struct HeartAnalyzer;

impl DomainAnalyzer for HeartAnalyzer {
    fn name(&self) -> &'static str {
        "heart"
    }

    fn description(&self) -> &'static str {
        "Saturated fat, sodium and trans fat"
    }

    fn analyze(&self, product: &Product) -> DomainAnalysis {
        analyze_heart(&product.nutriments, &product.ingredients_text)
    }
}
