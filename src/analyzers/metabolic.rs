//! Metabolic-health analyzer
//!
//! Sugar load is graded in two bands (> 10 g and > 22.5 g per 100g).
//! Carbohydrate quality uses the carb-to-fiber ratio when fiber is declared,
//! otherwise a text heuristic on the ingredient list: refined flour listed
//! ahead of (or without) any whole grain counts as refined.

use super::base::{round_tenths, DomainAnalyzer};
use crate::models::{DomainAnalysis, Nutrient, Nutriments, Product, RiskLevel};
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

const EXTREME_SUGAR_LIMIT: f64 = 22.5;
const HIGH_SUGAR_LIMIT: f64 = 10.0;
const CARB_FIBER_RATIO_LIMIT: f64 = 10.0;
const GRAMS_PER_TEASPOON: f64 = 4.0;

pub const SUGAR_CITATION: &str = "WHO Guideline: Sugars Intake for Adults and Children (2015)";
pub const CARB_QUALITY_CITATION: &str = "Reynolds et al., 2019 (The Lancet): Carbohydrate Quality and Human Health";

static REFINED_FLOUR: OnceLock<Regex> = OnceLock::new();
static WHOLE_GRAIN: OnceLock<Regex> = OnceLock::new();

fn refined_flour() -> &'static Regex {
    REFINED_FLOUR
        .get_or_init(|| Regex::new(r"maida|refined wheat flour|white flour").expect("valid regex"))
}

fn whole_grain() -> &'static Regex {
    WHOLE_GRAIN.get_or_init(|| Regex::new(r"whole wheat|whole grain").expect("valid regex"))
}

/// Sugar grams as teaspoons, rounded to one decimal
pub fn sugar_teaspoons(grams: f64) -> f64 {
    round_tenths(grams / GRAMS_PER_TEASPOON)
}

/// Whether refined flour is the leading grain in the ingredient text
pub fn refined_flour_leads(ingredients_text: &str) -> bool {
    let text = ingredients_text.to_lowercase();
    let Some(refined) = refined_flour().find(&text) else {
        return false;
    };
    match whole_grain().find(&text) {
        Some(whole) => refined.start() < whole.start(),
        None => true,
    }
}

/// Evaluate sugar load and carbohydrate quality
pub fn analyze_metabolic(nutrients: &Nutriments, ingredients_text: &str) -> DomainAnalysis {
    let mut result = DomainAnalysis::default();

    let sugar = nutrients.amount(Nutrient::Sugars);
    let teaspoons = sugar_teaspoons(sugar);
    if sugar > EXTREME_SUGAR_LIMIT {
        debug!("metabolic: extreme sugar {:.1}g", sugar);
        result.flag(
            format!("Extreme Sugar Load: {:.1} tsp per 100g", teaspoons),
            40,
            SUGAR_CITATION,
        );
        result.status = RiskLevel::Critical;
    } else if sugar > HIGH_SUGAR_LIMIT {
        debug!("metabolic: high sugar {:.1}g", sugar);
        result.flag(
            format!("High Sugar: {:.1} tsp per 100g", teaspoons),
            20,
            SUGAR_CITATION,
        );
        result.status = result.status.escalate();
    }

    let refined_reason = match nutrients.get(Nutrient::Fiber).filter(|f| *f > 0.0) {
        Some(fiber) => {
            let ratio = nutrients.amount(Nutrient::Carbohydrates) / fiber;
            (ratio > CARB_FIBER_RATIO_LIMIT)
                .then(|| {
                    format!(
                        "Refined Carb Overload: {:.1}:1 carb-to-fiber ratio",
                        round_tenths(ratio)
                    )
                })
        }
        None => refined_flour_leads(ingredients_text)
            .then(|| "Main Ingredient: Refined Flour".to_string()),
    };
    if let Some(reason) = refined_reason {
        debug!("metabolic: {}", reason);
        result.flag(reason, 20, CARB_QUALITY_CITATION);
        result.status = result.status.raise_to(RiskLevel::HighRisk);
    }

    result
}

/// Metabolic-health [`DomainAnalyzer`]
#[derive(Debug, Clone, Copy, Default)]
pub struct MetabolicAnalyzer;

impl DomainAnalyzer for MetabolicAnalyzer {
    fn name(&self) -> &'static str {
        "metabolic"
    }

    fn description(&self) -> &'static str {
        "Sugar load and carbohydrate quality"
    }

    fn analyze(&self, product: &Product) -> DomainAnalysis {
        analyze_metabolic(&product.nutriments, &product.ingredients_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with(nutrient: Nutrient, value: f64) -> Nutriments {
        Nutriments::default().with(nutrient, value)
    }

    #[test]
    fn test_carb_ratio_rounds_half_up() {
        let n = with(Nutrient::Carbohydrates, 62.5).with(Nutrient::Fiber, 2.0);
        let result = analyze_metabolic(&n, "");
        assert_eq!(
            result.reasons,
            vec!["Refined Carb Overload: 31.3:1 carb-to-fiber ratio"]
        );
    }

    #[test]
    fn test_teaspoons_rounding() {
        assert_eq!(sugar_teaspoons(25.0), 6.3);
        assert_eq!(sugar_teaspoons(12.0), 3.0);
        assert_eq!(sugar_teaspoons(0.0), 0.0);
    }

    #[test]
    fn test_extreme_sugar_is_critical() {
        let result = analyze_metabolic(&with(Nutrient::Sugars, 25.0), "");
        assert_eq!(result.status, RiskLevel::Critical);
        assert_eq!(result.penalty, 40);
        assert_eq!(result.reasons, vec!["Extreme Sugar Load: 6.3 tsp per 100g".to_string()]);
        assert!(result.citations.contains(SUGAR_CITATION));
    }

    #[test]
    fn test_high_sugar_band() {
        let result = analyze_metabolic(&with(Nutrient::Sugars, 12.0), "");
        assert_eq!(result.status, RiskLevel::Risk);
        assert_eq!(result.penalty, 20);
        assert!(result.reasons[0].starts_with("High Sugar"));
    }

    #[test]
    fn test_sugar_bands_are_exclusive() {
        assert!(analyze_metabolic(&with(Nutrient::Sugars, 10.0), "").is_clean());
        let at_limit = analyze_metabolic(&with(Nutrient::Sugars, 22.5), "");
        assert_eq!(at_limit.status, RiskLevel::Risk);
        assert_eq!(at_limit.penalty, 20);
    }

    #[test]
    fn test_carb_fiber_ratio() {
        let n = with(Nutrient::Carbohydrates, 60.0).with(Nutrient::Fiber, 2.0);
        let result = analyze_metabolic(&n, "");
        assert_eq!(result.status, RiskLevel::HighRisk);
        assert_eq!(result.penalty, 20);
        assert_eq!(
            result.reasons,
            vec!["Refined Carb Overload: 30.0:1 carb-to-fiber ratio".to_string()]
        );
    }

    #[test]
    fn test_good_ratio_is_clean_even_with_refined_text() {
        let n = with(Nutrient::Carbohydrates, 50.0).with(Nutrient::Fiber, 10.0);
        assert!(analyze_metabolic(&n, "maida, sugar").is_clean());
    }

    #[test]
    fn test_refined_flour_heuristic_without_fiber() {
        let result = analyze_metabolic(&Nutriments::default(), "Refined Wheat Flour (Maida), Sugar");
        assert_eq!(result.status, RiskLevel::HighRisk);
        assert_eq!(result.reasons, vec!["Main Ingredient: Refined Flour".to_string()]);
    }

    #[test]
    fn test_zero_fiber_takes_text_branch() {
        let n = with(Nutrient::Carbohydrates, 70.0).with(Nutrient::Fiber, 0.0);
        assert!(analyze_metabolic(&n, "oats").is_clean());
        assert_eq!(analyze_metabolic(&n, "white flour").penalty, 20);
    }

    #[test]
    fn test_refined_flour_order() {
        assert!(refined_flour_leads("maida, whole wheat flour"));
        assert!(!refined_flour_leads("whole wheat flour, maida"));
        assert!(!refined_flour_leads("Whole Grain Oats, White Flour"));
        assert!(!refined_flour_leads("whole grain oats"));
        assert!(!refined_flour_leads(""));
    }

    #[test]
    fn test_extreme_sugar_stays_critical_with_refined_carbs() {
        let result = analyze_metabolic(&with(Nutrient::Sugars, 30.0), "maida");
        assert_eq!(result.status, RiskLevel::Critical);
        assert_eq!(result.penalty, 60);
        assert_eq!(result.citations.len(), 2);
    }

    #[test]
    fn test_high_sugar_and_refined_carbs_is_high_risk() {
        let result = analyze_metabolic(&with(Nutrient::Sugars, 15.0), "white flour");
        assert_eq!(result.status, RiskLevel::HighRisk);
        assert_eq!(result.penalty, 40);
    }
}
