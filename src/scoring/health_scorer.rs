//! Health impact aggregator
//!
//! Runs the heart, metabolic and toxicity analyzers over one product, caps
//! and sums their penalties, and assembles the [`HealthReport`].

use crate::analyzers::{scan_toxicity, DomainAnalyzer, HeartAnalyzer, MetabolicAnalyzer};
use crate::config::ScoringConfig;
use crate::models::{Analysis, DomainStatus, Grade, HealthReport, Product};
use std::collections::BTreeSet;
use tracing::{debug, info};

const MAX_SCORE: i64 = 100;

/// Penalty accounting behind a report
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    /// Heart penalty before the domain cap
    pub heart_penalty: u32,
    /// Heart penalty actually deducted
    pub heart_applied: u32,
    pub metabolic_penalty: u32,
    pub metabolic_applied: u32,
    /// Toxicity penalty, deducted in full
    pub toxicity_penalty: u32,
    /// Processing-level deduction (0 unless NOVA 4)
    pub processing_penalty: u32,
    /// Score before clamping into 0-100
    pub unclamped_score: i64,
    pub report: HealthReport,
}

/// Product health scorer
pub struct HealthScorer<'a> {
    config: &'a ScoringConfig,
    heart: HeartAnalyzer,
    metabolic: MetabolicAnalyzer,
}

impl<'a> HealthScorer<'a> {
    pub fn new(config: &'a ScoringConfig) -> Self {
        Self {
            config,
            heart: HeartAnalyzer,
            metabolic: MetabolicAnalyzer,
        }
    }

    /// Score a product, returning the report with its penalty breakdown
    pub fn calculate(&self, product: &Product) -> ScoreBreakdown {
        let heart = self.heart.analyze(product);
        let metabolic = self.metabolic.analyze(product);
        let toxicity = scan_toxicity(&product.ingredients_tags);

        let cap = self.config.domain_penalty_cap;
        let heart_applied = heart.penalty.min(cap);
        let metabolic_applied = metabolic.penalty.min(cap);
        let processing_penalty = if product.is_ultra_processed() {
            self.config.ultra_processed_penalty
        } else {
            0
        };

        debug!(
            "Penalties: {}={} (applied {}), {}={} (applied {}), toxicity={}, processing={}",
            self.heart.name(),
            heart.penalty,
            heart_applied,
            self.metabolic.name(),
            metabolic.penalty,
            metabolic_applied,
            toxicity.penalty,
            processing_penalty
        );

        let unclamped_score = MAX_SCORE
            - i64::from(heart_applied)
            - i64::from(metabolic_applied)
            - i64::from(toxicity.penalty)
            - i64::from(processing_penalty);
        let score = unclamped_score.clamp(0, MAX_SCORE) as u8;
        let grade = Grade::from_score(score);

        let citations: BTreeSet<String> = heart
            .citations
            .iter()
            .chain(&metabolic.citations)
            .chain(&toxicity.citations)
            .cloned()
            .collect();

        info!(
            "Health score for {}: {} ({}) - Heart: {}, Metabolic: {}, Toxicity findings: {}",
            product.display_name(),
            score,
            grade,
            heart.status,
            metabolic.status,
            toxicity.findings.len()
        );

        let report = HealthReport {
            score,
            grade,
            analysis: Analysis {
                heart: DomainStatus::from(&heart),
                metabolic: DomainStatus::from(&metabolic),
                toxicity: toxicity.findings,
            },
            citations,
        };

        ScoreBreakdown {
            heart_penalty: heart.penalty,
            heart_applied,
            metabolic_penalty: metabolic.penalty,
            metabolic_applied,
            toxicity_penalty: toxicity.penalty,
            processing_penalty,
            unclamped_score,
            report,
        }
    }

    /// Score a product
    pub fn score(&self, product: &Product) -> HealthReport {
        self.calculate(product).report
    }

    /// Generate human-readable explanation of the score
    pub fn explain(&self, breakdown: &ScoreBreakdown) -> String {
        let mut lines = Vec::new();
        let report = &breakdown.report;

        lines.push(format!("# Health Score: {} ({})\n", report.score, report.grade));

        lines.push("## Scoring Formula\n".to_string());
        lines.push("```".to_string());
        lines.push(format!(
            "Score = 100 - min({cap}, heart) - min({cap}, metabolic) - toxicity - processing",
            cap = self.config.domain_penalty_cap
        ));
        lines.push("```\n".to_string());

        lines.push("## Deductions\n".to_string());
        lines.push(format_capped(
            &self.heart,
            breakdown.heart_penalty,
            breakdown.heart_applied,
        ));
        lines.push(format_capped(
            &self.metabolic,
            breakdown.metabolic_penalty,
            breakdown.metabolic_applied,
        ));
        lines.push(format!(
            "- **Toxicity**: -{} ({} findings, uncapped)",
            breakdown.toxicity_penalty,
            report.analysis.toxicity.len()
        ));
        lines.push(format!("- **Processing**: -{}", breakdown.processing_penalty));
        lines.push(String::new());

        if breakdown.unclamped_score < 0 {
            lines.push(format!(
                "Raw total {} clamped to 0.",
                breakdown.unclamped_score
            ));
        }

        lines.join("\n")
    }
}

fn format_capped(analyzer: &dyn DomainAnalyzer, raw: u32, applied: u32) -> String {
    let label = format!("**{}** ({})", analyzer.name(), analyzer.description());
    if raw > applied {
        format!("- {}: -{} (raw {}, capped)", label, applied, raw)
    } else {
        format!("- {}: -{}", label, applied)
    }
}

/// Score a product with the reference configuration
pub fn compute_health_impact(product: &Product) -> HealthReport {
    HealthScorer::new(&ScoringConfig::default()).score(product)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Nutrient, Nutriments, RiskLevel};

    fn product(nutriments: Nutriments) -> Product {
        Product {
            nutriments,
            ..Default::default()
        }
    }

    #[test]
    fn test_clean_product_scores_full() {
        let report = compute_health_impact(&Product::default());
        assert_eq!(report.score, 100);
        assert_eq!(report.grade, Grade::A);
        assert!(report.citations.is_empty());
        assert!(report.analysis.toxicity.is_empty());
        assert_eq!(report.analysis.heart.status, RiskLevel::Low);
    }

    #[test]
    fn test_domain_penalty_is_capped() {
        let n = Nutriments::default()
            .with(Nutrient::SaturatedFat, 10.0)
            .with(Nutrient::Salt, 3.0)
            .with(Nutrient::TransFat, 1.0);
        let config = ScoringConfig::default();
        let breakdown = HealthScorer::new(&config).calculate(&product(n));
        assert_eq!(breakdown.heart_penalty, 80);
        assert_eq!(breakdown.heart_applied, 40);
        assert_eq!(breakdown.report.score, 60);
        assert_eq!(breakdown.report.grade, Grade::B);
    }

    #[test]
    fn test_score_clamps_at_zero() {
        let mut p = product(
            Nutriments::default()
                .with(Nutrient::TransFat, 2.0)
                .with(Nutrient::Sugars, 40.0),
        );
        p.ingredients_tags = vec![
            "en:potassium-bromate".into(),
            "en:hydrogenated-oil".into(),
            "en:palm-oil".into(),
        ];
        p.nova_group = Some(4);
        let config = ScoringConfig::default();
        let breakdown = HealthScorer::new(&config).calculate(&p);
        assert_eq!(breakdown.unclamped_score, 100 - 40 - 40 - 100 - 20);
        assert_eq!(breakdown.report.score, 0);
        assert_eq!(breakdown.report.grade, Grade::D);
    }

    #[test]
    fn test_citations_dedup_across_domains() {
        let mut p = Product::default();
        p.ingredients_text = "partially hydrogenated vegetable oil".into();
        p.ingredients_tags = vec!["en:partially-hydrogenated-vegetable-oil".into()];
        let report = compute_health_impact(&p);
        assert_eq!(report.citations.len(), 1);
        assert!(report.citations.contains("WHO REPLACE Action Package (2018)"));
        assert_eq!(report.score, 20);
    }

    #[test]
    fn test_custom_config() {
        let config = ScoringConfig {
            domain_penalty_cap: 20,
            ultra_processed_penalty: 5,
        };
        let mut p = product(Nutriments::default().with(Nutrient::Sugars, 30.0));
        p.nova_group = Some(4);
        let report = HealthScorer::new(&config).score(&p);
        assert_eq!(report.score, 100 - 20 - 5);
    }

    #[test]
    fn test_nova_other_groups_not_penalized() {
        for group in 1..=3 {
            let p = Product {
                nova_group: Some(group),
                ..Default::default()
            };
            assert_eq!(compute_health_impact(&p).score, 100);
        }
    }

    #[test]
    fn test_explain_mentions_cap() {
        let n = Nutriments::default()
            .with(Nutrient::SaturatedFat, 10.0)
            .with(Nutrient::TransFat, 1.0);
        let config = ScoringConfig::default();
        let scorer = HealthScorer::new(&config);
        let breakdown = scorer.calculate(&product(n));
        let text = scorer.explain(&breakdown);
        assert!(text.contains("# Health Score: 60 (B)"));
        assert!(text.contains("raw 60, capped"));
        assert!(text.contains("- **heart** (Saturated fat, sodium and trans fat): -40 (raw 60, capped)"));
        assert!(text.contains("- **metabolic** (Sugar load and carbohydrate quality): -0"));
    }
}
