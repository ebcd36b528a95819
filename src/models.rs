//! Core data models for SafeShelf
//!
//! These models carry a product from the input boundary through the
//! domain analyzers and out as a [`HealthReport`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Nutrient measurements the engine reads, all per 100g.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Nutrient {
    Sugars,
    Salt,
    Sodium,
    SaturatedFat,
    TransFat,
    Carbohydrates,
    Fiber,
}

impl Nutrient {
    pub const ALL: [Nutrient; 7] = [
        Nutrient::Sugars,
        Nutrient::Salt,
        Nutrient::Sodium,
        Nutrient::SaturatedFat,
        Nutrient::TransFat,
        Nutrient::Carbohydrates,
        Nutrient::Fiber,
    ];

    /// Wire key, as the product-lookup service names it
    pub fn key(&self) -> &'static str {
        match self {
            Nutrient::Sugars => "sugars_100g",
            Nutrient::Salt => "salt_100g",
            Nutrient::Sodium => "sodium_100g",
            Nutrient::SaturatedFat => "saturated-fat_100g",
            Nutrient::TransFat => "trans-fat_100g",
            Nutrient::Carbohydrates => "carbohydrates_100g",
            Nutrient::Fiber => "fiber_100g",
        }
    }
}

impl std::fmt::Display for Nutrient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Per-100g nutrient values. Absent means "not declared".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Nutriments {
    pub sugars: Option<f64>,
    pub salt: Option<f64>,
    pub sodium: Option<f64>,
    pub saturated_fat: Option<f64>,
    pub trans_fat: Option<f64>,
    pub carbohydrates: Option<f64>,
    pub fiber: Option<f64>,
}

impl Nutriments {
    pub fn get(&self, nutrient: Nutrient) -> Option<f64> {
        match nutrient {
            Nutrient::Sugars => self.sugars,
            Nutrient::Salt => self.salt,
            Nutrient::Sodium => self.sodium,
            Nutrient::SaturatedFat => self.saturated_fat,
            Nutrient::TransFat => self.trans_fat,
            Nutrient::Carbohydrates => self.carbohydrates,
            Nutrient::Fiber => self.fiber,
        }
    }

    /// Declared value, or 0 when the product does not report it
    pub fn amount(&self, nutrient: Nutrient) -> f64 {
        self.get(nutrient).unwrap_or(0.0)
    }

    pub fn set(&mut self, nutrient: Nutrient, value: f64) {
        let slot = match nutrient {
            Nutrient::Sugars => &mut self.sugars,
            Nutrient::Salt => &mut self.salt,
            Nutrient::Sodium => &mut self.sodium,
            Nutrient::SaturatedFat => &mut self.saturated_fat,
            Nutrient::TransFat => &mut self.trans_fat,
            Nutrient::Carbohydrates => &mut self.carbohydrates,
            Nutrient::Fiber => &mut self.fiber,
        };
        *slot = Some(value);
    }

    /// Builder-style setter
    pub fn with(mut self, nutrient: Nutrient, value: f64) -> Self {
        self.set(nutrient, value);
        self
    }
}

/// A food product as handed over by the lookup collaborator
///
/// Deserializing goes through [`product_from_value`](crate::input::product_from_value),
/// so serde and `Product::from_json` apply the same shape checks.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub struct Product {
    pub code: Option<String>,
    pub product_name: Option<String>,
    pub brands: Option<String>,
    pub image_url: Option<String>,
    pub nutriments: Nutriments,
    pub ingredients_text: String,
    pub ingredients_tags: Vec<String>,
    /// NOVA processing group, 1 (unprocessed) to 4 (ultra-processed)
    pub nova_group: Option<u8>,
}

impl Product {
    pub fn is_ultra_processed(&self) -> bool {
        self.nova_group == Some(4)
    }

    /// Name to show in reports
    pub fn display_name(&self) -> &str {
        self.product_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or("Unnamed product")
    }
}

/// Severity of a curated evidence record
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum EvidenceRisk {
    Moderate,
    High,
    Critical,
}

impl EvidenceRisk {
    /// Score deduction for one matched ingredient at this risk
    pub fn penalty(&self) -> u32 {
        match self {
            EvidenceRisk::Critical => 40,
            EvidenceRisk::High => 20,
            EvidenceRisk::Moderate => 10,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EvidenceRisk::Moderate => "Moderate",
            EvidenceRisk::High => "High",
            EvidenceRisk::Critical => "Critical",
        }
    }
}

impl std::fmt::Display for EvidenceRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered severity of one health domain.
///
/// Levels only ever move up: merging two levels keeps the higher one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum RiskLevel {
    #[default]
    Low,
    Risk,
    #[serde(rename = "High Risk")]
    HighRisk,
    Critical,
}

impl RiskLevel {
    /// Raise to at least `floor`
    pub fn raise_to(self, floor: RiskLevel) -> RiskLevel {
        self.max(floor)
    }

    /// Step up for a repeated moderate hit: to `Risk`, or `HighRisk` when
    /// the domain is already at `Risk`.
    pub fn escalate(self) -> RiskLevel {
        let proposed = if self == RiskLevel::Risk {
            RiskLevel::HighRisk
        } else {
            RiskLevel::Risk
        };
        self.raise_to(proposed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Risk => "Risk",
            RiskLevel::HighRisk => "High Risk",
            RiskLevel::Critical => "Critical",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one heart or metabolic analyzer run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DomainAnalysis {
    pub status: RiskLevel,
    /// Human-readable flags, in rule order
    pub reasons: Vec<String>,
    /// Uncapped penalty; capping happens at aggregation
    pub penalty: u32,
    pub citations: BTreeSet<String>,
}

impl DomainAnalysis {
    /// Record a fired rule
    pub fn flag(&mut self, reason: impl Into<String>, penalty: u32, citation: &str) {
        self.reasons.push(reason.into());
        self.penalty += penalty;
        self.citations.insert(citation.to_string());
    }

    pub fn is_clean(&self) -> bool {
        self.reasons.is_empty()
    }
}

/// One ingredient tag matched against the evidence table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToxicityFinding {
    /// Matched keyword, uppercased
    pub name: String,
    pub risk: EvidenceRisk,
    pub system: String,
    pub claim: String,
    pub source: String,
}

/// Accumulated result of the toxicity scan
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToxicityReport {
    pub findings: Vec<ToxicityFinding>,
    pub penalty: u32,
    pub citations: BTreeSet<String>,
}

/// Status and reasons for one domain as reported to the caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainStatus {
    pub status: RiskLevel,
    pub reasons: Vec<String>,
}

impl From<&DomainAnalysis> for DomainStatus {
    fn from(analysis: &DomainAnalysis) -> Self {
        Self {
            status: analysis.status,
            reasons: analysis.reasons.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub heart: DomainStatus,
    pub metabolic: DomainStatus,
    pub toxicity: Vec<ToxicityFinding>,
}

/// Letter grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
}

impl Grade {
    pub fn from_score(score: u8) -> Grade {
        match score {
            s if s < 40 => Grade::D,
            s if s < 60 => Grade::C,
            s if s < 80 => Grade::B,
            _ => Grade::A,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final health report for one product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    /// 0-100, higher is healthier
    pub score: u8,
    pub grade: Grade,
    pub analysis: Analysis,
    /// Deduplicated sources backing every flag and finding
    pub citations: BTreeSet<String>,
}
