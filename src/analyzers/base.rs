//! Base analyzer trait
//!
//! Each health domain (heart, metabolic) is evaluated by an independent
//! analyzer over the same product. Analyzers hold no state between calls.

use crate::models::{DomainAnalysis, Product};

/// Round to one decimal place, halves away from zero.
///
/// Reason strings format through this so 31.25 reads "31.3" rather than
/// the "31.2" that `{:.1}` would print.
pub fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Trait for per-domain nutritional analyzers
///
/// # Example Implementation
///
/// ```ignore
/// pub struct SodiumOnly;
///
/// impl DomainAnalyzer for SodiumOnly {
///     fn name(&self) -> &'static str { "sodium-only" }
///     fn description(&self) -> &'static str { "Flags salty products" }
///     fn analyze(&self, product: &Product) -> DomainAnalysis {
///         DomainAnalysis::default()
///     }
/// }
/// ```
pub trait DomainAnalyzer: Send + Sync {
    /// Unique identifier for this analyzer
    fn name(&self) -> &'static str;

    /// Human-readable description of what this analyzer evaluates
    fn description(&self) -> &'static str;

    /// Evaluate the product. Missing data is never an error; absent
    /// nutrients count as 0.
    fn analyze(&self, product: &Product) -> DomainAnalysis;
}
