//! Per-domain health analyzers
//!
//! - `heart` - saturated fat, sodium, trans fat
//! - `metabolic` - sugar load, carbohydrate quality
//! - `toxicity` - ingredient tags against the evidence table
//!
//! Analyzers are pure functions of the product. They share no mutable state
//! and can run on any thread.

mod base;
mod heart;
mod metabolic;
mod toxicity;

pub use base::DomainAnalyzer;
pub use heart::{analyze_heart, effective_salt, HeartAnalyzer};
pub use metabolic::{analyze_metabolic, refined_flour_leads, sugar_teaspoons, MetabolicAnalyzer};
pub use toxicity::scan_toxicity;
