//! SafeShelf - nutritional risk scoring engine
//!
//! Evaluates one food product's nutrients, ingredient text and ingredient
//! tags against a fixed rule set and a curated evidence table, and emits a
//! deterministic [`HealthReport`](models::HealthReport): a 0-100 score, a
//! letter grade, per-domain findings and citations.
//!
//! ```
//! use safeshelf::models::{Nutrient, Nutriments, Product};
//! use safeshelf::compute_health_impact;
//!
//! let product = Product {
//!     nutriments: Nutriments::default().with(Nutrient::SaturatedFat, 6.0),
//!     ..Default::default()
//! };
//! let report = compute_health_impact(&product);
//! assert_eq!(report.score, 80);
//! assert_eq!(report.grade.as_str(), "A");
//! ```
//!
//! The engine performs no I/O and keeps no state between calls, so reports
//! may be computed from any number of threads at once.

pub mod analyzers;
pub mod cli;
pub mod config;
pub mod evidence;
pub mod input;
pub mod models;
pub mod reporters;
pub mod scoring;

pub use analyzers::{analyze_heart, analyze_metabolic, scan_toxicity};
pub use evidence::lookup;
pub use input::{parse_products, InputError};
pub use scoring::{compute_health_impact, HealthScorer, ScoreBreakdown};
