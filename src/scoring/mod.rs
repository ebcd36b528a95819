//! Health Impact Scoring
//!
//! Combines the three domain analyzers into one graded report.
//!
//! # Scoring Formula
//!
//! ```text
//! Score = clamp(100
//!               - min(cap, heart_penalty)
//!               - min(cap, metabolic_penalty)
//!               - toxicity_penalty            (uncapped)
//!               - ultra_processed_penalty,    (NOVA 4 only)
//!         0, 100)
//! ```
//!
//! With the default configuration `cap = 40` and the NOVA-4 deduction is 20.
//!
//! # Grades
//!
//! - A: 80-100
//! - B: 60-79
//! - C: 40-59
//! - D: 0-39

mod health_scorer;

pub use health_scorer::{compute_health_impact, HealthScorer, ScoreBreakdown};
