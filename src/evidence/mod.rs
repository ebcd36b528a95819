//! Curated scientific evidence for ingredient risks
//!
//! The table is compiled into the binary and never mutated. Lookups scan it
//! in declaration order and stop at the first keyword contained in the
//! ingredient, so the order below is part of the contract: `hydrogenated`
//! precedes `palm` so that "hydrogenated palm oil" binds to the trans-fat
//! record. The curated source lists `palm` first; do not restore that order.
//!
//! Matching is substring containment, not token matching. A keyword such as
//! `bha` also matches inside longer words; that is a known limitation of the
//! heuristic and reference outputs depend on it.

mod linker;

pub use linker::{lookup, normalize_tag};

use crate::models::EvidenceRisk;

/// A single curated fact linking an ingredient keyword to a risk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvidenceRecord {
    /// Lowercase, hyphen-free fragment matched against normalized tags
    pub keyword: &'static str,
    pub risk: EvidenceRisk,
    /// Affected physiological system
    pub system: &'static str,
    pub claim: &'static str,
    pub source: &'static str,
}

static EVIDENCE_TABLE: [EvidenceRecord; 12] = [
    EvidenceRecord {
        keyword: "hydrogenated",
        risk: EvidenceRisk::Critical,
        system: "Cardiovascular",
        claim: "Primary source of Trans Fats. No safe limit exists.",
        source: "WHO REPLACE Action Package (2018)",
    },
    EvidenceRecord {
        keyword: "palm",
        risk: EvidenceRisk::High,
        system: "Cardiovascular",
        claim: "High palmitic acid raises LDL cholesterol and inflammation markers.",
        source: "Sun et al., 2015 (American Heart Association Journal)",
    },
    EvidenceRecord {
        keyword: "bromate",
        risk: EvidenceRisk::Critical,
        system: "Carcinogenic",
        claim: "Classified as Group 2B Carcinogen (Possibly carcinogenic to humans).",
        source: "IARC Monographs Vol 73 / FSSAI Ban",
    },
    EvidenceRecord {
        keyword: "benzoate",
        risk: EvidenceRisk::Moderate,
        system: "Cellular Health",
        claim: "Can form Benzene (Class 1 Carcinogen) in presence of Vitamin C.",
        source: "FDA Data on Benzene in Soft Drinks",
    },
    EvidenceRecord {
        keyword: "carrageenan",
        risk: EvidenceRisk::Moderate,
        system: "Gut Health",
        claim: "Linked to intestinal inflammation and glucose intolerance.",
        source: "Environmental Health Perspectives (2017)",
    },
    EvidenceRecord {
        keyword: "high fructose",
        risk: EvidenceRisk::High,
        system: "Metabolic",
        claim: "Direct liver metabolism leads to Non-Alcoholic Fatty Liver Disease (NAFLD).",
        source: "Journal of Hepatology",
    },
    EvidenceRecord {
        keyword: "propyl paraben",
        risk: EvidenceRisk::High,
        system: "Endocrine",
        claim: "Potential endocrine disruptor affecting reproductive health.",
        source: "EU Scientific Committee on Consumer Safety",
    },
    EvidenceRecord {
        keyword: "bha",
        risk: EvidenceRisk::High,
        system: "Carcinogenic",
        claim: "Reasonably anticipated to be a human carcinogen.",
        source: "National Toxicology Program (NTP)",
    },
    EvidenceRecord {
        keyword: "bht",
        risk: EvidenceRisk::Moderate,
        system: "Carcinogenic",
        claim: "Linked to tumor promotion in animal studies.",
        source: "IARC Monographs Vol 17",
    },
    EvidenceRecord {
        keyword: "titanium dioxide",
        risk: EvidenceRisk::High,
        system: "Genotoxic",
        claim: "No longer considered safe as food additive due to genotoxicity concerns.",
        source: "EFSA Assessment 2021",
    },
    EvidenceRecord {
        keyword: "aspartame",
        risk: EvidenceRisk::Moderate,
        system: "Carcinogenic",
        claim: "Classified as possibly carcinogenic to humans (Group 2B).",
        source: "IARC / WHO JECFA (2023)",
    },
    EvidenceRecord {
        keyword: "nitrite",
        risk: EvidenceRisk::High,
        system: "Carcinogenic",
        claim: "Can form carcinogenic nitrosamines in the body.",
        source: "IARC Monographs Vol 94",
    },
];

/// The evidence table, in lookup order
pub fn evidence_table() -> &'static [EvidenceRecord] {
    &EVIDENCE_TABLE
}
