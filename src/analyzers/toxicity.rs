//! Toxicity scanner: runs every ingredient tag through the citation linker

use crate::evidence::{lookup, EvidenceRecord};
use crate::models::{ToxicityFinding, ToxicityReport};
use tracing::debug;

impl From<&EvidenceRecord> for ToxicityFinding {
    fn from(record: &EvidenceRecord) -> Self {
        Self {
            name: record.keyword.to_uppercase(),
            risk: record.risk,
            system: record.system.to_string(),
            claim: record.claim.to_string(),
            source: record.source.to_string(),
        }
    }
}

/// Scan ingredient tags for curated risks.
///
/// Every matching tag yields one finding and adds its risk penalty. The sum
/// is not capped. Tags that match nothing are ignored.
pub fn scan_toxicity<S: AsRef<str>>(tags: &[S]) -> ToxicityReport {
    let mut report = ToxicityReport::default();

    for tag in tags {
        let Some(record) = lookup(tag.as_ref()) else {
            continue;
        };
        debug!(
            "toxicity: tag '{}' matched '{}' ({})",
            tag.as_ref(),
            record.keyword,
            record.risk
        );
        report.penalty += record.risk.penalty();
        report.citations.insert(record.source.to_string());
        report.findings.push(ToxicityFinding::from(record));
    }

    report
}
