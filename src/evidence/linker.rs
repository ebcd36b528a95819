//! Citation linker: resolves raw ingredient tags to evidence records

use super::{evidence_table, EvidenceRecord};
use regex::Regex;
use std::sync::OnceLock;

static LANG_PREFIX: OnceLock<Regex> = OnceLock::new();

fn lang_prefix() -> &'static Regex {
    LANG_PREFIX.get_or_init(|| Regex::new(r"^[A-Za-z]{2}:").expect("valid regex"))
}

/// Normalize a raw tag: drop a leading `xx:` language prefix, turn hyphens
/// into spaces, lowercase.
///
/// `"en:refined-palm-oil"` becomes `"refined palm oil"`.
pub fn normalize_tag(raw: &str) -> String {
    lang_prefix()
        .replace(raw, "")
        .replace('-', " ")
        .to_lowercase()
}

/// Find the first evidence record whose keyword is contained in the tag.
///
/// Empty tags never match.
pub fn lookup(raw: &str) -> Option<&'static EvidenceRecord> {
    if raw.trim().is_empty() {
        return None;
    }
    let clean = normalize_tag(raw);
    evidence_table()
        .iter()
        .find(|record| clean.contains(record.keyword))
}
