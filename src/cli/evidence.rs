//! Evidence command - list the curated evidence table

use crate::evidence::evidence_table;
use crate::models::ToxicityFinding;
use anyhow::Result;

/// Run the evidence command
pub fn run(json: bool) -> Result<()> {
    if json {
        let records: Vec<ToxicityFinding> =
            evidence_table().iter().map(ToxicityFinding::from).collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    for (i, record) in evidence_table().iter().enumerate() {
        println!(
            "{:>2}. {:<18} {:<9} {:<16} {}",
            i + 1,
            record.keyword,
            record.risk.as_str(),
            record.system,
            record.source
        );
    }
    Ok(())
}
