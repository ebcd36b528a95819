//! Lookup command - resolve raw ingredient tags through the citation linker

use crate::evidence::{lookup, normalize_tag};
use crate::models::ToxicityFinding;
use anyhow::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct LookupResult<'a> {
    tag: &'a str,
    normalized: String,
    #[serde(rename = "match")]
    matched: Option<ToxicityFinding>,
}

/// Run the lookup command
pub fn run(tags: &[String], json: bool) -> Result<()> {
    let results: Vec<LookupResult<'_>> = tags
        .iter()
        .map(|tag| LookupResult {
            tag: tag.as_str(),
            normalized: normalize_tag(tag),
            matched: lookup(tag).map(ToxicityFinding::from),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for result in &results {
        match &result.matched {
            Some(finding) => println!(
                "{} -> {} [{}] {}: {} ({})",
                result.tag, finding.name, finding.risk, finding.system, finding.claim, finding.source
            ),
            None => println!("{} -> no match (\"{}\")", result.tag, result.normalized),
        }
    }
    Ok(())
}
