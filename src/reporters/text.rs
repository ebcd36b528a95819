//! Text (terminal) reporter with colors and formatting

use super::Scored;
use crate::models::{EvidenceRisk, Grade, RiskLevel};
use anyhow::Result;

/// Grade colors (ANSI escape codes)
fn grade_color(grade: Grade) -> &'static str {
    match grade {
        Grade::A => "\x1b[32m", // Green
        Grade::B => "\x1b[92m", // Light green
        Grade::C => "\x1b[33m", // Yellow
        Grade::D => "\x1b[31m", // Red
    }
}

fn status_color(status: RiskLevel) -> &'static str {
    match status {
        RiskLevel::Low => "\x1b[32m",
        RiskLevel::Risk => "\x1b[33m",
        RiskLevel::HighRisk => "\x1b[91m",
        RiskLevel::Critical => "\x1b[31m",
    }
}

fn risk_tag(risk: EvidenceRisk) -> &'static str {
    match risk {
        EvidenceRisk::Critical => "\x1b[31m[C]",
        EvidenceRisk::High => "\x1b[91m[H]",
        EvidenceRisk::Moderate => "\x1b[33m[M]",
    }
}

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Render reports as formatted terminal output
pub fn render(items: &[Scored<'_>]) -> Result<String> {
    let mut out = String::new();
    for item in items {
        render_one(&mut out, item);
    }
    Ok(out)
}

fn render_one(out: &mut String, item: &Scored<'_>) {
    let report = item.report;
    let product = item.product;

    // Header
    let grade_c = grade_color(report.grade);
    out.push_str(&format!("\n{BOLD}{}{RESET}", product.display_name()));
    if let Some(brands) = product.brands.as_deref().filter(|b| !b.is_empty()) {
        out.push_str(&format!(" {DIM}({brands}){RESET}"));
    }
    out.push('\n');
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "Score: {BOLD}{}/100{RESET}  Grade: {grade_c}{BOLD}{}{RESET}",
        report.score, report.grade
    ));
    if let Some(nova) = product.nova_group {
        out.push_str(&format!("  NOVA: {nova}"));
    }
    out.push_str("\n\n");

    for (label, domain) in [
        ("HEART", &report.analysis.heart),
        ("METABOLIC", &report.analysis.metabolic),
    ] {
        let c = status_color(domain.status);
        out.push_str(&format!("{BOLD}{label}{RESET}  {c}{}{RESET}\n", domain.status));
        for reason in &domain.reasons {
            out.push_str(&format!("  - {reason}\n"));
        }
    }

    if !report.analysis.toxicity.is_empty() {
        out.push_str(&format!(
            "{BOLD}TOXICITY{RESET} ({} flagged)\n",
            report.analysis.toxicity.len()
        ));
        for finding in &report.analysis.toxicity {
            out.push_str(&format!(
                "  {}{RESET} {:<18} {DIM}{}{RESET}\n      {}\n",
                risk_tag(finding.risk),
                finding.name,
                finding.system,
                finding.claim
            ));
        }
    }

    if !report.citations.is_empty() {
        out.push_str(&format!("\n{DIM}Sources:{RESET}\n"));
        for cite in &report.citations {
            out.push_str(&format!("  {DIM}• {cite}{RESET}\n"));
        }
    }
}
