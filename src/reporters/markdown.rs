//! Markdown reporter for GitHub-flavored Markdown output

use super::Scored;
use crate::models::{DomainStatus, Grade};
use anyhow::Result;

/// Render reports as GitHub-flavored Markdown
pub fn render(items: &[Scored<'_>]) -> Result<String> {
    let sections: Vec<String> = items.iter().map(render_one).collect();
    Ok(sections.join("\n---\n\n"))
}

fn grade_badge(grade: Grade) -> &'static str {
    match grade {
        Grade::A => "🟢",
        Grade::B => "🟡",
        Grade::C => "🟠",
        Grade::D => "🔴",
    }
}

fn render_one(item: &Scored<'_>) -> String {
    let report = item.report;
    let mut md = format!(
        "# {} {}\n\n**Grade: {}** | **Score: {}/100**\n\n",
        grade_badge(report.grade),
        item.product.display_name(),
        report.grade,
        report.score
    );

    md.push_str("## Domains\n\n| Domain | Status | Reasons |\n|--------|--------|---------|\n");
    md.push_str(&domain_row("Heart", &report.analysis.heart));
    md.push_str(&domain_row("Metabolic", &report.analysis.metabolic));
    md.push('\n');

    if !report.analysis.toxicity.is_empty() {
        md.push_str("## Toxicity\n\n| Ingredient | Risk | System | Claim |\n|------------|------|--------|-------|\n");
        for f in &report.analysis.toxicity {
            md.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                f.name,
                f.risk,
                escape_cell(&f.system),
                escape_cell(&f.claim)
            ));
        }
        md.push('\n');
    }

    if !report.citations.is_empty() {
        md.push_str("## Citations\n\n");
        for cite in &report.citations {
            md.push_str(&format!("- {cite}\n"));
        }
    }

    md
}

fn domain_row(name: &str, domain: &DomainStatus) -> String {
    let reasons = if domain.reasons.is_empty() {
        "-".to_string()
    } else {
        domain
            .reasons
            .iter()
            .map(|r| escape_cell(r))
            .collect::<Vec<_>>()
            .join("<br>")
    };
    format!("| {} | {} | {} |\n", name, domain.status, reasons)
}

fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_product;

    #[test]
    fn test_markdown_tables() {
        let (product, report) = test_product();
        let md = render(&[Scored { product: &product, report: &report }]).unwrap();
        assert!(md.starts_with("# 🔴 Hazelnut Spread"));
        assert!(md.contains("| Heart | Risk |"));
        assert!(md.contains("| Metabolic | Critical |"));
        assert!(md.contains("| PALM | High |"));
        assert!(md.contains("## Citations"));
    }

    #[test]
    fn test_escape_pipes() {
        assert_eq!(escape_cell("a|b"), "a\\|b");
    }
}
