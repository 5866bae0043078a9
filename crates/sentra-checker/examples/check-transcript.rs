//! Example: validate a sample transcript against the default rule set.

use sentra_checker::ComplianceChecker;
use sentra_rules::RuleSetLoader;

const TRANSCRIPT: &str = "\
Agent: Welcome to the patient line. This call may be recorded for quality and training purposes.\n\
Caller: Can you text my results for the HIV panel to 555-123-4567?\n\
Agent: I can arrange that right away.\n";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Falls back to the built-in rule set when no rules file exists.
    let loader = RuleSetLoader::with_default_path()?;
    println!("Loading rules from {}...\n", loader.path().display());
    let rules = loader.load()?;

    let checker = ComplianceChecker::new(rules);
    let result = checker.validate(TRANSCRIPT);

    println!("Compliant: {}\n", result.compliant);

    if !result.phi_findings.is_empty() {
        println!("PHI findings:");
        for finding in &result.phi_findings {
            println!(
                "  • [{}..{}] {:?} (rule: {})",
                finding.start, finding.end, finding.matched_text, finding.rule_reference
            );
        }
        println!();
    }

    if !result.missing_disclaimers.is_empty() {
        println!("Missing disclaimers:");
        for disclaimer in &result.missing_disclaimers {
            println!("  • {disclaimer}");
        }
        println!();
    }

    if !result.restricted_term_findings.is_empty() {
        println!("Restricted terms (non-gating):");
        for finding in &result.restricted_term_findings {
            println!(
                "  • {:?} — context: {:?}",
                finding.matched_text,
                finding.context.as_deref().unwrap_or("")
            );
        }
    }

    Ok(())
}
