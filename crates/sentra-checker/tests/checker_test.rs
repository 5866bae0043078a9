//! End-to-end tests: rule file loading through verdict aggregation.

use sentra_checker::{ComplianceChecker, FindingKind};
use sentra_rules::RuleSetLoader;
use tempfile::TempDir;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

const RULES_TOML: &str = r#"
phi_patterns = ['\b\d{3}-\d{3}-\d{4}\b', '\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b']
required_disclaimers = [
    "This call may be recorded for quality and training purposes",
    "This information is not a substitute for professional medical advice",
]
restricted_terms = ["HIV", "substance abuse"]
"#;

const TRANSCRIPT: &str = "\
Agent: Thank you for calling. This call may be recorded for quality and training purposes.\n\
Caller: I need my HIV test results sent to jane.doe@example.org.\n\
Agent: Of course. Our nurse line is 555-123-4567 if anything changes.\n";

#[test]
fn test_transcript_validation_end_to_end() {
    init_logging();

    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("rules.toml");
    std::fs::write(&path, RULES_TOML).expect("write rule file");

    let checker = ComplianceChecker::from_rules_file(&path).expect("load checker");
    let result = checker.validate(TRANSCRIPT);

    // Phone and email both leak.
    assert_eq!(result.phi_findings.len(), 2);
    assert!(result
        .phi_findings
        .iter()
        .any(|f| f.matched_text == "555-123-4567"));
    assert!(result
        .phi_findings
        .iter()
        .any(|f| f.matched_text == "jane.doe@example.org"));

    // The medical-advice disclaimer never appears.
    assert_eq!(
        result.missing_disclaimers,
        ["This information is not a substitute for professional medical advice"]
    );

    // One restricted term, with context, not gating.
    assert_eq!(result.restricted_term_findings.len(), 1);
    let term = &result.restricted_term_findings[0];
    assert_eq!(term.kind, FindingKind::RestrictedTerm);
    assert_eq!(term.rule_reference, "HIV");
    assert!(term.context.as_deref().expect("context present").contains("HIV"));

    assert!(!result.compliant);

    // Findings reference the exact offsets of the scanned text.
    for finding in result.phi_findings.iter().chain(&result.restricted_term_findings) {
        assert_eq!(&TRANSCRIPT[finding.start..finding.end], finding.matched_text);
    }
}

#[test]
fn test_missing_rule_file_still_validates() {
    init_logging();

    let dir = TempDir::new().expect("create temp dir");
    let loader = RuleSetLoader::new(dir.path().join("absent.toml"));
    let rules = loader.load().expect("fallback to builtin");

    let checker = ComplianceChecker::new(rules);
    let result = checker.validate("SSN on file: 123-45-6789");

    assert!(result
        .phi_findings
        .iter()
        .any(|f| f.matched_text == "123-45-6789"));
    assert!(!result.compliant);
}

#[test]
fn test_verdict_serializes_for_reporting() {
    let checker = ComplianceChecker::with_builtin_rules();
    let result = checker.validate_with_evidence("patient has HIV diagnosis", || {
        Ok::<_, String>("screens/case-7/final.png".to_string())
    });

    let json = serde_json::to_value(&result).expect("serialize verdict");
    assert_eq!(json["evidence_ref"], "screens/case-7/final.png");
    assert_eq!(json["restricted_term_findings"][0]["rule_reference"], "HIV");
    assert_eq!(json["restricted_term_findings"][0]["kind"], "restricted_term");
}
