//! Mandatory disclaimer verification.

use sentra_rules::ComplianceRuleSet;

/// Check required disclaimers, returning the ones that are missing.
///
/// Each disclaimer must appear verbatim in the text, modulo case. There is
/// no partial or fuzzy matching. Rule-set order is preserved in the output.
#[must_use]
pub fn check(text: &str, rules: &ComplianceRuleSet) -> Vec<String> {
    let text_lower = text.to_lowercase();

    rules
        .required_disclaimers()
        .iter()
        .filter(|disclaimer| !text_lower.contains(&disclaimer.to_lowercase()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules_with_disclaimers(disclaimers: &[&str]) -> ComplianceRuleSet {
        ComplianceRuleSet::new(
            vec![],
            disclaimers.iter().map(ToString::to_string).collect(),
            vec![],
        )
        .expect("valid rule set")
    }

    #[test]
    fn test_present_disclaimer_not_reported() {
        let rules = rules_with_disclaimers(&["This call may be recorded"]);
        let missing = check("Please note: this call may be RECORDED today.", &rules);
        assert!(missing.is_empty());
    }

    #[test]
    fn test_absent_disclaimer_reported() {
        let rules = rules_with_disclaimers(&["This call may be recorded"]);
        let missing = check("Welcome to the clinic line.", &rules);
        assert_eq!(missing, ["This call may be recorded"]);
    }

    #[test]
    fn test_missing_disclaimers_preserve_rule_order() {
        let rules = rules_with_disclaimers(&["First notice", "Second notice", "Third notice"]);
        let missing = check("Only the second notice appears here.", &rules);
        assert_eq!(missing, ["First notice", "Third notice"]);
    }

    #[test]
    fn test_partial_text_does_not_satisfy() {
        let rules = rules_with_disclaimers(&["This call may be recorded for training"]);
        // A prefix of the disclaimer is not enough.
        let missing = check("This call may be recorded.", &rules);
        assert_eq!(missing.len(), 1);
    }
}
