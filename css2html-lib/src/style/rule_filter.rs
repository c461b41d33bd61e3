use crate::style::owned_css::{OwnedRule, RuleKind};

/// Selector fragments that have no element-tree meaning: pseudo-classes and
/// pseudo-elements, the universal selector, and every combinator but the
/// descendant one.
pub const UNSUPPORTED_SELECTOR_TOKENS: &[&str] = &[":", "*", "+", ">", "||", "~", "|"];

/// Keep only style rules whose first selector can become an element.
/// Order is preserved; dropped rules are not errors.
pub fn filter_rules(rules: Vec<OwnedRule>) -> Vec<OwnedRule> {
    rules.into_iter().filter(is_supported).collect()
}

pub fn is_supported(rule: &OwnedRule) -> bool {
    if rule.kind != RuleKind::Style {
        log::debug!("dropping non-style rule {:?}", rule.kind);
        return false;
    }
    match rule.selector() {
        Some(selector) if contains_unsupported_selector(selector) => {
            log::debug!("dropping rule with unsupported selector `{}`", selector);
            false
        }
        Some(_) => true,
        None => false,
    }
}

fn contains_unsupported_selector(selector: &str) -> bool {
    UNSUPPORTED_SELECTOR_TOKENS
        .iter()
        .any(|token| selector.contains(token))
}
