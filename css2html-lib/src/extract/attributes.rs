//! Attributes declared through custom properties.
//!
//! * `--attr-<name>: value` renders `<name>="value"` (bare `<name>` when empty)
//! * `--data-<name>: value` renders `data-<name>="value"`
//! * `--attrs: "a="1" b"` inserts the text between the outer quotes verbatim

use crate::style::owned_css::OwnedRule;

const QUOTES: &[char] = &['"', '\'', '`'];

/// Remove one layer of matching surrounding quotes, if there is one.
pub fn strip_quotes(value: &str) -> &str {
    let mut chars = value.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) if first == last && QUOTES.contains(&first) => {
            &value[first.len_utf8()..value.len() - last.len_utf8()]
        }
        _ => value,
    }
}

/// Render a single declaration, or None when the property is not an attribute one.
pub fn render_attribute(property: &str, value: &str) -> Option<String> {
    if property == "--attrs" {
        return Some(strip_quotes(value).to_string());
    }

    let name = match property.split('-').nth(2)? {
        "attr" => property.strip_prefix("--attr-")?,
        "data" => property.strip_prefix("--")?,
        _ => return None,
    };
    if name.is_empty() {
        log::debug!("ignoring attribute property without a name: `{}`", property);
        return None;
    }

    if value.is_empty() {
        Some(name.to_string())
    } else {
        Some(format!("{}=\"{}\"", name, strip_quotes(value)))
    }
}

/// Every attribute declaration of the rule, each prefixed with a space, in order.
pub fn extract_attributes(rule: &OwnedRule) -> String {
    let mut attributes = String::new();
    for (property, value) in rule.properties() {
        if let Some(fragment) = render_attribute(property, value) {
            attributes.push(' ');
            attributes.push_str(&fragment);
        }
    }
    attributes
}
