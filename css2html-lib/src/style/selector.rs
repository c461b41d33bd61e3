//! Selector handling: the descendant path of a rule and the compound
//! selector at its end.

use std::fmt;

/// ------------------------------
/// 1. Selector path
/// ------------------------------

/// A rule selector split into its own trailing segment and its ancestors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorPath {
    /// The selector as written, e.g. "nav ul li".
    pub full: String,
    /// Everything but the last segment, e.g. "nav ul"; empty for roots.
    pub parent: String,
    /// The last segment, e.g. "li".
    pub own: String,
}

impl SelectorPath {
    pub fn new(full_selector: &str) -> Self {
        let mut parts: Vec<&str> = full_selector.split(' ').collect();
        // `split` always yields at least one item
        let own = parts.pop().unwrap_or_default().to_string();

        SelectorPath {
            full: full_selector.to_string(),
            parent: parts.join(" "),
            own,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_empty()
    }
}

/// ------------------------------
/// 2. Compound selector tokenizing
/// ------------------------------

/// Supported attribute selector operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeOperator {
    /// [attr="value"]
    Exact,
    /// [attr~="value"]
    Includes,
    /// [attr|="value"]
    DashMatch,
    /// [attr^="value"]
    Prefix,
    /// [attr$="value"]
    Suffix,
    /// [attr*="value"]
    Substring,
}

impl AttributeOperator {
    fn from_str(op: &str) -> Option<Self> {
        match op {
            "=" => Some(AttributeOperator::Exact),
            "~=" => Some(AttributeOperator::Includes),
            "|=" => Some(AttributeOperator::DashMatch),
            "^=" => Some(AttributeOperator::Prefix),
            "$=" => Some(AttributeOperator::Suffix),
            "*=" => Some(AttributeOperator::Substring),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AttributeOperator::Exact => "=",
            AttributeOperator::Includes => "~=",
            AttributeOperator::DashMatch => "|=",
            AttributeOperator::Prefix => "^=",
            AttributeOperator::Suffix => "$=",
            AttributeOperator::Substring => "*=",
        }
    }
}

/// One `[name]` or `[name<op>value]` component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSelector {
    pub name: String,
    /// None means a bare `[name]`.
    pub value: Option<(AttributeOperator, String)>,
}

/// Renders the attribute the way it lands on the element: `name` or `name="value"`.
impl fmt::Display for AttributeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some((operator, value)) => {
                write!(f, "{}{}\"{}\"", self.name, operator.as_str(), value)
            }
            None => f.write_str(&self.name),
        }
    }
}

/// The components of one compound selector, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompoundSelector {
    pub tag: Option<String>,
    pub id: Option<String>,
    /// Deduplicated, first occurrence wins the position.
    pub classes: Vec<String>,
    pub attributes: Vec<AttributeSelector>,
}

fn is_component_start(ch: char) -> bool {
    ch == '#' || ch == '.' || ch == '['
}

/// Parse a compound selector string, e.g. "a.button#main[role=\"link\"][download]"
pub fn parse_compound_selector(selector: &str) -> CompoundSelector {
    let mut compound = CompoundSelector::default();
    let mut chars = selector.chars().peekable();
    let mut buffer = String::new();

    // Anything up to the first `#`, `.` or `[` is the tag name.
    while let Some(&ch) = chars.peek() {
        if is_component_start(ch) {
            break;
        }
        buffer.push(ch);
        chars.next();
    }
    if !buffer.is_empty() {
        compound.tag = Some(std::mem::take(&mut buffer));
    }

    while let Some(ch) = chars.next() {
        match ch {
            '#' | '.' => {
                while let Some(&next) = chars.peek() {
                    if is_component_start(next) {
                        break;
                    }
                    buffer.push(next);
                    chars.next();
                }
                if buffer.is_empty() {
                    continue;
                }
                let name = std::mem::take(&mut buffer);
                if ch == '#' {
                    compound.id = Some(name);
                } else if !compound.classes.contains(&name) {
                    compound.classes.push(name);
                }
            }
            '[' => {
                if let Some(attribute) = parse_attribute(&mut chars) {
                    compound.attributes.push(attribute);
                }
            }
            _ => {}
        }
    }

    compound
}

/// Parses the inside of `[...]`; the opening bracket is already consumed.
fn parse_attribute(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<AttributeSelector> {
    let mut name = String::new();
    let mut value = None;

    skip_whitespace(chars);
    while let Some(&ch) = chars.peek() {
        if ch == ']' || ch.is_whitespace() || "=~|^$*".contains(ch) {
            break;
        }
        name.push(ch);
        chars.next();
    }
    skip_whitespace(chars);

    let mut op = String::new();
    while let Some(&ch) = chars.peek() {
        if !"=~|^$*".contains(ch) {
            break;
        }
        op.push(ch);
        chars.next();
    }

    if let Some(operator) = AttributeOperator::from_str(&op) {
        skip_whitespace(chars);
        let mut raw = String::new();
        match chars.peek().copied() {
            Some(quote @ ('"' | '\'')) => {
                chars.next();
                for ch in chars.by_ref() {
                    if ch == quote {
                        break;
                    }
                    raw.push(ch);
                }
            }
            _ => {
                while let Some(&ch) = chars.peek() {
                    if ch == ']' || ch.is_whitespace() {
                        break;
                    }
                    raw.push(ch);
                    chars.next();
                }
            }
        }
        value = Some((operator, raw));
    }

    // Flags such as ` i` and the closing bracket.
    for ch in chars.by_ref() {
        if ch == ']' {
            break;
        }
    }

    if name.is_empty() {
        None
    } else {
        Some(AttributeSelector { name, value })
    }
}

fn skip_whitespace(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) {
    while chars.peek().is_some_and(|ch| ch.is_whitespace()) {
        chars.next();
    }
}
