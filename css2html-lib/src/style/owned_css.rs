// src/style/owned_css.rs: the owned rule AST handed from the CSS source parser to the compiler.
use std::fmt;

/// A fully-owned stylesheet: every top-level item in source order.
#[derive(Debug, Default)]
pub struct OwnedStylesheet {
    pub rules: Vec<OwnedRule>,
}

/// What kind of top-level item a rule came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleKind {
    /// `selector { declarations }`
    Style,
    /// `@name ...;` or `@name ... { ... }`, body skipped.
    At(String),
    /// A top-level `/* ... */`.
    Comment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedRule {
    pub kind: RuleKind,
    /// e.g. "div", "ul li", "a.button"; only the first one is compiled.
    pub selectors: Vec<String>,
    /// Declarations and comments, in block order.
    pub declarations: Vec<OwnedDeclaration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnedDeclaration {
    /// `property: value`, value kept exactly as written (quotes included).
    Property { property: String, value: String },
    /// Body of a `/* ... */` inside the block, markers stripped.
    Comment(String),
}

impl OwnedRule {
    pub fn style(selector: &str, declarations: Vec<OwnedDeclaration>) -> Self {
        OwnedRule {
            kind: RuleKind::Style,
            selectors: vec![selector.to_string()],
            declarations,
        }
    }

    /// The selector the compiler acts on.
    pub fn selector(&self) -> Option<&str> {
        self.selectors.first().map(String::as_str)
    }

    /// Property/value pairs only, comments skipped.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations.iter().filter_map(|decl| match decl {
            OwnedDeclaration::Property { property, value } => {
                Some((property.as_str(), value.as_str()))
            }
            OwnedDeclaration::Comment(_) => None,
        })
    }

    pub fn comments(&self) -> impl Iterator<Item = &str> {
        self.declarations.iter().filter_map(|decl| match decl {
            OwnedDeclaration::Comment(body) => Some(body.as_str()),
            OwnedDeclaration::Property { .. } => None,
        })
    }
}

impl OwnedDeclaration {
    pub fn property(property: &str, value: &str) -> Self {
        OwnedDeclaration::Property {
            property: property.to_string(),
            value: value.to_string(),
        }
    }

    pub fn comment(body: &str) -> Self {
        OwnedDeclaration::Comment(body.to_string())
    }
}

/// One-line CSS-like rendering, e.g. `div { --text: 'x'; /* note */ }`.
impl fmt::Display for OwnedRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            RuleKind::Style => write!(f, "{} {{", self.selectors.join(", "))?,
            RuleKind::At(name) => write!(f, "@{} {{", name)?,
            RuleKind::Comment => f.write_str("{")?,
        }
        for decl in &self.declarations {
            match decl {
                OwnedDeclaration::Property { property, value } => {
                    write!(f, " {}: {};", property, value)?
                }
                OwnedDeclaration::Comment(body) => write!(f, " /*{}*/", body)?,
            }
        }
        f.write_str(" }")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn displays_as_one_line() {
        let rule = OwnedRule::style(
            "ul li",
            vec![
                OwnedDeclaration::property("--text", "'one'"),
                OwnedDeclaration::comment(" text-after: ! "),
            ],
        );
        assert_eq!(rule.to_string(), "ul li { --text: 'one'; /* text-after: ! */ }");
        assert_eq!(OwnedRule::style("p", vec![]).to_string(), "p { }");
    }
}
