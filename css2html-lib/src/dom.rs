use crate::extract::{attributes, text};
use crate::style::owned_css::OwnedRule;
use crate::style::selector::{parse_compound_selector, SelectorPath};

/// Tags rendered as `<tag ... />` without a closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
    "input", "br", "hr", "col", "link", "area", "img", "base", "embed", "keygen", "menuitem",
    "meta", "param", "source", "track", "wbr",
];

pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

pub mod dom_tree {
    use super::*;

    /// One element per accepted rule.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Element {
        pub path: SelectorPath,
        pub tag: String,
        pub id: Option<String>,
        pub classes: Vec<String>,
        /// Rendered attribute fragment, every entry prefixed with a space.
        pub attributes: String,
        pub text_before: Option<String>,
        pub text: Option<String>,
        pub text_after: Option<String>,
        pub children: Vec<Element>,
        pub(crate) rendered: Option<String>,
    }

    impl Element {
        /// Build the element for a rule: selector components first, then
        /// attribute and text declarations.
        pub fn from_rule(rule: &OwnedRule) -> Option<Self> {
            let path = SelectorPath::new(rule.selector()?);
            let compound = parse_compound_selector(&path.own);

            let mut rendered_attributes: String = compound
                .attributes
                .iter()
                .map(|attribute| format!(" {}", attribute))
                .collect();
            rendered_attributes.push_str(&attributes::extract_attributes(rule));

            let slots = text::extract_text(rule);

            Some(Element {
                tag: compound.tag.unwrap_or_else(|| "div".to_string()),
                id: compound.id,
                classes: compound.classes,
                attributes: rendered_attributes,
                text_before: slots.before,
                text: slots.inside,
                text_after: slots.after,
                children: Vec::new(),
                rendered: None,
                path,
            })
        }

        pub fn full_selector(&self) -> &str {
            &self.path.full
        }

        pub fn parent_selector(&self) -> &str {
            &self.path.parent
        }

        pub fn self_selector(&self) -> &str {
            &self.path.own
        }

        pub fn is_self_closing(&self) -> bool {
            is_void_element(&self.tag)
        }
    }
}
