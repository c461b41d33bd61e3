//! Renders elements into HTML text.
//!
//! Rendering follows a fixed plan of six steps, each of which either emits
//! a piece of text or is skipped:
//!
//! | step        | emits                                          |
//! |-------------|------------------------------------------------|
//! | text before | `text_before`                                  |
//! | open tag    | `<tag id class attrs>` or `<tag ... />`        |
//! | text        | `text`                                         |
//! | children    | each child on its own line                     |
//! | close tag   | `</tag>` unless the tag is void                |
//! | text after  | `text_after` and a newline                     |

use crate::dom::dom_tree::Element;

/// One placement rule of the plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Emit(String),
    Skip,
}

impl Step {
    fn from_option(content: Option<String>) -> Self {
        content.map_or(Step::Skip, Step::Emit)
    }

    pub fn content(&self) -> Option<&str> {
        match self {
            Step::Emit(content) => Some(content),
            Step::Skip => None,
        }
    }
}

pub fn text_before_step(element: &Element) -> Step {
    Step::from_option(element.text_before.clone())
}

pub fn open_tag_step(element: &Element) -> Step {
    let id = element
        .id
        .as_ref()
        .map(|id| format!(" id=\"{}\"", id))
        .unwrap_or_default();
    let class = if element.classes.is_empty() {
        String::new()
    } else {
        format!(" class=\"{}\"", element.classes.join(" "))
    };
    let end = if element.is_self_closing() { " />" } else { ">" };

    Step::Emit(format!(
        "<{}{}{}{}{}",
        element.tag, id, class, element.attributes, end
    ))
}

pub fn text_step(element: &Element) -> Step {
    Step::from_option(element.text.clone())
}

/// `rendered_children` must be the renderings of `element.children`, in order.
pub fn children_step(element: &Element, rendered_children: &[String]) -> Step {
    if rendered_children.is_empty() {
        return Step::Skip;
    }

    let mut html = String::new();
    // A leading before-text already starts the first child's line.
    let first_has_text_before = element
        .children
        .first()
        .and_then(|child| child.text_before.as_deref())
        .is_some_and(|before| !before.is_empty());
    if !first_has_text_before {
        html.push('\n');
    }
    for child in rendered_children {
        html.push_str(child);
        if !child.ends_with('\n') {
            html.push('\n');
        }
    }
    Step::Emit(html)
}

pub fn close_tag_step(element: &Element) -> Step {
    if element.is_self_closing() {
        Step::Skip
    } else {
        Step::Emit(format!("</{}>", element.tag))
    }
}

pub fn text_after_step(element: &Element) -> Step {
    Step::from_option(element.text_after.as_ref().map(|after| format!("{}\n", after)))
}

pub fn emission_plan(element: &Element, rendered_children: &[String]) -> [Step; 6] {
    [
        text_before_step(element),
        open_tag_step(element),
        text_step(element),
        children_step(element, rendered_children),
        close_tag_step(element),
        text_after_step(element),
    ]
}

impl Element {
    /// Render this element and its subtree. The result is computed once and
    /// cached; the tree must be complete before the first call.
    pub fn render(&mut self) -> &str {
        if self.rendered.is_none() {
            let rendered_children: Vec<String> = self
                .children
                .iter_mut()
                .map(|child| child.render().to_string())
                .collect();
            let html: String = emission_plan(self, &rendered_children)
                .iter()
                .filter_map(Step::content)
                .collect();
            self.rendered = Some(html);
        }
        self.rendered.as_deref().unwrap_or_default()
    }

    pub fn is_rendered(&self) -> bool {
        self.rendered.is_some()
    }
}

/// Render every root, each followed by a newline.
pub fn render_roots(roots: &mut [Element]) -> String {
    let mut html = String::new();
    for root in roots {
        html.push_str(root.render());
        html.push('\n');
    }
    html
}
