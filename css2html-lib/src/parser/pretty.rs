//! Indents HTML: one node per line, two spaces per level.
//!
//! Tags are re-indented where they were written; no tag is added, moved or
//! dropped. Text is trimmed per line and re-escaped.

use crate::parser::html::{parse_html, Handle, Node, NodeData};

const INDENT: &str = "  ";

/// Elements whose text is written out unescaped.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Tokenize `html` and print it back indented.
pub fn format_html(html: &str) -> String {
    let document = parse_html(html);
    let document = document.borrow();
    pretty_print(&document.children)
}

pub fn pretty_print(nodes: &[Handle]) -> String {
    let mut output = String::new();
    for node in nodes {
        write_node(&node.borrow(), 0, false, &mut output);
    }
    output
}

fn push_line(output: &mut String, depth: usize, line: &str) {
    for _ in 0..depth {
        output.push_str(INDENT);
    }
    output.push_str(line);
    output.push('\n');
}

fn write_node(node: &Node, depth: usize, raw_text: bool, output: &mut String) {
    match &node.data {
        NodeData::Document => {
            for child in &node.children {
                write_node(&child.borrow(), depth, raw_text, output);
            }
        }
        NodeData::Doctype { name } => push_line(output, depth, &format!("<!doctype {}>", name)),
        NodeData::Comment(text) => push_line(output, depth, &format!("<!--{}-->", text)),
        NodeData::StrayEndTag(tag) => push_line(output, depth, &format!("</{}>", tag)),
        NodeData::Text(text) => {
            for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
                if raw_text {
                    push_line(output, depth, line);
                } else {
                    push_line(output, depth, &escape_text(line));
                }
            }
        }
        NodeData::Element {
            name,
            attributes,
            self_closing,
            closed,
        } => {
            let open = format!("<{}{}", name, render_attributes(attributes));
            if *self_closing {
                push_line(output, depth, &format!("{} />", open));
                return;
            }

            let raw_text = RAW_TEXT_ELEMENTS.contains(&name.as_str());
            match inline_text(node, raw_text).filter(|_| *closed) {
                Some(text) => push_line(output, depth, &format!("{}>{}</{}>", open, text, name)),
                None => {
                    push_line(output, depth, &format!("{}>", open));
                    for child in &node.children {
                        write_node(&child.borrow(), depth + 1, raw_text, output);
                    }
                    if *closed {
                        push_line(output, depth, &format!("</{}>", name));
                    }
                }
            }
        }
    }
}

/// The element's content when it fits on the tag's line: no child
/// elements or comments, and at most one line of text.
fn inline_text(node: &Node, raw_text: bool) -> Option<String> {
    let mut text = String::new();
    for child in &node.children {
        match &child.borrow().data {
            NodeData::Text(content) => text.push_str(content),
            _ => return None,
        }
    }

    let trimmed = text.trim();
    if trimmed.contains('\n') {
        return None;
    }
    Some(if raw_text {
        trimmed.to_string()
    } else {
        escape_text(trimmed)
    })
}

fn render_attributes(attributes: &[(String, String)]) -> String {
    let mut rendered = String::new();
    for (name, value) in attributes {
        rendered.push(' ');
        rendered.push_str(name);
        if !value.is_empty() {
            rendered.push_str("=\"");
            rendered.push_str(&escape_attribute(value));
            rendered.push('"');
        }
    }
    rendered
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attribute(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nests_children_with_two_space_indent() {
        let raw = "<div>\n<span></span>\n</div>\n<custom-tag></custom-tag>\n<input />\n";
        assert_eq!(
            format_html(raw),
            "<div>\n  <span></span>\n</div>\n<custom-tag></custom-tag>\n<input />\n"
        );
    }

    #[test]
    fn short_text_stays_inline() {
        assert_eq!(
            format_html("<ul>\n<li>one</li>\n<li>  two </li>\n</ul>\n"),
            "<ul>\n  <li>one</li>\n  <li>two</li>\n</ul>\n"
        );
    }

    #[test]
    fn multi_line_text_gets_its_own_lines() {
        assert_eq!(
            format_html("<p>line 1\n   line 2</p>"),
            "<p>\n  line 1\n  line 2\n</p>\n"
        );
    }

    #[test]
    fn attributes_are_escaped_and_bare_when_empty() {
        assert_eq!(
            format_html("<a title='say \"hi\"' href=\"?a=1&amp;b=2\" download></a>"),
            "<a title=\"say &quot;hi&quot;\" href=\"?a=1&amp;b=2\" download></a>\n"
        );
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(format_html("<b>1 &lt; 2</b>"), "<b>1 &lt; 2</b>\n");
    }

    #[test]
    fn comments_are_kept() {
        assert_eq!(
            format_html("<div><!-- note --></div>"),
            "<div>\n  <!-- note -->\n</div>\n"
        );
    }

    #[test]
    fn whole_documents_keep_head_and_body() {
        assert_eq!(
            format_html("<!DOCTYPE html><html><head><title>T</title></head><body><main></main></body></html>"),
            "<!doctype html>\n<html>\n  <head>\n    <title>T</title>\n  </head>\n  <body>\n    <main></main>\n  </body>\n</html>\n"
        );
    }

    #[test]
    fn nesting_is_kept_even_where_html_would_reparent() {
        assert_eq!(
            format_html("<p>\n<div></div>\n</p>\n<head>\n<title></title>\n</head>\n"),
            "<p>\n  <div></div>\n</p>\n<head>\n  <title></title>\n</head>\n"
        );
        assert_eq!(
            format_html("<a>\n<a></a>\n</a>\n"),
            "<a>\n  <a></a>\n</a>\n"
        );
        assert_eq!(
            format_html("<table><tr><td></td></tr></table>"),
            "<table>\n  <tr>\n    <td></td>\n  </tr>\n</table>\n"
        );
    }

    #[test]
    fn unclosed_elements_get_no_end_tag() {
        assert_eq!(
            format_html("<section><div></div>\n"),
            "<section>\n  <div></div>\n"
        );
        assert_eq!(format_html("<li>one"), "<li>\n  one\n");
    }

    #[test]
    fn unmatched_end_tags_stay_in_place() {
        assert_eq!(
            format_html("<div></span></div>"),
            "<div>\n  </span>\n</div>\n"
        );
    }

    #[test]
    fn literal_text_is_escaped_on_output() {
        assert_eq!(format_html("<b>a < b</b>"), "<b>a &lt; b</b>\n");
    }

    #[test]
    fn script_text_is_left_raw() {
        assert_eq!(
            format_html("<script>if (a<b) {}</script>"),
            "<script>if (a<b) {}</script>\n"
        );
    }
}
