mod common;

use common::{formatted, raw};
use pretty_assertions::assert_eq;

#[test]
fn converts_rules_into_nested_markup() {
    assert_eq!(
        formatted("div {} div span {} custom-tag {} input {}").as_deref(),
        Some("<div>\n  <span></span>\n</div>\n<custom-tag></custom-tag>\n<input />\n")
    );
}

#[test]
fn unformatted_output_keeps_children_flush() {
    assert_eq!(
        raw("div {} div span {} custom-tag {} input {}").as_deref(),
        Some("<div>\n<span></span>\n</div>\n<custom-tag></custom-tag>\n<input />\n")
    );
}

#[test]
fn single_rule_round_trip() {
    assert_eq!(raw("div {}").as_deref(), Some("<div></div>\n"));
    assert_eq!(formatted("div {}").as_deref(), Some("<div></div>\n"));
}

#[test]
fn empty_source_returns_nothing() {
    assert_eq!(raw(""), None);
    assert_eq!(formatted(""), None);
}

#[test]
fn unsupported_rules_are_skipped_silently() {
    assert_eq!(
        raw("a:hover {} p {} li > a {} * {} @media print { b {} } hr {}").as_deref(),
        Some("<p></p>\n<hr />\n")
    );
}

#[test]
fn selector_is_fully_processed() {
    assert_eq!(
        formatted("div.some-class.class2#some-id[data-attr] {}").as_deref(),
        Some("<div id=\"some-id\" class=\"some-class class2\" data-attr></div>\n")
    );
}

#[test]
fn self_closing_tags_never_close() {
    let html = raw("img {} br {} hr {} meta {} wbr {} div {}").unwrap();
    for tag in ["img", "br", "hr", "meta", "wbr"] {
        assert!(html.contains(&format!("<{} />", tag)), "{html}");
        assert!(!html.contains(&format!("</{}>", tag)), "{html}");
    }
    assert!(html.contains("<div></div>"));
}

#[test]
fn nesting_requires_a_contiguous_subtree() {
    assert_eq!(
        raw("div {} div span {} p {} div span em {}").as_deref(),
        Some("<div>\n<span></span>\n</div>\n<p></p>\n")
    );
}

#[test]
fn deep_nesting_is_formatted_by_level() {
    assert_eq!(
        formatted("nav {} nav ul {} nav ul li { --text: 'Home' } nav ul li { --text: 'About' }")
            .as_deref(),
        Some("<nav>\n  <ul>\n    <li>Home</li>\n    <li>About</li>\n  </ul>\n</nav>\n")
    );
}

#[test]
fn formatting_keeps_the_generated_nesting() {
    assert_eq!(
        formatted("p {} p div {}").as_deref(),
        Some("<p>\n  <div></div>\n</p>\n")
    );
    assert_eq!(
        formatted("head {} head title {}").as_deref(),
        Some("<head>\n  <title></title>\n</head>\n")
    );
    assert_eq!(
        formatted("a {} a a {}").as_deref(),
        Some("<a>\n  <a></a>\n</a>\n")
    );
    assert_eq!(
        formatted("table {} table tr {} table tr td {}").as_deref(),
        Some("<table>\n  <tr>\n    <td></td>\n  </tr>\n</table>\n")
    );
}
