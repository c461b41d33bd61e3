mod common;

use common::{formatted, raw};
use pretty_assertions::assert_eq;

#[test]
fn shorthand_with_three_parts() {
    assert_eq!(
        raw(r#"div { --text: "a","b","c" }"#).as_deref(),
        Some("a<div>b</div>c\n\n")
    );
}

#[test]
fn shorthand_with_two_parts() {
    assert_eq!(
        raw(r#"span { --text: "inside", " after" }"#).as_deref(),
        Some("<span>inside</span> after\n\n")
    );
}

#[test]
fn separate_before_and_after_declarations() {
    assert_eq!(
        raw(r#"b { --text-before: "x "; --text: "bold"; --text-after: " y" }"#).as_deref(),
        Some("x <b>bold</b> y\n\n")
    );
}

#[test]
fn comment_text_overrides_declared_text() {
    assert_eq!(
        raw(r#"div { --text: "a"; /* text: b */ }"#).as_deref(),
        Some("<div>b</div>\n")
    );
}

#[test]
fn texts_from_different_comments() {
    let css = "div {
  /* text-before: before text */
  /* TEXT: inner text */
  /* Text-After: after text */
}";
    assert_eq!(
        raw(css).as_deref(),
        Some("before text<div>inner text</div>after text\n\n")
    );
}

#[test]
fn comment_text_keeps_new_lines_and_inner_spaces() {
    let css = "div { /* text:   spaced
    second line */ }";
    assert_eq!(
        raw(css).as_deref(),
        Some("<div>  spaced\n    second line</div>\n")
    );
}

#[test]
fn unlabelled_comments_do_not_produce_text() {
    assert_eq!(
        raw("div { /* just a note */ /* {{inner}} */ }").as_deref(),
        Some("<div></div>\n")
    );
}

#[test]
fn child_text_before_shares_the_parent_line() {
    assert_eq!(
        raw("p {} p b { --text: 'Note: ', 'bold', '' }").as_deref(),
        Some("<p>Note: <b>bold</b>\n</p>\n")
    );
}

#[test]
fn inner_text_survives_formatting() {
    assert_eq!(
        formatted("div { /* text: inner text */ }").as_deref(),
        Some("<div>inner text</div>\n")
    );
}

#[test]
fn comments_inside_values_are_ignored() {
    assert_eq!(
        raw("div { --text: 'x' /* note */; --attr-role: 'btn' /* why */ }").as_deref(),
        Some("<div role=\"btn\">x</div>\n")
    );
}
