//! Text placed before, inside and after an element.
//!
//! Two sources are read, in this order:
//!
//! 1. Declarations: `--text: "inside"`, `--text: "inside", "after"` or
//!    `--text: "before", "inside", "after"`, with `--text-before` /
//!    `--text-after` filling the slots the shorthand left empty.
//! 2. Labelled comments: `/* text: inside */`, `/* text-before: ... */`,
//!    `/* text-after: ... */`. These win over declarations.

use crate::extract::attributes::strip_quotes;
use crate::style::owned_css::OwnedRule;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TextSlots {
    pub before: Option<String>,
    pub inside: Option<String>,
    pub after: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSlot {
    Before,
    Inside,
    After,
}

/// Longest labels first so `text:` never shadows `text-before:`.
const COMMENT_LABELS: &[(&str, TextSlot)] = &[
    ("text-before:", TextSlot::Before),
    ("text-after:", TextSlot::After),
    ("text:", TextSlot::Inside),
];

impl TextSlots {
    fn slot_mut(&mut self, slot: TextSlot) -> &mut Option<String> {
        match slot {
            TextSlot::Before => &mut self.before,
            TextSlot::Inside => &mut self.inside,
            TextSlot::After => &mut self.after,
        }
    }
}

pub fn extract_text(rule: &OwnedRule) -> TextSlots {
    let mut slots = text_from_declarations(rule);

    for comment in rule.comments() {
        if let Some((slot, text)) = parse_text_comment(comment) {
            *slots.slot_mut(slot) = Some(text.to_string());
        }
    }

    slots
}

fn text_from_declarations(rule: &OwnedRule) -> TextSlots {
    let mut slots = TextSlots::default();

    let Some(shorthand) = find_value(rule, "--text") else {
        return slots;
    };

    let parts: Vec<String> = shorthand
        .split(',')
        .map(|part| strip_quotes(part.trim()).to_string())
        .collect();
    match parts.as_slice() {
        [inside] => slots.inside = Some(inside.clone()),
        [inside, after] => {
            slots.inside = Some(inside.clone());
            slots.after = Some(after.clone());
        }
        [before, inside, after, ..] => {
            slots.before = Some(before.clone());
            slots.inside = Some(inside.clone());
            slots.after = Some(after.clone());
        }
        [] => {}
    }

    if slots.before.is_none() {
        slots.before = find_value(rule, "--text-before").map(|value| strip_quotes(value).to_string());
    }
    if slots.after.is_none() {
        slots.after = find_value(rule, "--text-after").map(|value| strip_quotes(value).to_string());
    }

    slots
}

fn find_value<'r>(rule: &'r OwnedRule, name: &str) -> Option<&'r str> {
    rule.properties()
        .find(|(property, _)| *property == name)
        .map(|(_, value)| value)
}

/// Recognise `label: text` at the start of a comment body.
///
/// The label is matched case-insensitively after leading whitespace and must
/// be followed by one space, which is dropped along with a single trailing
/// space. Everything else, newlines included, is kept as written.
pub fn parse_text_comment(comment: &str) -> Option<(TextSlot, &str)> {
    let body = comment.trim_start();

    let (label, slot) = COMMENT_LABELS.iter().find(|(label, _)| {
        body.get(..label.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(label))
    })?;

    let text = body[label.len()..].strip_prefix(' ')?;
    Some((*slot, text.strip_suffix(' ').unwrap_or(text)))
}
