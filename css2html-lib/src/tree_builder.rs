//! Rebuilds element nesting from the flat, ordered rule list.
//!
//! A rule nests under the closest earlier rule whose selector is its own
//! minus the last segment, as long as nothing outside that earlier rule's
//! subtree appears in between:
//!
//! ```text
//! nav {}          ->  <nav>
//! nav ul {}       ->    <ul>
//! nav ul li {}    ->      <li></li>
//! nav a {}        ->    </ul><a></a>
//! footer {}       ->  </nav><footer></footer>
//! ```

use crate::dom::dom_tree::Element;

/// True if `candidate` is `parent` with exactly one more segment.
fn is_first_level_child(parent: &Element, candidate: &Element) -> bool {
    candidate
        .full_selector()
        .strip_prefix(parent.full_selector())
        .and_then(|rest| rest.strip_prefix(' '))
        == Some(candidate.self_selector())
}

/// True while `candidate` may still be inside `parent`'s subtree.
fn is_inner_element(parent: &Element, candidate: &Element) -> bool {
    candidate
        .parent_selector()
        .starts_with(parent.full_selector())
}

/// For every element, the indices of its direct children in `elements`.
///
/// Each element scans forward from its own position: direct children are
/// collected, deeper descendants are skipped, and the first element that
/// cannot belong to the subtree ends the scan.
pub fn child_indices(elements: &[Element]) -> Vec<Vec<usize>> {
    elements
        .iter()
        .enumerate()
        .map(|(index, parent)| {
            let mut children = Vec::new();
            for (candidate_index, candidate) in elements.iter().enumerate().skip(index + 1) {
                if is_first_level_child(parent, candidate) {
                    children.push(candidate_index);
                } else if !is_inner_element(parent, candidate) {
                    break;
                }
            }
            children
        })
        .collect()
}

/// Move every element under its parent and return the roots in order.
///
/// Elements that are neither roots nor claimed by a parent (their parent is
/// missing, or an unrelated rule separates them from it) are dropped.
pub fn build_tree(elements: Vec<Element>) -> Vec<Element> {
    let children = child_indices(&elements);
    let mut slots: Vec<Option<Element>> = elements.into_iter().map(Some).collect();

    // Children always come after their parent, so walking backwards
    // completes every subtree before it is moved.
    for index in (0..slots.len()).rev() {
        let owned: Vec<Element> = children[index]
            .iter()
            .filter_map(|&child| slots[child].take())
            .collect();
        if let Some(element) = slots[index].as_mut() {
            element.children = owned;
        }
    }

    slots
        .into_iter()
        .flatten()
        .filter(|element| {
            let is_root = element.path.is_root();
            if !is_root {
                log::warn!(
                    "`{}` has no preceding `{}` rule to nest under; it is not rendered",
                    element.full_selector(),
                    element.parent_selector()
                );
            }
            is_root
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::owned_css::OwnedRule;
    use pretty_assertions::assert_eq;

    fn elements(selectors: &[&str]) -> Vec<Element> {
        selectors
            .iter()
            .map(|selector| Element::from_rule(&OwnedRule::style(selector, vec![])).unwrap())
            .collect()
    }

    /// Compact "tag(child child)" outline of a forest.
    fn outline(elements: &[Element]) -> String {
        elements
            .iter()
            .map(|element| {
                if element.children.is_empty() {
                    element.self_selector().to_string()
                } else {
                    format!("{}({})", element.self_selector(), outline(&element.children))
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn descendant_follows_its_parent() {
        let roots = build_tree(elements(&["div", "div span"]));
        assert_eq!(outline(&roots), "div(span)");
    }

    #[test]
    fn siblings_and_grandchildren() {
        let roots = build_tree(elements(&[
            "nav",
            "nav ul",
            "nav ul li",
            "nav ul li a",
            "nav ul li",
            "nav a",
            "footer",
            "input",
        ]));
        assert_eq!(outline(&roots), "nav(ul(li(a) li) a) footer input");
    }

    #[test]
    fn child_indices_point_at_direct_children_only() {
        let list = elements(&["a", "a b", "a b c", "a d", "e"]);
        assert_eq!(
            child_indices(&list),
            vec![vec![1, 3], vec![2], vec![], vec![], vec![]]
        );
    }

    #[test]
    fn unrelated_rule_breaks_the_subtree() {
        // `em` comes after `p`, so `div span` stopped looking before reaching it.
        let roots = build_tree(elements(&["div", "div span", "p", "div span em"]));
        assert_eq!(outline(&roots), "div(span) p");
    }

    #[test]
    fn orphan_without_parent_is_dropped() {
        let roots = build_tree(elements(&["ul li", "p"]));
        assert_eq!(outline(&roots), "p");
    }

    #[test]
    fn repeated_selectors_stay_separate_elements() {
        let roots = build_tree(elements(&["div", "div", "div p"]));
        assert_eq!(outline(&roots), "div div(p)");
    }

    #[test]
    fn every_non_root_is_claimed_exactly_once() {
        let roots = build_tree(elements(&["a", "a b", "a b", "a b c", "a b"]));
        assert_eq!(outline(&roots), "a(b b(c) b)");
    }
}
