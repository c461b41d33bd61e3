//! Writing generated markup into an existing document between two anchors.

use crate::error::{Error, Result};
use std::ops::Range;
use std::path::Path;

/// The byte range of `document` that generated markup replaces.
///
/// It starts right after the first `after` anchor (or at 0) and ends at the
/// last `before` anchor (or at the end of the document).
pub fn splice_window(
    document: &str,
    after: Option<&str>,
    before: Option<&str>,
    path: &Path,
) -> Result<Range<usize>> {
    let not_found = |anchor: &str| Error::AnchorNotFound {
        anchor: anchor.to_string(),
        path: path.to_path_buf(),
    };

    let start = match after {
        Some(anchor) => document.find(anchor).ok_or_else(|| not_found(anchor))? + anchor.len(),
        None => 0,
    };
    let end = match before {
        Some(anchor) => document.rfind(anchor).ok_or_else(|| not_found(anchor))?,
        None => document.len(),
    };

    if end < start {
        return Err(Error::AnchorOrder {
            path: path.to_path_buf(),
        });
    }
    Ok(start..end)
}

/// Replace the window's contents, keeping prefix and suffix byte for byte.
pub fn splice(document: &str, window: Range<usize>, content: &str) -> String {
    let mut spliced = String::with_capacity(document.len() - window.len() + content.len());
    spliced.push_str(&document[..window.start]);
    spliced.push_str(content);
    spliced.push_str(&document[window.end..]);
    spliced
}
