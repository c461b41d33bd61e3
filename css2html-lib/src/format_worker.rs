//! The formatting pass, run on its own worker thread.
//!
//! Formatting tokenizes the HTML with html5ever and prints it back indented.
//! The caller blocks until the worker answers; there is no timeout.

use crate::error::{Error, Result};
use crate::parser::pretty::format_html;
use std::panic;

/// Anything that can pretty-print an HTML string.
pub trait HtmlFormatter {
    fn format(&self, html: &str) -> Result<String>;
}

/// Leaves the HTML untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct Verbatim;

impl HtmlFormatter for Verbatim {
    fn format(&self, html: &str) -> Result<String> {
        Ok(html.to_string())
    }
}

/// Formats on a dedicated single-thread rayon pool.
pub struct FormatWorker {
    pool: rayon::ThreadPool,
}

impl FormatWorker {
    pub fn new() -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(1)
            .thread_name(|index| format!("css2html-format-{}", index))
            .build()
            .map_err(|e| Error::Format(e.to_string()))?;
        Ok(FormatWorker { pool })
    }
}

impl HtmlFormatter for FormatWorker {
    fn format(&self, html: &str) -> Result<String> {
        log::debug!("formatting {} bytes of HTML", html.len());
        self.pool.install(|| {
            panic::catch_unwind(|| format_html(html))
                .map_err(|_| Error::Format("the formatter worker panicked".to_string()))
        })
    }
}
