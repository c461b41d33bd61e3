//! Compile CSS-shaped scaffolding into HTML.
//!
//! Every style rule becomes an element, descendant selectors become nesting,
//! and custom properties (`--text`, `--attr-*`, `--data-*`, `--attrs`) or
//! labelled comments (`/* text: ... */`) inject text and attributes.
//!
//! ```no_run
//! use css2html_lib::generate::{compile, Config};
//!
//! let html = compile(&Config::new("ul {} ul li { --text: 'one' }").format(false))?;
//! assert_eq!(html.as_deref(), Some("<ul>\n<li>one</li>\n</ul>\n"));
//! # Ok::<(), css2html_lib::error::Error>(())
//! ```

pub mod dom;
pub mod error;
pub mod format_worker;
pub mod generate;
pub mod serializer;
pub mod splice;
pub mod tree_builder;

pub mod extract {
    pub mod attributes;
    pub mod text;
}

pub mod parser {
    pub mod html;
    pub mod pretty;
}

pub mod style {
    pub mod css_source;
    pub mod owned_css;
    pub mod rule_filter;
    pub mod selector;
}

pub use error::{Error, Result};
pub use generate::{compile, Compiler, Config, WriteTarget};
