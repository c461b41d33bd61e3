use crate::dom::dom_tree::Element;
use crate::error::{Error, Result};
use crate::format_worker::{FormatWorker, HtmlFormatter, Verbatim};
use crate::serializer::render_roots;
use crate::splice::{splice, splice_window};
use crate::style::css_source::parse_stylesheet;
use crate::style::rule_filter::filter_rules;
use crate::tree_builder::build_tree;
use std::fs;
use std::path::{Path, PathBuf};

/// What to compile and where the result goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub css: String,
    /// Splice the result into this file instead of only returning it.
    pub write: Option<WriteTarget>,
    /// Run the result through the HTML formatter. On by default.
    pub format: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            css: String::new(),
            write: None,
            format: true,
        }
    }
}

impl Config {
    pub fn new(css: impl Into<String>) -> Self {
        Config {
            css: css.into(),
            ..Config::default()
        }
    }

    pub fn format(mut self, format: bool) -> Self {
        self.format = format;
        self
    }

    pub fn write_in(mut self, target: WriteTarget) -> Self {
        self.write = Some(target);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteTarget {
    pub path: PathBuf,
    /// Generated markup starts right after the first occurrence of this text.
    pub after: Option<String>,
    /// Generated markup ends right before the last occurrence of this text.
    pub before: Option<String>,
}

impl WriteTarget {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        WriteTarget {
            path: path.into(),
            after: None,
            before: None,
        }
    }

    pub fn after(mut self, anchor: impl Into<String>) -> Self {
        self.after = Some(anchor.into());
        self
    }

    pub fn before(mut self, anchor: impl Into<String>) -> Self {
        self.before = Some(anchor.into());
        self
    }
}

/// Compile with the default formatter.
///
/// Returns `Ok(None)` when the source yields no elements at all, which is
/// different from an empty string.
pub fn compile(config: &Config) -> Result<Option<String>> {
    if config.format {
        Compiler::new(FormatWorker::new()?).compile(config)
    } else {
        Compiler::new(Verbatim).compile(config)
    }
}

/// Runs the whole pipeline: parse, filter, build elements, nest, render,
/// splice and format.
pub struct Compiler<F> {
    formatter: F,
}

impl<F: HtmlFormatter> Compiler<F> {
    pub fn new(formatter: F) -> Self {
        Compiler { formatter }
    }

    pub fn compile(&self, config: &Config) -> Result<Option<String>> {
        let target = match &config.write {
            Some(write) => Some(read_target(&write.path)?),
            None => None,
        };

        let Some(fragment) = compile_fragment(&config.css)? else {
            return Ok(None);
        };

        let output = match (&config.write, &target) {
            (Some(write), Some(document)) => {
                let window = splice_window(
                    document,
                    write.after.as_deref(),
                    write.before.as_deref(),
                    &write.path,
                )?;
                splice(document, window, &fragment)
            }
            _ => fragment,
        };

        let output = if config.format {
            self.formatter.format(&output)?
        } else {
            output
        };

        if let Some(write) = &config.write {
            fs::write(&write.path, &output).map_err(|e| Error::io(&write.path, e))?;
            log::info!("wrote {} bytes to {}", output.len(), write.path.display());
        }

        Ok(Some(output))
    }
}

/// Everything up to the unformatted fragment: one line per root element.
pub fn compile_fragment(css: &str) -> Result<Option<String>> {
    let sheet = parse_stylesheet(css)?;
    if sheet.rules.is_empty() {
        return Ok(None);
    }

    let rules = filter_rules(sheet.rules);
    for rule in &rules {
        log::trace!("compiling rule {}", rule);
    }
    let elements: Vec<Element> = rules.iter().filter_map(Element::from_rule).collect();
    let mut roots = build_tree(elements);
    if roots.is_empty() {
        log::debug!("no elements to render");
        return Ok(None);
    }

    Ok(Some(render_roots(&mut roots)))
}

/// Read the splice target, creating it empty when it does not exist yet.
fn read_target(path: &Path) -> Result<String> {
    if !path.exists() {
        log::warn!(
            "the {} file was not found, so it will be created",
            path.display()
        );
        fs::File::create(path).map_err(|e| Error::io(path, e))?;
        return Ok(String::new());
    }
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}
