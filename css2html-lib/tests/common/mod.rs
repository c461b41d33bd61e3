#![allow(dead_code)]

use css2html_lib::{compile, Config};
use std::path::PathBuf;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Compile without the formatting pass.
pub fn raw(css: &str) -> Option<String> {
    init_logging();
    compile(&Config::new(css).format(false)).unwrap()
}

/// Compile with the default formatter.
pub fn formatted(css: &str) -> Option<String> {
    init_logging();
    compile(&Config::new(css)).unwrap()
}

/// A per-test file path under the system temp directory, removed up front.
pub fn scratch_file(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "css2html-{}-{}.html",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    path
}
