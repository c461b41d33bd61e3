use std::path::PathBuf;

/// Everything that can abort a compile.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A requested splice anchor does not occur in the target document.
    #[error("anchor {anchor:?} was not found in {}", path.display())]
    AnchorNotFound { anchor: String, path: PathBuf },

    /// The `before` anchor occurs before the end of the `after` anchor.
    #[error("the `before` anchor precedes the `after` anchor in {}", path.display())]
    AnchorOrder { path: PathBuf },

    #[error("CSS parse error at {line}:{column}: {message}")]
    CssParse {
        message: String,
        line: u32,
        column: u32,
    },

    #[error("HTML formatting failed: {0}")]
    Format(String),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
