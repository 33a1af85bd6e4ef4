//! Errors from reading and binding POM / metadata documents.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PomError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("document is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::de::DeError),
}
