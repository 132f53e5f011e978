//! Errors raised while reading simulator input files.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to read an input file as XML.
///
/// Missing elements or fields inside a well-formed document are not errors,
/// the extractors report them as absent values instead.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The file could not be opened or read.
    #[error("can't read file {path}")]
    Io { path: PathBuf, source: io::Error },
    /// The file is not well-formed XML.
    #[error("can't parse XML from file {path}")]
    Xml {
        path: PathBuf,
        source: xmltree::ParseError,
    },
}
