//! Permissive lookups over parsed XML trees.
//!
//! Simulator reports nest the interesting elements at varying depths, so
//! lookups search for the first element with a matching tag anywhere in the
//! tree instead of requiring an exact document structure.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use xmltree::{Element, XMLNode};

use crate::error::ParseError;

/// Parses the XML file at `path` and returns its root element.
pub(crate) fn parse_file(path: &Path) -> Result<Element, ParseError> {
    let file = File::open(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Element::parse(BufReader::new(file)).map_err(|source| ParseError::Xml {
        path: path.to_path_buf(),
        source,
    })
}

/// Returns the first element with tag `name` in document order, considering
/// `root` itself and all of its descendants.
pub(crate) fn find_descendant<'a>(root: &'a Element, name: &str) -> Option<&'a Element> {
    if root.name == name {
        return Some(root);
    }
    root.children
        .iter()
        .filter_map(XMLNode::as_element)
        .find_map(|child| find_descendant(child, name))
}

/// Returns the text content of the direct child with tag `name`,
/// or `None` if there is no such child or it holds no text.
pub(crate) fn child_text(parent: &Element, name: &str) -> Option<String> {
    parent
        .get_child(name)
        .and_then(|child| child.get_text())
        .map(|text| text.into_owned())
}
