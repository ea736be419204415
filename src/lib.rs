pub mod errors;
pub mod document; // generic document-order element helpers, not web.xml specific
mod extractor;

use std::path::Path;

use errors::Result;
pub use errors::ExtractError;
pub use extractor::{scan, ContextParams};

/// Tolerant extractor of `context-param` name/value pairs from a Java web
/// deployment descriptor (web.xml). Only well-formedness is required; the
/// document is never validated against its schema.
///
/// Extract from an in-memory XML string. Not-well-formed input is a fatal
/// `ExtractError::Parse`; malformed individual context-param blocks are
/// skipped and reported through `ContextParams::had_malformed`.
pub fn extract(xml: &str) -> Result<ContextParams> {
    let doc = roxmltree::Document::parse(xml)?;
    Ok(scan(&doc))
}

/// Convenience: read a web.xml file from disk and extract its context
/// parameters. Open/read failures surface as `ExtractError::Source`.
pub fn extract_file(path: impl AsRef<Path>) -> Result<ContextParams> {
    let xml = std::fs::read_to_string(path)?;
    extract(&xml)
}
