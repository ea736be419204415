use crate::document::{element_children, elements_by_tag, text_content};
use itertools::Itertools;
use roxmltree::{Document, Node};
use serde::Serialize;
use std::collections::HashMap;
use tracing::warn;

/// Result of one extraction pass: the name → value mapping plus a flag that
/// is true if one or more context-param blocks were skipped as malformed.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ContextParams {
    pub params: HashMap<String, String>,
    pub had_malformed: bool,
}

/// Scan a parsed document for `context-param` blocks, anywhere under the
/// root, in document order. Valid blocks land in the mapping (last occurrence
/// of a name wins); malformed blocks are skipped and only raise the flag.
/// The document is never mutated; the result is newly allocated per call.
pub fn scan(doc: &Document) -> ContextParams {
    let mut out = ContextParams::default();

    for block in elements_by_tag(doc, "context-param") {
        match read_block(block) {
            Some((name, value)) => {
                out.params.insert(name, value);
            }
            None => {
                warn!("skipping a not well formed context-param element");
                out.had_malformed = true;
            }
        }
    }

    out
}

/// A block is valid only if it has exactly two element children and, in
/// either order, one is `param-name` and the other `param-value`. Extra
/// element children are treated as malformed rather than guessed at.
fn read_block(block: Node) -> Option<(String, String)> {
    // collect_tuple is None unless the iterator yields exactly two items.
    let (first, second) = element_children(block).collect_tuple()?;

    let forward = first.has_tag_name("param-name") && second.has_tag_name("param-value");
    let reversed = first.has_tag_name("param-value") && second.has_tag_name("param-name");

    let (name_el, value_el) = if forward {
        (first, second)
    } else if reversed {
        (second, first)
    } else {
        return None;
    };

    Some((text_content(name_el), text_content(value_el)))
}
