use roxmltree::{Document, Node};

/// Generic, library-shape-agnostic helpers over a parsed XML tree.
/// Everything here is plain document-order iteration; no schema awareness.

/// All elements with the given local tag name, anywhere under the root,
/// in document order (depth-first). Namespaces are deliberately ignored:
/// a `context-param` inside the Java EE default namespace still matches.
pub fn elements_by_tag<'a, 'input>(
    doc: &'a Document<'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    doc.descendants()
        .filter(move |n| n.is_element() && n.has_tag_name(tag))
}

/// The element children of a node, in order, skipping text, comment and
/// other non-element nodes (incidental whitespace in particular).
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|n| n.is_element())
}

/// Concatenated descendant text of an element, in document order.
/// CDATA sections count as text; an empty element yields an empty string.
pub fn text_content(node: Node) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}
