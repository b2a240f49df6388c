//! Thin helpers over the html5ever DOM

use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, serialize, serialize::SerializeOpts, serialize::TraversalScope};
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};
use std::io;

/// Parse an HTML string into a DOM tree
pub(crate) fn parse(html: &str) -> RcDom {
    parse_document(RcDom::default(), Default::default()).one(html)
}

/// True when `node` is a `<tag>` element whose class list contains `class`
pub(crate) fn has_tag_and_class(node: &Handle, tag: &str, class: &str) -> bool {
    match &node.data {
        NodeData::Element { name, attrs, .. } => {
            &*name.local == tag
                && attrs.borrow().iter().any(|attr| {
                    &*attr.name.local == "class"
                        && attr.value.split_ascii_whitespace().any(|c| c == class)
                })
        }
        _ => false,
    }
}

/// Descendants of `root` (not `root` itself) matching `predicate`, in document order
pub(crate) fn descendants_matching<F>(root: &Handle, predicate: F) -> Vec<Handle>
where
    F: Fn(&Handle) -> bool,
{
    let mut found = Vec::new();
    let mut stack: Vec<Handle> = root.children.borrow().iter().rev().cloned().collect();

    while let Some(node) = stack.pop() {
        if predicate(&node) {
            found.push(node.clone());
        }
        stack.extend(node.children.borrow().iter().rev().cloned());
    }

    found
}

/// Concatenated text of every text node under `root`
pub(crate) fn text_content(root: &Handle) -> String {
    let mut text = String::new();
    let mut stack = vec![root.clone()];

    while let Some(node) = stack.pop() {
        if let NodeData::Text { contents } = &node.data {
            text.push_str(&contents.borrow());
        }
        stack.extend(node.children.borrow().iter().rev().cloned());
    }

    text
}

/// Serialized markup of the node's children
pub(crate) fn inner_html(node: &Handle) -> io::Result<String> {
    serialize_node(node, TraversalScope::ChildrenOnly(None))
}

/// Serialized markup of the node itself, children included
pub(crate) fn outer_html(node: &Handle) -> io::Result<String> {
    serialize_node(node, TraversalScope::IncludeNode)
}

fn serialize_node(node: &Handle, scope: TraversalScope) -> io::Result<String> {
    let mut output = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: scope,
        ..Default::default()
    };

    let serializable = SerializableHandle::from(node.clone());
    serialize(&mut output, &serializable, opts)?;

    String::from_utf8(output).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_elements_by_tag_and_class() {
        let dom = parse(r#"<p class="dialogue x">a</p><p class="other">b</p><p class="dialogue">c</p>"#);
        let found = descendants_matching(&dom.document, |n| has_tag_and_class(n, "p", "dialogue"));
        assert_eq!(found.len(), 2);
        assert_eq!(text_content(&found[0]), "a");
        assert_eq!(text_content(&found[1]), "c");
    }

    #[test]
    fn test_inner_and_outer_html() {
        let dom = parse(r#"<p class="dialogue"><span class="speaker">Bob</span> hi &amp; bye<br /></p>"#);
        let p = descendants_matching(&dom.document, |n| has_tag_and_class(n, "p", "dialogue"));
        let span = descendants_matching(&p[0], |n| has_tag_and_class(n, "span", "speaker"));

        assert_eq!(
            inner_html(&p[0]).unwrap(),
            r#"<span class="speaker">Bob</span> hi &amp; bye<br>"#
        );
        assert_eq!(outer_html(&span[0]).unwrap(), r#"<span class="speaker">Bob</span>"#);
    }
}
