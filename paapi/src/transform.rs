//! Flattened response transformation.
//!
//! The structured mode hands back the [`Document`] itself; this module
//! implements the other variant, a recursive conversion into plain
//! mapping/sequence values.

use crate::xml::{Document, Element};
use serde_json::{Map, Value};

/// Recursively flatten a document into a plain value tree.
///
/// Leaf elements become strings of their text content. Elements with
/// children become objects keyed by child tag name, and siblings sharing a
/// tag collapse into an array, at every depth. Attributes are dropped in
/// this mode.
pub fn flatten(doc: &Document) -> Value {
    element_value(doc.root())
}

fn element_value(el: &Element) -> Value {
    if el.children().next().is_none() {
        return Value::String(el.text());
    }

    let mut map = Map::new();
    for child in el.children() {
        let value = element_value(child);
        match map.get_mut(child.name()) {
            None => {
                map.insert(child.name().to_string(), value);
            }
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
        }
    }

    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn flatten_str(input: &str) -> Value {
        flatten(&Document::parse(input).unwrap())
    }

    #[test]
    fn test_leaf_becomes_string() {
        assert_eq!(flatten_str("<Title>The Stranger</Title>"), json!("The Stranger"));
    }

    #[test]
    fn test_nested_mapping() {
        let value = flatten_str(
            "<Item><ItemAttributes><Title>The Stranger</Title><Author>Albert Camus</Author></ItemAttributes></Item>",
        );
        assert_eq!(
            value,
            json!({"ItemAttributes": {"Title": "The Stranger", "Author": "Albert Camus"}})
        );
    }

    #[test]
    fn test_repeated_tag_collapses_into_sequence() {
        let value = flatten_str("<Items><Item>a</Item><Item>b</Item></Items>");
        assert_eq!(value, json!({"Item": ["a", "b"]}));
    }

    #[test]
    fn test_single_occurrence_stays_plain() {
        // One occurrence is indistinguishable from a non-repeating field, so
        // it stays a plain value rather than a one-element sequence.
        let value = flatten_str("<Items><Item>a</Item></Items>");
        assert_eq!(value, json!({"Item": "a"}));
    }

    #[test]
    fn test_repeats_collapse_at_every_depth() {
        let value = flatten_str(
            "<R><Items><Item><Author>a</Author><Author>b</Author></Item><Item><Author>c</Author></Item></Items></R>",
        );
        assert_eq!(
            value,
            json!({"Items": {"Item": [{"Author": ["a", "b"]}, {"Author": "c"}]}})
        );
    }

    #[test]
    fn test_three_repeats() {
        let value = flatten_str("<Items><Item>a</Item><Item>b</Item><Item>c</Item></Items>");
        assert_eq!(value, json!({"Item": ["a", "b", "c"]}));
    }

    #[test]
    fn test_attributes_dropped() {
        let value = flatten_str(r#"<Item ASIN="0679722769"><Title>The Stranger</Title></Item>"#);
        assert_eq!(value, json!({"Title": "The Stranger"}));
    }

    #[test]
    fn test_empty_leaf_is_empty_string() {
        let value = flatten_str("<Item><Title/></Item>");
        assert_eq!(value, json!({"Title": ""}));
    }
}
