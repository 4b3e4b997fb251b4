//! Minimal XML document tree for API responses.
//!
//! Responses are parsed once into [`Element`] nodes (tag name, attributes,
//! ordered children) which the structured mode exposes directly and the
//! flattened mode walks recursively.

use paapi_core::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// A parsed XML document.
#[derive(Debug, Clone)]
pub struct Document {
    root: Element,
}

/// An element node: tag name, attributes, and ordered children.
#[derive(Debug, Clone, Default)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

/// A child node of an element.
#[derive(Debug, Clone)]
pub enum Node {
    /// A nested element.
    Element(Element),
    /// A run of character data.
    Text(String),
}

impl Document {
    /// Parse an XML string into a document tree.
    pub fn parse(input: &str) -> Result<Self> {
        let mut reader = Reader::from_str(input);
        reader.config_mut().trim_text(true);

        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => stack.push(element_from_start(&e)?),
                Ok(Event::Empty(e)) => {
                    let el = element_from_start(&e)?;
                    attach(&mut stack, &mut root, el);
                }
                Ok(Event::Text(t)) => {
                    let text = t
                        .unescape()
                        .map_err(|e| Error::unexpected("malformed text node").with_source(e))?
                        .into_owned();
                    if let Some(parent) = stack.last_mut() {
                        if !text.is_empty() {
                            parent.children.push(Node::Text(text));
                        }
                    }
                }
                Ok(Event::CData(t)) => {
                    if let Some(parent) = stack.last_mut() {
                        let text = String::from_utf8_lossy(&t).into_owned();
                        parent.children.push(Node::Text(text));
                    }
                }
                Ok(Event::End(_)) => {
                    let el = stack
                        .pop()
                        .ok_or_else(|| Error::unexpected("unbalanced end tag"))?;
                    attach(&mut stack, &mut root, el);
                }
                Ok(Event::Eof) => break,
                // Declarations, comments, processing instructions.
                Ok(_) => {}
                Err(e) => {
                    return Err(Error::unexpected("malformed response body").with_source(e));
                }
            }
        }

        if !stack.is_empty() {
            return Err(Error::unexpected("unclosed element in response body"));
        }
        let root = root.ok_or_else(|| Error::unexpected("empty response body"))?;
        Ok(Document { root })
    }

    /// The document's root element.
    pub fn root(&self) -> &Element {
        &self.root
    }
}

fn attach(stack: &mut Vec<Element>, root: &mut Option<Element>, el: Element) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(Node::Element(el)),
        None => {
            if root.is_none() {
                *root = Some(el);
            }
        }
    }
}

fn element_from_start(e: &BytesStart) -> Result<Element> {
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|e| Error::unexpected("malformed attribute").with_source(e))?;
        attributes.push((
            String::from_utf8_lossy(attr.key.as_ref()).into_owned(),
            attr.unescape_value()
                .map_err(|e| Error::unexpected("malformed attribute value").with_source(e))?
                .into_owned(),
        ));
    }

    Ok(Element {
        name,
        attributes,
        children: Vec::new(),
    })
}

impl Element {
    /// Tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All attributes, in document order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Value of the named attribute.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// All child nodes, text runs included.
    pub fn nodes(&self) -> &[Node] {
        &self.children
    }

    /// Child elements in document order.
    pub fn children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        })
    }

    /// First child element with the given tag name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children().find(|el| el.name == name)
    }

    /// All child elements with the given tag name.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children().filter(move |el| el.name == name)
    }

    /// Walk a `/` separated path of child tag names.
    ///
    /// At each step the first matching child is taken.
    pub fn find(&self, path: &str) -> Option<&Element> {
        let mut current = self;
        for segment in path.split('/') {
            current = current.child(segment)?;
        }
        Some(current)
    }

    /// Concatenated text content of this element's direct text nodes.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|n| match n {
                Node::Text(t) => Some(t.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ItemLookupResponse xmlns="http://webservices.amazon.com/AWSECommerceService/2011-08-01">
  <Items>
    <Item ASIN="0679722769">
      <ItemAttributes>
        <Title>The Stranger</Title>
        <Author>Albert Camus</Author>
      </ItemAttributes>
    </Item>
    <Item ASIN="B000000000">
      <ItemAttributes>
        <Title>Another &amp; Co.</Title>
      </ItemAttributes>
    </Item>
  </Items>
</ItemLookupResponse>"#;

    #[test]
    fn test_parse_and_navigate() {
        let doc = Document::parse(SAMPLE).unwrap();
        let root = doc.root();
        assert_eq!(root.name(), "ItemLookupResponse");

        let title = root.find("Items/Item/ItemAttributes/Title").unwrap();
        assert_eq!(title.text(), "The Stranger");

        let items: Vec<_> = root
            .child("Items")
            .unwrap()
            .children_named("Item")
            .collect();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].attr("ASIN"), Some("0679722769"));
        assert_eq!(items[1].attr("ASIN"), Some("B000000000"));
    }

    #[test]
    fn test_entities_unescaped() {
        let doc = Document::parse(SAMPLE).unwrap();
        let items = doc.root().child("Items").unwrap();
        let second = items.children_named("Item").nth(1).unwrap();
        assert_eq!(
            second.find("ItemAttributes/Title").unwrap().text(),
            "Another & Co."
        );
    }

    #[test]
    fn test_empty_element() {
        let doc = Document::parse("<a><b/></a>").unwrap();
        let b = doc.root().child("b").unwrap();
        assert_eq!(b.text(), "");
        assert_eq!(b.children().count(), 0);
    }

    #[test]
    fn test_cdata_text() {
        let doc = Document::parse("<a><![CDATA[1 < 2]]></a>").unwrap();
        assert_eq!(doc.root().text(), "1 < 2");
    }

    #[test]
    fn test_malformed_input() {
        assert!(Document::parse("<a><b></a>").is_err());
        assert!(Document::parse("").is_err());
        assert!(Document::parse("<a>").is_err());
    }
}
