//! Converts catalog XML documents into `serde_json::Value` trees.
//!
//! The tree keeps the shape the rest of the crate expects from upstream data:
//! attributes become `@_name` keys, text next to attributes or children becomes
//! `#text`, an element with only text collapses to a string and repeated
//! children with the same name become an array in document order.

use anyhow::{Context, Result};
use quick_xml::events::{BytesStart, BytesText, Event};
use quick_xml::Reader;
use serde_json::{Map, Value};

use crate::errors::parse_context;

pub const ATTRIBUTE_PREFIX: &str = "@_";
pub const TEXT_KEY: &str = "#text";

struct ElementNode {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<(String, Value)>,
    text: String,
}

impl ElementNode {
    fn document() -> Self {
        Self {
            name: String::new(),
            attributes: Vec::new(),
            children: Vec::new(),
            text: String::new(),
        }
    }

    fn open(start: &BytesStart) -> Result<Self> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let mut attributes = Vec::new();

        for attribute in start.attributes() {
            let attribute = attribute.with_context(|| parse_context("XML attribute"))?;
            let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
            let value = attribute
                .unescape_value()
                .with_context(|| parse_context("XML attribute value"))?
                .into_owned();
            attributes.push((key, value));
        }

        Ok(Self {
            name,
            attributes,
            children: Vec::new(),
            text: String::new(),
        })
    }

    fn push_text(&mut self, text: &BytesText) {
        match text.unescape() {
            Ok(unescaped) => self.text.push_str(&unescaped),
            Err(_) => self.text.push_str(&String::from_utf8_lossy(text)),
        }
    }

    fn into_value(self) -> Value {
        if self.attributes.is_empty() && self.children.is_empty() {
            return Value::String(self.text);
        }

        let mut map = Map::new();
        for (key, value) in self.attributes {
            map.insert(format!("{ATTRIBUTE_PREFIX}{key}"), Value::String(value));
        }
        for (name, child) in self.children {
            insert_child(&mut map, name, child);
        }
        if !self.text.is_empty() {
            map.insert(TEXT_KEY.to_string(), Value::String(self.text));
        }
        Value::Object(map)
    }
}

fn insert_child(map: &mut Map<String, Value>, name: String, child: Value) {
    match map.get_mut(&name) {
        None => {
            map.insert(name, child);
        }
        Some(Value::Array(items)) => items.push(child),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, child]);
        }
    }
}

/// Parse a whole XML document; the result is an object keyed by the root element name
pub fn parse_document(xml: &str) -> Result<Value> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack = vec![ElementNode::document()];

    loop {
        let event = reader
            .read_event()
            .with_context(|| format!("{} at byte {}", parse_context("XML document"), reader.buffer_position()))?;

        match event {
            Event::Start(start) => stack.push(ElementNode::open(&start)?),
            Event::Empty(start) => {
                let element = ElementNode::open(&start)?;
                attach(&mut stack, element)?;
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .context("Unbalanced closing tag in XML document")?;
                attach(&mut stack, element)?;
            }
            Event::Text(text) => {
                if let Some(current) = stack.last_mut() {
                    current.push_text(&text);
                }
            }
            Event::CData(data) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(&data));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if stack.len() != 1 {
        anyhow::bail!("XML document ended with {} unclosed element(s)", stack.len() - 1);
    }
    let document = stack.pop().context("XML document stack is empty")?;

    let mut map = Map::new();
    for (name, child) in document.children {
        insert_child(&mut map, name, child);
    }
    Ok(Value::Object(map))
}

fn attach(stack: &mut [ElementNode], element: ElementNode) -> Result<()> {
    let parent = stack
        .last_mut()
        .context("Unbalanced closing tag in XML document")?;
    let name = element.name.clone();
    parent.children.push((name, element.into_value()));
    Ok(())
}

/// The `<item>` entries under the `<items>` root, whether one or many
pub fn item_list(document: &Value) -> Vec<Value> {
    match document.get("items").and_then(|items| items.get("item")) {
        Some(Value::Array(items)) => items.clone(),
        Some(item) => vec![item.clone()],
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_attributes_and_repeated_children() {
        let xml = r#"<?xml version="1.0" encoding="utf-8"?>
            <items total="2">
                <item type="boardgame" id="13">
                    <name type="primary" sortindex="1" value="CATAN"/>
                    <name type="alternate" sortindex="1" value="Catan"/>
                    <minplayers value="3"/>
                </item>
                <item type="boardgame" id="9209">
                    <name type="primary" sortindex="1" value="Ticket to Ride"/>
                </item>
            </items>"#;

        let document = parse_document(xml).unwrap();
        let items = item_list(&document);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["@_id"], json!("13"));
        assert_eq!(items[0]["name"].as_array().map(Vec::len), Some(2));
        assert_eq!(items[0]["minplayers"]["@_value"], json!("3"));
        assert_eq!(items[1]["name"]["@_value"], json!("Ticket to Ride"));
    }

    #[test]
    fn test_text_only_element_collapses_to_string() {
        let xml = "<items><item id=\"1\"><image>https://img/1.jpg</image><description>A&amp;#10;B</description></item></items>";

        let items = item_list(&parse_document(xml).unwrap());

        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["image"], json!("https://img/1.jpg"));
        assert_eq!(items[0]["description"], json!("A&#10;B"));
    }

    #[test]
    fn test_text_next_to_attributes() {
        let document = parse_document("<root><node kind=\"x\">hello</node></root>").unwrap();

        assert_eq!(document["root"]["node"]["@_kind"], json!("x"));
        assert_eq!(document["root"]["node"]["#text"], json!("hello"));
    }

    #[test]
    fn test_empty_items() {
        let document = parse_document("<items total=\"0\" termsofuse=\"x\"/>").unwrap();
        assert!(item_list(&document).is_empty());

        let document = parse_document("<errors><error><message>Invalid</message></error></errors>").unwrap();
        assert!(item_list(&document).is_empty());
    }

    #[test]
    fn test_unclosed_document_is_an_error() {
        assert!(parse_document("<items><item id=\"1\">").is_err());
    }
}
