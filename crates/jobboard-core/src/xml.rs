//! Adapter from XML response bodies to the generic value shape used by the
//! extractor.
//!
//! Every element named `item` becomes one record. The records are placed
//! under `response.body.items.item`, the highest priority location of
//! [`crate::extract::ITEM_PATHS`], so XML and JSON sources look the same to
//! the rest of the pipeline.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use serde_json::{Map, Value, json};
use tracing::debug;

const ITEM_ELEMENT: &str = "item";

#[derive(Debug, Default)]
struct Element {
    name: String,
    local_name: String,
    children: Vec<Node>,
}

#[derive(Debug)]
enum Node {
    Element(Element),
    Text(String),
}

impl Element {
    fn from_start(start: &BytesStart<'_>) -> Self {
        Self {
            name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
            local_name: String::from_utf8_lossy(start.local_name().as_ref()).into_owned(),
            children: Vec::new(),
        }
    }

    fn text_content(&self) -> String {
        let mut text = String::new();
        self.push_text(&mut text);
        text
    }

    fn push_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(t),
                Node::Element(e) => e.push_text(out),
            }
        }
    }

    fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|child| match child {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// Build the record for an `item` element: immediate child name to text.
    fn to_record(&self) -> Value {
        let mut record = Map::new();
        for child in self.child_elements() {
            record.insert(child.name.clone(), Value::String(child.text_content()));
        }
        Value::Object(record)
    }

    /// Collect records for every `item` element below and including `self`,
    /// in document order.
    fn collect_items(&self, items: &mut Vec<Value>) {
        if self.local_name == ITEM_ELEMENT {
            items.push(self.to_record());
        }
        for child in self.child_elements() {
            child.collect_items(items);
        }
    }
}

/// Parse `xml` into its root element. `None` for anything that is not a
/// single well-formed element tree.
fn parse_document(xml: &str) -> Option<Element> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(e) => {
                debug!(
                    "XML parse error at position {}: {}",
                    reader.buffer_position(),
                    e
                );
                return None;
            }
        };

        match event {
            Event::Start(start) => {
                if root.is_some() {
                    return None;
                }
                stack.push(Element::from_start(&start));
            }
            Event::Empty(start) => {
                let element = Element::from_start(&start);
                match stack.last_mut() {
                    Some(parent) => parent.children.push(Node::Element(element)),
                    None if root.is_none() => root = Some(element),
                    None => return None,
                }
            }
            Event::End(_) => {
                let element = stack.pop()?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(Node::Element(element)),
                    None => root = Some(element),
                }
            }
            Event::Text(text) => {
                let text = text.unescape().ok()?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(Node::Text(text.into_owned())),
                    None if text.trim().is_empty() => {}
                    None => return None,
                }
            }
            Event::CData(cdata) => {
                let text = String::from_utf8_lossy(&cdata.into_inner()).into_owned();
                stack.last_mut()?.children.push(Node::Text(text));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return None;
    }
    root
}

/// Convert an XML document into `{"response":{"body":{"items":{"item":[..]}}}}`.
///
/// Malformed input produces the same envelope with an empty item list.
pub fn parse_xml_items(xml: &str) -> Value {
    let mut items = Vec::new();
    match parse_document(xml) {
        Some(root) => root.collect_items(&mut items),
        None => debug!("XML document is malformed, no items extracted"),
    }

    json!({ "response": { "body": { "items": { "item": items } } } })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract_items;

    fn items_of(value: &Value) -> &Vec<Value> {
        value["response"]["body"]["items"]["item"]
            .as_array()
            .expect("item list")
    }

    #[test]
    fn test_parse_xml_items_basic() {
        let xml = "<items><item><title>T</title><agency>A</agency></item></items>";
        let parsed = parse_xml_items(xml);
        assert_eq!(
            items_of(&parsed),
            &vec![json!({"title": "T", "agency": "A"})]
        );
    }

    #[test]
    fn test_parse_xml_items_government_envelope() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<response>
  <header><resultCode>00</resultCode></header>
  <body>
    <items>
      <item><title>First</title><orgNm>Org</orgNm><endDate/></item>
      <item><title><![CDATA[Second & more]]></title><area>Seoul &amp; Busan</area></item>
    </items>
    <totalCount>2</totalCount>
  </body>
</response>"#;
        let parsed = parse_xml_items(xml);
        let items = items_of(&parsed);
        assert_eq!(items.len(), 2);
        assert_eq!(
            items[0],
            json!({"title": "First", "orgNm": "Org", "endDate": ""})
        );
        assert_eq!(
            items[1],
            json!({"title": "Second & more", "area": "Seoul & Busan"})
        );
    }

    #[test]
    fn test_parse_xml_items_text_content_is_concatenated() {
        let xml = "<list><item><desc>a<b>b</b>c</desc></item></list>";
        let parsed = parse_xml_items(xml);
        assert_eq!(items_of(&parsed), &vec![json!({"desc": "abc"})]);
    }

    #[test]
    fn test_parse_xml_items_repeated_child_keeps_last_value() {
        let xml = "<r><item><tag>one</tag><title>T</title><tag>two</tag></item></r>";
        let parsed = parse_xml_items(xml);
        let record = items_of(&parsed)[0].as_object().unwrap().clone();
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["tag", "title"]);
        assert_eq!(record["tag"], json!("two"));
    }

    #[test]
    fn test_parse_xml_items_nested_items_in_document_order() {
        let xml = "<r><item><name>outer</name><item><name>inner</name></item></item></r>";
        let parsed = parse_xml_items(xml);
        let items = items_of(&parsed);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["name"], json!("outer"));
        assert_eq!(items[1], json!({"name": "inner"}));
    }

    #[test]
    fn test_parse_xml_items_malformed_yields_empty_list() {
        for xml in [
            "<items><item><title>T</title></items>",
            "<items><item>",
            "not xml at all",
            "<a/><b/>",
            "",
        ] {
            let parsed = parse_xml_items(xml);
            assert!(items_of(&parsed).is_empty(), "input {xml:?}");
            assert!(extract_items(&parsed).is_empty());
        }
    }

    #[test]
    fn test_parse_xml_items_feeds_extractor() {
        let xml = "<items><item><title>T</title></item></items>";
        let items = extract_items(&parse_xml_items(xml));
        assert_eq!(items, vec![json!({"title": "T"})]);
    }
}
