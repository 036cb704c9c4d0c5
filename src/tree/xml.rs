//! Build an [`Element`] tree from XML text.
//!
//! Whitespace is kept as-is; comments become `Label::Comment` nodes so text
//! after them lands in their tail, like in the registry files.

use crate::tree::element::Element;
use crate::{Error, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::trace;

/// Parse a whole document and return its root element.
pub fn parse_xml(input: &str) -> Result<Element> {
    let mut reader = Reader::from_str(input);
    reader.config_mut().trim_text(false);

    // Open elements, innermost last.
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = reader.read_event().map_err(|e| {
            Error::xml(format!(
                "XML parse error at position {}: {e}",
                reader.error_position()
            ))
        })?;

        match event {
            Event::Start(ref e) => {
                stack.push(start_element(e)?);
            }
            Event::Empty(ref e) => {
                let element = start_element(e)?;
                close(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| Error::xml("unexpected end tag"))?;
                close(&mut stack, &mut root, element)?;
            }
            Event::Text(ref e) => {
                let text = e
                    .unescape()
                    .map_err(|e| Error::xml(format!("invalid text: {e}")))?;
                append_text(&mut stack, &text);
            }
            Event::CData(e) => {
                let bytes = e.into_inner();
                append_text(&mut stack, &String::from_utf8_lossy(&bytes));
            }
            Event::Comment(ref e) => {
                if let Some(parent) = stack.last_mut() {
                    let text = String::from_utf8_lossy(e).into_owned();
                    parent.children.push(Element::comment(text));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(Error::xml(format!(
            "unexpected end of document, {} unclosed element(s)",
            stack.len()
        )));
    }
    root.ok_or_else(|| Error::xml("document has no root element"))
}

fn start_element(e: &BytesStart<'_>) -> Result<Element> {
    let name = std::str::from_utf8(e.name().as_ref())
        .map_err(|err| Error::xml(format!("invalid tag name: {err}")))?
        .to_string();

    let mut element = Element::new(name);
    for attr in e.attributes() {
        let attr = attr.map_err(|err| Error::xml(format!("invalid attribute: {err}")))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|err| Error::xml(format!("invalid attribute value: {err}")))?
            .into_owned();
        element.attributes.insert(key, value);
    }
    trace!(name = ?element.name(), "open element");
    Ok(element)
}

/// Attach a finished element to its parent, or make it the root.
fn close(stack: &mut Vec<Element>, root: &mut Option<Element>, element: Element) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => return Err(Error::xml("multiple root elements")),
    }
    Ok(())
}

/// Text goes to the open element, or to the tail of its last child.
/// Text outside the root element is dropped.
fn append_text(stack: &mut [Element], text: &str) {
    let Some(current) = stack.last_mut() else {
        return;
    };
    let slot = match current.children.last_mut() {
        Some(child) => &mut child.tail,
        None => &mut current.text,
    };
    slot.get_or_insert_with(String::new).push_str(text);
}
