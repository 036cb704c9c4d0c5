use std::collections::BTreeMap;

/// Node label. Only `Name` nodes carry document content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    Name(String),
    Comment,
}

/// One node of the tree.
///
/// `text` is the content before the first child, `tail` the content after
/// this node's end tag, up to the next sibling (it belongs to the parent).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub label: Label,
    pub attributes: BTreeMap<String, String>,
    pub text: Option<String>,
    pub tail: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_label(Label::Name(name.into()))
    }

    pub fn comment(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::with_label(Label::Comment)
        }
    }

    fn with_label(label: Label) -> Self {
        Self {
            label,
            attributes: BTreeMap::new(),
            text: None,
            tail: None,
            children: Vec::new(),
        }
    }

    /// Element name, `None` for synthetic nodes.
    pub fn name(&self) -> Option<&str> {
        match &self.label {
            Label::Name(n) => Some(n),
            _ => None,
        }
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_tail(mut self, tail: impl Into<String>) -> Self {
        self.tail = Some(tail.into());
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }
}
