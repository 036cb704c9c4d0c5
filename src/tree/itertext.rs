//! Depth-first text extraction.
//!
//! For an element the fragments come in document order:
//! text, then for each child: (child's fragments, child's tail).
//!
//! - Children whose name is in `ignore` are dropped together with their tail.
//! - Comment nodes contribute nothing of their own, but the
//!   tail after them is parent content and is kept.
//! - The start element's own tail is not part of its text.
//! - Empty fragments are skipped.

use crate::tree::element::{Element, Label};
use std::collections::HashSet;

enum Step<'a> {
    Enter(&'a Element),
    Text(&'a str),
}

/// Lazy pre-order iterator over the text fragments under `root`.
pub fn itertext<'a>(root: &'a Element, ignore: &'a HashSet<String>) -> IterText<'a> {
    IterText {
        stack: vec![Step::Enter(root)],
        ignore,
    }
}

/// Iterator returned by [`itertext`].
pub struct IterText<'a> {
    stack: Vec<Step<'a>>,
    ignore: &'a HashSet<String>,
}

impl<'a> IterText<'a> {
    fn is_ignored(&self, e: &Element) -> bool {
        matches!(&e.label, Label::Name(n) if self.ignore.contains(n))
    }
}

impl<'a> Iterator for IterText<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while let Some(step) = self.stack.pop() {
            let e = match step {
                Step::Text(s) if !s.is_empty() => return Some(s),
                Step::Text(_) => continue,
                Step::Enter(e) => e,
            };

            if e.name().is_none() {
                continue;
            }

            // Reverse push so the first child is popped first, before its tail.
            for child in e.children.iter().rev() {
                if self.is_ignored(child) {
                    continue;
                }
                if let Some(tail) = &child.tail {
                    self.stack.push(Step::Text(tail.as_str()));
                }
                self.stack.push(Step::Enter(child));
            }

            if let Some(text) = e.text.as_deref().filter(|t| !t.is_empty()) {
                return Some(text);
            }
        }
        None
    }
}
