//! Tree reconstruction from indexed lines.
//!
//! The parser keeps a stack of open containers ordered by indentation. Each
//! entry first closes every frame indented at or beyond it, then lands in
//! whatever container is left on top. Whether an empty `key:` (or a bare `-`)
//! opens a sequence or a mapping is decided by looking at the next entry only.
//!
//! A container is attached to its parent when its frame closes. Siblings can
//! only appear after that happens, so key order matches attach-on-open.

use super::lines::Entry;
use super::scalar::{parse_scalar, unquote};
use crate::error::{ConfigError, Result};
use crate::value::{Mapping, Value};

/// Build a value tree from indexed entries. The root is always a mapping.
pub fn build_tree(entries: &[Entry<'_>]) -> Result<Mapping> {
    let mut parser = StructuralParser::default();
    for (pos, entry) in entries.iter().enumerate() {
        parser.feed(entry, entries.get(pos + 1))?;
    }
    Ok(parser.finish())
}

/// A container that is still accepting children.
enum Node {
    Mapping(Mapping),
    Sequence(Vec<Value>),
}

impl Node {
    /// Containers become nodes; scalars are handed back.
    fn from_value(value: Value) -> std::result::Result<Self, Value> {
        match value {
            Value::Mapping(map) => Ok(Node::Mapping(map)),
            Value::Sequence(items) => Ok(Node::Sequence(items)),
            scalar => Err(scalar),
        }
    }

    fn empty_for(entry: &Entry<'_>, next: Option<&Entry<'_>>) -> Self {
        if opens_sequence(entry, next) {
            Node::Sequence(Vec::new())
        } else {
            Node::Mapping(Mapping::new())
        }
    }

    fn into_value(self) -> Value {
        match self {
            Node::Mapping(map) => Value::Mapping(map),
            Node::Sequence(items) => Value::Sequence(items),
        }
    }
}

/// Where a closed frame goes in its parent.
enum Slot {
    Key(String),
    Item,
}

struct Frame {
    indent: usize,
    node: Node,
    slot: Slot,
}

/// The container that receives the current entry.
enum Parent<'a> {
    Mapping(&'a mut Mapping),
    Sequence(&'a mut Vec<Value>),
}

/// Indentation stack. The virtual root mapping sits below every frame and is
/// never closed.
#[derive(Default)]
struct StructuralParser {
    root: Mapping,
    open: Vec<Frame>,
}

impl StructuralParser {
    fn feed(&mut self, entry: &Entry<'_>, next: Option<&Entry<'_>>) -> Result<()> {
        while self
            .open
            .last()
            .is_some_and(|frame| frame.indent >= entry.indent)
        {
            self.close_frame();
        }

        if entry.is_sequence_item() {
            self.sequence_item(entry, next)
        } else {
            self.mapping_entry(entry, next)
        }
    }

    fn finish(mut self) -> Mapping {
        while !self.open.is_empty() {
            self.close_frame();
        }
        self.root
    }

    fn parent(&mut self) -> Parent<'_> {
        match self.open.last_mut() {
            Some(Frame {
                node: Node::Mapping(map),
                ..
            }) => Parent::Mapping(map),
            Some(Frame {
                node: Node::Sequence(items),
                ..
            }) => Parent::Sequence(items),
            None => Parent::Mapping(&mut self.root),
        }
    }

    fn parent_is_sequence(&mut self) -> bool {
        matches!(self.parent(), Parent::Sequence(_))
    }

    fn attach(&mut self, slot: Slot, value: Value) {
        match (self.parent(), slot) {
            (Parent::Mapping(map), Slot::Key(key)) => {
                map.insert(key, value);
            }
            (Parent::Sequence(items), Slot::Item) => items.push(value),
            _ => unreachable!("frames are opened with a slot matching their parent"),
        }
    }

    fn open_frame(&mut self, indent: usize, node: Node, slot: Slot) {
        self.open.push(Frame { indent, node, slot });
    }

    fn close_frame(&mut self) {
        if let Some(frame) = self.open.pop() {
            self.attach(frame.slot, frame.node.into_value());
        }
    }

    /// `- value`, `- key: value`, or a bare `-` introducing a nested block.
    fn sequence_item(&mut self, entry: &Entry<'_>, next: Option<&Entry<'_>>) -> Result<()> {
        if !self.parent_is_sequence() {
            return Err(ConfigError::structural(
                entry.line,
                format!(
                    "sequence item '{}' is not inside a sequence",
                    entry.content
                ),
            ));
        }

        let remainder = entry.content[1..].trim();
        if remainder.is_empty() {
            let node = Node::empty_for(entry, next);
            self.open_frame(entry.indent, node, Slot::Item);
            return Ok(());
        }

        let item = match split_inline_pair(remainder) {
            Some((key, value)) => {
                let mut single = Mapping::new();
                single.insert(key.trim().to_string(), parse_scalar(value));
                Value::Mapping(single)
            }
            None => parse_scalar(remainder),
        };
        self.attach(Slot::Item, item);
        Ok(())
    }

    /// `key: value` or `key:` introducing a nested block.
    fn mapping_entry(&mut self, entry: &Entry<'_>, next: Option<&Entry<'_>>) -> Result<()> {
        let Some((key, raw_value)) = entry.content.split_once(':') else {
            return Err(ConfigError::structural(
                entry.line,
                format!("expected 'key: value', found '{}'", entry.content),
            ));
        };
        let key = key.trim().to_string();
        let raw_value = raw_value.trim();

        if self.parent_is_sequence() {
            return Err(ConfigError::structural(
                entry.line,
                format!("mapping entry '{}' cannot be placed inside a sequence", key),
            ));
        }

        if raw_value.is_empty() {
            let node = Node::empty_for(entry, next);
            self.open_frame(entry.indent, node, Slot::Key(key));
            return Ok(());
        }

        // Inline arrays stay open so deeper `- item` lines can extend them.
        match Node::from_value(parse_scalar(raw_value)) {
            Ok(node) => self.open_frame(entry.indent, node, Slot::Key(key)),
            Err(scalar) => self.attach(Slot::Key(key), scalar),
        }
        Ok(())
    }
}

/// One line of lookahead: a deeper sequence item means the block is a sequence.
fn opens_sequence(entry: &Entry<'_>, next: Option<&Entry<'_>>) -> bool {
    next.is_some_and(|next| next.indent > entry.indent && next.is_sequence_item())
}

/// Split `key: value` inside a sequence item.
///
/// The separator is the first `:` followed by whitespace or the end of the
/// item, so `- http://host` stays a string. Quoted and bracketed items are
/// always scalars.
fn split_inline_pair(remainder: &str) -> Option<(&str, &str)> {
    if unquote(remainder).is_some() || remainder.starts_with('[') {
        return None;
    }
    let bytes = remainder.as_bytes();
    bytes.iter().enumerate().find_map(|(idx, &byte)| {
        let at_separator = byte == b':'
            && bytes
                .get(idx + 1)
                .is_none_or(|following| following.is_ascii_whitespace());
        at_separator.then(|| (&remainder[..idx], &remainder[idx + 1..]))
    })
}
