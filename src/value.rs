//! The MiniYaml document model.
//!
//! This module provides the owned tree produced by the parser and consumed
//! by the serializer:
//!
//! - [`Node`]: one retained line, with an optional key, a [`Content`]
//!   payload, an optional trailing comment and its [`SourceLocation`]
//! - [`Content`]: a scalar value plus the ordered child nodes below it
//! - [`Document`]: the top-level node sequence of a parse
//!
//! Every parent owns its children outright; there are no back references,
//! so the whole tree is `Clone`, `Send` and `Sync`.
//!
//! ## Building Trees
//!
//! ```rust
//! use miniyaml::{Content, Node};
//!
//! let game = Node::with_children(
//!     "Game",
//!     None,
//!     vec![Node::scalar("Protocol", "2"), Node::scalar("Map", "abc123")],
//! );
//!
//! assert_eq!(game.key.as_deref(), Some("Game"));
//! assert_eq!(game.value.children.len(), 2);
//! assert_eq!(game.value.children[0].value.as_str(), Some("2"));
//! ```
//!
//! ## Equality
//!
//! Source locations only exist for diagnostics, so two nodes compare equal
//! whenever their keys, contents and comments match, wherever they were read
//! from.
//!
//! ```rust
//! use miniyaml::{Node, SourceLocation};
//!
//! let parsed = Node::scalar("A", "1").with_location(SourceLocation::new("a.yaml", 4));
//! assert_eq!(parsed, Node::scalar("A", "1"));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// The top-level node sequence produced by a parse.
pub type Document = Vec<Node>;

/// Where a node was read from: a source identifier and a 1-based line number.
///
/// The source identifier is shared between every node of one parse.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub filename: Arc<str>,
    pub line: usize,
}

impl SourceLocation {
    /// Creates a location for `line` (1-based) of `filename`.
    #[must_use]
    pub fn new(filename: impl Into<Arc<str>>, line: usize) -> Self {
        SourceLocation {
            filename: filename.into(),
            line,
        }
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        SourceLocation::new("", 0)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.filename, self.line)
    }
}

/// The recursive payload of a node: its own scalar and its children.
///
/// An empty `children` vector denotes a leaf. Child order is document order
/// and is preserved through parsing, cloning and serialization.
///
/// # Examples
///
/// ```rust
/// use miniyaml::{Content, Node};
///
/// let leaf = Content::from("1");
/// assert!(leaf.is_leaf());
///
/// let root = Content::from_nodes(vec![Node::new("A", leaf.clone())]);
/// assert_eq!(root.value, None);
/// assert_eq!(root.children[0].value, leaf);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Content {
    pub value: Option<String>,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Content {
    /// Creates content with an optional scalar and the given children.
    #[must_use]
    pub fn new(value: Option<String>, children: Vec<Node>) -> Self {
        Content { value, children }
    }

    /// Creates un-valued content holding `children`, as found at the root of
    /// a document.
    #[must_use]
    pub fn from_nodes(children: Vec<Node>) -> Self {
        Content {
            value: None,
            children,
        }
    }

    /// Returns the scalar value, if this content has one.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Returns `true` if this content has no children.
    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the first direct child carrying `key`.
    ///
    /// Unlike the dictionary projection this does not check for duplicates.
    #[must_use]
    pub fn child(&self, key: &str) -> Option<&Node> {
        self.children
            .iter()
            .find(|node| node.key.as_deref() == Some(key))
    }
}

impl From<&str> for Content {
    fn from(value: &str) -> Self {
        Content::new(Some(value.to_string()), Vec::new())
    }
}

impl From<String> for Content {
    fn from(value: String) -> Self {
        Content::new(Some(value), Vec::new())
    }
}

impl From<Vec<Node>> for Content {
    fn from(children: Vec<Node>) -> Self {
        Content::from_nodes(children)
    }
}

/// One structural element of a document, corresponding to one retained line.
///
/// `key` is absent for comment-only and blank lines, which are only kept
/// when parsing with comment preservation enabled. `comment` holds the raw
/// text after the `#` marker.
#[derive(Clone, Debug, Eq, Default, Serialize, Deserialize)]
pub struct Node {
    pub key: Option<String>,
    pub value: Content,
    pub comment: Option<String>,
    #[serde(default)]
    pub location: SourceLocation,
}

impl Node {
    /// Creates a keyed node with the given content.
    #[must_use]
    pub fn new(key: impl Into<String>, value: Content) -> Self {
        Node {
            key: Some(key.into()),
            value,
            comment: None,
            location: SourceLocation::default(),
        }
    }

    /// Creates a keyed leaf node holding a scalar value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use miniyaml::Node;
    ///
    /// let node = Node::scalar("Mod", "cnc");
    /// assert_eq!(node.value.as_str(), Some("cnc"));
    /// assert!(node.value.is_leaf());
    /// ```
    #[must_use]
    pub fn scalar(key: impl Into<String>, value: impl Into<String>) -> Self {
        Node::new(key, Content::from(value.into()))
    }

    /// Creates a keyed node with an optional scalar and child nodes.
    #[must_use]
    pub fn with_children(
        key: impl Into<String>,
        value: Option<String>,
        children: Vec<Node>,
    ) -> Self {
        Node::new(key, Content::new(value, children))
    }

    /// Creates a node carrying nothing but a comment.
    #[must_use]
    pub fn comment_only(comment: impl Into<String>) -> Self {
        Node {
            comment: Some(comment.into()),
            ..Node::default()
        }
    }

    /// Attaches a trailing comment to this node.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Records where this node was read from.
    #[must_use]
    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = location;
        self
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.value == other.value && self.comment == other.comment
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{YamlNode: {} @ {}}}",
            self.key.as_deref().unwrap_or_default(),
            self.location
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_location() {
        let a = Node::scalar("Map", "abc123").with_location(SourceLocation::new("a", 1));
        let b = Node::scalar("Map", "abc123").with_location(SourceLocation::new("b", 9));
        assert_eq!(a, b);
        assert_ne!(a, b.clone().with_comment("x"));
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Content::from_nodes(vec![Node::with_children(
            "Game",
            None,
            vec![Node::scalar("Protocol", "2")],
        )]);

        let mut copy = original.clone();
        copy.children[0].value.children.push(Node::scalar("Map", "abc"));
        copy.children[0].value.children[0].value.value = Some("3".to_string());

        assert_eq!(original.children[0].value.children.len(), 1);
        assert_eq!(
            original.children[0].value.children[0].value.as_str(),
            Some("2")
        );
        assert_ne!(original, copy);
    }

    #[test]
    fn test_display() {
        let node = Node::scalar("Game", "x").with_location(SourceLocation::new("ping.yaml", 3));
        assert_eq!(node.to_string(), "{YamlNode: Game @ ping.yaml:3}");
        assert_eq!(SourceLocation::new("f", 12).to_string(), "f:12");
    }

    #[test]
    fn test_child_lookup() {
        let content = Content::from_nodes(vec![
            Node::comment_only(" header"),
            Node::scalar("A", "1"),
            Node::scalar("A", "2"),
        ]);
        assert_eq!(
            content.child("A").and_then(|n| n.value.as_str()),
            Some("1")
        );
        assert!(content.child("B").is_none());
    }

    #[test]
    fn test_json_dump_keeps_structure() {
        let node = Node::with_children("Game", None, vec![Node::scalar("Mod", "cnc")]);
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["key"], "Game");
        assert_eq!(json["value"]["children"][0]["value"]["value"], "cnc");

        let back: Node = serde_json::from_value(json).unwrap();
        assert_eq!(back, node);
    }
}
