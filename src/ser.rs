//! MiniYaml serialization.
//!
//! This module provides the [`Serializer`] that turns a tree back into
//! MiniYaml lines.
//!
//! ## Overview
//!
//! Output is canonical rather than a copy of the input:
//!
//! - **Tab indentation**: one tab per level, whatever the source used
//! - **Escaped values**: every `#` in a value is written as `\#` so it is not
//!   read back as a comment
//! - **Pre-order**: each node is followed by its children
//!
//! Re-parsing the output with comments preserved yields an equal tree
//! (keys, values, comments and structure) as long as the tree has:
//!
//! - no node with a value but no key, since ` value` is read back as a key
//! - no empty comment, since empty comments are not written
//! - no value with leading or trailing whitespace, since guards are not
//!   written and the parser trims values
//!
//! A tab-indented document read without guards survives unchanged.
//!
//! ## Usage
//!
//! ```rust
//! use miniyaml::{to_string, Node};
//!
//! let nodes = vec![Node::with_children(
//!     "Game",
//!     None,
//!     vec![Node::scalar("Protocol", "2"), Node::scalar("Map", "a#b")],
//! )];
//!
//! assert_eq!(to_string(&nodes), "Game:\n\tProtocol: 2\n\tMap: a\\#b");
//! ```

use crate::{Content, Node};

/// Collects canonical MiniYaml lines for nodes and contents.
///
/// Lines are produced without a terminator; [`crate::to_string`] joins them.
#[derive(Debug, Default)]
pub struct Serializer {
    lines: Vec<String>,
}

impl Serializer {
    pub fn new() -> Self {
        Serializer::default()
    }

    /// Writes `nodes` at `depth`, each followed by its subtree.
    pub fn write_nodes(&mut self, nodes: &[Node], depth: usize) {
        for node in nodes {
            self.write_node(node, depth);
        }
    }

    /// Writes one node at `depth`, followed by its subtree.
    pub fn write_node(&mut self, node: &Node, depth: usize) {
        self.write_content(
            &node.value,
            node.key.as_deref(),
            node.comment.as_deref(),
            depth,
        );
    }

    /// Writes the line for `content` under `key` at `depth`, then its
    /// children one level deeper.
    pub fn write_content(
        &mut self,
        content: &Content,
        key: Option<&str>,
        comment: Option<&str>,
        depth: usize,
    ) {
        let mut line = "\t".repeat(depth);
        write_line_body(&mut line, key, content.as_str(), comment);
        self.lines.push(line);

        self.write_nodes(&content.children, depth + 1);
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

/// Appends `key: value #comment` to `output`, omitting absent parts.
fn write_line_body(output: &mut String, key: Option<&str>, value: Option<&str>, comment: Option<&str>) {
    let key = key.filter(|k| !k.is_empty());
    let value = value.filter(|v| !v.is_empty());
    let comment = comment.filter(|c| !c.is_empty());

    if let Some(key) = key {
        output.push_str(key);
        output.push(':');
    }

    if let Some(value) = value {
        output.push(' ');
        write_escaped(output, value);
    }

    if let Some(comment) = comment {
        if key.is_some() || value.is_some() {
            output.push(' ');
        }
        output.push('#');
        output.push_str(comment);
    }
}

#[inline]
fn write_escaped(output: &mut String, value: &str) {
    for ch in value.chars() {
        if ch == '#' {
            output.push_str("\\#");
        } else {
            output.push(ch);
        }
    }
}

impl Content {
    /// Serializes this content as the value of `key`, with an optional
    /// trailing comment, followed by its children.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use miniyaml::{Content, Node};
    ///
    /// let content = Content::new(Some("1".into()), vec![Node::scalar("B", "2")]);
    /// assert_eq!(content.to_lines(Some("A"), Some("note")), ["A: 1 #note", "\tB: 2"]);
    /// ```
    #[must_use]
    pub fn to_lines(&self, key: Option<&str>, comment: Option<&str>) -> Vec<String> {
        let mut serializer = Serializer::new();
        serializer.write_content(self, key, comment, 0);
        serializer.into_lines()
    }
}
