//! MiniYaml parsing.
//!
//! This module turns decomposed lines into a [`Document`].
//!
//! ## Overview
//!
//! - **Single pass**: every line is visited once, with no backtracking
//! - **Level stack**: one open sibling list per indentation level, so a line
//!   at depth `d` closes every deeper level and becomes a sibling at `d`
//! - **Fail fast**: a line that skips a level aborts the whole parse with a
//!   location-tagged [`Error::BadIndent`]
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use miniyaml::from_str;
//!
//! let nodes = from_str("A:\nB:\n\tC: 1\nD:\n").unwrap();
//! let keys: Vec<_> = nodes.iter().filter_map(|n| n.key.as_deref()).collect();
//! assert_eq!(keys, ["A", "B", "D"]);
//! assert_eq!(nodes[1].value.children[0].value.as_str(), Some("1"));
//! ```
//!
//! ## Incremental Building
//!
//! [`TreeBuilder`] accepts one line at a time, which lets callers feed lines
//! as they arrive from a stream:
//!
//! ```rust
//! use miniyaml::{ParseOptions, SourceLocation, TreeBuilder};
//!
//! let mut builder = TreeBuilder::new(&ParseOptions::new());
//! builder.push_line("Game:", SourceLocation::new("ping", 1)).unwrap();
//! builder.push_line("\tMod: cnc", SourceLocation::new("ping", 2)).unwrap();
//! let nodes = builder.finish();
//! assert_eq!(nodes[0].value.children[0].key.as_deref(), Some("Mod"));
//! ```

use crate::line::{self, LineParts, SourceLine};
use crate::{Content, Document, Error, Node, ParseOptions, Result, SourceLocation};
use tracing::{debug, trace};

/// Assembles nodes into a tree from lines given in document order.
///
/// `levels[0]` is the top-level sibling list and `levels[i + 1]` holds the
/// children of the last node in `levels[i]`. Children are attached to their
/// parent when their level is closed.
#[derive(Debug)]
pub struct TreeBuilder {
    levels: Vec<Vec<Node>>,
    keep_comments: bool,
    lines: usize,
}

impl TreeBuilder {
    pub fn new(options: &ParseOptions) -> Self {
        TreeBuilder {
            levels: vec![Vec::new()],
            keep_comments: !options.discard_comments_and_whitespace,
            lines: 0,
        }
    }

    /// Decomposes and inserts one raw line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadIndent`] if the line is indented more than one
    /// level past the deepest open level.
    pub fn push_line(&mut self, text: &str, location: SourceLocation) -> Result<()> {
        // An empty line has no indentation to check and never closes a block.
        if text.is_empty() && !self.keep_comments {
            self.lines += 1;
            return Ok(());
        }

        let parts = line::decompose(text, self.keep_comments);
        self.push_parts(parts, location)
    }

    /// Inserts an already decomposed line.
    ///
    /// The indentation check and the closing of deeper levels apply to every
    /// line. Only afterwards is a keyless line dropped when comments are
    /// discarded, so a column-0 comment still ends the blocks above it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadIndent`] if `parts.depth` skips a level.
    pub fn push_parts(&mut self, parts: LineParts<'_>, location: SourceLocation) -> Result<()> {
        self.lines += 1;
        if parts.depth >= self.levels.len() {
            return Err(Error::bad_indent(location));
        }

        self.close_levels(parts.depth + 1);
        if parts.key.is_none() && !self.keep_comments {
            return Ok(());
        }

        let node = Node {
            key: parts.key.map(str::to_string),
            value: Content::new(parts.value.map(|v| v.into_owned()), Vec::new()),
            comment: parts.comment.map(str::to_string),
            location,
        };
        trace!(depth = parts.depth, %node, "node");

        if let Some(siblings) = self.levels.last_mut() {
            siblings.push(node);
        }
        self.levels.push(Vec::new());
        Ok(())
    }

    /// Closes all open levels and returns the top-level nodes.
    pub fn finish(mut self) -> Document {
        self.close_levels(1);
        let nodes = self.levels.pop().unwrap_or_default();
        debug!(lines = self.lines, top_level = nodes.len(), "parsed miniyaml");
        nodes
    }

    /// Pops levels until `height` remain, attaching each popped list to the
    /// last node of the level below it.
    fn close_levels(&mut self, height: usize) {
        while self.levels.len() > height {
            let Some(children) = self.levels.pop() else {
                break;
            };

            let parent = self.levels.last_mut().and_then(|level| level.last_mut());
            debug_assert!(
                parent.is_some() || children.is_empty(),
                "open level without a parent node"
            );
            if let Some(parent) = parent {
                parent.value.children = children;
            }
        }
    }
}

/// Builds a document from already split source lines.
///
/// # Errors
///
/// Returns [`Error::BadIndent`] tagged with the offending line's location.
pub fn from_source_lines<'a, I>(lines: I, options: &ParseOptions) -> Result<Document>
where
    I: IntoIterator<Item = SourceLine<'a>>,
{
    let mut builder = TreeBuilder::new(options);
    for line in lines {
        builder.push_line(line.text, line.location)?;
    }
    Ok(builder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::split_lines;

    fn parse(text: &str, options: &ParseOptions) -> Result<Document> {
        from_source_lines(split_lines(text, options.source.clone()), options)
    }

    fn keys(nodes: &[Node]) -> Vec<&str> {
        nodes.iter().filter_map(|n| n.key.as_deref()).collect()
    }

    #[test]
    fn test_nested_blocks() {
        let text = "A:\n\tB:\n\t\tC: 1\n\tD: 2\nE: 3";
        let nodes = parse(text, &ParseOptions::new()).unwrap();

        assert_eq!(keys(&nodes), ["A", "E"]);
        let a = &nodes[0].value;
        assert_eq!(keys(&a.children), ["B", "D"]);
        assert_eq!(keys(&a.children[0].value.children), ["C"]);
        assert_eq!(a.children[1].value.as_str(), Some("2"));
        assert_eq!(nodes[1].location.line, 5);
    }

    #[test]
    fn test_closing_several_levels_at_once() {
        let text = "A:\n\tB:\n\t\tC:\n\t\t\tD: 1\nE:";
        let nodes = parse(text, &ParseOptions::new()).unwrap();
        assert_eq!(keys(&nodes), ["A", "E"]);
        let c = &nodes[0].value.children[0].value.children[0];
        assert_eq!(c.value.children[0].value.as_str(), Some("1"));
        assert!(nodes[1].value.is_leaf());
    }

    #[test]
    fn test_bad_indent_on_first_line() {
        let err = parse("\tA: 1", &ParseOptions::new()).unwrap_err();
        assert!(matches!(err, Error::BadIndent { ref location } if location.line == 1));
    }

    #[test]
    fn test_bad_indent_skipping_a_level() {
        let text = "A:\n\tB:\n\t\t\t\tC: 1";
        let err = parse(text, &ParseOptions::new().with_source("deep.yaml")).unwrap_err();
        assert_eq!(err.to_string(), "Bad indent in miniyaml at deep.yaml:3");
    }

    #[test]
    fn test_discarded_comment_closes_blocks() {
        let text = "A:\n\tB: 1\n# between\nC: 2";
        let nodes = parse(text, &ParseOptions::new()).unwrap();
        assert_eq!(keys(&nodes), ["A", "C"]);
        assert_eq!(keys(&nodes[0].value.children), ["B"]);

        let text = "A:\n\tB:\n# between\n\t\tC: 1";
        let err = parse(text, &ParseOptions::new()).unwrap_err();
        assert!(matches!(err, Error::BadIndent { ref location } if location.line == 4));
    }

    #[test]
    fn test_discarded_comment_is_indent_checked() {
        let text = "A:\n\t\t\t# deeply indented remark\n\tB: 1";
        let err = parse(text, &ParseOptions::new()).unwrap_err();
        assert!(matches!(err, Error::BadIndent { ref location } if location.line == 2));
    }

    #[test]
    fn test_empty_lines_leave_blocks_open() {
        let text = "A:\n\tB: 1\n\n\tC: 2";
        let nodes = parse(text, &ParseOptions::new()).unwrap();
        assert_eq!(keys(&nodes), ["A"]);
        assert_eq!(keys(&nodes[0].value.children), ["B", "C"]);
    }

    #[test]
    fn test_whitespace_only_line_is_indent_checked() {
        let err = parse("A:\n\t\t\n\tB: 1", &ParseOptions::new()).unwrap_err();
        assert!(matches!(err, Error::BadIndent { ref location } if location.line == 2));

        let nodes = parse("A:\n\tB:\n\t\n\t\tC: 1", &ParseOptions::new());
        assert!(nodes.is_err());
    }

    #[test]
    fn test_preserved_comment_lines_become_nodes() {
        let text = "A:\n\t# inner\n\tB: 1 #trailing";
        let nodes = parse(text, &ParseOptions::preserving()).unwrap();
        let children = &nodes[0].value.children;
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].key, None);
        assert_eq!(children[0].comment.as_deref(), Some(" inner"));
        assert_eq!(children[1].comment.as_deref(), Some("trailing"));
    }

    #[test]
    fn test_preserved_blank_line_closes_blocks() {
        let text = "A:\n\tB: 1\n\nC: 2";
        let nodes = parse(text, &ParseOptions::preserving()).unwrap();
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[1], Node::default());
        assert_eq!(nodes[1].location.line, 3);
        assert_eq!(keys(&nodes[0].value.children), ["B"]);
    }

    #[test]
    fn test_duplicate_siblings_are_kept() {
        let nodes = parse("A: 1\nA: 2", &ParseOptions::new()).unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[1].value.as_str(), Some("2"));
    }

    #[test]
    fn test_builder_can_be_fed_incrementally() {
        let options = ParseOptions::new();
        let mut builder = TreeBuilder::new(&options);
        builder
            .push_line("Handshake:", SourceLocation::new("net", 1))
            .unwrap();
        builder
            .push_line("\tMod: cnc", SourceLocation::new("net", 2))
            .unwrap();
        assert!(builder
            .push_line("\t\t\tBad: x", SourceLocation::new("net", 3))
            .is_err());
        builder
            .push_line("\tVersion: dev", SourceLocation::new("net", 4))
            .unwrap();

        let nodes = builder.finish();
        assert_eq!(keys(&nodes[0].value.children), ["Mod", "Version"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("", &ParseOptions::new()).unwrap().is_empty());
        assert!(parse("\n\n# only comments\n", &ParseOptions::new())
            .unwrap()
            .is_empty());
    }
}
