//! Configuration options for MiniYaml parsing.
//!
//! [`ParseOptions`] controls two things:
//!
//! - whether comment-only and blank lines are discarded (the default) or
//!   kept as keyless nodes, together with trailing comments
//! - the source identifier recorded in every node's location
//!
//! ## Examples
//!
//! ```rust
//! use miniyaml::{from_str_with_options, ParseOptions};
//!
//! let text = "# header\nA: 1 #note\n";
//!
//! let nodes = from_str_with_options(text, &ParseOptions::new()).unwrap();
//! assert_eq!(nodes.len(), 1);
//! assert_eq!(nodes[0].comment, None);
//!
//! let nodes = from_str_with_options(text, &ParseOptions::preserving()).unwrap();
//! assert_eq!(nodes.len(), 2);
//! assert_eq!(nodes[1].comment.as_deref(), Some("note"));
//! ```

use std::sync::Arc;

/// Source identifier used when parsing text that did not come from a file.
pub const DEFAULT_SOURCE: &str = "<string>";

/// Configuration options for MiniYaml parsing.
///
/// # Examples
///
/// ```rust
/// use miniyaml::ParseOptions;
///
/// let options = ParseOptions::new();
/// assert!(options.discard_comments_and_whitespace);
///
/// let options = ParseOptions::preserving().with_source("rules.yaml");
/// assert!(!options.discard_comments_and_whitespace);
/// assert_eq!(&*options.source, "rules.yaml");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ParseOptions {
    pub discard_comments_and_whitespace: bool,
    pub source: Arc<str>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            discard_comments_and_whitespace: true,
            source: Arc::from(DEFAULT_SOURCE),
        }
    }
}

impl ParseOptions {
    /// Creates default options: comments and blank lines are discarded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that keep comments and blank lines, for documents
    /// that will be edited and written back.
    #[must_use]
    pub fn preserving() -> Self {
        ParseOptions {
            discard_comments_and_whitespace: false,
            ..Default::default()
        }
    }

    /// Sets whether comment-only and blank lines are dropped.
    #[must_use]
    pub fn with_discard_comments_and_whitespace(mut self, discard: bool) -> Self {
        self.discard_comments_and_whitespace = discard;
        self
    }

    /// Sets the source identifier recorded in node locations.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<Arc<str>>) -> Self {
        self.source = source.into();
        self
    }
}
