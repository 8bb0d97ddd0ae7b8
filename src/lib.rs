//! # miniyaml
//!
//! A parser, tree model and serializer for MiniYaml, the compact
//! indentation-based key/value format used by OpenRA servers for
//! configuration and for the state exchanged with clients and the master
//! server.
//!
//! ## What is MiniYaml?
//!
//! Each line holds an optional key, an optional value and an optional
//! comment. Nesting is expressed with indentation only:
//!
//! ```text
//! Game:
//!     Protocol: 2
//!     Name: My Server   # shown in the server browser
//!     Clients:
//! ```
//!
//! Every value is a string. There are no quotes, no type system, no anchors
//! and no multi-document streams; higher layers interpret values as they
//! see fit. See [`spec`] for the full syntax.
//!
//! ## Quick Start
//!
//! ```rust
//! use miniyaml::{from_str, to_string, Content};
//!
//! let text = "Game:\n\tProtocol: 2\n\tMap: abc123";
//! let nodes = from_str(text).unwrap();
//!
//! let root = Content::from_nodes(nodes.clone());
//! let sections = root.to_map().unwrap();
//! let game = sections.get("Game").unwrap().to_map().unwrap();
//! assert_eq!(game.get("Map").and_then(|c| c.as_str()), Some("abc123"));
//!
//! // Tab-indented documents round-trip unchanged
//! assert_eq!(to_string(&nodes), text);
//! ```
//!
//! ## Building Documents
//!
//! ```rust
//! use miniyaml::{miniyaml, to_string};
//!
//! let nodes = miniyaml!({
//!     "Handshake": {
//!         "Mod": "cnc",
//!         "Version": "release-20190314"
//!     }
//! });
//!
//! assert_eq!(to_string(&nodes), "Handshake:\n\tMod: cnc\n\tVersion: release-20190314");
//! ```
//!
//! ## Comments and Blank Lines
//!
//! Parsing discards comments and blank lines by default. Use
//! [`ParseOptions::preserving`] to keep them as nodes so an edited document
//! can be written back with its annotations.
//!
//! ## Performance Characteristics
//!
//! - **Parsing**: O(n) in the number of lines, single pass, no backtracking
//! - **Memory**: line decomposition borrows from the input; only keys,
//!   values and comments that end up in the tree are copied
//! - **Concurrency**: all operations are pure and synchronous, and trees are
//!   `Send + Sync`, so independent documents can be parsed in parallel
//!
//! ## Error Handling
//!
//! Malformed indentation fails the whole parse with the offending
//! location. Duplicate keys are only reported when a dictionary projection
//! is requested. See [`Error`].

pub mod de;
pub mod error;
pub mod line;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod session;
pub mod spec;
pub mod value;

pub use de::TreeBuilder;
pub use error::{Error, Result};
pub use map::YamlMap;
pub use options::ParseOptions;
pub use ser::Serializer;
pub use session::{GameInfo, HandshakeRequest};
pub use value::{Content, Document, Node, SourceLocation};

use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Parse MiniYaml text with default options.
///
/// Comments and blank lines are discarded and node locations use the
/// source identifier `<string>`.
///
/// # Examples
///
/// ```rust
/// use miniyaml::from_str;
///
/// let nodes = from_str("A: 1\nB: 2").unwrap();
/// assert_eq!(nodes.len(), 2);
/// assert_eq!(nodes[1].location.line, 2);
/// ```
///
/// # Errors
///
/// Returns [`Error::BadIndent`] if a line skips an indentation level.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(text: &str) -> Result<Document> {
    from_str_with_options(text, &ParseOptions::default())
}

/// Parse MiniYaml text with custom options.
///
/// # Errors
///
/// Returns [`Error::BadIndent`] if a line skips an indentation level.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options(text: &str, options: &ParseOptions) -> Result<Document> {
    de::from_source_lines(line::split_lines(text, Arc::clone(&options.source)), options)
}

/// Parse MiniYaml from lines that were already split, numbering them from 1.
///
/// # Examples
///
/// ```rust
/// use miniyaml::{from_lines, ParseOptions};
///
/// let lines = vec!["Handshake:".to_string(), "\tMod: cnc".to_string()];
/// let nodes = from_lines(&lines, &ParseOptions::new().with_source("net")).unwrap();
/// assert_eq!(nodes[0].value.children[0].location.to_string(), "net:2");
/// ```
///
/// # Errors
///
/// Returns [`Error::BadIndent`] if a line skips an indentation level.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_lines<I, S>(lines: I, options: &ParseOptions) -> Result<Document>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = TreeBuilder::new(options);
    for (i, line) in lines.into_iter().enumerate() {
        let location = SourceLocation::new(Arc::clone(&options.source), i + 1);
        builder.push_line(line.as_ref(), location)?;
    }
    Ok(builder.finish())
}

/// Parse MiniYaml from an I/O stream.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails (including invalid UTF-8) and
/// [`Error::BadIndent`] for malformed indentation.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(mut reader: R, options: &ParseOptions) -> Result<Document>
where
    R: io::Read,
{
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    from_str_with_options(&text, options)
}

/// Parse a MiniYaml file. Node locations name `path` as their source.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and
/// [`Error::BadIndent`] for malformed indentation.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_file<P>(path: P, options: &ParseOptions) -> Result<Document>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    debug!(path = %path.display(), "reading miniyaml file");
    let text = fs::read_to_string(path)?;
    let options = options.clone().with_source(path.display().to_string());
    from_str_with_options(&text, &options)
}

/// Serialize nodes to canonical MiniYaml lines, without terminators.
///
/// # Examples
///
/// ```rust
/// use miniyaml::{from_str, to_lines};
///
/// let nodes = from_str("A:\n    B: 1 # spaces become tabs").unwrap();
/// assert_eq!(to_lines(&nodes), ["A:", "\tB: 1"]);
/// ```
#[must_use]
pub fn to_lines(nodes: &[Node]) -> Vec<String> {
    let mut serializer = Serializer::new();
    serializer.write_nodes(nodes, 0);
    serializer.into_lines()
}

/// Serialize nodes to a MiniYaml string.
///
/// Lines are joined with `\n` and stripped of trailing whitespace. There is
/// no trailing newline.
#[must_use]
pub fn to_string(nodes: &[Node]) -> String {
    to_lines(nodes)
        .iter()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Serialize nodes to a writer, one newline-terminated line each, stripped
/// of trailing whitespace.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(mut writer: W, nodes: &[Node]) -> Result<()>
where
    W: io::Write,
{
    for line in to_lines(nodes) {
        writer.write_all(line.trim_end().as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Write nodes to a file, replacing its contents.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be created or written.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn write_to_file<P>(nodes: &[Node], path: P) -> Result<()>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    debug!(path = %path.display(), nodes = nodes.len(), "writing miniyaml file");
    let file = fs::File::create(path)?;
    to_writer(io::BufWriter::new(file), nodes)
}
