//! Error types for MiniYaml parsing, projection and serialization.
//!
//! Every failure is reported synchronously to the caller of the failing
//! operation. Nothing is retried and nothing is partially recovered: a
//! malformed document is rejected as a whole.
//!
//! ## Error Categories
//!
//! - **Bad indentation**: a line is indented more than one level past the
//!   deepest open level. Raised while building the tree.
//! - **Duplicate keys**: two siblings share a key. Raised only when a
//!   dictionary projection is requested, since the tree itself allows it.
//! - **Missing keys**: a required key is absent from a section read by the
//!   session layer.
//! - **I/O errors**: reading or writing a file or stream failed.
//!
//! ## Examples
//!
//! ```rust
//! use miniyaml::{from_str, Error};
//!
//! let err = from_str("A:\n\t\tC: 1\n").unwrap_err();
//! assert!(matches!(err, Error::BadIndent { .. }));
//! assert_eq!(err.location().map(|l| l.line), Some(2));
//! ```

use crate::value::SourceLocation;
use thiserror::Error;

/// Represents all possible errors that can occur while handling MiniYaml.
#[derive(Debug, Error)]
pub enum Error {
    /// A line skipped one or more indentation levels.
    #[error("Bad indent in miniyaml at {location}")]
    BadIndent { location: SourceLocation },

    /// Two sibling nodes share a key in a dictionary projection.
    ///
    /// `location` points at the second occurrence.
    #[error("Duplicate key '{key}' in {location}")]
    DuplicateKey {
        key: String,
        location: SourceLocation,
    },

    /// A section did not contain a key its reader requires.
    #[error("Missing key '{key}' in {}", section_name(.location))]
    MissingKey {
        key: String,
        location: Option<SourceLocation>,
    },

    /// IO error during reading or writing
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a bad indentation error for the line at `location`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use miniyaml::{Error, SourceLocation};
    ///
    /// let err = Error::bad_indent(SourceLocation::new("rules.yaml", 7));
    /// assert_eq!(err.to_string(), "Bad indent in miniyaml at rules.yaml:7");
    /// ```
    pub fn bad_indent(location: SourceLocation) -> Self {
        Error::BadIndent { location }
    }

    /// Creates a duplicate key error naming the second occurrence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use miniyaml::{Error, SourceLocation};
    ///
    /// let err = Error::duplicate_key("Map", SourceLocation::new("game.yaml", 3));
    /// assert!(err.to_string().contains("Duplicate key 'Map'"));
    /// ```
    pub fn duplicate_key(key: &str, location: SourceLocation) -> Self {
        Error::DuplicateKey {
            key: key.to_string(),
            location,
        }
    }

    /// Creates a missing key error for a section read at `location`.
    pub fn missing_key(key: &str, location: Option<SourceLocation>) -> Self {
        Error::MissingKey {
            key: key.to_string(),
            location,
        }
    }

    /// Returns the source location this error points at, if it has one.
    #[must_use]
    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            Error::BadIndent { location } | Error::DuplicateKey { location, .. } => Some(location),
            Error::MissingKey { location, .. } => location.as_ref(),
            Error::Io(_) => None,
        }
    }
}

fn section_name(location: &Option<SourceLocation>) -> String {
    location
        .as_ref()
        .map_or_else(|| "<root>".to_string(), ToString::to_string)
}

pub type Result<T> = std::result::Result<T, Error>;
