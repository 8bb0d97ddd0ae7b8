//! MiniYaml Format Reference
//!
//! This module documents the MiniYaml format as implemented by this library.
//!
//! # Overview
//!
//! MiniYaml is a line-based key/value format. It looks like a small subset
//! of YAML but is parsed with much simpler rules: one line is one node, and
//! indentation alone decides nesting.
//!
//! ## Design Philosophy
//!
//! - **Human editable**: no quoting, no brackets, no escapes beyond `\#`
//! - **Strings only**: every value is text; callers interpret it
//! - **Fail fast**: malformed indentation rejects the whole document
//!
//! # Lines
//!
//! Every line has the shape
//!
//! ```text
//! <indent><key>: <value> #<comment>
//! ```
//!
//! and every part is optional.
//!
//! | Line | Key | Value | Comment |
//! |------|-----|-------|---------|
//! | `Mod: cnc` | `Mod` | `cnc` | none |
//! | `Clients:` | `Clients` | none | none |
//! | `Clients` | `Clients` | none | none |
//! | `Map: abc # checksum` | `Map` | `abc` | ` checksum` |
//! | `# remark` | none | none | ` remark` |
//! | (blank) | none | none | none |
//!
//! **Rules**:
//! - The first `:` separates key from value. Later colons belong to the
//!   value, so `Address: 0.0.0.0:1234` has the value `0.0.0.0:1234`.
//! - The first `#` that is not preceded by `\` starts a comment running to
//!   the end of the line. A `#` before any `:` ends the key.
//! - Keys are trimmed. An empty key is absent.
//! - Values are trimmed. An empty value is absent.
//!
//! ## Escapes and Guards
//!
//! ```text
//! Color: \#ff0000            # value is "#ff0000"
//! Prefix: \  >               # value is "  >" (leading guard)
//! Path: C:\dir\              # value is "C:\dir\" (no guard)
//! Suffix: ... \              # value is "... " (trailing guard)
//! ```
//!
//! - `\#` in a value stands for a literal `#`.
//! - A value starting with `\` followed by a space or tab keeps that
//!   whitespace; only the backslash is dropped. The same holds for a value
//!   ending with a space or tab followed by `\`.
//!
//! # Indentation
//!
//! - A tab is one level.
//! - Four spaces are one level. Fewer than four leftover spaces count for
//!   nothing, so three spaces are depth 0.
//! - Tabs and spaces may be mixed; the space counter is not reset by tabs.
//!
//! A line at depth `d` becomes a child of the closest preceding line at
//! depth `d - 1`:
//!
//! ```text
//! A:
//! B:
//!     C: 1
//! D:
//! ```
//!
//! yields `A`, `B` (with child `C`) and `D`.
//!
//! A line may be at most one level deeper than the line that opens its
//! block. Skipping a level is an error:
//!
//! ```text
//! A:
//!         C: 1      <- bad indent at line 2
//! ```
//!
//! # Comments and Blank Lines
//!
//! By default, lines without a key do not become nodes, but they are still
//! indentation checked and still close deeper blocks. A comment at column 0
//! therefore ends an indented block:
//!
//! ```text
//! A:
//!     B:
//! # remark
//!         C: 1      <- bad indent at line 4
//! ```
//!
//! Only a completely empty line is skipped outright and leaves open blocks
//! untouched. When comments are preserved, keyless lines become nodes at
//! their own depth; an empty line is depth 0 and closes every open block.
//!
//! # Duplicate Keys
//!
//! The tree allows siblings with equal keys. Requesting a dictionary
//! projection of a node's children fails if any two share a key, and the
//! error names the line of the second one.
//!
//! # Canonical Output
//!
//! The serializer writes:
//!
//! - one tab per level
//! - `key:` then ` value` then ` #comment`, each only when present
//! - `#` inside values as `\#`
//!
//! Leading and trailing whitespace guards are not re-emitted, so values with
//! significant outer whitespace do not survive a text round trip. Everything
//! else (keys, values, comments and structure) does.
//!
//! # Limitations
//!
//! - No quoting: a key cannot contain `:` or `#`
//! - No multi-line values
//! - No numeric, boolean or null literals
//! - No anchors, references or multi-document streams

// This module contains only documentation; no implementation code
