//! Dictionary projection of a node's children.
//!
//! MiniYaml trees keep sibling keys in document order and allow duplicates.
//! Callers that want keyed access request a projection with
//! [`Content::to_map`] (or one of its selector variants), which builds a
//! fresh [`YamlMap`] each time and rejects duplicate keys.
//!
//! ## Why IndexMap?
//!
//! The projection is backed by [`IndexMap`] so iterating it follows document
//! order, which keeps anything derived from it deterministic.
//!
//! ## Examples
//!
//! ```rust
//! use miniyaml::from_str;
//! use miniyaml::Content;
//!
//! let doc = Content::from_nodes(from_str("Game:\n\tMod: cnc\n\tMap: abc123\n").unwrap());
//! let root = doc.to_map().unwrap();
//! let game = root.get("Game").unwrap().to_map().unwrap();
//!
//! assert_eq!(game.get("Mod").and_then(|c| c.as_str()), Some("cnc"));
//! let keys: Vec<_> = game.keys().copied().collect();
//! assert_eq!(keys, ["Mod", "Map"]);
//! ```

use crate::{Content, Error, Node, Result};
use indexmap::IndexMap;
use std::borrow::Borrow;
use std::hash::Hash;

/// A unique-key mapping derived from a content's direct children.
///
/// Keys and values are whatever the projection's selectors produced; by
/// default keys borrow the node keys and values borrow the child contents.
#[derive(Debug, Clone, PartialEq)]
pub struct YamlMap<K: Hash + Eq, V>(IndexMap<K, V>);

impl<K: Hash + Eq, V> YamlMap<K, V> {
    /// Creates an empty `YamlMap` with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        YamlMap(IndexMap::with_capacity(capacity))
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.0.get(key)
    }

    /// Returns `true` if the map contains the key.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in document order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, K, V> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in document order.
    pub fn values(&self) -> indexmap::map::Values<'_, K, V> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs, in document order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, K, V> {
        self.0.iter()
    }

    /// Unwraps the underlying [`IndexMap`].
    #[must_use]
    pub fn into_inner(self) -> IndexMap<K, V> {
        self.0
    }
}

impl<K: Hash + Eq, V> IntoIterator for YamlMap<K, V> {
    type Item = (K, V);
    type IntoIter = indexmap::map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'m, K: Hash + Eq, V> IntoIterator for &'m YamlMap<K, V> {
    type Item = (&'m K, &'m V);
    type IntoIter = indexmap::map::Iter<'m, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Projects a node list into a map from key to node.
///
/// This is the projection [`Content::to_map`] performs on its children,
/// applied to a bare list such as a parsed document. The nodes keep their
/// locations, which lets callers report errors against them.
///
/// # Examples
///
/// ```rust
/// use miniyaml::{from_str, map::nodes_to_map};
///
/// let nodes = from_str("Game:\n\tMod: cnc\nLobby:").unwrap();
/// let sections = nodes_to_map(&nodes).unwrap();
/// assert_eq!(sections.get("Lobby").map(|n| n.location.line), Some(3));
/// ```
///
/// # Errors
///
/// Returns [`Error::DuplicateKey`] naming the second occurrence if two
/// nodes share a key.
pub fn nodes_to_map(nodes: &[Node]) -> Result<YamlMap<&str, &Node>> {
    nodes_to_map_by(nodes, |key| key, |node| node)
}

/// Projects a node list into a map, transforming each key with
/// `key_selector` and each node with `value_selector`.
///
/// Nodes are visited in order and keyless nodes (comment-only or blank
/// lines kept by a preserving parse) are skipped. Uniqueness is checked on
/// the selected keys.
///
/// # Errors
///
/// Returns [`Error::DuplicateKey`] naming the raw key and location of the
/// second node whose selected key collides.
pub fn nodes_to_map_by<'a, K, V, FK, FV>(
    nodes: &'a [Node],
    mut key_selector: FK,
    mut value_selector: FV,
) -> Result<YamlMap<K, V>>
where
    K: Hash + Eq,
    FK: FnMut(&'a str) -> K,
    FV: FnMut(&'a Node) -> V,
{
    let mut map = YamlMap::with_capacity(nodes.len());
    for node in nodes {
        let Some(raw_key) = node.key.as_deref() else {
            continue;
        };

        let key = key_selector(raw_key);
        if map.0.contains_key(&key) {
            return Err(Error::duplicate_key(raw_key, node.location.clone()));
        }
        map.0.insert(key, value_selector(node));
    }

    Ok(map)
}

impl Content {
    /// Projects the direct children into a map from key to content.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateKey`] naming the second occurrence if two
    /// children share a key.
    pub fn to_map(&self) -> Result<YamlMap<&str, &Content>> {
        self.to_map_by(|key| key, |content| content)
    }

    /// Projects the direct children into a map, transforming each content
    /// with `value_selector`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use miniyaml::{Content, Node};
    ///
    /// let content = Content::from_nodes(vec![Node::scalar("A", "1"), Node::scalar("B", "2")]);
    /// let values = content
    ///     .to_map_with(|c| c.value.clone().unwrap_or_default())
    ///     .unwrap();
    /// assert_eq!(values.get("B").map(String::as_str), Some("2"));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateKey`] if two children share a key.
    pub fn to_map_with<'a, V, F>(&'a self, value_selector: F) -> Result<YamlMap<&'a str, V>>
    where
        F: FnMut(&'a Content) -> V,
    {
        self.to_map_by(|key| key, value_selector)
    }

    /// Projects the direct children into a map, transforming each key with
    /// `key_selector` and each content with `value_selector`.
    ///
    /// Children are visited in order and keyless children (comment-only or
    /// blank lines kept by a preserving parse) are skipped. Uniqueness is
    /// checked on the selected keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use miniyaml::{Content, Error, Node};
    ///
    /// let content = Content::from_nodes(vec![Node::scalar("mod", "cnc"), Node::scalar("MOD", "ra")]);
    /// let err = content
    ///     .to_map_by(|k| k.to_ascii_lowercase(), |c| c.as_str())
    ///     .unwrap_err();
    /// assert!(matches!(err, Error::DuplicateKey { ref key, .. } if key == "MOD"));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateKey`] naming the raw key and location of the
    /// second child whose selected key collides.
    pub fn to_map_by<'a, K, V, FK, FV>(
        &'a self,
        key_selector: FK,
        mut value_selector: FV,
    ) -> Result<YamlMap<K, V>>
    where
        K: Hash + Eq,
        FK: FnMut(&'a str) -> K,
        FV: FnMut(&'a Content) -> V,
    {
        nodes_to_map_by(&self.children, key_selector, |node| value_selector(&node.value))
    }

    /// Returns the children of the child named `key`, or an empty slice if
    /// there is no such child.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use miniyaml::{from_str, Content};
    ///
    /// let root = Content::from_nodes(from_str("Game:\n\tMod: cnc\n").unwrap());
    /// assert_eq!(root.nodes_or_empty("Game").unwrap().len(), 1);
    /// assert!(root.nodes_or_empty("Lobby").unwrap().is_empty());
    /// ```
    ///
    /// # Errors
    ///
    /// A missing key is not an error, but duplicate keys among the direct
    /// children are, as for [`Content::to_map`].
    pub fn nodes_or_empty(&self, key: &str) -> Result<&[Node]> {
        let map = self.to_map()?;
        Ok(map
            .get(key)
            .copied()
            .map_or(&[][..], |content| content.children.as_slice()))
    }
}
