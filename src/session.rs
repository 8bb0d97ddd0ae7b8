//! Session metadata carried as MiniYaml.
//!
//! OpenRA servers describe themselves to the master server with a `Game`
//! section and greet connecting clients with a `Handshake` section. Both are
//! ordinary MiniYaml documents; this module reads and writes them through
//! the dictionary projection and leaves transport to the caller.
//!
//! Values stay strings. `Protocol: 2` is read as `"2"` and interpreting it
//! is the caller's business.
//!
//! ## Examples
//!
//! ```rust
//! use miniyaml::{from_str, GameInfo};
//!
//! let text = "Game:\n\tProtocol: 2\n\tName: test\n\tMod: cnc\n\tVersion: dev\n\tMap: abc123\n\tClients:";
//! let info = GameInfo::from_document(&from_str(text).unwrap()).unwrap();
//!
//! assert_eq!(info.mod_id, "cnc");
//! assert_eq!(info.max_players, None);
//! assert!(info.clients.is_empty());
//! ```

use crate::map::{nodes_to_map, YamlMap};
use crate::{Content, Document, Error, Node, Result, SourceLocation};
use serde::{Deserialize, Serialize};

/// Top-level key of the server advertisement document.
pub const GAME_SECTION: &str = "Game";

/// Top-level key of the handshake request sent to new clients.
pub const HANDSHAKE_SECTION: &str = "Handshake";

/// The server advertisement posted to the master server.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameInfo {
    pub protocol: String,
    pub name: String,
    pub address: Option<String>,
    pub mod_id: String,
    pub version: String,
    pub mod_title: Option<String>,
    pub mod_website: Option<String>,
    pub mod_icon32: Option<String>,
    pub map: String,
    pub state: Option<String>,
    pub max_players: Option<String>,
    pub protected: Option<String>,
    pub authentication: Option<String>,
    pub clients: Vec<Node>,
}

impl GameInfo {
    /// Reads the `Game` section of a document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingKey`] if the section or one of its required
    /// keys is absent, and [`Error::DuplicateKey`] if a key appears twice at
    /// the top level or inside the section.
    pub fn from_document(nodes: &[Node]) -> Result<Self> {
        let section = find_section(nodes, GAME_SECTION)?;
        let fields = section.value.to_map()?;
        let location = Some(&section.location);

        Ok(GameInfo {
            protocol: required(&fields, "Protocol", location)?,
            name: required(&fields, "Name", location)?,
            address: optional(&fields, "Address"),
            mod_id: required(&fields, "Mod", location)?,
            version: required(&fields, "Version", location)?,
            mod_title: optional(&fields, "ModTitle"),
            mod_website: optional(&fields, "ModWebsite"),
            mod_icon32: optional(&fields, "ModIcon32"),
            map: required(&fields, "Map", location)?,
            state: optional(&fields, "State"),
            max_players: optional(&fields, "MaxPlayers"),
            protected: optional(&fields, "Protected"),
            authentication: optional(&fields, "Authentication"),
            clients: section.value.nodes_or_empty("Clients")?.to_vec(),
        })
    }

    /// Builds the `Game` document. Absent optional fields are left out;
    /// `Clients` is always written.
    #[must_use]
    pub fn to_document(&self) -> Document {
        let mut fields = vec![
            Node::scalar("Protocol", &self.protocol),
            Node::scalar("Name", &self.name),
        ];
        push_optional(&mut fields, "Address", &self.address);
        fields.push(Node::scalar("Mod", &self.mod_id));
        fields.push(Node::scalar("Version", &self.version));
        push_optional(&mut fields, "ModTitle", &self.mod_title);
        push_optional(&mut fields, "ModWebsite", &self.mod_website);
        push_optional(&mut fields, "ModIcon32", &self.mod_icon32);
        fields.push(Node::scalar("Map", &self.map));
        push_optional(&mut fields, "State", &self.state);
        push_optional(&mut fields, "MaxPlayers", &self.max_players);
        push_optional(&mut fields, "Protected", &self.protected);
        push_optional(&mut fields, "Authentication", &self.authentication);
        fields.push(Node::with_children("Clients", None, self.clients.clone()));

        vec![Node::with_children(GAME_SECTION, None, fields)]
    }
}

/// The request a server sends to a client right after it connects.
///
/// # Examples
///
/// ```rust
/// use miniyaml::{to_string, HandshakeRequest};
///
/// let request = HandshakeRequest::new("cnc", "{DEV_VERSION}", "5eew9N1E");
/// assert_eq!(
///     to_string(&request.to_document()),
///     "Handshake:\n\tMod: cnc\n\tVersion: {DEV_VERSION}\n\tAuthToken: 5eew9N1E"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HandshakeRequest {
    pub mod_id: String,
    pub version: String,
    pub auth_token: String,
}

impl HandshakeRequest {
    #[must_use]
    pub fn new(
        mod_id: impl Into<String>,
        version: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> Self {
        HandshakeRequest {
            mod_id: mod_id.into(),
            version: version.into(),
            auth_token: auth_token.into(),
        }
    }

    /// Reads the `Handshake` section of a document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingKey`] if the section or any of its keys is
    /// absent, and [`Error::DuplicateKey`] for repeated keys.
    pub fn from_document(nodes: &[Node]) -> Result<Self> {
        let section = find_section(nodes, HANDSHAKE_SECTION)?;
        let fields = section.value.to_map()?;
        let location = Some(&section.location);

        Ok(HandshakeRequest {
            mod_id: required(&fields, "Mod", location)?,
            version: required(&fields, "Version", location)?,
            auth_token: required(&fields, "AuthToken", location)?,
        })
    }

    #[must_use]
    pub fn to_document(&self) -> Document {
        vec![Node::with_children(
            HANDSHAKE_SECTION,
            None,
            vec![
                Node::scalar("Mod", &self.mod_id),
                Node::scalar("Version", &self.version),
                Node::scalar("AuthToken", &self.auth_token),
            ],
        )]
    }
}

/// Finds a top-level section through the projection of the whole document,
/// so any repeated top-level key is rejected.
fn find_section<'a>(nodes: &'a [Node], key: &str) -> Result<&'a Node> {
    let sections = nodes_to_map(nodes)?;
    sections
        .get(key)
        .copied()
        .ok_or_else(|| Error::missing_key(key, None))
}

fn required(
    fields: &YamlMap<&str, &Content>,
    key: &str,
    location: Option<&SourceLocation>,
) -> Result<String> {
    optional(fields, key).ok_or_else(|| Error::missing_key(key, location.cloned()))
}

fn optional(fields: &YamlMap<&str, &Content>, key: &str) -> Option<String> {
    fields
        .get(key)
        .and_then(|content| content.as_str())
        .map(str::to_string)
}

fn push_optional(fields: &mut Vec<Node>, key: &str, value: &Option<String>) {
    if let Some(value) = value {
        fields.push(Node::scalar(key, value));
    }
}
