//! Keeping comments and blank lines through an edit.
//!
//! Run with: cargo run --example comments

use miniyaml::{from_str_with_options, to_string, Node, ParseOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let text = "# Server settings\nServer:\n\tName: Local # shown in lobby\n\n# Lobby\nLobby:\n\tMaxPlayers: 4";

    let options = ParseOptions::preserving().with_source("settings.yaml");
    let mut nodes = from_str_with_options(text, &options)?;

    for node in &nodes {
        println!("{:>16}  key={:?} comment={:?}", node.location.to_string(), node.key, node.comment);
    }

    if let Some(server) = nodes.iter_mut().find(|n| n.key.as_deref() == Some("Server")) {
        server
            .value
            .children
            .push(Node::scalar("Password", "a#b").with_comment(" hashes are escaped"));
    }

    println!("\nEdited:\n{}", to_string(&nodes));

    Ok(())
}
