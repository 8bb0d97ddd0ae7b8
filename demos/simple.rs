//! Basic MiniYaml parsing and serialization.
//!
//! Run with: cargo run --example simple

use miniyaml::{from_str, to_string, Content};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let text = "Game:\n    Protocol: 2\n    Name: My Server # public name\n    Address: 0.0.0.0:1234\n    Clients:";

    // Parse, discarding comments
    let nodes = from_str(text)?;
    for node in &nodes[0].value.children {
        println!("{} = {:?}", node, node.value.as_str());
    }

    // Project into a dictionary
    let root = Content::from_nodes(nodes.clone());
    let sections = root.to_map()?;
    if let Some(game) = sections.get("Game") {
        let fields = game.to_map_with(|c| c.as_str().unwrap_or_default())?;
        println!("\nAddress: {}", fields.get("Address").copied().unwrap_or_default());
    }

    // Serialize in canonical tab-indented form
    let canonical = to_string(&nodes);
    println!("\nCanonical output:\n{}\n", canonical);

    assert_eq!(from_str(&canonical)?, nodes);
    println!("✓ Round-trip successful");

    Ok(())
}
