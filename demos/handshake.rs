//! Reading and writing the session documents a server exchanges.
//!
//! Run with: cargo run --example handshake

use miniyaml::{from_str, miniyaml, to_string, GameInfo, HandshakeRequest};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let request = HandshakeRequest::new("cnc", "{DEV_VERSION}", "5eew9N1EU4RGuNIDMyQ8T9IAXfRHGp7e");
    let wire = to_string(&request.to_document());
    println!("Handshake request:\n{}\n", wire);

    let received = HandshakeRequest::from_document(&from_str(&wire)?)?;
    assert_eq!(received, request);

    let advertisement = miniyaml!({
        "Game": {
            "Protocol": 2,
            "Name": "Skirmish",
            "Mod": "cnc",
            "Version": "{DEV_VERSION}",
            "Map": "c6dcbc855b6a70c5ee6509d614c2d8e0bb5fd970",
            "State": 1,
            "MaxPlayers": 4,
            "Clients": null
        }
    });

    let info = GameInfo::from_document(&advertisement)?;
    println!("Advertising '{}' ({} players max)", info.name, info.max_players.as_deref().unwrap_or("?"));
    println!("\n{}", to_string(&info.to_document()));

    // A missing key is reported with the section's location
    match GameInfo::from_document(&from_str("Game:\n\tProtocol: 2")?) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("\nExpected error: {}", e),
    }

    Ok(())
}
