//! Media Player
//!
//! This example replays button presses against a media player graph.
//!
//! Key concepts:
//! - Enum vertices and enum edges
//! - Basic vs looped vertices on an undefined input
//! - Removing a vertex drops every transition touching it
//! - Growing a tree from a root with `FsmTree`
//!
//! Run with: cargo run --example media_player

use fsm_graph::{FsmGraph, FsmGraphBuilder, FsmTree, VertexType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Player {
    Stopped,
    Playing,
    Paused,
    Ejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Button {
    Play,
    Pause,
    Stop,
    Eject,
}

fn build_player() -> fsm_graph::Result<FsmGraph<Player, Button>> {
    FsmGraphBuilder::new()
        .vertex(Player::Stopped)
        .vertex(Player::Playing)
        // Pausing twice or pressing eject while paused does nothing
        .vertex_with_type(Player::Paused, VertexType::Looped)
        .vertex(Player::Ejected)
        .transition(Player::Stopped, Player::Playing, Button::Play)
        .transition(Player::Stopped, Player::Ejected, Button::Eject)
        .transition(Player::Playing, Player::Paused, Button::Pause)
        .transition(Player::Playing, Player::Stopped, Button::Stop)
        .transition(Player::Paused, Player::Playing, Button::Play)
        .transition(Player::Paused, Player::Stopped, Button::Stop)
        .build()
}

fn main() -> fsm_graph::Result<()> {
    println!("=== Media Player ===\n");

    let mut player = build_player()?;
    println!("Vertices: {}", player.size());
    for vertex in &player {
        println!(
            "  {:?} ({}) -> {:?}",
            vertex,
            player.vertex_type(vertex)?,
            player.transitions_from(vertex)?
        );
    }

    let presses = [
        Button::Play,
        Button::Pause,
        Button::Pause,
        Button::Eject,
        Button::Play,
        Button::Stop,
    ];
    let path = player.traverse_path(&Player::Stopped, presses)?;
    println!("\nReplaying {:?}", presses);
    println!("  path: {:?}", path);

    match player.traverse(&Player::Playing, [Button::Eject]) {
        Ok(end) => println!("\nEject while playing -> {:?}", end),
        Err(err) => println!("\nEject while playing rejected: {}", err),
    }

    player.remove_vertex(&Player::Ejected)?;
    println!("\nRemoved Ejected, {} vertices left", player.size());
    println!(
        "Stopped still ejects: {}",
        player.has_any_transition(&Player::Stopped, &Player::Playing)?
            && player.traverse(&Player::Stopped, [Button::Eject]).is_ok()
    );

    println!("\n=== Tree grown from Stopped ===\n");

    let mut tree = FsmTree::new(Player::Stopped);
    tree.add_transition(&Player::Stopped, Player::Playing, Button::Play)?;
    tree.add_transition(&Player::Playing, Player::Stopped, Button::Stop)?;
    tree.add_transition(&Player::Stopped, Player::Ejected, Button::Eject)?;
    println!("Tree vertices: {}", tree.size());

    tree.remove_transition(&Player::Stopped, &Player::Ejected, &Button::Eject)?;
    println!(
        "After removing the eject transition: {} vertices, Ejected present: {}",
        tree.size(),
        tree.has_vertex(&Player::Ejected)
    );
    println!(
        "Play, Stop, Play from the root -> {:?}",
        tree.traverse([Button::Play, Button::Stop, Button::Play])?
    );

    println!("\n=== Example Complete ===");
    Ok(())
}
