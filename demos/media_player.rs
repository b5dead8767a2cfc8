//! Media Player
//!
//! This example demonstrates declarative construction of a three-level
//! hierarchy with the chart builder, and shadowing of an inherited handler.
//!
//! Run with: cargo run --example media_player

use statekit::{ChartBuilder, StateDef};

fn main() {
    println!("=== Media Player Example ===\n");

    let (chart, player) = ChartBuilder::new()
        .root(
            StateDef::new("Player")
                .on("power", || println!("Player: toggling power"))
                .on("stop", || println!("Player: stopping"))
                .child(
                    StateDef::new("Playing")
                        .on("pause", || println!("Playing: pausing"))
                        .child(
                            // A muted track shadows the inherited "stop".
                            StateDef::new("Muted")
                                .on("stop", || println!("Muted: fading out, then stopping")),
                        ),
                )
                .child(StateDef::new("Stopped").on("play", || println!("Stopped: starting"))),
        )
        .build()
        .unwrap();

    let playing = chart.child(player, "Playing").unwrap().unwrap();
    let muted = chart.child(playing, "Muted").unwrap().unwrap();

    for id in [player, playing, muted] {
        println!("{}", chart.describe(id).unwrap());
    }
    println!();

    // Muted answers "stop" itself, inherits "pause" and "power".
    for event in ["stop", "pause", "power", "eject"] {
        match chart.lookup_handler(muted, event).unwrap() {
            Some(handler) => handler(),
            None => println!("(no handler for '{event}', ignoring)"),
        }
    }

    println!("\n=== Example Complete ===");
}
