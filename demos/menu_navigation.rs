//! Menu Navigation
//!
//! This example demonstrates handler inheritance in a two-level hierarchy.
//!
//! Key concepts:
//! - Child states only bind the events they override
//! - Unbound events fall through to the nearest ancestor
//! - Absent handlers are a valid outcome, not an error
//!
//! Run with: cargo run --example menu_navigation

use statekit::StateChart;

fn main() -> Result<(), statekit::ChartError> {
    println!("=== Menu Navigation Example ===\n");

    let mut chart = StateChart::new();
    let app = chart.add_state("App");
    let menu = chart.add_child_state(app, "Menu")?;

    chart.set_event(menu, "select", || println!("Menu: item selected"))?;
    chart.set_event(app, "back", || println!("App: navigating back"))?;

    println!("{}", chart.describe(app)?);
    println!("{}\n", chart.describe(menu)?);

    // The driver would hold the active node; here Menu is active.
    for event in ["select", "back", "unknown"] {
        match chart.lookup_handler(menu, event)? {
            Some(handler) => handler(),
            None => println!("(no handler for '{event}', ignoring)"),
        }
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
