//! Order Process Rendering
//!
//! This example builds a small order process, walks it with a driver that
//! keeps its own current state, and prints the Graphviz diagram.
//!
//! Key concepts:
//! - Fluent state and process builders
//! - Guarded transitions driven by a JSON payload
//! - Caller-held current state
//! - Graphviz output via `render_process`
//!
//! Run with: cargo run --example render_order

use serde_json::{json, Value};
use stateflow::builder::{ProcessBuilder, StateBuilder};
use stateflow::core::{Flag, Guard, Transition};
use stateflow::renderer::{render_process, DocumentOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Order Process ===\n");

    let process = ProcessBuilder::<Value>::new("order")
        .initial("new")
        .state(
            StateBuilder::new("new")
                .event(
                    Transition::new("pay", "paid")
                        .when(Guard::new(|p: &Value| p["amount"].as_u64() > Some(0))),
                )
                .event(Transition::new("cancel", "cancelled"))
                .event(Transition::noop("remind"))
                .attribute("label", json!("New order")),
        )?
        .state(
            StateBuilder::new("paid")
                .event(Transition::new("ship", "shipped"))
                .attribute("color", json!("darkgreen")),
        )?
        .state(StateBuilder::new("shipped").flag(Flag::new("final")))?
        .state(
            StateBuilder::new("cancelled")
                .flag(Flag::new("final"))
                .attribute("color", json!("red")),
        )?
        .build()?;

    if process.validate().is_success() {
        println!("Process '{}' is valid\n", process.name());
    }

    // The driver, not the process, tracks where we are
    let mut current = process.initial().to_string();
    let steps = [
        ("remind", json!({})),
        ("pay", json!({"amount": 0})),
        ("pay", json!({"amount": 42})),
        ("ship", json!({})),
        ("ship", json!({})),
    ];

    for (event, payload) in steps {
        match process.trigger(&current, event, &payload) {
            Ok(Some(next)) => {
                println!("  {current} --{event}--> {next}");
                current = next;
            }
            Ok(None) => println!("  {current} --{event}--> (no change)"),
            Err(err) => println!("  {current} --{event}--> rejected: {err}"),
        }
    }

    println!("\nFinal state: {current}\n");

    let document = render_process(&process, DocumentOptions::default());
    println!("Diagram ({} nodes, {} edges):", document.state_count(), document.edge_count());
    println!("{document}");

    println!("\n=== Example Complete ===");
    Ok(())
}
