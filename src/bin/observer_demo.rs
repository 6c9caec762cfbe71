// Observer Pattern walkthrough: a weather dashboard Subject with a display,
// a history logger, and a tracing forwarder attached.

use std::sync::{Arc, Mutex};

use classic_patterns::observer::{
    shared, State, StateDisplay, StateLogger, Subject, TracingObserver,
};
use serde::Serialize;
use serde_json::json;

#[derive(Serialize)]
struct Reading {
    temperature: f32,
    humidity: f32,
}

fn reading_state(reading: Reading) -> Result<State, Box<dyn std::error::Error>> {
    let value = serde_json::to_value(reading)?;
    value
        .as_object()
        .cloned()
        .ok_or_else(|| "reading must serialize to an object".into())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    println!("Observer Pattern: Weather Dashboard");
    println!("===================================\n");

    let mut station = Subject::new();

    let display = shared(StateDisplay::new("Main"));
    let logger = Arc::new(Mutex::new(StateLogger::new()));

    station.attach(display.clone());
    station.attach(logger.clone());
    station.attach(shared(TracingObserver));

    println!("=== First reading (all three observers notified) ===");
    station.set_state(reading_state(Reading {
        temperature: 25.5,
        humidity: 40.0,
    })?);

    println!("\n=== Partial update (merged into the snapshot) ===");
    let mut partial = State::new();
    partial.insert("station".to_string(), json!("rooftop"));
    station.set_state(partial);

    println!("\n=== After detaching the display ===");
    station.detach(&display);
    station.set_state(reading_state(Reading {
        temperature: 26.0,
        humidity: 42.5,
    })?);

    let logger = logger.lock().unwrap();
    println!(
        "\nLogger cached {} snapshots; final state has {} keys",
        logger.history().len(),
        station.state().len()
    );

    Ok(())
}
