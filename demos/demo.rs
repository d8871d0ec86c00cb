//! Walkthrough of the two comparison routes and the forced selection modes.
//!
//! Run with `cargo run --example demo`; set `RUST_LOG=neardup=debug` to see
//! the routing decisions.

use neardup::{SelectionMode, SimilarityConfig, SimilarityPolicy};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Default policy: routes by length, case-insensitive, echoes nothing.
    let policy = SimilarityPolicy::new(SimilarityConfig::default())?;

    let short_target = "helloworld";
    let short_input = "HelloWorld";
    let verdict = policy.compare(short_target, short_input)?;
    println!(
        "short route {short_target:?} vs {short_input:?}: {}",
        serde_json::to_string(&verdict)?
    );

    let long_target = "free signals, free risk-control plans, free recovery advice, \
                       try the service before you commit, success is not a matter of luck "
        .repeat(4);
    let long_input = long_target.replacen("recovery advice", "rescue advice", 1);
    let verdict = policy.compare(&long_target, &long_input)?;
    println!("long route, one phrase edited: {}", serde_json::to_string(&verdict)?);

    // Deployments that want a deterministic algorithm choice pin the route.
    let pinned = SimilarityPolicy::new(
        SimilarityConfig::new()
            .with_selection(SelectionMode::Scoring)
            .with_echo_inputs(true),
    )?;
    let verdict = pinned.compare("prinf", "printf")?;
    println!("forced scoring: {}", serde_json::to_string_pretty(&verdict)?);

    Ok(())
}
