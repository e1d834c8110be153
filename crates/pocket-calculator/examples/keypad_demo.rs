//! Keypad Demo
//!
//! Clicks through the mock DOM and prints what the page would show after
//! each event, then types the tooltip greeting.
//!
//! Run with: cargo run --example keypad_demo

use std::time::Duration;

use pocket_calculator::config::CalculatorConfig;
use pocket_calculator::driver::CalculatorDriver;
use pocket_calculator::typing::Typewriter;
use pocket_calculator::wasm::{DomDriver, DomElement};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pocket_calculator=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = CalculatorConfig::default();
    let mut driver = DomDriver::with_display_config(config.display.clone());

    println!("=== Clicks ===");
    for id in [
        "btn-1", "btn-2", "btn-add", "btn-7", "btn-multiply", "btn-2", "btn-equals",
    ] {
        driver.click(id)?;
        println!(
            "{id:<14} display={:<10} active={:?}",
            driver.display(),
            driver.active_operator_ids()
        );
    }
    println!("{} DOM events", driver.dom().event_history().len());
    driver.dom_mut().clear_event_history();

    println!("\n=== Keys ===");
    for key in ["Escape", "9", "9", "9", "9", "9", "9", "9", "9", "9", "9"] {
        let dispatch = driver.key_down(key);
        println!("{key:<8} -> {:?}", dispatch.display());
    }
    println!("{} DOM events", driver.dom().event_history().len());

    println!("\n=== Tooltip ===");
    let mut tooltip = DomElement::new("span").with_id("tooltip");
    let mut typewriter = Typewriter::new();
    typewriter.start(
        &mut tooltip,
        &config.typing.greeting,
        config.typing.greeting_interval(),
    );
    while typewriter.is_active() {
        typewriter.advance(&mut tooltip, config.typing.greeting_interval());
        println!("{}", tooltip.text_content);
        std::thread::sleep(Duration::from_millis(20));
    }

    Ok(())
}
