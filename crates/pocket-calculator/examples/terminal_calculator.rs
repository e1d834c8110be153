//! Terminal Calculator Example
//!
//! Run with: cargo run --example terminal_calculator
//!
//! Logs go to stderr; set `RUST_LOG=pocket_calculator=debug` and redirect
//! stderr to a file to watch the state machine.

use std::io;

use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pocket_calculator::tui::{render, CalculatorApp};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pocket_calculator=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let result = run_app(&mut stdout);

    execute!(stdout, Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app(out: &mut io::Stdout) -> io::Result<()> {
    let mut app = CalculatorApp::new();

    loop {
        render(out, &app)?;

        if let Event::Key(key) = event::read()? {
            app.handle_key_event(key);
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
