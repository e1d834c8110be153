//! Terminal rendering
//!
//! Layout:
//! ```text
//! ┌───────────────────────┐
//! │                    42 │
//! ├───────────────────────┤
//! │  C    ⌫    %    ÷     │
//! │  7    8    9   [×]    │
//! │  ...                  │
//! └───────────────────────┘
//! ```

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};

use super::app::CalculatorApp;
use crate::driver::CalculatorDriver;
use crate::core::Command;
use crate::wasm::button_label;

const INNER_WIDTH: usize = 23;
const CELL_WIDTH: usize = 5;

/// Builds the screen as plain lines
#[must_use]
pub fn screen_lines(app: &CalculatorApp) -> Vec<String> {
    let rule = "─".repeat(INNER_WIDTH);
    let mut lines = vec![
        format!("┌{rule}┐"),
        format!("│{:>width$} │", app.display(), width = INNER_WIDTH - 1),
        format!("├{rule}┤"),
    ];

    let keypad = app.session().keypad();
    let active = app.active_operator();
    let (rows, cols) = keypad.dimensions();
    for row in 0..rows {
        let cells: String = (0..cols)
            .filter_map(|col| keypad.get_button_at(row, col))
            .map(|btn| {
                let label = button_label(btn.command);
                let is_active = matches!(
                    btn.command,
                    Command::Action(a) if a.as_operator().is_some() && a.as_operator() == active
                );
                let cell = if is_active {
                    format!("[{label}]")
                } else {
                    format!(" {label} ")
                };
                format!("{cell:^CELL_WIDTH$}")
            })
            .collect();
        lines.push(format!("│{cells:<INNER_WIDTH$}│"));
    }

    lines.push(format!("└{rule}┘"));
    lines.push("Esc clear · n ± · Enter = · Ctrl+C quit".to_string());
    lines
}

/// Draws the app to a terminal
pub fn render<W: Write>(out: &mut W, app: &CalculatorApp) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;
    for (row, line) in screen_lines(app).iter().enumerate() {
        let row = u16::try_from(row).unwrap_or(u16::MAX);
        queue!(out, MoveTo(0, row), Print(line))?;
    }
    out.flush()
}
