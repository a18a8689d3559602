// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Command implementations

pub mod analyze;
pub mod catalog;
pub mod completions;
pub mod export;
pub mod layout;
pub mod scenario;

use anyhow::Result;
use owo_colors::{OwoColorize, Style};
use serde::Serialize;
use std::io::Write;

/// Rendering switches shared by every command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Output {
    /// Print machine-readable JSON instead of a report
    pub json: bool,
    /// Use ANSI colors in reports
    pub color: bool,
}

impl Output {
    /// Apply `style` to `text` when color is enabled
    #[must_use]
    pub fn paint(&self, text: impl std::fmt::Display, style: Style) -> String {
        if self.color {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    /// Section heading
    #[must_use]
    pub fn heading(&self, text: &str) -> String {
        self.paint(text, Style::new().bold())
    }

    /// De-emphasized text
    #[must_use]
    pub fn dim(&self, text: impl std::fmt::Display) -> String {
        self.paint(text, Style::new().dimmed())
    }
}

/// Pretty-print a value as JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    stdout.write_all(b"\n")?;
    Ok(())
}
