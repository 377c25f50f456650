//! Color constants for the terminal user interface.

use ratatui::style::Color;

// Brand palette shared with the rest of the GIC tooling.

/// Brand blue, the primary accent.
pub const PRIMARY: Color = Color::Rgb(17, 115, 212);
/// Alta priority badge.
pub const ALERT_RED: Color = Color::Rgb(220, 38, 38);
/// Média priority badge.
pub const AMBER: Color = Color::Rgb(217, 119, 6);
/// Baixa priority badge.
pub const SOFT_BLUE: Color = Color::Rgb(37, 99, 235);
/// Done status badge.
pub const DONE_GREEN: Color = Color::Rgb(22, 163, 74);
/// Overdue counter on the dashboard.
pub const ROSE: Color = Color::Rgb(244, 63, 94);
/// Completed-today counter on the dashboard.
pub const EMERALD: Color = Color::Rgb(16, 185, 129);
