//! Ratatui widgets for the fab TUI.

pub mod command_bar;
pub mod header_bar;
pub mod help;
pub mod results;
pub mod search_bar;
