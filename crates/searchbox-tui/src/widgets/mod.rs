//! Ratatui widgets for the searchbox demo.

pub mod action_panel;
pub mod help;
pub mod scenario_bar;
pub mod search_box;
