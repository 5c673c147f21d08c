//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`layout`]: Screen regions shared by rendering and mouse hit-testing
//! - [`style`]: Theming and colors

pub mod layout;
pub mod style;

mod overlays;
mod render;
mod status;

pub use layout::{ScreenLayout, TableHit, screen_layout, table_capacity};
pub use render::render;

/// Width of the "Delete" column in the task table.
pub const DELETE_COLUMN_WIDTH: u16 = 10;
/// Width of the "Edit" column in the task table.
pub const EDIT_COLUMN_WIDTH: u16 = 8;
/// Width of each button in the button row.
pub const BUTTON_WIDTH: u16 = 14;
