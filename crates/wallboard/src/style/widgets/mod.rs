//! Widget style functions shared by the views.

#![allow(dead_code)] // Utility styles kept for themeable components

mod buttons;
mod containers;
mod inputs;
pub mod palette;
mod shadows;

pub use shadows::radius;

pub use buttons::{
    board_button_selected_style, board_button_style, danger_button_style, primary_button_style,
    secondary_button_style, target_button_selected_style, target_button_style, tile_button_style,
};
pub use containers::{
    detail_panel_style, error_banner_style, gallery_style, header_style, placeholder_style,
    sidebar_style, status_error_style, status_ok_style, tile_style,
};
pub use inputs::{scrollable_style, text_input_style};
