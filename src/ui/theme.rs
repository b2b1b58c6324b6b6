//! Theme constants for the Tic-Tac-Toe GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(40, 42, 46);
pub const SQUARE_BG: Color32 = Color32::from_rgb(245, 245, 240);
pub const SQUARE_BORDER: Color32 = Color32::from_rgb(153, 153, 153);
pub const HEADING_TEXT: Color32 = Color32::from_rgb(160, 165, 175);

// Marks
pub const MARK_X: Color32 = Color32::from_rgb(25, 25, 30);
pub const MARK_O: Color32 = Color32::from_rgb(200, 60, 60);

// Highlights
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(140, 220, 140);

pub fn hover_preview() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 90)
}

// Panel colors
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_PLAYING: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_DRAW: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const HEADING_SIZE: f32 = 28.0;
pub const SQUARE_MAX: f32 = 120.0;
pub const SQUARE_GAP: f32 = 2.0;
pub const MARK_FONT_RATIO: f32 = 0.6;
