use eframe::egui::Color32;

use crate::Variant;

pub struct Config;

impl Config {
    /// Rows and columns of the field.
    pub const CELLS_PER_LINE: usize = 50;

    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 300.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;
    pub const FILENAME_INPUT_FIELD_SIZE: [f32; 2] = [160., 20.];
    pub const WIDGET_GAP: f32 = 20.;

    pub const GRID_LINE_COLOR: Color32 = Color32::from_rgb(0xcc, 0xcc, 0xcc);
    pub const GRID_LINE_WIDTH: f32 = 1.;

    pub const GENERATIONS_PER_SECOND: f64 = 10.;
    pub const MAX_GENERATIONS_PER_SECOND: f64 = 120.;
    pub const RANDOM_CELLS: usize = 500;
    pub const FILENAME: &'static str = "field.txt";

    const LIFE_COLORS: [Color32; 2] = [Color32::WHITE, Color32::BLACK];
    const WIREWORLD_COLORS: [Color32; 4] = [
        Color32::WHITE,
        Color32::from_rgb(0xbb, 0x77, 0x33), // copper
        Color32::from_rgb(0x77, 0xbb, 0xff),
        Color32::from_rgb(0x00, 0x66, 0xff),
    ];

    pub fn state_color(variant: Variant, code: u8) -> Color32 {
        let palette: &[Color32] = match variant {
            Variant::Life => &Self::LIFE_COLORS,
            Variant::Wireworld => &Self::WIREWORLD_COLORS,
        };
        palette.get(code as usize).copied().unwrap_or(Color32::RED)
    }

    pub fn state_label(variant: Variant, code: u8) -> &'static str {
        match (variant, code) {
            (Variant::Life, 0) => "Dead",
            (Variant::Life, _) => "Alive",
            (Variant::Wireworld, 0) => "Empty",
            (Variant::Wireworld, 1) => "Wire",
            (Variant::Wireworld, 2) => "Tail",
            (Variant::Wireworld, _) => "Head",
        }
    }

    pub fn population_label(variant: Variant) -> &'static str {
        match variant {
            Variant::Life => "Living cells",
            Variant::Wireworld => "Electron heads",
        }
    }
}
