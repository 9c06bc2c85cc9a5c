// Card layout and palette in one place; values follow the Tailwind sizes the card
// was designed with.

use eframe::egui::Color32;

/// Maximum card width in logical pixels (max-w-md)
pub const CARD_MAX_WIDTH: f32 = 448.0;

/// Minimum gap kept between the card and the window edge
pub const WINDOW_MARGIN: f32 = 16.0;

/// Default window size
pub const DEFAULT_WINDOW_SIZE: [f32; 2] = [640.0, 480.0];

/// Hover fade duration for the counter button, in seconds
pub const HOVER_TRANSITION_SECS: f32 = 0.15;

/// UI spacing constants
pub mod spacing {
    /// Space under the paragraph (mb-4)
    pub const MEDIUM: f32 = 16.0;

    /// Space under the heading and the button row (mb-6)
    pub const LARGE: f32 = 24.0;
}

/// Card frame constants
pub mod card {
    /// Inner padding (p-8)
    pub const INNER_MARGIN: f32 = 32.0;

    /// Corner radius (rounded-lg)
    pub const ROUNDING: f32 = 8.0;

    /// Drop shadow blur (shadow-md)
    pub const SHADOW_BLUR: f32 = 12.0;

    /// Drop shadow vertical offset
    pub const SHADOW_OFFSET_Y: f32 = 4.0;
}

/// Counter button constants
pub mod button {
    /// Horizontal padding (px-4)
    pub const PADDING_H: f32 = 16.0;

    /// Vertical padding (py-2)
    pub const PADDING_V: f32 = 8.0;

    /// Corner radius (rounded)
    pub const ROUNDING: f32 = 4.0;
}

/// Font sizes
pub mod text {
    /// text-3xl
    pub const HEADING: f32 = 30.0;

    pub const BODY: f32 = 16.0;

    /// text-sm
    pub const CAPTION: f32 = 14.0;
}

/// Colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color32,
    pub card: Color32,
    pub shadow: Color32,
    pub heading: Color32,
    pub body: Color32,
    pub caption: Color32,
    pub button: Color32,
    pub button_hover: Color32,
    pub button_text: Color32,
}

/// gray-100 page, white card, blue-500/600 button.
pub const LIGHT: Palette = Palette {
    background: Color32::from_rgb(243, 244, 246),
    card: Color32::WHITE,
    shadow: Color32::from_rgba_premultiplied(0, 0, 0, 25),
    heading: Color32::from_rgb(31, 41, 55),
    body: Color32::from_rgb(75, 85, 99),
    caption: Color32::from_rgb(107, 114, 128),
    button: Color32::from_rgb(59, 130, 246),
    button_hover: Color32::from_rgb(37, 99, 235),
    button_text: Color32::WHITE,
};

pub const DARK: Palette = Palette {
    background: Color32::from_rgb(17, 24, 39),
    card: Color32::from_rgb(31, 41, 55),
    shadow: Color32::from_rgba_premultiplied(0, 0, 0, 90),
    heading: Color32::from_rgb(243, 244, 246),
    body: Color32::from_rgb(209, 213, 219),
    caption: Color32::from_rgb(156, 163, 175),
    button: Color32::from_rgb(59, 130, 246),
    button_hover: Color32::from_rgb(37, 99, 235),
    button_text: Color32::WHITE,
};
