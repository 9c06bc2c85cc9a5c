// Application root: mounts one counter card and forwards every frame to it.

use eframe::{egui, App};

use crate::views::{CardResponse, CounterCard};

pub mod config;
pub mod error;

use config::Theme;

pub struct CounterApp {
    card: CounterCard,
    theme: Theme,
}

impl CounterApp {
    pub fn new(theme: Theme) -> Self {
        Self {
            card: CounterCard::new(),
            theme,
        }
    }

    /// Draws one frame. `update` delegates here so the frame can be driven without a window.
    pub fn draw(&mut self, ctx: &egui::Context) -> CardResponse {
        self.card.show(ctx, self.theme.palette())
    }
}

impl App for CounterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.draw(ctx);
    }
}

/// Base egui visuals for the theme; the card paints its own palette on top.
pub fn apply_theme(ctx: &egui::Context, theme: Theme) {
    let visuals = match theme {
        Theme::Light => egui::Visuals::light(),
        Theme::Dark => egui::Visuals::dark(),
    };
    ctx.set_visuals(visuals);
}
