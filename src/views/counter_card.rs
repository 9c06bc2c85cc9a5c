use eframe::egui::epaint::Shadow;
use eframe::egui::{self, Color32, CursorIcon, Margin, RichText, Rounding, Sense};

use crate::types::Counter;
use crate::ui_constants::{self, button, card, spacing, text, Palette};

pub const TITLE: &str = "Simple egui App";
pub const WELCOME: &str = "Welcome to your Rust + eframe + egui application";
pub const CAPTION: &str = "Click the button to increment the counter";

/// What happened to the card during one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardResponse {
    pub activated: bool,
}

/// Card with a title, a welcome line, a counter button and a caption.
///
/// The counter lives and dies with the card: a fresh card always starts at zero.
#[derive(Debug, Default)]
pub struct CounterCard {
    count: Counter,
}

impl CounterCard {
    pub fn new() -> Self {
        Self { count: Counter::new() }
    }

    pub fn count(&self) -> u64 {
        self.count.get()
    }

    /// Text shown on the button.
    pub fn label(&self) -> String {
        format!("Count: {}", self.count)
    }

    /// Handles one activation of the button. Returns the new count.
    pub fn activate(&mut self) -> u64 {
        let n = self.count.increment();
        log::trace!("counter activated, now {n}");
        n
    }

    /// Draws the full window: background panel with the card centred on it.
    pub fn show(&mut self, ctx: &egui::Context, palette: &Palette) -> CardResponse {
        let mut out = CardResponse::default();

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(palette.background))
            .show(ctx, |ui| {
                // Vertical centring uses the card height measured on the previous frame.
                let height_id = egui::Id::new("counter_card_height");
                let last_h = ui
                    .memory(|m| m.data.get_temp::<f32>(height_id))
                    .unwrap_or(0.0);
                let avail = ui.available_size();
                let top = ((avail.y - last_h) / 2.0).max(ui_constants::WINDOW_MARGIN);
                ui.add_space(top);

                let width = (avail.x - 2.0 * ui_constants::WINDOW_MARGIN)
                    .min(ui_constants::CARD_MAX_WIDTH)
                    .max(0.0);

                let frame_out = ui.vertical_centered(|ui| self.draw_card(ui, palette, width));
                out = frame_out.inner;

                let h = frame_out.response.rect.height();
                if (h - last_h).abs() > 0.5 {
                    ui.memory_mut(|m| m.data.insert_temp(height_id, h));
                    ui.ctx().request_repaint();
                }
            });

        if out.activated {
            ctx.request_repaint();
        }
        out
    }

    fn draw_card(&mut self, ui: &mut egui::Ui, palette: &Palette, width: f32) -> CardResponse {
        let mut out = CardResponse::default();
        let inner_w = (width - 2.0 * card::INNER_MARGIN).max(0.0);

        egui::Frame::none()
            .fill(palette.card)
            .rounding(Rounding::same(card::ROUNDING))
            .inner_margin(Margin::same(card::INNER_MARGIN))
            .shadow(Shadow {
                offset: egui::vec2(0.0, card::SHADOW_OFFSET_Y),
                blur: card::SHADOW_BLUR,
                spread: 0.0,
                color: palette.shadow,
            })
            .show(ui, |ui| {
                ui.set_width(inner_w);
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(TITLE).size(text::HEADING).color(palette.heading));
                    ui.add_space(spacing::LARGE);

                    ui.label(RichText::new(WELCOME).size(text::BODY).color(palette.body));
                    ui.add_space(spacing::MEDIUM);

                    out.activated = self.counter_button(ui, palette);
                    ui.add_space(spacing::LARGE);

                    ui.label(RichText::new(CAPTION).size(text::CAPTION).color(palette.caption));
                });
            });

        out
    }

    /// Blue pill button; fill fades towards the hover colour while the pointer is over it.
    /// A click is applied before painting, so the frame that handles it already shows
    /// the new count.
    fn counter_button(&mut self, ui: &mut egui::Ui, palette: &Palette) -> bool {
        let font = egui::FontId::proportional(text::BODY);
        let padding = egui::vec2(2.0 * button::PADDING_H, 2.0 * button::PADDING_V);

        let galley = ui
            .painter()
            .layout_no_wrap(self.label(), font.clone(), palette.button_text);
        let (rect, response) = ui.allocate_exact_size(galley.size() + padding, Sense::click());
        let response = response.on_hover_cursor(CursorIcon::PointingHand);

        let clicked = response.clicked();
        let galley = if clicked {
            self.activate();
            ui.painter()
                .layout_no_wrap(self.label(), font, palette.button_text)
        } else {
            galley
        };

        if ui.is_rect_visible(rect) {
            let t = ui.ctx().animate_bool_with_time(
                response.id,
                response.hovered(),
                ui_constants::HOVER_TRANSITION_SECS,
            );
            let fill = mix(palette.button, palette.button_hover, t);
            // A longer label after a click grows around the allocated centre until the next layout.
            let body = egui::Rect::from_center_size(rect.center(), galley.size() + padding);
            let painter = ui.painter();
            painter.rect_filled(body, Rounding::same(button::ROUNDING), fill);
            painter.galley(rect.center() - galley.size() / 2.0, galley, palette.button_text);
        }

        clicked
    }
}

fn mix(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let ch = |x: u8, y: u8| egui::lerp(x as f32..=y as f32, t).round() as u8;
    Color32::from_rgba_premultiplied(
        ch(a.r(), b.r()),
        ch(a.g(), b.g()),
        ch(a.b(), b.b()),
        ch(a.a(), b.a()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui_constants::{DARK, LIGHT};
    use eframe::egui::{
        epaint::Shape, Event, FullOutput, Modifiers, PointerButton, Pos2, RawInput, Rect,
    };

    fn raw_input() -> RawInput {
        RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, egui::vec2(800.0, 600.0))),
            ..Default::default()
        }
    }

    fn frame_with_events(
        ctx: &egui::Context,
        card: &mut CounterCard,
        events: Vec<Event>,
    ) -> (CardResponse, FullOutput) {
        let mut resp = CardResponse::default();
        let input = RawInput {
            events,
            ..raw_input()
        };
        let output = ctx.run(input, |ctx| resp = card.show(ctx, &LIGHT));
        (resp, output)
    }

    fn primary(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    /// Centre of the painted counter label, which is also the centre of the button.
    fn button_centre(output: &FullOutput) -> Pos2 {
        fn find(shape: &Shape) -> Option<Pos2> {
            match shape {
                Shape::Text(t) if t.galley.text().starts_with("Count: ") => {
                    Some(t.pos + t.galley.size() / 2.0)
                }
                Shape::Vec(shapes) => shapes.iter().find_map(find),
                _ => None,
            }
        }
        output
            .shapes
            .iter()
            .find_map(|c| find(&c.shape))
            .expect("counter label painted")
    }

    /// Press on one frame, release on the next. Returns the release frame.
    fn click(ctx: &egui::Context, card: &mut CounterCard, at: Pos2) -> (CardResponse, FullOutput) {
        let (pressed, _) =
            frame_with_events(ctx, card, vec![Event::PointerMoved(at), primary(at, true)]);
        assert!(!pressed.activated, "press alone must not activate");
        frame_with_events(ctx, card, vec![primary(at, false)])
    }

    /// Settles the vertical centring so the button stays put between frames.
    fn settled(ctx: &egui::Context, card: &mut CounterCard) -> FullOutput {
        let _ = run_frame(ctx, card, &LIGHT);
        let _ = run_frame(ctx, card, &LIGHT);
        run_frame(ctx, card, &LIGHT)
    }

    fn run_frame(ctx: &egui::Context, card: &mut CounterCard, palette: &Palette) -> FullOutput {
        ctx.run(raw_input(), |ctx| {
            let _ = card.show(ctx, palette);
        })
    }

    fn collect_texts(shape: &Shape, out: &mut Vec<String>) {
        match shape {
            Shape::Text(t) => out.push(t.galley.text().to_string()),
            Shape::Vec(shapes) => shapes.iter().for_each(|s| collect_texts(s, out)),
            _ => {}
        }
    }

    fn painted_texts(output: &FullOutput) -> Vec<String> {
        let mut out = Vec::new();
        for clipped in &output.shapes {
            collect_texts(&clipped.shape, &mut out);
        }
        out
    }

    fn count_labels(texts: &[String]) -> Vec<&String> {
        texts.iter().filter(|t| t.starts_with("Count: ")).collect()
    }

    #[test]
    fn initial_label_is_zero() {
        let card = CounterCard::new();
        assert_eq!(card.count(), 0);
        assert_eq!(card.label(), "Count: 0");
    }

    #[test]
    fn single_activation() {
        let mut card = CounterCard::new();
        assert_eq!(card.activate(), 1);
        assert_eq!(card.label(), "Count: 1");
    }

    #[test]
    fn label_tracks_activations() {
        for n in [0u64, 1, 2, 7, 100, 1000] {
            let mut card = CounterCard::new();
            for _ in 0..n {
                card.activate();
            }
            assert_eq!(card.count(), n);
            assert_eq!(card.label(), format!("Count: {n}"));
        }
    }

    #[test]
    fn remount_starts_from_zero() {
        let mut card = CounterCard::new();
        card.activate();
        card.activate();
        assert_eq!(card.label(), "Count: 2");
        drop(card);

        let card = CounterCard::default();
        assert_eq!(card.label(), "Count: 0");
    }

    #[test]
    fn first_frame_paints_all_text() {
        let ctx = egui::Context::default();
        let mut card = CounterCard::new();
        let output = run_frame(&ctx, &mut card, &LIGHT);
        let texts = painted_texts(&output);

        for expected in [TITLE, WELCOME, "Count: 0", CAPTION] {
            assert!(texts.iter().any(|t| t == expected), "missing {expected:?} in {texts:?}");
        }
    }

    #[test]
    fn repeated_frames_without_input_do_not_change_count() {
        let ctx = egui::Context::default();
        let mut card = CounterCard::new();
        for _ in 0..5 {
            let output = run_frame(&ctx, &mut card, &LIGHT);
            assert_eq!(count_labels(&painted_texts(&output)), vec!["Count: 0"]);
        }
        assert_eq!(card.count(), 0);
    }

    #[test]
    fn frame_after_activation_shows_new_label() {
        let ctx = egui::Context::default();
        let mut card = CounterCard::new();
        let _ = run_frame(&ctx, &mut card, &DARK);

        card.activate();
        card.activate();
        card.activate();

        let output = run_frame(&ctx, &mut card, &DARK);
        assert_eq!(count_labels(&painted_texts(&output)), vec!["Count: 3"]);

        let output = run_frame(&ctx, &mut card, &DARK);
        assert_eq!(count_labels(&painted_texts(&output)), vec!["Count: 3"]);
    }

    #[test]
    fn frames_without_input_report_no_activation() {
        let ctx = egui::Context::default();
        let mut card = CounterCard::new();
        let mut responses = Vec::new();
        for _ in 0..3 {
            let _ = ctx.run(raw_input(), |ctx| responses.push(card.show(ctx, &LIGHT)));
        }
        assert!(responses.iter().all(|r| !r.activated));
    }

    #[test]
    fn clicking_the_button_increments() {
        let ctx = egui::Context::default();
        let mut card = CounterCard::new();
        let at = button_centre(&settled(&ctx, &mut card));

        for n in 1..=3u64 {
            let (resp, output) = click(&ctx, &mut card, at);
            assert!(resp.activated, "click {n} not reported");
            assert_eq!(card.count(), n);
            let expected = format!("Count: {n}");
            assert_eq!(count_labels(&painted_texts(&output)), vec![&expected]);

            let output = run_frame(&ctx, &mut card, &LIGHT);
            assert_eq!(count_labels(&painted_texts(&output)), vec![&expected]);
        }
    }

    #[test]
    fn click_outside_the_button_is_ignored() {
        let ctx = egui::Context::default();
        let mut card = CounterCard::new();
        let _ = settled(&ctx, &mut card);

        let (resp, _) = click(&ctx, &mut card, Pos2::new(5.0, 5.0));
        assert!(!resp.activated);
        assert_eq!(card.count(), 0);
    }

    #[test]
    fn click_changes_nothing_but_the_label() {
        let on_disk = |p: &std::path::Path| std::fs::read(p).ok();
        let config_path = crate::app::config::config_file_path();
        let log_path = crate::app::config::AppConfig::default().log_file;
        let config_before = on_disk(&config_path);
        let log_before = on_disk(&log_path);

        let ctx = egui::Context::default();
        let mut card = CounterCard::new();
        let before = settled(&ctx, &mut card);
        let at = button_centre(&before);

        let (resp, _) = click(&ctx, &mut card, at);
        assert!(resp.activated);
        let after = run_frame(&ctx, &mut card, &LIGHT);

        let without_label = |texts: Vec<String>| -> Vec<String> {
            texts.into_iter().filter(|t| !t.starts_with("Count: ")).collect()
        };
        assert_eq!(
            without_label(painted_texts(&before)),
            without_label(painted_texts(&after))
        );
        assert_eq!(count_labels(&painted_texts(&after)), vec!["Count: 1"]);

        assert_eq!(on_disk(&config_path), config_before);
        assert_eq!(on_disk(&log_path), log_before);
    }

    #[test]
    fn mix_endpoints() {
        let a = Color32::from_rgb(0, 100, 200);
        let b = Color32::from_rgb(100, 0, 250);
        assert_eq!(mix(a, b, 0.0), a);
        assert_eq!(mix(a, b, 1.0), b);
        assert_eq!(mix(a, b, 0.5), Color32::from_rgb(50, 50, 225));
        assert_eq!(mix(a, b, 3.0), b);
    }
}
