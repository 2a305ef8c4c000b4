//! Small painting helpers shared by the slide layouts.

use eframe::egui::{self, Color32, FontId, Pos2};

/// Paint wrapped text at `pos`, returning the height used.
pub fn draw_wrapped(
    ui: &egui::Ui,
    text: &str,
    pos: Pos2,
    font: FontId,
    color: Color32,
    max_width: f32,
) -> f32 {
    let galley = ui
        .painter()
        .layout(text.to_string(), font, color, max_width);
    let height = galley.rect.height();
    ui.painter().galley(pos, galley, color);
    height
}

/// Paint a single unwrapped line centered on `center_x`, returning the height used.
pub fn draw_centered(
    ui: &egui::Ui,
    text: &str,
    center_x: f32,
    y: f32,
    font: FontId,
    color: Color32,
) -> f32 {
    let galley = ui.painter().layout_no_wrap(text.to_string(), font, color);
    let pos = Pos2::new(center_x - galley.rect.width() / 2.0, y);
    let height = galley.rect.height();
    ui.painter().galley(pos, galley, color);
    height
}

/// Paint wrapped text centered on `center_x`, returning the height used.
pub fn draw_centered_wrapped(
    ui: &egui::Ui,
    text: &str,
    center_x: f32,
    y: f32,
    font: FontId,
    color: Color32,
    max_width: f32,
) -> f32 {
    let galley = ui
        .painter()
        .layout(text.to_string(), font, color, max_width);
    let pos = Pos2::new(center_x - galley.rect.width() / 2.0, y);
    let height = galley.rect.height();
    ui.painter().galley(pos, galley, color);
    height
}

/// Height a wrapped run of text would occupy, without painting it.
pub fn measure_wrapped(
    ui: &egui::Ui,
    text: &str,
    font: FontId,
    max_width: f32,
) -> f32 {
    ui.painter()
        .layout(text.to_string(), font, Color32::WHITE, max_width)
        .rect
        .height()
}
