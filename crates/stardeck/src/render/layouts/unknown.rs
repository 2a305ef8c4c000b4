use eframe::egui::{self, FontId};

use crate::render::text;
use crate::theme::Theme;

/// Fallback for slide kinds this build doesn't recognize. The deck keeps
/// presenting; only this slide degrades.
pub fn render(
    ui: &egui::Ui,
    kind: &str,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
) {
    let center = rect.center();

    text::draw_centered(
        ui,
        "\u{26A0}",
        center.x,
        center.y - 120.0 * scale,
        FontId::proportional(theme.h2_size * scale),
        Theme::with_opacity(theme.foreground, opacity * 0.5),
    );
    text::draw_centered(
        ui,
        "Unknown Slide Type",
        center.x,
        center.y - 20.0 * scale,
        FontId::proportional(theme.h3_size * scale),
        Theme::with_opacity(theme.heading_color, opacity),
    );
    text::draw_centered(
        ui,
        kind,
        center.x,
        center.y + 40.0 * scale,
        FontId::monospace(theme.body_size * 0.8 * scale),
        Theme::with_opacity(theme.accent_alt, opacity),
    );
    text::draw_centered_wrapped(
        ui,
        "This deck file uses a slide kind this build does not understand.",
        center.x,
        center.y + 90.0 * scale,
        FontId::proportional(theme.small_size * scale),
        Theme::with_opacity(theme.foreground, opacity * 0.6),
        rect.width() * 0.6,
    );
}
