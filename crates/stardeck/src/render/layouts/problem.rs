use eframe::egui::{self, FontId, Pos2};

use crate::deck::ProblemContent;
use crate::render::text;
use crate::theme::Theme;

pub fn render(
    ui: &egui::Ui,
    content: &ProblemContent,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
) {
    let gap = 48.0 * scale;
    let left_width = rect.width() * 0.38;
    let left = egui::Rect::from_min_size(rect.min, egui::vec2(left_width, rect.height()));
    let right = egui::Rect::from_min_max(
        Pos2::new(left.right() + gap, rect.top()),
        rect.max,
    );

    draw_warning_panel(ui, left, theme, opacity, scale);

    // Pain-point list, one accented card per bullet
    let danger = Theme::with_opacity(theme.danger, opacity);
    let fg = Theme::with_opacity(theme.foreground, opacity);
    let card_pad = 18.0 * scale;
    let font = FontId::proportional(theme.body_size * scale);
    let mut y = right.top();

    for bullet in &content.bullets {
        let text_width = right.width() - card_pad * 2.0 - 50.0 * scale;
        let text_height = text::measure_wrapped(ui, bullet, font.clone(), text_width);
        let card = egui::Rect::from_min_size(
            Pos2::new(right.left(), y),
            egui::vec2(right.width(), text_height + card_pad * 2.0),
        );
        ui.painter().rect_filled(
            card,
            10.0 * scale,
            Theme::with_opacity(theme.panel_fill, opacity),
        );
        // Accent edge on the left
        let edge = egui::Rect::from_min_size(card.min, egui::vec2(4.0 * scale, card.height()));
        ui.painter()
            .rect_filled(edge, 2.0 * scale, Theme::with_opacity(theme.accent_alt, opacity));

        text::draw_centered(
            ui,
            "\u{2715}",
            card.left() + card_pad + 12.0 * scale,
            card.top() + card_pad,
            FontId::proportional(theme.body_size * 0.9 * scale),
            danger,
        );
        text::draw_wrapped(
            ui,
            bullet,
            Pos2::new(card.left() + card_pad + 50.0 * scale, card.top() + card_pad),
            font.clone(),
            fg,
            text_width,
        );

        y = card.bottom() + 20.0 * scale;
    }
}

/// Big crossed-out clapper panel on the left, tinted toward the danger color.
fn draw_warning_panel(ui: &egui::Ui, rect: egui::Rect, theme: &Theme, opacity: f32, scale: f32) {
    ui.painter().rect_filled(
        rect,
        24.0 * scale,
        Theme::with_opacity(theme.danger, opacity * 0.08),
    );
    ui.painter().rect_stroke(
        rect,
        24.0 * scale,
        egui::Stroke::new(3.0 * scale, Theme::with_opacity(theme.danger, opacity * 0.35)),
        egui::StrokeKind::Inside,
    );

    let center = rect.center();
    let glyph_size = theme.h1_size * 1.1 * scale;
    text::draw_centered(
        ui,
        "\u{2716}",
        center.x,
        center.y - glyph_size * 0.85,
        FontId::proportional(glyph_size),
        Theme::with_opacity(theme.danger, opacity),
    );
    text::draw_centered_wrapped(
        ui,
        "Traditional editing is slow, painful, and kills creativity.",
        center.x,
        center.y + glyph_size * 0.55,
        FontId::proportional(theme.body_size * 0.85 * scale),
        Theme::with_opacity(theme.foreground, opacity * 0.8),
        rect.width() * 0.7,
    );
}
