use eframe::egui::{self, FontId, Pos2};

use crate::deck::TechStackContent;
use crate::render::text;
use crate::theme::Theme;

/// Pipeline chain: one box per stage with arrows between, centered.
pub fn render(
    ui: &egui::Ui,
    content: &TechStackContent,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
) {
    if content.stack.is_empty() {
        return;
    }

    let count = content.stack.len();
    let arrow_width = 64.0 * scale;
    let box_height = 130.0 * scale;
    let gap_total = arrow_width * (count as f32 - 1.0);
    let box_width = ((rect.width() - gap_total) / count as f32).min(260.0 * scale);
    let total = box_width * count as f32 + gap_total;

    let mut x = rect.center().x - total / 2.0;
    let y = rect.center().y - box_height / 2.0;

    for (i, stage) in content.stack.iter().enumerate() {
        let cell = egui::Rect::from_min_size(Pos2::new(x, y), egui::vec2(box_width, box_height));
        ui.painter().rect_filled(
            cell,
            12.0 * scale,
            Theme::with_opacity(theme.panel_fill, opacity),
        );
        ui.painter().rect_stroke(
            cell,
            12.0 * scale,
            egui::Stroke::new(1.5 * scale, Theme::with_opacity(theme.accent, opacity * 0.5)),
            egui::StrokeKind::Inside,
        );

        let font = FontId::proportional(theme.small_size * scale);
        let text_height = text::measure_wrapped(ui, stage, font.clone(), cell.width() - 24.0 * scale);
        text::draw_centered_wrapped(
            ui,
            stage,
            cell.center().x,
            cell.center().y - text_height / 2.0,
            font,
            Theme::with_opacity(theme.heading_color, opacity),
            cell.width() - 24.0 * scale,
        );

        x = cell.right();
        if i + 1 < count {
            text::draw_centered(
                ui,
                "\u{2192}",
                x + arrow_width / 2.0,
                rect.center().y - theme.h3_size * 0.5 * scale,
                FontId::proportional(theme.h3_size * scale),
                Theme::with_opacity(theme.accent_alt, opacity),
            );
            x += arrow_width;
        }
    }
}
