use eframe::egui::{self, FontId, Pos2};

use crate::deck::TractionContent;
use crate::render::text;
use crate::theme::Theme;

pub fn render(
    ui: &egui::Ui,
    content: &TractionContent,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
) {
    if content.testimonials.is_empty() {
        return;
    }

    let gap = 32.0 * scale;
    let count = content.testimonials.len();
    let card_width = (rect.width() - gap * (count as f32 - 1.0)) / count as f32;
    let card_height = (rect.height() * 0.7).min(460.0 * scale);
    let top = rect.center().y - card_height / 2.0;

    let pad = 32.0 * scale;
    let quote_font = FontId::proportional(theme.small_size * 1.1 * scale);
    let quote_color = Theme::with_opacity(theme.foreground, opacity);

    for (i, testimonial) in content.testimonials.iter().enumerate() {
        let card = egui::Rect::from_min_size(
            Pos2::new(rect.left() + i as f32 * (card_width + gap), top),
            egui::vec2(card_width, card_height),
        );
        ui.painter().rect_filled(
            card,
            20.0 * scale,
            Theme::with_opacity(theme.panel_fill, opacity),
        );
        ui.painter().rect_stroke(
            card,
            20.0 * scale,
            egui::Stroke::new(
                1.5 * scale,
                Theme::with_opacity(theme.accent_alt, opacity * 0.5),
            ),
            egui::StrokeKind::Inside,
        );

        // Oversized opening quote mark
        ui.painter().text(
            Pos2::new(card.left() + 10.0 * scale, card.top() - 14.0 * scale),
            egui::Align2::LEFT_TOP,
            "\u{201C}",
            FontId::proportional(theme.h2_size * scale),
            Theme::with_opacity(theme.accent_alt, opacity * 0.5),
        );

        text::draw_wrapped(
            ui,
            testimonial,
            Pos2::new(card.left() + pad, card.top() + 60.0 * scale),
            quote_font.clone(),
            quote_color,
            card.width() - pad * 2.0,
        );

        // Attribution footer
        let footer_y = card.bottom() - 50.0 * scale;
        ui.painter().circle_filled(
            Pos2::new(card.left() + pad + 12.0 * scale, footer_y + 12.0 * scale),
            12.0 * scale,
            Theme::with_opacity(theme.accent, opacity * 0.8),
        );
        ui.painter().text(
            Pos2::new(card.left() + pad + 36.0 * scale, footer_y + 4.0 * scale),
            egui::Align2::LEFT_TOP,
            "Verified Creator",
            FontId::proportional(theme.small_size * 0.7 * scale),
            Theme::with_opacity(theme.foreground, opacity * 0.6),
        );
    }
}
