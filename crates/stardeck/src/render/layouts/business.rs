use eframe::egui::{self, FontId, Pos2};

use crate::deck::BusinessContent;
use crate::render::text;
use crate::theme::Theme;

pub fn render(
    ui: &egui::Ui,
    content: &BusinessContent,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
) {
    if content.tiers.is_empty() {
        return;
    }

    let gap = 32.0 * scale;
    let count = content.tiers.len();
    let card_width = (rect.width() - gap * (count as f32 - 1.0)) / count as f32;

    for (i, tier) in content.tiers.iter().enumerate() {
        let card = egui::Rect::from_min_size(
            Pos2::new(rect.left() + i as f32 * (card_width + gap), rect.top()),
            egui::vec2(card_width, rect.height()),
        );

        let (fill, stroke) = if tier.highlight {
            (
                Theme::with_opacity(theme.accent_alt, opacity * 0.1),
                egui::Stroke::new(2.0 * scale, Theme::with_opacity(theme.accent_alt, opacity)),
            )
        } else {
            (
                Theme::with_opacity(theme.panel_fill, opacity),
                egui::Stroke::new(
                    1.0 * scale,
                    Theme::with_opacity(theme.panel_stroke, opacity),
                ),
            )
        };
        ui.painter().rect_filled(card, 16.0 * scale, fill);
        ui.painter()
            .rect_stroke(card, 16.0 * scale, stroke, egui::StrokeKind::Inside);

        let pad = 32.0 * scale;
        let mut y = card.top() + pad;
        y += text::draw_wrapped(
            ui,
            &tier.name,
            Pos2::new(card.left() + pad, y),
            FontId::proportional(theme.body_size * scale),
            Theme::with_opacity(theme.heading_color, opacity),
            card.width() - pad * 2.0,
        );
        y += 10.0 * scale;
        y += text::draw_wrapped(
            ui,
            &tier.price,
            Pos2::new(card.left() + pad, y),
            FontId::proportional(theme.h3_size * scale),
            Theme::with_opacity(theme.accent, opacity),
            card.width() - pad * 2.0,
        );
        y += 30.0 * scale;

        let check = Theme::with_opacity(theme.success, opacity);
        let fg = Theme::with_opacity(theme.foreground, opacity);
        let feature_font = FontId::proportional(theme.small_size * scale);
        for feature in &tier.features {
            ui.painter().text(
                Pos2::new(card.left() + pad, y),
                egui::Align2::LEFT_TOP,
                "\u{2713}",
                feature_font.clone(),
                check,
            );
            let height = text::draw_wrapped(
                ui,
                feature,
                Pos2::new(card.left() + pad + 32.0 * scale, y),
                feature_font.clone(),
                fg,
                card.width() - pad * 2.0 - 32.0 * scale,
            );
            y += height + 14.0 * scale;
        }
    }
}
