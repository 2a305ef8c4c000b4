use eframe::egui::{self, FontId, Pos2};

use crate::deck::SolutionContent;
use crate::render::text;
use crate::theme::Theme;

pub fn render(
    ui: &egui::Ui,
    content: &SolutionContent,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
) {
    if content.features.is_empty() {
        return;
    }

    let gap = 32.0 * scale;
    let count = content.features.len();
    let card_width = (rect.width() - gap * (count as f32 - 1.0)) / count as f32;
    let card_height = (rect.height() * 0.55).min(420.0 * scale);
    let cards_top = rect.top() + 20.0 * scale;

    for (i, feature) in content.features.iter().enumerate() {
        let card = egui::Rect::from_min_size(
            Pos2::new(rect.left() + i as f32 * (card_width + gap), cards_top),
            egui::vec2(card_width, card_height),
        );
        ui.painter().rect_filled(
            card,
            16.0 * scale,
            Theme::with_opacity(theme.panel_fill, opacity),
        );
        ui.painter().rect_stroke(
            card,
            16.0 * scale,
            egui::Stroke::new(1.5 * scale, Theme::with_opacity(theme.accent, opacity * 0.4)),
            egui::StrokeKind::Inside,
        );

        // Glyph badge
        let badge_center = Pos2::new(card.center().x, card.top() + 80.0 * scale);
        ui.painter().circle_filled(
            badge_center,
            42.0 * scale,
            Theme::with_opacity(theme.accent, opacity * 0.12),
        );
        text::draw_centered(
            ui,
            "\u{2726}",
            badge_center.x,
            badge_center.y - 24.0 * scale,
            FontId::proportional(theme.h3_size * scale),
            Theme::with_opacity(theme.accent, opacity),
        );

        let mut y = badge_center.y + 70.0 * scale;
        y += text::draw_centered_wrapped(
            ui,
            &feature.title,
            card.center().x,
            y,
            FontId::proportional(theme.body_size * 1.1 * scale),
            Theme::with_opacity(theme.heading_color, opacity),
            card.width() - 30.0 * scale,
        );
        y += 14.0 * scale;
        text::draw_centered_wrapped(
            ui,
            &feature.desc,
            card.center().x,
            y,
            FontId::proportional(theme.small_size * scale),
            Theme::with_opacity(theme.foreground, opacity * 0.75),
            card.width() - 30.0 * scale,
        );
    }

    // Pipeline tagline under the cards
    let tagline_y = cards_top + card_height + 70.0 * scale;
    let font = FontId::proportional(theme.h3_size * 0.8 * scale);
    let parts = [
        ("Raw Clip", Theme::with_opacity(theme.accent_alt, opacity)),
        ("  \u{2192}  ", Theme::with_opacity(theme.foreground, opacity)),
        ("VIRAL GOLD", Theme::with_opacity(theme.accent, opacity)),
    ];
    let galleys: Vec<_> = parts
        .iter()
        .map(|(part, color)| {
            ui.painter()
                .layout_no_wrap(part.to_string(), font.clone(), *color)
        })
        .collect();
    let total: f32 = galleys.iter().map(|g| g.rect.width()).sum();
    let mut x = rect.center().x - total / 2.0;
    for (galley, (_, color)) in galleys.into_iter().zip(parts) {
        let width = galley.rect.width();
        ui.painter().galley(Pos2::new(x, tagline_y), galley, color);
        x += width;
    }
}
