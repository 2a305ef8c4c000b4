use eframe::egui::{self, FontId, Pos2};

use crate::deck::CompetitionContent;
use crate::theme::Theme;

/// Comparison table: one row per competitor, the highlighted row tinted.
pub fn render(
    ui: &egui::Ui,
    content: &CompetitionContent,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
) {
    // Column anchors as fractions of the table width
    const COLUMNS: [(&str, f32); 4] = [
        ("Solution", 0.0),
        ("Speed", 0.45),
        ("Quality", 0.65),
        ("Effort", 0.85),
    ];

    let header_font = FontId::proportional(theme.small_size * scale);
    let header_color = Theme::with_opacity(theme.foreground, opacity * 0.6);
    let row_height = 90.0 * scale;
    let pad = 16.0 * scale;

    let mut y = rect.top();
    for (label, fraction) in COLUMNS {
        ui.painter().text(
            Pos2::new(rect.left() + pad + rect.width() * fraction, y),
            egui::Align2::LEFT_TOP,
            label,
            header_font.clone(),
            header_color,
        );
    }
    y += 40.0 * scale;
    ui.painter().line_segment(
        [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
        egui::Stroke::new(1.0 * scale, Theme::with_opacity(theme.panel_stroke, opacity)),
    );

    for competitor in &content.competitors {
        let row = egui::Rect::from_min_size(
            Pos2::new(rect.left(), y),
            egui::vec2(rect.width(), row_height),
        );
        if competitor.highlight {
            ui.painter().rect_filled(
                row,
                8.0 * scale,
                Theme::with_opacity(theme.accent_alt, opacity * 0.1),
            );
        }

        let name_color = if competitor.highlight {
            Theme::with_opacity(theme.accent, opacity)
        } else {
            Theme::with_opacity(theme.heading_color, opacity)
        };
        let cell_color = Theme::with_opacity(theme.foreground, opacity);
        let cell_font = FontId::proportional(theme.body_size * 0.85 * scale);
        let text_y = row.center().y - theme.body_size * 0.5 * scale;

        let cells = [
            (&competitor.name, name_color),
            (&competitor.speed, cell_color),
            (&competitor.quality, cell_color),
            (&competitor.effort, cell_color),
        ];
        for ((value, color), (_, fraction)) in cells.into_iter().zip(COLUMNS) {
            ui.painter().text(
                Pos2::new(rect.left() + pad + rect.width() * fraction, text_y),
                egui::Align2::LEFT_TOP,
                value,
                cell_font.clone(),
                color,
            );
        }

        y = row.bottom();
        ui.painter().line_segment(
            [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
            egui::Stroke::new(
                1.0 * scale,
                Theme::with_opacity(theme.panel_stroke, opacity * 0.5),
            ),
        );
    }
}
