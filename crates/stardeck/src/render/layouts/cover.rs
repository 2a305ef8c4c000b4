use eframe::egui::{self, FontId, Pos2};

use crate::deck::CoverContent;
use crate::render::text;
use crate::theme::Theme;

#[allow(clippy::too_many_arguments)]
pub fn render(
    ui: &egui::Ui,
    content: &CoverContent,
    title: &str,
    subtitle: Option<&str>,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
) {
    let center_x = rect.center().x;
    let title_font = FontId::proportional(theme.h1_size * scale);
    let title_color = Theme::with_opacity(theme.heading_color, opacity);

    // Rough vertical centering of the title/subtitle/tags block
    let title_height = text::measure_wrapped(ui, title, title_font.clone(), rect.width() * 0.9);
    let block_height = title_height + 140.0 * scale;
    let mut y = (rect.center().y - block_height / 2.0).max(rect.top() + 80.0 * scale);

    y += text::draw_centered_wrapped(
        ui,
        title,
        center_x,
        y,
        title_font,
        title_color,
        rect.width() * 0.9,
    );

    if let Some(subtitle) = subtitle {
        y += 30.0 * scale;
        y += text::draw_centered_wrapped(
            ui,
            subtitle,
            center_x,
            y,
            FontId::proportional(theme.h3_size * 0.7 * scale),
            Theme::with_opacity(theme.foreground, opacity),
            rect.width() * 0.8,
        );
    }

    // Tag pills
    if !content.tags.is_empty() {
        y += 50.0 * scale;
        draw_tag_row(ui, &content.tags, center_x, y, theme, opacity, scale);
    }

    // Start hint pinned near the bottom
    text::draw_centered(
        ui,
        "Press Space or \u{2192} to begin",
        center_x,
        rect.bottom() - 150.0 * scale,
        FontId::proportional(theme.small_size * 0.8 * scale),
        Theme::with_opacity(theme.foreground, opacity * 0.5),
    );
}

fn draw_tag_row(
    ui: &egui::Ui,
    tags: &[String],
    center_x: f32,
    y: f32,
    theme: &Theme,
    opacity: f32,
    scale: f32,
) {
    let font = FontId::proportional(theme.small_size * scale);
    let pad_x = 20.0 * scale;
    let pad_y = 10.0 * scale;
    let gap = 16.0 * scale;
    let color = Theme::with_opacity(theme.accent, opacity);
    let fill = Theme::with_opacity(theme.accent, opacity * 0.1);

    let galleys: Vec<_> = tags
        .iter()
        .map(|tag| ui.painter().layout_no_wrap(tag.clone(), font.clone(), color))
        .collect();
    let total_width: f32 = galleys
        .iter()
        .map(|g| g.rect.width() + pad_x * 2.0)
        .sum::<f32>()
        + gap * (galleys.len().saturating_sub(1)) as f32;

    let mut x = center_x - total_width / 2.0;
    for galley in galleys {
        let pill = egui::Rect::from_min_size(
            Pos2::new(x, y),
            egui::vec2(
                galley.rect.width() + pad_x * 2.0,
                galley.rect.height() + pad_y * 2.0,
            ),
        );
        ui.painter().rect_filled(pill, pill.height() / 2.0, fill);
        ui.painter().rect_stroke(
            pill,
            pill.height() / 2.0,
            egui::Stroke::new(1.0 * scale, color),
            egui::StrokeKind::Inside,
        );
        ui.painter()
            .galley(pill.min + egui::vec2(pad_x, pad_y), galley, color);
        x = pill.right() + gap;
    }
}
