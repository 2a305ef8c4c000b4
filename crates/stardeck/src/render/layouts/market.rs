use eframe::egui::{self, FontId, Pos2};

use crate::deck::MarketContent;
use crate::render::text;
use crate::theme::Theme;

pub fn render(
    ui: &egui::Ui,
    content: &MarketContent,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
) {
    let gap = 24.0 * scale;
    let stats_height = 150.0 * scale;

    if !content.stats.is_empty() {
        let count = content.stats.len();
        let card_width = (rect.width() - gap * (count as f32 - 1.0)) / count as f32;
        for (i, stat) in content.stats.iter().enumerate() {
            let card = egui::Rect::from_min_size(
                Pos2::new(rect.left() + i as f32 * (card_width + gap), rect.top()),
                egui::vec2(card_width, stats_height),
            );
            ui.painter().rect_filled(
                card,
                12.0 * scale,
                Theme::with_opacity(theme.panel_fill, opacity),
            );
            text::draw_centered(
                ui,
                &stat.value,
                card.center().x,
                card.top() + 28.0 * scale,
                FontId::proportional(theme.h3_size * scale),
                Theme::with_opacity(theme.accent, opacity),
            );
            text::draw_centered(
                ui,
                &stat.label.to_uppercase(),
                card.center().x,
                card.bottom() - 42.0 * scale,
                FontId::proportional(theme.small_size * 0.75 * scale),
                Theme::with_opacity(theme.foreground, opacity * 0.7),
            );
        }
    }

    // Growth chart fills the remaining area
    let chart_panel = egui::Rect::from_min_max(
        Pos2::new(rect.left(), rect.top() + stats_height + 30.0 * scale),
        rect.max,
    );
    ui.painter().rect_filled(
        chart_panel,
        16.0 * scale,
        Theme::with_opacity(theme.panel_fill, opacity),
    );
    draw_bar_chart(ui, content, theme, chart_panel.shrink(40.0 * scale), opacity, scale);
}

fn draw_bar_chart(
    ui: &egui::Ui,
    content: &MarketContent,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
) {
    if content.chart.is_empty() || rect.height() <= 0.0 {
        return;
    }

    let max_value = content
        .chart
        .iter()
        .map(|p| p.value)
        .fold(f32::EPSILON, f32::max);

    let label_band = 34.0 * scale;
    let value_band = 30.0 * scale;
    let plot_height = rect.height() - label_band - value_band;
    let count = content.chart.len() as f32;
    let slot_width = rect.width() / count;
    let bar_width = slot_width * 0.55;

    // Baseline
    let baseline_y = rect.bottom() - label_band;
    ui.painter().line_segment(
        [
            Pos2::new(rect.left(), baseline_y),
            Pos2::new(rect.right(), baseline_y),
        ],
        egui::Stroke::new(1.0 * scale, Theme::with_opacity(theme.panel_stroke, opacity)),
    );

    for (i, point) in content.chart.iter().enumerate() {
        let center_x = rect.left() + (i as f32 + 0.5) * slot_width;
        let bar_height = (point.value / max_value).clamp(0.0, 1.0) * plot_height;
        let bar = egui::Rect::from_min_max(
            Pos2::new(center_x - bar_width / 2.0, baseline_y - bar_height),
            Pos2::new(center_x + bar_width / 2.0, baseline_y),
        );

        // Vertical pink-to-purple gradient fill
        let top_color = Theme::with_opacity(theme.accent_alt, opacity * 0.85);
        let bottom_color = Theme::with_opacity(
            egui::Color32::from_rgb(0x6A, 0x0D, 0xAD),
            opacity * 0.85,
        );
        let mut mesh = egui::Mesh::default();
        mesh.colored_vertex(bar.left_top(), top_color);
        mesh.colored_vertex(bar.right_top(), top_color);
        mesh.colored_vertex(bar.left_bottom(), bottom_color);
        mesh.colored_vertex(bar.right_bottom(), bottom_color);
        mesh.add_triangle(0, 2, 1);
        mesh.add_triangle(1, 2, 3);
        ui.painter().add(egui::Shape::mesh(mesh));

        text::draw_centered(
            ui,
            &format_value(point.value),
            center_x,
            bar.top() - value_band + 4.0 * scale,
            FontId::proportional(theme.small_size * 0.8 * scale),
            Theme::with_opacity(theme.accent, opacity),
        );
        text::draw_centered(
            ui,
            &point.label,
            center_x,
            baseline_y + 8.0 * scale,
            FontId::proportional(theme.small_size * 0.8 * scale),
            Theme::with_opacity(theme.foreground, opacity * 0.7),
        );
    }
}

fn format_value(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value_drops_trailing_zero() {
        assert_eq!(format_value(120.0), "120");
        assert_eq!(format_value(4.5), "4.5");
    }
}
