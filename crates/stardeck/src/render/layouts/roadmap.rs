use eframe::egui::{self, FontId, Pos2};

use crate::deck::RoadmapContent;
use crate::render::text;
use crate::theme::Theme;

/// Horizontal milestone timeline across the middle of the slide.
pub fn render(
    ui: &egui::Ui,
    content: &RoadmapContent,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
) {
    if content.milestones.is_empty() {
        return;
    }

    let line_y = rect.center().y;

    // Purple-to-cyan gradient track
    let left_color = Theme::with_opacity(egui::Color32::from_rgb(0x6A, 0x0D, 0xAD), opacity);
    let right_color = Theme::with_opacity(theme.accent, opacity);
    let track = egui::Rect::from_min_max(
        Pos2::new(rect.left(), line_y - 2.0 * scale),
        Pos2::new(rect.right(), line_y + 2.0 * scale),
    );
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(track.left_top(), left_color);
    mesh.colored_vertex(track.right_top(), right_color);
    mesh.colored_vertex(track.left_bottom(), left_color);
    mesh.colored_vertex(track.right_bottom(), right_color);
    mesh.add_triangle(0, 2, 1);
    mesh.add_triangle(1, 2, 3);
    ui.painter().add(egui::Shape::mesh(mesh));

    let count = content.milestones.len();
    let slot = rect.width() / count as f32;
    let card_width = (slot * 0.8).min(280.0 * scale);
    let reached = count / 2;

    for (i, milestone) in content.milestones.iter().enumerate() {
        let center_x = rect.left() + (i as f32 + 0.5) * slot;

        // Waypoint dot; earlier milestones are lit
        let dot_color = if i < reached {
            Theme::with_opacity(theme.accent, opacity)
        } else {
            Theme::with_opacity(theme.foreground, opacity * 0.35)
        };
        ui.painter()
            .circle_filled(Pos2::new(center_x, line_y), 10.0 * scale, dot_color);
        ui.painter().circle_stroke(
            Pos2::new(center_x, line_y),
            10.0 * scale,
            egui::Stroke::new(3.0 * scale, Theme::with_opacity(theme.background, opacity)),
        );

        // Card below the track
        let pad = 16.0 * scale;
        let goal_font = FontId::proportional(theme.small_size * scale);
        let goal_height = text::measure_wrapped(
            ui,
            &milestone.goal,
            goal_font.clone(),
            card_width - pad * 2.0,
        );
        let card_height = goal_height + theme.small_size * scale + pad * 2.0 + 8.0 * scale;
        let card = egui::Rect::from_min_size(
            Pos2::new(center_x - card_width / 2.0, line_y + 28.0 * scale),
            egui::vec2(card_width, card_height),
        );
        ui.painter().rect_filled(
            card,
            10.0 * scale,
            Theme::with_opacity(theme.panel_fill, opacity),
        );
        ui.painter().rect_stroke(
            card,
            10.0 * scale,
            egui::Stroke::new(1.0 * scale, Theme::with_opacity(theme.panel_stroke, opacity)),
            egui::StrokeKind::Inside,
        );

        let mut y = card.top() + pad;
        y += text::draw_centered(
            ui,
            &milestone.quarter,
            center_x,
            y,
            FontId::proportional(theme.small_size * scale),
            Theme::with_opacity(theme.accent_alt, opacity),
        );
        y += 8.0 * scale;
        text::draw_centered_wrapped(
            ui,
            &milestone.goal,
            center_x,
            y,
            goal_font,
            Theme::with_opacity(theme.foreground, opacity),
            card_width - pad * 2.0,
        );
    }
}
