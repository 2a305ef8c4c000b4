//! Founder slide. The portrait is clickable: picking a local image replaces
//! it for the rest of the session. Nothing is uploaded or persisted.

use eframe::egui::{self, FontId, Pos2};

use crate::deck::TeamContent;
use crate::render::text;
use crate::render::SlideAction;
use crate::theme::Theme;

#[allow(clippy::too_many_arguments)]
pub fn render(
    ui: &egui::Ui,
    content: &TeamContent,
    photo: Option<&egui::TextureHandle>,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
) -> Option<SlideAction> {
    let panel = egui::Rect::from_center_size(
        rect.center(),
        egui::vec2(rect.width().min(1500.0 * scale), rect.height() * 0.9),
    );
    ui.painter().rect_filled(
        panel,
        24.0 * scale,
        Theme::with_opacity(theme.panel_fill, opacity),
    );
    ui.painter().rect_stroke(
        panel,
        24.0 * scale,
        egui::Stroke::new(1.5 * scale, Theme::with_opacity(theme.accent, opacity * 0.3)),
        egui::StrokeKind::Inside,
    );

    let pad = 48.0 * scale;
    let portrait_size = (panel.height() - pad * 2.0).min(340.0 * scale);
    let portrait = egui::Rect::from_min_size(
        Pos2::new(
            panel.left() + pad,
            panel.center().y - portrait_size / 2.0,
        ),
        egui::vec2(portrait_size, portrait_size),
    );

    draw_portrait(ui, content, photo, theme, portrait, opacity, scale);

    let response = ui.interact(
        portrait,
        egui::Id::new("team-portrait"),
        egui::Sense::click(),
    );
    if response.hovered() {
        text::draw_centered(
            ui,
            "Upload photo",
            portrait.center().x,
            portrait.bottom() + 10.0 * scale,
            FontId::proportional(theme.small_size * 0.7 * scale),
            Theme::with_opacity(theme.accent, opacity),
        );
    }

    // Text column to the right of the portrait
    let left = portrait.right() + pad;
    let width = panel.right() - pad - left;
    let mut y = panel.top() + pad;
    y += text::draw_wrapped(
        ui,
        &content.name,
        Pos2::new(left, y),
        FontId::proportional(theme.h2_size * 0.8 * scale),
        Theme::with_opacity(theme.heading_color, opacity),
        width,
    );
    y += 10.0 * scale;
    y += text::draw_wrapped(
        ui,
        &content.role.to_uppercase(),
        Pos2::new(left, y),
        FontId::proportional(theme.small_size * scale),
        Theme::with_opacity(theme.accent_alt, opacity),
        width,
    );
    y += 28.0 * scale;
    text::draw_wrapped(
        ui,
        &content.bio,
        Pos2::new(left, y),
        FontId::proportional(theme.small_size * 0.9 * scale),
        Theme::with_opacity(theme.foreground, opacity * 0.9),
        width,
    );

    response.clicked().then_some(SlideAction::PickTeamPhoto)
}

fn draw_portrait(
    ui: &egui::Ui,
    content: &TeamContent,
    photo: Option<&egui::TextureHandle>,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
) {
    match photo {
        Some(texture) => {
            let uv = egui::Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(1.0, 1.0));
            let tint = Theme::with_opacity(egui::Color32::WHITE, opacity);
            ui.painter().image(texture.id(), rect, uv, tint);
        }
        None => {
            // Placeholder: initials on an accent disc
            ui.painter().rect_filled(
                rect,
                16.0 * scale,
                Theme::with_opacity(theme.background_glow, opacity),
            );
            let initials: String = content
                .name
                .split_whitespace()
                .filter_map(|word| word.chars().next())
                .take(2)
                .collect();
            text::draw_centered(
                ui,
                &initials.to_uppercase(),
                rect.center().x,
                rect.center().y - theme.h1_size * 0.55 * scale,
                FontId::proportional(theme.h1_size * scale),
                Theme::with_opacity(theme.accent, opacity * 0.8),
            );
        }
    }

    // Accent ring; also signals the click target
    ui.painter().rect_stroke(
        rect,
        16.0 * scale,
        egui::Stroke::new(3.0 * scale, Theme::with_opacity(theme.accent_alt, opacity * 0.7)),
        egui::StrokeKind::Outside,
    );
}
