//! Interactive hook-generator slide. The only layout with live widgets: a
//! context input, a generate button, and an output panel fed by the
//! background request the controller owns.

use eframe::egui::{self, FontId, Pos2};

use crate::deck::DemoContent;
use crate::render::text;
use crate::render::SlideAction;
use crate::session::DemoSession;
use crate::theme::Theme;

#[allow(clippy::too_many_arguments)]
pub fn render(
    ui: &mut egui::Ui,
    content: &DemoContent,
    session: Option<&mut DemoSession>,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
) -> Option<SlideAction> {
    let gap = 48.0 * scale;
    let column_width = (rect.width() - gap) / 2.0;
    let left = egui::Rect::from_min_size(rect.min, egui::vec2(column_width, rect.height()));
    let right = egui::Rect::from_min_size(
        Pos2::new(left.right() + gap, rect.top()),
        egui::vec2(column_width, rect.height()),
    );

    let label_font = FontId::proportional(theme.small_size * 0.9 * scale);
    let label_color = Theme::with_opacity(theme.accent, opacity);

    ui.painter().text(
        left.left_top(),
        egui::Align2::LEFT_TOP,
        "VIDEO CONTEXT",
        label_font.clone(),
        label_color,
    );
    ui.painter().text(
        right.left_top(),
        egui::Align2::LEFT_TOP,
        "AI OUTPUT",
        label_font,
        label_color,
    );

    let body_top = left.top() + 40.0 * scale;
    let input_rect = egui::Rect::from_min_size(
        Pos2::new(left.left(), body_top),
        egui::vec2(left.width(), 180.0 * scale),
    );
    let button_rect = egui::Rect::from_min_size(
        Pos2::new(left.left(), input_rect.bottom() + 20.0 * scale),
        egui::vec2(left.width(), 56.0 * scale),
    );
    let output_rect = egui::Rect::from_min_max(
        Pos2::new(right.left(), body_top),
        Pos2::new(right.right(), rect.bottom()),
    );

    // Output panel chrome
    ui.painter().rect_filled(
        output_rect,
        12.0 * scale,
        Theme::with_opacity(theme.panel_fill, opacity),
    );
    ui.painter().rect_stroke(
        output_rect,
        12.0 * scale,
        egui::Stroke::new(1.0 * scale, Theme::with_opacity(theme.panel_stroke, opacity)),
        egui::StrokeKind::Inside,
    );

    let Some(session) = session else {
        // No live session (mid-transition render): static placeholder only.
        draw_placeholder(ui, content, output_rect, theme, opacity, scale);
        return None;
    };

    let mut action = None;

    let mut input_ui = ui.new_child(egui::UiBuilder::new().max_rect(input_rect).id_salt("demo_input"));
    input_ui.add_sized(
        input_rect.size(),
        egui::TextEdit::multiline(&mut session.input)
            .hint_text(content.placeholder.clone())
            .font(FontId::proportional(theme.small_size * scale)),
    );

    let mut button_ui = ui.new_child(
        egui::UiBuilder::new()
            .max_rect(button_rect)
            .layout(egui::Layout::centered_and_justified(
                egui::Direction::LeftToRight,
            ))
            .id_salt("demo_generate"),
    );
    let label = if session.generating {
        "\u{27F3} Generating\u{2026}"
    } else {
        "\u{2726} Generate Viral Hook"
    };
    let clicked = button_ui
        .add_enabled(
            session.can_generate(),
            egui::Button::new(
                egui::RichText::new(label)
                    .size(theme.small_size * scale)
                    .color(theme.heading_color),
            )
            .fill(Theme::with_opacity(theme.accent_alt, opacity * 0.8)),
        )
        .clicked();
    if clicked && session.can_generate() {
        action = Some(SlideAction::GenerateHook);
    }

    // Output panel body
    if session.output.is_empty() {
        draw_placeholder(ui, content, output_rect, theme, opacity, scale);
    } else {
        text::draw_centered_wrapped(
            ui,
            &session.output,
            output_rect.center().x,
            output_rect.top() + 60.0 * scale,
            FontId::proportional(theme.body_size * scale),
            Theme::with_opacity(theme.heading_color, opacity),
            output_rect.width() - 60.0 * scale,
        );
    }

    // Distinct in-progress indication over the output panel
    if session.generating {
        ui.painter().rect_filled(
            output_rect,
            12.0 * scale,
            Theme::with_opacity(theme.background, opacity * 0.6),
        );
        text::draw_centered(
            ui,
            "Thinking\u{2026}",
            output_rect.center().x,
            output_rect.center().y - theme.body_size * scale / 2.0,
            FontId::monospace(theme.body_size * 0.8 * scale),
            Theme::with_opacity(theme.accent_alt, opacity),
        );
        ui.ctx().request_repaint();
    }

    action
}

fn draw_placeholder(
    ui: &egui::Ui,
    content: &DemoContent,
    output_rect: egui::Rect,
    theme: &Theme,
    opacity: f32,
    scale: f32,
) {
    let dim = Theme::with_opacity(theme.foreground, opacity * 0.45);
    text::draw_centered_wrapped(
        ui,
        "AI output will appear here\u{2026}",
        output_rect.center().x,
        output_rect.center().y - 30.0 * scale,
        FontId::proportional(theme.small_size * scale),
        dim,
        output_rect.width() - 60.0 * scale,
    );
    text::draw_centered_wrapped(
        ui,
        &content.placeholder,
        output_rect.center().x,
        output_rect.center().y + 20.0 * scale,
        FontId::monospace(theme.small_size * 0.75 * scale),
        Theme::with_opacity(theme.foreground, opacity * 0.3),
        output_rect.width() - 60.0 * scale,
    );
}
