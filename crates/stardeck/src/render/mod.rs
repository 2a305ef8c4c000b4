pub mod layouts;
pub mod starfield;
pub mod text;

use eframe::egui::{self, FontId, Pos2};

use crate::deck::{SlideContent, SlideRecord};
use crate::session::SessionState;
use crate::theme::Theme;

/// Interaction surfaced by an interactive slide branch. The controller owns
/// the side effects; layouts never mutate anything outside their own slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideAction {
    GenerateHook,
    PickTeamPhoto,
}

/// Uniform scale factor against the 1920x1080 reference canvas.
pub fn compute_scale(rect: egui::Rect) -> f32 {
    (rect.width() / 1920.0).min(rect.height() / 1080.0)
}

/// Render a single slide: exactly one branch per record, chosen by its
/// content variant. Unrecognized kinds degrade to a visible placeholder.
pub fn render_slide(
    ui: &mut egui::Ui,
    slide: &SlideRecord,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
    session: &mut SessionState,
) -> Option<SlideAction> {
    // Cover and call-to-action slides own the whole canvas; everything else
    // shares the common header band.
    let content_rect = match &slide.content {
        SlideContent::Cover(_) | SlideContent::CallToAction(_) => rect,
        _ => draw_header(ui, slide, theme, rect, opacity, scale),
    };

    match &slide.content {
        SlideContent::Cover(c) => {
            layouts::cover::render(
                ui,
                c,
                &slide.title,
                slide.subtitle.as_deref(),
                theme,
                rect,
                opacity,
                scale,
            );
            None
        }
        SlideContent::Problem(c) => {
            layouts::problem::render(ui, c, theme, content_rect, opacity, scale);
            None
        }
        SlideContent::Solution(c) => {
            layouts::solution::render(ui, c, theme, content_rect, opacity, scale);
            None
        }
        SlideContent::Demo(c) => layouts::demo::render(
            ui,
            c,
            session.demo.as_mut(),
            theme,
            content_rect,
            opacity,
            scale,
        ),
        SlideContent::Market(c) => {
            layouts::market::render(ui, c, theme, content_rect, opacity, scale);
            None
        }
        SlideContent::Business(c) => {
            layouts::business::render(ui, c, theme, content_rect, opacity, scale);
            None
        }
        SlideContent::TechStack(c) => {
            layouts::tech::render(ui, c, theme, content_rect, opacity, scale);
            None
        }
        SlideContent::Competition(c) => {
            layouts::competition::render(ui, c, theme, content_rect, opacity, scale);
            None
        }
        SlideContent::Traction(c) => {
            layouts::traction::render(ui, c, theme, content_rect, opacity, scale);
            None
        }
        SlideContent::Funding(c) => {
            layouts::funding::render(ui, c, theme, content_rect, opacity, scale);
            None
        }
        SlideContent::Roadmap(c) => {
            layouts::roadmap::render(ui, c, theme, content_rect, opacity, scale);
            None
        }
        SlideContent::Team(c) => layouts::team::render(
            ui,
            c,
            session.team_photo.as_ref(),
            theme,
            content_rect,
            opacity,
            scale,
        ),
        SlideContent::CallToAction(c) => {
            layouts::cta::render(ui, c, &slide.title, theme, rect, opacity, scale);
            None
        }
        SlideContent::Unknown { kind, .. } => {
            layouts::unknown::render(ui, kind, theme, content_rect, opacity, scale);
            None
        }
    }
}

/// Title / subtitle band with a hairline rule, shared by all content slides.
/// Returns the rect left for the layout body.
fn draw_header(
    ui: &egui::Ui,
    slide: &SlideRecord,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
) -> egui::Rect {
    let padding = 80.0 * scale;
    let top = rect.top() + 50.0 * scale;
    let left = rect.left() + padding;
    let width = rect.width() - padding * 2.0;

    let title_color = Theme::with_opacity(theme.heading_color, opacity);
    let title_height = text::draw_wrapped(
        ui,
        &slide.title,
        Pos2::new(left, top),
        FontId::proportional(theme.h3_size * scale),
        title_color,
        width,
    );

    let mut y = top + title_height;
    if let Some(subtitle) = &slide.subtitle {
        let subtitle_color = Theme::with_opacity(theme.accent, opacity);
        y += 6.0 * scale;
        y += text::draw_wrapped(
            ui,
            subtitle,
            Pos2::new(left, y),
            FontId::proportional(theme.small_size * scale),
            subtitle_color,
            width,
        );
    }

    // "CONFIDENTIAL" watermark at the band's right edge
    let mark_color = Theme::with_opacity(theme.foreground, opacity * 0.4);
    let mark = ui.painter().layout_no_wrap(
        "CONFIDENTIAL".to_string(),
        FontId::monospace(14.0 * scale),
        mark_color,
    );
    ui.painter().galley(
        Pos2::new(rect.right() - padding - mark.rect.width(), top + 8.0 * scale),
        mark,
        mark_color,
    );

    y += 18.0 * scale;
    let rule = egui::Rect::from_min_size(Pos2::new(left, y), egui::vec2(width, 1.0));
    ui.painter()
        .rect_filled(rule, 0.0, Theme::with_opacity(theme.panel_stroke, opacity));

    // Body area: below the header, above the control strip
    egui::Rect::from_min_max(
        Pos2::new(left, y + 30.0 * scale),
        Pos2::new(rect.right() - padding, rect.bottom() - 110.0 * scale),
    )
}
