use eframe::egui::{self, FontId, Pos2};

use crate::deck::CtaContent;
use crate::render::text;
use crate::theme::Theme;

#[allow(clippy::too_many_arguments)]
pub fn render(
    ui: &egui::Ui,
    content: &CtaContent,
    title: &str,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
) {
    let center_x = rect.center().x;
    let mut y = rect.top() + rect.height() * 0.18;

    y += text::draw_centered_wrapped(
        ui,
        title,
        center_x,
        y,
        FontId::proportional(theme.h2_size * 0.6 * scale),
        Theme::with_opacity(theme.foreground, opacity * 0.7),
        rect.width() * 0.8,
    );
    y += 16.0 * scale;
    y += text::draw_centered_wrapped(
        ui,
        &content.text,
        center_x,
        y,
        FontId::proportional(theme.h1_size * 0.8 * scale),
        Theme::with_opacity(theme.heading_color, opacity),
        rect.width() * 0.9,
    );
    y += 60.0 * scale;

    // Contact pill; clicking opens the default mail client
    let pill_font = FontId::proportional(theme.body_size * scale);
    let label = ui.painter().layout_no_wrap(
        "Contact Us".to_string(),
        pill_font.clone(),
        theme.heading_color,
    );
    let pill = egui::Rect::from_center_size(
        Pos2::new(center_x, y + 40.0 * scale),
        egui::vec2(label.rect.width() + 140.0 * scale, 86.0 * scale),
    );
    ui.painter().rect_filled(
        pill,
        pill.height() / 2.0,
        Theme::with_opacity(theme.accent_alt, opacity * 0.85),
    );
    text::draw_centered(
        ui,
        "Contact Us",
        center_x,
        pill.center().y - theme.body_size * 0.6 * scale,
        pill_font,
        Theme::with_opacity(theme.heading_color, opacity),
    );
    let response = ui.interact(pill, egui::Id::new("cta-contact"), egui::Sense::click());
    if response.clicked() {
        ui.ctx()
            .open_url(egui::OpenUrl::new_tab(format!("mailto:{}", content.email)));
    }

    y = pill.bottom() + 40.0 * scale;
    y += text::draw_centered(
        ui,
        &content.email,
        center_x,
        y,
        FontId::proportional(theme.body_size * 0.8 * scale),
        Theme::with_opacity(theme.foreground, opacity * 0.8),
    );
    if let Some(phone) = &content.phone {
        y += 12.0 * scale;
        text::draw_centered(
            ui,
            phone,
            center_x,
            y,
            FontId::proportional(theme.body_size * 0.8 * scale),
            Theme::with_opacity(theme.accent, opacity),
        );
    }
}
