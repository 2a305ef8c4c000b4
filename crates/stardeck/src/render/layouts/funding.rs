use eframe::egui::{self, Color32, FontId, Pos2};

use crate::deck::{Allocation, FundingContent};
use crate::render::text;
use crate::theme::Theme;

/// Segment colors cycle through the cosmic accents.
fn segment_color(theme: &Theme, index: usize) -> Color32 {
    match index % 3 {
        0 => theme.accent_alt,
        1 => Color32::from_rgb(0x6A, 0x0D, 0xAD),
        _ => theme.accent,
    }
}

/// Width fractions for the allocation bar, normalized against the actual
/// total. Percentages are untrusted presentation data and are not required
/// to sum to 100; a skewed total still renders proportionally.
pub(crate) fn segment_fractions(allocation: &[Allocation]) -> Vec<f32> {
    let total: f32 = allocation.iter().map(|a| a.percentage.max(0.0)).sum();
    if total <= 0.0 {
        return vec![0.0; allocation.len()];
    }
    allocation
        .iter()
        .map(|a| a.percentage.max(0.0) / total)
        .collect()
}

pub fn render(
    ui: &egui::Ui,
    content: &FundingContent,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
) {
    let center_x = rect.center().x;
    let mut y = rect.top() + rect.height() * 0.08;

    y += text::draw_centered(
        ui,
        "SEEKING",
        center_x,
        y,
        FontId::proportional(theme.body_size * 0.8 * scale),
        Theme::with_opacity(theme.accent, opacity),
    );
    y += 10.0 * scale;
    y += text::draw_centered(
        ui,
        &content.amount,
        center_x,
        y,
        FontId::proportional(theme.h1_size * scale),
        Theme::with_opacity(theme.heading_color, opacity),
    );
    y += 70.0 * scale;

    if content.allocation.is_empty() {
        return;
    }

    // Segmented allocation bar
    let bar_width = rect.width() * 0.8;
    let bar_height = 54.0 * scale;
    let bar = egui::Rect::from_min_size(
        Pos2::new(center_x - bar_width / 2.0, y),
        egui::vec2(bar_width, bar_height),
    );
    ui.painter().rect_filled(
        bar,
        bar_height / 2.0,
        Theme::with_opacity(theme.panel_fill, opacity),
    );

    let fractions = segment_fractions(&content.allocation);
    let seg_font = FontId::proportional(theme.small_size * 0.8 * scale);
    let mut x = bar.left();
    for (i, (alloc, fraction)) in content.allocation.iter().zip(&fractions).enumerate() {
        let seg_width = bar_width * fraction;
        if seg_width <= 0.0 {
            continue;
        }
        let segment = egui::Rect::from_min_size(
            Pos2::new(x, bar.top()),
            egui::vec2(seg_width, bar_height),
        );
        ui.painter().rect_filled(
            segment,
            bar_height / 2.0,
            Theme::with_opacity(segment_color(theme, i), opacity * 0.9),
        );
        if seg_width > 110.0 * scale {
            text::draw_centered(
                ui,
                &format!("{} {}%", alloc.label, alloc.percentage),
                segment.center().x,
                segment.center().y - theme.small_size * 0.5 * scale,
                seg_font.clone(),
                Theme::with_opacity(Color32::WHITE, opacity),
            );
        }
        x += seg_width;
    }

    // Legend
    y = bar.bottom() + 30.0 * scale;
    let legend_font = FontId::proportional(theme.small_size * 0.8 * scale);
    let swatch = 12.0 * scale;
    let gap = 40.0 * scale;
    let mut entries: Vec<(egui::Color32, String, f32)> = Vec::new();
    let mut total_width = 0.0;
    for (i, alloc) in content.allocation.iter().enumerate() {
        let galley = ui.painter().layout_no_wrap(
            alloc.label.clone(),
            legend_font.clone(),
            Color32::WHITE,
        );
        let entry_width = swatch + 10.0 * scale + galley.rect.width();
        entries.push((segment_color(theme, i), alloc.label.clone(), entry_width));
        total_width += entry_width;
    }
    total_width += gap * (entries.len().saturating_sub(1)) as f32;

    let mut x = center_x - total_width / 2.0;
    for (color, label, entry_width) in entries {
        ui.painter().rect_filled(
            egui::Rect::from_min_size(Pos2::new(x, y), egui::vec2(swatch, swatch)),
            swatch / 2.0,
            Theme::with_opacity(color, opacity),
        );
        ui.painter().text(
            Pos2::new(x + swatch + 10.0 * scale, y - 4.0 * scale),
            egui::Align2::LEFT_TOP,
            label,
            legend_font.clone(),
            Theme::with_opacity(theme.foreground, opacity * 0.8),
        );
        x += entry_width + gap;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alloc(label: &str, percentage: f32) -> Allocation {
        Allocation {
            label: label.to_string(),
            percentage,
        }
    }

    #[test]
    fn test_fractions_for_well_formed_allocation() {
        let fractions = segment_fractions(&[
            alloc("Engineering", 50.0),
            alloc("Marketing", 30.0),
            alloc("Ops", 20.0),
        ]);
        assert_eq!(fractions, vec![0.5, 0.3, 0.2]);
    }

    #[test]
    fn test_fractions_normalize_skewed_totals() {
        // Percentages summing to 150 still fill the bar proportionally
        let fractions = segment_fractions(&[alloc("A", 100.0), alloc("B", 50.0)]);
        assert!((fractions[0] - 2.0 / 3.0).abs() < 1e-6);
        assert!((fractions[1] - 1.0 / 3.0).abs() < 1e-6);
        assert!((fractions.iter().sum::<f32>() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_fractions_handle_zero_and_negative() {
        let fractions = segment_fractions(&[alloc("A", 0.0), alloc("B", 0.0)]);
        assert_eq!(fractions, vec![0.0, 0.0]);
        let fractions = segment_fractions(&[alloc("A", -10.0), alloc("B", 10.0)]);
        assert_eq!(fractions, vec![0.0, 1.0]);
    }
}
