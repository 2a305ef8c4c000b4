//! Animated star particle background. Purely decorative: no interaction with
//! navigation or slide state.

use eframe::egui::{self, Color32, Pos2, Rect};
use rand::Rng;

use crate::theme::Theme;

/// One star per this many square pixels of viewport.
const STAR_DENSITY: f32 = 3000.0;

struct Star {
    pos: Pos2,
    size: f32,
    speed: f32,
    opacity: f32,
}

pub struct Starfield {
    stars: Vec<Star>,
    seeded_size: egui::Vec2,
}

impl Starfield {
    pub fn new() -> Self {
        Self {
            stars: Vec::new(),
            seeded_size: egui::Vec2::ZERO,
        }
    }

    fn reseed(&mut self, rect: Rect) {
        let mut rng = rand::rng();
        let count = (rect.width() * rect.height() / STAR_DENSITY) as usize;
        self.stars = (0..count)
            .map(|_| Star {
                pos: Pos2::new(
                    rng.random_range(rect.left()..rect.right()),
                    rng.random_range(rect.top()..rect.bottom()),
                ),
                size: rng.random_range(0.3..2.0),
                speed: rng.random_range(0.1..0.6),
                opacity: rng.random::<f32>(),
            })
            .collect();
        self.seeded_size = rect.size();
    }

    /// Draw the gradient backdrop and advance every star one frame: drift
    /// upward, wrap at the top to a random column at the bottom, twinkle.
    pub fn draw(&mut self, ui: &egui::Ui, rect: Rect, theme: &Theme) {
        if (rect.size() - self.seeded_size).length() > 1.0 {
            self.reseed(rect);
        }

        draw_backdrop(ui, rect, theme);

        let mut rng = rand::rng();
        for star in &mut self.stars {
            let color = Theme::with_opacity(Color32::WHITE, star.opacity);
            ui.painter().circle_filled(star.pos, star.size, color);

            star.pos.y -= star.speed;
            if star.pos.y < rect.top() {
                star.pos.y = rect.bottom();
                star.pos.x = rng.random_range(rect.left()..rect.right());
            }
            if rng.random::<f32>() > 0.95 {
                star.opacity = rng.random();
            }
        }
    }
}

impl Default for Starfield {
    fn default() -> Self {
        Self::new()
    }
}

/// Vertical gradient: glow color through the middle band, base color at the
/// edges. Stands in for the original radial nebula wash.
fn draw_backdrop(ui: &egui::Ui, rect: Rect, theme: &Theme) {
    ui.painter().rect_filled(rect, 0.0, theme.background);

    let edge = theme.background;
    let glow = theme.background_glow;

    let mut mesh = egui::Mesh::default();
    let mid_y = rect.center().y;
    mesh.colored_vertex(rect.left_top(), edge);
    mesh.colored_vertex(rect.right_top(), edge);
    mesh.colored_vertex(Pos2::new(rect.left(), mid_y), glow);
    mesh.colored_vertex(Pos2::new(rect.right(), mid_y), glow);
    mesh.colored_vertex(rect.left_bottom(), edge);
    mesh.colored_vertex(rect.right_bottom(), edge);
    // Top band: (0,1,2) (1,3,2); bottom band: (2,3,4) (3,5,4)
    mesh.add_triangle(0, 2, 1);
    mesh.add_triangle(1, 2, 3);
    mesh.add_triangle(2, 4, 3);
    mesh.add_triangle(3, 4, 5);

    ui.painter().add(egui::Shape::mesh(mesh));
}
