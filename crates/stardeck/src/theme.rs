use eframe::egui::Color32;

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub background: Color32,
    pub background_glow: Color32,
    pub foreground: Color32,
    pub heading_color: Color32,
    pub accent: Color32,
    pub accent_alt: Color32,
    pub panel_fill: Color32,
    pub panel_stroke: Color32,
    pub danger: Color32,
    pub success: Color32,
    pub h1_size: f32,
    pub h2_size: f32,
    pub h3_size: f32,
    pub body_size: f32,
    pub small_size: f32,
}

impl Theme {
    /// Deep-space palette used by the stock deck.
    pub fn cosmic() -> Self {
        Self {
            name: "cosmic".to_string(),
            background: Color32::from_rgb(0x0B, 0x00, 0x33),
            background_glow: Color32::from_rgb(0x1A, 0x0B, 0x40),
            foreground: Color32::from_rgb(0xD0, 0xD0, 0xE4),
            heading_color: Color32::WHITE,
            accent: Color32::from_rgb(0x00, 0xFF, 0xFF),
            accent_alt: Color32::from_rgb(0xFF, 0x00, 0xFF),
            panel_fill: Color32::from_rgba_unmultiplied(0xFF, 0xFF, 0xFF, 0x0D),
            panel_stroke: Color32::from_rgba_unmultiplied(0xFF, 0xFF, 0xFF, 0x1A),
            danger: Color32::from_rgb(0xEF, 0x44, 0x44),
            success: Color32::from_rgb(0x4A, 0xDE, 0x80),
            h1_size: 110.0,
            h2_size: 64.0,
            h3_size: 44.0,
            body_size: 30.0,
            small_size: 20.0,
        }
    }

    /// Light variant for bright rooms.
    pub fn daylight() -> Self {
        Self {
            name: "daylight".to_string(),
            background: Color32::from_rgb(0xF4, 0xF2, 0xFC),
            background_glow: Color32::from_rgb(0xE4, 0xDE, 0xF6),
            foreground: Color32::from_rgb(0x2A, 0x24, 0x4E),
            heading_color: Color32::from_rgb(0x15, 0x0B, 0x3C),
            accent: Color32::from_rgb(0x00, 0x86, 0x96),
            accent_alt: Color32::from_rgb(0xB4, 0x00, 0xA8),
            panel_fill: Color32::from_rgba_unmultiplied(0x15, 0x0B, 0x3C, 0x0D),
            panel_stroke: Color32::from_rgba_unmultiplied(0x15, 0x0B, 0x3C, 0x28),
            danger: Color32::from_rgb(0xC0, 0x26, 0x26),
            success: Color32::from_rgb(0x16, 0x8A, 0x44),
            h1_size: 110.0,
            h2_size: 64.0,
            h3_size: 44.0,
            body_size: 30.0,
            small_size: 20.0,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "daylight" => Self::daylight(),
            _ => Self::cosmic(),
        }
    }

    pub fn toggled(&self) -> Self {
        if self.name == "cosmic" {
            Self::daylight()
        } else {
            Self::cosmic()
        }
    }

    /// Apply opacity to a color
    pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
        Color32::from_rgba_unmultiplied(
            color.r(),
            color.g(),
            color.b(),
            (opacity * color.a() as f32) as u8,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let theme = Theme::cosmic();
        assert_eq!(theme.toggled().name, "daylight");
        assert_eq!(theme.toggled().toggled().name, "cosmic");
    }

    #[test]
    fn test_unknown_name_falls_back_to_cosmic() {
        assert_eq!(Theme::from_name("neon").name, "cosmic");
    }

    #[test]
    fn test_with_opacity_scales_existing_alpha() {
        let half = Theme::with_opacity(Color32::WHITE, 0.5);
        assert_eq!(half.a(), 127);
        let translucent = Color32::from_rgba_unmultiplied(10, 20, 30, 100);
        assert_eq!(Theme::with_opacity(translucent, 0.5).a(), 50);
    }
}
