use ratatui::style::Color;

/// Colors by role. Each theme module fills one of these from its upstream scheme.
pub struct Palette {
    pub bg: Color,
    pub bg_raised: Color,
    pub bg_deep: Color,
    pub fg: Color,
    pub fg_muted: Color,
    pub fg_soft: Color,
    pub surface: Color,
    pub border: Color,
    pub hint: Color,
    pub subtle: Color,
    pub accent: Color,
    pub selection: Color,
    pub command: Color,
    pub success: Color,
    pub edit: Color,
    pub token: Color,
    pub category: Color,
}

/// Scales the channels of an `Rgb` color; anything else passes through.
pub fn dim_color(c: Color, factor: f32) -> Color {
    match c {
        Color::Rgb(r, g, b) => {
            let scale = |v: u8| (f32::from(v) * factor) as u8;
            Color::Rgb(scale(r), scale(g), scale(b))
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dim_color() {
        assert_eq!(dim_color(Color::Rgb(200, 100, 50), 0.5), Color::Rgb(100, 50, 25));
        assert_eq!(dim_color(Color::Reset, 0.5), Color::Reset);
    }
}
