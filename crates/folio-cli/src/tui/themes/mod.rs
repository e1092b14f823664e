//! Theme for the folio hero
//!
//! Dark background with a cyan-to-violet accent gradient.

use ratatui::style::Color;

/// Colors used by the hero components
#[derive(Debug, Clone)]
pub struct Theme {
    // Core colors
    pub bg_color: Color,
    pub text_color: Color,
    pub dim_color: Color,
    pub accent_color: Color,

    // Gradient text (typewriter, name)
    pub gradient_start: Color,
    pub gradient_end: Color,

    // UI element colors
    pub cursor_color: Color,
    pub hint_color: Color,
}

impl Theme {
    pub fn folio() -> Self {
        Self {
            bg_color: Color::Rgb(9, 11, 20),
            text_color: Color::Rgb(226, 232, 240),
            dim_color: Color::Rgb(148, 163, 184),
            accent_color: Color::Rgb(34, 211, 238),
            gradient_start: Color::Rgb(34, 211, 238),
            gradient_end: Color::Rgb(167, 139, 250),
            cursor_color: Color::Rgb(34, 211, 238),
            hint_color: Color::Rgb(71, 85, 105),
        }
    }

    /// Color at `t` (0.0..=1.0) along the accent gradient.
    /// Non-RGB endpoints fall back to the start color.
    pub fn gradient_at(&self, t: f32) -> Color {
        match (self.gradient_start, self.gradient_end) {
            (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
                let t = t.clamp(0.0, 1.0);
                let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
                Color::Rgb(lerp(r1, r2), lerp(g1, g2), lerp(b1, b2))
            }
            _ => self.gradient_start,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::folio()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_endpoints() {
        let theme = Theme::folio();
        assert_eq!(theme.gradient_at(0.0), theme.gradient_start);
        assert_eq!(theme.gradient_at(1.0), theme.gradient_end);
        assert_eq!(theme.gradient_at(7.0), theme.gradient_end);
    }

    #[test]
    fn test_gradient_midpoint() {
        let theme = Theme {
            gradient_start: Color::Rgb(0, 0, 0),
            gradient_end: Color::Rgb(200, 100, 50),
            ..Theme::folio()
        };
        assert_eq!(theme.gradient_at(0.5), Color::Rgb(100, 50, 25));
    }

    #[test]
    fn test_gradient_named_colors_fall_back() {
        let theme = Theme {
            gradient_start: Color::Cyan,
            ..Theme::folio()
        };
        assert_eq!(theme.gradient_at(0.7), Color::Cyan);
    }
}
