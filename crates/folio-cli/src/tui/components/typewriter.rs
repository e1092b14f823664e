//! Typewriter line widget
//!
//! Renders the cycler's current text with the accent gradient followed by a
//! bar cursor. The cursor cell is always reserved so blinking never shifts text.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_segmentation::UnicodeSegmentation;

use crate::tui::themes::Theme;

/// Glyph drawn for the cursor in its "on" phase
pub const CURSOR_GLYPH: &str = "▌";

/// Split `text` into per-grapheme spans colored along the theme gradient
pub fn gradient_spans(text: &str, theme: &Theme, modifier: Modifier) -> Vec<Span<'static>> {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    let last = graphemes.len().saturating_sub(1).max(1) as f32;

    graphemes
        .iter()
        .enumerate()
        .map(|(i, g)| {
            let style = Style::default()
                .fg(theme.gradient_at(i as f32 / last))
                .add_modifier(modifier);
            Span::styled(g.to_string(), style)
        })
        .collect()
}

/// One centered line: gradient text plus blinking cursor
pub struct TypewriterLine<'a> {
    text: &'a str,
    cursor_visible: bool,
    theme: &'a Theme,
}

impl<'a> TypewriterLine<'a> {
    pub fn new(text: &'a str, theme: &'a Theme) -> Self {
        Self {
            text,
            cursor_visible: true,
            theme,
        }
    }

    pub fn cursor_visible(mut self, visible: bool) -> Self {
        self.cursor_visible = visible;
        self
    }

    pub fn line(&self) -> Line<'static> {
        let mut spans = gradient_spans(self.text, self.theme, Modifier::BOLD);
        if self.cursor_visible {
            spans.push(Span::styled(
                CURSOR_GLYPH,
                Style::default().fg(self.theme.cursor_color),
            ));
        } else {
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }
}

impl Widget for TypewriterLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        Paragraph::new(self.line())
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthStr;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_renders_text_then_cursor() {
        let theme = Theme::folio();
        let area = Rect::new(0, 0, 12, 1);
        let mut buf = Buffer::empty(area);

        TypewriterLine::new("Hi", &theme).render(area, &mut buf);

        let text = row(&buf, 0);
        assert_eq!(text.trim(), format!("Hi{CURSOR_GLYPH}"));

        let cursor_x = (0..area.width)
            .find(|&x| buf[(x, 0)].symbol() == CURSOR_GLYPH)
            .unwrap();
        assert_eq!(buf[(cursor_x, 0)].fg, theme.cursor_color);
    }

    #[test]
    fn test_hidden_cursor_keeps_width() {
        let theme = Theme::folio();
        let shown = TypewriterLine::new("Bye", &theme).line();
        let hidden = TypewriterLine::new("Bye", &theme)
            .cursor_visible(false)
            .line();

        assert_eq!(shown.width(), hidden.width());
        assert!(!hidden.to_string().contains(CURSOR_GLYPH));
    }

    #[test]
    fn test_empty_text_renders_only_cursor() {
        let theme = Theme::folio();
        let line = TypewriterLine::new("", &theme).line();
        assert_eq!(line.to_string(), CURSOR_GLYPH);
        assert_eq!(line.width(), CURSOR_GLYPH.width());
    }

    #[test]
    fn test_gradient_spans_follow_graphemes() {
        let theme = Theme::folio();
        let spans = gradient_spans("e\u{301}ab", &theme, Modifier::BOLD);

        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0].content, "e\u{301}");
        assert_eq!(spans[0].style.fg, Some(theme.gradient_start));
        assert_eq!(spans[2].style.fg, Some(theme.gradient_end));
    }

    #[test]
    fn test_zero_area_is_noop() {
        let theme = Theme::folio();
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 1));
        TypewriterLine::new("Hi", &theme).render(Rect::new(0, 0, 0, 0), &mut buf);
        assert_eq!(row(&buf, 0), "    ");
    }
}
