//! Hero section
//!
//! Greeting, "I'm <name>" heading, typewriter line and tagline, stacked and
//! centered, with a key hint on the bottom row.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

use folio_core::HeroProfile;

use super::typewriter::{gradient_spans, TypewriterLine};
use crate::tui::themes::Theme;

/// Widest the tagline is allowed to wrap at
const TAGLINE_MAX_WIDTH: u16 = 72;

pub struct HeroView<'a> {
    profile: &'a HeroProfile,
    typed: &'a str,
    cursor_visible: bool,
    theme: &'a Theme,
}

impl<'a> HeroView<'a> {
    pub fn new(profile: &'a HeroProfile, typed: &'a str, theme: &'a Theme) -> Self {
        Self {
            profile,
            typed,
            cursor_visible: true,
            theme,
        }
    }

    pub fn cursor_visible(mut self, visible: bool) -> Self {
        self.cursor_visible = visible;
        self
    }

    fn heading(&self) -> Line<'static> {
        let mut spans = vec![Span::styled(
            "I'm ",
            Style::default()
                .fg(self.theme.text_color)
                .add_modifier(Modifier::BOLD),
        )];
        spans.extend(gradient_spans(
            &self.profile.name,
            self.theme,
            Modifier::BOLD,
        ));
        Line::from(spans)
    }
}

impl Widget for HeroView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .style(Style::default().bg(self.theme.bg_color))
            .render(area, buf);

        if area.width < 4 || area.height < 3 {
            return;
        }

        let [body, hint] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        let [greeting, _, heading, _, typewriter, _, tagline] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .flex(Flex::Center)
        .areas(body);

        Paragraph::new(self.profile.greeting.as_str())
            .style(Style::default().fg(self.theme.accent_color))
            .alignment(Alignment::Center)
            .render(greeting, buf);

        Paragraph::new(self.heading())
            .alignment(Alignment::Center)
            .render(heading, buf);

        TypewriterLine::new(self.typed, self.theme)
            .cursor_visible(self.cursor_visible)
            .render(typewriter, buf);

        let [tagline] = Layout::horizontal([Constraint::Max(TAGLINE_MAX_WIDTH)])
            .flex(Flex::Center)
            .areas(tagline);
        Paragraph::new(self.profile.tagline.as_str())
            .style(Style::default().fg(self.theme.dim_color))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(tagline, buf);

        Paragraph::new("q / esc  quit")
            .style(Style::default().fg(self.theme.hint_color))
            .alignment(Alignment::Center)
            .render(hint, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(buf: &Buffer) -> Vec<String> {
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    fn render(profile: &HeroProfile, typed: &str, width: u16, height: u16) -> Vec<String> {
        let theme = Theme::folio();
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        HeroView::new(profile, typed, &theme).render(area, &mut buf);
        rows(&buf)
    }

    #[test]
    fn test_renders_all_sections_in_order() {
        let profile = HeroProfile::default();
        let rows = render(&profile, "Java Dev", 100, 20);

        let find = |needle: &str| rows.iter().position(|r| r.contains(needle));
        let greeting = find("<Hello World />").unwrap();
        let heading = find("I'm Arushi Rathore").unwrap();
        let typed = find("Java Dev").unwrap();
        let tagline = find("Building scalable").unwrap();

        assert!(greeting < heading);
        assert!(heading < typed);
        assert!(typed < tagline);
        assert!(rows[19].contains("quit"));
    }

    #[test]
    fn test_empty_typed_text_keeps_layout() {
        let profile = HeroProfile::default();
        let with_text = render(&profile, "Java", 100, 20);
        let without = render(&profile, "", 100, 20);

        let heading_row = |rows: &[String]| rows.iter().position(|r| r.contains("I'm"));
        assert_eq!(heading_row(&with_text[..]), heading_row(&without[..]));
    }

    #[test]
    fn test_tiny_area_only_fills_background() {
        let profile = HeroProfile::default();
        let theme = Theme::folio();
        let area = Rect::new(0, 0, 3, 2);
        let mut buf = Buffer::empty(area);

        HeroView::new(&profile, "Hi", &theme).render(area, &mut buf);

        assert_eq!(buf[(0, 0)].bg, theme.bg_color);
        assert!(rows(&buf).iter().all(|r| r.trim().is_empty()));
    }
}
