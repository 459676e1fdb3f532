//! Scene screen widget with typewriter reveal.

use client_frontend_core::PresentationMapper;
use game_core::{Reveal, Screen};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Converts the screen into styled lines, revealing at most `budget`
/// typewriter characters.
///
/// Lines are shown in order. Once a typewriter line is only partly revealed,
/// nothing after it is shown yet.
pub fn visible_lines<T: PresentationMapper<Style = Style>>(
    screen: &Screen,
    budget: usize,
    theme: &T,
) -> Vec<Line<'static>> {
    let mut remaining = budget;
    let mut lines = Vec::with_capacity(screen.lines().len());

    for line in screen.lines() {
        let mut spans = Vec::with_capacity(line.spans.len() + 1);
        let padding = screen.padding_for(line);
        if padding > 0 {
            spans.push(Span::raw(" ".repeat(padding)));
        }

        let mut truncated = false;
        for span in &line.spans {
            let style = theme.style_text(span.style);
            if line.reveal == Reveal::Instant {
                spans.push(Span::styled(span.text.clone(), style));
                continue;
            }
            let width = span.width();
            if width <= remaining {
                remaining -= width;
                spans.push(Span::styled(span.text.clone(), style));
            } else {
                let partial: String = span.text.chars().take(remaining).collect();
                remaining = 0;
                spans.push(Span::styled(partial, style));
                truncated = true;
                break;
            }
        }

        lines.push(Line::from(spans));
        if truncated {
            break;
        }
    }

    lines
}

/// Render the active scene.
pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    screen: &Screen,
    budget: usize,
    theme: &T,
    border: Style,
) {
    let lines = visible_lines(screen, budget, theme);
    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(inner_height) as u16;

    let paragraph = Paragraph::new(lines)
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(" Astral Nexus "),
        );

    frame.render_widget(paragraph, area);
}
