//! Side panel mirroring logs, quests, inventory, stats and player info.

use client_frontend_core::{PresentationMapper, SidePanelView};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::presentation::theme::RatatuiTheme;

const MIN_LOG_HEIGHT: u16 = 5;
const EMPTY: &str = "None";

pub fn render(frame: &mut Frame, area: Rect, view: &SidePanelView, theme: &RatatuiTheme) {
    let [logs_title, quests_title, inventory_title, stats_title, info_title] =
        SidePanelView::SECTION_TITLES;

    let quests = plain_lines(&view.quests, theme);
    let inventory: Vec<Line> = if view.inventory.is_empty() {
        vec![empty_line(theme)]
    } else {
        view.inventory
            .iter()
            .map(|item| Line::from(format!("{item} x1")))
            .collect()
    };
    let stats: Vec<Line> = if view.stats.is_empty() {
        vec![empty_line(theme)]
    } else {
        view.stats
            .iter()
            .map(|stat| {
                Line::from(vec![
                    Span::raw(format!("{}: ", stat.name)),
                    Span::styled(
                        stat.value.to_string(),
                        theme.style_stat(&stat.name, stat.value),
                    ),
                ])
            })
            .collect()
    };
    let info: Vec<Line> = if view.info.is_empty() {
        vec![empty_line(theme)]
    } else {
        view.info
            .iter()
            .map(|line| {
                Line::from(vec![
                    Span::styled(format!("{}: ", line.label), theme.dim()),
                    Span::raw(line.value.clone()),
                ])
            })
            .collect()
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(MIN_LOG_HEIGHT),
            section_height(&quests),
            section_height(&inventory),
            section_height(&stats),
            section_height(&info),
        ])
        .split(area);

    let log_rows = chunks[0].height.saturating_sub(2) as usize;
    let skip = view.logs.len().saturating_sub(log_rows);
    let logs: Vec<Line> = view
        .logs
        .iter()
        .skip(skip)
        .map(|entry| {
            Line::from(vec![
                Span::styled(entry.clock(), theme.dim()),
                Span::raw(" "),
                Span::styled(entry.text.clone(), theme.style_log(entry.kind)),
            ])
        })
        .collect();

    render_section(frame, chunks[0], logs_title, logs, theme);
    render_section(frame, chunks[1], quests_title, quests, theme);
    render_section(frame, chunks[2], inventory_title, inventory, theme);
    render_section(frame, chunks[3], stats_title, stats, theme);
    render_section(frame, chunks[4], info_title, info, theme);
}

fn render_section(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    lines: Vec<Line<'static>>,
    theme: &RatatuiTheme,
) {
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.chrome())
            .title(format!(" {title} ")),
    );
    frame.render_widget(paragraph, area);
}

fn section_height(lines: &[Line]) -> Constraint {
    Constraint::Length(lines.len() as u16 + 2)
}

fn plain_lines(items: &[String], theme: &RatatuiTheme) -> Vec<Line<'static>> {
    if items.is_empty() {
        return vec![empty_line(theme)];
    }
    items.iter().map(|item| Line::from(item.clone())).collect()
}

fn empty_line(theme: &RatatuiTheme) -> Line<'static> {
    Line::from(Span::styled(EMPTY, theme.dim()))
}
