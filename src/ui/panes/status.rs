//! Status bar rendering with keybindings and state indicators

use crate::playback::PlaybackState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::time::Duration;

pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub is_error: bool,
    pub current_step: usize,
    pub total_steps: usize,
    pub state: PlaybackState,
    pub interval: Duration,
    pub editing_target: bool,
    /// Whether the selected algorithm takes a search target
    pub is_search: bool,
}

/// Playback indicator shown next to the step counter
fn indicator(data: &StatusRenderData) -> Option<(&'static str, Color)> {
    if data.editing_target {
        return Some((" ⌨ INPUT ", DEFAULT_THEME.secondary));
    }
    match data.state {
        PlaybackState::Running(_) => Some((" ▶ PLAYING ", DEFAULT_THEME.secondary)),
        PlaybackState::Paused(_) => Some((" ⏸ PAUSED ", DEFAULT_THEME.primary)),
        PlaybackState::Finished => Some((" DONE ", DEFAULT_THEME.success)),
        PlaybackState::Idle => None,
    }
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: &StatusRenderData) {
    let right_line = key_hints(data);

    // Key hints keep their full width; the message takes what is left
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(right_line.width() as u16),
        ])
        .split(area);

    let step_text = format!(" Step {}/{} ", data.current_step + 1, data.total_steps);

    let mut left_spans = vec![Span::styled(
        step_text,
        Style::default()
            .bg(if data.is_error {
                DEFAULT_THEME.error
            } else {
                DEFAULT_THEME.primary
            })
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some((label, color)) = indicator(data) {
        left_spans.push(Span::styled(
            label,
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    left_spans.extend([
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", data.message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(if data.is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.fg
                }),
        ),
    ]);

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    let right_paragraph = Paragraph::new(right_line)
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}

/// Keybinds with visual grouping
fn key_hints(data: &StatusRenderData) -> Line<'static> {
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let mut spans = vec![
        Span::styled(" ⎵ ", key_style),
        Span::styled(" play ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ←/→ ", key_style),
        Span::styled(" step ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ↑/↓ ", key_style),
        Span::styled(" algo ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" r ", key_style),
        Span::styled(" new ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" +/- ", key_style),
        Span::styled(format!(" {}ms ", data.interval.as_millis()), desc_style),
        Span::styled("│", sep_style),
    ];

    if data.is_search {
        spans.extend([
            Span::styled(" / ", key_style),
            Span::styled(" target ", desc_style),
            Span::styled("│", sep_style),
        ]);
    }
    spans.push(Span::styled(" q ", key_style));

    Line::from(spans)
}
