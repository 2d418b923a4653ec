//! Algorithm description, complexity table and search target

use crate::algorithms::{AlgorithmInfo, AlgorithmKind, Complexity};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Outcome of a search as far as playback has revealed it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Pending,
    Found(usize),
    NotFound,
}

pub struct InfoRenderData<'a> {
    pub info: &'a AlgorithmInfo,
    pub target_text: &'a str,
    /// Whether the target is being edited
    pub editing_target: bool,
    pub outcome: SearchOutcome,
}

fn complexity_line<'a>(label: &'a str, bounds: &Complexity) -> Line<'a> {
    let label_style = Style::default().fg(DEFAULT_THEME.comment);
    let bound_style = Style::default().fg(DEFAULT_THEME.complexity);
    Line::from(vec![
        Span::styled(format!("{:<6}", label), label_style),
        Span::styled("best ", label_style),
        Span::styled(format!("{:<11}", bounds.best), bound_style),
        Span::styled("avg ", label_style),
        Span::styled(format!("{:<11}", bounds.average), bound_style),
        Span::styled("worst ", label_style),
        Span::styled(bounds.worst, bound_style),
    ])
}

fn target_line<'a>(data: &InfoRenderData<'a>) -> Line<'a> {
    let label = Span::styled("Target ", Style::default().fg(DEFAULT_THEME.comment));
    let text = if data.editing_target {
        Span::styled(
            format!("{}▏", data.target_text),
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD),
        )
    } else if data.target_text.is_empty() {
        Span::styled(
            "(press / to enter)",
            Style::default().fg(DEFAULT_THEME.comment),
        )
    } else {
        Span::styled(data.target_text, Style::default().fg(DEFAULT_THEME.fg))
    };

    let mut spans = vec![label, text];
    match data.outcome {
        SearchOutcome::Found(index) => spans.push(Span::styled(
            format!("   Element found at index: {}", index),
            Style::default().fg(DEFAULT_THEME.success),
        )),
        SearchOutcome::NotFound => spans.push(Span::styled(
            "   Element not found",
            Style::default().fg(DEFAULT_THEME.error),
        )),
        SearchOutcome::Pending => {}
    }
    Line::from(spans)
}

/// Render the info pane
pub fn render_info_pane(frame: &mut Frame, area: Rect, data: &InfoRenderData) {
    let block = Block::default()
        .title(format!(" {} ", data.info.name))
        .title_style(
            Style::default()
                .fg(DEFAULT_THEME.heading)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    let mut lines = vec![
        Line::from(Span::styled(
            data.info.description,
            Style::default().fg(DEFAULT_THEME.fg),
        )),
        Line::from(""),
        complexity_line("Time", &data.info.time),
        complexity_line("Space", &data.info.space),
    ];

    if data.info.kind == AlgorithmKind::Search {
        lines.push(Line::from(""));
        lines.push(target_line(data));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
