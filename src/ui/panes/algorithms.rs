//! Algorithm list pane, grouped into sorting and searching

use crate::algorithms::{Algorithm, AlgorithmKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

fn group_header(title: &str) -> ListItem<'_> {
    ListItem::new(Line::from(Span::styled(
        title,
        Style::default()
            .fg(DEFAULT_THEME.comment)
            .add_modifier(Modifier::BOLD),
    )))
}

/// Render the algorithm list with `selected` highlighted
pub fn render_algorithm_list(frame: &mut Frame, area: Rect, selected: Algorithm) {
    let block = Block::default()
        .title(" Algorithms ")
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    let mut items = Vec::new();
    let mut group = None;
    for algorithm in Algorithm::ALL {
        if group != Some(algorithm.kind()) {
            if group.is_some() {
                items.push(ListItem::new(""));
            }
            items.push(group_header(match algorithm.kind() {
                AlgorithmKind::Sort => "Sorting",
                AlgorithmKind::Search => "Searching",
            }));
            group = Some(algorithm.kind());
        }

        let (marker, style) = if algorithm == selected {
            (
                "▶ ",
                Style::default()
                    .fg(DEFAULT_THEME.heading)
                    .bg(DEFAULT_THEME.current_line_bg)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("  ", Style::default().fg(DEFAULT_THEME.fg))
        };
        items.push(ListItem::new(Line::from(vec![
            Span::styled(marker, style),
            Span::styled(algorithm.name(), style),
        ])));
    }

    frame.render_widget(List::new(items).block(block), area);
}
