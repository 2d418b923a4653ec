//! Bar chart pane
//!
//! Draws the current snapshot as one vertical bar per position. Colour encodes
//! what the current step did to each position:
//!
//! - red: the position a search is comparing against
//! - green: the search hit, or a position finalized by the closing highlight
//! - orange: a value that changed since the previous snapshot
//! - blue: everything else

use crate::sequence::VALUE_CEILING;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};
use rustc_hash::FxHashSet;

/// Everything the bar pane needs for one frame
pub struct BarsRenderData<'a> {
    pub values: &'a [i64],
    /// Positions whose value changed since the previous snapshot
    pub changed: FxHashSet<usize>,
    pub probe: Option<usize>,
    pub found: Option<usize>,
    /// Leading positions already marked finalized
    pub finalized: usize,
}

impl BarsRenderData<'_> {
    /// Colour for the bar at `index`
    pub fn bar_color(&self, index: usize) -> Color {
        if self.probe == Some(index) && self.found != Some(index) {
            DEFAULT_THEME.error
        } else if self.found == Some(index) || index < self.finalized {
            DEFAULT_THEME.success
        } else if self.changed.contains(&index) {
            DEFAULT_THEME.secondary
        } else {
            DEFAULT_THEME.primary
        }
    }
}

/// Width of each bar so `count` bars with 1-column gaps fill `inner_width`
fn bar_width(inner_width: u16, count: usize) -> u16 {
    if count == 0 {
        return 1;
    }
    let count = count as u16;
    let gaps = count.saturating_sub(1);
    (inner_width.saturating_sub(gaps) / count).max(1)
}

/// Render the bar chart pane
pub fn render_bars_pane(frame: &mut Frame, area: Rect, data: &BarsRenderData) {
    let block = Block::default()
        .title(" Visualization ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    if data.values.is_empty() {
        let paragraph = Paragraph::new("(empty sequence)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let bars: Vec<Bar> = data
        .values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let color = data.bar_color(index);
            Bar::default()
                // negative values (explicit input only) draw as empty bars
                .value(value.max(0) as u64)
                .text_value(value.to_string())
                .label(Line::from(index.to_string()))
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let max = data
        .values
        .iter()
        .copied()
        .max()
        .unwrap_or(0)
        .max(VALUE_CEILING) as u64;
    let width = bar_width(area.width.saturating_sub(2), bars.len());

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(width)
        .bar_gap(1)
        .max(max)
        .label_style(Style::default().fg(DEFAULT_THEME.comment));

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width_fills_area() {
        // 20 bars + 19 gaps in 78 columns
        assert_eq!(bar_width(78, 20), 2);
        assert_eq!(bar_width(10, 40), 1);
        assert_eq!(bar_width(10, 0), 1);
    }

    #[test]
    fn test_probe_beats_changed_and_found_beats_probe() {
        let data = BarsRenderData {
            values: &[1, 2, 3],
            changed: [0, 1].into_iter().collect(),
            probe: Some(1),
            found: Some(2),
            finalized: 0,
        };
        assert_eq!(data.bar_color(0), DEFAULT_THEME.secondary);
        assert_eq!(data.bar_color(1), DEFAULT_THEME.error);
        assert_eq!(data.bar_color(2), DEFAULT_THEME.success);

        let data = BarsRenderData {
            probe: Some(2),
            ..data
        };
        assert_eq!(data.bar_color(2), DEFAULT_THEME.success);
    }
}
