//! Group tab bar, navigation bar, and help overlay rendering

use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Tabs};
use ratatui::Frame;
use strum::IntoEnumIterator;

use crate::app::{AppMode, AppState};
use crate::catalog::CatalogGroup;
use crate::theme::{Colors, Styles};

/// Render the group tab bar with the active group highlighted.
pub fn render_tabs(f: &mut Frame, state: &AppState, area: Rect) {
    let titles: Vec<Line> = CatalogGroup::iter()
        .map(|group| Line::from(group.title()))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Estimate Builder ")
                .title_style(Styles::title()),
        )
        .select(state.group_index())
        .style(Style::default().fg(Colors::FG_SECONDARY))
        .highlight_style(Styles::selected());

    f.render_widget(tabs, area);
}

/// Render the bottom navigation bar with mode-specific key hints.
pub fn render_nav_bar(f: &mut Frame, state: &AppState, area: Rect) {
    let hints = match state.mode {
        AppMode::Browse => {
            " ↑↓ move | ←→ group | Space toggle | +/- qty | s summary | e export | ? help | q quit"
        }
        AppMode::Summary => " s/Esc collapse | e export | q quit",
    };

    let line = Line::from(vec![
        Span::styled(hints, Styles::muted()),
        Span::raw("  "),
        Span::styled(
            state.status_message.as_str(),
            Style::default().fg(Colors::SECONDARY),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// Render the centered help overlay on top of the current screen.
pub fn render_help_overlay(f: &mut Frame) {
    let area = centered_rect(60, 60, f.area());
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("  Keyboard Reference", Styles::title())),
        Line::from(""),
        Line::from("  ↑/k, ↓/j      Move between items"),
        Line::from("  ←/h, →/l, Tab Switch catalog group"),
        Line::from("  Space/Enter   Toggle the highlighted item"),
        Line::from("  + / -         Adjust quantity (where allowed)"),
        Line::from("  s             Expand/collapse the summary"),
        Line::from("  e             Export an estimate snapshot"),
        Line::from("  ?             Toggle this help"),
        Line::from("  q / Esc       Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "  Add-ons select their parent automatically;",
            Styles::muted(),
        )),
        Line::from(Span::styled(
            "  deselecting a parent removes its add-ons.",
            Styles::muted(),
        )),
    ];

    let help = Paragraph::new(lines).alignment(Alignment::Left).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .title_style(Styles::title())
            .border_style(Style::default().fg(Colors::BORDER_ACTIVE)),
    );
    f.render_widget(help, area);
}

/// Centered rectangle covering the given percentage of the area.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    // Multiply in u32: width * percent overflows u16 on very wide terminals.
    let width = (u32::from(area.width) * u32::from(percent_x) / 100) as u16;
    let height = (u32::from(area.height) * u32::from(percent_y) / 100) as u16;
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_centered() {
        let area = Rect::new(0, 0, 100, 50);
        let rect = centered_rect(60, 60, area);
        assert_eq!(rect, Rect::new(20, 10, 60, 30));
    }

    #[test]
    fn test_centered_rect_handles_wide_terminals() {
        let area = Rect::new(0, 0, 2000, 50);
        let rect = centered_rect(60, 60, area);
        assert_eq!(rect.width, 1200);
        assert_eq!(rect.x, 400);
    }
}
