//! Summary dock rendering
//!
//! Collapsed, the dock shows the running total and the normalized time
//! estimate on a single line. Expanded, it lists every selected line item
//! with quantity and extended price.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::app::{AppMode, AppState};
use crate::catalog::{format_bdt, format_price};
use crate::theme::{Colors, Styles};

/// Render the summary dock in the given area.
pub fn render_dock(f: &mut Frame, state: &AppState, area: Rect) {
    match state.mode {
        AppMode::Browse => render_collapsed(f, state, area),
        AppMode::Summary => render_expanded(f, state, area),
    }
}

fn totals_line(state: &AppState) -> Line<'static> {
    let totals = state.selection.totals();
    let time = totals.normalized();

    Line::from(vec![
        Span::styled("Total: ", Styles::muted()),
        Span::styled(
            format!("BDT {}", format_bdt(totals.price_bdt)),
            Styles::title(),
        ),
        Span::raw("    "),
        Span::styled("Time: ", Styles::muted()),
        Span::styled(
            time.to_string(),
            Style::default().fg(Colors::FG_PRIMARY),
        ),
        Span::raw("    "),
        Span::styled(
            format!(
                "{} item{}",
                state.selection.len(),
                if state.selection.len() == 1 { "" } else { "s" }
            ),
            Styles::muted(),
        ),
    ])
}

fn render_collapsed(f: &mut Frame, state: &AppState, area: Rect) {
    let paragraph = Paragraph::new(totals_line(state)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Summary (s to expand) ")
            .border_style(Style::default().fg(Colors::BORDER_INACTIVE)),
    );
    f.render_widget(paragraph, area);
}

fn render_expanded(f: &mut Frame, state: &AppState, area: Rect) {
    let mut lines: Vec<ListItem> = Vec::new();

    if state.selection.is_empty() {
        lines.push(ListItem::new(Line::from(Span::styled(
            "Select items to build your estimate.",
            Styles::muted(),
        ))));
    } else {
        for entry in state.selection.entries() {
            let quantity = if entry.quantity > 1 {
                format!(" (x{})", entry.quantity)
            } else {
                String::new()
            };
            let extended = entry.price_bdt * u64::from(entry.quantity);
            lines.push(ListItem::new(Line::from(vec![
                Span::raw(format!("{}{}", entry.name, quantity)),
                Span::raw("  "),
                Span::styled(format_price(extended), Styles::price(extended)),
            ])));
        }
        lines.push(ListItem::new(Line::from("")));
        lines.push(ListItem::new(totals_line(state)));
    }

    let list = List::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Summary ")
            .title_style(Styles::title())
            .border_style(Style::default().fg(Colors::BORDER_ACTIVE)),
    );
    f.render_widget(list, area);
}
