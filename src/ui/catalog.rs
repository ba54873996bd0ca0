//! Catalog list rendering
//!
//! Renders the active group as a flat list: each top-level item followed
//! by its indented add-ons, with selection markers, prices, time labels,
//! and quantities. The notes of the highlighted row are shown in a
//! description strip below the list.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{AppState, RowId};
use crate::catalog::{format_price, CatalogItem};
use crate::selection::Selection;
use crate::theme::Styles;

/// Render the active catalog group in the given area.
pub fn render_group(f: &mut Frame, state: &AppState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // Item list
            Constraint::Length(3), // Notes for the highlighted row
        ])
        .split(area);

    let items = state.catalog.group(state.group);
    let rows = state.current_rows();

    let list_items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .map(|(index, row)| render_row(state, items, *row, index == state.cursor))
        .collect();

    let list = List::new(list_items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", state.group.title())),
    );
    f.render_widget(list, chunks[0]);

    render_notes(f, state, items, chunks[1]);
}

fn render_row<'a>(
    state: &AppState,
    items: &'a [CatalogItem],
    row: RowId,
    under_cursor: bool,
) -> ListItem<'a> {
    let item = &items[row.item];
    let (name, price, time, key, indent) = match row.add_on {
        None => (
            item.name.clone(),
            item.price_bdt,
            item.time(),
            Selection::entry_key(&item.name, None),
            "",
        ),
        Some(add_on_index) => {
            let add_on = &item.add_ons[add_on_index];
            (
                add_on.name.clone(),
                add_on.price_bdt,
                add_on.time(),
                Selection::entry_key(&add_on.name, Some(&item.name)),
                "   └ ",
            )
        }
    };

    let entry = state.selection.get(&key);
    let marker = if entry.is_some() { "[x]" } else { "[ ]" };

    let mut spans = vec![
        Span::raw(format!("{}{} ", indent, marker)),
        Span::styled(
            name,
            if entry.is_some() {
                Styles::selected()
            } else {
                Default::default()
            },
        ),
    ];

    if let Some(entry) = entry {
        if entry.quantity > 1 {
            spans.push(Span::styled(format!(" (x{})", entry.quantity), Styles::selected()));
        }
    }
    if row.add_on.is_none() && item.allow_quantity {
        spans.push(Span::styled("  +/-", Styles::muted()));
    }

    spans.push(Span::raw("  "));
    spans.push(Span::styled(format_price(price), Styles::price(price)));
    if let Some(time) = time {
        spans.push(Span::styled(format!("  {}", time.label()), Styles::muted()));
    }

    let line = Line::from(spans);
    if under_cursor {
        ListItem::new(line).style(Styles::cursor())
    } else {
        ListItem::new(line)
    }
}

fn render_notes(f: &mut Frame, state: &AppState, items: &[CatalogItem], area: Rect) {
    let notes = state
        .current_row()
        .map(|row| {
            let item = &items[row.item];
            match row.add_on {
                None => item.notes.clone(),
                Some(add_on_index) => item.add_ons[add_on_index].notes.clone(),
            }
        })
        .unwrap_or_default();

    let paragraph = Paragraph::new(notes)
        .style(Styles::muted())
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Notes "));
    f.render_widget(paragraph, area);
}
