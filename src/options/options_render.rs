//! Suggestion popup rendering
//!
//! Draws a field's option list in a popup next to the field.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use super::OptionList;
use crate::widgets::popup;

// Popup display constants
const MAX_VISIBLE_OPTIONS: usize = 10;
const MAX_POPUP_WIDTH: usize = 70;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const POPUP_OFFSET_X: u16 = 2;
const VALUE_SPACING: usize = 3;

/// Render `list` as a popup anchored to `field_area`
pub fn render_popup(list: &OptionList, frame: &mut Frame, field_area: Rect) {
    if !list.is_visible() {
        return;
    }

    let options = list.options();
    let first = visible_window_start(list.selected_index(), options.len());
    let window = &options[first..(first + MAX_VISIBLE_OPTIONS).min(options.len())];

    let visible_count = window.len();
    let popup_height = (visible_count as u16) + POPUP_BORDER_HEIGHT;

    let max_text_width = window.iter().map(|o| o.text.width()).max().unwrap_or(0);
    let max_value_width = window.iter().map(|o| o.value.width()).max().unwrap_or(0);
    let content_width = (max_text_width + VALUE_SPACING + max_value_width)
        .max(20)
        .min(MAX_POPUP_WIDTH);
    let popup_width = (content_width as u16) + POPUP_PADDING;

    let popup_area = popup::popup_near_anchor(
        field_area,
        popup_width,
        popup_height,
        POPUP_OFFSET_X,
        frame.area(),
    );
    if popup_area.height <= POPUP_BORDER_HEIGHT {
        return;
    }

    let items: Vec<ListItem> = window
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let padding = " ".repeat(max_text_width.saturating_sub(option.text.width()));

            let line = if first + i == list.selected_index() {
                Line::from(vec![
                    Span::styled(
                        format!("► {}{}", option.text, padding),
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("   {}", option.value),
                        Style::default().fg(Color::Black).bg(Color::Cyan),
                    ),
                ])
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("  {}{}", option.text, padding),
                        Style::default().fg(Color::White).bg(Color::Black),
                    ),
                    Span::styled(
                        format!("   {}", option.value),
                        Style::default().fg(Color::DarkGray).bg(Color::Black),
                    ),
                ])
            };

            ListItem::new(line)
        })
        .collect();

    // Clear the background area to prevent transparency
    popup::clear_area(frame, popup_area);

    let title = if options.len() > visible_count {
        format!(" Suggestions {}/{} ", list.selected_index() + 1, options.len())
    } else {
        " Suggestions ".to_string()
    };

    let list_widget = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(list_widget, popup_area);
}

/// First option index shown so the selection stays in view
fn visible_window_start(selected: usize, len: usize) -> usize {
    if len <= MAX_VISIBLE_OPTIONS || selected < MAX_VISIBLE_OPTIONS {
        return 0;
    }
    (selected + 1 - MAX_VISIBLE_OPTIONS).min(len - MAX_VISIBLE_OPTIONS)
}

#[cfg(test)]
#[path = "options_render_tests.rs"]
mod options_render_tests;
