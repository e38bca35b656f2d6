use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::App;
use crate::options::render_popup;

const FIELD_HEIGHT: u16 = 3;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let mut constraints = vec![Constraint::Length(1)];
        constraints.extend(self.fields.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
        constraints.push(Constraint::Min(0));
        constraints.push(Constraint::Length(1));

        let layout = Layout::vertical(constraints).split(frame.area());
        let header_area = layout[0];
        let status_area = layout[layout.len() - 1];
        let field_areas: Vec<Rect> = layout[1..=self.fields.len()].to_vec();

        self.render_header(frame, header_area);

        for (i, area) in field_areas.iter().enumerate() {
            self.render_field(frame, i, *area);
        }

        self.render_status(frame, status_area);

        // Popup last so it draws over the fields below it
        if let (Some(field), Some(area)) = (self.focused(), field_areas.get(self.focus)) {
            render_popup(&field.options, frame, *area);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                " kgcomplete ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {}", self.source_label),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_field(&mut self, frame: &mut Frame, index: usize, area: Rect) {
        let focused = index == self.focus;
        let Some(field) = self.fields.get_mut(index) else {
            return;
        };

        // Set border color based on focus
        let border_color = if focused { Color::Cyan } else { Color::DarkGray };

        let binding = field.binding();
        let mut title = format!(" {} · {} ", binding.label, binding.endpoint);
        if field.binder.is_pending() {
            title.push_str("… ");
        }

        let mut block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(border_color));

        if let Some(accepted) = &field.accepted {
            block = block.title_bottom(
                Line::from(format!(" {} ", accepted.text)).style(Style::default().fg(Color::Green)),
            );
        }

        field.textarea.set_block(block);

        // Only the focused field shows a cursor
        let cursor_style = if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        field.textarea.set_cursor_style(cursor_style);

        frame.render_widget(&field.textarea, area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let line = match &self.status {
            Some(status) => Line::from(Span::styled(
                format!(" {}", status),
                Style::default().fg(Color::Yellow),
            )),
            None => Line::from(Span::styled(
                " Tab: next field | ↑/↓: choose | Enter: accept | Esc: close/quit | Ctrl+C: quit",
                Style::default().fg(Color::DarkGray),
            )),
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
