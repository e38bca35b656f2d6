use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app_state::App;

impl App {
    /// Handle one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Paste(text) => self.handle_paste_event(text),
            _ => {}
        }
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }
        self.handle_field_key(key);
    }

    /// Returns true if the key was handled
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        match key.code {
            KeyCode::Esc => {
                match self.focused_mut() {
                    Some(field) if field.options.is_visible() => field.options.hide(),
                    _ => self.should_quit = true,
                }
                true
            }
            KeyCode::Tab => {
                self.focus_next();
                true
            }
            KeyCode::BackTab => {
                self.focus_previous();
                true
            }
            _ => false,
        }
    }

    fn handle_field_key(&mut self, key: KeyEvent) {
        let Some(field) = self.focused_mut() else {
            return;
        };

        match key.code {
            KeyCode::Down if field.options.is_visible() => field.options.select_next(),
            // Reopen a list hidden with Esc
            KeyCode::Down if !field.options.is_empty() => field.options.show(),
            KeyCode::Up if field.options.is_visible() => field.options.select_previous(),
            KeyCode::Enter => {
                if !field.accept_selected() {
                    self.focus_next();
                }
            }
            _ => {
                // Single-line fields: anything the textarea treats as an edit is an input event
                if field.textarea.input(key) {
                    field.on_edit();
                }
            }
        }
    }

    /// Insert pasted text into the focused field as one edit
    pub fn handle_paste_event(&mut self, text: String) {
        let Some(field) = self.focused_mut() else {
            return;
        };
        let line = text.replace(['\r', '\n'], " ");
        if field.textarea.insert_str(line) {
            field.on_edit();
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
