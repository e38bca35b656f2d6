use std::collections::BTreeMap;

use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::{CursorMove, TextArea};

use crate::binder::{AutocompleteBinder, FieldBinding};
use crate::config::Config;
use crate::options::OptionList;
use crate::suggestion::RenderedOption;
use crate::worker::WorkerHandle;

/// One bound input field with its suggestion list
pub struct FieldPane {
    pub binder: AutocompleteBinder,
    pub textarea: TextArea<'static>,
    pub options: OptionList,
    /// Option last accepted into this field, cleared on further typing
    pub accepted: Option<RenderedOption>,
}

impl FieldPane {
    pub fn new(binder: AutocompleteBinder) -> Self {
        let mut textarea = TextArea::default();

        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", binder.binding().label))
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        // Remove default underline from cursor line
        textarea.set_cursor_line_style(Style::default());

        let options = OptionList::new(binder.binding().list_id.clone());

        Self {
            binder,
            textarea,
            options,
            accepted: None,
        }
    }

    pub fn binding(&self) -> &FieldBinding {
        self.binder.binding()
    }

    /// Current text of the field
    pub fn value(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Replace the field's text without triggering a lookup
    pub fn set_value(&mut self, value: &str) {
        self.textarea.move_cursor(CursorMove::End);
        self.textarea.delete_line_by_head();
        self.textarea.insert_str(value);
    }

    /// Notify the binder that the text changed
    pub fn on_edit(&mut self) {
        self.accepted = None;
        let value = self.value().to_string();
        self.binder.on_input(&value);
    }

    /// Store the selected option's curie as the field value
    ///
    /// Returns false when no option is selected.
    pub fn accept_selected(&mut self) -> bool {
        let Some(option) = self.options.selected().cloned() else {
            return false;
        };
        self.set_value(&option.value);
        self.options.hide();
        self.accepted = Some(option);
        true
    }
}

/// Application state
pub struct App {
    pub fields: Vec<FieldPane>,
    pub focus: usize,
    pub should_quit: bool,
    /// Config warning or last notice shown in the status line
    pub status: Option<String>,
    /// Where suggestions come from, shown in the header
    pub source_label: String,
}

impl App {
    /// Bind every field to the shared worker
    pub fn new(
        bindings: Vec<FieldBinding>,
        worker: &WorkerHandle,
        config: &Config,
        source_label: String,
    ) -> Self {
        let fields = bindings
            .into_iter()
            .map(|binding| {
                let binder =
                    AutocompleteBinder::bind(binding, worker, config.autocomplete.ordering)
                        .with_top_n(config.server.top_n);
                FieldPane::new(binder)
            })
            .collect();

        Self {
            fields,
            focus: 0,
            should_quit: false,
            status: None,
            source_label,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn focused(&self) -> Option<&FieldPane> {
        self.fields.get(self.focus)
    }

    pub fn focused_mut(&mut self) -> Option<&mut FieldPane> {
        self.fields.get_mut(self.focus)
    }

    pub fn focus_next(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.hide_focused_options();
        self.focus = (self.focus + 1) % self.fields.len();
    }

    pub fn focus_previous(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.hide_focused_options();
        self.focus = if self.focus == 0 {
            self.fields.len() - 1
        } else {
            self.focus - 1
        };
    }

    fn hide_focused_options(&mut self) {
        if let Some(field) = self.focused_mut() {
            field.options.hide();
        }
    }

    /// Apply completed lookups for every field
    ///
    /// Returns true if any field's suggestions changed.
    pub fn poll_suggestions(&mut self) -> bool {
        let focus = self.focus;
        let mut changed = false;
        for (i, field) in self.fields.iter_mut().enumerate() {
            let outcome = field.binder.poll(&mut field.options);
            if outcome.applied > 0 {
                changed = true;
                // Only the focused field shows its popup
                if i != focus {
                    field.options.hide();
                }
            }
        }
        changed
    }

    /// Whether any field still waits for a lookup
    pub fn is_pending(&self) -> bool {
        self.fields.iter().any(|f| f.binder.is_pending())
    }

    /// Final value of every non-empty field, keyed by field id
    pub fn values(&self) -> BTreeMap<String, String> {
        self.fields
            .iter()
            .filter(|f| !f.value().trim().is_empty())
            .map(|f| (f.binding().field_id.clone(), f.value().trim().to_string()))
            .collect()
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
